pub mod client;
pub mod profiles;
pub mod query;

pub use crate::domain::model::{KeyRole, PostgrestError, PostgrestResponse, Row};
pub use crate::domain::ports::TableSource;
pub use crate::utils::error::Result;
