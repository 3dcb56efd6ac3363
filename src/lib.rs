pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{Settings, SupabaseConfig, TomlConfig};
pub use core::client::{create_client, shared, ClientPair, SupabaseClient};
pub use core::profiles::{fetch_all, fetch_profiles, PROFILES_TABLE};
pub use domain::model::{KeyRole, PostgrestError, PostgrestResponse, Row};
pub use domain::ports::TableSource;
pub use utils::error::{Result, SupabaseError};
