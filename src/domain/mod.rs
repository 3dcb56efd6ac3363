// Domain layer: models and ports. No knowledge of HTTP or configuration sources.

pub mod model;
pub mod ports;
