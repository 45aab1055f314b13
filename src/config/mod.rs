//! Application configuration: TOML file under the platform config
//! directory, with defaults when absent.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, ProfileConfig, RegistrationConfig};
