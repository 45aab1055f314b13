use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub registration: RegistrationConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

/// Settings for the registration flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationConfig {
    /// Delay of the simulated registration call, in milliseconds (default: 500).
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay_ms(),
        }
    }
}

/// Settings for the profile display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Display name used before a registration has completed (default: "Guest").
    #[serde(default = "default_username")]
    pub default_username: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            default_username: default_username(),
        }
    }
}

fn default_submit_delay_ms() -> u64 {
    500
}

fn default_username() -> String {
    "Guest".to_string()
}
