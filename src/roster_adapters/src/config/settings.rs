//! Service configuration, layered from an optional `configuration.toml` file
//! and `ROSTER__`-prefixed environment variables.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

impl Settings {
    /// Load settings, later sources overriding earlier ones:
    /// `configuration.toml` (optional), then environment variables such as
    /// `ROSTER__DATABASE__URL`.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("application.host", "0.0.0.0")?
            .set_default("application.port", 3000_i64)?
            .add_source(config::File::with_name("configuration").required(false))
            .add_source(
                config::Environment::with_prefix("ROSTER")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}
