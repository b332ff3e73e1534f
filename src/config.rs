//! Service configuration
//!
//! Loaded from an optional `loyalty.toml` file, then overridden by `LOYALTY__*` environment
//! variables, with `__` separating nested keys (e.g. `LOYALTY__LOGGING__LEVEL=debug`).

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit one JSON object per line instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AuthConfig {
    /// Clients allowed to call the service
    #[serde(default)]
    pub clients: Vec<ApiClient>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiClient {
    pub name: String,
    pub token: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("loyalty").required(false))
            .add_source(Environment::with_prefix("LOYALTY").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Parse a TOML document, without looking at files or the environment
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.clients.is_empty() {
            return Err(ConfigError::Invalid("auth.clients must not be empty".into()));
        }
        if let Some(client) = self.auth.clients.iter().find(|c| c.token.is_empty()) {
            return Err(ConfigError::Invalid(
                format!("auth client {} has an empty token", client.name).into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration loading failed: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(std::borrow::Cow<'static, str>),
}
