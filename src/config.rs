// Environment configuration

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Runtime configuration, read once at startup. `JWT_PRIVATE_KEY` is the
/// session-token signing secret; rotating it invalidates all outstanding
/// tokens.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_uri: String,
    pub db_name: String,
    pub jwt_private_key: String,
    pub host: String,
    pub port: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            db_uri: require("DB_URI")?,
            db_name: require("DB_NAME")?,
            jwt_private_key: require("JWT_PRIVATE_KEY")?,
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT").unwrap_or_else(|_| "4000".to_string()),
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}
