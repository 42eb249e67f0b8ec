//! API configuration
//!
//! Read from `API_`-prefixed environment variables; anything unset keeps its
//! default.

use serde::Deserialize;

/// Which store backs the operations components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Postgres,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log filter directive, e.g. `info` or `interface_api=debug`
    pub log_level: String,
    pub log_format: LogFormat,
    pub storage: StorageBackend,
    /// Database URL, used when `storage` is `postgres`
    pub database_url: String,
    pub db_max_connections: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            storage: StorageBackend::Memory,
            database_url: "postgres://localhost/insurance".to_string(),
            db_max_connections: 10,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    ///
    /// A variable that is set but does not parse is an error; it never
    /// falls back to the default.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::with_prefix("API"))
    }

    fn from_environment(env: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
