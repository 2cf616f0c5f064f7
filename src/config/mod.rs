mod parser;

use crate::constants::*;
use crate::errors::Error;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub use parser::load_server_config;

/// Runtime configuration of the HTTP server
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds to
    pub host: String,
    /// Port the listener binds to
    pub port: u16,
    /// Path of the SQLite database file, or `:memory:`
    pub database_path: String,
    /// Maximum number of pooled connections
    pub pool_size: u32,
    /// How long to wait for a free connection, e.g. "30s" or "500ms"
    pub connection_timeout: String,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            pool_size: DEFAULT_POOL_SIZE,
            connection_timeout: DEFAULT_CONNECTION_TIMEOUT.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Parses `connection_timeout` as a human readable duration
    pub fn connection_timeout(&self) -> Result<Duration, Error> {
        humantime::parse_duration(&self.connection_timeout).map_err(|source| {
            Error::DurationError {
                value: self.connection_timeout.clone(),
                source,
            }
        })
    }
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive such as "info" or "dealership=debug"
    pub level: String,
    /// Whether to also write to a daily rotating file
    pub to_file: bool,
    /// Directory of the rotating log files
    pub directory: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            to_file: false,
            directory: DEFAULT_LOG_DIRECTORY.to_string(),
        }
    }
}
