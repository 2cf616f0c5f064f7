use super::ServerConfig;
use crate::errors::Error;
use std::fs;

/// Loads the server configuration.
///
/// Values come from, in increasing priority: built-in defaults, the YAML
/// file at `file_path` when given, then the `DATABASE_PATH` environment
/// variable. CLI flags are applied on top by the caller.
///
/// # Errors
///
/// Returns an error if:
/// * The file cannot be read
/// * The YAML content cannot be parsed into a ServerConfig
pub fn load_server_config(file_path: Option<&str>) -> Result<ServerConfig, Error> {
    let mut config = match file_path {
        Some(path) => {
            let yaml_str = fs::read_to_string(path)?;
            parse_server_config(&yaml_str)?
        }
        None => ServerConfig::default(),
    };

    if let Ok(database_path) = std::env::var("DATABASE_PATH") {
        config.database_path = database_path;
    }

    Ok(config)
}

fn parse_server_config(yaml_str: &str) -> Result<ServerConfig, Error> {
    if yaml_str.trim().is_empty() {
        return Ok(ServerConfig::default());
    }
    Ok(serde_yaml::from_str(yaml_str)?)
}
