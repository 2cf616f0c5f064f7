use crate::config::ServerConfig;
use clap::Parser;

/// Command line interface for the application
#[derive(Parser, Debug)]
#[command(name = "dealership", about = "REST backend for cars, clients and sales orders")]
pub struct Cli {
    /// Path to an optional YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Address to bind the HTTP server to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind the HTTP server to
    #[arg(short, long)]
    pub port: Option<u16>,

    /// SQLite database file, use ":memory:" for a throwaway database
    #[arg(long)]
    pub database_path: Option<String>,

    /// Sets the logging verbosity level for the application
    /// Possible values: "error", "warn", "info", "debug", "trace"
    #[arg(long)]
    pub logging_level: Option<String>,

    /// Also write logs to a daily rotating file
    #[arg(long, default_value_t = false)]
    pub log_to_file: bool,
}

impl Cli {
    /// Overrides `config` with every flag given on the command line
    pub fn apply(&self, config: &mut ServerConfig) {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(database_path) = &self.database_path {
            config.database_path = database_path.clone();
        }
        if let Some(level) = &self.logging_level {
            config.logging.level = level.clone();
        }
        if self.log_to_file {
            config.logging.to_file = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_loaded_config() {
        let cli = Cli::try_parse_from([
            "dealership",
            "--port",
            "8081",
            "--database-path",
            ":memory:",
            "--log-to-file",
        ])
        .unwrap();

        let mut config = ServerConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.port, 8081);
        assert_eq!(config.database_path, ":memory:");
        assert!(config.logging.to_file);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.logging.level, "info");
    }
}
