//! Main entry point for the application.
//!
//! Parses the command line, loads `.env` and the optional YAML configuration,
//! initializes logging and serves the HTTP API until Ctrl-C.

use clap::Parser;
use dealership::{api, cli, config, utils};
use tracing::{error, info, warn};

/// Main entry point that initializes and runs the application.
///
/// # Initialization steps:
/// 1. Parse CLI arguments
/// 2. Load environment variables
/// 3. Load configuration and apply CLI overrides
/// 4. Initialize logging system
/// 5. Start API server
#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    let dotenv_result = dotenvy::dotenv();

    let mut server_config = match config::load_server_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    cli.apply(&mut server_config);

    if let Err(e) = utils::init_logging(&server_config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = dotenv_result {
        warn!("Failed to load .env file: {}", e);
    }

    info!(
        "Starting API server on {}:{}",
        server_config.host, server_config.port
    );
    if let Err(e) = api::server::launch_server(server_config).await {
        error!("Failed to start server: {}", e);
        std::process::exit(1);
    }
}
