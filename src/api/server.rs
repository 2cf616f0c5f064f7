use crate::api::routes;
use crate::config::ServerConfig;
use crate::db::Database;
use crate::errors::Error;
use tracing::{info, warn};

/// Starts and runs the HTTP server using Axum web framework
///
/// Opens the database pool, creates the tables if needed, then serves the
/// router until Ctrl-C is received.
///
/// # Errors
/// Returns an Error if the database cannot be opened, the configured
/// timeout is invalid, or the listener cannot be bound.
pub async fn launch_server(config: ServerConfig) -> Result<(), Error> {
    let database = Database::new(
        &config.database_path,
        config.pool_size,
        config.connection_timeout()?,
    )?;

    let app = routes::app(database);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
