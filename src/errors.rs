use diesel::result::Error as DieselError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Diesel error: {0}")]
    DieselError(#[from] DieselError),
    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),
    #[error("Blocking task failed: {0}")]
    JoinError(#[from] tokio::task::JoinError),
    #[error("Config error: {0}")]
    ConfigError(#[from] serde_yaml::Error),
    #[error("Invalid duration '{value}': {source}")]
    DurationError {
        value: String,
        source: humantime::DurationError,
    },
    #[error("Log file error: {0}")]
    LogInitError(#[from] tracing_appender::rolling::InitError),
    #[error("Logging already initialized: {0}")]
    LogSubscriberError(#[from] tracing_subscriber::util::TryInitError),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
