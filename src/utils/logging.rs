use crate::config::LoggingConfig;
use crate::errors::Error;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialize the logging system from the logging configuration.
///
/// Logs always go to stdout. When `to_file` is set they are also written to
/// daily rotating files named `dealership.log.<date>` under `directory`.
///
/// # Errors
///
/// Returns an Error if the log directory cannot be created or a global
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), Error> {
    let filter = build_filter(&config.level);

    let stdout_layer = fmt::layer().with_line_number(true).with_file(config.to_file);

    if config.to_file {
        let file_appender = build_file_appender(&config.directory)?;

        let file_layer = fmt::layer()
            .with_line_number(true)
            .with_ansi(false)
            .with_writer(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(stdout_layer)
            .with(file_layer)
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stdout_layer)
            .try_init()?;
    }
    Ok(())
}

fn build_file_appender(directory: &str) -> Result<RollingFileAppender, Error> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("dealership.log")
        .build(directory)?;
    Ok(appender)
}

fn build_filter(log_level: &str) -> EnvFilter {
    match EnvFilter::try_new(log_level) {
        Ok(f) => f,
        Err(_) => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", log_level);
            EnvFilter::new("info")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_level_falls_back_to_info() {
        assert_eq!(build_filter("dealership=verbose").to_string(), "info");
        assert_eq!(build_filter("debug").to_string(), "debug");
    }

    #[test]
    fn unusable_log_directory_is_an_error() {
        let config = LoggingConfig {
            to_file: true,
            directory: "/proc/dealership-logs/nested".to_string(),
            ..LoggingConfig::default()
        };

        assert!(matches!(
            init_logging(&config),
            Err(Error::LogInitError(_))
        ));
    }
}
