//! Logging setup for the remote
//!
//! Everything goes to stderr: stdout carries the menu and the verbose
//! feedback lines, and BitBar parses all of it.

use std::io;

use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "SONOSBAR_LOG";

/// Level names accepted by `--log-level`
pub const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingMode {
    /// Compact single-line records
    Standard,
    /// Adds source locations
    Debug,
}

impl LoggingMode {
    pub fn for_level(level: &str) -> Self {
        match level.to_ascii_lowercase().as_str() {
            "debug" | "trace" => LoggingMode::Debug,
            _ => LoggingMode::Standard,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),

    #[error("Invalid log filter '{0}'")]
    InvalidFilter(String),
}

/// Install the global subscriber
///
/// `SONOSBAR_LOG` wins over `level` when set.
pub fn init_logging(level: &str) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = create_env_filter(std::env::var(LOG_ENV).ok().as_deref(), level)?;
    let layer = fmt::layer().with_writer(io::stderr).with_target(false);

    let result = match LoggingMode::for_level(level) {
        LoggingMode::Standard => Registry::default().with(layer.compact()).with(filter).try_init(),
        LoggingMode::Debug => Registry::default()
            .with(layer.with_file(true).with_line_number(true).compact())
            .with(filter)
            .try_init(),
    };
    result.map_err(|e| LoggingError::TracingInit(e.to_string()))
}

fn create_env_filter(directive: Option<&str>, default_level: &str) -> Result<EnvFilter, LoggingError> {
    let directive = directive.unwrap_or(default_level);
    EnvFilter::try_new(directive).map_err(|_| LoggingError::InvalidFilter(directive.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_for_level() {
        assert_eq!(LoggingMode::for_level("warn"), LoggingMode::Standard);
        assert_eq!(LoggingMode::for_level("DEBUG"), LoggingMode::Debug);
        assert_eq!(LoggingMode::for_level("trace"), LoggingMode::Debug);
    }

    #[test]
    fn test_env_directive_overrides_level() {
        let filter = create_env_filter(Some("sonos_api=debug"), "warn").unwrap();
        assert_eq!(filter.to_string(), "sonos_api=debug");

        let filter = create_env_filter(None, "info").unwrap();
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    fn test_invalid_directive() {
        assert!(matches!(
            create_env_filter(Some("sonos_api=loudest"), "warn"),
            Err(LoggingError::InvalidFilter(_))
        ));
    }
}
