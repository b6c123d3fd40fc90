//! Runtime configuration: command line plus environment overrides

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::cli::Args;
use crate::logging::LEVELS;
use crate::menu::MenuConfig;

pub const DISCOVERY_TIMEOUT_ENV: &str = "SONOSBAR_DISCOVERY_TIMEOUT";
pub const SELF_PATH_ENV: &str = "SONOSBAR_SELF_PATH";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {name} environment variable: '{value}'")]
    InvalidEnv { name: &'static str, value: String },

    #[error("Discovery timeout must be positive")]
    ZeroTimeout,

    #[error("Invalid log level '{0}'. Valid levels: error, warn, info, debug, trace")]
    InvalidLogLevel(String),

    #[error("Cannot determine the path of this program")]
    SelfPath(#[source] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub discovery_timeout: Duration,
    pub log_level: String,
    /// Program the menu's commands re-invoke
    pub self_path: PathBuf,
}

impl Config {
    /// Combine parsed arguments with overrides read through `env`
    ///
    /// `SONOSBAR_LOG` is not read here; it is an `EnvFilter` directive and
    /// is applied when logging starts.
    pub fn from_args<F>(args: &Args, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut discovery_timeout = args.discovery_timeout;
        if let Some(value) = env(DISCOVERY_TIMEOUT_ENV) {
            discovery_timeout = value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                name: DISCOVERY_TIMEOUT_ENV,
                value,
            })?;
        }
        if discovery_timeout == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        let log_level = args.log_level.to_lowercase();
        if !LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(args.log_level.clone()));
        }

        let self_path = match (&args.self_path, env(SELF_PATH_ENV)) {
            (Some(path), _) => path.clone(),
            (None, Some(path)) => PathBuf::from(path),
            (None, None) => std::env::current_exe().map_err(ConfigError::SelfPath)?,
        };

        Ok(Self {
            discovery_timeout: Duration::from_secs(discovery_timeout),
            log_level,
            self_path,
        })
    }

    /// Read overrides from the process environment
    pub fn from_env(args: &Args) -> Result<Self, ConfigError> {
        Self::from_args(args, |name| std::env::var(name).ok())
    }

    pub fn menu(&self) -> MenuConfig {
        MenuConfig {
            program: self.self_path.clone(),
        }
    }
}
