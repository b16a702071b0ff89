//! Engine Configuration Settings
//!
//! Configuration types for the order engine, loaded from environment variables.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::infrastructure::broker::binance::BinanceEnvironment;

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "BINANCE_API_KEY";
/// Environment variable holding the API secret.
pub const API_SECRET_VAR: &str = "BINANCE_API_SECRET";
/// Environment variable selecting TESTNET or MAINNET.
pub const ENVIRONMENT_VAR: &str = "BINANCE_ENV";
/// Environment variable overriding `recvWindow` (milliseconds).
pub const RECV_WINDOW_VAR: &str = "BINANCE_RECV_WINDOW_MS";
/// Environment variable overriding the HTTP timeout (seconds).
pub const TIMEOUT_VAR: &str = "BINANCE_TIMEOUT_SECS";
/// Environment variable overriding the log file path.
pub const LOG_FILE_VAR: &str = "ORDER_ENGINE_LOG_FILE";

/// Exchange API credentials.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    /// Create new credentials.
    #[must_use]
    pub const fn new(api_key: String, api_secret: String) -> Self {
        Self {
            api_key,
            api_secret,
        }
    }

    /// Get the API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the API secret.
    #[must_use]
    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }

    /// True when either half is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.api_key.is_empty() || self.api_secret.is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Request timing settings.
#[derive(Debug, Clone)]
pub struct RequestSettings {
    /// Validity window the exchange allows for a signed request.
    pub recv_window: Duration,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl Default for RequestSettings {
    fn default() -> Self {
        Self {
            recv_window: Duration::from_millis(5000),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Default log file, appended to across runs.
pub const DEFAULT_LOG_FILE: &str = "bot.log";

/// Complete engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Exchange environment.
    pub environment: BinanceEnvironment,
    /// API credentials.
    pub credentials: Credentials,
    /// Request timing.
    pub request: RequestSettings,
}

impl EngineConfig {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are missing or empty, or if
    /// `BINANCE_ENV` names an unknown environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = required(&lookup, API_KEY_VAR)?;
        let api_secret = required(&lookup, API_SECRET_VAR)?;

        let environment = match lookup(ENVIRONMENT_VAR) {
            Some(value) if !value.trim().is_empty() => value
                .parse::<BinanceEnvironment>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: ENVIRONMENT_VAR.to_string(),
                    value,
                })?,
            _ => BinanceEnvironment::default(),
        };

        let defaults = RequestSettings::default();
        let request = RequestSettings {
            recv_window: parse_duration(
                &lookup,
                RECV_WINDOW_VAR,
                defaults.recv_window,
                Duration::from_millis,
            ),
            timeout: parse_duration(&lookup, TIMEOUT_VAR, defaults.timeout, Duration::from_secs),
        };

        Ok(Self {
            environment,
            credentials: Credentials::new(api_key, api_secret),
            request,
        })
    }
}

/// Log file path from the environment, or [`DEFAULT_LOG_FILE`].
#[must_use]
pub fn log_file_from_env() -> PathBuf {
    std::env::var(LOG_FILE_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_LOG_FILE), PathBuf::from)
}

/// Result of looking for a `.env` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DotenvStatus {
    /// Variables were loaded from this file.
    Loaded(PathBuf),
    /// No file was found; only the process environment applies.
    NotFound,
    /// A file exists but could not be read or parsed.
    Invalid(String),
}

/// Load `.env` from the working directory or its ancestors.
///
/// Variables already set in the process environment win.
pub fn load_dotenv() -> DotenvStatus {
    dotenv_status(dotenvy::dotenv())
}

/// Load a specific env file.
pub fn load_dotenv_from(path: &Path) -> DotenvStatus {
    dotenv_status(dotenvy::from_path(path).map(|()| path.to_path_buf()))
}

fn dotenv_status(result: dotenvy::Result<PathBuf>) -> DotenvStatus {
    match result {
        Ok(path) => DotenvStatus::Loaded(path),
        Err(e) if e.not_found() => DotenvStatus::NotFound,
        Err(e) => DotenvStatus::Invalid(e.to_string()),
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// Environment variable has empty value.
    #[error("environment variable {0} cannot be empty")]
    EmptyValue(String),
    /// Environment variable has a value that cannot be used.
    #[error("environment variable {key} has invalid value '{value}'")]
    InvalidValue {
        /// Variable name.
        key: String,
        /// Rejected value.
        value: String,
    },
}

fn required<F>(lookup: &F, key: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))?;
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(ConfigError::EmptyValue(key.to_string()));
    }
    Ok(value)
}

fn parse_duration<F>(
    lookup: &F,
    key: &str,
    default: Duration,
    unit: fn(u64) -> Duration,
) -> Duration
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .map_or(default, unit)
}
