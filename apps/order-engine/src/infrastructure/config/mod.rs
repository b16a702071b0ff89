//! Configuration
//!
//! Credentials and request settings, read from the process environment
//! after an optional `.env` file is applied.

mod settings;

pub use settings::{
    ConfigError, Credentials, DEFAULT_LOG_FILE, DotenvStatus, EngineConfig, RequestSettings,
    load_dotenv, load_dotenv_from, log_file_from_env,
};
