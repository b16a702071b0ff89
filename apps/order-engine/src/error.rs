//! Errors that end a run before or instead of execution.
//!
//! Per-order exchange failures are not here: they are recorded in the run
//! result and the run continues. These variants abort the process.
//!
//! | Exit code | Meaning |
//! |-----------|---------|
//! | 0 | Every order placed (or dry-run plan printed) |
//! | 1 | At least one order failed, or an unexpected error |
//! | 2 | Configuration or exchange client setup failed |
//! | 3 | Strategy input rejected by validation |

use thiserror::Error;

use crate::domain::shared::ValidationError;
use crate::infrastructure::broker::BinanceError;
use crate::infrastructure::config::ConfigError;

/// Exit code for a run in which some order failed.
pub const EXIT_ORDER_FAILED: u8 = 1;
/// Exit code for configuration and client setup errors.
pub const EXIT_CONFIG: u8 = 2;
/// Exit code for rejected strategy input.
pub const EXIT_VALIDATION: u8 = 3;

/// Fatal engine error.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Strategy input rejected.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Environment configuration missing or malformed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Exchange client could not be constructed.
    #[error("Exchange client setup failed: {0}")]
    ExchangeSetup(#[from] BinanceError),
}

impl EngineError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => EXIT_VALIDATION,
            Self::Config(_) | Self::ExchangeSetup(_) => EXIT_CONFIG,
        }
    }
}
