//! Binance-specific error types.

use thiserror::Error;

use crate::application::ports::ExchangeError;

/// Exchange codes that mean the key, secret or signature was refused.
pub const AUTH_ERROR_CODES: &[i64] = &[
    -1022, // Signature for this request is not valid
    -2014, // API-key format invalid
    -2015, // Invalid API-key, IP, or permissions for action
];

/// Errors from the Binance adapter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BinanceError {
    /// Transport failure.
    #[error("HTTP error: {0}")]
    Http(String),

    /// API returned an error body.
    #[error("API error {code} (HTTP {status}): {message}")]
    Api {
        /// HTTP status.
        status: u16,
        /// Exchange error code.
        code: i64,
        /// Exchange error message.
        message: String,
    },

    /// Authentication failed.
    #[error("Authentication failed ({code}): {message}")]
    AuthenticationFailed {
        /// Exchange error code, or HTTP status when the body had none.
        code: i64,
        /// Error message.
        message: String,
    },

    /// Rate limited and out of retries.
    #[error("Rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Suggested retry delay in seconds.
        retry_after_secs: u64,
    },

    /// Max retries exceeded.
    #[error("Max retries exceeded after {attempts} attempts")]
    MaxRetriesExceeded {
        /// Number of attempts made before giving up.
        attempts: u32,
    },

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(String),

    /// Request could not be signed.
    #[error("Signing error: {0}")]
    Signing(String),

    /// Key or secret is empty.
    #[error("API key and secret are required")]
    MissingCredentials,
}

impl BinanceError {
    /// Classify an error body returned with a non-retryable status.
    #[must_use]
    pub fn from_api(status: u16, code: i64, message: String) -> Self {
        if status == 401 || status == 403 || AUTH_ERROR_CODES.contains(&code) {
            Self::AuthenticationFailed { code, message }
        } else {
            Self::Api {
                status,
                code,
                message,
            }
        }
    }
}

impl From<BinanceError> for ExchangeError {
    fn from(err: BinanceError) -> Self {
        match err {
            BinanceError::Http(message) => Self::Connection { message },
            BinanceError::Api { code, message, .. } => Self::Rejected { code, message },
            BinanceError::AuthenticationFailed { code, message } => {
                Self::Authentication { code, message }
            }
            BinanceError::RateLimited { retry_after_secs } => {
                Self::RateLimited { retry_after_secs }
            }
            BinanceError::MaxRetriesExceeded { attempts } => Self::MaxRetriesExceeded { attempts },
            BinanceError::JsonParse(message) => Self::InvalidResponse { message },
            err @ (BinanceError::Signing(_) | BinanceError::MissingCredentials) => {
                Self::Authentication {
                    code: 401,
                    message: err.to_string(),
                }
            }
        }
    }
}
