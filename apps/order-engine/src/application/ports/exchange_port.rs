//! Exchange Port (Driven Port)
//!
//! Interface for submitting single orders to a derivatives exchange.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::order_execution::{OrderRequest, OrderSide, OrderType, TimeInForce};
use crate::domain::shared::Symbol;

/// Exchange acknowledgment of an accepted order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Exchange-assigned order ID.
    pub order_id: i64,
    /// Client order ID sent with the request.
    pub client_order_id: String,
    /// Instrument.
    pub symbol: Symbol,
    /// Side.
    pub side: OrderSide,
    /// Order type.
    pub order_type: OrderType,
    /// Order status reported by the exchange (e.g. `NEW`).
    pub status: String,
    /// Original quantity.
    pub quantity: Decimal,
    /// Limit price (zero for market-style orders).
    pub price: Decimal,
    /// Trigger price (zero when unused).
    pub stop_price: Decimal,
    /// Time in force.
    pub time_in_force: Option<TimeInForce>,
    /// Last update time.
    pub update_time: DateTime<Utc>,
    /// Unmodified response body.
    pub raw: serde_json::Value,
}

/// Exchange port error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExchangeError {
    /// The exchange refused the order.
    #[error("Order rejected ({code}): {message}")]
    Rejected {
        /// Exchange error code.
        code: i64,
        /// Exchange error message.
        message: String,
    },

    /// Credentials or signature were not accepted.
    #[error("Authentication failed ({code}): {message}")]
    Authentication {
        /// Exchange error code (or HTTP status).
        code: i64,
        /// Exchange error message.
        message: String,
    },

    /// Request weight or order rate limit hit.
    #[error("Rate limited by exchange, retry after {retry_after_secs}s")]
    RateLimited {
        /// Suggested wait before retrying.
        retry_after_secs: u64,
    },

    /// Transport failure before a response was received.
    #[error("Exchange connection error: {message}")]
    Connection {
        /// Error details.
        message: String,
    },

    /// Retryable failures persisted through every attempt.
    #[error("Max retries exceeded after {attempts} attempts")]
    MaxRetriesExceeded {
        /// Attempts made.
        attempts: u32,
    },

    /// Response could not be interpreted.
    #[error("Invalid exchange response: {message}")]
    InvalidResponse {
        /// Error details.
        message: String,
    },
}

impl ExchangeError {
    /// Machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Rejected { .. } => "REJECTED",
            Self::Authentication { .. } => "AUTHENTICATION",
            Self::RateLimited { .. } => "RATE_LIMITED",
            Self::Connection { .. } => "CONNECTION",
            Self::MaxRetriesExceeded { .. } => "MAX_RETRIES_EXCEEDED",
            Self::InvalidResponse { .. } => "INVALID_RESPONSE",
        }
    }

    /// Numeric code reported by the exchange, if any.
    #[must_use]
    pub const fn exchange_code(&self) -> Option<i64> {
        match self {
            Self::Rejected { code, .. } | Self::Authentication { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Port for exchange order submission.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExchangeClient: Send + Sync {
    /// Submit one order.
    async fn submit(&self, request: &OrderRequest) -> Result<OrderConfirmation, ExchangeError>;
}
