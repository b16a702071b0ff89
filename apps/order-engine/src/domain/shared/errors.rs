//! Validation errors for strategy inputs and order requests.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::order_execution::value_objects::OrderType;

/// Input rejected before any exchange call.
///
/// Each variant names the first constraint that failed. A run that hits
/// one of these places no orders.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Symbol is empty or malformed.
    #[error("Invalid symbol '{symbol}': {reason}")]
    InvalidSymbol {
        /// The rejected input.
        symbol: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Side is not BUY or SELL.
    #[error("Invalid side '{0}': expected BUY or SELL")]
    InvalidSide(String),

    /// A quantity, price, count or duration is zero or negative.
    #[error("'{field}' must be greater than zero (got {value})")]
    NotPositive {
        /// Field name.
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// Ladder upper bound does not exceed the lower bound.
    #[error("price_high ({high}) must be greater than price_low ({low})")]
    InvertedPriceRange {
        /// Lower bound.
        low: Decimal,
        /// Upper bound.
        high: Decimal,
    },

    /// Ladder needs at least two levels to form a step.
    #[error("grid_count must be greater than 1 (got {0})")]
    TooFewGridLevels(i64),

    /// Value is positive but does not fit the engine's representation.
    #[error("'{field}' is out of range (got {value})")]
    OutOfRange {
        /// Field name.
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// Order type requires a field that was not supplied.
    #[error("{order_type} order requires '{field}'")]
    MissingField {
        /// Order type being built.
        order_type: OrderType,
        /// Missing field.
        field: &'static str,
    },

    /// Order type does not use a field that was supplied.
    #[error("{order_type} order does not accept '{field}'")]
    UnexpectedField {
        /// Order type being built.
        order_type: OrderType,
        /// Unexpected field.
        field: &'static str,
    },
}

impl ValidationError {
    /// Build a [`ValidationError::NotPositive`] for `field`.
    pub fn not_positive(field: &'static str, value: impl ToString) -> Self {
        Self::NotPositive {
            field,
            value: value.to_string(),
        }
    }

    /// Machine-readable constraint code.
    #[must_use]
    pub const fn constraint(&self) -> &'static str {
        match self {
            Self::InvalidSymbol { .. } => "INVALID_SYMBOL",
            Self::InvalidSide(_) => "INVALID_SIDE",
            Self::NotPositive { .. } => "NOT_POSITIVE",
            Self::InvertedPriceRange { .. } => "INVERTED_PRICE_RANGE",
            Self::TooFewGridLevels(_) => "TOO_FEW_GRID_LEVELS",
            Self::OutOfRange { .. } => "OUT_OF_RANGE",
            Self::MissingField { .. } => "MISSING_FIELD",
            Self::UnexpectedField { .. } => "UNEXPECTED_FIELD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_positive_display_names_field() {
        let err = ValidationError::not_positive("quantity", "-1");
        let msg = err.to_string();
        assert!(msg.contains("quantity"));
        assert!(msg.contains("-1"));
        assert_eq!(err.constraint(), "NOT_POSITIVE");
    }

    #[test]
    fn inverted_range_display() {
        let err = ValidationError::InvertedPriceRange {
            low: Decimal::new(110, 0),
            high: Decimal::new(100, 0),
        };
        assert_eq!(
            err.to_string(),
            "price_high (100) must be greater than price_low (110)"
        );
    }

    #[test]
    fn missing_field_display() {
        let err = ValidationError::MissingField {
            order_type: OrderType::StopMarket,
            field: "stop_price",
        };
        assert_eq!(err.to_string(), "STOP_MARKET order requires 'stop_price'");
        assert_eq!(err.constraint(), "MISSING_FIELD");
    }

    #[test]
    fn invalid_side_display() {
        let err = ValidationError::InvalidSide("HOLD".to_string());
        assert_eq!(err.to_string(), "Invalid side 'HOLD': expected BUY or SELL");
    }

    #[test]
    fn validation_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ValidationError::TooFewGridLevels(1));
        assert!(!err.to_string().is_empty());
    }
}
