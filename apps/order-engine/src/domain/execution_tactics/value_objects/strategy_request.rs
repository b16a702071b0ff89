//! Raw, unvalidated strategy inputs as received from a front end.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Strategy variants supported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Single market order.
    Market,
    /// Single GTC limit order.
    Limit,
    /// Single GTC stop-limit order.
    StopLimit,
    /// Take-profit and stop-market exit pair.
    Bracket,
    /// Equal market slices spread over a time window.
    TimeSliced,
    /// Limit orders at evenly spaced price levels.
    PriceLadder,
}

impl StrategyKind {
    /// Short name used in logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "market",
            Self::Limit => "limit",
            Self::StopLimit => "stop_limit",
            Self::Bracket => "bracket",
            Self::TimeSliced => "twap",
            Self::PriceLadder => "grid",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trading intent before validation.
///
/// Text and numbers are kept as the caller supplied them; signed integer
/// counts let the validator report "must be greater than zero" instead of
/// the front end failing to parse a negative number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum StrategyRequest {
    /// Market order.
    Market {
        /// Instrument.
        symbol: String,
        /// BUY or SELL.
        side: String,
        /// Order quantity.
        quantity: Decimal,
    },
    /// Limit order.
    Limit {
        /// Instrument.
        symbol: String,
        /// BUY or SELL.
        side: String,
        /// Order quantity.
        quantity: Decimal,
        /// Limit price.
        price: Decimal,
    },
    /// Stop-limit order.
    StopLimit {
        /// Instrument.
        symbol: String,
        /// BUY or SELL.
        side: String,
        /// Order quantity.
        quantity: Decimal,
        /// Trigger price.
        stop_price: Decimal,
        /// Limit price once triggered.
        limit_price: Decimal,
    },
    /// Take-profit / stop-loss pair closing a position opened on `side`.
    Bracket {
        /// Instrument.
        symbol: String,
        /// Side of the position being protected.
        side: String,
        /// Quantity of each leg.
        quantity: Decimal,
        /// Take-profit trigger and limit price.
        take_profit_price: Decimal,
        /// Stop-loss trigger price.
        stop_price: Decimal,
    },
    /// TWAP execution.
    TimeSliced {
        /// Instrument.
        symbol: String,
        /// BUY or SELL.
        side: String,
        /// Total quantity across all slices.
        quantity: Decimal,
        /// Execution window in seconds.
        duration_secs: i64,
        /// Number of slices.
        intervals: i64,
    },
    /// Grid placement.
    PriceLadder {
        /// Instrument.
        symbol: String,
        /// BUY or SELL.
        side: String,
        /// Quantity per level.
        quantity: Decimal,
        /// Lowest level price.
        price_low: Decimal,
        /// Highest level price.
        price_high: Decimal,
        /// Number of levels.
        grid_count: i64,
    },
}

impl StrategyRequest {
    /// Strategy variant of this request.
    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        match self {
            Self::Market { .. } => StrategyKind::Market,
            Self::Limit { .. } => StrategyKind::Limit,
            Self::StopLimit { .. } => StrategyKind::StopLimit,
            Self::Bracket { .. } => StrategyKind::Bracket,
            Self::TimeSliced { .. } => StrategyKind::TimeSliced,
            Self::PriceLadder { .. } => StrategyKind::PriceLadder,
        }
    }

    /// Raw symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        match self {
            Self::Market { symbol, .. }
            | Self::Limit { symbol, .. }
            | Self::StopLimit { symbol, .. }
            | Self::Bracket { symbol, .. }
            | Self::TimeSliced { symbol, .. }
            | Self::PriceLadder { symbol, .. } => symbol,
        }
    }

    /// Raw side.
    #[must_use]
    pub fn side(&self) -> &str {
        match self {
            Self::Market { side, .. }
            | Self::Limit { side, .. }
            | Self::StopLimit { side, .. }
            | Self::Bracket { side, .. }
            | Self::TimeSliced { side, .. }
            | Self::PriceLadder { side, .. } => side,
        }
    }

    /// Raw quantity.
    #[must_use]
    pub const fn quantity(&self) -> Decimal {
        match self {
            Self::Market { quantity, .. }
            | Self::Limit { quantity, .. }
            | Self::StopLimit { quantity, .. }
            | Self::Bracket { quantity, .. }
            | Self::TimeSliced { quantity, .. }
            | Self::PriceLadder { quantity, .. } => *quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn kind_matches_variant() {
        let request = StrategyRequest::PriceLadder {
            symbol: "BTCUSDT".to_string(),
            side: "BUY".to_string(),
            quantity: dec!(0.01),
            price_low: dec!(100),
            price_high: dec!(110),
            grid_count: 5,
        };
        assert_eq!(request.kind(), StrategyKind::PriceLadder);
        assert_eq!(request.symbol(), "BTCUSDT");
        assert_eq!(request.side(), "BUY");
        assert_eq!(request.quantity(), dec!(0.01));
    }

    #[test]
    fn kind_display() {
        assert_eq!(StrategyKind::TimeSliced.to_string(), "twap");
        assert_eq!(StrategyKind::PriceLadder.to_string(), "grid");
        assert_eq!(StrategyKind::StopLimit.to_string(), "stop_limit");
    }

    #[test]
    fn request_deserializes_from_tagged_json() {
        let json = r#"{
            "strategy": "time_sliced",
            "symbol": "ethusdt",
            "side": "sell",
            "quantity": "10",
            "duration_secs": 100,
            "intervals": 5
        }"#;
        let request: StrategyRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.kind(), StrategyKind::TimeSliced);
        assert_eq!(request.quantity(), dec!(10));
    }
}
