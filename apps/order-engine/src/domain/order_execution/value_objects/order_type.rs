//! Order type (market, limit, conditional variants).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order type specifying execution behavior.
///
/// Mirrors the USDT-M futures order types the strategies produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Market order - execute at best available price.
    Market,
    /// Limit order - execute at specified price or better.
    Limit,
    /// Stop-limit order - places a limit order once the stop price trades.
    Stop,
    /// Stop-market order - places a market order once the stop price trades.
    StopMarket,
    /// Take-profit limit order - places a limit order once the stop price trades.
    TakeProfit,
    /// Take-profit market order - places a market order once the stop price trades.
    TakeProfitMarket,
}

impl OrderType {
    /// Returns true if this order type requires a limit price.
    #[must_use]
    pub const fn requires_price(&self) -> bool {
        matches!(self, Self::Limit | Self::Stop | Self::TakeProfit)
    }

    /// Returns true if this order type requires a stop (trigger) price.
    #[must_use]
    pub const fn requires_stop_price(&self) -> bool {
        matches!(
            self,
            Self::Stop | Self::StopMarket | Self::TakeProfit | Self::TakeProfitMarket
        )
    }

    /// Returns true if the order rests on the book and needs a time in force.
    #[must_use]
    pub const fn requires_time_in_force(&self) -> bool {
        self.requires_price()
    }

    /// Wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "MARKET",
            Self::Limit => "LIMIT",
            Self::Stop => "STOP",
            Self::StopMarket => "STOP_MARKET",
            Self::TakeProfit => "TAKE_PROFIT",
            Self::TakeProfitMarket => "TAKE_PROFIT_MARKET",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
