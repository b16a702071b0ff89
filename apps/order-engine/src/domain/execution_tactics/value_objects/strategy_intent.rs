//! Validated strategy parameters.

use rust_decimal::Decimal;
use serde::Serialize;

use super::{LadderRange, StrategyKind, TwapSchedule};
use crate::domain::order_execution::OrderSide;
use crate::domain::shared::Symbol;

/// Instrument, side and quantity shared by every strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderTarget {
    /// Normalized instrument.
    pub symbol: Symbol,
    /// Initiating side.
    pub side: OrderSide,
    /// Positive quantity.
    pub quantity: Decimal,
}

/// A strategy whose inputs have passed validation.
///
/// Only the validator produces these, so every price is positive and every
/// count is usable as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum StrategyIntent {
    /// Market order.
    Market(OrderTarget),
    /// GTC limit order.
    Limit {
        /// Instrument, side and quantity.
        target: OrderTarget,
        /// Limit price.
        price: Decimal,
    },
    /// GTC stop-limit order.
    StopLimit {
        /// Instrument, side and quantity.
        target: OrderTarget,
        /// Trigger price.
        stop_price: Decimal,
        /// Resting price once triggered.
        limit_price: Decimal,
    },
    /// Take-profit and stop-loss exit legs.
    Bracket {
        /// Instrument, entry side and leg quantity.
        target: OrderTarget,
        /// Take-profit price.
        take_profit_price: Decimal,
        /// Stop-loss trigger.
        stop_price: Decimal,
    },
    /// TWAP slices.
    TimeSliced {
        /// Instrument, side and total quantity.
        target: OrderTarget,
        /// Window and slice count.
        schedule: TwapSchedule,
    },
    /// Grid of limit orders.
    PriceLadder {
        /// Instrument, side and per-level quantity.
        target: OrderTarget,
        /// Price range and level count.
        ladder: LadderRange,
    },
}

impl StrategyIntent {
    /// Strategy variant.
    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        match self {
            Self::Market(_) => StrategyKind::Market,
            Self::Limit { .. } => StrategyKind::Limit,
            Self::StopLimit { .. } => StrategyKind::StopLimit,
            Self::Bracket { .. } => StrategyKind::Bracket,
            Self::TimeSliced { .. } => StrategyKind::TimeSliced,
            Self::PriceLadder { .. } => StrategyKind::PriceLadder,
        }
    }

    /// Shared instrument, side and quantity.
    #[must_use]
    pub const fn target(&self) -> &OrderTarget {
        match self {
            Self::Market(target)
            | Self::Limit { target, .. }
            | Self::StopLimit { target, .. }
            | Self::Bracket { target, .. }
            | Self::TimeSliced { target, .. }
            | Self::PriceLadder { target, .. } => target,
        }
    }
}
