//! Command-line surface.
//!
//! One subcommand per strategy with positional arguments. Numeric arguments
//! accept negative values so that range checks are reported by the
//! validator with its own message instead of by the argument parser.

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use order_engine::StrategyRequest;

/// Place strategy orders on Binance USDT-M Futures.
#[derive(Debug, Parser)]
#[command(name = "order-engine", version, about)]
pub struct Cli {
    /// Validate and print the execution plan without contacting the exchange.
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Strategy to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Fields shared by every strategy.
#[derive(Debug, Args)]
pub struct TargetArgs {
    /// Trading pair symbol (e.g. BTCUSDT).
    pub symbol: String,
    /// Order side: BUY or SELL.
    pub side: String,
    /// Quantity to trade.
    #[arg(allow_negative_numbers = true)]
    pub quantity: Decimal,
}

/// Supported strategies.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Place a market order.
    Market {
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Place a GTC limit order.
    Limit {
        #[command(flatten)]
        target: TargetArgs,
        /// Limit price.
        #[arg(allow_negative_numbers = true)]
        price: Decimal,
    },
    /// Place a GTC stop-limit order.
    StopLimit {
        #[command(flatten)]
        target: TargetArgs,
        /// Stop trigger price.
        #[arg(allow_negative_numbers = true)]
        stop_price: Decimal,
        /// Limit price after trigger.
        #[arg(allow_negative_numbers = true)]
        limit_price: Decimal,
    },
    /// Place take-profit and stop-loss exits for a position opened on SIDE.
    Oco {
        #[command(flatten)]
        target: TargetArgs,
        /// Take-profit price.
        #[arg(allow_negative_numbers = true)]
        take_profit_price: Decimal,
        /// Stop-loss trigger price.
        #[arg(allow_negative_numbers = true)]
        stop_price: Decimal,
    },
    /// Split QUANTITY into equal market slices over DURATION seconds.
    Twap {
        #[command(flatten)]
        target: TargetArgs,
        /// Total duration in seconds.
        #[arg(allow_negative_numbers = true)]
        duration: i64,
        /// Number of slices.
        #[arg(allow_negative_numbers = true)]
        intervals: i64,
    },
    /// Place limit orders at evenly spaced prices between two bounds.
    Grid {
        #[command(flatten)]
        target: TargetArgs,
        /// Lower price bound.
        #[arg(allow_negative_numbers = true)]
        price_low: Decimal,
        /// Upper price bound.
        #[arg(allow_negative_numbers = true)]
        price_high: Decimal,
        /// Number of price levels.
        #[arg(allow_negative_numbers = true)]
        grid_count: i64,
    },
}

impl Cli {
    /// Unvalidated strategy request for the chosen subcommand.
    pub fn into_request(self) -> StrategyRequest {
        match self.command {
            Command::Market { target } => StrategyRequest::Market {
                symbol: target.symbol,
                side: target.side,
                quantity: target.quantity,
            },
            Command::Limit { target, price } => StrategyRequest::Limit {
                symbol: target.symbol,
                side: target.side,
                quantity: target.quantity,
                price,
            },
            Command::StopLimit {
                target,
                stop_price,
                limit_price,
            } => StrategyRequest::StopLimit {
                symbol: target.symbol,
                side: target.side,
                quantity: target.quantity,
                stop_price,
                limit_price,
            },
            Command::Oco {
                target,
                take_profit_price,
                stop_price,
            } => StrategyRequest::Bracket {
                symbol: target.symbol,
                side: target.side,
                quantity: target.quantity,
                take_profit_price,
                stop_price,
            },
            Command::Twap {
                target,
                duration,
                intervals,
            } => StrategyRequest::TimeSliced {
                symbol: target.symbol,
                side: target.side,
                quantity: target.quantity,
                duration_secs: duration,
                intervals,
            },
            Command::Grid {
                target,
                price_low,
                price_high,
                grid_count,
            } => StrategyRequest::PriceLadder {
                symbol: target.symbol,
                side: target.side,
                quantity: target.quantity,
                price_low,
                price_high,
                grid_count,
            },
        }
    }
}
