//! Exchange Adapters
//!
//! Implementations of `ExchangeClient`.

pub mod binance;

pub use binance::{BinanceConfig, BinanceEnvironment, BinanceError, BinanceFuturesAdapter};
