//! Binance USDT-M Futures Adapter
//!
//! Implementation of `ExchangeClient` for the Binance futures REST API with:
//! - HMAC-SHA256 signed requests
//! - Retry logic with exponential backoff and jitter
//! - One client order ID per order, kept across retries
//! - TESTNET by default; MAINNET must be selected explicitly

mod adapter;
mod api_types;
mod config;
mod error;
mod http_client;
mod signer;

pub use adapter::BinanceFuturesAdapter;
pub use config::{BinanceConfig, BinanceEnvironment, RetryConfig};
pub use error::BinanceError;
