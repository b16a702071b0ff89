//! Binance adapter configuration.

use std::str::FromStr;
use std::time::Duration;

use crate::infrastructure::config::{Credentials, EngineConfig};

/// Binance USDT-M futures environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BinanceEnvironment {
    /// Futures testnet (simulated funds).
    #[default]
    Testnet,
    /// Production (real funds).
    Mainnet,
}

impl BinanceEnvironment {
    /// Get the base URL for the futures REST API.
    #[must_use]
    pub const fn base_url(&self) -> &'static str {
        match self {
            Self::Testnet => "https://testnet.binancefuture.com",
            Self::Mainnet => "https://fapi.binance.com",
        }
    }

    /// Check if this is live trading.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self, Self::Mainnet)
    }
}

impl std::fmt::Display for BinanceEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Testnet => write!(f, "TESTNET"),
            Self::Mainnet => write!(f, "MAINNET"),
        }
    }
}

impl FromStr for BinanceEnvironment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TESTNET" => Ok(Self::Testnet),
            "MAINNET" => Ok(Self::Mainnet),
            other => Err(format!("unknown environment: {other}")),
        }
    }
}

/// Configuration for the Binance futures adapter.
#[derive(Debug, Clone)]
pub struct BinanceConfig {
    /// API credentials.
    pub credentials: Credentials,
    /// Trading environment.
    pub environment: BinanceEnvironment,
    /// Base URL override (tests, proxies).
    pub base_url: Option<String>,
    /// `recvWindow` sent with every signed request.
    pub recv_window: Duration,
    /// HTTP request timeout.
    pub timeout: Duration,
    /// Retry policy configuration.
    pub retry: RetryConfig,
}

impl BinanceConfig {
    /// Create a new configuration.
    #[must_use]
    pub fn new(credentials: Credentials, environment: BinanceEnvironment) -> Self {
        Self {
            credentials,
            environment,
            base_url: None,
            recv_window: Duration::from_millis(5000),
            timeout: Duration::from_secs(10),
            retry: RetryConfig::default(),
        }
    }

    /// Build from loaded engine configuration.
    #[must_use]
    pub fn from_engine_config(config: &EngineConfig) -> Self {
        Self::new(config.credentials.clone(), config.environment)
            .with_recv_window(config.request.recv_window)
            .with_timeout(config.request.timeout)
    }

    /// Point the adapter at a different host.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set `recvWindow`.
    #[must_use]
    pub const fn with_recv_window(mut self, recv_window: Duration) -> Self {
        self.recv_window = recv_window;
        self
    }

    /// Set the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry configuration.
    #[must_use]
    pub const fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Effective REST base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
    }
}

/// Retry configuration.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts, first one included.
    pub max_attempts: u32,
    /// Initial backoff duration.
    pub initial_backoff: Duration,
    /// Maximum backoff duration.
    pub max_backoff: Duration,
    /// Backoff multiplier.
    pub multiplier: f64,
    /// Jitter factor (0.2 = ±20%).
    pub jitter_factor: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(200),
            max_backoff: Duration::from_secs(10),
            multiplier: 2.0,
            jitter_factor: 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials::new("key".to_string(), "secret".to_string())
    }

    #[test]
    fn testnet_is_default_and_not_live() {
        let env = BinanceEnvironment::default();
        assert_eq!(env, BinanceEnvironment::Testnet);
        assert!(env.base_url().contains("testnet"));
        assert!(!env.is_live());
    }

    #[test]
    fn mainnet_urls() {
        let env = BinanceEnvironment::Mainnet;
        assert_eq!(env.base_url(), "https://fapi.binance.com");
        assert!(env.is_live());
        assert_eq!(env.to_string(), "MAINNET");
    }

    #[test]
    fn environment_parse() {
        assert_eq!(
            "testnet".parse::<BinanceEnvironment>(),
            Ok(BinanceEnvironment::Testnet)
        );
        assert_eq!(
            " MAINNET ".parse::<BinanceEnvironment>(),
            Ok(BinanceEnvironment::Mainnet)
        );
        assert!("prod".parse::<BinanceEnvironment>().is_err());
    }

    #[test]
    fn base_url_override() {
        let config = BinanceConfig::new(creds(), BinanceEnvironment::Mainnet)
            .with_base_url("http://127.0.0.1:9000");
        assert_eq!(config.base_url(), "http://127.0.0.1:9000");

        let config = BinanceConfig::new(creds(), BinanceEnvironment::Mainnet);
        assert_eq!(config.base_url(), "https://fapi.binance.com");
    }

    #[test]
    fn config_with_retry() {
        let retry = RetryConfig {
            max_attempts: 5,
            ..RetryConfig::default()
        };
        let config = BinanceConfig::new(creds(), BinanceEnvironment::Testnet)
            .with_retry(retry)
            .with_timeout(Duration::from_secs(3));
        assert_eq!(config.retry.max_attempts, 5);
        assert_eq!(config.timeout, Duration::from_secs(3));
    }
}
