//! Signed HTTP client with retry logic.

use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use reqwest::{Client, StatusCode};

use super::api_types::BinanceErrorResponse;
use super::config::{BinanceConfig, RetryConfig};
use super::error::BinanceError;
use super::signer::RequestSigner;

/// Header carrying the API key.
const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// HTTP client for `SIGNED` Binance futures endpoints.
#[derive(Debug, Clone)]
pub struct BinanceHttpClient {
    client: Client,
    api_key: String,
    signer: RequestSigner,
    base_url: String,
    recv_window_ms: u128,
    retry_config: RetryConfig,
}

impl BinanceHttpClient {
    /// Create a new HTTP client from config.
    pub fn new(config: &BinanceConfig) -> Result<Self, BinanceError> {
        if config.credentials.is_empty() {
            return Err(BinanceError::MissingCredentials);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BinanceError::Http(e.to_string()))?;

        Ok(Self {
            client,
            api_key: config.credentials.api_key().to_string(),
            signer: RequestSigner::new(config.credentials.api_secret().to_string()),
            base_url: config.base_url().trim_end_matches('/').to_string(),
            recv_window_ms: config.recv_window.as_millis(),
            retry_config: config.retry.clone(),
        })
    }

    /// Signed POST returning the parsed JSON body.
    ///
    /// `params` are sent unchanged on every attempt; only `timestamp` and
    /// `signature` are regenerated.
    pub async fn signed_post(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<serde_json::Value, BinanceError> {
        let mut backoff = ExponentialBackoff::new(&self.retry_config);

        loop {
            let url = self.signed_url(path, params)?;
            let request = self
                .client
                .post(&url)
                .header(API_KEY_HEADER, &self.api_key);

            let response = match request.send().await {
                Ok(resp) => resp,
                Err(e) => {
                    if let Some(delay) = backoff.next_backoff() {
                        tracing::warn!(
                            error = %e,
                            delay_ms = delay.as_millis(),
                            attempt = backoff.attempt,
                            "Network error, retrying"
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }
                    return Err(BinanceError::MaxRetriesExceeded {
                        attempts: backoff.attempt,
                    });
                }
            };

            let status = response.status();

            if status.is_success() {
                let text = response
                    .text()
                    .await
                    .map_err(|e| BinanceError::Http(e.to_string()))?;
                return serde_json::from_str(&text)
                    .map_err(|e| BinanceError::JsonParse(e.to_string()));
            }

            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok());

            let error_body = response.text().await.unwrap_or_default();

            let (error_code, error_message) =
                match serde_json::from_str::<BinanceErrorResponse>(&error_body) {
                    Ok(err) => (err.code, err.msg),
                    Err(_) => (i64::from(status.as_u16()), error_body),
                };

            match categorize_status(status) {
                ErrorCategory::RateLimited => {
                    if let Some(backoff_delay) = backoff.next_backoff() {
                        let delay = retry_after.map_or(backoff_delay, Duration::from_secs);
                        tracing::warn!(
                            status = status.as_u16(),
                            code = error_code,
                            delay_ms = delay.as_millis(),
                            "Rate limited, retrying"
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }
                    return Err(BinanceError::RateLimited {
                        retry_after_secs: retry_after.unwrap_or(60),
                    });
                }
                ErrorCategory::Retryable => {
                    if let Some(delay) = backoff.next_backoff() {
                        tracing::warn!(
                            status = status.as_u16(),
                            code = error_code,
                            message = %error_message,
                            delay_ms = delay.as_millis(),
                            "Retryable error, retrying"
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }
                    return Err(BinanceError::MaxRetriesExceeded {
                        attempts: backoff.attempt,
                    });
                }
                ErrorCategory::NonRetryable => {
                    return Err(BinanceError::from_api(
                        status.as_u16(),
                        error_code,
                        error_message,
                    ));
                }
            }
        }
    }

    /// Full URL with `recvWindow`, a fresh `timestamp` and the signature.
    fn signed_url(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<String, BinanceError> {
        let query = build_query(params, self.recv_window_ms, Utc::now().timestamp_millis());
        let signature = self.signer.sign(&query)?;
        Ok(format!("{}{path}?{query}&signature={signature}", self.base_url))
    }
}

/// Join parameters into the exact string that gets signed.
///
/// Values are symbols, enum names, decimals and hex IDs, none of which need
/// percent-encoding.
fn build_query(
    params: &[(&'static str, String)],
    recv_window_ms: u128,
    timestamp_ms: i64,
) -> String {
    let mut parts: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
    parts.push(format!("recvWindow={recv_window_ms}"));
    parts.push(format!("timestamp={timestamp_ms}"));
    parts.join("&")
}

/// Error category for determining retry behavior.
enum ErrorCategory {
    RateLimited,
    Retryable,
    NonRetryable,
}

/// Categorize HTTP status code for retry handling.
///
/// 418 is Binance's IP ban after ignoring 429s; it carries `Retry-After` too.
const fn categorize_status(status: StatusCode) -> ErrorCategory {
    match status.as_u16() {
        418 | 429 => ErrorCategory::RateLimited,
        408 | 500 | 502 | 503 | 504 => ErrorCategory::Retryable,
        _ => ErrorCategory::NonRetryable,
    }
}

/// Exponential backoff with jitter.
struct ExponentialBackoff {
    attempt: u32,
    max_attempts: u32,
    current_backoff: Duration,
    max_backoff: Duration,
    multiplier: f64,
    jitter_factor: f64,
}

impl ExponentialBackoff {
    const fn new(config: &RetryConfig) -> Self {
        Self {
            attempt: 0,
            max_attempts: config.max_attempts,
            current_backoff: config.initial_backoff,
            max_backoff: config.max_backoff,
            multiplier: config.multiplier,
            jitter_factor: config.jitter_factor,
        }
    }

    /// Record a failed attempt; `None` once the attempt budget is spent.
    fn next_backoff(&mut self) -> Option<Duration> {
        self.attempt += 1;
        if self.attempt >= self.max_attempts {
            return None;
        }

        let backoff = self.current_backoff;
        self.current_backoff = self
            .current_backoff
            .mul_f64(self.multiplier)
            .min(self.max_backoff);

        Some(self.apply_jitter(backoff).min(self.max_backoff))
    }

    fn apply_jitter(&self, backoff: Duration) -> Duration {
        if self.jitter_factor <= 0.0 {
            return backoff;
        }
        let base = backoff.as_secs_f64();
        let range = base * self.jitter_factor;
        let jittered = rand::rng().random_range((base - range).max(0.0)..=base + range);
        Duration::from_secs_f64(jittered)
    }
}
