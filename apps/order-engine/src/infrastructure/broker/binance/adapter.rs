//! Binance USDT-M futures adapter implementing ExchangeClient.

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::{ExchangeClient, ExchangeError, OrderConfirmation};
use crate::domain::order_execution::OrderRequest;

use super::api_types::{BinanceOrderResponse, NewOrderParams};
use super::config::{BinanceConfig, BinanceEnvironment};
use super::error::BinanceError;
use super::http_client::BinanceHttpClient;

/// New-order endpoint.
const ORDER_PATH: &str = "/fapi/v1/order";

/// Binance USDT-M futures adapter.
///
/// Implements `ExchangeClient` for the futures REST API.
#[derive(Debug, Clone)]
pub struct BinanceFuturesAdapter {
    client: BinanceHttpClient,
    environment: BinanceEnvironment,
}

impl BinanceFuturesAdapter {
    /// Create a new Binance futures adapter.
    pub fn new(config: &BinanceConfig) -> Result<Self, BinanceError> {
        let client = BinanceHttpClient::new(config)?;
        Ok(Self {
            client,
            environment: config.environment,
        })
    }

    /// Check if we're in live trading mode.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.environment.is_live()
    }

    /// Fresh client order ID, reused across retries of one submission.
    fn new_client_order_id() -> String {
        Uuid::new_v4().simple().to_string()
    }
}

#[async_trait]
impl ExchangeClient for BinanceFuturesAdapter {
    async fn submit(&self, request: &OrderRequest) -> Result<OrderConfirmation, ExchangeError> {
        let client_order_id = Self::new_client_order_id();

        if self.is_live() {
            tracing::warn!(
                client_order_id = %client_order_id,
                symbol = %request.symbol(),
                "Submitting MAINNET order - this will execute real trades"
            );
        }

        let params = NewOrderParams::from_request(request, &client_order_id);

        tracing::info!(
            client_order_id = %client_order_id,
            environment = %self.environment,
            symbol = %request.symbol(),
            side = %request.side(),
            order_type = %request.order_type(),
            quantity = ?params.get("quantity"),
            price = ?params.get("price"),
            stop_price = ?params.get("stopPrice"),
            "Submitting order to Binance"
        );

        let raw = self
            .client
            .signed_post(ORDER_PATH, params.pairs())
            .await
            .map_err(ExchangeError::from)?;

        let response: BinanceOrderResponse = serde_json::from_value(raw.clone())
            .map_err(|e| ExchangeError::from(BinanceError::JsonParse(e.to_string())))?;

        tracing::info!(
            client_order_id = %client_order_id,
            order_id = response.order_id,
            status = %response.status,
            "Order accepted"
        );

        Ok(response.into_confirmation(raw))
    }
}
