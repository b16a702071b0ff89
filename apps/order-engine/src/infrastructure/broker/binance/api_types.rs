//! Binance futures REST request and response types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::application::ports::OrderConfirmation;
use crate::domain::order_execution::{OrderRequest, OrderSide, OrderType, TimeInForce};
use crate::domain::shared::Symbol;

/// Parameters of `POST /fapi/v1/order`, in wire order.
///
/// `recvWindow`, `timestamp` and `signature` are appended by the HTTP
/// client on each attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderParams {
    params: Vec<(&'static str, String)>,
}

impl NewOrderParams {
    /// Map a domain order request onto Binance parameters.
    #[must_use]
    pub fn from_request(request: &OrderRequest, client_order_id: &str) -> Self {
        let mut params = vec![
            ("symbol", request.symbol().as_str().to_string()),
            ("side", request.side().as_str().to_string()),
            ("type", request.order_type().as_str().to_string()),
        ];
        if let Some(tif) = request.time_in_force() {
            params.push(("timeInForce", tif.as_str().to_string()));
        }
        params.push(("quantity", format_decimal(request.quantity())));
        if let Some(price) = request.price() {
            params.push(("price", format_decimal(price)));
        }
        if let Some(stop_price) = request.stop_price() {
            params.push(("stopPrice", format_decimal(stop_price)));
        }
        params.push(("newClientOrderId", client_order_id.to_string()));
        Self { params }
    }

    /// Key/value pairs.
    #[must_use]
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.params
    }

    /// Value of `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Plain decimal without trailing zeros or exponent.
#[must_use]
pub fn format_decimal(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Order response from `POST /fapi/v1/order`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinanceOrderResponse {
    /// Exchange order ID.
    pub order_id: i64,
    /// Client order ID.
    pub client_order_id: String,
    /// Symbol.
    pub symbol: Symbol,
    /// Order side.
    pub side: OrderSide,
    /// Order type.
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Order status.
    pub status: String,
    /// Original quantity.
    pub orig_qty: Decimal,
    /// Limit price.
    #[serde(default)]
    pub price: Decimal,
    /// Trigger price.
    #[serde(default)]
    pub stop_price: Decimal,
    /// Time in force; futures may report values outside [`TimeInForce`].
    #[serde(default)]
    pub time_in_force: Option<String>,
    /// Last update (epoch milliseconds).
    pub update_time: i64,
}

impl BinanceOrderResponse {
    /// Convert to the port's confirmation record.
    #[must_use]
    pub fn into_confirmation(self, raw: serde_json::Value) -> OrderConfirmation {
        let time_in_force = self
            .time_in_force
            .map(serde_json::Value::String)
            .and_then(|tif| serde_json::from_value::<TimeInForce>(tif).ok());
        let update_time =
            DateTime::<Utc>::from_timestamp_millis(self.update_time).unwrap_or_else(Utc::now);

        OrderConfirmation {
            order_id: self.order_id,
            client_order_id: self.client_order_id,
            symbol: self.symbol,
            side: self.side,
            order_type: self.order_type,
            status: self.status,
            quantity: self.orig_qty,
            price: self.price,
            stop_price: self.stop_price,
            time_in_force,
            update_time,
            raw,
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct BinanceErrorResponse {
    /// Exchange error code (negative).
    pub code: i64,
    /// Error message.
    pub msg: String,
}
