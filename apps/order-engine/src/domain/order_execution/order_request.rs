//! A single order as it will be submitted to the exchange.

use rust_decimal::Decimal;
use serde::Serialize;

use super::value_objects::{OrderSide, OrderType, TimeInForce};
use crate::domain::shared::{Symbol, ValidationError};

/// Request to place one order.
///
/// The order type decides which optional fields must be present:
///
/// | Type | `price` | `stop_price` | `time_in_force` |
/// |------|---------|--------------|-----------------|
/// | MARKET | - | - | - |
/// | LIMIT | required | - | required |
/// | STOP | required | required | required |
/// | STOP_MARKET | - | required | - |
/// | TAKE_PROFIT | required | required | required |
/// | TAKE_PROFIT_MARKET | - | required | - |
///
/// A missing required field or a field the type does not use is rejected.
/// Instances can only be obtained through [`OrderRequestBuilder::build`], so
/// every `OrderRequest` in the system satisfies the table above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    symbol: Symbol,
    side: OrderSide,
    order_type: OrderType,
    quantity: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_in_force: Option<TimeInForce>,
}

impl OrderRequest {
    /// Start building an order request.
    #[must_use]
    pub const fn builder(
        symbol: Symbol,
        side: OrderSide,
        order_type: OrderType,
        quantity: Decimal,
    ) -> OrderRequestBuilder {
        OrderRequestBuilder {
            symbol,
            side,
            order_type,
            quantity,
            price: None,
            stop_price: None,
            time_in_force: None,
        }
    }

    /// Market order.
    pub fn market(
        symbol: Symbol,
        side: OrderSide,
        quantity: Decimal,
    ) -> Result<Self, ValidationError> {
        Self::builder(symbol, side, OrderType::Market, quantity).build()
    }

    /// GTC limit order.
    pub fn limit(
        symbol: Symbol,
        side: OrderSide,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<Self, ValidationError> {
        Self::builder(symbol, side, OrderType::Limit, quantity)
            .price(price)
            .time_in_force(TimeInForce::Gtc)
            .build()
    }

    /// GTC stop-limit order: triggers at `stop_price`, rests at `limit_price`.
    pub fn stop_limit(
        symbol: Symbol,
        side: OrderSide,
        quantity: Decimal,
        stop_price: Decimal,
        limit_price: Decimal,
    ) -> Result<Self, ValidationError> {
        Self::builder(symbol, side, OrderType::Stop, quantity)
            .price(limit_price)
            .stop_price(stop_price)
            .time_in_force(TimeInForce::Gtc)
            .build()
    }

    /// GTC take-profit limit order triggered and priced at `take_profit_price`.
    pub fn take_profit(
        symbol: Symbol,
        side: OrderSide,
        quantity: Decimal,
        take_profit_price: Decimal,
    ) -> Result<Self, ValidationError> {
        Self::builder(symbol, side, OrderType::TakeProfit, quantity)
            .price(take_profit_price)
            .stop_price(take_profit_price)
            .time_in_force(TimeInForce::Gtc)
            .build()
    }

    /// Stop-market order triggered at `stop_price`.
    pub fn stop_market(
        symbol: Symbol,
        side: OrderSide,
        quantity: Decimal,
        stop_price: Decimal,
    ) -> Result<Self, ValidationError> {
        Self::builder(symbol, side, OrderType::StopMarket, quantity)
            .stop_price(stop_price)
            .build()
    }

    /// Instrument.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Side.
    #[must_use]
    pub const fn side(&self) -> OrderSide {
        self.side
    }

    /// Order type.
    #[must_use]
    pub const fn order_type(&self) -> OrderType {
        self.order_type
    }

    /// Quantity (always positive).
    #[must_use]
    pub const fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Limit price, when the type uses one.
    #[must_use]
    pub const fn price(&self) -> Option<Decimal> {
        self.price
    }

    /// Trigger price, when the type uses one.
    #[must_use]
    pub const fn stop_price(&self) -> Option<Decimal> {
        self.stop_price
    }

    /// Time in force, when the type uses one.
    #[must_use]
    pub const fn time_in_force(&self) -> Option<TimeInForce> {
        self.time_in_force
    }
}

/// Builder enforcing the type/field table of [`OrderRequest`].
#[derive(Debug, Clone)]
pub struct OrderRequestBuilder {
    symbol: Symbol,
    side: OrderSide,
    order_type: OrderType,
    quantity: Decimal,
    price: Option<Decimal>,
    stop_price: Option<Decimal>,
    time_in_force: Option<TimeInForce>,
}

impl OrderRequestBuilder {
    /// Set the limit price.
    #[must_use]
    pub const fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the trigger price.
    #[must_use]
    pub const fn stop_price(mut self, stop_price: Decimal) -> Self {
        self.stop_price = Some(stop_price);
        self
    }

    /// Set the time in force.
    #[must_use]
    pub const fn time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = Some(tif);
        self
    }

    /// Check the field table and positivity, then build.
    pub fn build(self) -> Result<OrderRequest, ValidationError> {
        if self.quantity <= Decimal::ZERO {
            return Err(ValidationError::not_positive("quantity", self.quantity));
        }

        let order_type = self.order_type;
        check_field(
            order_type,
            "price",
            self.price,
            order_type.requires_price(),
        )?;
        check_field(
            order_type,
            "stop_price",
            self.stop_price,
            order_type.requires_stop_price(),
        )?;

        match (order_type.requires_time_in_force(), self.time_in_force) {
            (true, None) => {
                return Err(ValidationError::MissingField {
                    order_type,
                    field: "time_in_force",
                });
            }
            (false, Some(_)) => {
                return Err(ValidationError::UnexpectedField {
                    order_type,
                    field: "time_in_force",
                });
            }
            _ => {}
        }

        Ok(OrderRequest {
            symbol: self.symbol,
            side: self.side,
            order_type,
            quantity: self.quantity,
            price: self.price,
            stop_price: self.stop_price,
            time_in_force: self.time_in_force,
        })
    }
}

fn check_field(
    order_type: OrderType,
    field: &'static str,
    value: Option<Decimal>,
    required: bool,
) -> Result<(), ValidationError> {
    match (required, value) {
        (true, None) => Err(ValidationError::MissingField { order_type, field }),
        (false, Some(_)) => Err(ValidationError::UnexpectedField { order_type, field }),
        (true, Some(v)) if v <= Decimal::ZERO => Err(ValidationError::not_positive(field, v)),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn btc() -> Symbol {
        Symbol::parse("BTCUSDT").unwrap()
    }

    #[test]
    fn market_order_has_no_price_fields() {
        let order = OrderRequest::market(btc(), OrderSide::Buy, dec!(0.01)).unwrap();
        assert_eq!(order.order_type(), OrderType::Market);
        assert!(order.price().is_none());
        assert!(order.stop_price().is_none());
        assert!(order.time_in_force().is_none());
    }

    #[test]
    fn limit_order_is_gtc() {
        let order = OrderRequest::limit(btc(), OrderSide::Sell, dec!(1), dec!(100)).unwrap();
        assert_eq!(order.order_type(), OrderType::Limit);
        assert_eq!(order.price(), Some(dec!(100)));
        assert_eq!(order.time_in_force(), Some(TimeInForce::Gtc));
    }

    #[test]
    fn stop_limit_carries_both_prices() {
        let order =
            OrderRequest::stop_limit(btc(), OrderSide::Buy, dec!(1), dec!(105), dec!(106))
                .unwrap();
        assert_eq!(order.order_type(), OrderType::Stop);
        assert_eq!(order.stop_price(), Some(dec!(105)));
        assert_eq!(order.price(), Some(dec!(106)));
    }

    #[test]
    fn take_profit_uses_same_trigger_and_price() {
        let order =
            OrderRequest::take_profit(btc(), OrderSide::Sell, dec!(1), dec!(120)).unwrap();
        assert_eq!(order.price(), Some(dec!(120)));
        assert_eq!(order.stop_price(), Some(dec!(120)));
    }

    #[test]
    fn stop_market_has_no_limit_price() {
        let order =
            OrderRequest::stop_market(btc(), OrderSide::Sell, dec!(1), dec!(90)).unwrap();
        assert_eq!(order.order_type(), OrderType::StopMarket);
        assert!(order.price().is_none());
        assert!(order.time_in_force().is_none());
    }

    #[test]
    fn builder_rejects_missing_price() {
        let err = OrderRequest::builder(btc(), OrderSide::Buy, OrderType::Limit, dec!(1))
            .time_in_force(TimeInForce::Gtc)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                order_type: OrderType::Limit,
                field: "price",
            }
        );
    }

    #[test]
    fn builder_rejects_missing_stop_price() {
        let err = OrderRequest::builder(btc(), OrderSide::Buy, OrderType::TakeProfitMarket, dec!(1))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingField {
                field: "stop_price",
                ..
            }
        ));
    }

    #[test]
    fn builder_rejects_price_on_market_order() {
        let err = OrderRequest::builder(btc(), OrderSide::Buy, OrderType::Market, dec!(1))
            .price(dec!(100))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::UnexpectedField { field: "price", .. }
        ));
    }

    #[test]
    fn builder_rejects_time_in_force_on_stop_market() {
        let err = OrderRequest::builder(btc(), OrderSide::Buy, OrderType::StopMarket, dec!(1))
            .stop_price(dec!(90))
            .time_in_force(TimeInForce::Gtc)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::UnexpectedField {
                field: "time_in_force",
                ..
            }
        ));
    }

    #[test]
    fn builder_rejects_non_positive_values() {
        assert!(OrderRequest::market(btc(), OrderSide::Buy, dec!(0)).is_err());
        assert!(OrderRequest::limit(btc(), OrderSide::Buy, dec!(1), dec!(-5)).is_err());
        assert!(OrderRequest::stop_market(btc(), OrderSide::Buy, dec!(1), dec!(0)).is_err());
    }

    #[test]
    fn serialization_skips_absent_fields() {
        let order = OrderRequest::market(btc(), OrderSide::Buy, dec!(2)).unwrap();
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["order_type"], "MARKET");
        assert!(json.get("price").is_none());
        assert!(json.get("stop_price").is_none());
    }
}
