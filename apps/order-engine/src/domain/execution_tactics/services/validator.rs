//! Strategy Input Validator
//!
//! Checks a raw [`StrategyRequest`] and returns the normalized
//! [`StrategyIntent`], or the first constraint it violates. Checks run in a
//! fixed order: symbol, side, quantity, then the strategy's own fields.

use rust_decimal::Decimal;

use crate::domain::execution_tactics::value_objects::{
    LadderRange, OrderTarget, StrategyIntent, StrategyRequest, TwapSchedule,
};
use crate::domain::order_execution::OrderSide;
use crate::domain::shared::{Symbol, ValidationError};

/// Validate a raw strategy request.
pub fn validate_request(request: &StrategyRequest) -> Result<StrategyIntent, ValidationError> {
    let target = validate_target(request.symbol(), request.side(), request.quantity())?;

    let intent = match *request {
        StrategyRequest::Market { .. } => StrategyIntent::Market(target),
        StrategyRequest::Limit { price, .. } => StrategyIntent::Limit {
            target,
            price: positive("price", price)?,
        },
        StrategyRequest::StopLimit {
            stop_price,
            limit_price,
            ..
        } => StrategyIntent::StopLimit {
            target,
            stop_price: positive("stop_price", stop_price)?,
            limit_price: positive("limit_price", limit_price)?,
        },
        StrategyRequest::Bracket {
            take_profit_price,
            stop_price,
            ..
        } => StrategyIntent::Bracket {
            target,
            take_profit_price: positive("take_profit_price", take_profit_price)?,
            stop_price: positive("stop_price", stop_price)?,
        },
        StrategyRequest::TimeSliced {
            duration_secs,
            intervals,
            ..
        } => StrategyIntent::TimeSliced {
            target,
            schedule: TwapSchedule::new(duration_secs, intervals)?,
        },
        StrategyRequest::PriceLadder {
            price_low,
            price_high,
            grid_count,
            ..
        } => StrategyIntent::PriceLadder {
            target,
            ladder: LadderRange::new(price_low, price_high, grid_count)?,
        },
    };

    Ok(intent)
}

fn validate_target(
    symbol: &str,
    side: &str,
    quantity: Decimal,
) -> Result<OrderTarget, ValidationError> {
    let symbol = Symbol::parse(symbol)?;
    let side = OrderSide::parse(side)?;
    let quantity = positive("quantity", quantity)?;
    Ok(OrderTarget {
        symbol,
        side,
        quantity,
    })
}

fn positive(field: &'static str, value: Decimal) -> Result<Decimal, ValidationError> {
    if value > Decimal::ZERO {
        Ok(value)
    } else {
        Err(ValidationError::not_positive(field, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    fn limit(symbol: &str, side: &str, quantity: Decimal, price: Decimal) -> StrategyRequest {
        StrategyRequest::Limit {
            symbol: symbol.to_string(),
            side: side.to_string(),
            quantity,
            price,
        }
    }

    fn grid(low: Decimal, high: Decimal, count: i64) -> StrategyRequest {
        StrategyRequest::PriceLadder {
            symbol: "BTCUSDT".to_string(),
            side: "BUY".to_string(),
            quantity: dec!(0.01),
            price_low: low,
            price_high: high,
            grid_count: count,
        }
    }

    fn twap(duration_secs: i64, intervals: i64) -> StrategyRequest {
        StrategyRequest::TimeSliced {
            symbol: "ETHUSDT".to_string(),
            side: "SELL".to_string(),
            quantity: dec!(10),
            duration_secs,
            intervals,
        }
    }

    #[test]
    fn normalizes_symbol_and_side() {
        let intent = validate_request(&limit("btcusdt", "buy", dec!(1), dec!(100))).unwrap();
        let target = intent.target();
        assert_eq!(target.symbol.as_str(), "BTCUSDT");
        assert_eq!(target.side, OrderSide::Buy);
    }

    #[test_case(limit("", "BUY", dec!(1), dec!(100)), "INVALID_SYMBOL" ; "empty symbol")]
    #[test_case(limit("BTC-USDT", "BUY", dec!(1), dec!(100)), "INVALID_SYMBOL" ; "dash")]
    #[test_case(limit("BTCUSDT", "HOLD", dec!(1), dec!(100)), "INVALID_SIDE" ; "unknown side")]
    #[test_case(limit("BTCUSDT", "BUY", dec!(0), dec!(100)), "NOT_POSITIVE" ; "zero quantity")]
    #[test_case(limit("BTCUSDT", "BUY", dec!(-1), dec!(100)), "NOT_POSITIVE" ; "negative quantity")]
    #[test_case(limit("BTCUSDT", "BUY", dec!(1), dec!(0)), "NOT_POSITIVE" ; "zero price")]
    #[test_case(grid(dec!(110), dec!(100), 5), "INVERTED_PRICE_RANGE" ; "inverted ladder")]
    #[test_case(grid(dec!(100), dec!(100), 5), "INVERTED_PRICE_RANGE" ; "flat ladder")]
    #[test_case(grid(dec!(100), dec!(110), 1), "TOO_FEW_GRID_LEVELS" ; "single level")]
    #[test_case(grid(dec!(0), dec!(110), 5), "NOT_POSITIVE" ; "zero ladder low")]
    #[test_case(twap(0, 5), "NOT_POSITIVE" ; "zero duration")]
    #[test_case(twap(100, 0), "NOT_POSITIVE" ; "zero intervals")]
    #[test_case(twap(100, -4), "NOT_POSITIVE" ; "negative intervals")]
    fn rejects_invalid_input(request: StrategyRequest, constraint: &str) {
        let err = validate_request(&request).unwrap_err();
        assert_eq!(err.constraint(), constraint);
    }

    #[test]
    fn symbol_is_checked_before_side_and_quantity() {
        let err = validate_request(&limit("", "HOLD", dec!(0), dec!(0))).unwrap_err();
        assert_eq!(err.constraint(), "INVALID_SYMBOL");

        let err = validate_request(&limit("BTCUSDT", "HOLD", dec!(0), dec!(0))).unwrap_err();
        assert_eq!(err.constraint(), "INVALID_SIDE");

        let err = validate_request(&limit("BTCUSDT", "BUY", dec!(0), dec!(0))).unwrap_err();
        assert_eq!(err, ValidationError::not_positive("quantity", dec!(0)));
    }

    #[test]
    fn bracket_prices_must_be_positive() {
        let request = StrategyRequest::Bracket {
            symbol: "BTCUSDT".to_string(),
            side: "BUY".to_string(),
            quantity: dec!(1),
            take_profit_price: dec!(120),
            stop_price: dec!(-5),
        };
        let err = validate_request(&request).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NotPositive {
                field: "stop_price",
                ..
            }
        ));
    }

    #[test]
    fn stop_limit_checks_stop_before_limit() {
        let request = StrategyRequest::StopLimit {
            symbol: "BTCUSDT".to_string(),
            side: "SELL".to_string(),
            quantity: dec!(1),
            stop_price: dec!(0),
            limit_price: dec!(0),
        };
        let err = validate_request(&request).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NotPositive {
                field: "stop_price",
                ..
            }
        ));
    }

    #[test]
    fn valid_twap_keeps_schedule() {
        let intent = validate_request(&twap(100, 5)).unwrap();
        match intent {
            StrategyIntent::TimeSliced { schedule, .. } => {
                assert_eq!(schedule.slice_count(), 5);
            }
            other => panic!("unexpected intent: {other:?}"),
        }
    }
}
