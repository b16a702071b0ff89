//! Strategy Compilation Integration Tests
//!
//! Drives `StrategyEngine::compile` through the public API: concrete plans for
//! each strategy, rejection of invalid input, and properties of the ladder and
//! time-sliced plans over generated inputs.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use test_case::test_case;

use order_engine::{
    ExecutionMode, OrderSide, OrderType, StrategyEngine, StrategyKind, StrategyRequest,
    TimeInForce, ValidationError,
};

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

fn twap(quantity: Decimal, duration_secs: i64, intervals: i64) -> StrategyRequest {
    StrategyRequest::TimeSliced {
        symbol: "ETHUSDT".to_string(),
        side: "SELL".to_string(),
        quantity,
        duration_secs,
        intervals,
    }
}

// =============================================================================
// Concrete plans
// =============================================================================

#[test]
fn grid_of_five_levels_between_100_and_110() {
    let plan = StrategyEngine::new()
        .compile(&grid(dec!(100), dec!(110), 5))
        .unwrap();

    assert_eq!(plan.kind(), StrategyKind::PriceLadder);
    assert_eq!(plan.mode(), ExecutionMode::Batch);

    let prices: Vec<Decimal> = plan.requests().map(|r| r.price().unwrap()).collect();
    assert_eq!(
        prices,
        vec![dec!(100), dec!(102.5), dec!(105), dec!(107.5), dec!(110)]
    );
    assert!(plan.requests().all(|r| {
        r.order_type() == OrderType::Limit
            && r.side() == OrderSide::Buy
            && r.quantity() == dec!(0.01)
            && r.time_in_force() == Some(TimeInForce::Gtc)
    }));
    assert_eq!(plan.total_delay(), Duration::ZERO);
}

#[test]
fn twap_of_one_unit_over_twenty_seconds_in_four_slices() {
    let plan = StrategyEngine::new()
        .compile(&twap(dec!(1.0), 20, 4))
        .unwrap();

    assert_eq!(plan.mode(), ExecutionMode::Paced);
    assert_eq!(plan.len(), 4);

    let delays: Vec<Duration> = plan.steps().iter().map(|s| s.delay_before).collect();
    assert_eq!(
        delays,
        vec![
            Duration::ZERO,
            Duration::from_secs(5),
            Duration::from_secs(5),
            Duration::from_secs(5),
        ]
    );
    assert!(plan.requests().all(|r| {
        r.order_type() == OrderType::Market
            && r.quantity() == dec!(0.25)
            && r.side() == OrderSide::Sell
    }));
}

#[test]
fn oco_for_a_long_position_places_two_sell_exits() {
    let request = StrategyRequest::Bracket {
        symbol: "BTCUSDT".to_string(),
        side: "BUY".to_string(),
        quantity: dec!(0.5),
        take_profit_price: dec!(70000),
        stop_price: dec!(60000),
    };

    let plan = StrategyEngine::new().compile(&request).unwrap();
    let steps: Vec<_> = plan.requests().collect();

    assert_eq!(plan.mode(), ExecutionMode::Sequential);
    assert_eq!(steps.len(), 2);

    assert_eq!(steps[0].order_type(), OrderType::TakeProfit);
    assert_eq!(steps[0].side(), OrderSide::Sell);
    assert_eq!(steps[0].price(), Some(dec!(70000)));
    assert_eq!(steps[0].stop_price(), Some(dec!(70000)));

    assert_eq!(steps[1].order_type(), OrderType::StopMarket);
    assert_eq!(steps[1].side(), OrderSide::Sell);
    assert_eq!(steps[1].stop_price(), Some(dec!(60000)));
    assert_eq!(steps[1].price(), None);
}

#[test]
fn lowercase_side_is_accepted() {
    let request = StrategyRequest::Market {
        symbol: "BTCUSDT".to_string(),
        side: "buy".to_string(),
        quantity: dec!(1),
    };

    let plan = StrategyEngine::new().compile(&request).unwrap();
    assert_eq!(plan.steps()[0].request.side(), OrderSide::Buy);
}

#[test]
fn plan_serializes_with_millisecond_delays() {
    let plan = StrategyEngine::new()
        .compile(&twap(dec!(1), 3, 2))
        .unwrap();
    let json = serde_json::to_value(&plan).unwrap();

    assert_eq!(json["steps"][0]["delay_before_ms"], 0);
    assert_eq!(json["steps"][1]["delay_before_ms"], 1500);
}

// =============================================================================
// Rejections
// =============================================================================

#[test_case(grid(dec!(110), dec!(100), 5), "INVERTED_PRICE_RANGE" ; "inverted range")]
#[test_case(grid(dec!(100), dec!(100), 5), "INVERTED_PRICE_RANGE" ; "equal bounds")]
#[test_case(grid(dec!(100), dec!(110), 1), "TOO_FEW_GRID_LEVELS" ; "single level")]
#[test_case(grid(dec!(0), dec!(110), 5), "NOT_POSITIVE" ; "zero lower bound")]
#[test_case(twap(dec!(1), 0, 4), "NOT_POSITIVE" ; "zero duration")]
#[test_case(twap(dec!(1), 20, 0), "NOT_POSITIVE" ; "zero intervals")]
#[test_case(twap(dec!(-1), 20, 4), "NOT_POSITIVE" ; "negative quantity")]
fn invalid_requests_produce_no_plan(request: StrategyRequest, constraint: &str) {
    let err = StrategyEngine::new().compile(&request).unwrap_err();
    assert_eq!(err.constraint(), constraint);
}

#[test]
fn ladder_whose_top_level_overflows_is_rejected() {
    let err = StrategyEngine::new()
        .compile(&grid(dec!(1), Decimal::MAX, 4))
        .unwrap_err();

    assert_eq!(err.constraint(), "OUT_OF_RANGE");
    assert!(matches!(
        err,
        ValidationError::OutOfRange {
            field: "price_high",
            ..
        }
    ));
}

#[test]
fn unknown_side_is_rejected_before_numeric_fields() {
    let request = StrategyRequest::PriceLadder {
        symbol: "BTCUSDT".to_string(),
        side: "HOLD".to_string(),
        quantity: dec!(-1),
        price_low: dec!(110),
        price_high: dec!(100),
        grid_count: 0,
    };

    let err = StrategyEngine::new().compile(&request).unwrap_err();
    assert_eq!(err, ValidationError::InvalidSide("HOLD".to_string()));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn ladder_spans_the_range_in_increasing_steps(
        low_cents in 1i64..10_000_000,
        spread_cents in 1i64..1_000_000,
        count in 2i64..=50,
    ) {
        let low = Decimal::new(low_cents, 2);
        let high = Decimal::new(low_cents + spread_cents, 2);

        let plan = StrategyEngine::new().compile(&grid(low, high, count)).unwrap();
        let prices: Vec<Decimal> = plan.requests().map(|r| r.price().unwrap()).collect();

        prop_assert_eq!(prices.len() as i64, count);
        prop_assert_eq!(prices[0], low);
        prop_assert_eq!(*prices.last().unwrap(), high);
        prop_assert!(prices.windows(2).all(|w| w[0] < w[1]));

        let step = (high - low) / Decimal::from(count - 1);
        let tolerance = Decimal::new(1, 8);
        for w in prices.windows(2) {
            prop_assert!(
                ((w[1] - w[0]) - step).abs() <= tolerance,
                "gap {} differs from step {}",
                w[1] - w[0],
                step
            );
        }
    }

    #[test]
    fn twap_slices_are_equal_and_paced_evenly(
        quantity_milli in 1i64..1_000_000,
        duration_secs in 1i64..86_400,
        intervals in 1i64..=100,
    ) {
        let quantity = Decimal::new(quantity_milli, 3);
        let plan = StrategyEngine::new()
            .compile(&twap(quantity, duration_secs, intervals))
            .unwrap();

        prop_assert_eq!(plan.len() as i64, intervals);
        prop_assert_eq!(plan.steps()[0].delay_before, Duration::ZERO);

        let slice = plan.steps()[0].request.quantity();
        prop_assert!(plan.requests().all(|r| r.quantity() == slice));
        prop_assert!(slice > Decimal::ZERO);

        let expected_delay = Duration::from_secs(duration_secs as u64) / intervals as u32;
        prop_assert!(plan.steps().iter().skip(1).all(|s| s.delay_before == expected_delay));
        prop_assert_eq!(plan.delayed_step_count(), (intervals - 1) as usize);
        prop_assert!(plan.total_delay() <= Duration::from_secs(duration_secs as u64));

        let tolerance = Decimal::new(intervals, 8);
        prop_assert!((slice * Decimal::from(intervals) - quantity).abs() <= tolerance);
    }
}
