//! Price ladder for grid placement.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::shared::ValidationError;

/// Fractional digits kept on each level price.
pub const LEVEL_SCALE: u32 = 8;

/// Inclusive price range split into evenly spaced levels.
///
/// Invariants: `0 < low < high` and at least two levels, so the step is
/// always defined and positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LadderRange {
    low: Decimal,
    high: Decimal,
    levels: u32,
}

impl LadderRange {
    /// Create a ladder from raw inputs.
    pub fn new(low: Decimal, high: Decimal, grid_count: i64) -> Result<Self, ValidationError> {
        if low <= Decimal::ZERO {
            return Err(ValidationError::not_positive("price_low", low));
        }
        if high <= low {
            return Err(ValidationError::InvertedPriceRange { low, high });
        }
        if grid_count <= 1 {
            return Err(ValidationError::TooFewGridLevels(grid_count));
        }
        let levels = u32::try_from(grid_count).map_err(|_| ValidationError::OutOfRange {
            field: "grid_count",
            value: grid_count.to_string(),
        })?;

        let ladder = Self { low, high, levels };
        if ladder.offset(levels - 1).is_none() {
            return Err(ValidationError::OutOfRange {
                field: "price_high",
                value: high.to_string(),
            });
        }
        Ok(ladder)
    }

    /// Lowest level.
    #[must_use]
    pub const fn low(&self) -> Decimal {
        self.low
    }

    /// Highest level.
    #[must_use]
    pub const fn high(&self) -> Decimal {
        self.high
    }

    /// Number of levels.
    #[must_use]
    pub const fn level_count(&self) -> u32 {
        self.levels
    }

    /// Distance between adjacent levels (unrounded).
    #[must_use]
    pub fn step(&self) -> Decimal {
        (self.high - self.low) / Decimal::from(self.levels - 1)
    }

    /// Price of level `index`, rounded to 8 dp.
    ///
    /// `None` when `index` is past the top level.
    #[must_use]
    pub fn level_price(&self, index: u32) -> Option<Decimal> {
        if index >= self.levels {
            return None;
        }
        self.offset(index).map(|price| price.round_dp(LEVEL_SCALE))
    }

    /// All level prices, lowest first.
    pub fn levels(&self) -> impl Iterator<Item = Decimal> + '_ {
        (0..self.levels).filter_map(|i| self.level_price(i))
    }

    fn offset(&self, index: u32) -> Option<Decimal> {
        self.step()
            .checked_mul(Decimal::from(index))
            .and_then(|distance| self.low.checked_add(distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn five_levels_between_100_and_110() {
        let ladder = LadderRange::new(dec!(100), dec!(110), 5).unwrap();
        assert_eq!(ladder.step(), dec!(2.5));
        let prices: Vec<_> = ladder.levels().collect();
        assert_eq!(
            prices,
            vec![dec!(100), dec!(102.5), dec!(105), dec!(107.5), dec!(110)]
        );
    }

    #[test]
    fn two_levels_hit_both_ends() {
        let ladder = LadderRange::new(dec!(1.5), dec!(2), 2).unwrap();
        let prices: Vec<_> = ladder.levels().collect();
        assert_eq!(prices, vec![dec!(1.5), dec!(2)]);
    }

    #[test]
    fn level_prices_round_to_eight_places() {
        let ladder = LadderRange::new(dec!(1), dec!(2), 4).unwrap();
        assert_eq!(ladder.level_price(1), Some(dec!(1.33333333)));
        assert_eq!(ladder.level_price(3), Some(dec!(2)));
        assert_eq!(ladder.level_price(4), None);
    }

    #[test]
    fn range_reaching_decimal_max_is_rejected() {
        let err = LadderRange::new(dec!(1), Decimal::MAX, 4).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange {
                field: "price_high",
                ..
            }
        ));
    }

    #[test]
    fn wide_range_that_fits_keeps_both_ends() {
        let ladder = LadderRange::new(dec!(1), Decimal::MAX, 2).unwrap();
        let prices: Vec<_> = ladder.levels().collect();
        assert_eq!(prices, vec![dec!(1), Decimal::MAX]);
    }

    #[test]
    fn rejects_inverted_or_flat_range() {
        assert_eq!(
            LadderRange::new(dec!(110), dec!(100), 5),
            Err(ValidationError::InvertedPriceRange {
                low: dec!(110),
                high: dec!(100),
            })
        );
        assert!(LadderRange::new(dec!(100), dec!(100), 5).is_err());
    }

    #[test]
    fn rejects_non_positive_low() {
        let err = LadderRange::new(dec!(0), dec!(10), 3).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NotPositive {
                field: "price_low",
                ..
            }
        ));
    }

    #[test]
    fn rejects_too_few_levels() {
        assert_eq!(
            LadderRange::new(dec!(100), dec!(110), 1),
            Err(ValidationError::TooFewGridLevels(1))
        );
        assert_eq!(
            LadderRange::new(dec!(100), dec!(110), -3),
            Err(ValidationError::TooFewGridLevels(-3))
        );
    }
}
