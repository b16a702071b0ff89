//! TWAP Schedule

use std::num::NonZeroU32;
use std::time::Duration;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::shared::ValidationError;

/// Fractional digits kept on each slice quantity.
pub const SLICE_SCALE: u32 = 8;

/// Validated time window and slice count for a TWAP execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TwapSchedule {
    duration_secs: u64,
    intervals: NonZeroU32,
}

impl TwapSchedule {
    /// Create a schedule from raw inputs.
    ///
    /// Both the window and the slice count must be greater than zero, and the
    /// slice count must fit in a `u32`.
    pub fn new(duration_secs: i64, intervals: i64) -> Result<Self, ValidationError> {
        if duration_secs <= 0 {
            return Err(ValidationError::not_positive("duration", duration_secs));
        }
        if intervals <= 0 {
            return Err(ValidationError::not_positive("intervals", intervals));
        }
        let intervals = u32::try_from(intervals)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "intervals",
                value: intervals.to_string(),
            })?;

        Ok(Self {
            duration_secs: duration_secs.unsigned_abs(),
            intervals,
        })
    }

    /// Execution window.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }

    /// Number of slices.
    #[must_use]
    pub const fn slice_count(&self) -> u32 {
        self.intervals.get()
    }

    /// Quantity of each slice: the total divided evenly, rounded to 8 dp.
    #[must_use]
    pub fn slice_quantity(&self, total_quantity: Decimal) -> Decimal {
        (total_quantity / Decimal::from(self.intervals.get())).round_dp(SLICE_SCALE)
    }

    /// Wait between consecutive slices.
    #[must_use]
    pub fn slice_delay(&self) -> Duration {
        self.duration() / self.intervals.get()
    }

    /// Delay before slice `index`; the first slice goes out immediately.
    #[must_use]
    pub fn delay_before(&self, index: u32) -> Duration {
        if index == 0 {
            Duration::ZERO
        } else {
            self.slice_delay()
        }
    }
}
