//! Source-to-target clock correction.

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime};
use std::fmt;

use crate::error::CorrectionError;

/// Default shift applied to vendor timestamps.
const DEFAULT_SHIFT_MINUTES: i64 = -60;

/// Default label for corrected timestamps (`-05:00`).
const DEFAULT_UTC_OFFSET_MINUTES: i32 = -300;

/// Fixed shift applied to every vendor timestamp, plus the UTC offset the
/// shifted wall-clock time is labelled with.
///
/// The shift is uniform: daylight-saving transitions are not considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockCorrection {
    shift: Duration,
    target: FixedOffset,
}

impl ClockCorrection {
    /// Create a correction from a shift and a target UTC offset, both in minutes.
    pub fn new(shift_minutes: i64, utc_offset_minutes: i32) -> Result<Self, CorrectionError> {
        let shift = Duration::try_minutes(shift_minutes)
            .ok_or(CorrectionError::ShiftOutOfRange(shift_minutes))?;
        let target = utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(CorrectionError::OffsetOutOfRange(utc_offset_minutes))?;
        Ok(Self { shift, target })
    }

    /// Shift applied to vendor timestamps.
    pub fn shift(&self) -> Duration {
        self.shift
    }

    /// UTC offset attached to corrected timestamps.
    pub fn target(&self) -> FixedOffset {
        self.target
    }

    /// Shift a naive vendor timestamp and attach the target offset.
    ///
    /// Returns `None` if the shifted time falls outside chrono's range.
    pub fn apply(&self, vendor: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        vendor
            .checked_add_signed(self.shift)?
            .and_local_timezone(self.target)
            .single()
    }
}

impl Default for ClockCorrection {
    /// One hour back, labelled `-05:00`.
    fn default() -> Self {
        // Both constants are well inside chrono's ranges.
        Self::new(DEFAULT_SHIFT_MINUTES, DEFAULT_UTC_OFFSET_MINUTES)
            .expect("default clock correction is in range")
    }
}

impl fmt::Display for ClockCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "shift {:+} min, labelled {}",
            self.shift.num_minutes(),
            self.target
        )
    }
}
