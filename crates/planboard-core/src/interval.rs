//! Minute-of-day interval math.
//!
//! The board lives inside a single logical day: only the hour and minute
//! components of a timestamp matter for comparison, the date (and any
//! seconds) are ignored. All interval tests happen on minute offsets
//! since midnight, with half-open semantics: two intervals that merely
//! touch at an endpoint do not overlap.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Minutes since midnight for a wall-clock timestamp.
///
/// Derived from the hour and minute components only; date, seconds and
/// sub-second precision are ignored.
pub fn minute_of_day(time: &DateTime<Utc>) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Check that `end` comes strictly after `start` within the day.
pub fn is_ordered(start: &DateTime<Utc>, end: &DateTime<Utc>) -> bool {
    minute_of_day(end) > minute_of_day(start)
}

/// Duration of an ordered interval in minutes.
///
/// Fails with [`ValidationError::InvalidInterval`] when `end` is not
/// strictly after `start`; the endpoints are never swapped to "fix" the
/// interval.
pub fn duration_minutes(start: &DateTime<Utc>, end: &DateTime<Utc>) -> Result<i64, ValidationError> {
    if !is_ordered(start, end) {
        return Err(ValidationError::InvalidInterval {
            start: *start,
            end: *end,
        });
    }
    Ok(minute_of_day(end) - minute_of_day(start))
}

/// An interval normalized to minute-of-day offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinuteSpan {
    /// Start offset, minutes since midnight
    pub start: i64,
    /// End offset, minutes since midnight; always greater than `start`
    pub end: i64,
}

impl MinuteSpan {
    /// Normalize a wall-clock pair into a span.
    ///
    /// Returns `None` when the pair is not strictly ordered, so malformed
    /// input can never masquerade as a valid interval.
    pub fn from_times(start: &DateTime<Utc>, end: &DateTime<Utc>) -> Option<Self> {
        if !is_ordered(start, end) {
            return None;
        }
        Some(Self {
            start: minute_of_day(start),
            end: minute_of_day(end),
        })
    }

    /// Length of the span in minutes.
    pub fn minutes(&self) -> i64 {
        self.end - self.start
    }

    /// Half-open overlap test.
    ///
    /// True iff the spans share at least one instant strictly inside
    /// both; a shared boundary endpoint is not an overlap. Symmetric.
    pub fn overlaps(&self, other: &MinuteSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}
