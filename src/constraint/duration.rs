//! Duration units accepted by `older_than`

use crate::error::{ConstraintError, Result};
use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;

/// Time unit of an `older_than` amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
}

impl DurationUnit {
    /// Parse a unit token. Matching is exact and case-sensitive.
    pub fn parse(token: &str) -> Result<Self> {
        match token {
            "ms" => Ok(DurationUnit::Millisecond),
            "s" | "sec" | "second" | "seconds" => Ok(DurationUnit::Second),
            "min" | "minute" | "minutes" => Ok(DurationUnit::Minute),
            "h" | "hour" | "hours" => Ok(DurationUnit::Hour),
            "d" | "day" | "days" => Ok(DurationUnit::Day),
            _ => Err(ConstraintError::malformed(token, "unexpected duration unit")),
        }
    }

    /// `amount` of this unit, or `None` on overflow
    pub fn delta(self, amount: i64) -> Option<TimeDelta> {
        match self {
            DurationUnit::Millisecond => TimeDelta::try_milliseconds(amount),
            DurationUnit::Second => TimeDelta::try_seconds(amount),
            DurationUnit::Minute => TimeDelta::try_minutes(amount),
            DurationUnit::Hour => TimeDelta::try_hours(amount),
            DurationUnit::Day => TimeDelta::try_days(amount),
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DurationUnit::Millisecond => "ms",
            DurationUnit::Second => "s",
            DurationUnit::Minute => "min",
            DurationUnit::Hour => "h",
            DurationUnit::Day => "d",
        };
        f.write_str(name)
    }
}

/// Epoch milliseconds of `now - amount * unit`
pub fn threshold_millis(now: DateTime<Utc>, amount: i64, unit: DurationUnit) -> Result<i64> {
    let threshold = unit
        .delta(amount)
        .and_then(|delta| now.checked_sub_signed(delta))
        .ok_or_else(|| {
            ConstraintError::malformed(
                &format!("{} {}", amount, unit),
                "duration out of range",
            )
        })?;
    Ok(threshold.timestamp_millis())
}
