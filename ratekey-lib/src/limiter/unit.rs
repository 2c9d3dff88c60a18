use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::error::RateKeyError;

/// Time unit of a rate limit; determines the width of the counting window.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RateLimitUnit {
    #[serde(alias = "SECOND")]
    Second,
    #[serde(alias = "MINUTE")]
    Minute,
    #[serde(alias = "HOUR")]
    Hour,
    #[serde(alias = "DAY")]
    Day,
    #[serde(alias = "WEEK")]
    Week,
    #[serde(alias = "MONTH")]
    Month,
    #[serde(alias = "YEAR")]
    Year,
}

impl RateLimitUnit {
    pub const ALL: [RateLimitUnit; 7] = [
        RateLimitUnit::Second,
        RateLimitUnit::Minute,
        RateLimitUnit::Hour,
        RateLimitUnit::Day,
        RateLimitUnit::Week,
        RateLimitUnit::Month,
        RateLimitUnit::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RateLimitUnit::Second => "second",
            RateLimitUnit::Minute => "minute",
            RateLimitUnit::Hour => "hour",
            RateLimitUnit::Day => "day",
            RateLimitUnit::Week => "week",
            RateLimitUnit::Month => "month",
            RateLimitUnit::Year => "year",
        }
    }

    /// Counters for per-second limits expire on a finer schedule downstream.
    #[inline]
    pub fn is_per_second(&self) -> bool {
        matches!(self, RateLimitUnit::Second)
    }
}

/// Window size in seconds for a unit.
///
/// Months are fixed at 30 days and years at 365 days so every node buckets
/// identically without consulting a calendar.
#[inline]
pub fn unit_to_divider(unit: RateLimitUnit) -> i64 {
    match unit {
        RateLimitUnit::Second => 1,
        RateLimitUnit::Minute => 60,
        RateLimitUnit::Hour => 60 * 60,
        RateLimitUnit::Day => 60 * 60 * 24,
        RateLimitUnit::Week => 60 * 60 * 24 * 7,
        RateLimitUnit::Month => 60 * 60 * 24 * 30,
        RateLimitUnit::Year => 60 * 60 * 24 * 365,
    }
}

/// Start of the window containing `now`, i.e. `now` floored to a multiple of the
/// unit's divider.
///
/// Near `i64::MIN` the floored value is not representable; those timestamps fall
/// back to truncation toward zero so the result is always defined.
#[inline]
pub fn window_start(now: i64, unit: RateLimitUnit) -> i64 {
    let divider = unit_to_divider(unit);
    now.checked_sub(now.rem_euclid(divider)).unwrap_or(now - now % divider)
}

impl fmt::Display for RateLimitUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RateLimitUnit {
    type Err = RateKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        RateLimitUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == lowered)
            .ok_or_else(|| RateKeyError::InvalidUnit(s.to_string()))
    }
}
