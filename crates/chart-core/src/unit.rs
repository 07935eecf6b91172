// File: crates/chart-core/src/unit.rs
// Summary: Time granularity ordering and aggregation modes.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::ChartError;

/// Calendar granularity. Ordering follows declaration order, so `Hour < Day < ... < Year`
/// and "smaller" means finer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeUnit {
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 5] = [
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Month,
        TimeUnit::Year,
    ];

    #[inline]
    pub fn is_finer_than(self, other: TimeUnit) -> bool { self < other }

    #[inline]
    pub fn is_coarser_than(self, other: TimeUnit) -> bool { self > other }

    /// Truncate a wall-clock time to the start of its bucket.
    /// Weeks start on Sunday.
    pub fn truncate(self, t: NaiveDateTime) -> NaiveDateTime {
        let date = t.date();
        match self {
            TimeUnit::Hour => date.and_hms_opt(t.hour(), 0, 0).unwrap_or(t),
            TimeUnit::Day => date.and_time(NaiveTime::MIN),
            TimeUnit::Week => week_start(date).and_time(NaiveTime::MIN),
            TimeUnit::Month => first_of_month(date).and_time(NaiveTime::MIN),
            TimeUnit::Year => NaiveDate::from_yo_opt(date.year(), 1)
                .unwrap_or(date)
                .and_time(NaiveTime::MIN),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }
}

/// Most recent Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hour" | "hourly" => Ok(TimeUnit::Hour),
            "day" | "daily" => Ok(TimeUnit::Day),
            "week" | "weekly" => Ok(TimeUnit::Week),
            "month" | "monthly" => Ok(TimeUnit::Month),
            "year" | "yearly" => Ok(TimeUnit::Year),
            _ => Err(ChartError::UnknownTimeUnit(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AggregationMode {
    Sum,
    Average,
}

impl fmt::Display for AggregationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregationMode::Sum => f.write_str("sum"),
            AggregationMode::Average => f.write_str("average"),
        }
    }
}

impl FromStr for AggregationMode {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sum" | "total" => Ok(AggregationMode::Sum),
            "average" | "avg" | "mean" => Ok(AggregationMode::Average),
            _ => Err(ChartError::UnknownMode(s.to_string())),
        }
    }
}
