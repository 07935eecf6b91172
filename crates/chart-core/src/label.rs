// File: crates/chart-core/src/label.rs
// Summary: Category labels for aggregated buckets and numeric tick labels.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};

use crate::series::TimeSeries;
use crate::types::ChartPoint;
use crate::unit::{first_of_month, week_start, TimeUnit};

/// Weekday names, Sunday first.
pub const WEEKDAY_NAMES: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelStyle {
    /// `"{h}시"`
    Hour,
    /// `"{m}/{d}"`
    Day,
    /// Weekday name; used for day-level points inside a one-week window.
    Weekday,
    /// `"{month}월 {n}주차"`
    WeekOfMonth,
    /// `"{year}년 {month}월"`
    Month,
    /// `"{year}년"`
    Year,
}

impl LabelStyle {
    pub fn for_unit(unit: TimeUnit) -> Self {
        match unit {
            TimeUnit::Hour => LabelStyle::Hour,
            TimeUnit::Day => LabelStyle::Day,
            TimeUnit::Week => LabelStyle::WeekOfMonth,
            TimeUnit::Month => LabelStyle::Month,
            TimeUnit::Year => LabelStyle::Year,
        }
    }
}

/// 1-based index of `date`'s week among the Sundays of its month, counting from
/// the month's first Sunday. Returns `(month, n)` of the week's Sunday.
pub fn week_of_month(date: NaiveDate) -> (u32, u32) {
    let sunday = week_start(date);
    let first = first_of_month(sunday);
    let first_sunday_day = 1 + (7 - first.weekday().num_days_from_sunday()) % 7;
    let n = (sunday.day() - first_sunday_day) / 7 + 1;
    (sunday.month(), n)
}

pub fn format_label<Tz: TimeZone>(timestamp: DateTime<Utc>, style: LabelStyle, tz: &Tz) -> String {
    let local = timestamp.with_timezone(tz).naive_local();
    let date = local.date();
    match style {
        LabelStyle::Hour => format!("{}시", local.hour()),
        LabelStyle::Day => format!("{}/{}", date.month(), date.day()),
        LabelStyle::Weekday => WEEKDAY_NAMES[date.weekday().num_days_from_sunday() as usize].to_string(),
        LabelStyle::WeekOfMonth => {
            let (month, n) = week_of_month(date);
            format!("{month}월 {n}주차")
        }
        LabelStyle::Month => format!("{}년 {}월", date.year(), date.month()),
        LabelStyle::Year => format!("{}년", date.year()),
    }
}

/// Convert a series into plot-ready points. `style` defaults to the series' unit.
pub fn to_chart_points<Tz: TimeZone>(
    series: &TimeSeries,
    style: Option<LabelStyle>,
    tz: &Tz,
) -> Vec<ChartPoint> {
    let style = style.unwrap_or_else(|| LabelStyle::for_unit(series.unit));
    series
        .samples()
        .enumerate()
        .map(|(i, s)| ChartPoint::labeled(i as f64, s.value, format_label(s.timestamp, style, tz)))
        .collect()
}

/// Axis tick text: integers without decimals, otherwise up to two trimmed decimals.
pub fn format_tick(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        return format!("{}", value.round() as i64);
    }
    let s = format!("{value:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
