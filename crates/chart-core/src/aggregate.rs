// File: crates/chart-core/src/aggregate.rs
// Summary: Calendar bucket aggregation (SUM / AVERAGE) of irregular time series.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use tracing::{debug, trace};

use crate::error::{ChartError, Result};
use crate::series::TimeSeries;
use crate::unit::{AggregationMode, TimeUnit};

#[derive(Debug)]
struct Bucket {
    sum: f64,
    /// Distinct source-unit slots seen in this bucket; the AVERAGE divisor.
    units: BTreeSet<Slot>,
    earliest: DateTime<Utc>,
}

/// A truncated wall-clock time plus the UTC offset it was read under.
/// The offset is kept only for HOUR so the repeated hour of a DST fall-back stays distinct;
/// coarser units keep 0 so both readings land in the same bucket.
type Slot = (NaiveDateTime, i32);

fn slot<Tz: TimeZone>(unit: TimeUnit, t: &DateTime<Tz>) -> Slot {
    let local = unit.truncate(t.naive_local());
    match unit {
        TimeUnit::Hour => (local, t.offset().fix().local_minus_utc()),
        _ => (local, 0),
    }
}

/// Instant at which a bucket starts.
fn slot_start<Tz: TimeZone>(unit: TimeUnit, tz: &Tz, (local, offset): Slot) -> Option<DateTime<Utc>> {
    match unit {
        TimeUnit::Hour => Some(Utc.from_utc_datetime(&(local - Duration::seconds(i64::from(offset))))),
        _ => resolve_local(tz, local),
    }
}

/// Resample `series` into `target` buckets, truncating in `tz` wall-clock time.
///
/// - SUM into the series' own unit returns the input unchanged.
/// - AVERAGE requires the native unit to be strictly finer than `target`; each bucket
///   is divided by the number of distinct native units actually present in it.
///
/// Output is sorted by bucket start and carries no label.
pub fn aggregate<Tz: TimeZone>(
    series: &TimeSeries,
    target: TimeUnit,
    mode: AggregationMode,
    tz: &Tz,
) -> Result<TimeSeries> {
    let source = series.unit;
    if mode == AggregationMode::Average && !source.is_finer_than(target) {
        return Err(ChartError::InvalidAggregation { from: source, to: target });
    }
    if mode == AggregationMode::Sum && source == target {
        trace!(unit = %source, len = series.len(), "sum into native unit; identity");
        return Ok(series.clone());
    }

    let mut buckets: BTreeMap<Slot, Bucket> = BTreeMap::new();
    let mut skipped = 0usize;
    for sample in series.samples() {
        if !sample.value.is_finite() {
            skipped += 1;
            continue;
        }
        let local = sample.timestamp.with_timezone(tz);
        let key = slot(target, &local);
        let bucket = buckets.entry(key).or_insert_with(|| Bucket {
            sum: 0.0,
            units: BTreeSet::new(),
            earliest: sample.timestamp,
        });
        bucket.sum += sample.value;
        bucket.units.insert(slot(source, &local));
        bucket.earliest = bucket.earliest.min(sample.timestamp);
    }
    if skipped > 0 {
        trace!(skipped, "dropped non-finite samples");
    }

    let mut rows: Vec<(DateTime<Utc>, f64)> = buckets
        .into_iter()
        .map(|(key, bucket)| {
            let value = match mode {
                AggregationMode::Sum => bucket.sum,
                AggregationMode::Average => bucket.sum / bucket.units.len().max(1) as f64,
            };
            (slot_start(target, tz, key).unwrap_or(bucket.earliest), value)
        })
        .collect();
    // A repeated DST hour sorts by offset, not by instant.
    rows.sort_by_key(|&(t, _)| t);
    let (timestamps, values): (Vec<_>, Vec<_>) = rows.into_iter().unzip();

    debug!(
        from = %source,
        to = %target,
        %mode,
        input = series.len(),
        buckets = values.len(),
        "aggregated series"
    );
    TimeSeries::new(timestamps, values, target)
}

/// Map a local wall-clock bucket start back to an instant in `tz`.
/// Ambiguous times take the earlier instant; times inside a DST gap move forward
/// to the first valid hour after it.
pub fn resolve_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> Option<DateTime<Utc>> {
    let mut candidate = local;
    // Real-world DST gaps are at most a few hours.
    for _ in 0..4 {
        match tz.from_local_datetime(&candidate) {
            LocalResult::Single(t) => return Some(t.with_timezone(&Utc)),
            LocalResult::Ambiguous(earliest, _) => return Some(earliest.with_timezone(&Utc)),
            LocalResult::None => candidate += Duration::hours(1),
        }
    }
    None
}
