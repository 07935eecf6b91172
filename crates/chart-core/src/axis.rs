// File: crates/chart-core/src/axis.rs
// Summary: "Nice" Y-axis tick generation with optional user-forced bounds.

use tracing::warn;

use crate::family::ChartFamily;
use crate::types::DEFAULT_TICK_COUNT;

/// Tolerance for float drift when stepping ticks and matching forced bounds.
pub const TICK_EPSILON: f64 = 1e-6;
/// Upper bound on emitted ticks; forced bounds far outside the data can otherwise explode.
pub const MAX_TICKS: usize = 1_000;

/// Tick request parameters besides the data bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickSpec {
    pub tick_count: usize,
    /// Bar-like families pin the lower bound to zero.
    pub family: ChartFamily,
    pub forced_min: Option<f64>,
    pub forced_max: Option<f64>,
}

impl Default for TickSpec {
    fn default() -> Self {
        Self { tick_count: DEFAULT_TICK_COUNT, family: ChartFamily::Line, forced_min: None, forced_max: None }
    }
}

impl TickSpec {
    pub fn with_count(tick_count: usize) -> Self {
        Self { tick_count, ..Self::default() }
    }

    pub fn family(mut self, family: ChartFamily) -> Self {
        self.family = family;
        self
    }

    pub fn forced(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.forced_min = min;
        self.forced_max = max;
        self
    }
}

/// Pick the step from `{1, 2, 5, 10} x 10^k` closest to `raw_step`.
pub fn nice_step(raw_step: f64) -> f64 {
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return 1.0;
    }
    let power = 10f64.powf(raw_step.log10().floor());
    [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * power)
        .min_by(|a, b| (a - raw_step).abs().total_cmp(&(b - raw_step).abs()))
        .unwrap_or(power)
}

/// Round to 6 decimal digits to suppress float noise (also folds `-0.0` into `0.0`).
#[inline]
pub fn round6(v: f64) -> f64 {
    (v * 1e6).round() / 1e6 + 0.0
}

/// Convenience wrapper: nice ticks without family hint or forced bounds.
pub fn nice_ticks(min: f64, max: f64, tick_count: usize) -> Vec<f64> {
    generate_ticks(min, max, &TickSpec::with_count(tick_count))
}

/// Ascending, deduplicated tick values covering `[min, max]`.
///
/// Forced bounds always replace the nice bounds, even when that cuts off data,
/// and appear verbatim as the first/last ticks. When a forced range would need more
/// than [`MAX_TICKS`] steps the step grows by powers of ten instead.
pub fn generate_ticks(min: f64, max: f64, spec: &TickSpec) -> Vec<f64> {
    let min = if spec.family.forces_zero_baseline() { 0.0 } else { min };
    if !min.is_finite() || !max.is_finite() || min >= max {
        return vec![0.0, 1.0];
    }

    let forced_min = spec.forced_min.filter(|v| v.is_finite());
    let forced_max = spec.forced_max.filter(|v| v.is_finite());
    let bounds = |step: f64| {
        let nice_min = (min / step).floor() * step;
        let nice_max = (max / step).ceil() * step;
        (nice_min, forced_min.unwrap_or(nice_min), forced_max.unwrap_or(nice_max))
    };

    let raw_step = (max - min) / spec.tick_count.max(1) as f64;
    let mut step = nice_step(raw_step);
    let (mut nice_min, mut lo, mut hi) = bounds(step);
    // A forced range far wider than the data coarsens the step until it fits under MAX_TICKS.
    while (hi - lo) / step > (MAX_TICKS - 2) as f64 {
        step *= 10.0;
        (nice_min, lo, hi) = bounds(step);
    }

    let mut ticks = Vec::new();
    if let Some(f) = forced_min {
        ticks.push(f);
    }
    // nice_min is already a step multiple; re-deriving it via ceil can overshoot by a step.
    let start = match forced_min {
        Some(f) => (f / step - TICK_EPSILON).ceil() * step,
        None => nice_min,
    };
    let collides = |t: f64, bound: Option<f64>| bound.is_some_and(|b| (t - b).abs() <= TICK_EPSILON);
    let mut k = 0usize;
    loop {
        let t = start + k as f64 * step;
        if t > hi + TICK_EPSILON {
            break;
        }
        if k >= MAX_TICKS {
            warn!(min, max, step, lo, hi, "tick generation truncated");
            break;
        }
        if !collides(t, forced_min) && !collides(t, forced_max) {
            ticks.push(t);
        }
        k += 1;
    }
    if let Some(f) = forced_max {
        ticks.push(f);
    }

    let mut ticks: Vec<f64> = ticks.into_iter().map(round6).collect();
    ticks.sort_by(f64::total_cmp);
    ticks.dedup();
    ticks
}
