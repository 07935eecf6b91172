// File: crates/chart-core/src/scale.rs
// Summary: Data-space to pixel-space metrics, point mapping, and bar slot layout.

use tracing::{debug, warn};

use crate::axis::{generate_ticks, TickSpec};
use crate::error::{ChartError, Result};
use crate::family::ChartFamily;
use crate::geometry::{clamp, RectF, ScreenPoint};
use crate::types::{ChartPoint, Padding, Size, DEFAULT_TICK_COUNT};

/// Fraction of each bar slot covered by the bar body.
pub const DEFAULT_BAR_WIDTH_RATIO: f32 = 0.6;

/// A non-empty, finite value interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const UNIT: ValueRange = ValueRange { min: 0.0, max: 1.0 };

    /// Fails with `DegenerateRange` unless `min < max` and both are finite.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if min.is_finite() && max.is_finite() && max > min {
            Ok(Self { min, max })
        } else {
            Err(ChartError::DegenerateRange { min, max })
        }
    }

    /// Substitute range for a zero-width or inverted interval: `[v-0.5, v+0.5]`,
    /// or `[v, v+1]` when the axis is pinned to a zero baseline.
    pub fn widened(min: f64, max: f64, zero_baseline: bool) -> Self {
        let v = if min.is_finite() { min } else if max.is_finite() { max } else { 0.0 };
        if zero_baseline {
            Self { min: v, max: v + 1.0 }
        } else {
            Self { min: v - 0.5, max: v + 0.5 }
        }
    }

    /// `new`, falling back to `widened` with a debug trace.
    pub fn or_widened(min: f64, max: f64, zero_baseline: bool) -> Self {
        Self::new(min, max).unwrap_or_else(|err| {
            debug!(%err, "substituting minimal value range");
            Self::widened(min, max, zero_baseline)
        })
    }

    #[inline]
    pub fn span(&self) -> f64 { self.max - self.min }
}

/// Options for `compute_metrics`.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricsOptions {
    pub tick_count: usize,
    pub family: ChartFamily,
    /// Sparkline mode: near-zero padding.
    pub minimal: bool,
    /// Overrides the mode's default padding.
    pub padding: Option<Padding>,
    pub forced_min: Option<f64>,
    pub forced_max: Option<f64>,
}

impl Default for MetricsOptions {
    fn default() -> Self {
        Self {
            tick_count: DEFAULT_TICK_COUNT,
            family: ChartFamily::Line,
            minimal: false,
            padding: None,
            forced_min: None,
            forced_max: None,
        }
    }
}

impl MetricsOptions {
    pub fn for_family(family: ChartFamily) -> Self {
        Self { family, ..Self::default() }
    }
    pub fn with_tick_count(mut self, n: usize) -> Self { self.tick_count = n; self }
    pub fn with_minimal(mut self, minimal: bool) -> Self { self.minimal = minimal; self }
    pub fn with_padding(mut self, padding: Padding) -> Self { self.padding = Some(padding); self }
    pub fn with_forced_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.forced_min = min;
        self.forced_max = max;
        self
    }

    pub fn effective_padding(&self) -> Padding {
        self.padding.unwrap_or(Padding::for_mode(self.minimal))
    }
}

/// Pixel-space drawing metrics for one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartMetrics {
    pub padding_x: f32,
    pub padding_y: f32,
    pub plot_width: f32,
    pub plot_height: f32,
    pub min_y: f64,
    pub max_y: f64,
    pub ticks: Vec<f64>,
}

impl ChartMetrics {
    /// Pixel Y for a data value. Pixel Y grows downward, so larger values map higher.
    pub fn value_to_px(&self, value: f64) -> f32 {
        let range = ValueRange::or_widened(self.min_y, self.max_y, false);
        let ratio = (value - range.min) / range.span();
        self.plot_height - (ratio as f32) * self.plot_height
    }

    /// Pixel X for an ordinal index among `count` points.
    /// A lone point sits at the horizontal center of the plot area.
    pub fn index_to_px(&self, index: f64, count: usize) -> f32 {
        match point_spacing(self.plot_width, count) {
            Ok(spacing) => self.padding_x + index as f32 * spacing,
            Err(_) => self.padding_x + self.plot_width * 0.5,
        }
    }

    /// `(tick value, pixel y)` pairs for grid lines and axis labels.
    pub fn tick_positions(&self) -> Vec<(f64, f32)> {
        self.ticks.iter().map(|&t| (t, self.value_to_px(t))).collect()
    }
}

/// Horizontal distance between consecutive points.
pub fn point_spacing(plot_width: f32, count: usize) -> Result<f32> {
    if count < 2 {
        return Err(ChartError::InsufficientPoints { count });
    }
    Ok(plot_width / (count - 1) as f32)
}

/// Compute padding, plot area, Y bounds and ticks for `values` on a `canvas`.
///
/// Final Y bounds are the forced bounds when given, else the tick extent, else
/// the data extent. Zero-width ranges are widened instead of dividing by zero.
pub fn compute_metrics(canvas: Size, values: &[f64], opts: &MetricsOptions) -> ChartMetrics {
    let padding = opts.effective_padding();
    let plot_width = (canvas.width - padding.x).max(0.0);
    let plot_height = (canvas.height - padding.y).max(0.0);
    let zero_baseline = opts.family.forces_zero_baseline();

    let (mut forced_min, mut forced_max) = (
        opts.forced_min.filter(|v| v.is_finite()),
        opts.forced_max.filter(|v| v.is_finite()),
    );
    if let (Some(lo), Some(hi)) = (forced_min, forced_max) {
        if lo >= hi {
            warn!(lo, hi, "ignoring inverted forced Y range");
            forced_min = None;
            forced_max = None;
        }
    }

    let data = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            None => Some((v, v)),
        });
    let data_range = match data {
        Some((lo, hi)) => {
            let lo = if zero_baseline { 0.0 } else { lo };
            ValueRange::or_widened(lo, hi, zero_baseline)
        }
        None => ValueRange::UNIT,
    };

    let spec = TickSpec {
        tick_count: opts.tick_count,
        family: opts.family,
        forced_min,
        forced_max,
    };
    let ticks = generate_ticks(data_range.min, data_range.max, &spec);

    let min_y = forced_min.or(ticks.first().copied()).unwrap_or(data_range.min);
    let max_y = forced_max.or(ticks.last().copied()).unwrap_or(data_range.max);
    let y = ValueRange::or_widened(min_y, max_y, zero_baseline);

    ChartMetrics {
        padding_x: padding.x,
        padding_y: padding.y,
        plot_width,
        plot_height,
        min_y: y.min,
        max_y: y.max,
        ticks,
    }
}

/// Map plot points to pixel coordinates. `point.x` is the ordinal index.
pub fn map_to_pixels(points: &[ChartPoint], metrics: &ChartMetrics) -> Vec<ScreenPoint> {
    let n = points.len();
    points
        .iter()
        .map(|p| ScreenPoint::new(metrics.index_to_px(p.x, n), metrics.value_to_px(p.y)))
        .collect()
}

/// Per-item slots for bar, range and stacked families.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarLayout {
    pub origin_x: f32,
    pub slot_width: f32,
    pub bar_width: f32,
}

impl BarLayout {
    /// `None` when there are no items. `width_ratio` is clamped to `(0, 1]`.
    pub fn new(metrics: &ChartMetrics, item_count: usize, width_ratio: f32) -> Option<Self> {
        if item_count == 0 {
            return None;
        }
        let ratio = if width_ratio.is_finite() && width_ratio > 0.0 {
            width_ratio.min(1.0)
        } else {
            DEFAULT_BAR_WIDTH_RATIO
        };
        let slot_width = metrics.plot_width / item_count as f32;
        Some(Self { origin_x: metrics.padding_x, slot_width, bar_width: slot_width * ratio })
    }

    /// Left edge of the bar body in slot `index`.
    #[inline]
    pub fn bar_left(&self, index: usize) -> f32 {
        self.origin_x + index as f32 * self.slot_width + (self.slot_width - self.bar_width) * 0.5
    }

    #[inline]
    pub fn slot_center(&self, index: usize) -> f32 {
        self.origin_x + (index as f32 + 0.5) * self.slot_width
    }

    /// Bar body spanning `[low, high]` in data space, clipped to the plot area.
    pub fn bar_rect(&self, index: usize, low: f64, high: f64, metrics: &ChartMetrics) -> RectF {
        let a = clamp(metrics.value_to_px(low), 0.0, metrics.plot_height);
        let b = clamp(metrics.value_to_px(high), 0.0, metrics.plot_height);
        let left = self.bar_left(index);
        RectF::from_ltrb(left, a.min(b), left + self.bar_width, a.max(b))
    }

    /// Segments stacked upward from zero; negative segments count as zero.
    pub fn stacked_rects(&self, index: usize, segments: &[f64], metrics: &ChartMetrics) -> Vec<RectF> {
        let mut base = 0.0;
        segments
            .iter()
            .map(|&s| {
                let top = base + s.max(0.0);
                let rect = self.bar_rect(index, base, top, metrics);
                base = top;
                rect
            })
            .collect()
    }
}

/// Total height of each stacked item, used as the value list for `compute_metrics`.
pub fn stack_totals(items: &[Vec<f64>]) -> Vec<f64> {
    items.iter().map(|segs| segs.iter().map(|s| s.max(0.0)).sum()).collect()
}
