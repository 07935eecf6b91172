// File: crates/chart-core/src/chart.rs
// Summary: Per-render layout pipeline: data + family -> metrics, pixel geometry, labels,
// then emission of primitives to a drawing backend.

use tracing::debug;

use crate::backend::{DrawBackend, Role};
use crate::family::ChartFamily;
use crate::geometry::{RectF, ScreenPoint};
use crate::label::format_tick;
use crate::pie::{solve_angles, PieSlice};
use crate::placement::{place_labels, LABEL_OFFSET};
use crate::scale::{compute_metrics, map_to_pixels, stack_totals, BarLayout, ChartMetrics, MetricsOptions, DEFAULT_BAR_WIDTH_RATIO};
use crate::types::{ChartPoint, Size};

const POINT_RADIUS: f32 = 3.0;
const TICK_LABEL_GAP: f32 = 4.0;

/// Low/high pair for range bars.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeItem {
    pub low: f64,
    pub high: f64,
    pub label: Option<String>,
}

/// Stacked bar item; segments stack upward in order.
#[derive(Clone, Debug, PartialEq)]
pub struct StackItem {
    pub segments: Vec<f64>,
    pub label: Option<String>,
}

/// Input data for one chart. Families adapt whichever shape they are given.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartData {
    Points(Vec<ChartPoint>),
    Ranges(Vec<RangeItem>),
    Stacks(Vec<StackItem>),
}

impl ChartData {
    pub fn len(&self) -> usize {
        match self {
            ChartData::Points(p) => p.len(),
            ChartData::Ranges(r) => r.len(),
            ChartData::Stacks(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn labels(&self) -> Vec<Option<String>> {
        match self {
            ChartData::Points(p) => p.iter().map(|p| p.label.clone()).collect(),
            ChartData::Ranges(r) => r.iter().map(|r| r.label.clone()).collect(),
            ChartData::Stacks(s) => s.iter().map(|s| s.label.clone()).collect(),
        }
    }

    /// Single-valued view: ranges use their high, stacks their total.
    pub fn as_points(&self) -> Vec<ChartPoint> {
        match self {
            ChartData::Points(p) => p.clone(),
            ChartData::Ranges(r) => r
                .iter()
                .enumerate()
                .map(|(i, r)| ChartPoint { x: i as f64, y: r.high, label: r.label.clone() })
                .collect(),
            ChartData::Stacks(s) => s
                .iter()
                .enumerate()
                .map(|(i, s)| ChartPoint {
                    x: i as f64,
                    y: s.segments.iter().map(|v| v.max(0.0)).sum(),
                    label: s.label.clone(),
                })
                .collect(),
        }
    }

    pub fn as_ranges(&self) -> Vec<(f64, f64)> {
        match self {
            ChartData::Points(p) => p.iter().map(|p| (p.y, p.y)).collect(),
            ChartData::Ranges(r) => r.iter().map(|r| (r.low.min(r.high), r.low.max(r.high))).collect(),
            ChartData::Stacks(_) => self.as_points().iter().map(|p| (0.0, p.y)).collect(),
        }
    }

    pub fn as_stacks(&self) -> Vec<Vec<f64>> {
        match self {
            ChartData::Stacks(s) => s.iter().map(|s| s.segments.clone()).collect(),
            _ => self.as_points().iter().map(|p| vec![p.y]).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutOptions {
    pub metrics: MetricsOptions,
    pub bar_width_ratio: f32,
    pub label_offset: f32,
    /// Inner radius of a donut as a fraction of the outer radius.
    pub donut_hole_ratio: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            metrics: MetricsOptions::default(),
            bar_width_ratio: DEFAULT_BAR_WIDTH_RATIO,
            label_offset: LABEL_OFFSET,
            donut_hole_ratio: 0.55,
        }
    }
}

impl LayoutOptions {
    pub fn for_family(family: ChartFamily) -> Self {
        Self { metrics: MetricsOptions::for_family(family), ..Self::default() }
    }

    pub fn family(&self) -> ChartFamily { self.metrics.family }
}

/// Angular geometry for pie-family charts.
#[derive(Clone, Debug, PartialEq)]
pub struct PieLayout {
    pub center: ScreenPoint,
    pub radius: f32,
    pub inner_radius: f32,
    pub slices: Vec<PieSlice>,
}

/// Everything a backend needs to draw one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub family: ChartFamily,
    pub canvas: Size,
    pub minimal: bool,
    /// `None` for angular families.
    pub metrics: Option<ChartMetrics>,
    pub points: Vec<ScreenPoint>,
    /// Value label anchors, parallel to `points` (point-label families only).
    pub label_anchors: Vec<ScreenPoint>,
    pub value_labels: Vec<String>,
    /// Bar bodies with their segment index (0 unless stacked).
    pub bars: Vec<(RectF, usize)>,
    pub category_labels: Vec<(f32, String)>,
    pub pie: Option<PieLayout>,
}

impl ChartLayout {
    pub fn compute(canvas: Size, data: &ChartData, opts: &LayoutOptions) -> Self {
        let family = opts.family();
        let traits = family.traits();
        let mut layout = ChartLayout {
            family,
            canvas,
            minimal: opts.metrics.minimal,
            metrics: None,
            points: Vec::new(),
            label_anchors: Vec::new(),
            value_labels: Vec::new(),
            bars: Vec::new(),
            category_labels: Vec::new(),
            pie: None,
        };

        if !traits.cartesian {
            let values: Vec<f64> = data.as_points().iter().map(|p| p.y).collect();
            let pad = opts.metrics.effective_padding().y;
            let radius = (canvas.width.min(canvas.height) * 0.5 - pad).max(0.0);
            let inner_radius = match family {
                ChartFamily::Donut => radius * opts.donut_hole_ratio.clamp(0.0, 0.95),
                _ => 0.0,
            };
            let slices = solve_angles(&values);
            layout.value_labels = slices.iter().map(|s| format!("{}%", format_tick(s.ratio * 100.0))).collect();
            layout.pie = Some(PieLayout {
                center: ScreenPoint::new(canvas.width * 0.5, canvas.height * 0.5),
                radius,
                inner_radius,
                slices,
            });
            debug!(%family, items = values.len(), "laid out angular chart");
            return layout;
        }

        let n = data.len();
        let labels = data.labels();
        match family {
            ChartFamily::Bar | ChartFamily::Range | ChartFamily::StackedBar => {
                // (low, high) per item for single-body bars; stacks handled separately.
                let stacks = data.as_stacks();
                let ranges = match family {
                    ChartFamily::Range => data.as_ranges(),
                    _ => data.as_points().iter().map(|p| (0.0, p.y)).collect(),
                };
                let values: Vec<f64> = match family {
                    ChartFamily::StackedBar => stack_totals(&stacks),
                    _ => ranges.iter().flat_map(|&(lo, hi)| [lo, hi]).collect(),
                };
                let metrics = compute_metrics(canvas, &values, &opts.metrics);
                if let Some(bars) = BarLayout::new(&metrics, n, opts.bar_width_ratio) {
                    for i in 0..n {
                        if family == ChartFamily::StackedBar {
                            let rects = bars.stacked_rects(i, &stacks[i], &metrics);
                            layout.bars.extend(rects.into_iter().enumerate().map(|(k, r)| (r, k)));
                        } else {
                            let (lo, hi) = ranges[i];
                            layout.bars.push((bars.bar_rect(i, lo, hi, &metrics), 0));
                        }
                        if let Some(Some(label)) = labels.get(i) {
                            layout.category_labels.push((bars.slot_center(i), label.clone()));
                        }
                    }
                }
                layout.metrics = Some(metrics);
            }
            _ => {
                let points = data.as_points();
                let values: Vec<f64> = points.iter().map(|p| p.y).collect();
                let metrics = compute_metrics(canvas, &values, &opts.metrics);
                layout.points = map_to_pixels(&points, &metrics);
                if traits.point_labels {
                    layout.label_anchors = place_labels(&layout.points, opts.label_offset);
                    layout.value_labels = values.iter().map(|&v| format_tick(v)).collect();
                }
                for (sp, label) in layout.points.iter().zip(&labels) {
                    if let Some(label) = label {
                        layout.category_labels.push((sp.x, label.clone()));
                    }
                }
                layout.metrics = Some(metrics);
            }
        }
        debug!(%family, items = n, "laid out cartesian chart");
        layout
    }

    /// Emit primitives. Minimal charts skip axes, grid and text.
    pub fn draw(&self, backend: &mut impl DrawBackend) {
        if let Some(pie) = &self.pie {
            self.draw_pie(pie, backend);
            return;
        }
        let Some(metrics) = &self.metrics else { return };

        if !self.minimal {
            draw_axes(metrics, backend);
            let label_y = metrics.plot_height + metrics.padding_y * 0.6;
            for (x, label) in &self.category_labels {
                backend.text(ScreenPoint::new(*x, label_y), label, Role::CategoryLabel);
            }
        }

        for &(rect, segment) in &self.bars {
            let role = match self.family {
                ChartFamily::StackedBar => Role::Segment(segment),
                _ => Role::Fill,
            };
            backend.rect(rect, role);
        }

        if self.points.is_empty() {
            return;
        }
        if self.family == ChartFamily::Area && self.points.len() >= 2 {
            let first = self.points[0];
            let last = self.points[self.points.len() - 1];
            let mut region = self.points.clone();
            region.push(ScreenPoint::new(last.x, metrics.plot_height));
            region.push(ScreenPoint::new(first.x, metrics.plot_height));
            backend.polygon(&region, Role::Fill);
        }
        if self.points.len() >= 2 {
            backend.polyline(&self.points, Role::Series);
        }
        for &p in &self.points {
            backend.circle(p, POINT_RADIUS, Role::Series);
        }
        if !self.minimal {
            for (anchor, text) in self.label_anchors.iter().zip(&self.value_labels) {
                backend.text(*anchor, text, Role::ValueLabel);
            }
        }
    }

    fn draw_pie(&self, pie: &PieLayout, backend: &mut impl DrawBackend) {
        for (i, slice) in pie.slices.iter().enumerate() {
            if slice.sweep_angle_deg <= 0.0 {
                continue;
            }
            backend.arc(pie.center, pie.radius, pie.inner_radius, slice.start_angle_deg, slice.sweep_angle_deg, Role::Segment(i));
        }
        if self.minimal {
            return;
        }
        let label_radius = (pie.radius + pie.inner_radius) * 0.5;
        for (slice, text) in pie.slices.iter().zip(&self.value_labels) {
            if slice.sweep_angle_deg > 0.0 {
                backend.text(slice.label_anchor(pie.center, label_radius), text, Role::ValueLabel);
            }
        }
    }
}

fn draw_axes(metrics: &ChartMetrics, backend: &mut impl DrawBackend) {
    let left = metrics.padding_x;
    let right = metrics.padding_x + metrics.plot_width;
    for (value, y) in metrics.tick_positions() {
        backend.line(ScreenPoint::new(left, y), ScreenPoint::new(right, y), Role::Grid);
        backend.text(ScreenPoint::new(left - TICK_LABEL_GAP, y), &format_tick(value), Role::TickLabel);
    }
    let bottom = metrics.plot_height;
    backend.line(ScreenPoint::new(left, bottom), ScreenPoint::new(right, bottom), Role::Axis);
    backend.line(ScreenPoint::new(left, 0.0), ScreenPoint::new(left, bottom), Role::Axis);
}
