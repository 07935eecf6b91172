// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the aggregation engine and chart geometry API.

pub mod aggregate;
pub mod axis;
pub mod backend;
pub mod chart;
pub mod error;
pub mod family;
pub mod geometry;
pub mod label;
pub mod pie;
pub mod placement;
pub mod scale;
pub mod series;
pub mod types;
pub mod unit;

pub use aggregate::aggregate;
pub use axis::{generate_ticks, nice_ticks, TickSpec};
pub use backend::{DrawBackend, Primitive, RecordingBackend, Role};
pub use chart::{ChartData, ChartLayout, LayoutOptions, RangeItem, StackItem};
pub use error::{ChartError, Result};
pub use family::{ChartFamily, FamilyTraits};
pub use geometry::{RectF, ScreenPoint};
pub use label::{format_label, to_chart_points, LabelStyle};
pub use pie::{solve_angles, PieSlice};
pub use placement::place_labels;
pub use scale::{compute_metrics, map_to_pixels, BarLayout, ChartMetrics, MetricsOptions, ValueRange};
pub use series::{Sample, TimeSeries};
pub use types::{ChartPoint, Padding, Size};
pub use unit::{AggregationMode, TimeUnit};
