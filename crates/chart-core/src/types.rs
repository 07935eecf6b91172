// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (canvas size, paddings, plot-ready points).

/// Default canvas width in pixels.
pub const WIDTH: f32 = 360.0;
/// Default canvas height in pixels.
pub const HEIGHT: f32 = 220.0;

/// Default number of Y-axis ticks requested from the tick generator.
pub const DEFAULT_TICK_COUNT: usize = 5;

/// Canvas dimensions, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

/// Room reserved for axes and labels, in pixels.
/// `x` is taken from the left edge, `y` from the bottom edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Padding {
    pub x: f32,
    pub y: f32,
}

impl Padding {
    /// Full charts leave room for Y tick labels and X category labels.
    pub const FULL: Padding = Padding::new(40.0, 30.0);
    /// Sparkline-style charts draw edge to edge.
    pub const MINIMAL: Padding = Padding::new(2.0, 2.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn for_mode(minimal: bool) -> Self {
        if minimal { Self::MINIMAL } else { Self::FULL }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::FULL
    }
}

/// A plot-ready point. `x` is the ordinal position in its sequence, not a timestamp.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub label: Option<String>,
}

impl ChartPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, label: None }
    }

    pub fn labeled(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self { x, y, label: Some(label.into()) }
    }

    /// Build points from bare values, indexed from zero.
    pub fn from_values(values: &[f64]) -> Vec<ChartPoint> {
        values.iter().enumerate().map(|(i, &v)| ChartPoint::new(i as f64, v)).collect()
    }
}
