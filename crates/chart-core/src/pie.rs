// File: crates/chart-core/src/pie.rs
// Summary: Angular layout for pie and donut charts.

use crate::geometry::ScreenPoint;

/// 12 o'clock in the backend's angle convention (0 deg = 3 o'clock, clockwise positive).
pub const START_ANGLE_DEG: f64 = -90.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieSlice {
    pub start_angle_deg: f64,
    pub sweep_angle_deg: f64,
    pub ratio: f64,
}

impl PieSlice {
    pub fn end_angle_deg(&self) -> f64 {
        self.start_angle_deg + self.sweep_angle_deg
    }

    pub fn mid_angle_deg(&self) -> f64 {
        self.start_angle_deg + self.sweep_angle_deg * 0.5
    }

    /// Point on the slice's bisector at `radius` from `center`; used for value labels.
    pub fn label_anchor(&self, center: ScreenPoint, radius: f32) -> ScreenPoint {
        let rad = self.mid_angle_deg().to_radians();
        ScreenPoint::new(
            center.x + radius * rad.cos() as f32,
            center.y + radius * rad.sin() as f32,
        )
    }
}

/// Contiguous clockwise slices starting at 12 o'clock, one per input in order.
///
/// Negative and non-finite magnitudes count as zero. A non-positive total yields
/// no slices.
pub fn solve_angles(values: &[f64]) -> Vec<PieSlice> {
    let magnitude = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
    let total: f64 = values.iter().map(|&v| magnitude(v)).sum();
    if total <= 0.0 || !total.is_finite() {
        return Vec::new();
    }

    let mut start = START_ANGLE_DEG;
    values
        .iter()
        .map(|&v| {
            let ratio = magnitude(v) / total;
            let sweep = ratio * 360.0;
            let slice = PieSlice { start_angle_deg: start, sweep_angle_deg: sweep, ratio };
            start += sweep;
            slice
        })
        .collect()
}
