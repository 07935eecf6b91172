// File: crates/chart-core/src/placement.rs
// Summary: Tangent-based value label placement along a plotted polyline.

use crate::geometry::ScreenPoint;

/// Distance from a point to its label anchor, in pixels.
pub const LABEL_OFFSET: f32 = 25.0;

/// Local direction of the polyline at `i`.
fn tangent(points: &[ScreenPoint], i: usize) -> ScreenPoint {
    let n = points.len();
    if n < 2 {
        return ScreenPoint::new(1.0, 0.0);
    }
    if i == 0 {
        return (points[1] - points[0]).normalized();
    }
    if i == n - 1 {
        return (points[i] - points[i - 1]).normalized();
    }
    let incoming = (points[i] - points[i - 1]).normalized();
    let outgoing = (points[i + 1] - points[i]).normalized();
    (incoming + outgoing).normalized()
}

/// Label anchor for every point, offset along whichever normal of the local tangent
/// sits higher on screen (ties keep the counter-clockwise normal).
pub fn place_labels(points: &[ScreenPoint], offset: f32) -> Vec<ScreenPoint> {
    (0..points.len())
        .map(|i| {
            let t = tangent(points, i);
            let a = points[i] + t.perp_ccw() * offset;
            let b = points[i] + t.perp_cw() * offset;
            if b.y < a.y { b } else { a }
        })
        .collect()
}
