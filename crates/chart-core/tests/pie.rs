// File: crates/chart-core/tests/pie.rs
// Purpose: Slice angles, ratios and empty-total handling.

use vitals_chart_core::pie::START_ANGLE_DEG;
use vitals_chart_core::{solve_angles, PieSlice, ScreenPoint};

#[test]
fn slices_start_at_twelve_oclock_and_tile() {
    let slices = solve_angles(&[1.0, 1.0, 2.0]);
    assert_eq!(
        slices,
        vec![
            PieSlice { start_angle_deg: -90.0, sweep_angle_deg: 90.0, ratio: 0.25 },
            PieSlice { start_angle_deg: 0.0, sweep_angle_deg: 90.0, ratio: 0.25 },
            PieSlice { start_angle_deg: 90.0, sweep_angle_deg: 180.0, ratio: 0.5 },
        ]
    );
    assert_eq!(slices[2].end_angle_deg(), 270.0);
}

#[test]
fn zero_total_draws_nothing() {
    assert!(solve_angles(&[]).is_empty());
    assert!(solve_angles(&[0.0, 0.0]).is_empty());
    assert!(solve_angles(&[-4.0]).is_empty());
}

#[test]
fn negative_and_nan_entries_get_empty_slices() {
    let slices = solve_angles(&[3.0, -1.0, f64::NAN, 1.0]);
    assert_eq!(slices.len(), 4);
    assert_eq!(slices[1].sweep_angle_deg, 0.0);
    assert_eq!(slices[2].sweep_angle_deg, 0.0);
    assert_eq!(slices[1].start_angle_deg, slices[0].end_angle_deg());
    assert_eq!(slices[3].sweep_angle_deg, 90.0);
}

#[test]
fn single_value_fills_circle() {
    let slices = solve_angles(&[42.0]);
    assert_eq!(slices[0].start_angle_deg, START_ANGLE_DEG);
    assert_eq!(slices[0].sweep_angle_deg, 360.0);
    assert_eq!(slices[0].ratio, 1.0);
}

#[test]
fn label_anchor_lies_on_bisector() {
    // First quarter slice spans 12 to 3 o'clock; bisector points up-right.
    let slice = solve_angles(&[1.0, 3.0])[0];
    assert_eq!(slice.mid_angle_deg(), -45.0);
    let a = slice.label_anchor(ScreenPoint::new(100.0, 100.0), 10.0);
    assert!((a.x - 107.071).abs() < 1e-3);
    assert!((a.y - 92.929).abs() < 1e-3);
}
