// File: crates/chart-core/tests/placement.rs
// Purpose: Label anchors follow the local tangent and prefer the upper side.

use vitals_chart_core::placement::LABEL_OFFSET;
use vitals_chart_core::{place_labels, ScreenPoint};

fn close(a: ScreenPoint, x: f32, y: f32) -> bool {
    (a.x - x).abs() < 1e-3 && (a.y - y).abs() < 1e-3
}

#[test]
fn single_point_goes_straight_up() {
    let labels = place_labels(&[ScreenPoint::new(100.0, 100.0)], LABEL_OFFSET);
    assert!(close(labels[0], 100.0, 75.0), "{:?}", labels[0]);
}

#[test]
fn flat_line_labels_sit_above() {
    let pts = [ScreenPoint::new(0.0, 50.0), ScreenPoint::new(50.0, 50.0), ScreenPoint::new(100.0, 50.0)];
    let labels = place_labels(&pts, LABEL_OFFSET);
    for (p, l) in pts.iter().zip(&labels) {
        assert!(close(*l, p.x, 25.0), "{l:?}");
    }
}

#[test]
fn rising_segment_offsets_up_and_left() {
    let pts = [ScreenPoint::new(0.0, 100.0), ScreenPoint::new(100.0, 0.0)];
    let labels = place_labels(&pts, LABEL_OFFSET);
    let d = LABEL_OFFSET / 2f32.sqrt();
    assert!(close(labels[0], -d, 100.0 - d), "{:?}", labels[0]);
    assert!(close(labels[1], 100.0 - d, -d), "{:?}", labels[1]);
}

#[test]
fn peak_label_sits_directly_above() {
    let pts = [ScreenPoint::new(0.0, 100.0), ScreenPoint::new(50.0, 0.0), ScreenPoint::new(100.0, 100.0)];
    let labels = place_labels(&pts, LABEL_OFFSET);
    assert!(close(labels[1], 50.0, -25.0), "{:?}", labels[1]);
}

#[test]
fn reversal_and_duplicates_do_not_produce_nan() {
    let pts = [ScreenPoint::new(0.0, 0.0), ScreenPoint::new(10.0, 0.0), ScreenPoint::new(0.0, 0.0)];
    let labels = place_labels(&pts, LABEL_OFFSET);
    assert!(close(labels[1], 10.0, -25.0), "{:?}", labels[1]);

    let same = [ScreenPoint::new(5.0, 5.0), ScreenPoint::new(5.0, 5.0)];
    for l in place_labels(&same, LABEL_OFFSET) {
        assert!(l.x.is_finite() && l.y.is_finite());
        assert!(close(l, 5.0, -20.0), "{l:?}");
    }
}

#[test]
fn every_anchor_is_offset_by_the_requested_distance() {
    let pts = [
        ScreenPoint::new(0.0, 80.0),
        ScreenPoint::new(30.0, 10.0),
        ScreenPoint::new(60.0, 60.0),
        ScreenPoint::new(90.0, 55.0),
    ];
    for (p, l) in pts.iter().zip(place_labels(&pts, 12.0)) {
        assert!(((l - *p).length() - 12.0).abs() < 1e-3);
    }
    assert!(place_labels(&[], 12.0).is_empty());
}
