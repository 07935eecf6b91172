// File: crates/chart-core/tests/layout.rs
// Purpose: End-to-end layout per chart family, recorded through the drawing seam.

use vitals_chart_core::{
    ChartData, ChartFamily, ChartLayout, ChartPoint, LayoutOptions, Primitive, RangeItem, RecordingBackend, Role,
    Size, StackItem,
};

fn canvas() -> Size {
    Size::new(240.0, 130.0)
}

fn record(layout: &ChartLayout) -> RecordingBackend {
    let mut backend = RecordingBackend::new();
    layout.draw(&mut backend);
    backend
}

fn labeled(values: &[f64]) -> ChartData {
    ChartData::Points(
        values.iter().enumerate().map(|(i, &v)| ChartPoint::labeled(i as f64, v, format!("{}/1", i + 1))).collect(),
    )
}

#[test]
fn line_chart_emits_axes_series_and_labels() {
    let layout = ChartLayout::compute(canvas(), &labeled(&[3.0, 47.0, 12.0]), &LayoutOptions::default());
    assert_eq!(layout.points.len(), 3);
    assert_eq!(layout.label_anchors.len(), 3);
    assert_eq!(layout.value_labels, vec!["3", "47", "12"]);

    let rec = record(&layout);
    let ticks = layout.metrics.as_ref().unwrap().ticks.len();
    assert_eq!(rec.count(|p| matches!(p, Primitive::Line { role: Role::Grid, .. })), ticks);
    assert_eq!(rec.count(|p| matches!(p, Primitive::Line { role: Role::Axis, .. })), 2);
    assert_eq!(rec.count(|p| matches!(p, Primitive::Polyline { .. })), 1);
    assert_eq!(rec.count(|p| matches!(p, Primitive::Circle { .. })), 3);
    assert_eq!(rec.count(|p| matches!(p, Primitive::Text { role: Role::ValueLabel, .. })), 3);
    assert_eq!(rec.count(|p| matches!(p, Primitive::Text { role: Role::CategoryLabel, .. })), 3);
}

#[test]
fn minimal_line_chart_has_no_text() {
    let mut opts = LayoutOptions::default();
    opts.metrics.minimal = true;
    let rec = record(&ChartLayout::compute(canvas(), &labeled(&[1.0, 2.0]), &opts));
    assert_eq!(rec.count(|p| matches!(p, Primitive::Text { .. })), 0);
    assert_eq!(rec.count(|p| matches!(p, Primitive::Line { .. })), 0);
    assert_eq!(rec.count(|p| matches!(p, Primitive::Polyline { .. })), 1);
}

#[test]
fn area_chart_closes_region_to_the_baseline() {
    let layout = ChartLayout::compute(canvas(), &labeled(&[1.0, 4.0, 2.0]), &LayoutOptions::for_family(ChartFamily::Area));
    let rec = record(&layout);
    let region = rec
        .primitives
        .iter()
        .find_map(|p| match p {
            Primitive::Polygon { points, .. } => Some(points.clone()),
            _ => None,
        })
        .expect("area fill");
    assert_eq!(region.len(), 5);
    assert_eq!(region[3].y, 100.0);
    assert_eq!(region[4].y, 100.0);
}

#[test]
fn empty_line_chart_draws_only_axes() {
    let layout = ChartLayout::compute(canvas(), &ChartData::Points(Vec::new()), &LayoutOptions::default());
    let rec = record(&layout);
    assert_eq!(rec.count(|p| matches!(p, Primitive::Polyline { .. } | Primitive::Circle { .. })), 0);
    assert!(rec.count(|p| matches!(p, Primitive::Line { role: Role::Axis, .. })) > 0);
}

#[test]
fn single_point_line_chart_draws_a_dot() {
    let layout = ChartLayout::compute(canvas(), &labeled(&[72.0]), &LayoutOptions::default());
    let rec = record(&layout);
    assert_eq!(rec.count(|p| matches!(p, Primitive::Polyline { .. })), 0);
    assert_eq!(rec.count(|p| matches!(p, Primitive::Circle { .. })), 1);
    assert_eq!(layout.points[0].x, 140.0);
}

#[test]
fn bar_chart_has_one_body_per_item() {
    let layout = ChartLayout::compute(canvas(), &labeled(&[20.0, 47.0, 0.0, 5.0]), &LayoutOptions::for_family(ChartFamily::Bar));
    assert_eq!(layout.metrics.as_ref().unwrap().min_y, 0.0);
    assert_eq!(layout.bars.len(), 4);
    assert!(layout.points.is_empty());
    assert_eq!(layout.category_labels.len(), 4);
    let rec = record(&layout);
    assert_eq!(rec.count(|p| matches!(p, Primitive::Rect { role: Role::Fill, .. })), 4);
}

#[test]
fn range_bars_span_low_to_high() {
    let data = ChartData::Ranges(vec![
        RangeItem { low: 60.0, high: 90.0, label: None },
        RangeItem { low: 100.0, high: 55.0, label: None },
    ]);
    let layout = ChartLayout::compute(canvas(), &data, &LayoutOptions::for_family(ChartFamily::Range));
    let m = layout.metrics.clone().unwrap();
    assert!(m.min_y <= 55.0 && m.min_y > 0.0);
    let (r0, _) = layout.bars[0];
    assert_eq!(r0.top, m.value_to_px(90.0));
    assert_eq!(r0.bottom, m.value_to_px(60.0));
    let (r1, _) = layout.bars[1];
    assert!(r1.top < r1.bottom);
}

#[test]
fn stacked_bars_tag_segments() {
    let data = ChartData::Stacks(vec![
        StackItem { segments: vec![10.0, 15.0], label: Some("A".into()) },
        StackItem { segments: vec![5.0, 5.0, 5.0], label: Some("B".into()) },
    ]);
    let layout = ChartLayout::compute(canvas(), &data, &LayoutOptions::for_family(ChartFamily::StackedBar));
    assert_eq!(layout.bars.len(), 5);
    let rec = record(&layout);
    assert_eq!(rec.count(|p| matches!(p, Primitive::Rect { role: Role::Segment(2), .. })), 1);
    assert_eq!(rec.count(|p| matches!(p, Primitive::Rect { role: Role::Segment(0), .. })), 2);
}

#[test]
fn pie_and_donut_share_angles() {
    let data = ChartData::Points(ChartPoint::from_values(&[1.0, 1.0, 2.0]));
    let pie = ChartLayout::compute(canvas(), &data, &LayoutOptions::for_family(ChartFamily::Pie));
    let donut = ChartLayout::compute(canvas(), &data, &LayoutOptions::for_family(ChartFamily::Donut));
    let (p, d) = (pie.pie.as_ref().unwrap(), donut.pie.as_ref().unwrap());
    assert!(pie.metrics.is_none());
    assert_eq!(p.slices, d.slices);
    assert_eq!(p.inner_radius, 0.0);
    assert!(d.inner_radius > 0.0 && d.inner_radius < d.radius);
    assert_eq!(pie.value_labels, vec!["25%", "25%", "50%"]);

    let rec = record(&donut);
    assert_eq!(rec.count(|p| matches!(p, Primitive::Arc { .. })), 3);
    assert_eq!(rec.count(|p| matches!(p, Primitive::Text { .. })), 3);
}

#[test]
fn pie_with_zero_total_draws_nothing() {
    let data = ChartData::Points(ChartPoint::from_values(&[0.0, 0.0]));
    let rec = record(&ChartLayout::compute(canvas(), &data, &LayoutOptions::for_family(ChartFamily::Pie)));
    assert!(rec.primitives.is_empty());
}
