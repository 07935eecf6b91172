// File: crates/chart-core/src/backend.rs
// Summary: Narrow drawing seam; a backend turns computed primitives into pixels.

use crate::geometry::{RectF, ScreenPoint};

/// What a drawn element represents. Backends map roles to their own styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Grid,
    Axis,
    TickLabel,
    CategoryLabel,
    Series,
    /// Filled region under a series (area charts) or bar bodies.
    Fill,
    /// Index of a stacked segment or pie slice, for palette lookup.
    Segment(usize),
    ValueLabel,
}

/// Drawing backend. Coordinates are pixels; angles are degrees, 0 at 3 o'clock,
/// clockwise positive.
pub trait DrawBackend {
    fn line(&mut self, from: ScreenPoint, to: ScreenPoint, role: Role);
    fn polyline(&mut self, points: &[ScreenPoint], role: Role);
    /// Closed, filled polygon.
    fn polygon(&mut self, points: &[ScreenPoint], role: Role);
    fn rect(&mut self, rect: RectF, role: Role);
    /// Pie wedge (or ring segment when `inner_radius > 0`).
    fn arc(&mut self, center: ScreenPoint, radius: f32, inner_radius: f32, start_deg: f64, sweep_deg: f64, role: Role);
    fn circle(&mut self, center: ScreenPoint, radius: f32, role: Role);
    fn text(&mut self, anchor: ScreenPoint, text: &str, role: Role);
}

/// A recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Line { from: ScreenPoint, to: ScreenPoint, role: Role },
    Polyline { points: Vec<ScreenPoint>, role: Role },
    Polygon { points: Vec<ScreenPoint>, role: Role },
    Rect { rect: RectF, role: Role },
    Arc { center: ScreenPoint, radius: f32, inner_radius: f32, start_deg: f64, sweep_deg: f64, role: Role },
    Circle { center: ScreenPoint, radius: f32, role: Role },
    Text { anchor: ScreenPoint, text: String, role: Role },
}

/// Backend that records every call; useful for tests and for serializing elsewhere.
#[derive(Clone, Debug, Default)]
pub struct RecordingBackend {
    pub primitives: Vec<Primitive>,
}

impl RecordingBackend {
    pub fn new() -> Self { Self::default() }

    pub fn count(&self, pred: impl Fn(&Primitive) -> bool) -> usize {
        self.primitives.iter().filter(|p| pred(p)).count()
    }
}

impl DrawBackend for RecordingBackend {
    fn line(&mut self, from: ScreenPoint, to: ScreenPoint, role: Role) {
        self.primitives.push(Primitive::Line { from, to, role });
    }
    fn polyline(&mut self, points: &[ScreenPoint], role: Role) {
        self.primitives.push(Primitive::Polyline { points: points.to_vec(), role });
    }
    fn polygon(&mut self, points: &[ScreenPoint], role: Role) {
        self.primitives.push(Primitive::Polygon { points: points.to_vec(), role });
    }
    fn rect(&mut self, rect: RectF, role: Role) {
        self.primitives.push(Primitive::Rect { rect, role });
    }
    fn arc(&mut self, center: ScreenPoint, radius: f32, inner_radius: f32, start_deg: f64, sweep_deg: f64, role: Role) {
        self.primitives.push(Primitive::Arc { center, radius, inner_radius, start_deg, sweep_deg, role });
    }
    fn circle(&mut self, center: ScreenPoint, radius: f32, role: Role) {
        self.primitives.push(Primitive::Circle { center, radius, role });
    }
    fn text(&mut self, anchor: ScreenPoint, text: &str, role: Role) {
        self.primitives.push(Primitive::Text { anchor, text: text.to_string(), role });
    }
}
