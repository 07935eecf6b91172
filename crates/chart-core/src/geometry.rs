// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use std::ops::{Add, Mul, Sub};

/// A position (or direction) in pixel space. Y grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction; zero-length input yields `(1, 0)`.
    pub fn normalized(self) -> ScreenPoint {
        let len = self.length();
        if len <= f32::EPSILON || !len.is_finite() {
            return ScreenPoint::new(1.0, 0.0);
        }
        ScreenPoint::new(self.x / len, self.y / len)
    }

    /// Rotate by +90 degrees.
    #[inline]
    pub fn perp_ccw(self) -> ScreenPoint {
        ScreenPoint::new(-self.y, self.x)
    }

    /// Rotate by -90 degrees.
    #[inline]
    pub fn perp_cw(self) -> ScreenPoint {
        ScreenPoint::new(self.y, -self.x)
    }
}

impl Add for ScreenPoint {
    type Output = ScreenPoint;
    fn add(self, rhs: ScreenPoint) -> ScreenPoint { ScreenPoint::new(self.x + rhs.x, self.y + rhs.y) }
}

impl Sub for ScreenPoint {
    type Output = ScreenPoint;
    fn sub(self, rhs: ScreenPoint) -> ScreenPoint { ScreenPoint::new(self.x - rhs.x, self.y - rhs.y) }
}

impl Mul<f32> for ScreenPoint {
    type Output = ScreenPoint;
    fn mul(self, k: f32) -> ScreenPoint { ScreenPoint::new(self.x * k, self.y * k) }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
