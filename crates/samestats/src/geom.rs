//! Geometry kernel: points, axis bounds, segments and the scalar helpers the
//! search is built from.
//!
//! - `Point` is a plain `Vector2<f64>`; the dataset is a `Vec<Point>`.
//! - `Bound` is a closed interval on one axis. Clamping uses the closed
//!   interval, proposal checks use the open one.
//! - `Segment` is finite; distances never extend it to an infinite line.
//!
//! Code cross-refs: `dest::Destination`, `perturb::perturb`, `stats::is_error_still_ok`

use nalgebra::Vector2;

use crate::cfg::DEGENERATE_SEGMENT_EPS;

/// A dataset point `(x, y)`.
pub type Point = Vector2<f64>;

/// Closed interval `[min, max]` on one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bound {
    pub min: f64,
    pub max: f64,
}

impl Bound {
    #[inline]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
    /// Finite and non-empty interior (`min < max`).
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }
    /// Strict containment: `min < v < max`.
    #[inline]
    pub fn contains_open(&self, v: f64) -> bool {
        v > self.min && v < self.max
    }
    #[inline]
    pub fn clamp(&self, v: f64) -> f64 {
        clamp(v, self.min, self.max)
    }
}

impl From<(f64, f64)> for Bound {
    fn from((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }
}

/// Finite segment between two endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
    #[inline]
    pub fn midpoint(&self) -> Point {
        (self.a + self.b) * 0.5
    }
    #[inline]
    pub fn length_squared(&self) -> f64 {
        (self.b - self.a).norm_squared()
    }
}

impl From<((f64, f64), (f64, f64))> for Segment {
    fn from(((ax, ay), (bx, by)): ((f64, f64), (f64, f64))) -> Self {
        Self::new(Vector2::new(ax, ay), Vector2::new(bx, by))
    }
}

/// Euclidean distance.
#[inline]
pub fn distance(p: Point, q: Point) -> f64 {
    (p.x - q.x).hypot(p.y - q.y)
}

/// Distance from `p` to the closest point of the finite segment `s`.
///
/// The projection parameter is clamped to `[0, 1]`. Segments with squared
/// length below `DEGENERATE_SEGMENT_EPS` collapse to their midpoint.
pub fn segment_distance(p: Point, s: &Segment) -> f64 {
    let len2 = s.length_squared();
    if len2 < DEGENERATE_SEGMENT_EPS {
        return distance(p, s.midpoint());
    }
    let d = s.b - s.a;
    let t = clamp((p - s.a).dot(&d) / len2, 0.0, 1.0);
    distance(p, lerp_point(s.a, s.b, t))
}

/// `round(a·10^d) − round(b·10^d)`; only meaningful as an equality test.
///
/// Halves round to even, so `5.125` and `5.1249` agree at two places.
/// Non-finite inputs saturate through the float→int cast (NaN maps to 0);
/// `stats::is_error_still_ok` handles NaN pairs before calling this.
#[inline]
pub fn truncated_difference(a: f64, b: f64, decimals: u32) -> i64 {
    let m = 10f64.powi(decimals as i32);
    ((a * m).round_ties_even() as i64).saturating_sub((b * m).round_ties_even() as i64)
}

#[inline]
pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

/// Linear interpolation `a + (b − a)·t` (no clamping of `t`).
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (b - a) * t + a
}

#[inline]
pub fn lerp_point(a: Point, b: Point, t: f64) -> Point {
    Vector2::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}
