//! Destination shapes and the `Shape` distance contract.
//!
//! Every shape answers one question: how far is a point from the nearest
//! feature of the shape. Shapes hold only their defining geometry and are
//! never mutated by the search.

use nalgebra::Vector2;

use crate::error::ConfigError;
use crate::geom::{distance, segment_distance, Point, Segment};

/// Distance-to-nearest-feature. Implementors must return a non-negative,
/// finite value for every finite point.
pub trait Shape {
    fn distance(&self, p: Point) -> f64;
}

impl<S: Shape + ?Sized> Shape for &S {
    #[inline]
    fn distance(&self, p: Point) -> f64 {
        (**self).distance(p)
    }
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    #[inline]
    fn distance(&self, p: Point) -> f64 {
        (**self).distance(p)
    }
}

/// Rings of the given radii around a common center.
///
/// A zero radius degenerates to the center point itself.
#[derive(Clone, Debug, PartialEq)]
pub struct ConcentricCircles {
    center: Point,
    radii: Vec<f64>,
}

impl ConcentricCircles {
    pub fn new(center: Point, radii: Vec<f64>) -> Result<Self, ConfigError> {
        if radii.is_empty() {
            return Err(ConfigError::EmptyShape { what: "radii" });
        }
        if let Some(&r) = radii.iter().find(|r| !(r.is_finite() && **r >= 0.0)) {
            return Err(ConfigError::InvalidParam {
                name: "radius",
                value: r,
            });
        }
        Ok(Self { center, radii })
    }
    pub fn center(&self) -> Point {
        self.center
    }
    pub fn radii(&self) -> &[f64] {
        &self.radii
    }
}

impl Shape for ConcentricCircles {
    fn distance(&self, p: Point) -> f64 {
        let d = distance(p, self.center);
        self.radii
            .iter()
            .map(|r| (d - r).abs())
            .fold(f64::INFINITY, f64::min)
    }
}

/// Lattice of points `xs × ys`.
#[derive(Clone, Debug, PartialEq)]
pub struct GridPoints {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl GridPoints {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, ConfigError> {
        if xs.is_empty() || ys.is_empty() {
            return Err(ConfigError::EmptyShape { what: "grid lines" });
        }
        Ok(Self { xs, ys })
    }
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }
}

impl Shape for GridPoints {
    fn distance(&self, p: Point) -> f64 {
        let mut best = f64::INFINITY;
        for &x in &self.xs {
            for &y in &self.ys {
                best = best.min(distance(p, Vector2::new(x, y)));
            }
        }
        best
    }
}

/// Union of finite segments.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSet {
    segments: Vec<Segment>,
}

impl LineSet {
    pub fn new(segments: Vec<Segment>) -> Result<Self, ConfigError> {
        if segments.is_empty() {
            return Err(ConfigError::EmptyShape { what: "segments" });
        }
        Ok(Self { segments })
    }
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl Shape for LineSet {
    fn distance(&self, p: Point) -> f64 {
        self.segments
            .iter()
            .map(|s| segment_distance(p, s))
            .fold(f64::INFINITY, f64::min)
    }
}

/// Chain of points joined by segments; `closed` adds the segment last → first.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    vertices: Vec<Point>,
    closed: bool,
    lines: LineSet,
}

impl Polyline {
    pub fn new(vertices: Vec<Point>, closed: bool) -> Result<Self, ConfigError> {
        if vertices.len() < 3 {
            return Err(ConfigError::TooFewPolylinePoints {
                got: vertices.len(),
            });
        }
        let mut segments: Vec<Segment> = vertices
            .windows(2)
            .map(|w| Segment::new(w[0], w[1]))
            .collect();
        if closed {
            segments.push(Segment::new(vertices[vertices.len() - 1], vertices[0]));
        }
        let lines = LineSet::new(segments)?;
        Ok(Self {
            vertices,
            closed,
            lines,
        })
    }
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
    pub fn is_closed(&self) -> bool {
        self.closed
    }
    pub fn segments(&self) -> &[Segment] {
        self.lines.segments()
    }
}

impl Shape for Polyline {
    #[inline]
    fn distance(&self, p: Point) -> f64 {
        self.lines.distance(p)
    }
}

/// The closed family of built-in destinations.
///
/// New shapes outside this family implement `Shape` directly; the driver is
/// generic over `Shape`, so `Destination` is a convenience, not a bottleneck.
#[derive(Clone, Debug, PartialEq)]
pub enum Destination {
    Circles(ConcentricCircles),
    Grid(GridPoints),
    Lines(LineSet),
    Polyline(Polyline),
}

impl Destination {
    pub fn circles(center: (f64, f64), radii: Vec<f64>) -> Result<Self, ConfigError> {
        ConcentricCircles::new(Vector2::new(center.0, center.1), radii).map(Self::Circles)
    }
    pub fn grid(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, ConfigError> {
        GridPoints::new(xs, ys).map(Self::Grid)
    }
    pub fn lines<I, L>(lines: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = L>,
        L: Into<Segment>,
    {
        LineSet::new(lines.into_iter().map(Into::into).collect()).map(Self::Lines)
    }
    pub fn polyline<I>(points: I, closed: bool) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let vs = points.into_iter().map(|(x, y)| Vector2::new(x, y)).collect();
        Polyline::new(vs, closed).map(Self::Polyline)
    }
}

impl Shape for Destination {
    fn distance(&self, p: Point) -> f64 {
        match self {
            Self::Circles(c) => c.distance(p),
            Self::Grid(g) => g.distance(p),
            Self::Lines(l) => l.distance(p),
            Self::Polyline(pl) => pl.distance(p),
        }
    }
}
