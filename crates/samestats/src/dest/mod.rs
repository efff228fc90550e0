//! Destination shapes: the target the scatter is pulled toward.
//!
//! Purpose
//! - Define "shape" purely through distance-to-nearest-feature (`Shape`).
//! - Provide the built-in family (`Destination`: circles, grid, line set,
//!   polyline/polygon) and a named catalog of ready-made targets.
//!
//! Why this design
//! - A tagged enum with one dispatch keeps the built-ins closed and cheap to
//!   clone; the `Shape` trait keeps the driver open to shapes defined
//!   elsewhere.
//!
//! Code cross-refs: `geom::{distance, segment_distance}`, `transform::Transformation`

pub mod catalog;
mod types;

pub use catalog::{lookup, DESTINATION_NAMES};
pub use types::{ConcentricCircles, Destination, GridPoints, LineSet, Polyline, Shape};

#[cfg(test)]
mod tests;
