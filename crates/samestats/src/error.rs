//! Error types shared across the crate.
//!
//! - `ConfigError`: rejected at construction; no partial object escapes.
//! - `PerturbError`: empty input, or a configured retry cap was exceeded.
//! - `DestinationNotFound`: catalog lookup by name failed.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    NonPositiveIterations,
    TooFewPolylinePoints { got: usize },
    TooFewPoints { got: usize },
    EmptyShape { what: &'static str },
    InvalidBound { axis: char, min: f64, max: f64 },
    InvalidTemperatureRange { min: f64, max: f64 },
    NonFinitePoint { index: usize },
    InvalidParam { name: &'static str, value: f64 },
    NoFrames,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveIterations => write!(f, "total iteration count must be positive"),
            Self::TooFewPolylinePoints { got } => {
                write!(f, "polyline needs at least 3 points, got {got}")
            }
            Self::TooFewPoints { got } => {
                write!(f, "dataset needs at least 2 points, got {got}")
            }
            Self::EmptyShape { what } => write!(f, "destination has no {what}"),
            Self::InvalidBound { axis, min, max } => {
                write!(f, "invalid {axis} bounds ({min}, {max}): need finite min < max")
            }
            Self::InvalidTemperatureRange { min, max } => write!(
                f,
                "invalid temperature range ({min}, {max}): need 0 <= min <= max <= 1"
            ),
            Self::NonFinitePoint { index } => {
                write!(f, "point {index} has a non-finite coordinate")
            }
            Self::InvalidParam { name, value } => write!(f, "invalid {name}: {value}"),
            Self::NoFrames => write!(f, "frame count must be positive"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Raised by the perturbation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PerturbError {
    NoPoints,
    DidNotConverge { attempts: usize },
}

impl fmt::Display for PerturbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPoints => write!(f, "cannot perturb an empty dataset"),
            Self::DidNotConverge { attempts } => {
                write!(f, "perturbation did not converge after {attempts} attempts")
            }
        }
    }
}

impl std::error::Error for PerturbError {}

/// Unknown name in the destination catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DestinationNotFound {
    pub name: String,
}

impl fmt::Display for DestinationNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "destination not found: {}", self.name)
    }
}

impl std::error::Error for DestinationNotFound {}
