//! Same-stats transformation core.
//!
//! Perturbs a 2D point dataset one point at a time until its scatter
//! resembles a target shape, while means, sample standard deviations and
//! the Pearson correlation stay equal at a fixed decimal precision.
//!
//! Layout
//! - `geom`: points, bounds, segments, distances, rounding comparison.
//! - `dest`: target shapes (`Shape`, `Destination`) and the named catalog.
//! - `stats`: `DfStats`, `df_stats`, the acceptance guard.
//! - `perturb`: one randomized proposal.
//! - `transform`: the driver, temperature and checkpoint schedules.
//!
//! The crate performs no I/O and no logging; callers observe state between
//! iterations.

mod cfg;
pub mod dest;
pub mod ease;
pub mod error;
pub mod geom;
pub mod perturb;
pub mod stats;
pub mod transform;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use dest::{Destination, Shape};
pub use error::{ConfigError, DestinationNotFound, PerturbError};
pub use geom::{Bound, Point, Segment};
pub use stats::DfStats;
pub use transform::{TransformCfg, Transformation};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::dest::{lookup as lookup_destination, Destination, Shape, DESTINATION_NAMES};
    pub use crate::error::{ConfigError, DestinationNotFound, PerturbError};
    pub use crate::geom::{Bound, Point, Segment};
    pub use crate::perturb::PerturbParams;
    pub use crate::stats::{df_stats, DfStats};
    pub use crate::transform::{
        run_checkpointed, Checkpoint, FrameSchedule, RampMode, TransformCfg, Transformation,
    };
    pub use nalgebra::Vector2;
}
