//! Same-stats transformation: the accept/reject loop around `perturb`.
//!
//! Purpose
//! - Own one dataset exclusively, propose one move per iteration, recompute
//!   the full statistics and keep the move only if every statistic still
//!   rounds to the same value at `n_error_trunc` decimals.
//! - Schedule temperature (eased decay from max to min) and checkpoints.
//!
//! Concurrency
//! - Single-threaded and synchronous. Each `Transformation` owns its dataset
//!   and RNG, so independent runs can proceed in parallel without sharing.
//!
//! Code cross-refs: `perturb::perturb`, `stats::{df_stats, is_error_still_ok}`,
//! `ease::ease_in_out_quad`

mod driver;
mod frames;
mod types;

pub use driver::{temperature_at, Transformation, Trial};
pub use frames::{run_checkpointed, Checkpoint, FrameSchedule, RampMode};
pub use types::{TransformCfg, MAX_ERROR_TRUNC};
