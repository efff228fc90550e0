//! Checkpoint schedule and a checkpointed run loop.
//!
//! Frame `i` of `n` is taken at iteration `round(ease(i / n) · total_iters)`,
//! halves rounding to even.
//! The easing is chosen by the ramp mode, so checkpoints can bunch up at the
//! start, the end, or both. Colliding iterations keep the later frame.

use std::collections::BTreeMap;

use rand::Rng;

use crate::dest::Shape;
use crate::ease;
use crate::error::{ConfigError, PerturbError};
use crate::geom::Point;
use crate::stats::DfStats;

use super::driver::Transformation;

/// Which end(s) of the run get denser checkpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RampMode {
    pub ramp_in: bool,
    pub ramp_out: bool,
}

impl RampMode {
    fn curve(self) -> fn(f64) -> f64 {
        match (self.ramp_in, self.ramp_out) {
            (true, false) => ease::ease_in_sine,
            (false, true) => ease::ease_out_sine,
            (true, true) => ease::ease_in_out_sine,
            (false, false) => ease::linear,
        }
    }
}

/// Map from checkpoint iteration to frame number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameSchedule {
    targets: BTreeMap<usize, usize>,
}

impl FrameSchedule {
    pub fn new(total_iters: usize, n_frames: usize, ramp: RampMode) -> Result<Self, ConfigError> {
        if total_iters == 0 {
            return Err(ConfigError::NonPositiveIterations);
        }
        if n_frames == 0 {
            return Err(ConfigError::NoFrames);
        }
        let curve = ramp.curve();
        let mut targets = BTreeMap::new();
        for frame in 0..n_frames {
            let x = frame as f64 / n_frames as f64;
            let iter = (curve(x) * total_iters as f64).round_ties_even() as usize;
            targets.insert(iter, frame);
        }
        Ok(Self { targets })
    }

    /// Frame number scheduled at `iter`, if any.
    pub fn frame_at(&self, iter: usize) -> Option<usize> {
        self.targets.get(&iter).copied()
    }

    /// `(iteration, frame)` pairs in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.targets.iter().map(|(&i, &f)| (i, f))
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// What a checkpoint callback sees.
#[derive(Clone, Copy, Debug)]
pub struct Checkpoint<'a> {
    pub frame: usize,
    pub iter: usize,
    pub state: &'a [Point],
    pub stats: DfStats,
    pub temperature: f64,
    pub accepted: usize,
    pub rejected: usize,
}

impl<'a> Checkpoint<'a> {
    fn of<S: Shape, R: Rng>(t: &'a Transformation<S, R>, frame: usize) -> Self {
        Self {
            frame,
            iter: t.cur_iter(),
            state: t.state(),
            stats: t.stats(),
            temperature: t.temperature(),
            accepted: t.accepted(),
            rejected: t.rejected(),
        }
    }
}

/// Run `t` to completion, calling `on_frame` for the initial state (if
/// scheduled at iteration 0) and after every scheduled iteration.
///
/// Stops at the first callback error.
pub fn run_checkpointed<S, R, E, F>(
    t: &mut Transformation<S, R>,
    schedule: &FrameSchedule,
    mut on_frame: F,
) -> Result<(), E>
where
    S: Shape,
    R: Rng,
    E: From<PerturbError>,
    F: FnMut(Checkpoint<'_>) -> Result<(), E>,
{
    if let Some(frame) = schedule.frame_at(t.cur_iter()) {
        on_frame(Checkpoint::of(t, frame))?;
    }
    while !t.is_done() {
        t.iterate()?;
        if let Some(frame) = schedule.frame_at(t.cur_iter()) {
            on_frame(Checkpoint::of(t, frame))?;
        }
    }
    Ok(())
}
