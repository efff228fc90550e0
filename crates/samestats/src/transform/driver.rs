//! Transformation driver: owns the dataset and advances it one trial at a time.
//!
//! States: configured (`cur_iter == 0`) → running → done
//! (`cur_iter == total_iters`). Each `iterate` call is atomic: between calls
//! `cur_stats == df_stats(cur_state)` holds exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::dest::Shape;
use crate::ease::ease_in_out_quad;
use crate::error::{ConfigError, PerturbError};
use crate::geom::{lerp, Point};
use crate::perturb::perturb;
use crate::stats::{df_stats, is_error_still_ok, DfStats};

use super::types::TransformCfg;

/// Temperature after `cur_iter` of `total_iters` iterations.
///
/// `lerp(min, max, ease_in_out_quad(remaining_fraction))`: equals `max` at the
/// start, `min` at the end, and is non-increasing in between. A run with no
/// iterations is already at its end and gets `min`.
#[inline]
pub fn temperature_at(cur_iter: usize, total_iters: usize, range: (f64, f64)) -> f64 {
    if total_iters == 0 {
        return range.0;
    }
    let remaining = (total_iters - cur_iter.min(total_iters)) as f64 / total_iters as f64;
    let (min_temp, max_temp) = range;
    lerp(min_temp, max_temp, ease_in_out_quad(remaining))
}

/// Outcome of a single trial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trial {
    Accepted { index: usize },
    Rejected { index: usize },
}

/// Same-stats transformation of one dataset toward one target shape.
#[derive(Clone, Debug)]
pub struct Transformation<S, R = StdRng> {
    source: Vec<Point>,
    cur_state: Vec<Point>,
    cur_stats: DfStats,
    target: S,
    cfg: TransformCfg,
    cur_iter: usize,
    accepted: usize,
    rejected: usize,
    last_trial: Option<Trial>,
    rng: R,
}

impl<S: Shape> Transformation<S, StdRng> {
    /// Construct with a `StdRng` seeded from `seed`.
    pub fn with_seed(
        source: Vec<Point>,
        target: S,
        cfg: TransformCfg,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::new(source, target, cfg, StdRng::seed_from_u64(seed))
    }
}

impl<S: Shape, R: Rng> Transformation<S, R> {
    /// Validate `cfg`, clamp `source` into the bounds and take ownership.
    pub fn new(
        source: Vec<Point>,
        target: S,
        cfg: TransformCfg,
        rng: R,
    ) -> Result<Self, ConfigError> {
        cfg.validate()?;
        if source.len() < 2 {
            return Err(ConfigError::TooFewPoints { got: source.len() });
        }
        if let Some(index) = source.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(ConfigError::NonFinitePoint { index });
        }
        let source: Vec<Point> = source
            .into_iter()
            .map(|p| Point::new(cfg.x_bounds.clamp(p.x), cfg.y_bounds.clamp(p.y)))
            .collect();
        let cur_stats = df_stats(&source);
        Ok(Self {
            cur_state: source.clone(),
            source,
            cur_stats,
            target,
            cfg,
            cur_iter: 0,
            accepted: 0,
            rejected: 0,
            last_trial: None,
            rng,
        })
    }

    /// Run one trial. Returns `Ok(true)` once the last iteration is done.
    ///
    /// Panics if called after completion. A `PerturbError` (only with an
    /// attempt cap) leaves the state and iteration count untouched.
    pub fn iterate(&mut self) -> Result<bool, PerturbError> {
        assert!(
            !self.is_done(),
            "iterate() called after all {} iterations completed",
            self.cfg.total_iters
        );
        let temperature = self.temperature();
        let proposal = perturb(
            &self.cur_state,
            &self.target,
            self.cfg.x_bounds,
            self.cfg.y_bounds,
            temperature,
            &self.cfg.perturb,
            &mut self.rng,
        )?;
        let index = proposal.index;
        let orig = self.cur_state[index];

        self.cur_state[index] = proposal.point;
        let new_stats = df_stats(&self.cur_state);
        if is_error_still_ok(&self.cur_stats, &new_stats, self.cfg.n_error_trunc) {
            self.cur_stats = new_stats;
            self.accepted += 1;
            self.last_trial = Some(Trial::Accepted { index });
        } else {
            // full rollback of this trial
            self.cur_state[index] = orig;
            self.rejected += 1;
            self.last_trial = Some(Trial::Rejected { index });
        }

        self.cur_iter += 1;
        Ok(self.is_done())
    }

    /// Iterate until done.
    pub fn run(&mut self) -> Result<(), PerturbError> {
        while !self.is_done() {
            self.iterate()?;
        }
        Ok(())
    }

    pub fn temperature(&self) -> f64 {
        temperature_at(self.cur_iter, self.cfg.total_iters, self.cfg.temperature_range)
    }
    /// Current dataset snapshot.
    pub fn state(&self) -> &[Point] {
        &self.cur_state
    }
    /// Source dataset after clamping into the bounds.
    pub fn source(&self) -> &[Point] {
        &self.source
    }
    pub fn stats(&self) -> DfStats {
        self.cur_stats
    }
    pub fn cur_iter(&self) -> usize {
        self.cur_iter
    }
    pub fn total_iters(&self) -> usize {
        self.cfg.total_iters
    }
    pub fn is_done(&self) -> bool {
        self.cur_iter >= self.cfg.total_iters
    }
    pub fn accepted(&self) -> usize {
        self.accepted
    }
    pub fn rejected(&self) -> usize {
        self.rejected
    }
    pub fn last_trial(&self) -> Option<Trial> {
        self.last_trial
    }
    pub fn target(&self) -> &S {
        &self.target
    }
    pub fn cfg(&self) -> &TransformCfg {
        &self.cfg
    }
    pub fn into_state(self) -> Vec<Point> {
        self.cur_state
    }
}
