//! One randomized perturbation proposal.
//!
//! Model
//! - Pick an index uniformly, draw `accept_worse ~ Bernoulli(temperature)`
//!   once, then resample Gaussian offsets (scale `shake`, no step ceiling)
//!   until the proposal is acceptable by distance and lies strictly inside
//!   both bounds.
//! - The resample loop terminates almost surely because the Gaussian has
//!   unbounded support; it is not a guaranteed-terminating contract.
//!   `PerturbParams::max_attempts` adds an optional cap on top of that, which
//!   turns a runaway loop into `PerturbError::DidNotConverge`.
//!
//! No side effects: the caller applies the returned point.

use nalgebra::Vector2;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::dest::Shape;
use crate::error::PerturbError;
use crate::geom::{Bound, Point};

/// Perturbation parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerturbParams {
    /// Scale of the Gaussian offset on each axis (not a maximum step).
    pub shake: f64,
    /// Below this distance to the target a proposal is always acceptable.
    pub allowed_dist: f64,
    /// Optional cap on resample attempts per call. `None` keeps the
    /// unbounded loop.
    pub max_attempts: Option<usize>,
}

impl Default for PerturbParams {
    fn default() -> Self {
        Self {
            shake: 0.1,
            allowed_dist: 2.0,
            max_attempts: None,
        }
    }
}

/// Accepted proposal: move the point at `index` to `point`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Perturbation {
    pub index: usize,
    pub point: Point,
    /// Number of draws it took, at least 1.
    pub attempts: usize,
}

/// Gaussian jitter of `p` with scale `shake` on each axis.
#[inline]
pub fn shake_point<R: Rng + ?Sized>(p: Point, shake: f64, rng: &mut R) -> Point {
    let dx: f64 = rng.sample(StandardNormal);
    let dy: f64 = rng.sample(StandardNormal);
    Vector2::new(p.x + dx * shake, p.y + dy * shake)
}

/// Propose one move.
pub fn perturb<S, R>(
    points: &[Point],
    dest: &S,
    x_bounds: Bound,
    y_bounds: Bound,
    temperature: f64,
    params: &PerturbParams,
    rng: &mut R,
) -> Result<Perturbation, PerturbError>
where
    S: Shape + ?Sized,
    R: Rng + ?Sized,
{
    if points.is_empty() {
        return Err(PerturbError::NoPoints);
    }
    let index = rng.gen_range(0..points.len());
    let point = points[index];
    // simulated-annealing escape hatch, fixed for every retry of this call
    let accept_worse = rng.gen::<f64>() < temperature;
    let old_dist = dest.distance(point);

    let mut attempts = 0usize;
    loop {
        if let Some(cap) = params.max_attempts {
            if attempts >= cap {
                return Err(PerturbError::DidNotConverge { attempts });
            }
        }
        attempts += 1;
        let candidate = shake_point(point, params.shake, rng);
        let new_dist = dest.distance(candidate);
        let dist_ok = new_dist < old_dist || new_dist < params.allowed_dist || accept_worse;
        let pos_ok = x_bounds.contains_open(candidate.x) && y_bounds.contains_open(candidate.y);
        if dist_ok && pos_ok {
            return Ok(Perturbation {
                index,
                point: candidate,
                attempts,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dest::Destination;
    use nalgebra::vector;
    use rand::{rngs::StdRng, SeedableRng};

    const UNIT: Bound = Bound::new(0.0, 100.0);

    #[test]
    fn proposals_stay_strictly_inside_bounds() {
        let dest = Destination::grid(vec![0.0, 100.0], vec![0.0, 100.0]).unwrap();
        // points sit on the boundary; proposals still have to land inside
        let pts = vec![vector![0.0, 0.0], vector![100.0, 100.0], vector![0.0, 100.0]];
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..2_000 {
            let p = perturb(&pts, &dest, UNIT, UNIT, 0.5, &PerturbParams::default(), &mut rng)
                .unwrap();
            assert!(p.index < pts.len());
            assert!(UNIT.contains_open(p.point.x) && UNIT.contains_open(p.point.y));
        }
    }

    #[test]
    fn cold_proposals_never_move_away_outside_allowed_distance() {
        let dest = Destination::lines([((0.0, 50.0), (100.0, 50.0))]).unwrap();
        let pts = vec![vector![30.0, 80.0], vector![60.0, 15.0]];
        let params = PerturbParams {
            shake: 0.5,
            ..PerturbParams::default()
        };
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..2_000 {
            let p = perturb(&pts, &dest, UNIT, UNIT, 0.0, &params, &mut rng).unwrap();
            let before = dest.distance(pts[p.index]);
            let after = dest.distance(p.point);
            assert!(after < before || after < params.allowed_dist);
        }
    }

    #[test]
    fn hot_proposals_accept_the_first_in_bounds_draw() {
        let dest = Destination::circles((50.0, 50.0), vec![10.0]).unwrap();
        let pts = vec![vector![50.0, 50.0]];
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..500 {
            let p = perturb(&pts, &dest, UNIT, UNIT, 1.0, &PerturbParams::default(), &mut rng)
                .unwrap();
            assert_eq!(p.attempts, 1);
        }
    }

    #[test]
    fn attempt_cap_reports_non_convergence() {
        let dest = Destination::grid(vec![50.0], vec![50.0]).unwrap();
        // bounds exclude every reachable proposal
        let tight = Bound::new(0.0, 1.0);
        let pts = vec![vector![50.0, 50.0]];
        let params = PerturbParams {
            max_attempts: Some(25),
            ..PerturbParams::default()
        };
        let mut rng = StdRng::seed_from_u64(9);
        let err = perturb(&pts, &dest, tight, tight, 1.0, &params, &mut rng).unwrap_err();
        assert_eq!(err, PerturbError::DidNotConverge { attempts: 25 });
    }

    #[test]
    fn empty_dataset_is_an_error() {
        let dest = Destination::grid(vec![50.0], vec![50.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let params = PerturbParams::default();
        let err = perturb(&[], &dest, UNIT, UNIT, 0.5, &params, &mut rng).unwrap_err();
        assert_eq!(err, PerturbError::NoPoints);
    }

    #[test]
    fn same_seed_same_proposal() {
        let dest = Destination::grid(vec![25.0, 75.0], vec![25.0, 75.0]).unwrap();
        let pts: Vec<Point> = (0..20).map(|i| vector![i as f64 * 4.0 + 1.0, 50.0]).collect();
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            perturb(&pts, &dest, UNIT, UNIT, 0.3, &PerturbParams::default(), &mut rng).unwrap()
        };
        assert_eq!(run(42), run(42));
    }
}
