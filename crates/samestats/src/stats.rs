//! Summary statistics of a dataset and the acceptance guard.
//!
//! `df_stats` is always recomputed over the full dataset; there is no
//! incremental update. `is_error_still_ok` compares two snapshots at a fixed
//! decimal precision by scaled rounding, never by an epsilon.

use crate::geom::{truncated_difference, Point};

/// Means, sample standard deviations (N−1) and Pearson correlation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DfStats {
    pub x_mean: f64,
    pub y_mean: f64,
    pub x_sd: f64,
    pub y_sd: f64,
    pub corr: f64,
}

impl DfStats {
    pub const LABELS: [&'static str; 5] = ["X Mean", "Y Mean", "X SD", "Y SD", "Corr."];

    #[inline]
    pub fn to_array(&self) -> [f64; 5] {
        [self.x_mean, self.y_mean, self.x_sd, self.y_sd, self.corr]
    }
}

/// Compute the five statistics. Needs at least two points for the sample
/// deviations; fewer yields NaN deviations and correlation.
pub fn df_stats(points: &[Point]) -> DfStats {
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    let x_mean = sx / n;
    let y_mean = sy / n;
    let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
    for p in points {
        let dx = p.x - x_mean;
        let dy = p.y - y_mean;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }
    let x_sd = (sxx / (n - 1.0)).sqrt();
    let y_sd = (syy / (n - 1.0)).sqrt();
    // NaN when either axis has zero spread
    let corr = sxy / (sxx * syy).sqrt();
    DfStats {
        x_mean,
        y_mean,
        x_sd,
        y_sd,
        corr,
    }
}

/// True iff all five statistics agree after rounding at `decimals` places.
///
/// A NaN only matches another NaN.
pub fn is_error_still_ok(prev: &DfStats, cand: &DfStats, decimals: u32) -> bool {
    prev.to_array()
        .iter()
        .zip(cand.to_array().iter())
        .all(|(&a, &b)| match (a.is_nan(), b.is_nan()) {
            (true, true) => true,
            (false, false) => truncated_difference(a, b, decimals) == 0,
            _ => false,
        })
}
