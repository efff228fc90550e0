//! Configuration for a transformation run.

use crate::error::ConfigError;
use crate::geom::Bound;
use crate::perturb::PerturbParams;

/// Largest accepted `n_error_trunc`.
pub const MAX_ERROR_TRUNC: u32 = 15;

/// Immutable run configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformCfg {
    pub total_iters: usize,
    pub x_bounds: Bound,
    pub y_bounds: Bound,
    /// `(min, max)`; temperature decays from `max` to `min` over the run.
    pub temperature_range: (f64, f64),
    /// Decimal places at which statistics must stay equal.
    pub n_error_trunc: u32,
    pub perturb: PerturbParams,
}

impl Default for TransformCfg {
    fn default() -> Self {
        Self {
            total_iters: 100_000,
            x_bounds: Bound::new(0.0, 100.0),
            y_bounds: Bound::new(0.0, 100.0),
            temperature_range: (0.0, 0.4),
            n_error_trunc: 2,
            perturb: PerturbParams::default(),
        }
    }
}

impl TransformCfg {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_iters == 0 {
            return Err(ConfigError::NonPositiveIterations);
        }
        for (axis, b) in [('x', self.x_bounds), ('y', self.y_bounds)] {
            if !b.is_valid() {
                return Err(ConfigError::InvalidBound {
                    axis,
                    min: b.min,
                    max: b.max,
                });
            }
        }
        let (min, max) = self.temperature_range;
        if !(0.0..=1.0).contains(&min) || !(0.0..=1.0).contains(&max) || min > max {
            return Err(ConfigError::InvalidTemperatureRange { min, max });
        }
        // beyond f64 precision the guard compares rounding noise
        if self.n_error_trunc > MAX_ERROR_TRUNC {
            return Err(ConfigError::InvalidParam {
                name: "n_error_trunc",
                value: self.n_error_trunc as f64,
            });
        }
        let shake = self.perturb.shake;
        if !(shake.is_finite() && shake > 0.0) {
            return Err(ConfigError::InvalidParam {
                name: "shake",
                value: shake,
            });
        }
        if self.perturb.allowed_dist.is_nan() {
            return Err(ConfigError::InvalidParam {
                name: "allowed_dist",
                value: self.perturb.allowed_dist,
            });
        }
        Ok(())
    }
}
