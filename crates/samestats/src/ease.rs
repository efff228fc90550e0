//! Easing curves on `[0, 1]`.
//!
//! `ease_in_out_quad` shapes the temperature schedule; the sine family shapes
//! the checkpoint (frame) schedule.

use std::f64::consts::PI;

/// Quadratic ease-in/ease-out: `0→0`, `0.5→0.5`, `1→1`, flat at both ends.
#[inline]
pub fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}

#[inline]
pub fn linear(t: f64) -> f64 {
    t
}

#[inline]
pub fn ease_in_sine(t: f64) -> f64 {
    1.0 - (t * PI / 2.0).cos()
}

#[inline]
pub fn ease_out_sine(t: f64) -> f64 {
    (t * PI / 2.0).sin()
}

#[inline]
pub fn ease_in_out_sine(t: f64) -> f64 {
    -((PI * t).cos() - 1.0) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_fixed_points_and_symmetry() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(0.5), 0.5);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        for k in 0..=20 {
            let t = k as f64 / 20.0;
            let s = ease_in_out_quad(t) + ease_in_out_quad(1.0 - t);
            assert!((s - 1.0).abs() < 1e-12, "t={t}");
        }
        // flatter than linear near the ends
        assert!(ease_in_out_quad(0.1) < 0.1);
        assert!(ease_in_out_quad(0.9) > 0.9);
    }

    #[test]
    fn quad_is_monotone() {
        let mut prev = ease_in_out_quad(0.0);
        for k in 1..=1000 {
            let v = ease_in_out_quad(k as f64 / 1000.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn sine_family_endpoints() {
        for f in [linear, ease_in_sine, ease_out_sine, ease_in_out_sine] {
            assert!(f(0.0).abs() < 1e-12);
            assert!((f(1.0) - 1.0).abs() < 1e-12);
        }
        assert!(ease_in_sine(0.5) < 0.5);
        assert!(ease_out_sine(0.5) > 0.5);
        assert!((ease_in_out_sine(0.5) - 0.5).abs() < 1e-12);
    }
}
