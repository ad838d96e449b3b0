//! Interpolation helpers for lattice noise.

use glam::{DVec2, DVec3};

/// Cubic ease curve `t²(3 − 2t)`, with zero slope at `t = 0` and `t = 1`.
#[inline]
#[must_use]
pub fn s_curve(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Linear interpolation from `a` (at `t = 0`) to `b` (at `t = 1`).
#[inline]
#[must_use]
pub fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Divides `v` by its Euclidean length. A zero vector is returned unchanged.
///
/// Each component is divided by the length, not multiplied by its reciprocal as
/// [`DVec2::normalize_or_zero`] does.
#[inline]
#[must_use]
pub fn normalize_2d(v: DVec2) -> DVec2 {
    let length = v.length();
    if length == 0.0 { v } else { v / length }
}

/// Divides `v` by its Euclidean length. A zero vector is returned unchanged.
#[inline]
#[must_use]
pub fn normalize_3d(v: DVec3) -> DVec3 {
    let length = v.length();
    if length == 0.0 { v } else { v / length }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_s_curve_endpoints() {
        assert_eq!(s_curve(0.0), 0.0);
        assert_eq!(s_curve(1.0), 1.0);
        assert_eq!(s_curve(0.5), 0.5);
    }

    #[test]
    fn test_s_curve_is_monotonic_on_unit_interval() {
        let mut prev = s_curve(0.0);
        for i in 1..=100 {
            let next = s_curve(f64::from(i) / 100.0);
            assert!(next >= prev, "s_curve decreased at step {i}");
            prev = next;
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 2.0, 6.0), 2.0);
        assert_eq!(lerp(1.0, 2.0, 6.0), 6.0);
        assert_eq!(lerp(0.25, 2.0, 6.0), 3.0);
    }

    #[test]
    fn test_normalize_produces_unit_vectors() {
        let v = normalize_2d(DVec2::new(3.0, -4.0));
        assert!((v.length() - 1.0).abs() < 1e-12);
        assert!((v.x - 0.6).abs() < 1e-12);

        let v = normalize_3d(DVec3::new(0.25, -0.5, 0.75));
        assert!((v.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_keeps_zero_vector() {
        assert_eq!(normalize_2d(DVec2::ZERO), DVec2::ZERO);
        assert_eq!(normalize_3d(DVec3::ZERO), DVec3::ZERO);
    }
}
