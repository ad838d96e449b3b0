//! Octave summation.

use crate::NoiseParams;

/// Sums `params.octaves` evaluations of `base`, dividing each octave's amplitude by
/// `alpha` and multiplying the coordinates by `beta` between octaves.
///
/// ```text
/// sum = 0; scale = 1; p = point
/// repeat octaves times:
///     sum += base(p) / scale
///     scale *= alpha
///     p *= beta
/// ```
///
/// With zero octaves the result is `0.0` and `base` is never called.
#[inline]
#[must_use]
pub fn fractal_sum<const D: usize>(
    params: &NoiseParams,
    mut point: [f64; D],
    mut base: impl FnMut([f64; D]) -> f64,
) -> f64 {
    let mut sum = 0.0;
    let mut scale = 1.0;

    for _ in 0..params.octaves {
        sum += base(point) / scale;
        scale *= params.alpha;
        for coord in &mut point {
            *coord *= params.beta;
        }
    }

    sum
}
