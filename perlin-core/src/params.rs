//! Shape parameters and random source selection.

use perlin_utils::random::Random;
use perlin_utils::random::legacy_random::LegacyRandom;
use perlin_utils::random::xoroshiro::Xoroshiro;
use serde::{Deserialize, Serialize};

use crate::NoiseError;

/// Octave-summation parameters.
///
/// None of these depend on the seeded tables, so they can be changed on a live
/// generator without rebuilding anything.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseParams {
    /// Amplitude divisor. The contribution of each octave is divided by `alpha`
    /// relative to the previous one.
    pub alpha: f64,
    /// Frequency multiplier applied to the coordinates after each octave.
    pub beta: f64,
    /// Number of octaves summed. Zero makes every sample `0.0`.
    pub octaves: u32,
}

impl NoiseParams {
    /// Create parameters without validating them.
    #[must_use]
    pub const fn new(alpha: f64, beta: f64, octaves: u32) -> Self {
        Self {
            alpha,
            beta,
            octaves,
        }
    }

    /// Check that the parameters describe a well-defined sum.
    ///
    /// Rejects `alpha == 0` (the second octave would be divided by zero) and
    /// non-finite `alpha` or `beta`.
    pub fn validate(&self) -> Result<(), NoiseError> {
        check_alpha(self.alpha)?;
        check_beta(self.beta)
    }
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self::new(2.0, 2.0, 1)
    }
}

pub(crate) fn check_alpha(alpha: f64) -> Result<(), NoiseError> {
    if !alpha.is_finite() {
        return Err(NoiseError::NonFinite {
            name: "alpha",
            value: alpha,
        });
    }
    if alpha == 0.0 {
        return Err(NoiseError::ZeroAlpha);
    }
    Ok(())
}

pub(crate) fn check_beta(beta: f64) -> Result<(), NoiseError> {
    if beta.is_finite() {
        Ok(())
    } else {
        Err(NoiseError::NonFinite {
            name: "beta",
            value: beta,
        })
    }
}

/// Pseudo-random algorithm used to build the noise tables.
///
/// Changing the source changes every table for a given seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RandomSource {
    /// xoroshiro128++ ([`Xoroshiro`]).
    #[default]
    Xoroshiro,
    /// 48-bit linear congruential generator ([`LegacyRandom`]).
    Legacy,
}

impl RandomSource {
    /// Runs `f` with a freshly seeded generator of this kind.
    pub(crate) fn with_random<T>(self, seed: i64, f: impl FnOnce(&mut dyn Random) -> T) -> T {
        match self {
            Self::Xoroshiro => f(&mut Xoroshiro::from_seed(seed as u64)),
            Self::Legacy => f(&mut LegacyRandom::from_seed(seed as u64)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_are_valid() {
        let params = NoiseParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params, NoiseParams::new(2.0, 2.0, 1));
    }

    #[test]
    fn test_zero_alpha_rejected() {
        let params = NoiseParams::new(0.0, 2.0, 3);
        assert!(matches!(params.validate(), Err(NoiseError::ZeroAlpha)));

        let params = NoiseParams::new(-0.0, 2.0, 3);
        assert!(matches!(params.validate(), Err(NoiseError::ZeroAlpha)));
    }

    #[test]
    fn test_non_finite_rejected() {
        let params = NoiseParams::new(f64::NAN, 2.0, 1);
        assert!(matches!(
            params.validate(),
            Err(NoiseError::NonFinite { name: "alpha", .. })
        ));

        let params = NoiseParams::new(2.0, f64::INFINITY, 1);
        assert!(matches!(
            params.validate(),
            Err(NoiseError::NonFinite { name: "beta", .. })
        ));
    }

    #[test]
    fn test_negative_and_fractional_values_accepted() {
        assert!(NoiseParams::new(-2.0, 0.5, 4).validate().is_ok());
        assert!(NoiseParams::new(0.5, 0.0, 0).validate().is_ok());
    }

    #[test]
    fn test_source_serializes_snake_case() {
        let json = serde_json::to_string(&RandomSource::Legacy).expect("serialize");
        assert_eq!(json, "\"legacy\"");
        let parsed: RandomSource = serde_json::from_str("\"xoroshiro\"").expect("deserialize");
        assert_eq!(parsed, RandomSource::Xoroshiro);
    }
}
