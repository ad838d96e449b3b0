//! Octave-summed Perlin noise generator.

use crate::fractal::fractal_sum;
use crate::lattice::is_planar;
use crate::params::{check_alpha, check_beta};
use crate::{NoiseError, NoiseParams, NoiseTables, RandomSource};

/// Seeded Perlin noise generator.
///
/// Holds the octave parameters, the seed and the tables built from it. Sampling only
/// reads the tables, so a `&Generator` can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Generator {
    params: NoiseParams,
    seed: i64,
    source: RandomSource,
    /// Boxed because the tables are ~28 KiB.
    tables: Box<NoiseTables>,
}

impl Generator {
    /// Create a generator with the default random source.
    ///
    /// `alpha` divides the amplitude of each successive octave, `beta` multiplies its
    /// frequency and `octaves` is the number of octaves summed.
    pub fn new(alpha: f64, beta: f64, octaves: u32, seed: i64) -> Result<Self, NoiseError> {
        Self::with_params(NoiseParams::new(alpha, beta, octaves), seed)
    }

    /// Create a generator from a parameter set with the default random source.
    pub fn with_params(params: NoiseParams, seed: i64) -> Result<Self, NoiseError> {
        Self::with_source(params, RandomSource::default(), seed)
    }

    /// Create a generator whose tables are built with `source`.
    pub fn with_source(
        params: NoiseParams,
        source: RandomSource,
        seed: i64,
    ) -> Result<Self, NoiseError> {
        params.validate()?;
        Ok(Self {
            params,
            seed,
            source,
            tables: Box::new(NoiseTables::from_seed(source, seed)),
        })
    }

    /// Rebuild every table from `seed`. The octave parameters are left untouched.
    pub fn reseed(&mut self, seed: i64) {
        log::debug!("Reseeding {:?} noise tables with seed {seed}", self.source);
        self.seed = seed;
        self.tables = Box::new(NoiseTables::from_seed(self.source, seed));
    }

    /// A new generator with the same parameters and source, seeded with `seed`.
    #[must_use]
    pub fn reseeded(&self, seed: i64) -> Self {
        log::debug!("Building {:?} noise tables for seed {seed}", self.source);
        Self {
            params: self.params,
            seed,
            source: self.source,
            tables: Box::new(NoiseTables::from_seed(self.source, seed)),
        }
    }

    /// A copy sharing this generator's seed and tables but using `params` unvalidated.
    pub(crate) fn clone_with_params(&self, params: NoiseParams) -> Self {
        Self {
            params,
            ..self.clone()
        }
    }

    /// Octave-summed noise at `x`.
    #[must_use]
    pub fn noise_1d(&self, x: f64) -> f64 {
        fractal_sum(&self.params, [x], |[x]| self.tables.noise_1d(x))
    }

    /// Octave-summed noise at `(x, y)`.
    #[must_use]
    pub fn noise_2d(&self, x: f64, y: f64) -> f64 {
        fractal_sum(&self.params, [x, y], |[x, y]| self.tables.noise_2d(x, y))
    }

    /// Octave-summed noise at `(x, y, z)`.
    ///
    /// For `|z| < PLANAR_Z_THRESHOLD` this is exactly [`Self::noise_2d`]`(x, y)`, so a
    /// 3D field collapses continuously onto its 2D slice.
    #[must_use]
    pub fn noise_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        if is_planar(z) {
            return self.noise_2d(x, y);
        }
        fractal_sum(&self.params, [x, y, z], |[x, y, z]| {
            self.tables.noise_3d(x, y, z)
        })
    }

    /// The octave parameters.
    #[must_use]
    pub const fn params(&self) -> &NoiseParams {
        &self.params
    }

    /// Amplitude divisor per octave.
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.params.alpha
    }

    /// Frequency multiplier per octave.
    #[must_use]
    pub const fn beta(&self) -> f64 {
        self.params.beta
    }

    /// Number of octaves summed.
    #[must_use]
    pub const fn octaves(&self) -> u32 {
        self.params.octaves
    }

    /// The seed the current tables were built from.
    #[must_use]
    pub const fn seed(&self) -> i64 {
        self.seed
    }

    /// The random source used to build the tables.
    #[must_use]
    pub const fn source(&self) -> RandomSource {
        self.source
    }

    /// The current permutation and gradient tables.
    #[must_use]
    pub fn tables(&self) -> &NoiseTables {
        &self.tables
    }

    /// Replace all octave parameters. The tables are kept.
    pub fn set_params(&mut self, params: NoiseParams) -> Result<(), NoiseError> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    /// Set the amplitude divisor.
    pub fn set_alpha(&mut self, alpha: f64) -> Result<(), NoiseError> {
        check_alpha(alpha)?;
        self.params.alpha = alpha;
        Ok(())
    }

    /// Set the frequency multiplier.
    pub fn set_beta(&mut self, beta: f64) -> Result<(), NoiseError> {
        check_beta(beta)?;
        self.params.beta = beta;
        Ok(())
    }

    /// Set the number of octaves.
    pub const fn set_octaves(&mut self, octaves: u32) {
        self.params.octaves = octaves;
    }
}
