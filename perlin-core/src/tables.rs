//! Seeded permutation and gradient tables.
//!
//! Every table holds `2 * LATTICE_SIZE + 2` entries: the first `LATTICE_SIZE` are
//! generated, the rest mirror entries `0..LATTICE_SIZE + 2`. Lattice lookups such as
//! `permutation[permutation[bx] + by]` can then index up to `2 * LATTICE_SIZE + 1`
//! without wrapping.

use glam::{DVec2, DVec3};
use perlin_utils::math::{normalize_2d, normalize_3d};
use perlin_utils::random::Random;

use crate::RandomSource;

/// Number of lattice cells per axis before the pattern repeats.
pub const LATTICE_SIZE: usize = 0x100;

/// Length of every table, including the mirrored upper half.
pub const TABLE_LEN: usize = LATTICE_SIZE * 2 + 2;

/// Immutable permutation and gradient tables for one seed.
///
/// Built once per seed; a reseed builds a new set instead of patching this one.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseTables {
    permutation: [usize; TABLE_LEN],
    gradients_1d: [f64; TABLE_LEN],
    gradients_2d: [DVec2; TABLE_LEN],
    gradients_3d: [DVec3; TABLE_LEN],
}

impl NoiseTables {
    /// Build the tables for `seed` using the given random source.
    #[must_use]
    pub fn from_seed(source: RandomSource, seed: i64) -> Self {
        source.with_random(seed, |random| Self::build(random))
    }

    /// Build the tables from a random source.
    ///
    /// Per lattice index the source is drawn for the 1D gradient, then the two 2D
    /// components, then the three 3D components. The permutation is shuffled
    /// afterwards, so the same source state always yields identical tables.
    #[must_use]
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn build<R: Random + ?Sized>(random: &mut R) -> Self {
        let mut permutation = [0usize; TABLE_LEN];
        let mut gradients_1d = [0.0f64; TABLE_LEN];
        let mut gradients_2d = [DVec2::ZERO; TABLE_LEN];
        let mut gradients_3d = [DVec3::ZERO; TABLE_LEN];

        for i in 0..LATTICE_SIZE {
            permutation[i] = i;
            gradients_1d[i] = gradient_component(random);

            let x = gradient_component(random);
            let y = gradient_component(random);
            gradients_2d[i] = normalize_2d(DVec2::new(x, y));

            let x = gradient_component(random);
            let y = gradient_component(random);
            let z = gradient_component(random);
            gradients_3d[i] = normalize_3d(DVec3::new(x, y, z));
        }

        // Fisher-Yates shuffle, walking down from the top
        for i in (1..LATTICE_SIZE).rev() {
            let j = random.next_bounded(LATTICE_SIZE as u64) as usize;
            permutation.swap(i, j);
        }

        // Mirror into the upper half. Sequential on purpose: the last two entries
        // copy the already mirrored `LATTICE_SIZE` and `LATTICE_SIZE + 1`.
        for i in 0..LATTICE_SIZE + 2 {
            permutation[LATTICE_SIZE + i] = permutation[i];
            gradients_1d[LATTICE_SIZE + i] = gradients_1d[i];
            gradients_2d[LATTICE_SIZE + i] = gradients_2d[i];
            gradients_3d[LATTICE_SIZE + i] = gradients_3d[i];
        }

        Self {
            permutation,
            gradients_1d,
            gradients_2d,
            gradients_3d,
        }
    }

    /// The permutation table. Every entry is in `0..LATTICE_SIZE`.
    #[must_use]
    pub const fn permutation(&self) -> &[usize; TABLE_LEN] {
        &self.permutation
    }

    /// Scalar gradients in `[-1, 1)`.
    #[must_use]
    pub const fn gradients_1d(&self) -> &[f64; TABLE_LEN] {
        &self.gradients_1d
    }

    /// Unit 2D gradients.
    #[must_use]
    pub const fn gradients_2d(&self) -> &[DVec2; TABLE_LEN] {
        &self.gradients_2d
    }

    /// Unit 3D gradients.
    #[must_use]
    pub const fn gradients_3d(&self) -> &[DVec3; TABLE_LEN] {
        &self.gradients_3d
    }

    #[inline]
    pub(crate) const fn perm(&self, index: usize) -> usize {
        self.permutation[index]
    }

    #[inline]
    pub(crate) const fn grad_1d(&self, index: usize) -> f64 {
        self.gradients_1d[index]
    }

    #[inline]
    pub(crate) const fn grad_2d(&self, index: usize) -> DVec2 {
        self.gradients_2d[index]
    }

    #[inline]
    pub(crate) const fn grad_3d(&self, index: usize) -> DVec3 {
        self.gradients_3d[index]
    }
}

/// Draws one gradient component, uniform over `[-1, 1)` in steps of `1 / LATTICE_SIZE`.
#[inline]
fn gradient_component<R: Random + ?Sized>(random: &mut R) -> f64 {
    let raw = random.next_bounded((LATTICE_SIZE * 2) as u64) as i64 - LATTICE_SIZE as i64;
    raw as f64 / LATTICE_SIZE as f64
}
