//! Seeded, parametrized Perlin noise in one, two and three dimensions.
//!
//! A [`Generator`] owns a set of seeded [`NoiseTables`] (a shuffled permutation table
//! plus 1D, 2D and 3D gradient tables) and sums several octaves of lattice noise per
//! sample.
//!
//! # Key Types
//!
//! - [`Generator`] - Octave-summed noise sampling (`noise_1d`, `noise_2d`, `noise_3d`)
//! - [`NoiseTables`] - Immutable permutation and gradient tables built from a seed
//! - [`NoiseParams`] - Amplitude divisor, frequency multiplier and octave count
//! - [`SharedGenerator`] - Lock-free snapshot-and-swap wrapper for concurrent sampling
//! - [`GridSpec`] - Regular 2D sampling grid for raster consumers
//!
//! ```
//! use perlin_core::Generator;
//!
//! let generator = Generator::new(2.0, 2.0, 1, 41)?;
//! let value = generator.noise_2d(0.1, 0.2);
//! assert!((-1.0..=1.0).contains(&value));
//! # Ok::<(), perlin_core::NoiseError>(())
//! ```

mod config;
mod error;
mod fractal;
mod generator;
mod grid;
mod lattice;
mod params;
mod shared;
mod tables;

pub use config::GeneratorConfig;
pub use error::NoiseError;
pub use fractal::fractal_sum;
pub use generator::Generator;
pub use grid::GridSpec;
pub use lattice::{LATTICE_MASK, LATTICE_OFFSET, PLANAR_Z_THRESHOLD, is_planar};
pub use params::{NoiseParams, RandomSource};
pub use shared::SharedGenerator;
pub use tables::{LATTICE_SIZE, NoiseTables, TABLE_LEN};
