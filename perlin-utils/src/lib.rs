//! Shared building blocks for the Perlin noise workspace.
//!
//! - [`random`] - Seeded pseudo-random sources used to build noise tables
//! - [`math`] - Interpolation curves and vector helpers used by lattice evaluation

pub mod math;
pub mod random;
