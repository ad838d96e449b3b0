//! Regular 2D sampling grids for raster consumers.

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::Generator;

/// A `width × height` grid of sample points spanning `[0, scale)` on both axes.
///
/// Column `x` maps to `x * (scale / width)` and row `y` to `y * (scale / height)`, so a
/// larger `scale` shows more noise features in the same number of samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Extent of the sampled region in noise space along each axis.
    pub scale: f64,
}

impl GridSpec {
    /// Create a grid specification.
    #[must_use]
    pub const fn new(width: usize, height: usize, scale: f64) -> Self {
        Self {
            width,
            height,
            scale,
        }
    }

    /// Noise-space coordinates of the sample at column `x`, row `y`.
    #[must_use]
    pub fn point(&self, x: usize, y: usize) -> (f64, f64) {
        let (sx, sy) = self.steps();
        (x as f64 * sx, y as f64 * sy)
    }

    /// Total number of samples.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.width * self.height
    }

    /// Whether the grid has no samples.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    fn steps(&self) -> (f64, f64) {
        (
            self.scale / self.width as f64,
            self.scale / self.height as f64,
        )
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::new(320, 256, 1.0)
    }
}

impl Generator {
    /// Samples [`Generator::noise_2d`] at every point of `grid`.
    ///
    /// Returns `grid.len()` values in row-major order. Rows are sampled in parallel;
    /// each value is identical to calling `noise_2d` on [`GridSpec::point`].
    #[must_use]
    pub fn sample_grid(&self, grid: &GridSpec) -> Vec<f64> {
        if grid.is_empty() {
            return Vec::new();
        }

        let start = Instant::now();
        let (sx, sy) = grid.steps();
        let mut values = vec![0.0; grid.len()];

        values
            .par_chunks_mut(grid.width)
            .enumerate()
            .for_each(|(y, row)| {
                let ny = y as f64 * sy;
                for (x, value) in row.iter_mut().enumerate() {
                    *value = self.noise_2d(x as f64 * sx, ny);
                }
            });

        log::debug!(
            "Sampled {}x{} noise grid in {:?}",
            grid.width,
            grid.height,
            start.elapsed()
        );
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_point_mapping() {
        let grid = GridSpec::new(4, 2, 2.0);
        assert_eq!(grid.point(0, 0), (0.0, 0.0));
        assert_eq!(grid.point(1, 1), (0.5, 1.0));
        assert_eq!(grid.point(3, 0), (1.5, 0.0));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_grid_matches_point_samples() {
        let generator = Generator::new(2.0, 2.0, 3, 41).expect("valid params");
        let grid = GridSpec::new(17, 9, 3.5);

        let values = generator.sample_grid(&grid);
        assert_eq!(values.len(), 17 * 9);

        for y in 0..grid.height {
            for x in 0..grid.width {
                let (nx, ny) = grid.point(x, y);
                assert_eq!(values[y * grid.width + x], generator.noise_2d(nx, ny));
            }
        }
    }

    #[test]
    fn test_empty_grid() {
        let generator = Generator::new(2.0, 2.0, 1, 41).expect("valid params");
        assert!(generator.sample_grid(&GridSpec::new(0, 10, 1.0)).is_empty());
        assert!(generator.sample_grid(&GridSpec::new(10, 0, 1.0)).is_empty());
    }

    #[test]
    fn test_default_grid() {
        let grid = GridSpec::default();
        assert_eq!((grid.width, grid.height), (320, 256));
        assert_eq!(grid.len(), 320 * 256);
        assert!(!grid.is_empty());
    }

    #[test]
    fn test_grid_spec_deserialize_with_defaults() {
        let grid: GridSpec = serde_json::from_str(r#"{ "width": 64 }"#).expect("valid json");
        assert_eq!(grid, GridSpec::new(64, 256, 1.0));
    }
}
