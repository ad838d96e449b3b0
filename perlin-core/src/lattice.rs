//! Single-octave lattice noise.
//!
//! Each coordinate is split into a wrapped lattice cell and the signed distances to
//! the two surrounding lattice points. The gradients at the cell corners are dotted
//! with those distances and blended with [`s_curve`] weights, one axis at a time.

use glam::{DVec2, DVec3};
use perlin_utils::math::{lerp, s_curve};

use crate::{LATTICE_SIZE, NoiseTables};

/// Offset added to every coordinate before it is split into a cell and a fraction.
pub const LATTICE_OFFSET: f64 = 4096.0;

/// Wraps a lattice cell into `0..LATTICE_SIZE`.
pub const LATTICE_MASK: usize = 0xFF;

/// `|z|` below this collapses 3D sampling onto the 2D field.
pub const PLANAR_Z_THRESHOLD: f64 = 0.0001;

/// Whether a 3D sample at depth `z` is answered by 2D noise instead.
#[inline]
#[must_use]
pub fn is_planar(z: f64) -> bool {
    z.abs() < PLANAR_Z_THRESHOLD
}

/// Lattice position along one axis.
#[derive(Debug, Clone, Copy)]
struct Axis {
    /// Cell index of the lower lattice point.
    b0: usize,
    /// Cell index of the upper lattice point.
    b1: usize,
    /// Distance from the lower lattice point.
    r0: f64,
    /// Distance from the upper lattice point (`r0 - 1`).
    r1: f64,
}

impl Axis {
    #[inline]
    fn new(coord: f64) -> Self {
        let t = coord + LATTICE_OFFSET;
        let cell = t.floor();
        // Wrapped in floating point, so cells beyond the i64 range still index correctly.
        // NaN and infinite input cast to cell 0.
        let b0 = cell.rem_euclid(LATTICE_SIZE as f64) as usize;
        let b1 = (b0 + 1) & LATTICE_MASK;
        let r0 = t - cell;
        Self {
            b0,
            b1,
            r0,
            r1: r0 - 1.0,
        }
    }
}

impl NoiseTables {
    /// One octave of 1D noise at `x`.
    #[must_use]
    pub fn noise_1d(&self, x: f64) -> f64 {
        let x = Axis::new(x);

        let sx = s_curve(x.r0);
        let u = x.r0 * self.grad_1d(self.perm(x.b0));
        let v = x.r1 * self.grad_1d(self.perm(x.b1));

        lerp(sx, u, v)
    }

    /// One octave of 2D noise at `(x, y)`.
    #[must_use]
    pub fn noise_2d(&self, x: f64, y: f64) -> f64 {
        let x = Axis::new(x);
        let y = Axis::new(y);

        let i = self.perm(x.b0);
        let j = self.perm(x.b1);

        let b00 = self.perm(i + y.b0);
        let b10 = self.perm(j + y.b0);
        let b01 = self.perm(i + y.b1);
        let b11 = self.perm(j + y.b1);

        let sx = s_curve(x.r0);
        let sy = s_curve(y.r0);

        let u = DVec2::new(x.r0, y.r0).dot(self.grad_2d(b00));
        let v = DVec2::new(x.r1, y.r0).dot(self.grad_2d(b10));
        let a = lerp(sx, u, v);

        let u = DVec2::new(x.r0, y.r1).dot(self.grad_2d(b01));
        let v = DVec2::new(x.r1, y.r1).dot(self.grad_2d(b11));
        let b = lerp(sx, u, v);

        lerp(sy, a, b)
    }

    /// One octave of 3D noise at `(x, y, z)`.
    ///
    /// For `|z| < PLANAR_Z_THRESHOLD` this returns exactly [`Self::noise_2d`]`(x, y)`.
    #[must_use]
    pub fn noise_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        if is_planar(z) {
            return self.noise_2d(x, y);
        }

        let x = Axis::new(x);
        let y = Axis::new(y);
        let z = Axis::new(z);

        let i = self.perm(x.b0);
        let j = self.perm(x.b1);

        let b00 = self.perm(i + y.b0);
        let b10 = self.perm(j + y.b0);
        let b01 = self.perm(i + y.b1);
        let b11 = self.perm(j + y.b1);

        let sx = s_curve(x.r0);
        let sy = s_curve(y.r0);
        let sz = s_curve(z.r0);

        // Near face (z0)
        let u = DVec3::new(x.r0, y.r0, z.r0).dot(self.grad_3d(b00 + z.b0));
        let v = DVec3::new(x.r1, y.r0, z.r0).dot(self.grad_3d(b10 + z.b0));
        let a = lerp(sx, u, v);

        let u = DVec3::new(x.r0, y.r1, z.r0).dot(self.grad_3d(b01 + z.b0));
        let v = DVec3::new(x.r1, y.r1, z.r0).dot(self.grad_3d(b11 + z.b0));
        let b = lerp(sx, u, v);

        let c = lerp(sy, a, b);

        // Far face (z1)
        let u = DVec3::new(x.r0, y.r0, z.r1).dot(self.grad_3d(b00 + z.b1));
        let v = DVec3::new(x.r1, y.r0, z.r1).dot(self.grad_3d(b10 + z.b1));
        let a = lerp(sx, u, v);

        let u = DVec3::new(x.r0, y.r1, z.r1).dot(self.grad_3d(b01 + z.b1));
        let v = DVec3::new(x.r1, y.r1, z.r1).dot(self.grad_3d(b11 + z.b1));
        let b = lerp(sx, u, v);

        let d = lerp(sy, a, b);

        lerp(sz, c, d)
    }
}
