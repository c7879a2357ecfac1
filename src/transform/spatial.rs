use crate::error::Result;
use crate::matrix::SquareMatrix;
use crate::traits::FloatScalar;
use crate::vector::Vector;

use super::Accumulator;

/// Composes 3D affine maps into a `4 x 4` homogeneous matrix.
///
/// Points are `(x, y, z, 1)`. Rotations follow the right-hand rule about
/// each axis.
///
/// ```
/// use colalg::{TransformBuilder4, Vector};
/// use core::f64::consts::FRAC_PI_2;
///
/// let m = TransformBuilder4::new().rotate_z(FRAC_PI_2).translate_x(1.0).build();
/// let p = Vector::from_slice(&[1.0, 0.0, 0.0, 1.0]).unwrap();
/// let q = m.multiply_vector(&p).unwrap();
/// assert!(q.approx_eq(&Vector::from_slice(&[1.0, 1.0, 0.0, 1.0]).unwrap(), 1e-12));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TransformBuilder4<T = f64> {
    acc: Accumulator<T>,
}

impl<T: FloatScalar> TransformBuilder4<T> {
    /// Starts at the `4 x 4` identity.
    pub fn new() -> Self {
        Self {
            acc: Accumulator::identity(4),
        }
    }

    // ── Scale ───────────────────────────────────────────────────────

    #[must_use]
    pub fn scale(mut self, x: T, y: T, z: T) -> Self {
        self.acc.scale(&[x, y, z]);
        self
    }

    #[must_use]
    pub fn scale_x(self, x: T) -> Self {
        self.scale(x, T::one(), T::one())
    }

    #[must_use]
    pub fn scale_y(self, y: T) -> Self {
        self.scale(T::one(), y, T::one())
    }

    #[must_use]
    pub fn scale_z(self, z: T) -> Self {
        self.scale(T::one(), T::one(), z)
    }

    // ── Translate ───────────────────────────────────────────────────

    /// Move by `(x, y, z)`.
    #[must_use]
    pub fn translate(mut self, x: T, y: T, z: T) -> Self {
        self.acc.apply("translate", &[(0, 3, x), (1, 3, y), (2, 3, z)]);
        self
    }

    /// Move by the first three components of `offset`.
    ///
    /// Fails with `IndexOutOfBounds` for a two-component vector.
    pub fn translate_vector(self, offset: &Vector<T>) -> Result<Self> {
        let z = offset.z()?;
        Ok(self.translate(offset.x(), offset.y(), z))
    }

    #[must_use]
    pub fn translate_x(self, x: T) -> Self {
        self.translate(x, T::zero(), T::zero())
    }

    #[must_use]
    pub fn translate_y(self, y: T) -> Self {
        self.translate(T::zero(), y, T::zero())
    }

    #[must_use]
    pub fn translate_z(self, z: T) -> Self {
        self.translate(T::zero(), T::zero(), z)
    }

    // ── Rotate ──────────────────────────────────────────────────────

    /// Rotate about the x axis, `y` towards `z`.
    #[must_use]
    pub fn rotate_x(mut self, angle: T) -> Self {
        self.acc.rotate("rotate_x", 1, 2, angle);
        self
    }

    /// Rotate about the y axis, `z` towards `x`.
    #[must_use]
    pub fn rotate_y(mut self, angle: T) -> Self {
        self.acc.rotate("rotate_y", 2, 0, angle);
        self
    }

    /// Rotate about the z axis, `x` towards `y`.
    #[must_use]
    pub fn rotate_z(mut self, angle: T) -> Self {
        self.acc.rotate("rotate_z", 0, 1, angle);
        self
    }

    // ── Shear ───────────────────────────────────────────────────────

    /// `x' = x + y * by_y + z * by_z`.
    #[must_use]
    pub fn shear_x(mut self, by_y: T, by_z: T) -> Self {
        self.acc.apply("shear_x", &[(0, 1, by_y), (0, 2, by_z)]);
        self
    }

    /// `y' = y + x * by_x + z * by_z`.
    #[must_use]
    pub fn shear_y(mut self, by_x: T, by_z: T) -> Self {
        self.acc.apply("shear_y", &[(1, 0, by_x), (1, 2, by_z)]);
        self
    }

    /// `z' = z + x * by_x + y * by_y`.
    #[must_use]
    pub fn shear_z(mut self, by_x: T, by_y: T) -> Self {
        self.acc.apply("shear_z", &[(2, 0, by_x), (2, 1, by_y)]);
        self
    }

    /// The folded matrix.
    pub fn build(self) -> SquareMatrix<T> {
        self.acc.into_matrix()
    }
}

impl<T: FloatScalar> Default for TransformBuilder4<T> {
    fn default() -> Self {
        Self::new()
    }
}
