//! Builders that fold elementary affine operations into one [`SquareMatrix`].
//!
//! Every builder starts from the identity. Each call builds the matrix for
//! one operation and left-multiplies it onto the held matrix
//! (`held = op * held`), so a vector multiplied by the built matrix sees the
//! operations in the order they were called.
//!
//! | Builder              | Size | Space                       |
//! |----------------------|------|-----------------------------|
//! | [`TransformBuilder2`] | 2x2  | linear 2D                   |
//! | [`TransformBuilder3`] | 3x3  | affine 2D (homogeneous)     |
//! | [`TransformBuilder4`] | 4x4  | affine 3D (homogeneous)     |
//!
//! Translations sit in the last column; angles are in radians.
//!
//! ```
//! use colalg::{TransformBuilder4, Vector};
//!
//! let m = TransformBuilder4::new()
//!     .translate(10.0, -5.0, 50.0)
//!     .scale(10.0, 1.0, 1.0)
//!     .build();
//! let p = Vector::from_slice(&[5.0, 0.0, 0.0, 1.0]).unwrap();
//! assert_eq!(m.multiply_vector(&p).unwrap().as_slice(), &[150.0, -5.0, 50.0, 1.0]);
//! ```

use crate::matrix::SquareMatrix;
use crate::traits::FloatScalar;

/// Scale, rotation and shear shared by the two planar builders. Both keep
/// `x` and `y` in the top-left `2 x 2` block.
macro_rules! impl_planar_ops {
    ($($builder:ident),*) => {
        $(
            impl<T: FloatScalar> $builder<T> {
                /// Scale `x` and `y` independently.
                #[must_use]
                pub fn scale(mut self, x: T, y: T) -> Self {
                    self.acc.scale(&[x, y]);
                    self
                }

                /// Counter-clockwise rotation by `angle` radians.
                #[must_use]
                pub fn rotate(mut self, angle: T) -> Self {
                    self.acc.rotate("rotate", 0, 1, angle);
                    self
                }

                /// `x' = x + y * by_y`.
                #[must_use]
                pub fn shear_x(mut self, by_y: T) -> Self {
                    self.acc.apply("shear_x", &[(0, 1, by_y)]);
                    self
                }

                /// `y' = y + x * by_x`.
                #[must_use]
                pub fn shear_y(mut self, by_x: T) -> Self {
                    self.acc.apply("shear_y", &[(1, 0, by_x)]);
                    self
                }

                /// The folded matrix.
                pub fn build(self) -> SquareMatrix<T> {
                    self.acc.into_matrix()
                }
            }

            impl<T: FloatScalar> Default for $builder<T> {
                fn default() -> Self {
                    Self::new()
                }
            }
        )*
    };
}

mod planar;
mod spatial;

pub use planar::{TransformBuilder2, TransformBuilder3};
pub use spatial::TransformBuilder4;

/// The matrix a builder has folded so far.
#[derive(Debug, Clone, PartialEq)]
struct Accumulator<T> {
    held: SquareMatrix<T>,
}

impl<T: FloatScalar> Accumulator<T> {
    fn identity(n: usize) -> Self {
        Self {
            held: SquareMatrix::identity_unchecked(n),
        }
    }

    /// Left-multiply the elementary matrix described by `entries`.
    fn apply(&mut self, op: &'static str, entries: &[(usize, usize, T)]) {
        let n = self.held.dim();
        log::trace!("folding {} into {}x{} transform", op, n, n);
        let elementary = SquareMatrix::elementary(n, entries);
        self.held = elementary.product(&self.held);
    }

    fn scale(&mut self, factors: &[T]) {
        let entries: alloc::vec::Vec<_> =
            factors.iter().enumerate().map(|(i, &s)| (i, i, s)).collect();
        self.apply("scale", &entries);
    }

    /// Rotation in the plane of axes `a` and `b`, turning `a` towards `b`.
    fn rotate(&mut self, op: &'static str, a: usize, b: usize, angle: T) {
        let (sin, cos) = angle.sin_cos();
        self.apply(op, &[(a, a, cos), (a, b, -sin), (b, a, sin), (b, b, cos)]);
    }

    fn into_matrix(self) -> SquareMatrix<T> {
        self.held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulator_starts_at_identity() {
        let acc: Accumulator<f64> = Accumulator::identity(3);
        assert_eq!(acc.into_matrix(), SquareMatrix::identity(3).unwrap());
    }

    #[test]
    fn apply_left_multiplies() {
        let mut acc: Accumulator<f64> = Accumulator::identity(2);
        acc.apply("first", &[(0, 1, 2.0)]);
        acc.apply("second", &[(1, 1, 3.0)]);
        let first = SquareMatrix::from_row_slice(2, &[1.0, 2.0, 0.0, 1.0]).unwrap();
        let second = SquareMatrix::from_row_slice(2, &[1.0, 0.0, 0.0, 3.0]).unwrap();
        assert_eq!(acc.into_matrix(), second.multiply(&first).unwrap());
    }

    #[test]
    fn rotate_plane_orientation() {
        let mut acc: Accumulator<f64> = Accumulator::identity(3);
        acc.rotate("rotate_x", 1, 2, core::f64::consts::FRAC_PI_2);
        let m = acc.into_matrix();
        // y axis turns onto z
        assert!((m[(2, 1)] - 1.0).abs() < 1e-12);
        assert!((m[(1, 2)] + 1.0).abs() < 1e-12);
        assert_eq!(m[(0, 0)], 1.0);
    }
}
