use crate::matrix::SquareMatrix;
use crate::traits::FloatScalar;

use super::Accumulator;

/// Composes 2D linear maps into a `2 x 2` matrix.
///
/// ```
/// use colalg::{TransformBuilder2, Vector};
/// use core::f64::consts::FRAC_PI_2;
///
/// let m = TransformBuilder2::new().rotate(FRAC_PI_2).scale(2.0, 1.0).build();
/// let v = m.multiply_vector(&Vector::from_slice(&[1.0, 0.0]).unwrap()).unwrap();
/// assert!(v.approx_eq(&Vector::from_slice(&[0.0, 1.0]).unwrap(), 1e-12));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TransformBuilder2<T = f64> {
    acc: Accumulator<T>,
}

impl<T: FloatScalar> TransformBuilder2<T> {
    /// Starts at the `2 x 2` identity.
    pub fn new() -> Self {
        Self {
            acc: Accumulator::identity(2),
        }
    }
}

/// Composes 2D affine maps into a `3 x 3` homogeneous matrix.
///
/// Points are `(x, y, 1)`; directions are `(x, y, 0)` and ignore
/// translation.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformBuilder3<T = f64> {
    acc: Accumulator<T>,
}

impl<T: FloatScalar> TransformBuilder3<T> {
    /// Starts at the `3 x 3` identity.
    pub fn new() -> Self {
        Self {
            acc: Accumulator::identity(3),
        }
    }

    /// Move by `(x, y)`.
    ///
    /// ```
    /// use colalg::{TransformBuilder3, Vector};
    /// let m = TransformBuilder3::new().translate(3.0, -1.0).build();
    /// let p = Vector::from_slice(&[1.0, 1.0, 1.0]).unwrap();
    /// assert_eq!(m.multiply_vector(&p).unwrap().as_slice(), &[4.0, 0.0, 1.0]);
    /// ```
    #[must_use]
    pub fn translate(mut self, x: T, y: T) -> Self {
        self.acc.apply("translate", &[(0, 2, x), (1, 2, y)]);
        self
    }
}

impl_planar_ops!(TransformBuilder2, TransformBuilder3);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector;
    use core::f64::consts::{FRAC_PI_2, PI};

    fn v(data: &[f64]) -> Vector<f64> {
        Vector::from_slice(data).unwrap()
    }

    fn apply(m: &SquareMatrix<f64>, p: &[f64]) -> Vector<f64> {
        m.multiply_vector(&v(p)).unwrap()
    }

    #[test]
    fn new_is_identity() {
        assert_eq!(TransformBuilder2::<f64>::new().build(), SquareMatrix::identity(2).unwrap());
        assert_eq!(TransformBuilder3::<f64>::default().build(), SquareMatrix::identity(3).unwrap());
    }

    #[test]
    fn scale() {
        let m = TransformBuilder2::new().scale(2.0, -3.0).build();
        assert_eq!(apply(&m, &[1.0, 1.0]), v(&[2.0, -3.0]));
    }

    #[test]
    fn rotate_counter_clockwise() {
        let m = TransformBuilder2::new().rotate(FRAC_PI_2).build();
        assert!(apply(&m, &[1.0, 0.0]).approx_eq(&v(&[0.0, 1.0]), 1e-12));
        assert!(apply(&m, &[0.0, 1.0]).approx_eq(&v(&[-1.0, 0.0]), 1e-12));
    }

    #[test]
    fn shear() {
        let m = TransformBuilder2::new().shear_x(2.0).build();
        assert_eq!(apply(&m, &[1.0, 3.0]), v(&[7.0, 3.0]));

        let m = TransformBuilder2::new().shear_y(0.5).build();
        assert_eq!(apply(&m, &[4.0, 1.0]), v(&[4.0, 3.0]));
    }

    #[test]
    fn call_order_is_application_order() {
        // Translate then rotate half a turn vs. the reverse.
        let tr = TransformBuilder3::new().translate(1.0, 0.0).rotate(PI).build();
        let rt = TransformBuilder3::new().rotate(PI).translate(1.0, 0.0).build();
        assert!(apply(&tr, &[1.0, 0.0, 1.0]).approx_eq(&v(&[-2.0, 0.0, 1.0]), 1e-12));
        assert!(apply(&rt, &[1.0, 0.0, 1.0]).approx_eq(&v(&[0.0, 0.0, 1.0]), 1e-12));
    }

    #[test]
    fn translation_in_last_column() {
        let m = TransformBuilder3::new().translate(5.0, 6.0).build();
        assert_eq!(m.col(2).unwrap().as_slice(), &[5.0, 6.0, 1.0]);
        // Directions are not translated.
        assert_eq!(apply(&m, &[1.0, 1.0, 0.0]), v(&[1.0, 1.0, 0.0]));
    }

    #[test]
    fn planar_ops_agree_across_sizes() {
        let two = TransformBuilder2::<f64>::new().scale(2.0, 3.0).shear_x(0.5).rotate(0.3).build();
        let three = TransformBuilder3::new().scale(2.0, 3.0).shear_x(0.5).rotate(0.3).build();
        for r in 0..2 {
            for c in 0..2 {
                assert!((two[(r, c)] - three[(r, c)]).abs() < 1e-12);
            }
        }
        assert_eq!(three.row(2).unwrap().as_slice(), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn f32_builder() {
        let m: SquareMatrix<f32> = TransformBuilder2::new().scale(2.0_f32, 2.0).build();
        assert_eq!(m.determinant(), 4.0);
    }
}
