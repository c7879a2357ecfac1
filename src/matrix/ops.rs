use core::ops::{Mul, Neg};

use crate::error::Result;
use crate::traits::{FloatScalar, Scalar};
use crate::vector::Vector;
use crate::verify;

use super::{Matrix, SquareMatrix};

// ── Element-wise arithmetic ─────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Negate every element.
    pub fn invert(&self) -> Self {
        self.map(|x| -x)
    }

    /// Multiply every element by `scalar`.
    ///
    /// ```
    /// use colalg::Matrix;
    /// let m = Matrix::from_row_slice(2, 2, &[1, 2, 3, 4]).unwrap();
    /// assert_eq!(m.scale(2).as_slice(), &[2, 6, 4, 8]);
    /// ```
    pub fn scale(&self, scalar: T) -> Self {
        self.map(|x| x * scalar)
    }

    /// Element-wise sum. Shapes must be identical.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        verify::equal_shapes(self.shape(), rhs.shape())?;
        Ok(self.zip_with(rhs, |a, b| a + b))
    }

    /// Element-wise difference `self - rhs`. Shapes must be identical.
    pub fn subtract(&self, rhs: &Self) -> Result<Self> {
        verify::equal_shapes(self.shape(), rhs.shape())?;
        Ok(self.zip_with(rhs, |a, b| a - b))
    }

    pub(super) fn map(&self, f: impl Fn(T) -> T) -> Self {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Self {
        Matrix {
            data: self
                .data
                .iter()
                .zip(rhs.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

// ── Products ────────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Matrix-vector product. The vector length must equal `cols()`; the
    /// result has `rows()` components.
    ///
    /// ```
    /// use colalg::{Matrix, Vector};
    /// let m = Matrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let v = Vector::from_slice(&[1.0, 0.0, -1.0]).unwrap();
    /// assert_eq!(m.multiply_vector(&v).unwrap().as_slice(), &[-2.0, -2.0]);
    /// ```
    pub fn multiply_vector(&self, v: &Vector<T>) -> Result<Vector<T>> {
        verify::operable(self.shape(), v.shape())?;
        let mut out = alloc::vec![T::zero(); self.nrows];
        for (c, &vc) in v.iter().enumerate() {
            for (r, acc) in out.iter_mut().enumerate() {
                *acc = *acc + self.data[c * self.nrows + r] * vc;
            }
        }
        Ok(Vector::from_vec_unchecked(out))
    }

    /// Matrix product `self * rhs`, shaped `rows(self) x cols(rhs)`.
    ///
    /// Requires `cols(self) == rows(rhs)`.
    ///
    /// ```
    /// use colalg::{AlgebraError, Matrix};
    /// let a = Matrix::from_row_slice(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
    /// let b = Matrix::from_row_slice(3, 2, &[7, 8, 9, 10, 11, 12]).unwrap();
    /// let c = a.multiply(&b).unwrap();
    /// assert_eq!(c, Matrix::from_row_slice(2, 2, &[58, 64, 139, 154]).unwrap());
    ///
    /// assert!(matches!(a.multiply(&a), Err(AlgebraError::IncompatibleShape { .. })));
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Result<Self> {
        verify::operable(self.shape(), rhs.shape())?;
        Ok(self.product(rhs))
    }

    /// Product without the shape check. Callers guarantee
    /// `self.ncols == rhs.nrows`.
    pub(crate) fn product(&self, rhs: &Self) -> Self {
        debug_assert_eq!(self.ncols, rhs.nrows);
        let (m, k, n) = (self.nrows, self.ncols, rhs.ncols);
        let mut data = alloc::vec![T::zero(); m * n];
        for c in 0..n {
            for i in 0..k {
                let b = rhs.data[c * k + i];
                let a_col = &self.data[i * m..(i + 1) * m];
                let out = &mut data[c * m..(c + 1) * m];
                for (acc, &a) in out.iter_mut().zip(a_col) {
                    *acc = *acc + a * b;
                }
            }
        }
        Matrix {
            data,
            nrows: m,
            ncols: n,
        }
    }

    /// Left-to-right product `first * rest[0] * rest[1] * ...`.
    ///
    /// Each step is shape-checked against the running product, so the
    /// error names the first pair that cannot be multiplied.
    ///
    /// ```
    /// use colalg::Matrix;
    /// let a = Matrix::from_row_slice(2, 3, &[1.0; 6]).unwrap();
    /// let b = Matrix::from_row_slice(3, 4, &[1.0; 12]).unwrap();
    /// let c = Matrix::from_row_slice(4, 2, &[1.0; 8]).unwrap();
    /// let p = Matrix::chain(&a, &[b, c]).unwrap();
    /// assert_eq!(p.shape(), colalg::Shape::new(2, 2));
    /// assert_eq!(p[(0, 0)], 12.0);
    /// ```
    pub fn chain(first: &Self, rest: &[Self]) -> Result<Self> {
        let mut acc = first.clone();
        for next in rest {
            acc = acc.multiply(next)?;
        }
        Ok(acc)
    }
}

// ── Tolerance equality ──────────────────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// Same shape and every element within `epsilon` (inclusive).
    pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| (a - b).abs() <= epsilon)
    }
}

// ── Operators ───────────────────────────────────────────────────────

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.invert()
    }
}

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.invert()
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        self.scale(scalar)
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, scalar: T) -> Matrix<T> {
        self.scale(scalar)
    }
}

// ── scalar * value (concrete impls) ────────────────────────────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Vector<$t>> for $t {
                type Output = Vector<$t>;
                fn mul(self, rhs: Vector<$t>) -> Vector<$t> {
                    rhs.scale(self)
                }
            }

            impl Mul<&Vector<$t>> for $t {
                type Output = Vector<$t>;
                fn mul(self, rhs: &Vector<$t>) -> Vector<$t> {
                    rhs.scale(self)
                }
            }

            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs.scale(self)
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs.scale(self)
                }
            }

            impl Mul<SquareMatrix<$t>> for $t {
                type Output = SquareMatrix<$t>;
                fn mul(self, rhs: SquareMatrix<$t>) -> SquareMatrix<$t> {
                    rhs.scale(self)
                }
            }

            impl Mul<&SquareMatrix<$t>> for $t {
                type Output = SquareMatrix<$t>;
                fn mul(self, rhs: &SquareMatrix<$t>) -> SquareMatrix<$t> {
                    rhs.scale(self)
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128);
