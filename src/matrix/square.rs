use alloc::vec::Vec;
use core::fmt;
use core::ops::{Deref, Mul, Neg};

use crate::error::{AlgebraError, Result};
use crate::traits::Scalar;
use crate::vector::Vector;
use crate::verify;

use super::Matrix;

/// An `N x N` matrix, `N >= 2`.
///
/// Only reachable through a squareness check, so [`determinant`],
/// [`inverse`] and friends exist only where they are defined. Everything
/// a general [`Matrix`] offers is available through `Deref`.
///
/// [`determinant`]: SquareMatrix::determinant
/// [`inverse`]: SquareMatrix::inverse
///
/// ```
/// use colalg::{Matrix, SquareMatrix};
///
/// let m = SquareMatrix::from_row_slice(2, &[4.0, 7.0, 2.0, 6.0]).unwrap();
/// assert_eq!(m.determinant(), 10.0);
/// assert_eq!(m.rows(), 2); // via Deref<Target = Matrix>
///
/// let rect = Matrix::from_row_slice(2, 3, &[0.0; 6]).unwrap();
/// assert!(SquareMatrix::try_from(rect).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SquareMatrix<T>(pub(super) Matrix<T>);

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> SquareMatrix<T> {
    /// Build from raw columns; must be uniform, square and at least `2 x 2`.
    ///
    /// ```
    /// use colalg::{AlgebraError, Shape, SquareMatrix};
    /// assert!(SquareMatrix::new(vec![vec![1, 0], vec![0, 1]]).is_ok());
    /// assert_eq!(
    ///     SquareMatrix::new(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap_err(),
    ///     AlgebraError::NotSquare(Shape::new(3, 2))
    /// );
    /// ```
    pub fn new(columns: Vec<Vec<T>>) -> Result<Self> {
        verify::square(&columns)?;
        Matrix::new(columns).map(Self)
    }

    /// Build from column vectors, in order.
    pub fn from_columns<I: IntoIterator<Item = Vector<T>>>(columns: I) -> Result<Self> {
        Self::try_from(Matrix::from_columns(columns)?)
    }

    /// `n x n` from a column-major slice of `n * n` elements.
    pub fn from_col_slice(n: usize, data: &[T]) -> Result<Self> {
        Matrix::from_col_slice(n, n, data).map(Self)
    }

    /// `n x n` from a row-major slice of `n * n` elements.
    pub fn from_row_slice(n: usize, row_major: &[T]) -> Result<Self> {
        Matrix::from_row_slice(n, n, row_major).map(Self)
    }

    /// `n x n` identity.
    ///
    /// ```
    /// use colalg::SquareMatrix;
    /// let i: SquareMatrix<f64> = SquareMatrix::identity(3).unwrap();
    /// assert_eq!(i[(1, 1)], 1.0);
    /// assert_eq!(i[(0, 1)], 0.0);
    /// assert_eq!(i.determinant(), 1.0);
    /// ```
    pub fn identity(n: usize) -> Result<Self> {
        Matrix::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() }).map(Self)
    }

    /// Build from raw columns that must form exactly `n x n`.
    ///
    /// Backs the fixed-size 2x2, 3x3 and 4x4 uses.
    ///
    /// ```
    /// use colalg::SquareMatrix;
    /// let cols = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
    /// assert!(SquareMatrix::with_dimension(cols.clone(), 2).is_ok());
    /// assert!(SquareMatrix::with_dimension(cols, 3).is_err());
    /// ```
    pub fn with_dimension(columns: Vec<Vec<T>>, n: usize) -> Result<Self> {
        verify::exact_dimensions(&columns, n, n)?;
        Self::new(columns)
    }

    #[cfg(feature = "transform")]
    pub(crate) fn identity_unchecked(n: usize) -> Self {
        Self::elementary(n, &[])
    }

    /// `n x n` identity with the `(row, col, value)` entries written over it.
    /// A later entry for the same position wins.
    #[cfg(feature = "transform")]
    pub(crate) fn elementary(n: usize, entries: &[(usize, usize, T)]) -> Self {
        let mut m = Matrix::from_fn_unchecked(n, n, |i, j| {
            if i == j {
                T::one()
            } else {
                T::zero()
            }
        });
        for &(row, col, value) in entries {
            m.data[col * n + row] = value;
        }
        Self(m)
    }
}

impl<T> SquareMatrix<T> {
    /// Side length `N`.
    #[inline]
    pub fn dim(&self) -> usize {
        self.0.nrows
    }

    #[inline]
    pub fn as_matrix(&self) -> &Matrix<T> {
        &self.0
    }

    #[inline]
    pub fn into_matrix(self) -> Matrix<T> {
        self.0
    }
}

// ── Operations closed over square matrices ──────────────────────────

impl<T: Scalar> SquareMatrix<T> {
    pub fn invert(&self) -> Self {
        Self(self.0.invert())
    }

    pub fn scale(&self, scalar: T) -> Self {
        Self(self.0.scale(scalar))
    }

    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.0.add(&rhs.0).map(Self)
    }

    pub fn subtract(&self, rhs: &Self) -> Result<Self> {
        self.0.subtract(&rhs.0).map(Self)
    }

    /// Product of two square matrices of the same size, kept square.
    ///
    /// [`Matrix::multiply`] (through `Deref`) takes any compatible
    /// right-hand side and returns a plain [`Matrix`].
    ///
    /// ```
    /// use colalg::{Matrix, SquareMatrix};
    /// let a = SquareMatrix::from_row_slice(2, &[1, 2, 3, 4]).unwrap();
    /// let i = SquareMatrix::identity(2).unwrap();
    /// assert_eq!(a.multiply_square(&i).unwrap(), a);
    ///
    /// let rect = Matrix::from_row_slice(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(i.multiply(&rect).unwrap(), rect);
    /// ```
    pub fn multiply_square(&self, rhs: &Self) -> Result<Self> {
        self.0.multiply(&rhs.0).map(Self)
    }

    /// `first * rest[0] * rest[1] * ...`, all the same size.
    ///
    /// ```
    /// use colalg::SquareMatrix;
    /// let a = SquareMatrix::from_row_slice(2, &[0, 1, 1, 0]).unwrap();
    /// let i = SquareMatrix::identity(2).unwrap();
    /// assert_eq!(SquareMatrix::chain(&a, &[a.clone()]).unwrap(), i);
    /// ```
    pub fn chain(first: &Self, rest: &[Self]) -> Result<Self> {
        let mut acc = first.clone();
        for next in rest {
            acc = acc.multiply_square(next)?;
        }
        Ok(acc)
    }

    /// `self * rhs` for operands already known to share a size.
    #[cfg(feature = "transform")]
    pub(crate) fn product(&self, rhs: &Self) -> Self {
        Self(self.0.product(&rhs.0))
    }
}

impl<T: Scalar> Neg for SquareMatrix<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.invert()
    }
}

impl<T: Scalar> Neg for &SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn neg(self) -> SquareMatrix<T> {
        self.invert()
    }
}

impl<T: Scalar> Mul<T> for SquareMatrix<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        self.scale(scalar)
    }
}

impl<T: Scalar> Mul<T> for &SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn mul(self, scalar: T) -> SquareMatrix<T> {
        self.scale(scalar)
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl<T> Deref for SquareMatrix<T> {
    type Target = Matrix<T>;

    #[inline]
    fn deref(&self) -> &Matrix<T> {
        &self.0
    }
}

impl<T> TryFrom<Matrix<T>> for SquareMatrix<T> {
    type Error = AlgebraError;

    fn try_from(m: Matrix<T>) -> Result<Self> {
        verify::square_shape(m.shape())?;
        Ok(Self(m))
    }
}

impl<T> From<SquareMatrix<T>> for Matrix<T> {
    fn from(m: SquareMatrix<T>) -> Self {
        m.0
    }
}

impl<T: PartialEq> PartialEq<Matrix<T>> for SquareMatrix<T> {
    fn eq(&self, other: &Matrix<T>) -> bool {
        self.0 == *other
    }
}

impl<T: PartialEq> PartialEq<SquareMatrix<T>> for Matrix<T> {
    fn eq(&self, other: &SquareMatrix<T>) -> bool {
        *self == other.0
    }
}

impl<T> AsRef<Matrix<T>> for SquareMatrix<T> {
    fn as_ref(&self) -> &Matrix<T> {
        &self.0
    }
}

impl<T: fmt::Display> fmt::Display for SquareMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Shape;
    use alloc::{format, vec};

    #[test]
    fn new_requires_square() {
        assert!(SquareMatrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).is_ok());
        assert_eq!(
            SquareMatrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap_err(),
            AlgebraError::NotSquare(Shape::new(2, 3))
        );
    }

    #[test]
    fn new_checks_uniform_before_square() {
        assert!(matches!(
            SquareMatrix::new(vec![vec![1.0, 2.0], vec![3.0]]),
            Err(AlgebraError::NonUniformShape { .. })
        ));
    }

    #[test]
    fn new_enforces_floor() {
        assert!(matches!(
            SquareMatrix::new(vec![vec![5.0]]),
            Err(AlgebraError::BelowMinimumDimension { .. })
        ));
        assert!(matches!(
            SquareMatrix::<f64>::new(vec![]),
            Err(AlgebraError::BelowMinimumDimension { .. })
        ));
        assert!(SquareMatrix::<f64>::identity(1).is_err());
    }

    #[test]
    fn try_from_matrix() {
        let m = Matrix::from_row_slice(3, 3, &[1; 9]).unwrap();
        let sq = SquareMatrix::try_from(m.clone()).unwrap();
        assert_eq!(sq.dim(), 3);
        assert_eq!(Matrix::from(sq), m);

        let rect = Matrix::from_row_slice(3, 2, &[1; 6]).unwrap();
        assert_eq!(
            SquareMatrix::try_from(rect).unwrap_err(),
            AlgebraError::NotSquare(Shape::new(3, 2))
        );
    }

    #[test]
    fn from_columns() {
        let a = Vector::from_slice(&[1, 0]).unwrap();
        let b = Vector::from_slice(&[0, 1]).unwrap();
        assert_eq!(
            SquareMatrix::from_columns([a.clone(), b]).unwrap(),
            SquareMatrix::identity(2).unwrap()
        );
        let c = Vector::from_slice(&[0, 1, 2]).unwrap();
        assert!(SquareMatrix::from_columns([a, c]).is_err());
    }

    #[test]
    fn with_dimension_is_exact() {
        let cols = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
        assert!(SquareMatrix::with_dimension(cols.clone(), 3).is_ok());
        assert_eq!(
            SquareMatrix::with_dimension(cols, 4).unwrap_err(),
            AlgebraError::DimensionMismatch {
                expected: Shape::new(4, 4),
                got: Shape::new(3, 3)
            }
        );
    }

    #[cfg(feature = "transform")]
    #[test]
    fn identity_matches_unchecked() {
        for n in 2..6 {
            assert_eq!(
                SquareMatrix::<i32>::identity(n).unwrap(),
                SquareMatrix::identity_unchecked(n)
            );
        }
    }

    #[cfg(feature = "transform")]
    #[test]
    fn elementary_overwrites_identity() {
        let e = SquareMatrix::elementary(3, &[(0, 2, 5), (1, 0, -1), (0, 2, 7)]);
        assert_eq!(
            e,
            SquareMatrix::from_row_slice(3, &[1, 0, 7, -1, 1, 0, 0, 0, 1]).unwrap()
        );
    }

    #[test]
    fn closed_operations_stay_square() {
        let a = SquareMatrix::from_row_slice(2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        let i = SquareMatrix::identity(2).unwrap();
        let sum: SquareMatrix<f64> = a.add(&i).unwrap();
        assert_eq!(sum, SquareMatrix::from_row_slice(2, &[2.0, 2.0, 3.0, 5.0]).unwrap());
        assert_eq!(a.subtract(&a).unwrap(), SquareMatrix::from_row_slice(2, &[0.0; 4]).unwrap());
        assert_eq!(a.multiply_square(&i).unwrap(), a);
        assert_eq!(i.multiply_square(&a).unwrap(), a);
        assert_eq!(-&a, a.invert());
        assert_eq!(&a * 3.0, a.scale(3.0));
    }

    #[cfg(feature = "transform")]
    #[test]
    fn unchecked_product_matches_checked() {
        let a = SquareMatrix::from_row_slice(2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = SquareMatrix::from_row_slice(2, &[0.5, -1.0, 2.0, 0.0]).unwrap();
        assert_eq!(a.product(&b), a.multiply_square(&b).unwrap());
    }

    #[test]
    fn closed_operations_check_size() {
        let a: SquareMatrix<f64> = SquareMatrix::identity(2).unwrap();
        let b: SquareMatrix<f64> = SquareMatrix::identity(3).unwrap();
        assert!(matches!(a.add(&b), Err(AlgebraError::DimensionMismatch { .. })));
        assert!(matches!(a.multiply_square(&b), Err(AlgebraError::IncompatibleShape { .. })));
        assert!(SquareMatrix::chain(&a, &[a.clone(), b]).is_err());
    }

    #[test]
    fn deref_exposes_matrix_operations() {
        let a = SquareMatrix::from_row_slice(2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        let v = Vector::from_slice(&[1.0, 1.0]).unwrap();
        assert_eq!(a.multiply_vector(&v).unwrap().as_slice(), &[3.0, 7.0]);
        assert_eq!(a.row(1).unwrap().as_slice(), &[3.0, 4.0]);

        let rect = Matrix::from_row_slice(2, 3, &[1.0; 6]).unwrap();
        assert_eq!(a.multiply(&rect).unwrap().shape(), Shape::new(2, 3));
    }

    #[test]
    fn identity_times_rectangular() {
        let rect = Matrix::from_row_slice(3, 2, &[1, 2, 3, 4, 5, 6]).unwrap();
        let i3 = SquareMatrix::identity(3).unwrap();
        let i2 = SquareMatrix::identity(2).unwrap();
        assert_eq!(i3.multiply(&rect).unwrap(), rect);
        assert_eq!(rect.multiply(&i2).unwrap(), rect);
        assert!(i2.multiply(&rect).is_err());
    }

    #[test]
    fn compares_with_matrix() {
        let a = SquareMatrix::from_row_slice(2, &[1, 2, 3, 4]).unwrap();
        let m = Matrix::from_row_slice(2, 2, &[1, 2, 3, 4]).unwrap();
        assert_eq!(a, m);
        assert_eq!(m, a);
        assert_ne!(a, Matrix::from_row_slice(2, 2, &[1, 2, 3, 5]).unwrap());
    }

    #[test]
    fn display_delegates() {
        let a = SquareMatrix::from_row_slice(2, &[1, 2, 3, 4]).unwrap();
        assert_eq!(format!("{}", a), format!("{}", a.as_matrix()));
    }
}
