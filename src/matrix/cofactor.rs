//! Determinant, minors, cofactors and inverse by Laplace expansion.
//!
//! The recursion works on flat column-major buffers so the `1 x 1`
//! intermediates never have to be valid [`SquareMatrix`] values.
//! Cost is `O(N!)`; that is fine for the 2x2, 3x3 and 4x4 sizes the crate
//! targets and is kept as-is for larger ones rather than switching to an
//! elimination scheme with different rounding.

use alloc::vec::Vec;

use crate::error::Result;
use crate::traits::{checkerboard, FloatScalar, Scalar};
use crate::verify;

use super::{Matrix, SquareMatrix};

/// Largest side length expanded without a debug note.
const EXERCISED_DIM: usize = 4;

fn det_raw<T: Scalar>(data: &[T], n: usize) -> T {
    match n {
        1 => data[0],
        2 => data[0] * data[3] - data[2] * data[1],
        _ => {
            // Expand along column 0: element (i, 0) sits at data[i].
            let mut det = T::zero();
            for i in 0..n {
                det = det + data[i] * cofactor_raw(data, n, i, 0);
            }
            det
        }
    }
}

/// Copy of `data` without `row` and `col`, side `n - 1`.
fn submatrix_raw<T: Copy>(data: &[T], n: usize, row: usize, col: usize) -> Vec<T> {
    let mut out = Vec::with_capacity((n - 1) * (n - 1));
    for c in (0..n).filter(|&c| c != col) {
        for r in (0..n).filter(|&r| r != row) {
            out.push(data[c * n + r]);
        }
    }
    out
}

fn minor_raw<T: Scalar>(data: &[T], n: usize, row: usize, col: usize) -> T {
    det_raw(&submatrix_raw(data, n, row, col), n - 1)
}

fn cofactor_raw<T: Scalar>(data: &[T], n: usize, row: usize, col: usize) -> T {
    checkerboard(row, col, minor_raw(data, n, row, col))
}

impl<T: Scalar> SquareMatrix<T> {
    /// Determinant by cofactor expansion along the first stored column.
    ///
    /// ```
    /// use colalg::SquareMatrix;
    /// // columns [a, c] = [3, 1] and [b, d] = [8, 2]: a*d - b*c
    /// let m = SquareMatrix::new(vec![vec![3, 1], vec![8, 2]]).unwrap();
    /// assert_eq!(m.determinant(), 3 * 2 - 8 * 1);
    ///
    /// let m = SquareMatrix::from_row_slice(3, &[2.0, 0.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 2.0]).unwrap();
    /// assert_eq!(m.determinant(), 6.0);
    /// ```
    pub fn determinant(&self) -> T {
        let n = self.dim();
        if n > EXERCISED_DIM {
            log::debug!("cofactor expansion of a {}x{} matrix", n, n);
        }
        det_raw(self.as_slice(), n)
    }

    /// Determinant of the matrix with `row` and `col` removed.
    ///
    /// Defined for every size, including `2 x 2` where the removed matrix
    /// is a single element.
    pub fn minor(&self, row: usize, col: usize) -> Result<T> {
        verify::valid_coordinate(self.shape(), row, col)?;
        Ok(minor_raw(self.as_slice(), self.dim(), row, col))
    }

    /// Signed minor, `(-1)^(row + col) * minor(row, col)`.
    ///
    /// ```
    /// use colalg::SquareMatrix;
    /// let m = SquareMatrix::from_row_slice(2, &[1, 2, 3, 4]).unwrap();
    /// assert_eq!(m.cofactor(0, 0), Ok(4));
    /// assert_eq!(m.cofactor(0, 1), Ok(-3));
    /// assert!(m.cofactor(2, 0).is_err());
    /// ```
    pub fn cofactor(&self, row: usize, col: usize) -> Result<T> {
        verify::valid_coordinate(self.shape(), row, col)?;
        Ok(cofactor_raw(self.as_slice(), self.dim(), row, col))
    }

    /// The `(N-1) x (N-1)` matrix left after removing `row` and `col`.
    ///
    /// Needs `N >= 3` so the result still has side two or more.
    pub fn submatrix(&self, row: usize, col: usize) -> Result<SquareMatrix<T>> {
        verify::valid_coordinate(self.shape(), row, col)?;
        verify::min_shape(self.shape(), 3, 3)?;
        let n = self.dim();
        Ok(SquareMatrix(Matrix {
            data: submatrix_raw(self.as_slice(), n, row, col),
            nrows: n - 1,
            ncols: n - 1,
        }))
    }

    /// Matrix of cofactors, transposed.
    pub fn adjugate(&self) -> SquareMatrix<T> {
        let n = self.dim();
        let data = self.as_slice();
        SquareMatrix(Matrix::from_fn_unchecked(n, n, |r, c| {
            cofactor_raw(data, n, c, r)
        }))
    }
}

impl<T: FloatScalar> SquareMatrix<T> {
    /// Inverse as `adjugate / determinant`.
    ///
    /// Fails with [`AlgebraError::Singular`] when the determinant is exactly
    /// zero. Nearly singular matrices are inverted without complaint.
    ///
    /// ```
    /// use colalg::{AlgebraError, SquareMatrix};
    /// let m = SquareMatrix::<f64>::from_row_slice(2, &[4.0, 7.0, 2.0, 6.0]).unwrap();
    /// let inv = m.inverse().unwrap();
    /// assert!((inv[(0, 0)] - 0.6).abs() < 1e-12);
    /// assert!((inv[(0, 1)] + 0.7).abs() < 1e-12);
    ///
    /// let s = SquareMatrix::from_row_slice(2, &[1.0, 2.0, 2.0, 4.0]).unwrap();
    /// assert_eq!(s.inverse(), Err(AlgebraError::Singular));
    /// ```
    pub fn inverse(&self) -> Result<SquareMatrix<T>> {
        let det = verify::invertible(self)?;
        Ok(self.adjugate().scale(T::one() / det))
    }
}
