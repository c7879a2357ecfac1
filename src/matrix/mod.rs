pub mod aliases;
mod cofactor;
mod ops;
mod square;

pub use aliases::*;
pub use square::SquareMatrix;

use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;

use crate::error::{AlgebraError, Result, Shape};
use crate::traits::Scalar;
use crate::vector::Vector;
use crate::verify::{self, MIN_DIMENSION};

/// Immutable `rows x cols` matrix, both dimensions at least two.
///
/// Stored column-major: a flat buffer where column `c` occupies
/// `data[c * rows..(c + 1) * rows]`. Raw 2D input follows the same
/// convention, outer index = column, inner index = row.
///
/// # Examples
///
/// ```
/// use colalg::Matrix;
///
/// // Columns [1, 4] and [2, 5] and [3, 6].
/// let m = Matrix::new(vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]).unwrap();
/// assert_eq!(m.rows(), 2);
/// assert_eq!(m.cols(), 3);
/// assert_eq!(m[(0, 2)], 3.0);
/// assert_eq!(m.row(1).unwrap().as_slice(), &[4.0, 5.0, 6.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Build from raw columns.
    ///
    /// Fails with `NonUniformShape` if the columns differ in length and
    /// `BelowMinimumDimension` if either dimension is below two.
    ///
    /// ```
    /// use colalg::{AlgebraError, Matrix};
    /// assert!(matches!(
    ///     Matrix::new(vec![vec![1, 2], vec![3]]),
    ///     Err(AlgebraError::NonUniformShape { column: 1, .. })
    /// ));
    /// ```
    pub fn new(columns: Vec<Vec<T>>) -> Result<Self> {
        verify::min_dimensions(&columns, MIN_DIMENSION, MIN_DIMENSION)?;
        let shape = verify::raw_shape(&columns);
        let data = columns.into_iter().flatten().collect();
        Ok(Self {
            data,
            nrows: shape.rows,
            ncols: shape.cols,
        })
    }

    /// Build from column vectors, in order.
    ///
    /// ```
    /// use colalg::{Matrix, Vector};
    /// let e0 = Vector::from_slice(&[1.0, 0.0]).unwrap();
    /// let e1 = Vector::from_slice(&[0.0, 1.0]).unwrap();
    /// let m = Matrix::from_columns([e0, e1]).unwrap();
    /// assert_eq!(m[(1, 1)], 1.0);
    /// ```
    pub fn from_columns<I: IntoIterator<Item = Vector<T>>>(columns: I) -> Result<Self> {
        Self::new(columns.into_iter().map(Vec::<T>::from).collect())
    }

    /// Build from a flat slice in column-major order.
    ///
    /// ```
    /// use colalg::Matrix;
    /// // col0 = [1, 3], col1 = [2, 4]
    /// let m = Matrix::from_col_slice(2, 2, &[1.0, 3.0, 2.0, 4.0]).unwrap();
    /// assert_eq!(m[(0, 1)], 2.0);
    /// ```
    pub fn from_col_slice(nrows: usize, ncols: usize, data: &[T]) -> Result<Self> {
        Self::check_flat(nrows, ncols, data.len())?;
        Ok(Self {
            data: data.to_vec(),
            nrows,
            ncols,
        })
    }

    /// Build from a flat slice in row-major order, transposing into
    /// column-major storage.
    ///
    /// ```
    /// use colalg::Matrix;
    /// let m = Matrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_row_slice(nrows: usize, ncols: usize, row_major: &[T]) -> Result<Self> {
        Self::check_flat(nrows, ncols, row_major.len())?;
        Ok(Self::from_fn_unchecked(nrows, ncols, |i, j| {
            row_major[i * ncols + j]
        }))
    }

    /// Matrix of zeros.
    pub fn zeros(nrows: usize, ncols: usize) -> Result<Self> {
        Self::from_fn(nrows, ncols, |_, _| T::zero())
    }

    /// Build by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use colalg::Matrix;
    /// let m = Matrix::from_fn(2, 3, |i, j| (i * 3 + j) as f64).unwrap();
    /// assert_eq!(m[(1, 2)], 5.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Result<Self> {
        verify::min_shape(Shape::new(nrows, ncols), MIN_DIMENSION, MIN_DIMENSION)?;
        Ok(Self::from_fn_unchecked(nrows, ncols, f))
    }

    fn check_flat(nrows: usize, ncols: usize, len: usize) -> Result<()> {
        verify::min_shape(Shape::new(nrows, ncols), MIN_DIMENSION, MIN_DIMENSION)?;
        let expected = nrows
            .checked_mul(ncols)
            .ok_or(AlgebraError::DimensionMismatch {
                expected: Shape::new(nrows, ncols),
                got: Shape::column(len),
            })?;
        verify::exact_shape(Shape::column(len), expected, 1)
    }
}

impl<T> Matrix<T> {
    /// Build without checking the floor; callers guarantee the shape.
    pub(crate) fn from_fn_unchecked(
        nrows: usize,
        ncols: usize,
        f: impl Fn(usize, usize) -> T,
    ) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for j in 0..ncols {
            for i in 0..nrows {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Number of rows (the length of every column).
    #[inline]
    pub fn rows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.ncols
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        Shape::new(self.nrows, self.ncols)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Elements in column-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over all elements, column by column.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    fn col_slice(&self, col: usize) -> &[T] {
        &self.data[col * self.nrows..(col + 1) * self.nrows]
    }
}

// ── Access ──────────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Element at `(row, col)`, or `IndexOutOfBounds`.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        verify::valid_coordinate(self.shape(), row, col)?;
        Ok(self[(row, col)])
    }

    /// Row `i`, gathered from each column.
    pub fn row(&self, i: usize) -> Result<Vector<T>> {
        verify::valid_row(self.shape(), i)?;
        Ok(Vector::from_vec_unchecked(
            (0..self.ncols).map(|j| self[(i, j)]).collect(),
        ))
    }

    /// Column `j`, copied.
    pub fn col(&self, j: usize) -> Result<Vector<T>> {
        verify::valid_column(self.shape(), j)?;
        Ok(Vector::from_vec_unchecked(self.col_slice(j).to_vec()))
    }

    /// All columns as vectors.
    pub fn columns(&self) -> Vec<Vector<T>> {
        (0..self.ncols)
            .map(|j| Vector::from_vec_unchecked(self.col_slice(j).to_vec()))
            .collect()
    }

    /// Copy of the elements as raw columns (outer index = column).
    ///
    /// ```
    /// use colalg::Matrix;
    /// let raw = vec![vec![1, 2], vec![3, 4]];
    /// let m = Matrix::new(raw.clone()).unwrap();
    /// assert_eq!(m.to_array(), raw);
    /// ```
    pub fn to_array(&self) -> Vec<Vec<T>> {
        (0..self.ncols).map(|j| self.col_slice(j).to_vec()).collect()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols
        );
        &self.data[col * self.nrows + row]
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl<T: Scalar> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = AlgebraError;

    fn try_from(columns: Vec<Vec<T>>) -> Result<Self> {
        Self::new(columns)
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

// ── Display ─────────────────────────────────────────────────────────

/// Row by row, each element bracketed and right-aligned within its column.
///
/// ```
/// use colalg::Matrix;
/// let m = Matrix::from_row_slice(2, 2, &[1.0, -20.0, 3.0, 4.0]).unwrap();
/// assert_eq!(format!("{:.1}", m), "[1.0][-20.0]\n[3.0][  4.0]");
/// ```
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::format::write_grid(f, self.nrows, self.ncols, |i, j| {
            &self.data[j * self.nrows + i]
        })
    }
}
