//! Invariant checks shared by every constructor and operation.
//!
//! Raw inputs are column-major: the outer slice holds columns, each inner
//! `Vec` holds the rows of that column. Checks on values that are already
//! stored (and therefore uniform) take their [`Shape`] instead.
//!
//! Every check either returns `Ok(())` or the error for the first violated
//! invariant. None of them read element values except [`invertible`].

use alloc::vec::Vec;

use crate::error::{AlgebraError, Result, Shape};
use crate::matrix::SquareMatrix;
use crate::traits::Scalar;

/// Smallest vector length and matrix dimension the crate accepts.
pub const MIN_DIMENSION: usize = 2;

/// Shape of a raw column-major array, assuming it is uniform.
///
/// Zero columns report zero rows.
#[inline]
pub fn raw_shape<T>(columns: &[Vec<T>]) -> Shape {
    let rows = columns.first().map_or(0, Vec::len);
    Shape::new(rows, columns.len())
}

/// All columns must have the length of the first one.
///
/// ```
/// use colalg::verify;
/// assert!(verify::uniform(&[vec![1.0, 2.0], vec![3.0, 4.0]]).is_ok());
/// assert!(verify::uniform(&[vec![1.0, 2.0], vec![3.0]]).is_err());
/// assert!(verify::uniform::<f64>(&[]).is_ok());
/// ```
pub fn uniform<T>(columns: &[Vec<T>]) -> Result<()> {
    let Some(first) = columns.first() else {
        return Ok(());
    };
    let expected = first.len();
    match columns.iter().position(|c| c.len() != expected) {
        Some(column) => Err(AlgebraError::NonUniformShape {
            column,
            expected,
            got: columns[column].len(),
        }),
        None => Ok(()),
    }
}

/// Uniform, with at least `min_rows` rows and `min_cols` columns.
pub fn min_dimensions<T>(columns: &[Vec<T>], min_rows: usize, min_cols: usize) -> Result<()> {
    uniform(columns)?;
    min_shape(raw_shape(columns), min_rows, min_cols)
}

/// Uniform, with exactly `rows` rows and `cols` columns.
pub fn exact_dimensions<T>(columns: &[Vec<T>], rows: usize, cols: usize) -> Result<()> {
    uniform(columns)?;
    exact_shape(raw_shape(columns), rows, cols)
}

/// Uniform, with as many rows as columns. Zero columns pass.
pub fn square<T>(columns: &[Vec<T>]) -> Result<()> {
    uniform(columns)?;
    if columns.is_empty() {
        return Ok(());
    }
    square_shape(raw_shape(columns))
}

/// Vector has at least `min` components.
///
/// ```
/// use colalg::{verify, AlgebraError};
/// assert!(verify::min_length(&[1.0, 2.0], 2).is_ok());
/// assert!(matches!(
///     verify::min_length(&[1.0], 2),
///     Err(AlgebraError::BelowMinimumDimension { .. })
/// ));
/// ```
pub fn min_length<T>(vector: &[T], min: usize) -> Result<()> {
    min_shape(Shape::column(vector.len()), min, 1)
}

/// Vector has exactly `len` components.
pub fn exact_length<T>(vector: &[T], len: usize) -> Result<()> {
    exact_shape(Shape::column(vector.len()), len, 1)
}

/// Both vectors have the same length.
pub fn equal_lengths<T>(a: &[T], b: &[T]) -> Result<()> {
    equal_shapes(Shape::column(a.len()), Shape::column(b.len()))
}

/// Both raw matrices are uniform and have the same shape.
pub fn equal_dimensions<T>(a: &[Vec<T>], b: &[Vec<T>]) -> Result<()> {
    uniform(a)?;
    uniform(b)?;
    equal_shapes(raw_shape(a), raw_shape(b))
}

/// `shape` is at least `min_rows x min_cols`.
pub fn min_shape(shape: Shape, min_rows: usize, min_cols: usize) -> Result<()> {
    if shape.rows < min_rows || shape.cols < min_cols {
        return Err(AlgebraError::BelowMinimumDimension {
            required: Shape::new(min_rows, min_cols),
            got: shape,
        });
    }
    Ok(())
}

/// `shape` is exactly `rows x cols`.
pub fn exact_shape(shape: Shape, rows: usize, cols: usize) -> Result<()> {
    let expected = Shape::new(rows, cols);
    if shape != expected {
        return Err(AlgebraError::DimensionMismatch {
            expected,
            got: shape,
        });
    }
    Ok(())
}

/// `shape` has as many rows as columns.
pub fn square_shape(shape: Shape) -> Result<()> {
    if shape.rows != shape.cols {
        return Err(AlgebraError::NotSquare(shape));
    }
    Ok(())
}

/// Operands of an element-wise operation share a shape.
pub fn equal_shapes(lhs: Shape, rhs: Shape) -> Result<()> {
    if lhs != rhs {
        return Err(AlgebraError::DimensionMismatch {
            expected: lhs,
            got: rhs,
        });
    }
    Ok(())
}

/// `lhs * rhs` is defined: the columns of `lhs` match the rows of `rhs`.
///
/// A vector operand is passed as [`Shape::column`], so the same check covers
/// matrix-vector and matrix-matrix products.
///
/// ```
/// use colalg::{verify, Shape};
/// assert!(verify::operable(Shape::new(2, 3), Shape::new(3, 4)).is_ok());
/// assert!(verify::operable(Shape::new(2, 3), Shape::column(3)).is_ok());
/// assert!(verify::operable(Shape::new(2, 3), Shape::new(2, 3)).is_err());
/// ```
pub fn operable(lhs: Shape, rhs: Shape) -> Result<()> {
    if lhs.cols != rhs.rows {
        return Err(AlgebraError::IncompatibleShape { lhs, rhs });
    }
    Ok(())
}

/// `index` addresses a component of a vector of length `len`.
pub fn valid_index(len: usize, index: usize) -> Result<()> {
    valid_coordinate(Shape::column(len), index, 0)
}

/// `(row, col)` lies inside `shape`.
pub fn valid_coordinate(shape: Shape, row: usize, col: usize) -> Result<()> {
    if row >= shape.rows || col >= shape.cols {
        return Err(AlgebraError::IndexOutOfBounds { row, col, shape });
    }
    Ok(())
}

/// `row` is a row of `shape`.
pub fn valid_row(shape: Shape, row: usize) -> Result<()> {
    if row >= shape.rows {
        return Err(AlgebraError::IndexOutOfBounds { row, col: 0, shape });
    }
    Ok(())
}

/// `col` is a column of `shape`.
pub fn valid_column(shape: Shape, col: usize) -> Result<()> {
    if col >= shape.cols {
        return Err(AlgebraError::IndexOutOfBounds { row: 0, col, shape });
    }
    Ok(())
}

/// Determinant is not exactly zero. Returns the determinant on success.
///
/// No tolerance is applied: a determinant of `1e-300` passes.
///
/// ```
/// use colalg::{verify, AlgebraError, SquareMatrix};
/// let singular = SquareMatrix::from_row_slice(2, &[1.0, 2.0, 2.0, 4.0]).unwrap();
/// assert_eq!(verify::invertible(&singular), Err(AlgebraError::Singular));
/// ```
pub fn invertible<T: Scalar>(matrix: &SquareMatrix<T>) -> Result<T> {
    let det = matrix.determinant();
    if det == T::zero() {
        log::debug!("rejecting {}x{} matrix with zero determinant", matrix.dim(), matrix.dim());
        return Err(AlgebraError::Singular);
    }
    Ok(det)
}
