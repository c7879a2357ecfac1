use core::fmt;

/// Dimensions of a vector or matrix operand, reported inside [`AlgebraError`].
///
/// Vectors are reported as single columns (`len × 1`).
///
/// ```
/// use colalg::Shape;
/// assert_eq!(Shape::new(2, 3).to_string(), "2x3");
/// assert_eq!(Shape::column(4), Shape::new(4, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Shape of a vector of length `len`.
    #[inline]
    pub const fn column(len: usize) -> Self {
        Self { rows: len, cols: 1 }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Errors raised when an operand violates a shape or value invariant.
///
/// Every operation checks its invariants before reading any element, so an
/// error never comes with a partially computed result.
///
/// ```
/// use colalg::{AlgebraError, Vector};
///
/// let a = Vector::from_slice(&[1.0, 2.0]).unwrap();
/// let b = Vector::from_slice(&[1.0, 2.0, 3.0]).unwrap();
/// assert!(matches!(a.add(&b), Err(AlgebraError::DimensionMismatch { .. })));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AlgebraError {
    /// Operand is smaller than the required minimum.
    #[error("expected at least {required} but got {got}")]
    BelowMinimumDimension { required: Shape, got: Shape },

    /// A raw 2D input has columns of different lengths.
    #[error("column {column} has length {got}, expected {expected} like column 0")]
    NonUniformShape {
        column: usize,
        expected: usize,
        got: usize,
    },

    /// Square-only operation on a non-square matrix.
    #[error("expected a square matrix but got {0}")]
    NotSquare(Shape),

    /// Two operands that must share a shape do not.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: Shape, got: Shape },

    /// Inner dimensions of a product do not agree.
    #[error("cannot multiply {lhs} by {rhs}")]
    IncompatibleShape { lhs: Shape, rhs: Shape },

    /// Row or column index outside the operand.
    #[error("index ({row}, {col}) is out of bounds for {shape}")]
    IndexOutOfBounds { row: usize, col: usize, shape: Shape },

    /// Inverse requested for a matrix whose determinant is exactly zero.
    #[error("matrix is singular")]
    Singular,
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AlgebraError>;
