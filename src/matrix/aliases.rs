//! Pre-defined type aliases for common element types.

use crate::vector::Vector;

use super::{Matrix, SquareMatrix};

// ── Vector scalar aliases ───────────────────────────────────────────

/// Vector with `f32` components.
pub type Vectorf32 = Vector<f32>;
/// Vector with `f64` components.
pub type Vectorf64 = Vector<f64>;
/// Vector with `i32` components.
pub type Vectori32 = Vector<i32>;
/// Vector with `i64` components.
pub type Vectori64 = Vector<i64>;

// ── Matrix scalar aliases ───────────────────────────────────────────

/// Matrix with `f32` elements.
pub type Matrixf32 = Matrix<f32>;
/// Matrix with `f64` elements.
pub type Matrixf64 = Matrix<f64>;
/// Matrix with `i32` elements.
pub type Matrixi32 = Matrix<i32>;
/// Matrix with `i64` elements.
pub type Matrixi64 = Matrix<i64>;

// ── SquareMatrix scalar aliases ─────────────────────────────────────

/// Square matrix with `f32` elements.
pub type SquareMatrixf32 = SquareMatrix<f32>;
/// Square matrix with `f64` elements.
pub type SquareMatrixf64 = SquareMatrix<f64>;
/// Square matrix with `i32` elements.
pub type SquareMatrixi32 = SquareMatrix<i32>;
/// Square matrix with `i64` elements.
pub type SquareMatrixi64 = SquareMatrix<i64>;
