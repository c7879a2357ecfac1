//! # colalg
//!
//! Immutable, dimension-checked vectors and matrices of any size from two
//! up, stored column-major. Every operation validates its operands first and
//! returns a fresh value or an [`AlgebraError`]; nothing is mutated in place.
//! `no_std` compatible (needs `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use colalg::{SquareMatrix, Vector};
//!
//! // Raw input is column-major: each inner Vec is one column.
//! let a = SquareMatrix::new(vec![
//!     vec![2.0_f64, 1.0, 0.0],
//!     vec![0.0, 1.0, 0.0],
//!     vec![1.0, 0.0, 1.0],
//! ])
//! .unwrap();
//! assert_eq!(a.determinant(), 2.0);
//!
//! let x = Vector::from_slice(&[1.0, 2.0, 3.0]).unwrap();
//! let b = a.multiply_vector(&x).unwrap();
//! let back = a.inverse().unwrap().multiply_vector(&b).unwrap();
//! assert!(back.approx_eq(&x, 1e-12));
//! ```
//!
//! ## Modules
//!
//! - [`vector`]: [`Vector<T>`] with sum, difference, scale, dot and cross
//!   products, magnitude and normalization, plus `x`/`y`/`z`/`w` accessors.
//!
//! - [`matrix`]: [`Matrix<T>`] (`M x N`) with element-wise arithmetic,
//!   matrix-vector and matrix-matrix products, and [`SquareMatrix<T>`]
//!   (`N x N`) adding determinant, minors, cofactors and inverse by
//!   Laplace expansion. Type aliases such as [`Matrixf64`] live here.
//!
//! - [`verify`]: the invariant checks every constructor and operation runs
//!   before touching data. Public so callers can pre-validate raw input.
//!
//! - [`transform`]: [`TransformBuilder2`], [`TransformBuilder3`] and
//!   [`TransformBuilder4`] fold scale, rotate, translate and shear steps
//!   into one matrix, in call order. Requires the `transform` feature.
//!
//! - [`traits`]: element traits.
//!   - [`Scalar`]: every element type (`Copy + PartialEq + Debug + Num +
//!     Neg`), signed integers included.
//!   - [`FloatScalar`]: real floats (`Scalar + Float`), needed for
//!     magnitude, tolerance equality, inverse and transforms.
//!
//! ## Errors and logging
//!
//! All fallible operations return [`Result<T>`](Result) with an
//! [`AlgebraError`] naming the violated invariant and the offending
//! [`Shape`]. Diagnostics go through the `log` facade at `debug` and `trace`
//! level; install any logger to see them.
//!
//! ## Cargo features
//!
//! | Feature     | Default | Description |
//! |-------------|---------|-------------|
//! | `std`       | yes     | Hardware floats via std, `std::error::Error` for [`AlgebraError`] |
//! | `libm`      | baseline | Pure-Rust float fallback, always on for `no_std` targets |
//! | `transform` | yes     | Affine transform builders |
//! | `all`       | no      | All features: `std` + `transform` |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
mod format;
pub mod matrix;
pub mod traits;
#[cfg(feature = "transform")]
pub mod transform;
pub mod vector;
pub mod verify;

pub use error::{AlgebraError, Result, Shape};
pub use matrix::aliases::{
    Matrixf32, Matrixf64, Matrixi32, Matrixi64, SquareMatrixf32, SquareMatrixf64,
    SquareMatrixi32, SquareMatrixi64, Vectorf32, Vectorf64, Vectori32, Vectori64,
};
pub use matrix::{Matrix, SquareMatrix};
pub use traits::{FloatScalar, Scalar};
#[cfg(feature = "transform")]
pub use transform::{TransformBuilder2, TransformBuilder3, TransformBuilder4};
pub use vector::Vector;
