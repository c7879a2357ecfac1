use core::fmt::Debug;
use core::ops::Neg;
use num_traits::{Float, Num};

/// Trait for types that can be used as vector and matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and the signed integers, so the exact operations
/// (sums, products, cofactor determinants) work over integers too.
/// Unsigned integers are excluded: negation and cofactor signs need `Neg`.
///
/// ```compile_fail
/// fn element<T: colalg::Scalar>() {}
/// element::<u8>();
/// ```
pub trait Scalar: Copy + PartialEq + Debug + Num + Neg<Output = Self> {}

impl<T: Copy + PartialEq + Debug + Num + Neg<Output = T>> Scalar for T {}

/// Trait for floating-point elements.
///
/// Required by operations that need `sqrt`, `sin`, `abs` or exact division:
/// magnitude, normalization, tolerance equality, inverse and the transform
/// builders.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// Sign of the cofactor at `(row, col)`: `+1` on even parity, `-1` on odd.
#[inline]
pub(crate) fn checkerboard<T: Scalar>(row: usize, col: usize, value: T) -> T {
    if (row + col) % 2 == 0 {
        value
    } else {
        -value
    }
}
