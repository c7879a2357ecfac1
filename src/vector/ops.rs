use alloc::vec;
use core::ops::{Mul, Neg};

use crate::error::Result;
use crate::traits::Scalar;
use crate::verify;

use super::Vector;

// ── Element-wise arithmetic ─────────────────────────────────────────

impl<T: Scalar> Vector<T> {
    /// Component-wise negation.
    ///
    /// ```
    /// use colalg::Vector;
    /// let v = Vector::from_slice(&[1.0, -2.0]).unwrap();
    /// assert_eq!(v.invert().as_slice(), &[-1.0, 2.0]);
    /// ```
    pub fn invert(&self) -> Self {
        self.map(|x| -x)
    }

    /// Multiply every component by `scalar`.
    pub fn scale(&self, scalar: T) -> Self {
        self.map(|x| x * scalar)
    }

    /// Component-wise sum. Lengths must match.
    ///
    /// ```
    /// use colalg::Vector;
    /// let a = Vector::from_slice(&[1, 2]).unwrap();
    /// let b = Vector::from_slice(&[10, 20]).unwrap();
    /// assert_eq!(a.add(&b).unwrap().as_slice(), &[11, 22]);
    /// ```
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        verify::equal_lengths(self.as_slice(), rhs.as_slice())?;
        Ok(self.zip_with(rhs, |a, b| a + b))
    }

    /// Component-wise difference `self - rhs`. Lengths must match.
    pub fn subtract(&self, rhs: &Self) -> Result<Self> {
        verify::equal_lengths(self.as_slice(), rhs.as_slice())?;
        Ok(self.zip_with(rhs, |a, b| a - b))
    }

    /// Dot product. Lengths must match.
    ///
    /// ```
    /// use colalg::Vector;
    /// let a = Vector::from_slice(&[1.0, 2.0, 3.0]).unwrap();
    /// let b = Vector::from_slice(&[4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(a.dot(&b).unwrap(), 32.0);
    /// ```
    pub fn dot(&self, rhs: &Self) -> Result<T> {
        verify::equal_lengths(self.as_slice(), rhs.as_slice())?;
        let mut sum = T::zero();
        for (&a, &b) in self.iter().zip(rhs.iter()) {
            sum = sum + a * b;
        }
        Ok(sum)
    }

    /// Cross product of the first three components of each operand.
    ///
    /// Both operands need at least three components; anything past the
    /// third is ignored. The result always has three components.
    ///
    /// ```
    /// use colalg::Vector;
    /// let x = Vector::from_slice(&[1.0, 0.0, 0.0]).unwrap();
    /// let y = Vector::from_slice(&[0.0, 1.0, 0.0, 7.0]).unwrap();
    /// assert_eq!(x.cross(&y).unwrap().as_slice(), &[0.0, 0.0, 1.0]);
    /// ```
    pub fn cross(&self, rhs: &Self) -> Result<Self> {
        verify::min_length(self.as_slice(), 3)?;
        verify::min_length(rhs.as_slice(), 3)?;
        let (a, b) = (self.as_slice(), rhs.as_slice());
        Ok(Vector::from_vec_unchecked(vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }

    fn map(&self, f: impl Fn(T) -> T) -> Self {
        Vector::from_vec_unchecked(self.iter().map(|&x| f(x)).collect())
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Self {
        Vector::from_vec_unchecked(
            self.iter()
                .zip(rhs.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        )
    }
}

// ── Operators ───────────────────────────────────────────────────────

impl<T: Scalar> Neg for Vector<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.invert()
    }
}

impl<T: Scalar> Neg for &Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        self.invert()
    }
}

impl<T: Scalar> Mul<T> for Vector<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        self.scale(scalar)
    }
}

impl<T: Scalar> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, scalar: T) -> Vector<T> {
        self.scale(scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AlgebraError, Shape};

    fn v(data: &[f64]) -> Vector<f64> {
        Vector::from_slice(data).unwrap()
    }

    #[test]
    fn invert_and_neg() {
        let a = v(&[1.0, -2.0, 0.0]);
        assert_eq!(a.invert(), v(&[-1.0, 2.0, 0.0]));
        assert_eq!(-&a, a.invert());
        assert_eq!(-a.clone(), a.invert());
    }

    #[test]
    fn invert_signed_integers() {
        let a = Vector::from_slice(&[3_i8, -4, 0]).unwrap();
        assert_eq!(a.invert().as_slice(), &[-3, 4, 0]);
        assert_eq!((-&a).as_slice(), &[-3, 4, 0]);
    }

    #[test]
    fn scale_and_mul() {
        let a = v(&[1.0, 2.0]);
        assert_eq!(a.scale(3.0), v(&[3.0, 6.0]));
        assert_eq!(&a * 0.5, v(&[0.5, 1.0]));
        assert_eq!(a * -1.0, v(&[-1.0, -2.0]));
    }

    #[test]
    fn add_subtract() {
        let a = v(&[1.0, 2.0, 3.0]);
        let b = v(&[0.5, 0.5, 0.5]);
        assert_eq!(a.add(&b).unwrap(), v(&[1.5, 2.5, 3.5]));
        assert_eq!(a.subtract(&b).unwrap(), v(&[0.5, 1.5, 2.5]));
    }

    #[test]
    fn add_inverse_is_zero() {
        let a = v(&[1.25, -7.0, 3.5]);
        assert_eq!(a.add(&a.invert()).unwrap(), Vector::zeros(3).unwrap());
    }

    #[test]
    fn mismatched_lengths_rejected() {
        let a = v(&[1.0, 2.0]);
        let b = v(&[1.0, 2.0, 3.0]);
        let expected = AlgebraError::DimensionMismatch {
            expected: Shape::column(2),
            got: Shape::column(3),
        };
        assert_eq!(a.add(&b).unwrap_err(), expected);
        assert_eq!(a.subtract(&b).unwrap_err(), expected);
        assert_eq!(a.dot(&b).unwrap_err(), expected);
    }

    #[test]
    fn dot_product() {
        let a = v(&[1.0, 2.0, 3.0]);
        let b = v(&[-5.5, 10.0, -23.494]);
        assert!((a.dot(&b).unwrap() - (-55.982)).abs() < 1e-3);
    }

    #[test]
    fn dot_integer() {
        let a = Vector::from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(a.dot(&a), Ok(14));
    }

    #[test]
    fn cross_product() {
        let a = v(&[1.0, 2.0, 3.0]);
        let b = v(&[10.0, 10.0, 10.0]);
        assert_eq!(a.cross(&b).unwrap(), v(&[-10.0, 20.0, -10.0]));
    }

    #[test]
    fn cross_anticommutes() {
        let a = v(&[1.0, -4.0, 2.0]);
        let b = v(&[3.0, 0.5, -1.0]);
        assert_eq!(a.cross(&b).unwrap(), b.cross(&a).unwrap().invert());
    }

    #[test]
    fn cross_uses_first_three_components() {
        let a = v(&[1.0, 2.0, 3.0, 100.0]);
        let b = v(&[10.0, 10.0, 10.0, -100.0, 5.0]);
        let c = a.cross(&b).unwrap();
        assert_eq!(c.len(), 3);
        assert_eq!(c, v(&[-10.0, 20.0, -10.0]));
    }

    #[test]
    fn cross_requires_three_components() {
        let short = v(&[1.0, 2.0]);
        let long = v(&[1.0, 2.0, 3.0]);
        assert_eq!(
            short.cross(&long).unwrap_err(),
            AlgebraError::BelowMinimumDimension {
                required: Shape::column(3),
                got: Shape::column(2)
            }
        );
        assert!(long.cross(&short).is_err());
    }
}
