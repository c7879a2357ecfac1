use alloc::vec;
use alloc::vec::Vec;

use crate::error::Result;
use crate::traits::Scalar;
use crate::verify;

use super::Vector;

// ── Fixed-length conveniences ───────────────────────────────────────

impl<T: Scalar> Vector<T> {
    /// Take ownership of `data`, which must hold exactly `len` components.
    ///
    /// ```
    /// use colalg::Vector;
    /// assert!(Vector::with_length(vec![1.0, 2.0, 3.0], 3).is_ok());
    /// assert!(Vector::with_length(vec![1.0, 2.0], 3).is_err());
    /// ```
    pub fn with_length(data: Vec<T>, len: usize) -> Result<Self> {
        verify::exact_length(&data, len)?;
        Self::new(data)
    }

    /// First component. Always present.
    #[inline]
    pub fn x(&self) -> T {
        self[0]
    }

    /// Second component. Always present.
    #[inline]
    pub fn y(&self) -> T {
        self[1]
    }

    /// Third component, if the vector has one.
    pub fn z(&self) -> Result<T> {
        self.get(2)
    }

    /// Fourth component, if the vector has one.
    pub fn w(&self) -> Result<T> {
        self.get(3)
    }

    /// The first two components.
    pub fn xy(&self) -> Self {
        Vector::from_vec_unchecked(vec![self.x(), self.y()])
    }

    /// The first three components.
    ///
    /// ```
    /// use colalg::Vector;
    /// let p = Vector::from_slice(&[5.0, 0.0, 1.0, 1.0]).unwrap();
    /// assert_eq!(p.xyz().unwrap().as_slice(), &[5.0, 0.0, 1.0]);
    /// ```
    pub fn xyz(&self) -> Result<Self> {
        Ok(Vector::from_vec_unchecked(vec![self.x(), self.y(), self.z()?]))
    }

    /// Append one component, e.g. a homogeneous `w = 1` to a point.
    ///
    /// ```
    /// use colalg::Vector;
    /// let p = Vector::from_slice(&[2.0, 3.0]).unwrap().extend(1.0);
    /// assert_eq!(p.as_slice(), &[2.0, 3.0, 1.0]);
    /// ```
    pub fn extend(&self, value: T) -> Self {
        let mut data = self.to_array();
        data.push(value);
        Vector::from_vec_unchecked(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AlgebraError, Shape};

    #[test]
    fn with_length() {
        let v = Vector::with_length(vec![1, 2, 3, 4], 4).unwrap();
        assert_eq!(v.len(), 4);
        assert_eq!(
            Vector::with_length(vec![1, 2, 3], 4).unwrap_err(),
            AlgebraError::DimensionMismatch {
                expected: Shape::column(4),
                got: Shape::column(3)
            }
        );
    }

    #[test]
    fn with_length_still_enforces_floor() {
        assert!(matches!(
            Vector::with_length(vec![1.0], 1),
            Err(AlgebraError::BelowMinimumDimension { .. })
        ));
    }

    #[test]
    fn named_accessors() {
        let v = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(v.x(), 1.0);
        assert_eq!(v.y(), 2.0);
        assert_eq!(v.z(), Ok(3.0));
        assert_eq!(v.w(), Ok(4.0));

        let v2 = Vector::from_slice(&[1.0, 2.0]).unwrap();
        assert!(v2.z().is_err());
        assert!(v2.w().is_err());
    }

    #[test]
    fn projections() {
        let v = Vector::from_slice(&[1, 2, 3, 4]).unwrap();
        assert_eq!(v.xy().as_slice(), &[1, 2]);
        assert_eq!(v.xyz().unwrap().as_slice(), &[1, 2, 3]);
        assert!(v.xy().xyz().is_err());
    }

    #[test]
    fn extend() {
        let v = Vector::from_slice(&[1, 2]).unwrap();
        let e = v.extend(9);
        assert_eq!(e.as_slice(), &[1, 2, 9]);
        assert_eq!(v.len(), 2);
    }
}
