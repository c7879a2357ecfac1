use crate::traits::FloatScalar;

use super::Vector;

impl<T: FloatScalar> Vector<T> {
    /// Euclidean length, `sqrt(sum(v_i^2))`.
    ///
    /// ```
    /// use colalg::Vector;
    /// let v = Vector::from_slice(&[3.0_f64, 4.0]).unwrap();
    /// assert_eq!(v.magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> T {
        let mut sum = T::zero();
        for &x in self.iter() {
            sum = sum + x * x;
        }
        sum.sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// A zero vector is not rejected: dividing by its zero magnitude leaves
    /// `NaN` components.
    ///
    /// ```
    /// use colalg::Vector;
    /// let u = Vector::from_slice(&[3.0_f64, 4.0]).unwrap().normalize();
    /// assert!((u.magnitude() - 1.0).abs() < 1e-12);
    /// assert!((u[0] - 0.6).abs() < 1e-12);
    /// ```
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        Vector::from_vec_unchecked(self.iter().map(|&x| x / mag).collect())
    }

    /// Equal lengths and every component within `epsilon` (inclusive).
    ///
    /// ```
    /// use colalg::Vector;
    /// let a = Vector::from_slice(&[1.0, 2.0]).unwrap();
    /// let b = Vector::from_slice(&[1.0005, 1.9995]).unwrap();
    /// assert!(a.approx_eq(&b, 1e-3));
    /// assert!(!a.approx_eq(&b, 1e-4));
    /// ```
    pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(&a, &b)| (a - b).abs() <= epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude() {
        let v = Vector::from_slice(&[1.0_f64, 2.0, 2.0]).unwrap();
        assert_eq!(v.magnitude(), 3.0);

        let z: Vector<f64> = Vector::zeros(5).unwrap();
        assert_eq!(z.magnitude(), 0.0);
    }

    #[test]
    fn normalize_unit_length() {
        let v = Vector::from_slice(&[1.0_f64, -7.0, 3.5, 0.25]).unwrap();
        let u = v.normalize();
        assert!((u.magnitude() - 1.0).abs() < 1e-12);
        // Direction preserved.
        assert!((u.dot(&v).unwrap() - v.magnitude()).abs() < 1e-9);
    }

    #[test]
    fn normalize_zero_vector_is_nan() {
        let z: Vector<f64> = Vector::zeros(3).unwrap();
        let n = z.normalize();
        assert_eq!(n.len(), 3);
        assert!(n.iter().all(|x| x.is_nan()));
    }

    #[test]
    fn normalize_f32() {
        let v = Vector::from_slice(&[0.0_f32, 2.0]).unwrap();
        assert_eq!(v.normalize().as_slice(), &[0.0, 1.0]);
    }

    #[test]
    fn approx_eq_bounds() {
        let a = Vector::from_slice(&[1.0, 2.0, 3.0]).unwrap();
        let b = Vector::from_slice(&[1.5, 2.0, 3.0]).unwrap();
        assert!(a.approx_eq(&b, 0.5));
        assert!(!a.approx_eq(&b, 0.49));
        assert!(a.approx_eq(&a, 0.0));
    }

    #[test]
    fn approx_eq_requires_equal_length() {
        let a = Vector::from_slice(&[1.0, 2.0]).unwrap();
        let b = Vector::from_slice(&[1.0, 2.0, 0.0]).unwrap();
        assert!(!a.approx_eq(&b, 10.0));
        assert!(!b.approx_eq(&a, 10.0));
    }
}
