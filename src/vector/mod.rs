mod fixed;
mod norm;
mod ops;

use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;

use crate::error::{Result, Shape};
use crate::traits::Scalar;
use crate::verify::{self, MIN_DIMENSION};

/// Immutable vector of at least two components.
///
/// Every operation returns a new vector. Construction copies or takes
/// ownership of its input, and [`to_array`](Vector::to_array) hands out a
/// fresh copy, so no two vectors ever share storage.
///
/// # Examples
///
/// ```
/// use colalg::Vector;
///
/// let v = Vector::from_slice(&[3.0_f64, 4.0]).unwrap();
/// assert_eq!(v[0], 3.0);
/// assert_eq!(v.dot(&v).unwrap(), 25.0);
/// assert_eq!(v.magnitude(), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vector<T> {
    data: Vec<T>,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Vector<T> {
    /// Take ownership of `data`.
    ///
    /// Fails with `BelowMinimumDimension` for fewer than two components.
    ///
    /// ```
    /// use colalg::Vector;
    /// assert!(Vector::new(vec![1.0, 2.0]).is_ok());
    /// assert!(Vector::new(vec![1.0]).is_err());
    /// ```
    pub fn new(data: Vec<T>) -> Result<Self> {
        verify::min_length(&data, MIN_DIMENSION)?;
        Ok(Self { data })
    }

    /// Copy components out of a slice.
    pub fn from_slice(data: &[T]) -> Result<Self> {
        verify::min_length(data, MIN_DIMENSION)?;
        Ok(Self {
            data: data.to_vec(),
        })
    }

    /// Collect components from an iterator.
    ///
    /// ```
    /// use colalg::Vector;
    /// let v = Vector::try_from_iter((1..=3).map(|i| i as f64)).unwrap();
    /// assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    /// ```
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self> {
        Self::new(iter.into_iter().collect())
    }

    /// Vector of `len` zeros.
    pub fn zeros(len: usize) -> Result<Self> {
        Self::new(alloc::vec![T::zero(); len])
    }

    /// Wrap a buffer whose length is already known to satisfy the floor.
    #[inline]
    pub(crate) fn from_vec_unchecked(data: Vec<T>) -> Self {
        debug_assert!(data.len() >= MIN_DIMENSION);
        Self { data }
    }
}

// ── Access ──────────────────────────────────────────────────────────

impl<T> Vector<T> {
    /// Number of components.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: a vector holds at least two components.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Shape as a single column, `len x 1`.
    #[inline]
    pub fn shape(&self) -> Shape {
        Shape::column(self.data.len())
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Copy> Vector<T> {
    /// Component `i`, or `IndexOutOfBounds`.
    ///
    /// ```
    /// use colalg::Vector;
    /// let v = Vector::from_slice(&[1, 2, 3]).unwrap();
    /// assert_eq!(v.get(2), Ok(3));
    /// assert!(v.get(3).is_err());
    /// ```
    pub fn get(&self, i: usize) -> Result<T> {
        verify::valid_index(self.len(), i)?;
        Ok(self.data[i])
    }

    /// Copy of the components.
    pub fn to_array(&self) -> Vec<T> {
        self.data.clone()
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl<T: Scalar> TryFrom<Vec<T>> for Vector<T> {
    type Error = crate::AlgebraError;

    fn try_from(data: Vec<T>) -> Result<Self> {
        Self::new(data)
    }
}

impl<T: Scalar> TryFrom<&[T]> for Vector<T> {
    type Error = crate::AlgebraError;

    fn try_from(data: &[T]) -> Result<Self> {
        Self::from_slice(data)
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(v: Vector<T>) -> Self {
        v.data
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

// ── Display ─────────────────────────────────────────────────────────

/// One bracketed component per line; honours `{:.N}` precision.
///
/// ```
/// use colalg::Vector;
/// let v = Vector::from_slice(&[1.5, -10.0]).unwrap();
/// assert_eq!(format!("{:.1}", v), "[  1.5]\n[-10.0]");
/// ```
impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::format::write_grid(f, self.data.len(), 1, |i, _| &self.data[i])
    }
}
