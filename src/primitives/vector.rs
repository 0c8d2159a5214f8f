//! Vector type for 1D numeric data.

use crate::error::{DensoError, Result};
use crate::primitives::Matrix;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

/// A dense vector of `f64` values.
///
/// The length is fixed at construction and always positive. Elements are
/// mutable through [`Vector::set`] or indexed assignment; every operation
/// that produces a new shape returns a new `Vector`.
///
/// # Examples
///
/// ```
/// use denso::primitives::Vector;
///
/// let v = Vector::from_slice(&[3.0, 4.0]).expect("non-empty data");
/// assert!((v.norm() - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// Creates a zero-initialized vector of the given length.
    ///
    /// # Errors
    ///
    /// Returns an error if `len` is zero.
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(DensoError::empty_input("vector length must be positive"));
        }
        Ok(Self {
            data: vec![0.0; len],
        })
    }

    /// Creates a vector that takes ownership of existing data.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` is empty.
    pub fn from_vec(data: Vec<f64>) -> Result<Self> {
        if data.is_empty() {
            return Err(DensoError::empty_input("vector data"));
        }
        Ok(Self { data })
    }

    /// Creates a vector by copying a slice.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` is empty.
    pub fn from_slice(data: &[f64]) -> Result<Self> {
        Self::from_vec(data.to_vec())
    }

    /// Returns the standard basis vector of the given size with a 1 at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero or `index >= size`.
    pub fn basis(size: usize, index: usize) -> Result<Self> {
        if size == 0 {
            return Err(DensoError::empty_input("basis vector size"));
        }
        if index >= size {
            return Err(DensoError::index_out_of_bounds(index, size));
        }
        let mut v = Self::new(size)?;
        v.data[index] = 1.0;
        Ok(v)
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: the length invariant forbids empty vectors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Gets the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> f64 {
        self.data[index]
    }

    /// Sets the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, value: f64) {
        self.data[index] = value;
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.data.iter()
    }

    /// Copies a contiguous range of `len` elements starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is empty or exceeds the vector bounds.
    pub fn subvector(&self, start: usize, len: usize) -> Result<Self> {
        if len == 0 {
            return Err(DensoError::empty_input("subvector length"));
        }
        let end = start
            .checked_add(len)
            .ok_or_else(|| DensoError::index_out_of_bounds(usize::MAX, self.len()))?;
        if end > self.len() {
            return Err(DensoError::index_out_of_bounds(end - 1, self.len()));
        }
        Self::from_slice(&self.data[start..end])
    }

    /// Copies the range from `start` to the end of the vector.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is out of bounds.
    pub fn subvector_from(&self, start: usize) -> Result<Self> {
        if start >= self.len() {
            return Err(DensoError::index_out_of_bounds(start, self.len()));
        }
        self.subvector(start, self.len() - start)
    }

    /// Euclidean norm, `sqrt(sum(x_i^2))`.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// Sum of all elements.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Arithmetic mean of the elements.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.sum() / self.len() as f64
    }

    /// Dot product with another vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths differ.
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        if self.len() != other.len() {
            return Err(DensoError::dimension_mismatch(
                format!("vector of length {}", self.len()),
                format!("length {}", other.len()),
            ));
        }
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Outer product: a `(self.len, other.len)` matrix with entry
    /// `(i, j) = self[i] * other[j]`.
    #[must_use]
    pub fn outer_product(&self, other: &Vector) -> Matrix {
        let rows = self.len();
        let cols = other.len();
        let mut data = Vec::with_capacity(rows * cols);
        for &a in &self.data {
            for &b in &other.data {
                data.push(a * b);
            }
        }
        Matrix::from_raw(rows, cols, data)
    }

    /// Divides every element by a scalar.
    ///
    /// # Errors
    ///
    /// Returns an error if `scalar` is zero.
    pub fn div_scalar(&self, scalar: f64) -> Result<Self> {
        if scalar == 0.0 {
            return Err(DensoError::DivideByZero {
                context: "Vector::div_scalar".to_string(),
            });
        }
        Ok(Self {
            data: self.data.iter().map(|x| x / scalar).collect(),
        })
    }

    /// True when every component of `self` is strictly less than the
    /// matching component of `other`.
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths differ.
    pub fn lt(&self, other: &Vector) -> Result<bool> {
        if self.len() != other.len() {
            return Err(DensoError::dimension_mismatch(
                format!("vector of length {}", self.len()),
                format!("length {}", other.len()),
            ));
        }
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a < b))
    }

    /// True when every component of `self` is strictly greater than the
    /// matching component of `other`.
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths differ.
    pub fn gt(&self, other: &Vector) -> Result<bool> {
        other.lt(self)
    }

    /// True when every component is strictly less than `scalar`.
    #[must_use]
    pub fn lt_scalar(&self, scalar: f64) -> bool {
        self.data.iter().all(|&x| x < scalar)
    }

    /// True when every component is strictly greater than `scalar`.
    #[must_use]
    pub fn gt_scalar(&self, scalar: f64) -> bool {
        self.data.iter().all(|&x| x > scalar)
    }

    fn zip_map(&self, other: &Vector, op: impl Fn(f64, f64) -> f64) -> Vector {
        assert_eq!(
            self.len(),
            other.len(),
            "vector lengths differ: {} vs {}",
            self.len(),
            other.len()
        );
        Vector {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| op(a, b))
                .collect(),
        }
    }

    fn map(&self, op: impl Fn(f64) -> f64) -> Vector {
        Vector {
            data: self.data.iter().map(|&x| op(x)).collect(),
        }
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.data[index]
    }
}

/// Elementwise addition.
///
/// # Panics
///
/// Panics if the lengths differ.
impl Add<&Vector> for &Vector {
    type Output = Vector;

    fn add(self, other: &Vector) -> Vector {
        self.zip_map(other, |a, b| a + b)
    }
}

/// Elementwise subtraction.
///
/// # Panics
///
/// Panics if the lengths differ.
impl Sub<&Vector> for &Vector {
    type Output = Vector;

    fn sub(self, other: &Vector) -> Vector {
        self.zip_map(other, |a, b| a - b)
    }
}

impl Add<f64> for &Vector {
    type Output = Vector;

    fn add(self, scalar: f64) -> Vector {
        self.map(|x| x + scalar)
    }
}

impl Add<&Vector> for f64 {
    type Output = Vector;

    fn add(self, vector: &Vector) -> Vector {
        vector + self
    }
}

impl Sub<f64> for &Vector {
    type Output = Vector;

    fn sub(self, scalar: f64) -> Vector {
        self.map(|x| x - scalar)
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        self.map(|x| x * scalar)
    }
}

impl Mul<&Vector> for f64 {
    type Output = Vector;

    fn mul(self, vector: &Vector) -> Vector {
        vector * self
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.map(|x| -x)
    }
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_vector_contract.rs"]
mod contract;
