//! Matrix type for 2D numeric data.

use crate::error::{DensoError, Result};
use crate::primitives::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A dense matrix of `f64` values (row-major storage).
///
/// Both dimensions are fixed at construction and always positive. Whole-
/// structure operations return new matrices; only [`Matrix::set`] and
/// [`Matrix::set_submatrix`] mutate in place.
///
/// # Examples
///
/// ```
/// use denso::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
///     .expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates a zero-filled matrix with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 {
            return Err(DensoError::empty_input("matrix row count must be positive"));
        }
        if cols == 0 {
            return Err(DensoError::empty_input(
                "matrix column count must be positive",
            ));
        }
        Ok(Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        })
    }

    /// Creates a matrix from a flat row-major vector of data.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the data length
    /// doesn't equal `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(DensoError::empty_input("matrix dimensions must be positive"));
        }
        if data.len() != rows * cols {
            return Err(DensoError::dimension_mismatch(
                format!("{} elements ({rows}x{cols})", rows * cols),
                format!("{}", data.len()),
            ));
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix from a sequence of rows, validating rectangularity.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, the first row is empty, or
    /// any row has a different length than the first.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_rows = rows.len();
        if n_rows == 0 {
            return Err(DensoError::empty_input("matrix rows"));
        }
        let n_cols = rows[0].len();
        if n_cols == 0 {
            return Err(DensoError::empty_input("matrix columns"));
        }
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(DensoError::dimension_mismatch(
                    format!("row of length {n_cols}"),
                    format!("row {i} of length {}", row.len()),
                ));
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Creates the `n`-by-`n` identity matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is zero.
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::new(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    /// Internal constructor for callers that already uphold the shape
    /// invariants (positive dimensions, `data.len() == rows * cols`).
    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Gets the element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.bounds_check(row, col);
        self.data[row * self.cols + col]
    }

    /// Sets the element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.bounds_check(row, col);
        self.data[row * self.cols + col] = value;
    }

    fn bounds_check(&self, row: usize, col: usize) {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
    }

    /// Returns a copy of the given row as a Vector.
    ///
    /// # Errors
    ///
    /// Returns an error if `row` is out of range.
    pub fn row(&self, row: usize) -> Result<Vector> {
        if row >= self.rows {
            return Err(DensoError::index_out_of_bounds(row, self.rows));
        }
        let start = row * self.cols;
        Vector::from_slice(&self.data[start..start + self.cols])
    }

    /// Returns a copy of the given column as a Vector.
    ///
    /// # Errors
    ///
    /// Returns an error if `col` is out of range.
    pub fn column(&self, col: usize) -> Result<Vector> {
        if col >= self.cols {
            return Err(DensoError::index_out_of_bounds(col, self.cols));
        }
        let data: Vec<f64> = (0..self.rows)
            .map(|row| self.data[row * self.cols + col])
            .collect();
        Vector::from_vec(data)
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if the shapes differ.
    pub fn add(&self, other: &Matrix) -> Result<Self> {
        self.same_shape(other)?;
        Ok(Self::from_raw(
            self.rows,
            self.cols,
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a + b)
                .collect(),
        ))
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if the shapes differ.
    pub fn sub(&self, other: &Matrix) -> Result<Self> {
        self.same_shape(other)?;
        Ok(Self::from_raw(
            self.rows,
            self.cols,
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a - b)
                .collect(),
        ))
    }

    /// Standard matrix product.
    ///
    /// # Errors
    ///
    /// Returns an error if `self.n_cols() != other.n_rows()`.
    pub fn matmul(&self, other: &Matrix) -> Result<Self> {
        if self.cols != other.rows {
            return Err(DensoError::dimension_mismatch(
                format!("{} rows", self.cols),
                format!("{}x{}", other.rows, other.cols),
            ));
        }
        let mut data = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self.data[i * self.cols + k];
                for j in 0..other.cols {
                    data[i * other.cols + j] += a * other.data[k * other.cols + j];
                }
            }
        }
        Ok(Self::from_raw(self.rows, other.cols, data))
    }

    /// Returns a new matrix with swapped dimensions.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self::from_raw(self.cols, self.rows, data)
    }

    /// Sum over all elementwise products of two same-shaped matrices
    /// (a Frobenius-style inner product). This is deliberately not a
    /// matrix-multiplication dot product.
    ///
    /// # Errors
    ///
    /// Returns an error if the shapes differ.
    pub fn dot(&self, other: &Matrix) -> Result<f64> {
        self.same_shape(other)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Writes `sub` into `self` with its top-left corner at (row, col).
    ///
    /// # Errors
    ///
    /// Returns an error if the block does not fit within bounds.
    pub fn set_submatrix(&mut self, row: usize, col: usize, sub: &Matrix) -> Result<()> {
        if row + sub.rows > self.rows || col + sub.cols > self.cols {
            return Err(DensoError::dimension_mismatch(
                format!("block within {}x{}", self.rows, self.cols),
                format!(
                    "{}x{} block at ({row}, {col})",
                    sub.rows, sub.cols
                ),
            ));
        }
        for i in 0..sub.rows {
            for j in 0..sub.cols {
                self.data[(row + i) * self.cols + (col + j)] = sub.data[i * sub.cols + j];
            }
        }
        Ok(())
    }

    /// Divides every element by a scalar.
    ///
    /// # Errors
    ///
    /// Returns an error if `scalar` is zero.
    pub fn div_scalar(&self, scalar: f64) -> Result<Self> {
        if scalar == 0.0 {
            return Err(DensoError::DivideByZero {
                context: "Matrix::div_scalar".to_string(),
            });
        }
        Ok(self.map(|x| x / scalar))
    }

    fn same_shape(&self, other: &Matrix) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(DensoError::dimension_mismatch(
                format!("{}x{}", self.rows, self.cols),
                format!("{}x{}", other.rows, other.cols),
            ));
        }
        Ok(())
    }

    fn map(&self, op: impl Fn(f64) -> f64) -> Self {
        Self::from_raw(
            self.rows,
            self.cols,
            self.data.iter().map(|&x| op(x)).collect(),
        )
    }
}

impl Add<f64> for &Matrix {
    type Output = Matrix;

    fn add(self, scalar: f64) -> Matrix {
        self.map(|x| x + scalar)
    }
}

impl Add<&Matrix> for f64 {
    type Output = Matrix;

    fn add(self, matrix: &Matrix) -> Matrix {
        matrix + self
    }
}

impl Sub<f64> for &Matrix {
    type Output = Matrix;

    fn sub(self, scalar: f64) -> Matrix {
        self.map(|x| x - scalar)
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        self.map(|x| x * scalar)
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, matrix: &Matrix) -> Matrix {
        matrix * self
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod contract;
