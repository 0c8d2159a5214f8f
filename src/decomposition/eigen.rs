//! Eigenvalue decomposition of square matrices.
//!
//! Two iterative solvers are available: QR iteration with Householder
//! reflections (the default) and the classical Jacobi rotation method.
//! Both run a fixed budget of 100 iterations; Jacobi additionally stops
//! early once the largest off-diagonal element is exactly zero.

use crate::error::{DensoError, Result};
use crate::primitives::{Matrix, Vector};
use serde::{Deserialize, Serialize};

/// Fixed iteration budget for both solvers. QR always runs the full
/// budget; Jacobi may stop early.
const MAX_ITERATIONS: usize = 100;

/// Algorithm selector for [`EigenvalueDecomposition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DecompositionMethod {
    /// QR iteration with Householder reflections.
    #[default]
    Qr,
    /// Jacobi plane rotations (best suited to symmetric matrices).
    Jacobi,
}

/// Eigenvalues and eigenvectors of a square matrix.
///
/// The decomposition runs to completion inside [`EigenvalueDecomposition::new`]
/// and the result is read-only afterward.
///
/// # Examples
///
/// ```
/// use denso::decomposition::{DecompositionMethod, EigenvalueDecomposition};
/// use denso::primitives::Matrix;
///
/// let a = Matrix::from_vec(2, 2, vec![2.0, 1.0, 1.0, 2.0]).expect("valid matrix");
/// let eig = EigenvalueDecomposition::new(&a, DecompositionMethod::Jacobi)
///     .expect("square input");
/// let mut values = vec![eig.eigenvalues().get(0), eig.eigenvalues().get(1)];
/// values.sort_by(|a, b| a.partial_cmp(b).expect("finite eigenvalues"));
/// assert!((values[0] - 1.0).abs() < 1e-6);
/// assert!((values[1] - 3.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EigenvalueDecomposition {
    eigenvalues: Vector,
    eigenvectors: Matrix,
}

impl EigenvalueDecomposition {
    /// Decomposes a square matrix with the selected method.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square, before any iteration
    /// runs. The QR method can also surface a divide-by-zero error when a
    /// trailing column of an intermediate factor is exactly zero.
    pub fn new(matrix: &Matrix, method: DecompositionMethod) -> Result<Self> {
        if matrix.n_rows() != matrix.n_cols() {
            return Err(DensoError::dimension_mismatch(
                "square matrix",
                format!("{}x{}", matrix.n_rows(), matrix.n_cols()),
            ));
        }
        match method {
            DecompositionMethod::Qr => Self::compute_qr(matrix),
            DecompositionMethod::Jacobi => Self::compute_jacobi(matrix),
        }
    }

    /// The eigenvalues, in the order produced by the solver.
    #[must_use]
    pub fn eigenvalues(&self) -> &Vector {
        &self.eigenvalues
    }

    /// The eigenvectors, one per column, matching the eigenvalue order.
    #[must_use]
    pub fn eigenvectors(&self) -> &Matrix {
        &self.eigenvectors
    }

    /// QR iteration: `A_{k+1} = R_k * Q_k`, accumulating `V = V * Q_k`.
    /// Eigenvalues are read off the final diagonal.
    fn compute_qr(a: &Matrix) -> Result<Self> {
        let n = a.n_rows();
        let mut ak = a.clone();
        let mut eigenvectors = Matrix::identity(n)?;

        for _ in 0..MAX_ITERATIONS {
            let (q, r) = qr_decomposition(&ak)?;
            ak = r.matmul(&q)?;
            eigenvectors = eigenvectors.matmul(&q)?;
        }

        Ok(Self {
            eigenvalues: diagonal(&ak)?,
            eigenvectors,
        })
    }

    /// Jacobi rotations: zero the largest off-diagonal element with a
    /// plane rotation until it is exactly zero or the budget runs out.
    fn compute_jacobi(a: &Matrix) -> Result<Self> {
        let n = a.n_rows();
        let mut ak = a.clone();
        let mut eigenvectors = Matrix::identity(n)?;

        for _ in 0..MAX_ITERATIONS {
            let Some((p, q)) = largest_off_diagonal(&ak) else {
                break;
            };
            if ak.get(p, q) == 0.0 {
                break;
            }

            let phi = 0.5 * (2.0 * ak.get(p, q)).atan2(ak.get(q, q) - ak.get(p, p));
            let mut rotation = Matrix::identity(n)?;
            rotation.set(p, p, phi.cos());
            rotation.set(q, q, phi.cos());
            rotation.set(p, q, phi.sin());
            rotation.set(q, p, -phi.sin());

            ak = rotation.transpose().matmul(&ak)?.matmul(&rotation)?;
            eigenvectors = eigenvectors.matmul(&rotation)?;
        }

        Ok(Self {
            eigenvalues: diagonal(&ak)?,
            eigenvectors,
        })
    }
}

/// Factors a square matrix into an orthogonal `Q` and upper-triangular `R`
/// using one Householder reflection per leading column.
///
/// # Errors
///
/// Returns an error if the matrix is not square, or if a trailing column
/// is exactly zero (the reflection normalization divides by `v . v`).
pub fn qr_decomposition(a: &Matrix) -> Result<(Matrix, Matrix)> {
    if a.n_rows() != a.n_cols() {
        return Err(DensoError::dimension_mismatch(
            "square matrix",
            format!("{}x{}", a.n_rows(), a.n_cols()),
        ));
    }

    let n = a.n_rows();
    let mut q = Matrix::identity(n)?;
    let mut r = a.clone();

    for k in 0..n.saturating_sub(1) {
        let x = r.column(k)?.subvector_from(k)?;
        let e = Vector::basis(n - k, 0)?;
        // Bias the reflection by the sign of the leading element so the
        // addition cannot cancel.
        let alpha = if x.get(0) < 0.0 { -x.norm() } else { x.norm() };
        let v = &x + &(alpha * &e);

        let scaled = v.outer_product(&v).div_scalar(v.dot(&v)?)?;
        let householder = Matrix::identity(n - k)?.sub(&(&scaled * 2.0))?;

        let mut qk = Matrix::identity(n)?;
        qk.set_submatrix(k, k, &householder)?;

        q = q.matmul(&qk)?;
        r = qk.matmul(&r)?;
    }

    Ok((q, r))
}

/// Indices `(p, q)` with `p < q` of the largest-magnitude element in the
/// strict upper triangle, or `None` for a 1x1 matrix.
fn largest_off_diagonal(a: &Matrix) -> Option<(usize, usize)> {
    let n = a.n_rows();
    if n < 2 {
        return None;
    }
    let mut best = (0, 1);
    let mut best_value = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            if a.get(i, j).abs() > best_value {
                best_value = a.get(i, j).abs();
                best = (i, j);
            }
        }
    }
    Some(best)
}

fn diagonal(a: &Matrix) -> Result<Vector> {
    let n = a.n_rows();
    let mut values = Vector::new(n)?;
    for i in 0..n {
        values.set(i, a.get(i, i));
    }
    Ok(values)
}

#[cfg(test)]
#[path = "eigen_tests.rs"]
mod tests;
