//! Principal Component Analysis on top of the eigensolver.

use crate::decomposition::{DecompositionMethod, EigenvalueDecomposition};
use crate::error::{DensoError, Result};
use crate::primitives::Matrix;
use crate::traits::Transformer;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Principal Component Analysis (PCA) for dimensionality reduction.
///
/// Fitting centers the data, scales it by `1/sqrt(n_rows - 1)`, builds the
/// covariance matrix `X^T X`, and keeps the eigenvectors of the largest
/// eigenvalues (by magnitude) as the projection matrix. Transforming
/// multiplies incoming data by that projection.
///
/// Fitting expects at least two rows: the variance scale divides by
/// `n_rows - 1`, so a single-row input yields a NaN projection rather
/// than an error.
///
/// # Examples
///
/// ```
/// use denso::decomposition::PCA;
/// use denso::primitives::Matrix;
/// use denso::traits::Transformer;
///
/// let data = Matrix::from_vec(4, 3, vec![
///     1.0, 2.0, 3.0,
///     4.0, 5.0, 6.0,
///     7.0, 8.0, 9.0,
///     10.0, 11.0, 12.0,
/// ]).expect("valid matrix dimensions");
///
/// let mut pca = PCA::new(2).expect("positive component count");
/// let transformed = pca.fit_transform(&data).expect("fit_transform succeeds");
/// assert_eq!(transformed.shape(), (4, 2));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PCA {
    /// Number of components to keep.
    n_components: usize,
    /// Projection matrix (n_features x n_components), set once by `fit`.
    projection: Option<Matrix>,
    /// Eigenvalues of the retained components, largest magnitude first.
    explained_variance: Option<Vec<f64>>,
    /// Fraction of total variance captured by each retained component.
    explained_variance_ratio: Option<Vec<f64>>,
}

impl PCA {
    /// Creates a new PCA transformer keeping `n_components` components.
    ///
    /// # Errors
    ///
    /// Returns an error if `n_components` is zero.
    pub fn new(n_components: usize) -> Result<Self> {
        if n_components == 0 {
            return Err(DensoError::InvalidHyperparameter {
                param: "n_components".to_string(),
                value: "0".to_string(),
                constraint: ">0".to_string(),
            });
        }
        Ok(Self {
            n_components,
            projection: None,
            explained_variance: None,
            explained_variance_ratio: None,
        })
    }

    /// Returns the number of components this transformer keeps.
    #[must_use]
    pub fn n_components(&self) -> usize {
        self.n_components
    }

    /// Returns the fitted projection matrix (n_features x n_components).
    #[must_use]
    pub fn components(&self) -> Option<&Matrix> {
        self.projection.as_ref()
    }

    /// Returns the variance explained by each retained component.
    #[must_use]
    pub fn explained_variance(&self) -> Option<&[f64]> {
        self.explained_variance.as_deref()
    }

    /// Returns the ratio of total variance explained by each retained
    /// component.
    #[must_use]
    pub fn explained_variance_ratio(&self) -> Option<&[f64]> {
        self.explained_variance_ratio.as_deref()
    }
}

impl Transformer for PCA {
    fn fit(&mut self, x: &Matrix) -> Result<()> {
        let (n_samples, n_features) = x.shape();

        if self.n_components > n_features {
            return Err(DensoError::InvalidHyperparameter {
                param: "n_components".to_string(),
                value: self.n_components.to_string(),
                constraint: format!("<= {n_features} (number of columns)"),
            });
        }

        // Per-column means.
        let mut mean = vec![0.0; n_features];
        for j in 0..n_features {
            let mut sum = 0.0;
            for i in 0..n_samples {
                sum += x.get(i, j);
            }
            mean[j] = sum / n_samples as f64;
        }

        // Center, then apply the Bessel correction up front so the plain
        // X^T X below is already the covariance matrix.
        let scale = 1.0 / ((n_samples as f64) - 1.0).sqrt();
        let mut centered = Vec::with_capacity(n_samples * n_features);
        for i in 0..n_samples {
            for j in 0..n_features {
                centered.push((x.get(i, j) - mean[j]) * scale);
            }
        }
        let centered = Matrix::from_vec(n_samples, n_features, centered)?;
        let covariance = centered.transpose().matmul(&centered)?;

        let eigen = EigenvalueDecomposition::new(&covariance, DecompositionMethod::Qr)?;
        let eigenvalues = eigen.eigenvalues();
        let eigenvectors = eigen.eigenvectors();

        // Sort eigenpairs by descending eigenvalue magnitude.
        let mut order: Vec<usize> = (0..n_features).collect();
        order.sort_by(|&a, &b| {
            eigenvalues
                .get(b)
                .abs()
                .partial_cmp(&eigenvalues.get(a).abs())
                .unwrap_or(Ordering::Equal)
        });

        let mut projection = Matrix::new(n_features, self.n_components)?;
        let mut explained_variance = vec![0.0; self.n_components];
        for (j, &idx) in order.iter().take(self.n_components).enumerate() {
            explained_variance[j] = eigenvalues.get(idx);
            for i in 0..n_features {
                projection.set(i, j, eigenvectors.get(i, idx));
            }
        }

        let total_variance: f64 = (0..n_features).map(|i| eigenvalues.get(i)).sum();
        let explained_variance_ratio: Vec<f64> = if total_variance != 0.0 {
            explained_variance
                .iter()
                .map(|&v| v / total_variance)
                .collect()
        } else {
            vec![0.0; self.n_components]
        };

        self.projection = Some(projection);
        self.explained_variance = Some(explained_variance);
        self.explained_variance_ratio = Some(explained_variance_ratio);

        Ok(())
    }

    fn transform(&self, x: &Matrix) -> Result<Matrix> {
        let projection = self.projection.as_ref().ok_or(DensoError::NotFitted {
            what: "PCA".to_string(),
        })?;

        if x.n_cols() != projection.n_rows() {
            return Err(DensoError::dimension_mismatch(
                format!("{} columns", projection.n_rows()),
                format!("{} columns", x.n_cols()),
            ));
        }

        x.matmul(projection)
    }
}

#[cfg(test)]
#[path = "pca_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_pca_contract.rs"]
mod contract;
