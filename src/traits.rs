//! Core traits for fitted data transforms.
//!
//! These traits define the API contracts for components that learn
//! parameters from data and then apply them.

use crate::error::Result;
use crate::primitives::Matrix;

/// Trait for data transformers that are fitted once and applied many times.
///
/// # Examples
///
/// ```
/// use denso::prelude::*;
///
/// let data = Matrix::from_vec(3, 2, vec![
///     1.0, 2.0,
///     2.0, 4.0,
///     3.0, 6.0,
/// ]).unwrap();
///
/// let mut pca = PCA::new(1).unwrap();
/// pca.fit(&data).unwrap();
/// let projected = pca.transform(&data).unwrap();
/// assert_eq!(projected.shape(), (3, 1));
/// ```
pub trait Transformer {
    /// Fits the transformer to data.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails.
    fn fit(&mut self, x: &Matrix) -> Result<()>;

    /// Transforms data using fitted parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the transformer is not fitted or the input
    /// shape does not match the fitted parameters.
    fn transform(&self, x: &Matrix) -> Result<Matrix>;

    /// Fits and transforms in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails.
    fn fit_transform(&mut self, x: &Matrix) -> Result<Matrix> {
        self.fit(x)?;
        self.transform(x)
    }
}
