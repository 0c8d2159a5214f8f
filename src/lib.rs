//! Denso: a from-scratch dense linear-algebra kernel in pure Rust.
//!
//! Denso provides owned [`primitives::Vector`] and [`primitives::Matrix`]
//! types, iterative eigenvalue decomposition (QR iteration and Jacobi
//! rotations), and Principal Component Analysis built on top of them. All
//! computation is synchronous and in-memory; there is no I/O, no global
//! state, and no internal locking.
//!
//! # Quick Start
//!
//! ```
//! use denso::prelude::*;
//!
//! // Three samples of two perfectly correlated features (y = 2x).
//! let data = Matrix::from_vec(3, 2, vec![
//!     1.0, 2.0,
//!     2.0, 4.0,
//!     3.0, 6.0,
//! ]).unwrap();
//!
//! let mut pca = PCA::new(1).unwrap();
//! let projected = pca.fit_transform(&data).unwrap();
//! assert_eq!(projected.shape(), (3, 1));
//!
//! // One component captures all of the variance.
//! let ratio = pca.explained_variance_ratio().unwrap();
//! assert!(ratio[0] > 0.999);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`decomposition`]: Eigenvalue decomposition and PCA
//! - [`traits`]: The `Transformer` fit/transform contract
//! - [`error`]: Error type and `Result` alias
//! - [`prelude`]: Convenience re-exports

pub mod decomposition;
pub mod error;
pub mod prelude;
pub mod primitives;
pub mod traits;
