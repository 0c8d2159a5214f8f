//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use denso::prelude::*;
//! ```

pub use crate::decomposition::{DecompositionMethod, EigenvalueDecomposition, PCA};
pub use crate::error::{DensoError, Result};
pub use crate::primitives::{Matrix, Vector};
pub use crate::traits::Transformer;
