//! Matrix decomposition (eigenvalue decomposition, PCA).

mod eigen;
mod pca;

pub use eigen::{qr_decomposition, DecompositionMethod, EigenvalueDecomposition};
pub use pca::PCA;
