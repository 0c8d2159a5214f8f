//! Core compute primitives (Vector, Matrix).
//!
//! These types own their backing storage exclusively and form the
//! foundation for the decomposition algorithms.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
