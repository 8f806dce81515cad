//! redeem-matrix: dense `f64` matrices for small numerical kernels.
//!
//! This crate provides a row-major [`Matrix`] with construction helpers,
//! allocating and in-place arithmetic, row/column transforms, determinants by
//! cofactor expansion, and the 1/infinity norms. It is a building block for
//! small-to-medium problems, not a tuned linear-algebra backend: the
//! determinant is exponential in the matrix order.
//!
//! Fallible operations return [`MatrixError`]. A few degenerate inputs are
//! deliberately not errors: swapping with an out-of-range index is a no-op,
//! and [`Matrix::minor`] / [`Matrix::determinant`] return `0.0` for shapes
//! they cannot handle.
pub mod arithmetic;
pub mod config;
pub mod determinant;
pub mod display;
pub mod error;
pub mod interop;
pub mod matrix;
pub mod norms;
pub mod structure;

pub use config::{NormKind, PrintOptions};
pub use error::{Axis, MatrixError, Result};
pub use matrix::Matrix;
