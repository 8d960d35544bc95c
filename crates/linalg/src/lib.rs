//! Dense square linear systems, solved one visible step at a time.
//!
//! - [`read`] — parses free-form text into a matrix and a vector
//! - [`format`] — renders the augmented matrix `[A | b]` as aligned text
//! - [`gaussian`] — Gaussian elimination with partial pivoting and
//!   back-substitution, recording a snapshot after every operation
//!
//! # Features
//!
//! - `serde` — derives `Serialize` for the trace records so a front end can
//!   ship them as JSON.

pub mod format;
pub mod gaussian;
pub mod read;

pub use format::{DEFAULT_PRECISION, MAX_PRECISION, format_augmented};
pub use read::{FormatError, parse_augmented, parse_matrix, parse_vector};

/// A dense N×N matrix of `f64`.
pub type Matrix = ndarray::Array2<f64>;

/// A dense vector of `f64`, aligned by index with the rows of a [`Matrix`].
pub type Vector = ndarray::Array1<f64>;
