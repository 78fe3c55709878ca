#![warn(missing_docs)]
//! BundleBench Core - Variant Model
//!
//! This crate defines the data model shared by the whole harness:
//! - `Producer`: the bundler toolchains under comparison
//! - `BundleVariant`: one point in the build matrix (producer × mode ×
//!   minification × bytecode compilation)
//! - `variant_matrix`: the fixed, ordered comparison surface
//! - `BuildOutcome`: the measured size of one successfully built variant
//!
//! Everything here is plain process-local data, rebuilt from scratch on every
//! run. There is no cross-run state.

mod matrix;
mod outcome;
mod variant;

pub use matrix::{variant_matrix, MATRIX_SIZE};
pub use outcome::BuildOutcome;
pub use variant::{BuildMode, BundleVariant, Producer};
