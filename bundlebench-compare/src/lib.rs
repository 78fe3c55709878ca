#![warn(missing_docs)]
//! BundleBench Compare - Baseline-Relative Size Comparison
//!
//! Groups build outcomes that share {mode, minified, bytecode} across
//! producers and computes percentage size deltas against the baseline
//! producer's artifact in each group.
//!
//! The comparison is strictly baseline-relative and asymmetric by design:
//! `diff_percent(b, c) = (c - b) / b * 100`.

mod comparison;

pub use comparison::{
    compare_outcomes, diff_percent, format_diff, ChallengerDiff, ComparisonError, ComparisonGroup,
    GroupKey,
};
