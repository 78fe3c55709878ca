//! Report Data Structures

use bundlebench_core::Producer;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete size-comparison report for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run metadata.
    pub meta: ReportMeta,
    /// One row per variant, in matrix order.
    pub rows: Vec<VariantRow>,
    /// Per-variant-kind comparison groups.
    pub groups: Vec<GroupSummary>,
    /// Aggregate counts.
    pub summary: ReportSummary,
}

/// Report metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Harness version.
    pub version: String,
    /// UTC time of report generation.
    pub timestamp: DateTime<Utc>,
    /// Git commit of the benchmarked application, if available.
    pub git_commit: Option<String>,
    /// Git branch of the benchmarked application, if available.
    pub git_branch: Option<String>,
    /// Target platform passed to the bundlers.
    pub platform: String,
    /// Entry file passed to the bundlers.
    pub entry_file: String,
    /// Producer all diffs are computed against.
    pub baseline: Producer,
}

/// One row in the per-variant table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantRow {
    /// Variant id, e.g. `repack-prod-min-hbc`.
    pub id: String,
    /// Producer that built this variant.
    pub producer: Producer,
    /// Variant kind label, e.g. "Production Minified (HBC)".
    pub kind: String,
    /// Measured bundle size in bytes.
    pub size_bytes: u64,
    /// Delta vs the baseline producer in this variant's group; exactly zero
    /// for the baseline itself.
    pub diff_percent: f64,
    /// Formatted delta, e.g. `+20.00%`.
    pub diff: String,
    /// Whether this row is the group baseline.
    pub is_baseline: bool,
}

/// One entry in a group's narrative summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupEntry {
    /// Producer of this entry.
    pub producer: Producer,
    /// Measured size in bytes.
    pub size_bytes: u64,
    /// Delta vs the group baseline.
    pub diff_percent: f64,
    /// Formatted delta.
    pub diff: String,
}

/// Comparison summary for one {mode, minified, bytecode} group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Variant kind label shared by the group.
    pub kind: String,
    /// The baseline producer's entry (diff is zero).
    pub baseline: GroupEntry,
    /// Challenger entries in matrix order.
    pub challengers: Vec<GroupEntry>,
}

/// Aggregate report counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Number of variants built and measured.
    pub total_variants: usize,
    /// Number of comparison groups.
    pub groups: usize,
    /// Wall-clock duration of the whole run in milliseconds.
    pub total_duration_ms: f64,
}

/// Format a byte size as megabytes with two decimals, e.g. `2.29`.
///
/// Presentation-only; all diff math uses raw byte sizes.
pub fn format_size_mb(size_bytes: u64) -> String {
    format!("{:.2}", size_bytes as f64 / (1024.0 * 1024.0))
}
