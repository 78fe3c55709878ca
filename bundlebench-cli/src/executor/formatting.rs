//! Output Formatting
//!
//! Human-readable terminal rendering of the size-comparison report:
//! - a table with one row per variant (size and diff vs baseline)
//! - a narrative per-group summary naming which challengers are larger or
//!   smaller than the baseline and by how much

use bundlebench_report::{format_size_mb, Report};

/// Format a report for human-readable terminal display.
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();
    let baseline = report.meta.baseline;

    output.push('\n');
    output.push_str("Bundle Size Comparison\n");
    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "platform: {}  entry: {}  baseline: {}\n",
        report.meta.platform, report.meta.entry_file, baseline
    ));
    if let Some(commit) = &report.meta.git_commit {
        let branch = report.meta.git_branch.as_deref().unwrap_or("detached");
        output.push_str(&format!("app: {} @ {}\n", branch, &commit[..commit.len().min(12)]));
    }
    output.push('\n');

    // Variant table
    let labels: Vec<String> = report
        .rows
        .iter()
        .map(|row| format!("{} {}", row.producer, row.kind))
        .collect();
    let name_width = labels
        .iter()
        .map(|l| l.len())
        .max()
        .unwrap_or(20)
        .max("Bundle Type".len());
    let diff_header = format!("Diff vs {}", baseline);
    let diff_width = report
        .rows
        .iter()
        .map(|row| row.diff.len())
        .max()
        .unwrap_or(8)
        .max(diff_header.len());

    output.push_str(&format!(
        "  {:<name_width$}  {:>10}  {:>diff_width$}\n",
        "Bundle Type", "Size (MB)", diff_header
    ));
    output.push_str(&format!(
        "  {}\n",
        "-".repeat(name_width + diff_width + 14)
    ));
    for (row, label) in report.rows.iter().zip(&labels) {
        output.push_str(&format!(
            "  {:<name_width$}  {:>10}  {:>diff_width$}\n",
            label,
            format_size_mb(row.size_bytes),
            row.diff
        ));
    }

    // Narrative per-group summary
    output.push_str("\nSummary\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    for group in &report.groups {
        for challenger in &group.challengers {
            let trend = if challenger.diff.starts_with('+') {
                "📈"
            } else {
                "📉"
            };
            output.push_str(&format!(
                "{} {}: {} is {} compared to {} ({} MB vs {} MB)\n",
                trend,
                group.kind,
                challenger.producer,
                challenger.diff,
                baseline,
                format_size_mb(challenger.size_bytes),
                format_size_mb(group.baseline.size_bytes)
            ));
        }
    }

    output.push_str(&format!(
        "\n{} variants in {} groups, {:.2} ms total\n",
        report.summary.total_variants, report.summary.groups, report.summary.total_duration_ms
    ));

    output
}
