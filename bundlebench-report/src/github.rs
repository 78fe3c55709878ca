//! GitHub Actions Summary Output
//!
//! Markdown suitable for appending to `$GITHUB_STEP_SUMMARY`.

use crate::report::{format_size_mb, Report};

/// Generate a Markdown summary of the report.
pub fn generate_github_summary(report: &Report) -> String {
    let mut out = String::new();
    let baseline = report.meta.baseline;

    out.push_str("## Bundle Size Comparison\n\n");
    out.push_str(&format!(
        "Platform `{}`, entry `{}`, baseline **{}**.\n\n",
        report.meta.platform, report.meta.entry_file, baseline
    ));

    out.push_str(&format!(
        "| Bundle Type | Size (MB) | Diff vs {} |\n|---|---:|---:|\n",
        baseline
    ));
    for row in &report.rows {
        out.push_str(&format!(
            "| {} {} | {} | {} |\n",
            row.producer,
            row.kind,
            format_size_mb(row.size_bytes),
            row.diff
        ));
    }

    out.push_str("\n### Summary\n\n");
    for group in &report.groups {
        for challenger in &group.challengers {
            out.push_str(&format!(
                "- **{}**: {} is {} compared to {} ({} MB vs {} MB)\n",
                group.kind,
                challenger.producer,
                challenger.diff,
                baseline,
                format_size_mb(challenger.size_bytes),
                format_size_mb(group.baseline.size_bytes)
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{GroupEntry, GroupSummary, ReportMeta, ReportSummary, VariantRow};
    use bundlebench_core::Producer;
    use chrono::Utc;

    fn sample_report() -> Report {
        let meta = ReportMeta {
            version: "0.2.0".to_string(),
            timestamp: Utc::now(),
            git_commit: None,
            git_branch: None,
            platform: "ios".to_string(),
            entry_file: "index.js".to_string(),
            baseline: Producer::Metro,
        };
        let rows = vec![
            VariantRow {
                id: "metro-dev".to_string(),
                producer: Producer::Metro,
                kind: "Development".to_string(),
                size_bytes: 2_000_000,
                diff_percent: 0.0,
                diff: "0.00%".to_string(),
                is_baseline: true,
            },
            VariantRow {
                id: "repack-dev".to_string(),
                producer: Producer::Repack,
                kind: "Development".to_string(),
                size_bytes: 2_400_000,
                diff_percent: 20.0,
                diff: "+20.00%".to_string(),
                is_baseline: false,
            },
        ];
        let groups = vec![GroupSummary {
            kind: "Development".to_string(),
            baseline: GroupEntry {
                producer: Producer::Metro,
                size_bytes: 2_000_000,
                diff_percent: 0.0,
                diff: "0.00%".to_string(),
            },
            challengers: vec![GroupEntry {
                producer: Producer::Repack,
                size_bytes: 2_400_000,
                diff_percent: 20.0,
                diff: "+20.00%".to_string(),
            }],
        }];
        Report {
            meta,
            rows,
            groups,
            summary: ReportSummary {
                total_variants: 2,
                groups: 1,
                total_duration_ms: 10.0,
            },
        }
    }

    #[test]
    fn summary_contains_table_and_narrative() {
        let md = generate_github_summary(&sample_report());
        assert!(md.contains("| Metro Development | 1.91 | 0.00% |"));
        assert!(md.contains("| Re.Pack Development | 2.29 | +20.00% |"));
        assert!(md.contains("Re.Pack is +20.00% compared to Metro"));
    }
}
