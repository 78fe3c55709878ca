//! Report Assembly
//!
//! Builds the final `Report` from measured outcomes and computed comparison
//! groups. Pure aggregation; all diff math happened in the comparison step.

use crate::config::BenchConfig;
use bundlebench_compare::{format_diff, ComparisonGroup, GroupKey};
use bundlebench_core::BuildOutcome;
use bundlebench_report::{GroupEntry, GroupSummary, Report, ReportSummary, VariantRow};

use super::metadata::build_report_meta;

/// Assemble the report: one row per variant in matrix order plus the
/// per-group narrative summaries.
pub fn build_report(
    config: &BenchConfig,
    outcomes: &[BuildOutcome],
    groups: &[ComparisonGroup],
    total_duration_ms: f64,
) -> Report {
    let baseline = config.app.baseline;

    let rows = outcomes
        .iter()
        .map(|outcome| {
            let is_baseline = outcome.variant.producer == baseline;
            let diff_percent = if is_baseline {
                0.0
            } else {
                groups
                    .iter()
                    .find(|g| g.key == GroupKey::of(&outcome.variant))
                    .and_then(|g| {
                        g.challengers
                            .iter()
                            .find(|c| c.outcome.variant == outcome.variant)
                    })
                    .map(|c| c.diff_percent)
                    .unwrap_or(0.0)
            };
            VariantRow {
                id: outcome.variant.id(),
                producer: outcome.variant.producer,
                kind: outcome.variant.kind_label().to_string(),
                size_bytes: outcome.size_bytes,
                diff_percent,
                diff: format_diff(diff_percent),
                is_baseline,
            }
        })
        .collect();

    let group_summaries: Vec<GroupSummary> = groups
        .iter()
        .map(|group| GroupSummary {
            kind: group.baseline.variant.kind_label().to_string(),
            baseline: GroupEntry {
                producer: group.baseline.variant.producer,
                size_bytes: group.baseline.size_bytes,
                diff_percent: 0.0,
                diff: format_diff(0.0),
            },
            challengers: group
                .challengers
                .iter()
                .map(|challenger| GroupEntry {
                    producer: challenger.outcome.variant.producer,
                    size_bytes: challenger.outcome.size_bytes,
                    diff_percent: challenger.diff_percent,
                    diff: format_diff(challenger.diff_percent),
                })
                .collect(),
        })
        .collect();

    let summary = ReportSummary {
        total_variants: outcomes.len(),
        groups: group_summaries.len(),
        total_duration_ms,
    };

    Report {
        meta: build_report_meta(config),
        rows,
        groups: group_summaries,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bundlebench_compare::compare_outcomes;
    use bundlebench_core::{variant_matrix, Producer};

    fn outcomes_with_sizes() -> Vec<BuildOutcome> {
        variant_matrix()
            .iter()
            .map(|v| BuildOutcome {
                variant: *v,
                size_bytes: match v.producer {
                    Producer::Metro => 2_000_000,
                    Producer::Repack => 2_400_000,
                    Producer::Expo => 1_800_000,
                },
            })
            .collect()
    }

    #[test]
    fn rows_follow_matrix_order_and_diffs() {
        let config = BenchConfig::default();
        let matrix = variant_matrix();
        let outcomes = outcomes_with_sizes();
        let groups = compare_outcomes(&matrix, &outcomes, Producer::Metro).unwrap();

        let report = build_report(&config, &outcomes, &groups, 12.5);
        assert_eq!(report.rows.len(), 15);
        assert_eq!(report.summary.total_variants, 15);
        assert_eq!(report.summary.groups, 5);
        assert_eq!(report.summary.total_duration_ms, 12.5);

        for (row, variant) in report.rows.iter().zip(matrix.iter()) {
            assert_eq!(row.id, variant.id());
            match row.producer {
                Producer::Metro => {
                    assert!(row.is_baseline);
                    assert_eq!(row.diff, "0.00%");
                }
                Producer::Repack => assert_eq!(row.diff, "+20.00%"),
                Producer::Expo => assert_eq!(row.diff, "-10.00%"),
            }
        }
    }

    #[test]
    fn baseline_group_entry_diff_is_exactly_zero() {
        let config = BenchConfig::default();
        let matrix = variant_matrix();
        let outcomes = outcomes_with_sizes();
        let groups = compare_outcomes(&matrix, &outcomes, Producer::Metro).unwrap();

        let report = build_report(&config, &outcomes, &groups, 0.0);
        for group in &report.groups {
            assert_eq!(group.baseline.diff_percent, 0.0);
            assert_eq!(group.baseline.diff, "0.00%");
            assert_eq!(group.challengers.len(), 2);
        }
    }
}
