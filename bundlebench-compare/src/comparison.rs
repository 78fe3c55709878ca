//! Comparison grouping and diff math.

use bundlebench_core::{BuildMode, BuildOutcome, BundleVariant, Producer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while assembling the comparison.
///
/// Every variant here is fatal: a benchmark run with a missing or broken leg
/// produces a misleading comparison, so no report is emitted.
#[derive(Debug, Error)]
pub enum ComparisonError {
    /// The baseline artifact measured zero bytes; the percentage division is
    /// undefined and a zero-byte bundle indicates a broken build.
    #[error("Baseline artifact {variant} is zero bytes; refusing to compare")]
    ZeroBaseline {
        /// Id of the zero-sized baseline variant.
        variant: String,
    },

    /// No outcome was recorded for an expected variant.
    #[error("No build outcome recorded for variant {variant}")]
    MissingOutcome {
        /// Id of the missing variant.
        variant: String,
    },
}

/// The fields shared by all members of one comparison group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupKey {
    /// Development or production.
    pub mode: BuildMode,
    /// Minification flag.
    pub minified: bool,
    /// Bytecode compilation flag.
    pub bytecode: bool,
}

impl GroupKey {
    /// Key for a variant; producer is deliberately excluded.
    pub fn of(variant: &BundleVariant) -> Self {
        Self {
            mode: variant.mode,
            minified: variant.minified,
            bytecode: variant.bytecode,
        }
    }
}

/// A challenger outcome with its computed delta against the group baseline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChallengerDiff {
    /// The challenger's outcome.
    pub outcome: BuildOutcome,
    /// `(challenger - baseline) / baseline * 100`, from raw byte sizes.
    pub diff_percent: f64,
}

/// One {mode, minified, bytecode} group across all producers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonGroup {
    /// The shared variant-kind key.
    pub key: GroupKey,
    /// The baseline producer's outcome. Its diff is exactly zero by
    /// definition.
    pub baseline: BuildOutcome,
    /// Non-baseline outcomes in matrix order.
    pub challengers: Vec<ChallengerDiff>,
}

/// Percentage size delta of `challenger` relative to `baseline`.
pub fn diff_percent(baseline_bytes: u64, challenger_bytes: u64) -> f64 {
    (challenger_bytes as f64 - baseline_bytes as f64) / baseline_bytes as f64 * 100.0
}

/// Format a diff with an explicit `+` for increases and two decimals.
///
/// Exactly zero renders without a sign (`0.00%`); negative values carry the
/// number's own minus sign.
pub fn format_diff(diff: f64) -> String {
    if diff > 0.0 {
        format!("+{:.2}%", diff)
    } else {
        format!("{:.2}%", diff)
    }
}

/// Group the complete set of outcomes for `matrix` and compute diffs against
/// `baseline` within each group.
///
/// Groups are returned in the order their key first appears in the matrix.
/// Any expected variant without an outcome, and any zero-byte baseline
/// artifact, aborts the comparison.
pub fn compare_outcomes(
    matrix: &[BundleVariant],
    outcomes: &[BuildOutcome],
    baseline: Producer,
) -> Result<Vec<ComparisonGroup>, ComparisonError> {
    let outcome_for = |variant: &BundleVariant| -> Result<BuildOutcome, ComparisonError> {
        outcomes
            .iter()
            .find(|o| o.variant == *variant)
            .copied()
            .ok_or_else(|| ComparisonError::MissingOutcome {
                variant: variant.id(),
            })
    };

    let mut keys: Vec<GroupKey> = Vec::new();
    for variant in matrix {
        let key = GroupKey::of(variant);
        if !keys.contains(&key) {
            keys.push(key);
        }
    }

    let mut groups = Vec::with_capacity(keys.len());
    for key in keys {
        let members: Vec<&BundleVariant> =
            matrix.iter().filter(|v| GroupKey::of(v) == key).collect();

        let baseline_variant = members
            .iter()
            .find(|v| v.producer == baseline)
            .ok_or_else(|| ComparisonError::MissingOutcome {
                variant: BundleVariant {
                    producer: baseline,
                    mode: key.mode,
                    minified: key.minified,
                    bytecode: key.bytecode,
                }
                .id(),
            })?;
        let baseline_outcome = outcome_for(baseline_variant)?;
        if baseline_outcome.size_bytes == 0 {
            return Err(ComparisonError::ZeroBaseline {
                variant: baseline_variant.id(),
            });
        }

        let mut challengers = Vec::new();
        for variant in members.iter().filter(|v| v.producer != baseline) {
            let outcome = outcome_for(variant)?;
            challengers.push(ChallengerDiff {
                outcome,
                diff_percent: diff_percent(baseline_outcome.size_bytes, outcome.size_bytes),
            });
        }

        groups.push(ComparisonGroup {
            key,
            baseline: baseline_outcome,
            challengers,
        });
    }

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bundlebench_core::variant_matrix;

    fn outcome(variant: BundleVariant, size_bytes: u64) -> BuildOutcome {
        BuildOutcome {
            variant,
            size_bytes,
        }
    }

    #[test]
    fn diff_percent_representative_values() {
        assert_eq!(diff_percent(2_000_000, 2_400_000), 20.0);
        assert_eq!(diff_percent(2_000_000, 1_800_000), -10.0);
        assert_eq!(diff_percent(2_000_000, 2_000_000), 0.0);
    }

    #[test]
    fn format_diff_sign_rules() {
        assert_eq!(format_diff(20.0), "+20.00%");
        assert_eq!(format_diff(-10.0), "-10.00%");
        assert_eq!(format_diff(0.0), "0.00%");
        assert_eq!(format_diff(0.005), "+0.01%");
    }

    #[test]
    fn groups_full_matrix_into_five_kinds() {
        let matrix = variant_matrix();
        let outcomes: Vec<BuildOutcome> = matrix
            .iter()
            .enumerate()
            .map(|(i, v)| outcome(*v, 1_000_000 + i as u64))
            .collect();

        let groups = compare_outcomes(&matrix, &outcomes, Producer::Metro).unwrap();
        assert_eq!(groups.len(), 5);
        for group in &groups {
            assert_eq!(group.baseline.variant.producer, Producer::Metro);
            // Two challengers per group: Re.Pack and Expo.
            assert_eq!(group.challengers.len(), 2);
            for challenger in &group.challengers {
                assert_eq!(GroupKey::of(&challenger.outcome.variant), group.key);
            }
        }
    }

    #[test]
    fn challenger_diffs_match_formula() {
        let matrix = variant_matrix();
        let outcomes: Vec<BuildOutcome> = matrix
            .iter()
            .map(|v| {
                let size = match v.producer {
                    Producer::Metro => 2_000_000,
                    Producer::Repack => 2_400_000,
                    Producer::Expo => 1_800_000,
                };
                outcome(*v, size)
            })
            .collect();

        let groups = compare_outcomes(&matrix, &outcomes, Producer::Metro).unwrap();
        for group in groups {
            for challenger in group.challengers {
                match challenger.outcome.variant.producer {
                    Producer::Repack => assert_eq!(challenger.diff_percent, 20.0),
                    Producer::Expo => assert_eq!(challenger.diff_percent, -10.0),
                    Producer::Metro => unreachable!("baseline is never a challenger"),
                }
            }
        }
    }

    #[test]
    fn zero_baseline_is_fatal() {
        let matrix = variant_matrix();
        let outcomes: Vec<BuildOutcome> = matrix
            .iter()
            .map(|v| {
                let size = if v.producer == Producer::Metro { 0 } else { 100 };
                outcome(*v, size)
            })
            .collect();

        let err = compare_outcomes(&matrix, &outcomes, Producer::Metro).unwrap_err();
        assert!(matches!(err, ComparisonError::ZeroBaseline { .. }));
    }

    #[test]
    fn missing_outcome_is_fatal() {
        let matrix = variant_matrix();
        let outcomes: Vec<BuildOutcome> = matrix
            .iter()
            .filter(|v| v.id() != "expo-prod-min")
            .map(|v| outcome(*v, 1_000))
            .collect();

        let err = compare_outcomes(&matrix, &outcomes, Producer::Metro).unwrap_err();
        match err {
            ComparisonError::MissingOutcome { variant } => assert_eq!(variant, "expo-prod-min"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn alternate_baseline_producer() {
        let matrix = variant_matrix();
        let outcomes: Vec<BuildOutcome> = matrix
            .iter()
            .map(|v| {
                let size = match v.producer {
                    Producer::Metro => 1_100,
                    Producer::Repack => 1_000,
                    Producer::Expo => 1_500,
                };
                outcome(*v, size)
            })
            .collect();

        let groups = compare_outcomes(&matrix, &outcomes, Producer::Repack).unwrap();
        for group in groups {
            assert_eq!(group.baseline.variant.producer, Producer::Repack);
            for challenger in group.challengers {
                match challenger.outcome.variant.producer {
                    Producer::Metro => {
                        assert!((challenger.diff_percent - 10.0).abs() < 1e-9)
                    }
                    Producer::Expo => assert_eq!(challenger.diff_percent, 50.0),
                    Producer::Repack => unreachable!(),
                }
            }
        }
    }
}
