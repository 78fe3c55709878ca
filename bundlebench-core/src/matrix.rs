//! The fixed variant matrix.
//!
//! The matrix is declared once, not computed from discovered producers: every
//! producer must support every applicable combination, and a failing build
//! for any variant fails the whole run. Ordering groups variants by producer
//! with each bytecode variant after its source variant; ordering only
//! affects human-readable output and build sequencing, never correctness.

use crate::variant::{BuildMode, BundleVariant, Producer};

/// Number of variants in the full matrix:
/// 3 producers × (dev, prod, prod-min, prod-hbc, prod-min-hbc).
pub const MATRIX_SIZE: usize = 15;

/// Enumerate the full comparison surface in build order.
pub fn variant_matrix() -> Vec<BundleVariant> {
    let mut variants = Vec::with_capacity(MATRIX_SIZE);
    for producer in Producer::ALL {
        variants.push(BundleVariant {
            producer,
            mode: BuildMode::Development,
            minified: false,
            bytecode: false,
        });
        for minified in [false, true] {
            variants.push(BundleVariant {
                producer,
                mode: BuildMode::Production,
                minified,
                bytecode: false,
            });
        }
        for minified in [false, true] {
            variants.push(BundleVariant {
                producer,
                mode: BuildMode::Production,
                minified,
                bytecode: true,
            });
        }
    }
    variants
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn matrix_has_declared_cardinality() {
        assert_eq!(variant_matrix().len(), MATRIX_SIZE);
    }

    #[test]
    fn variant_ids_are_unique() {
        let ids: HashSet<String> = variant_matrix().iter().map(|v| v.id()).collect();
        assert_eq!(ids.len(), MATRIX_SIZE);
    }

    #[test]
    fn every_bytecode_variant_has_exactly_one_source_in_matrix() {
        let matrix = variant_matrix();
        for variant in matrix.iter().filter(|v| v.bytecode) {
            let source = variant.source_variant().expect("bytecode variant has a source");
            assert_eq!(source.mode, BuildMode::Production);
            assert_eq!(source.minified, variant.minified);
            assert_eq!(source.producer, variant.producer);
            let count = matrix.iter().filter(|v| **v == source).count();
            assert_eq!(count, 1);
        }
    }

    #[test]
    fn sources_precede_their_bytecode_variants() {
        let matrix = variant_matrix();
        for (index, variant) in matrix.iter().enumerate() {
            if let Some(source) = variant.source_variant() {
                let source_index = matrix
                    .iter()
                    .position(|v| *v == source)
                    .expect("source present");
                assert!(source_index < index, "{} built before {}", variant, source);
            }
        }
    }

    #[test]
    fn development_variants_are_never_minified_or_bytecode() {
        for variant in variant_matrix() {
            if variant.mode == BuildMode::Development {
                assert!(!variant.minified);
                assert!(!variant.bytecode);
            }
        }
    }
}
