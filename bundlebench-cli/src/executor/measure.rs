//! Size Collection
//!
//! Reads the byte length of a produced bundle. Measuring is only valid after
//! the variant's build completed; a read without a recorded build is a
//! programming error and aborts the run. No unit conversion happens here.

use crate::producer::BuildError;
use crate::store::ArtifactStore;
use bundlebench_core::BundleVariant;
use std::collections::HashSet;
use std::fs;

/// Byte length of the variant's bundle file.
pub fn measure(
    store: &ArtifactStore,
    variant: &BundleVariant,
    built: &HashSet<String>,
) -> Result<u64, BuildError> {
    if !built.contains(&variant.id()) {
        return Err(BuildError::NotBuilt {
            variant: variant.id(),
        });
    }
    let path = store.bundle_path(variant);
    let metadata = fs::metadata(&path).map_err(|source| BuildError::MeasureFailed {
        variant: variant.id(),
        path: path.clone(),
        source,
    })?;
    Ok(metadata.len())
}
