//! Build outcomes.

use crate::variant::BundleVariant;
use serde::{Deserialize, Serialize};

/// The measured result of one successfully built variant.
///
/// An outcome exists only after the variant's build completed; a missing
/// outcome for any expected variant is a fatal inconsistency, never silently
/// tolerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOutcome {
    /// The variant that was built.
    pub variant: BundleVariant,
    /// Byte length of the produced bundle file.
    pub size_bytes: u64,
}

impl BuildOutcome {
    /// Bundle size in megabytes, for presentation.
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / (1024.0 * 1024.0)
    }
}
