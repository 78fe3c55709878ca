//! Artifact Store
//!
//! Owns the per-run output workspace: one directory per variant id, each
//! with an `index.bundle` artifact and a nested `assets/` directory. The
//! workspace is destroyed and recreated wholesale at the start of every run;
//! there is no cross-run state and no retry on filesystem failure.

use bundlebench_core::BundleVariant;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Filesystem failures inside the workspace. All fatal.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Deleting or recreating the workspace root failed.
    #[error("Failed to reset workspace {path}: {source}")]
    Reset {
        /// Workspace root.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Creating a variant's output directories failed.
    #[error("Failed to create variant directory {path}: {source}")]
    Create {
        /// Directory being created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Per-run artifact workspace keyed by variant id.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    /// Create a store rooted at `root`. No directories are created until
    /// [`ArtifactStore::reset`] runs.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Workspace root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Delete and recreate the workspace root. Idempotent; safe if the root
    /// does not exist yet.
    pub fn reset(&self) -> Result<(), StoreError> {
        if self.root.exists() {
            fs::remove_dir_all(&self.root).map_err(|source| StoreError::Reset {
                path: self.root.clone(),
                source,
            })?;
        }
        fs::create_dir_all(&self.root).map_err(|source| StoreError::Reset {
            path: self.root.clone(),
            source,
        })
    }

    /// Create the variant's output directory and its nested assets
    /// subdirectory if missing. Idempotent.
    pub fn ensure(&self, variant: &BundleVariant) -> Result<(), StoreError> {
        let assets = self.assets_path(variant);
        fs::create_dir_all(&assets).map_err(|source| StoreError::Create {
            path: assets.clone(),
            source,
        })
    }

    /// The variant's exclusive output directory.
    pub fn variant_dir(&self, variant: &BundleVariant) -> PathBuf {
        self.root.join(variant.id())
    }

    /// Canonical bundle path for the variant. Never creates on read.
    pub fn bundle_path(&self, variant: &BundleVariant) -> PathBuf {
        self.variant_dir(variant).join("index.bundle")
    }

    /// Canonical assets directory for the variant. Never creates on read.
    pub fn assets_path(&self, variant: &BundleVariant) -> PathBuf {
        self.variant_dir(variant).join("assets")
    }
}
