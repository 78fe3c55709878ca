//! Producer Adapters
//!
//! One adapter per bundler toolchain. Adapters declare the external command
//! for a variant and know where that tool actually leaves its output, so
//! tool-specific quirks (Expo's nested export tree) never leak into the
//! orchestration core.

use crate::config::BenchConfig;
use crate::process::{spec_from_tool, CommandSpec, ProcessError};
use crate::store::{ArtifactStore, StoreError};
use bundlebench_core::{BundleVariant, Producer};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal build-stage failures.
#[derive(Debug, Error)]
pub enum BuildError {
    /// An external invocation failed.
    #[error(transparent)]
    Process(#[from] ProcessError),

    /// Workspace filesystem failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The tool exited successfully but the expected artifact is absent.
    #[error("Build for {variant} reported success but no bundle was found at {path}")]
    OutputMissing {
        /// Variant whose artifact is missing.
        variant: String,
        /// Path (or directory) that was searched.
        path: PathBuf,
    },

    /// Bytecode compilation was requested before its source variant's build
    /// outcome exists. Sequencing guarantees this cannot happen; if it does,
    /// the run aborts.
    #[error("Bytecode source for {variant} has not been built yet")]
    SourceNotBuilt {
        /// The bytecode variant being compiled.
        variant: String,
    },

    /// Moving the produced bundle to its canonical path failed.
    #[error("Failed to relocate bundle for {variant}: {source}")]
    Relocate {
        /// Variant being relocated.
        variant: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A size read was attempted on a variant with no recorded successful
    /// build. Sequencing guarantees this cannot happen; if it does, the run
    /// aborts.
    #[error("Size read attempted for {variant} before a successful build")]
    NotBuilt {
        /// Variant being measured.
        variant: String,
    },

    /// Reading a produced bundle's size failed.
    #[error("Failed to measure bundle for {variant} at {path}: {source}")]
    MeasureFailed {
        /// Variant being measured.
        variant: String,
        /// Bundle path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Everything an adapter needs to shape a build invocation.
pub struct BuildContext<'a> {
    /// Resolved run configuration.
    pub config: &'a BenchConfig,
    /// The per-run artifact workspace.
    pub store: &'a ArtifactStore,
}

/// A bundler toolchain behind a uniform build interface.
pub trait ProducerAdapter {
    /// The producer this adapter drives.
    fn producer(&self) -> Producer;

    /// The external invocation that builds `variant` from source.
    fn build_command(&self, variant: &BundleVariant, ctx: &BuildContext<'_>) -> CommandSpec;

    /// Path of the file the tool actually produced. For tools that write the
    /// canonical path directly this just verifies the file exists; for tools
    /// with their own output conventions it finds the real artifact.
    fn locate_output(
        &self,
        variant: &BundleVariant,
        ctx: &BuildContext<'_>,
    ) -> Result<PathBuf, BuildError>;

    /// Remove stray directories the tool created as a side effect.
    fn cleanup(&self, _variant: &BundleVariant, _ctx: &BuildContext<'_>) -> Result<(), BuildError> {
        Ok(())
    }
}

/// Verify the canonical bundle path exists and return it.
fn expect_canonical(
    variant: &BundleVariant,
    ctx: &BuildContext<'_>,
) -> Result<PathBuf, BuildError> {
    let path = ctx.store.bundle_path(variant);
    if path.is_file() {
        Ok(path)
    } else {
        Err(BuildError::OutputMissing {
            variant: variant.id(),
            path,
        })
    }
}

/// Shared flag shape for the two `react-native` bundle commands.
fn react_native_command(
    subcommand: &str,
    variant: &BundleVariant,
    ctx: &BuildContext<'_>,
) -> CommandSpec {
    let app = &ctx.config.app;
    spec_from_tool(&ctx.config.tools.react_native, &app.dir)
        .arg(subcommand)
        .args(["--platform", &app.platform])
        .args(["--dev", &variant.mode.is_dev().to_string()])
        .args(["--entry-file", &app.entry_file])
        .arg("--bundle-output")
        .arg(ctx.store.bundle_path(variant).display().to_string())
        .arg("--assets-dest")
        .arg(ctx.store.assets_path(variant).display().to_string())
        .args(["--minify", &variant.minified.to_string()])
}

/// Metro, the stock React Native bundler.
pub struct MetroAdapter;

impl ProducerAdapter for MetroAdapter {
    fn producer(&self) -> Producer {
        Producer::Metro
    }

    fn build_command(&self, variant: &BundleVariant, ctx: &BuildContext<'_>) -> CommandSpec {
        react_native_command("bundle", variant, ctx)
    }

    fn locate_output(
        &self,
        variant: &BundleVariant,
        ctx: &BuildContext<'_>,
    ) -> Result<PathBuf, BuildError> {
        expect_canonical(variant, ctx)
    }
}

/// Re.Pack, the webpack-based bundler. Successive variant builds share the
/// tool's cache inside the app directory, so every invocation forces a cache
/// reset.
pub struct RepackAdapter;

impl ProducerAdapter for RepackAdapter {
    fn producer(&self) -> Producer {
        Producer::Repack
    }

    fn build_command(&self, variant: &BundleVariant, ctx: &BuildContext<'_>) -> CommandSpec {
        react_native_command("webpack-bundle", variant, ctx).arg("--reset-cache")
    }

    fn locate_output(
        &self,
        variant: &BundleVariant,
        ctx: &BuildContext<'_>,
    ) -> Result<PathBuf, BuildError> {
        expect_canonical(variant, ctx)
    }
}

/// Expo export. The tool owns its output layout: the bundle lands at a
/// nested `_expo/static/js/<platform>/` path inside a scoped export
/// directory, so the produced file has to be located and relocated to the
/// canonical path afterwards.
pub struct ExpoAdapter;

impl ExpoAdapter {
    /// Scoped output directory for the export, inside the variant's own dir.
    fn export_dir(variant: &BundleVariant, ctx: &BuildContext<'_>) -> PathBuf {
        ctx.store.variant_dir(variant).join("export")
    }

    /// Directory where the Expo CLI leaves the produced bundle.
    fn produced_dir(variant: &BundleVariant, ctx: &BuildContext<'_>) -> PathBuf {
        Self::export_dir(variant, ctx)
            .join("_expo")
            .join("static")
            .join("js")
            .join(&ctx.config.app.platform)
    }
}

impl ProducerAdapter for ExpoAdapter {
    fn producer(&self) -> Producer {
        Producer::Expo
    }

    fn build_command(&self, variant: &BundleVariant, ctx: &BuildContext<'_>) -> CommandSpec {
        let app = &ctx.config.app;
        let mut spec = spec_from_tool(&ctx.config.tools.expo, &app.dir)
            .arg("export")
            .args(["--platform", &app.platform])
            .arg("--output-dir")
            .arg(Self::export_dir(variant, ctx).display().to_string());
        if variant.mode.is_dev() {
            spec = spec.arg("--dev");
        }
        // Inverse minify semantics: minification is Expo's default.
        if !variant.minified {
            spec = spec.arg("--no-minify");
        }
        // Bytecode variants are produced by the compile step, never here.
        spec = spec.arg("--no-bytecode").env("EXPO_NO_TELEMETRY", "1");
        if ctx.config.tools.tree_shaking {
            spec = spec.env("EXPO_UNSTABLE_TREE_SHAKING", "1");
        }
        spec
    }

    fn locate_output(
        &self,
        variant: &BundleVariant,
        ctx: &BuildContext<'_>,
    ) -> Result<PathBuf, BuildError> {
        let dir = Self::produced_dir(variant, ctx);
        let missing = || BuildError::OutputMissing {
            variant: variant.id(),
            path: dir.clone(),
        };

        let mut candidates: Vec<PathBuf> = fs::read_dir(&dir)
            .map_err(|_| missing())?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().map(|e| e == "js").unwrap_or(false)
            })
            .collect();
        // Deterministic pick if the tool ever emits more than one file.
        candidates.sort();
        candidates.into_iter().next().ok_or_else(missing)
    }

    fn cleanup(&self, variant: &BundleVariant, ctx: &BuildContext<'_>) -> Result<(), BuildError> {
        let dir = Self::export_dir(variant, ctx);
        if dir.exists() {
            fs::remove_dir_all(&dir).map_err(|source| BuildError::Relocate {
                variant: variant.id(),
                source,
            })?;
        }
        Ok(())
    }
}

/// The Hermes bytecode compiler, invoked to transform an existing
/// production bundle into its binary bytecode form.
pub struct BytecodeCompiler;

impl BytecodeCompiler {
    /// The external invocation compiling `source`'s bundle into `target`'s
    /// bundle path, with optimization enabled and warnings suppressed.
    pub fn compile_command(
        &self,
        source: &BundleVariant,
        target: &BundleVariant,
        ctx: &BuildContext<'_>,
    ) -> CommandSpec {
        CommandSpec::new(ctx.config.tools.hermesc.as_str(), &ctx.config.app.dir)
            .arg(ctx.store.bundle_path(source).display().to_string())
            .arg("-emit-binary")
            .arg("-out")
            .arg(ctx.store.bundle_path(target).display().to_string())
            .arg("-O")
            .arg("-w")
    }
}
