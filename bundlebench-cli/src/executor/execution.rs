//! Build Execution
//!
//! Drives the variant matrix strictly sequentially: the workspace reset
//! completes before any build begins, no two external builds overlap, and
//! every bytecode compilation runs after its source variant's build. The
//! sequencing is a determinism choice, not an optimization: concurrent
//! builds would contend over shared caches inside the external tools.

use crate::config::BenchConfig;
use crate::process::run_command;
use crate::producer::{
    BuildContext, BuildError, BytecodeCompiler, ExpoAdapter, MetroAdapter, ProducerAdapter,
    RepackAdapter,
};
use crate::store::ArtifactStore;
use bundlebench_core::{variant_matrix, BuildOutcome, BundleVariant, Producer};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;
use std::fs;

use super::measure::measure;

/// Sequential build/measure driver for the whole matrix.
pub struct Orchestrator<'a> {
    config: &'a BenchConfig,
    store: ArtifactStore,
    metro: MetroAdapter,
    repack: RepackAdapter,
    expo: ExpoAdapter,
    compiler: BytecodeCompiler,
}

impl<'a> Orchestrator<'a> {
    /// Create an orchestrator over the given workspace.
    pub fn new(config: &'a BenchConfig, store: ArtifactStore) -> Self {
        Self {
            config,
            store,
            metro: MetroAdapter,
            repack: RepackAdapter,
            expo: ExpoAdapter,
            compiler: BytecodeCompiler,
        }
    }

    fn adapter(&self, producer: Producer) -> &dyn ProducerAdapter {
        match producer {
            Producer::Metro => &self.metro,
            Producer::Repack => &self.repack,
            Producer::Expo => &self.expo,
        }
    }

    fn ctx(&self) -> BuildContext<'_> {
        BuildContext {
            config: self.config,
            store: &self.store,
        }
    }

    /// Build and measure every variant in the matrix.
    ///
    /// Fails fast: the first error aborts the run with no outcomes.
    pub fn run(&self) -> Result<Vec<BuildOutcome>, BuildError> {
        let matrix = variant_matrix();

        self.store.reset()?;
        for variant in &matrix {
            self.store.ensure(variant)?;
        }

        let progress = ProgressBar::new(matrix.len() as u64);
        progress.set_style(
            ProgressStyle::with_template("[{pos}/{len}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let mut built: HashSet<String> = HashSet::with_capacity(matrix.len());
        for variant in &matrix {
            progress.set_message(format!("building {}", variant.id()));
            tracing::info!(variant = %variant.id(), "building variant");

            match variant.source_variant() {
                Some(source) => self.compile(variant, &source, &built)?,
                None => self.build(variant)?,
            }
            built.insert(variant.id());
            progress.inc(1);
        }
        progress.finish_and_clear();

        let mut outcomes = Vec::with_capacity(matrix.len());
        for variant in &matrix {
            let size_bytes = measure(&self.store, variant, &built)?;
            outcomes.push(BuildOutcome {
                variant: *variant,
                size_bytes,
            });
        }
        Ok(outcomes)
    }

    /// Build one non-bytecode variant via its producer adapter.
    fn build(&self, variant: &BundleVariant) -> Result<(), BuildError> {
        let ctx = self.ctx();
        let adapter = self.adapter(variant.producer);

        run_command(&adapter.build_command(variant, &ctx))?;

        let produced = adapter.locate_output(variant, &ctx)?;
        let canonical = self.store.bundle_path(variant);
        if produced != canonical {
            fs::rename(&produced, &canonical).map_err(|source| BuildError::Relocate {
                variant: variant.id(),
                source,
            })?;
        }
        adapter.cleanup(variant, &ctx)?;
        Ok(())
    }

    /// Transform an existing production bundle into its bytecode form.
    fn compile(
        &self,
        target: &BundleVariant,
        source: &BundleVariant,
        built: &HashSet<String>,
    ) -> Result<(), BuildError> {
        if !built.contains(&source.id()) {
            return Err(BuildError::SourceNotBuilt {
                variant: target.id(),
            });
        }
        let ctx = self.ctx();
        let source_bundle = self.store.bundle_path(source);
        if !source_bundle.is_file() {
            return Err(BuildError::OutputMissing {
                variant: source.id(),
                path: source_bundle,
            });
        }

        run_command(&self.compiler.compile_command(source, target, &ctx))?;

        let compiled = self.store.bundle_path(target);
        if !compiled.is_file() {
            return Err(BuildError::OutputMissing {
                variant: target.id(),
                path: compiled,
            });
        }
        Ok(())
    }
}
