//! Report Metadata Collection
//!
//! Captures run context for the report header: harness version, UTC
//! timestamp, and the benchmarked application's git commit and branch when
//! available. Git lookups degrade gracefully to `None` outside a repository.

use crate::config::BenchConfig;
use bundlebench_report::ReportMeta;
use chrono::Utc;
use std::path::Path;

/// Build report metadata from the resolved configuration.
pub fn build_report_meta(config: &BenchConfig) -> ReportMeta {
    ReportMeta {
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        git_commit: git_output(&config.app.dir, &["rev-parse", "HEAD"]),
        git_branch: git_output(&config.app.dir, &["rev-parse", "--abbrev-ref", "HEAD"]),
        platform: config.app.platform.clone(),
        entry_file: config.app.entry_file.clone(),
        baseline: config.app.baseline,
    }
}

fn git_output(dir: &Path, args: &[&str]) -> Option<String> {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8(output.stdout).ok()?;
    let value = value.trim().to_string();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_carries_config_values() {
        let mut config = BenchConfig::default();
        config.app.platform = "android".to_string();
        let meta = build_report_meta(&config);
        assert_eq!(meta.platform, "android");
        assert_eq!(meta.entry_file, "index.js");
        assert_eq!(meta.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn git_lookup_degrades_outside_a_repository() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(git_output(dir.path(), &["rev-parse", "HEAD"]), None);
    }
}
