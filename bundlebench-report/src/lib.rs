#![warn(missing_docs)]
//! BundleBench Report - Reporting Output
//!
//! Report data structures plus output formats:
//! - JSON (machine-readable)
//! - GitHub Summary (Markdown for $GITHUB_STEP_SUMMARY)
//! - Human-readable terminal output (rendered by the CLI)
//!
//! This crate is a pure consumer of the comparison engine's output; it has
//! no control-flow responsibility.

mod github;
mod json;
mod report;

pub use github::generate_github_summary;
pub use json::generate_json_report;
pub use report::{
    format_size_mb, GroupEntry, GroupSummary, Report, ReportMeta, ReportSummary, VariantRow,
};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON with full report schema
    Json,
    /// Markdown for GitHub Actions
    GithubSummary,
    /// Human-readable terminal output
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "github" | "github-summary" => Ok(OutputFormat::GithubSummary),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_parses_aliases() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            "github".parse::<OutputFormat>().unwrap(),
            OutputFormat::GithubSummary
        );
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
        assert!("csv".parse::<OutputFormat>().is_err());
    }
}
