//! Run Pipeline
//!
//! Sequential, fail-fast orchestration of the full variant matrix.
//!
//! ```text
//! variant_matrix (fixed comparison surface)
//!       │
//!       ▼
//! ┌─────────────┐
//! │  execution  │  Reset workspace, build every variant in order
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   measure   │  Stat every produced bundle
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   compare   │  Group by variant kind, diff vs baseline
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   report    │  Assemble Report (rows, groups, meta)
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Human-readable output
//! └─────────────┘
//! ```
//!
//! Any failure at any stage aborts the whole run; no partial report is ever
//! produced.

mod execution;
mod formatting;
mod measure;
mod metadata;
mod report;

pub use execution::Orchestrator;
pub use formatting::format_human_output;
pub use measure::measure;
pub use metadata::build_report_meta;
pub use report::build_report;
