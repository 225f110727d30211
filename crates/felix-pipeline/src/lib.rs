//! Felix Pipeline - Streaming diagnostic stages for a build tool.
//!
//! Records flow through the lint stage and then through any subset of the
//! downstream stages, composed by the caller in any order:
//!
//! ```text
//! records ──► LintStage ──► FormatStage ──► FailGate ──► (host sink)
//!                  │                            │
//!                  │                            └─ fails per record
//!                  └──────────────► FailAfter ────► flush() at stream end
//! ```
//!
//! - [`LintStage`]: invokes the analysis engine, attaches diagnostics,
//!   applies auto-fix content.
//! - [`FormatStage`]: renders diagnostics to a sink via a resolvable
//!   renderer.
//! - [`FailGate`]: per-record pass/fail, reported immediately.
//! - [`FailAfter`]: sink-only aggregator; one pass/fail decision at
//!   end-of-stream.
//! - [`lint_stream`]: drives a record stream through the lint stage with
//!   overlapping in-flight records.
//!
//! # Example
//!
//! ```no_run
//! use felix_core::{AnalysisEngine, Record};
//! use felix_pipeline::{FailGate, FailOptions, FormatOptions, FormatStage, LintOptions, LintStage};
//! use felix_render::Renderer;
//! use std::sync::Arc;
//!
//! async fn run(engine: Arc<dyn AnalysisEngine>, record: Record) -> felix_core::Result<Record> {
//!     let lint = LintStage::new(engine, LintOptions::default());
//!     let mut format = FormatStage::new(Renderer::resolve("default")?, FormatOptions::default());
//!     let gate = FailGate::new(FailOptions::default());
//!
//!     let record = lint.process(record).await?;
//!     let record = format.process(record)?;
//!     gate.check(record)
//! }
//! ```

mod aggregate;
mod format;
mod gate;
mod guard;
mod invoker;
mod options;
mod stream;
mod text;

pub use aggregate::{AfterCallback, AggregateState, FailAfter};
pub use format::FormatStage;
pub use gate::{FailGate, GateCallback};
pub use invoker::LintStage;
pub use options::{FailOptions, FormatOptions, LintOptions};
pub use stream::lint_stream;
