//! Felix Core - Data model, classifier and engine seam for the felix
//! streaming lint pipeline.
//!
//! This crate provides the foundational types the pipeline stages build on:
//!
//! - [`Record`] and [`Payload`]: in-flight representation of one source unit
//! - [`Diagnostic`] and [`FileResult`]: structured analysis results
//! - [`classify`]: the processable / skippable / unsupported decision
//! - [`AnalysisEngine`]: trait for pluggable static-analysis engines
//!
//! # Architecture
//!
//! Records flow linearly through stages; only the lint stage suspends
//! (awaiting the engine), and only the fail-after aggregator keeps
//! cross-record state:
//!
//! ```text
//! ┌──────────────────┐
//! │  felix-pipeline  │  (lint / format / fail stages)
//! └────────┬─────────┘
//!          │
//!          ▼
//! ┌──────────────────┐     ┌──────────────────┐
//! │   felix-core     │ ◄── │   felix-render   │  (built-in renderers)
//! └────────┬─────────┘     └──────────────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │ analysis engine  │  (external collaborator behind AnalysisEngine)
//! └──────────────────┘
//! ```

pub mod classify;
pub mod diagnostic;
pub mod engine;
pub mod error;
pub mod record;

// Re-export core types for convenience
pub use classify::{classify, Outcome, SkipReason};
pub use diagnostic::{Diagnostic, FileResult};
pub use engine::{AnalysisEngine, EngineConfig, EngineFileResult, EngineOutput};
pub use error::{Error, Result};
pub use record::{Payload, Record};
