//! Error types for the felix pipeline.

use thiserror::Error;

/// Result type for felix operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while a record moves through the pipeline.
///
/// Null and empty payloads are deliberately absent here: they are
/// classification-level non-errors and records carrying them pass through
/// stages untouched.
#[derive(Debug, Error)]
pub enum Error {
    /// The record's payload is stream-backed; the analysis engine needs a
    /// fully materialized text buffer, so these are never supported.
    #[error("Stream-backed content is not supported: {path}")]
    UnsupportedRecordKind {
        /// Path of the offending record.
        path: String,
    },

    /// The analysis engine failed while linting a record's content.
    ///
    /// Never retried; the record's processing halts without a diagnostic.
    #[error("Linter invocation failed for {path}: {cause}")]
    LinterInvocation {
        /// Path of the record being linted.
        path: String,
        /// The underlying engine error.
        cause: anyhow::Error,
    },

    /// A stage that requires an attached diagnostic received a record
    /// without one. This is a wiring error: the lint stage must run first.
    #[error("No diagnostic found for {path} (reached the {stage} stage before the lint stage)")]
    MissingDiagnostic {
        /// Path of the record missing a diagnostic.
        path: String,
        /// Name of the stage that needed the diagnostic.
        stage: &'static str,
    },

    /// A renderer keyword did not resolve against the built-in registry.
    #[error("No suitable renderer - {name}")]
    FormatterResolution {
        /// The keyword that failed to resolve.
        name: String,
    },

    /// A renderer resolved but failed while producing output.
    #[error("Renderer '{name}' failed: {cause}")]
    RendererExecution {
        /// Name of the renderer that failed.
        name: String,
        /// The underlying renderer error.
        cause: anyhow::Error,
    },

    /// The per-record fail gate tripped on a diagnostic with errors.
    #[error("{message}")]
    FailGate {
        /// Combined multi-line failure message.
        message: String,
    },

    /// The deferred aggregator tripped at end-of-stream.
    #[error("{message}")]
    FailAfter {
        /// Combined multi-line failure message over all accumulated paths.
        message: String,
    },

    /// The aggregator was observed or flushed after it had already closed.
    #[error("Fail-after aggregator already flushed; one instance covers one pipeline run")]
    AlreadyFlushed,
}
