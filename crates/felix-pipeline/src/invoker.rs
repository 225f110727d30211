//! The lint stage: classify, invoke the engine, attach the diagnostic.

use crate::options::LintOptions;
use felix_core::{
    classify, AnalysisEngine, Diagnostic, Error, Outcome, Record, Result,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Runs each record through the analysis engine and attaches the resulting
/// [`Diagnostic`].
///
/// The engine call is the pipeline's only point of suspension; while one
/// record awaits its result, the surrounding stream may admit others (see
/// [`lint_stream`](crate::stream::lint_stream)).
pub struct LintStage {
    engine: Arc<dyn AnalysisEngine>,
    options: LintOptions,
}

impl LintStage {
    /// Creates a lint stage around an engine.
    pub fn new(engine: Arc<dyn AnalysisEngine>, options: LintOptions) -> Self {
        Self { engine, options }
    }

    /// Processes one record.
    ///
    /// Null and empty records pass through unchanged without an engine
    /// call. In fix mode, engine-provided replacement content overwrites
    /// the record's payload; remaining errors are reported, never
    /// suppressed.
    ///
    /// # Errors
    ///
    /// Stream-backed payloads fail with [`Error::UnsupportedRecordKind`];
    /// engine failures wrap the cause in [`Error::LinterInvocation`] and
    /// are never retried.
    pub async fn process(&self, mut record: Record) -> Result<Record> {
        match classify(&record) {
            Outcome::Skip(_) => return Ok(record),
            Outcome::Unsupported => {
                return Err(Error::UnsupportedRecordKind {
                    path: record.path.clone(),
                })
            }
            Outcome::Proceed => {}
        }

        let config = self.options.engine_config();
        let output = {
            // Proceed implies a non-empty buffered payload.
            let Some(text) = record.text() else {
                return Ok(record);
            };
            debug!(path = %record.path, engine = self.engine.name(), "linting record");
            self.engine
                .lint_text(text, &config)
                .await
                .map_err(|cause| Error::LinterInvocation {
                    path: record.path.clone(),
                    cause,
                })?
        };

        let diagnostic = Diagnostic::from_engine(output, &record.path);

        if self.options.fix {
            if let Some(fixed) = diagnostic.fixed_content.clone() {
                record.replace_content(fixed);
            }
            if diagnostic.error_count > 0 {
                warn!(
                    path = %record.path,
                    errors = diagnostic.error_count,
                    "cannot auto fix every problem; fix the rest manually"
                );
            }
        }

        record.diagnostic = Some(diagnostic);
        Ok(record)
    }
}
