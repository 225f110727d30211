//! Shared precondition check for stages that need an attached diagnostic.

use felix_core::{classify, Diagnostic, Error, Outcome, Record, Result};
use tracing::warn;

/// What a diagnostic-consuming stage should do with an incoming record.
#[derive(Debug)]
pub(crate) enum Guarded<'a> {
    /// Pass the record through untouched (null/empty payload, or a
    /// tolerated missing diagnostic).
    PassThrough,

    /// The record's attached diagnostic.
    Diagnostic(&'a Diagnostic),
}

/// Runs the classifier and the missing-diagnostic precondition for `stage`.
///
/// The classifier check is identical to the one the lint stage runs, so a
/// record reaching this stage out of order is caught the same way.
pub(crate) fn diagnostic_for<'a>(
    record: &'a Record,
    stage: &'static str,
    tolerate_missing: bool,
) -> Result<Guarded<'a>> {
    match classify(record) {
        Outcome::Skip(_) => return Ok(Guarded::PassThrough),
        Outcome::Unsupported => {
            return Err(Error::UnsupportedRecordKind {
                path: record.path.clone(),
            })
        }
        Outcome::Proceed => {}
    }

    match &record.diagnostic {
        Some(diagnostic) => Ok(Guarded::Diagnostic(diagnostic)),
        None if tolerate_missing => {
            warn!(path = %record.path, stage, "no diagnostic found; passing record through");
            Ok(Guarded::PassThrough)
        }
        None => Err(Error::MissingDiagnostic {
            path: record.path.clone(),
            stage,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use felix_core::Diagnostic;

    #[test]
    fn test_null_record_passes_through() {
        let record = Record::null("a.js");
        assert!(matches!(
            diagnostic_for(&record, "format", false).unwrap(),
            Guarded::PassThrough
        ));
    }

    #[test]
    fn test_stream_record_is_unsupported() {
        let record = Record::stream("a.js");
        let err = diagnostic_for(&record, "format", false).unwrap_err();
        assert!(matches!(err, Error::UnsupportedRecordKind { path } if path == "a.js"));
    }

    #[test]
    fn test_missing_diagnostic_is_a_usage_error() {
        let record = Record::buffered("a.js", "var x = 1");
        let err = diagnostic_for(&record, "fail-on-error", false).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingDiagnostic { stage: "fail-on-error", .. }
        ));
    }

    #[test]
    fn test_missing_diagnostic_tolerated_when_configured() {
        let record = Record::buffered("a.js", "var x = 1");
        assert!(matches!(
            diagnostic_for(&record, "format", true).unwrap(),
            Guarded::PassThrough
        ));
    }

    #[test]
    fn test_attached_diagnostic_is_returned() {
        let mut record = Record::buffered("a.js", "var x = 1");
        record.diagnostic = Some(Diagnostic::default());
        assert!(matches!(
            diagnostic_for(&record, "format", false).unwrap(),
            Guarded::Diagnostic(_)
        ));
    }
}
