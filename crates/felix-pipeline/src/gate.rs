//! The immediate fail gate: per-record pass/fail on error count.

use crate::guard::{diagnostic_for, Guarded};
use crate::options::FailOptions;
use crate::text::{error_word, path_word, FORMAT_HINT};
use felix_core::{Diagnostic, Error, Record, Result};

const STAGE: &str = "fail-on-error";

/// Optional completion observer: receives the failure message (or `None`
/// on a clean record) plus the diagnostic. An observer hook only; control
/// flow stays with the returned `Result`.
pub type GateCallback = Box<dyn Fn(Option<&str>, &Diagnostic) + Send + Sync>;

/// Fails a record immediately when its diagnostic carries errors.
///
/// Evaluates and reports per record; it never waits for the rest of the
/// stream. With `disabled` set, the gate still reports through its
/// callback but always passes the record (observability without build
/// failure).
#[derive(Default)]
pub struct FailGate {
    options: FailOptions,
    on_end: Option<GateCallback>,
}

impl FailGate {
    /// Creates a gate with the given options.
    pub fn new(options: FailOptions) -> Self {
        Self {
            options,
            on_end: None,
        }
    }

    /// Attaches the completion observer.
    pub fn with_on_end(mut self, on_end: GateCallback) -> Self {
        self.on_end = Some(on_end);
        self
    }

    /// Checks one record.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::FailGate`] when the diagnostic carries errors
    /// and the gate is not disabled. The message lists every file path and
    /// the total error count, pluralized for 1 vs many.
    pub fn check(&self, record: Record) -> Result<Record> {
        let message = {
            let diagnostic =
                match diagnostic_for(&record, STAGE, self.options.tolerate_missing)? {
                    Guarded::PassThrough => return Ok(record),
                    Guarded::Diagnostic(diagnostic) => diagnostic,
                };

            if diagnostic.error_count == 0 {
                if let Some(on_end) = &self.on_end {
                    on_end(None, diagnostic);
                }
                return Ok(record);
            }

            let paths: Vec<&str> = diagnostic
                .results
                .iter()
                .map(|result| result.file_path.as_str())
                .collect();
            let mut message = format!(
                "Fail on error! {} {} in {} {}:\n    {}",
                diagnostic.error_count,
                error_word(diagnostic.error_count),
                paths.len(),
                path_word(paths.len()),
                paths.join("\n    ")
            );
            if !record.rendered {
                message.push_str(FORMAT_HINT);
            }

            if let Some(on_end) = &self.on_end {
                on_end(Some(&message), diagnostic);
            }
            message
        };

        if self.options.disabled {
            return Ok(record);
        }
        Err(Error::FailGate { message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use felix_core::FileResult;
    use std::sync::{Arc, Mutex};

    fn linted_record(path: &str, errors: usize) -> Record {
        let mut record = Record::buffered(path, "var x = 1");
        record.diagnostic = Some(Diagnostic {
            error_count: errors,
            warning_count: 0,
            results: vec![FileResult {
                file_path: path.to_string(),
                error_count: errors,
                ..Default::default()
            }],
            fixed_content: None,
        });
        record
    }

    #[test]
    fn test_clean_record_passes_and_reports_none() {
        let seen = Arc::new(Mutex::new(Vec::<Option<String>>::new()));
        let sink = seen.clone();
        let gate = FailGate::new(FailOptions::default()).with_on_end(Box::new(
            move |message, _| {
                sink.lock().unwrap().push(message.map(str::to_string));
            },
        ));

        let record = gate.check(linted_record("a.js", 0)).unwrap();
        assert!(record.diagnostic.is_some());
        assert_eq!(seen.lock().unwrap().as_slice(), &[None]);
    }

    #[test]
    fn test_single_error_message_is_singular() {
        let gate = FailGate::new(FailOptions::default());
        let err = gate.check(linted_record("a.js", 1)).unwrap_err();
        match err {
            Error::FailGate { message } => {
                assert!(message.starts_with("Fail on error! 1 error in 1 path:"));
                assert!(message.contains("a.js"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_multi_path_message_is_plural() {
        let mut record = linted_record("a.js", 3);
        if let Some(diagnostic) = &mut record.diagnostic {
            diagnostic.results.push(FileResult {
                file_path: "b.js".to_string(),
                error_count: 1,
                ..Default::default()
            });
            diagnostic.error_count = 4;
            diagnostic.results[0].error_count = 3;
        }

        let gate = FailGate::new(FailOptions::default());
        let err = gate.check(record).unwrap_err();
        match err {
            Error::FailGate { message } => {
                assert!(message.contains("4 errors in 2 paths"));
                assert!(message.contains("a.js"));
                assert!(message.contains("b.js"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unrendered_record_gets_format_hint() {
        let gate = FailGate::new(FailOptions::default());
        let err = gate.check(linted_record("a.js", 1)).unwrap_err();
        assert!(err.to_string().contains("Run the format stage"));
    }

    #[test]
    fn test_rendered_record_gets_no_hint() {
        let mut record = linted_record("a.js", 1);
        record.rendered = true;
        let gate = FailGate::new(FailOptions::default());
        let err = gate.check(record).unwrap_err();
        assert!(!err.to_string().contains("Run the format stage"));
    }

    #[test]
    fn test_disabled_gate_reports_but_passes() {
        let seen = Arc::new(Mutex::new(Vec::<Option<String>>::new()));
        let sink = seen.clone();
        let gate = FailGate::new(FailOptions {
            disabled: true,
            ..Default::default()
        })
        .with_on_end(Box::new(move |message, _| {
            sink.lock().unwrap().push(message.map(str::to_string));
        }));

        let record = gate.check(linted_record("a.js", 2)).unwrap();
        assert!(record.diagnostic.is_some());

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].as_deref().unwrap().contains("2 errors"));
    }

    #[test]
    fn test_null_record_passes_without_callback() {
        let called = Arc::new(Mutex::new(false));
        let flag = called.clone();
        let gate = FailGate::new(FailOptions::default()).with_on_end(Box::new(
            move |_, _| {
                *flag.lock().unwrap() = true;
            },
        ));

        gate.check(Record::null("a.js")).unwrap();
        assert!(!*called.lock().unwrap());
    }
}
