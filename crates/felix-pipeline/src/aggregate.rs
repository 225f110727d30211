//! The deferred fail aggregator: cross-stream accumulation, one decision
//! at end-of-stream.

use crate::guard::{diagnostic_for, Guarded};
use crate::options::FailOptions;
use crate::text::{error_word, path_word, FORMAT_HINT};
use felix_core::{Error, Record, Result};
use parking_lot::Mutex;

const STAGE: &str = "fail-after-error";

/// Optional completion observer: receives the failure message (or `None`
/// on a clean stream), the total error count, and the accumulated
/// per-file entries.
pub type AfterCallback = Box<dyn Fn(Option<&str>, usize, &[(String, usize)]) + Send + Sync>;

/// Accumulated error state for one pipeline run.
///
/// Entries keep first-seen order, which under concurrent lint completion
/// is completion order, not submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateState {
    /// Running error total across all observed records.
    pub total_error_count: usize,

    /// `(file path, error count)` per errored file result, in first-seen
    /// order.
    pub per_file: Vec<(String, usize)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Open,
    Flushing,
    Closed,
}

struct Inner {
    phase: Phase,
    state: AggregateState,
    saw_unrendered: bool,
}

/// Defers the failure decision to end-of-stream.
///
/// This stage is a sink: observed records are consumed, never forwarded.
/// One instance covers exactly one pipeline run; flushing twice is an
/// invalid call. All mutation goes through a mutex so overlapping record
/// completions cannot lose updates.
pub struct FailAfter {
    options: FailOptions,
    on_end: Option<AfterCallback>,
    inner: Mutex<Inner>,
}

impl FailAfter {
    /// Creates an open aggregator.
    pub fn new(options: FailOptions) -> Self {
        Self {
            options,
            on_end: None,
            inner: Mutex::new(Inner {
                phase: Phase::Open,
                state: AggregateState::default(),
                saw_unrendered: false,
            }),
        }
    }

    /// Attaches the completion observer.
    pub fn with_on_end(mut self, on_end: AfterCallback) -> Self {
        self.on_end = Some(on_end);
        self
    }

    /// Observes one record and consumes it.
    ///
    /// Clean diagnostics are dropped without touching the state; errored
    /// ones add to the running total and the per-file entries.
    ///
    /// # Errors
    ///
    /// Observing after [`flush`](Self::flush) fails with
    /// [`Error::AlreadyFlushed`]; the missing-diagnostic precondition
    /// matches the other diagnostic-consuming stages.
    pub fn observe(&self, record: Record) -> Result<()> {
        let diagnostic =
            match diagnostic_for(&record, STAGE, self.options.tolerate_missing)? {
                Guarded::PassThrough => return Ok(()),
                Guarded::Diagnostic(diagnostic) => diagnostic,
            };

        let mut inner = self.inner.lock();
        if inner.phase != Phase::Open {
            return Err(Error::AlreadyFlushed);
        }
        if diagnostic.error_count == 0 {
            return Ok(());
        }

        inner.state.total_error_count += diagnostic.error_count;
        for result in &diagnostic.results {
            if result.error_count > 0 {
                inner
                    .state
                    .per_file
                    .push((result.file_path.clone(), result.error_count));
            }
        }
        if !record.rendered {
            inner.saw_unrendered = true;
        }
        Ok(())
    }

    /// Flushes at end-of-stream, consuming the accumulated state.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::FailAfter`] when the total error count is
    /// positive and the aggregator is not disabled. A second flush fails
    /// with [`Error::AlreadyFlushed`].
    pub fn flush(&self) -> Result<AggregateState> {
        let mut inner = self.inner.lock();
        if inner.phase != Phase::Open {
            return Err(Error::AlreadyFlushed);
        }
        inner.phase = Phase::Flushing;

        let state = std::mem::take(&mut inner.state);
        let saw_unrendered = inner.saw_unrendered;
        inner.phase = Phase::Closed;
        drop(inner);

        if state.total_error_count == 0 {
            if let Some(on_end) = &self.on_end {
                on_end(None, 0, &[]);
            }
            return Ok(state);
        }

        let entries: Vec<String> = state
            .per_file
            .iter()
            .map(|(path, count)| {
                format!("has {} {} in {}", count, error_word(*count), path)
            })
            .collect();
        let mut message = format!(
            "Fail after error! {} {} in {} {}:\n    {}",
            state.total_error_count,
            error_word(state.total_error_count),
            state.per_file.len(),
            path_word(state.per_file.len()),
            entries.join("\n    ")
        );
        if saw_unrendered {
            message.push_str(FORMAT_HINT);
        }

        if let Some(on_end) = &self.on_end {
            on_end(Some(&message), state.total_error_count, &state.per_file);
        }

        if self.options.disabled {
            return Ok(state);
        }
        Err(Error::FailAfter { message })
    }
}
