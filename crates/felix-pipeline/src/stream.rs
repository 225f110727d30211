//! Driving a stream of records through the lint stage.

use crate::invoker::LintStage;
use felix_core::{Record, Result};
use futures::stream::{Stream, StreamExt};

/// Maps a record stream through [`LintStage::process`] with up to
/// `concurrency` records in flight.
///
/// Results are yielded in completion order, not submission order; each
/// record's diagnostic is stamped with its own path regardless. A failed
/// record yields its error without cancelling the rest of the stream —
/// aborting siblings is the caller's policy.
pub fn lint_stream<'a, S>(
    records: S,
    stage: &'a LintStage,
    concurrency: usize,
) -> impl Stream<Item = Result<Record>> + 'a
where
    S: Stream<Item = Record> + Send + 'a,
{
    records
        .map(move |record| stage.process(record))
        .buffer_unordered(concurrency.max(1))
}
