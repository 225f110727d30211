//! Record classification.
//!
//! Every stage that needs a diagnostic runs the same check before touching
//! a record, guarding against records reaching a stage out of order.

use crate::record::{Payload, Record};
use tracing::debug;

/// Why a record is skipped rather than processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The record carries no content.
    NullPayload,

    /// The record's buffer is empty.
    EmptyContent,
}

/// Classification outcome for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The record is processable.
    Proceed,

    /// Pass the record through untouched; not an error.
    Skip(SkipReason),

    /// Stream-backed payload; fatal for this record.
    Unsupported,
}

/// Decides whether a record is processable, skippable, or unsupported.
pub fn classify(record: &Record) -> Outcome {
    match &record.payload {
        Payload::Null => {
            debug!(path = %record.path, "skipping record with null payload");
            Outcome::Skip(SkipReason::NullPayload)
        }
        Payload::Stream => Outcome::Unsupported,
        Payload::Buffered(text) if text.is_empty() => {
            debug!(path = %record.path, "skipping record with empty content");
            Outcome::Skip(SkipReason::EmptyContent)
        }
        Payload::Buffered(_) => Outcome::Proceed,
    }
}
