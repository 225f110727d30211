//! The in-flight representation of one source unit.

use crate::diagnostic::Diagnostic;

/// Payload representation of a record's content.
///
/// The three-way split mirrors what streaming build hosts hand us: a record
/// may carry no content at all, a fully materialized text buffer, or a
/// backing stream that stays with the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// No content. The record passes through the pipeline untouched.
    Null,

    /// Fully materialized text, replaceable in place by auto-fix.
    Buffered(String),

    /// Stream-backed content. The backing handle stays with the external
    /// host; the analysis engine requires a materialized buffer, so these
    /// records are never processable.
    Stream,
}

/// One file-like unit flowing through the pipeline.
#[derive(Debug, Clone)]
pub struct Record {
    /// Identifying string, used in messages only.
    pub path: String,

    /// The record's content.
    pub payload: Payload,

    /// Analysis result, absent until the lint stage has run.
    pub diagnostic: Option<Diagnostic>,

    /// Whether a renderer has produced output for this record.
    ///
    /// Fail messages append a "run the format stage" hint when this is
    /// still false.
    pub rendered: bool,
}

impl Record {
    /// Creates a record with buffered text content.
    pub fn buffered(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            payload: Payload::Buffered(content.into()),
            diagnostic: None,
            rendered: false,
        }
    }

    /// Creates a record with no content.
    pub fn null(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            payload: Payload::Null,
            diagnostic: None,
            rendered: false,
        }
    }

    /// Creates a record whose content is stream-backed.
    pub fn stream(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            payload: Payload::Stream,
            diagnostic: None,
            rendered: false,
        }
    }

    /// Returns the buffered text, if the payload is materialized.
    pub fn text(&self) -> Option<&str> {
        match &self.payload {
            Payload::Buffered(text) => Some(text.as_str()),
            Payload::Null | Payload::Stream => None,
        }
    }

    /// Replaces the buffered content in place.
    ///
    /// Only the auto-fix path calls this, and only for the record currently
    /// being processed.
    pub fn replace_content(&mut self, content: String) {
        self.payload = Payload::Buffered(content);
    }
}
