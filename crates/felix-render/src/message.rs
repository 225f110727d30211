//! Lenient view over opaque engine messages.
//!
//! The pipeline passes messages through verbatim; renderers read the
//! conventional fields (`line`, `column`, `severity`, `message`, `ruleId`)
//! and render blanks or defaults where a field is absent.

use serde_json::Value;

/// Borrowed view over one opaque message value.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Msg<'a>(&'a Value);

impl<'a> Msg<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self(value)
    }

    pub fn line(&self) -> u64 {
        self.0.get("line").and_then(Value::as_u64).unwrap_or(0)
    }

    pub fn column(&self) -> u64 {
        self.0.get("column").and_then(Value::as_u64).unwrap_or(0)
    }

    /// Severity 2 means error, anything else a warning. An absent severity
    /// counts as an error rather than quietly downgrading it.
    pub fn is_error(&self) -> bool {
        self.0.get("severity").and_then(Value::as_u64).unwrap_or(2) == 2
    }

    pub fn text(&self) -> &'a str {
        self.0.get("message").and_then(Value::as_str).unwrap_or("")
    }

    pub fn rule_id(&self) -> Option<&'a str> {
        self.0.get("ruleId").and_then(Value::as_str)
    }
}

/// "problem" or "problems".
pub(crate) fn problem_word(count: usize) -> &'static str {
    if count == 1 {
        "problem"
    } else {
        "problems"
    }
}
