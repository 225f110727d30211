//! Structured analysis results attached to records.

use crate::engine::EngineOutput;
use serde::{Deserialize, Serialize};

/// Result of analyzing one record.
///
/// Invariant: `error_count` equals the sum of the per-file error counts in
/// `results`; likewise for warnings. [`Diagnostic::counts_consistent`]
/// checks it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Total number of errors across all file results.
    pub error_count: usize,

    /// Total number of warnings across all file results.
    pub warning_count: usize,

    /// Per-file detail, normally exactly one entry matching the
    /// originating record.
    pub results: Vec<FileResult>,

    /// Replacement payload when auto-fix ran and changed output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_content: Option<String>,
}

/// Per-file detail inside a [`Diagnostic`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileResult {
    /// Path of the owning record, stamped by the lint stage. The engine
    /// itself is path-agnostic.
    pub file_path: String,

    /// Number of errors in this file.
    pub error_count: usize,

    /// Number of warnings in this file.
    pub warning_count: usize,

    /// Opaque message objects from the engine, passed through unmodified.
    /// Renderers may look inside; the pipeline never does.
    pub messages: Vec<serde_json::Value>,
}

impl Diagnostic {
    /// Builds a diagnostic from raw engine output, stamping `path` onto
    /// every file result.
    ///
    /// The fixed content, when the engine produced any, is taken from the
    /// first file result.
    pub fn from_engine(output: EngineOutput, path: &str) -> Self {
        let mut fixed_content = None;
        let results = output
            .results
            .into_iter()
            .map(|result| {
                if fixed_content.is_none() {
                    fixed_content = result.output;
                }
                FileResult {
                    file_path: path.to_string(),
                    error_count: result.error_count,
                    warning_count: result.warning_count,
                    messages: result.messages,
                }
            })
            .collect();

        Self {
            error_count: output.error_count,
            warning_count: output.warning_count,
            results,
            fixed_content,
        }
    }

    /// Whether this diagnostic carries no errors and no warnings.
    pub fn is_happy(&self) -> bool {
        self.error_count + self.warning_count == 0
    }

    /// Whether the totals match the per-file sums.
    pub fn counts_consistent(&self) -> bool {
        let errors: usize = self.results.iter().map(|r| r.error_count).sum();
        let warnings: usize = self.results.iter().map(|r| r.warning_count).sum();
        self.error_count == errors && self.warning_count == warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineFileResult;
    use serde_json::json;

    #[test]
    fn test_from_engine_stamps_path_on_every_result() {
        let output = EngineOutput {
            error_count: 3,
            warning_count: 1,
            results: vec![
                EngineFileResult {
                    error_count: 2,
                    warning_count: 0,
                    messages: vec![json!({"message": "bad"})],
                    output: None,
                },
                EngineFileResult {
                    error_count: 1,
                    warning_count: 1,
                    messages: vec![],
                    output: None,
                },
            ],
        };

        let diagnostic = Diagnostic::from_engine(output, "src/a.js");
        assert_eq!(diagnostic.results.len(), 2);
        for result in &diagnostic.results {
            assert_eq!(result.file_path, "src/a.js");
        }
        assert!(diagnostic.counts_consistent());
    }

    #[test]
    fn test_from_engine_takes_fixed_content_from_first_result() {
        let output = EngineOutput {
            error_count: 0,
            warning_count: 0,
            results: vec![EngineFileResult {
                output: Some("var x = 1\n".to_string()),
                ..Default::default()
            }],
        };

        let diagnostic = Diagnostic::from_engine(output, "a.js");
        assert_eq!(diagnostic.fixed_content.as_deref(), Some("var x = 1\n"));
        assert!(diagnostic.is_happy());
    }

    #[test]
    fn test_counts_consistent_detects_mismatch() {
        let diagnostic = Diagnostic {
            error_count: 5,
            warning_count: 0,
            results: vec![FileResult {
                file_path: "a.js".to_string(),
                error_count: 2,
                ..Default::default()
            }],
            fixed_content: None,
        };
        assert!(!diagnostic.counts_consistent());
    }

    #[test]
    fn test_diagnostic_serialization_round_trip() {
        let diagnostic = Diagnostic {
            error_count: 1,
            warning_count: 0,
            results: vec![FileResult {
                file_path: "a.js".to_string(),
                error_count: 1,
                warning_count: 0,
                messages: vec![json!({"line": 3, "message": "unexpected var"})],
            }],
            fixed_content: None,
        };

        let text = serde_json::to_string(&diagnostic).unwrap();
        let back: Diagnostic = serde_json::from_str(&text).unwrap();
        assert_eq!(diagnostic, back);
    }
}
