//! The analysis engine seam.
//!
//! The engine itself (rule evaluation, AST traversal) is an external
//! collaborator; felix ships only this trait and the raw output types it
//! converts into [`Diagnostic`](crate::Diagnostic)s.

use std::collections::HashMap;

/// Fully resolved engine configuration.
///
/// Nothing here is left for the engine to default: the caller resolves
/// every option before the lint stage hands the config over.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Whether the engine should compute fixed replacement content.
    pub fix: bool,

    /// Engine-specific settings, passed through opaquely.
    pub settings: HashMap<String, serde_json::Value>,
}

/// Raw, path-agnostic output of one engine invocation.
#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// Total errors across all results.
    pub error_count: usize,

    /// Total warnings across all results.
    pub warning_count: usize,

    /// Per-file results. The engine does not know paths; the lint stage
    /// stamps them afterwards.
    pub results: Vec<EngineFileResult>,
}

/// One per-file result from the engine.
#[derive(Debug, Clone, Default)]
pub struct EngineFileResult {
    /// Errors in this result.
    pub error_count: usize,

    /// Warnings in this result.
    pub warning_count: usize,

    /// Opaque message objects, passed through to renderers verbatim.
    pub messages: Vec<serde_json::Value>,

    /// Fixed replacement text, present when fix mode ran and changed
    /// output.
    pub output: Option<String>,
}

/// Trait for pluggable static-analysis engines.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`; the pipeline may have several
/// records awaiting engine results concurrently.
#[async_trait::async_trait]
pub trait AnalysisEngine: Send + Sync {
    /// Returns the engine name, used in logs.
    fn name(&self) -> &str;

    /// Lints one materialized text buffer.
    ///
    /// # Errors
    ///
    /// Any failure is opaque to the pipeline; it wraps the cause in
    /// [`Error::LinterInvocation`](crate::Error::LinterInvocation) and
    /// halts that record. Engine failures are never retried.
    async fn lint_text(
        &self,
        text: &str,
        config: &EngineConfig,
    ) -> anyhow::Result<EngineOutput>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // Mock engine that flags every line containing "var"
    struct NoVarEngine;

    #[async_trait::async_trait]
    impl AnalysisEngine for NoVarEngine {
        fn name(&self) -> &str {
            "no-var"
        }

        async fn lint_text(
            &self,
            text: &str,
            _config: &EngineConfig,
        ) -> anyhow::Result<EngineOutput> {
            let messages: Vec<serde_json::Value> = text
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains("var"))
                .map(|(i, _)| json!({"line": i + 1, "severity": 2, "message": "unexpected var"}))
                .collect();
            let error_count = messages.len();
            Ok(EngineOutput {
                error_count,
                warning_count: 0,
                results: vec![EngineFileResult {
                    error_count,
                    warning_count: 0,
                    messages,
                    output: None,
                }],
            })
        }
    }

    #[tokio::test]
    async fn test_engine_output_is_path_agnostic() {
        let engine = NoVarEngine;
        let output = engine
            .lint_text("var x = 1\nlet y = 2\n", &EngineConfig::default())
            .await
            .unwrap();

        assert_eq!(output.error_count, 1);
        assert_eq!(output.results.len(), 1);
        assert_eq!(output.results[0].messages[0]["line"], 1);
    }
}
