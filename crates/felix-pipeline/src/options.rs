//! Per-stage options.
//!
//! Every option is carried explicitly by the stage instance that uses it;
//! there is no process-wide state. `silent` on one stage says nothing about
//! its siblings.

use felix_core::EngineConfig;
use felix_render::RendererOptions;
use std::collections::HashMap;

/// Options for the lint stage.
#[derive(Debug, Clone, Default)]
pub struct LintOptions {
    /// Fix mode: ask the engine for replacement content and overwrite the
    /// record's payload with it.
    pub fix: bool,

    /// Engine-specific settings, resolved fully before the engine sees
    /// them.
    pub settings: HashMap<String, serde_json::Value>,
}

impl LintOptions {
    /// Builds the fully resolved config handed to the engine.
    pub(crate) fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            fix: self.fix,
            settings: self.settings.clone(),
        }
    }
}

/// Options for the format stage.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Suppress informational output from this stage.
    pub silent: bool,

    /// Log a notice for records whose diagnostic is clean. Forced off by
    /// `silent`; never inferred from it.
    pub show_happy_files: bool,

    /// Treat a missing diagnostic as a logged warning and pass the record
    /// through, instead of failing with a usage error.
    pub tolerate_missing: bool,

    /// Options passed through to the renderer verbatim.
    pub renderer_options: RendererOptions,
}

impl FormatOptions {
    /// Whether happy-file notices are active once `silent` is applied.
    pub(crate) fn happy_notices(&self) -> bool {
        self.show_happy_files && !self.silent
    }
}

/// Options shared by the fail gate and the fail-after aggregator.
#[derive(Debug, Clone, Default)]
pub struct FailOptions {
    /// Observe and report, but never fail: the completion callback still
    /// fires with the message, and the record (or run) passes.
    pub disabled: bool,

    /// Treat a missing diagnostic as a logged warning instead of a usage
    /// error.
    pub tolerate_missing: bool,
}
