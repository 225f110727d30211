//! Felix Render - Built-in diagnostic renderers and the renderer registry.
//!
//! Renderers turn the per-file results of a
//! [`Diagnostic`](felix_core::Diagnostic) into human-readable text. The
//! built-in set is a closed, enumerated registry resolved by keyword at
//! init time; custom renderers are plain closures with the same signature.
//! There is no dynamic loading by module path.

mod compact;
mod json;
mod message;
mod stylish;
mod table;
mod tap;
mod unix;

use felix_core::{Error, FileResult, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Opaque renderer options, passed through to the renderer verbatim.
pub type RendererOptions = HashMap<String, serde_json::Value>;

/// Function signature shared by built-in and custom renderers.
///
/// Returns `Ok(None)` when the renderer produced no textual output (its
/// side effects, if any, are its own business).
pub type RendererFn = fn(&[FileResult], &RendererOptions) -> anyhow::Result<Option<String>>;

/// The closed set of built-in renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinRenderer {
    /// Human-friendly per-file listing; what the `default` keyword
    /// resolves to.
    Stylish,
    /// One line per message.
    Compact,
    /// File results serialized as JSON.
    Json,
    /// Aligned columns per file.
    Table,
    /// TAP test points.
    Tap,
    /// `path:line:col:` lines.
    Unix,
}

impl BuiltinRenderer {
    /// The keyword that resolves to the default renderer.
    pub const DEFAULT_KEYWORD: &'static str = "default";

    /// All built-in renderers in a consistent order.
    pub fn all() -> &'static [BuiltinRenderer] {
        &[
            BuiltinRenderer::Stylish,
            BuiltinRenderer::Compact,
            BuiltinRenderer::Json,
            BuiltinRenderer::Table,
            BuiltinRenderer::Tap,
            BuiltinRenderer::Unix,
        ]
    }

    /// Returns the registry keyword for this renderer.
    pub fn name(self) -> &'static str {
        match self {
            BuiltinRenderer::Stylish => "stylish",
            BuiltinRenderer::Compact => "compact",
            BuiltinRenderer::Json => "json",
            BuiltinRenderer::Table => "table",
            BuiltinRenderer::Tap => "tap",
            BuiltinRenderer::Unix => "unix",
        }
    }

    /// Looks up a renderer by registry keyword.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().find(|r| r.name() == name).copied()
    }

    fn render_fn(self) -> RendererFn {
        match self {
            BuiltinRenderer::Stylish => stylish::render,
            BuiltinRenderer::Compact => compact::render,
            BuiltinRenderer::Json => json::render,
            BuiltinRenderer::Table => table::render,
            BuiltinRenderer::Tap => tap::render,
            BuiltinRenderer::Unix => unix::render,
        }
    }
}

/// A resolvable renderer: a built-in keyword or a caller-supplied closure.
#[derive(Clone)]
pub enum Renderer {
    /// One of the closed built-in set.
    Builtin(BuiltinRenderer),
    /// Caller-supplied renderer with the built-in signature.
    Custom(Arc<dyn Fn(&[FileResult], &RendererOptions) -> anyhow::Result<Option<String>> + Send + Sync>),
}

impl Renderer {
    /// Resolves a keyword against the built-in registry.
    ///
    /// The literal `default` resolves to [`BuiltinRenderer::Stylish`].
    ///
    /// # Errors
    ///
    /// Unknown keywords fail with [`Error::FormatterResolution`].
    pub fn resolve(keyword: &str) -> Result<Self> {
        if keyword == BuiltinRenderer::DEFAULT_KEYWORD {
            return Ok(Self::default());
        }
        BuiltinRenderer::from_name(keyword)
            .map(Renderer::Builtin)
            .ok_or_else(|| Error::FormatterResolution {
                name: keyword.to_string(),
            })
    }

    /// Wraps a caller-supplied renderer function.
    pub fn custom<F>(renderer: F) -> Self
    where
        F: Fn(&[FileResult], &RendererOptions) -> anyhow::Result<Option<String>>
            + Send
            + Sync
            + 'static,
    {
        Renderer::Custom(Arc::new(renderer))
    }

    /// Returns the renderer's name for logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Renderer::Builtin(builtin) => builtin.name(),
            Renderer::Custom(_) => "custom",
        }
    }

    /// Whether this renderer came from the built-in registry.
    pub fn is_builtin(&self) -> bool {
        matches!(self, Renderer::Builtin(_))
    }

    /// Renders file results to text.
    ///
    /// # Errors
    ///
    /// Renderer failures surface as [`Error::RendererExecution`]; they are
    /// never silently swallowed.
    pub fn render(
        &self,
        results: &[FileResult],
        options: &RendererOptions,
    ) -> Result<Option<String>> {
        let outcome = match self {
            Renderer::Builtin(builtin) => builtin.render_fn()(results, options),
            Renderer::Custom(renderer) => renderer(results, options),
        };
        outcome.map_err(|cause| Error::RendererExecution {
            name: self.name().to_string(),
            cause,
        })
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::Builtin(BuiltinRenderer::Stylish)
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Renderer::Builtin(builtin) => f.debug_tuple("Builtin").field(builtin).finish(),
            Renderer::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
