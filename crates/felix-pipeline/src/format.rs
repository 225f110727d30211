//! The format stage: render an attached diagnostic to an output sink.

use crate::guard::{diagnostic_for, Guarded};
use crate::options::FormatOptions;
use colored::Colorize;
use felix_core::{Record, Result};
use felix_render::Renderer;
use std::io::{self, Write};
use tracing::debug;

const STAGE: &str = "format";

/// Renders diagnostics to a sink; never lints and never mutates the
/// diagnostic itself.
pub struct FormatStage {
    renderer: Renderer,
    options: FormatOptions,
    sink: Box<dyn Write + Send>,
}

impl FormatStage {
    /// Creates a format stage writing to stdout.
    pub fn new(renderer: Renderer, options: FormatOptions) -> Self {
        Self::with_sink(renderer, options, Box::new(io::stdout()))
    }

    /// Creates a format stage writing to an arbitrary sink.
    pub fn with_sink(
        renderer: Renderer,
        options: FormatOptions,
        sink: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            renderer,
            options,
            sink,
        }
    }

    /// Formats one record.
    ///
    /// Records without errors or warnings produce no rendering, only an
    /// optional happy-file notice. Formatting is idempotent: it depends
    /// only on the diagnostic, not on prior calls.
    ///
    /// # Errors
    ///
    /// A missing diagnostic is a usage error unless `tolerate_missing` is
    /// set; renderer failures surface as pipeline errors.
    pub fn process(&mut self, mut record: Record) -> Result<Record> {
        let output = {
            let diagnostic =
                match diagnostic_for(&record, STAGE, self.options.tolerate_missing)? {
                    Guarded::PassThrough => return Ok(record),
                    Guarded::Diagnostic(diagnostic) => diagnostic,
                };

            if diagnostic.is_happy() {
                if self.options.happy_notices() {
                    let notice = format!("HAPPY FILE > {}", record.path).green();
                    writeln!(self.sink, "{notice}").map_err(|cause| {
                        felix_core::Error::RendererExecution {
                            name: self.renderer.name().to_string(),
                            cause: cause.into(),
                        }
                    })?;
                }
                return Ok(record);
            }

            debug!(path = %record.path, renderer = self.renderer.name(), "rendering diagnostic");
            self.renderer
                .render(&diagnostic.results, &self.options.renderer_options)?
        };

        if let Some(text) = output {
            let mut block = String::new();
            if self.renderer.is_builtin() {
                block.push_str(&format!("{}\n", format!("SAD FILE > {}", record.path).red()));
            }
            block.push_str(&text);
            if !block.ends_with('\n') {
                block.push('\n');
            }
            self.sink.write_all(block.as_bytes()).map_err(|cause| {
                felix_core::Error::RendererExecution {
                    name: self.renderer.name().to_string(),
                    cause: cause.into(),
                }
            })?;
        }

        record.rendered = true;
        Ok(record)
    }
}
