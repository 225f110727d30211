//! Compact renderer: one line per message plus a problem total.

use crate::message::{problem_word, Msg};
use crate::RendererOptions;
use felix_core::FileResult;
use std::fmt::Write;

pub(crate) fn render(
    results: &[FileResult],
    _options: &RendererOptions,
) -> anyhow::Result<Option<String>> {
    let mut out = String::new();
    let mut total = 0;

    for result in results {
        for value in &result.messages {
            let msg = Msg::new(value);
            total += 1;
            let label = if msg.is_error() { "Error" } else { "Warning" };
            write!(
                out,
                "{}: line {}, col {}, {} - {}",
                result.file_path,
                msg.line(),
                msg.column(),
                label,
                msg.text()
            )?;
            if let Some(rule) = msg.rule_id() {
                write!(out, " ({rule})")?;
            }
            out.push('\n');
        }
    }

    if total == 0 {
        return Ok(None);
    }
    write!(out, "\n{} {}", total, problem_word(total))?;
    Ok(Some(out))
}
