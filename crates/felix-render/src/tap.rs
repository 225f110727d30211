//! TAP renderer: one test point per file result.

use crate::message::Msg;
use crate::RendererOptions;
use felix_core::FileResult;
use std::fmt::Write;

pub(crate) fn render(
    results: &[FileResult],
    _options: &RendererOptions,
) -> anyhow::Result<Option<String>> {
    if results.is_empty() {
        return Ok(None);
    }

    let mut out = String::new();
    writeln!(out, "TAP version 13")?;
    writeln!(out, "1..{}", results.len())?;

    for (index, result) in results.iter().enumerate() {
        let point = index + 1;
        if result.error_count == 0 && result.warning_count == 0 {
            writeln!(out, "ok {} - {}", point, result.file_path)?;
            continue;
        }

        writeln!(out, "not ok {} - {}", point, result.file_path)?;
        if let Some(value) = result.messages.first() {
            let msg = Msg::new(value);
            writeln!(out, "  ---")?;
            writeln!(out, "  message: {}", msg.text())?;
            writeln!(
                out,
                "  severity: {}",
                if msg.is_error() { "error" } else { "warning" }
            )?;
            writeln!(out, "  data:")?;
            writeln!(out, "    line: {}", msg.line())?;
            writeln!(out, "    column: {}", msg.column())?;
            if let Some(rule) = msg.rule_id() {
                writeln!(out, "    ruleId: {rule}")?;
            }
            writeln!(out, "  ...")?;
        }
    }

    Ok(Some(out))
}
