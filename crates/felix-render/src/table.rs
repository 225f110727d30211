//! Table renderer: aligned columns per file with a totals footer.

use crate::message::{problem_word, Msg};
use crate::RendererOptions;
use felix_core::FileResult;
use std::fmt::Write;

struct Row {
    position: String,
    label: &'static str,
    text: String,
    rule: String,
}

pub(crate) fn render(
    results: &[FileResult],
    _options: &RendererOptions,
) -> anyhow::Result<Option<String>> {
    let mut out = String::new();
    let mut total = 0;

    for result in results {
        if result.messages.is_empty() {
            continue;
        }

        let rows: Vec<Row> = result
            .messages
            .iter()
            .map(|value| {
                let msg = Msg::new(value);
                Row {
                    position: format!("{}:{}", msg.line(), msg.column()),
                    label: if msg.is_error() { "error" } else { "warning" },
                    text: msg.text().to_string(),
                    rule: msg.rule_id().unwrap_or("").to_string(),
                }
            })
            .collect();
        total += rows.len();

        let position_width = rows.iter().map(|r| r.position.len()).max().unwrap_or(0);
        let text_width = rows.iter().map(|r| r.text.len()).max().unwrap_or(0);

        writeln!(out, "{}", result.file_path)?;
        for row in &rows {
            writeln!(
                out,
                "  {:>position_width$} | {:<7} | {:<text_width$} | {}",
                row.position, row.label, row.text, row.rule
            )?;
        }
        out.push('\n');
    }

    if total == 0 {
        return Ok(None);
    }
    write!(out, "{} {}", total, problem_word(total))?;
    Ok(Some(out))
}
