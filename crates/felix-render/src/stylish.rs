//! Stylish renderer: the human-friendly default, grouped per file with a
//! colored summary line.

use crate::message::Msg;
use crate::RendererOptions;
use colored::Colorize;
use felix_core::FileResult;
use std::fmt::Write;

pub(crate) fn render(
    results: &[FileResult],
    _options: &RendererOptions,
) -> anyhow::Result<Option<String>> {
    let mut out = String::new();
    let mut errors = 0;
    let mut warnings = 0;

    for result in results {
        if result.messages.is_empty() {
            continue;
        }
        writeln!(out, "{}", result.file_path.underline())?;

        // Align positions within one file block
        let width = result
            .messages
            .iter()
            .map(|value| {
                let msg = Msg::new(value);
                format!("{}:{}", msg.line(), msg.column()).len()
            })
            .max()
            .unwrap_or(0);

        for value in &result.messages {
            let msg = Msg::new(value);
            let position = format!("{}:{}", msg.line(), msg.column());
            let label = if msg.is_error() {
                errors += 1;
                "error".red()
            } else {
                warnings += 1;
                "warning".yellow()
            };
            write!(
                out,
                "  {:>width$}  {:<7}  {}",
                position.dimmed(),
                label,
                msg.text()
            )?;
            if let Some(rule) = msg.rule_id() {
                write!(out, "  {}", rule.dimmed())?;
            }
            out.push('\n');
        }
        out.push('\n');
    }

    let total = errors + warnings;
    if total == 0 {
        return Ok(None);
    }

    let summary = format!(
        "\u{2716} {} problem{} ({} error{}, {} warning{})",
        total,
        if total == 1 { "" } else { "s" },
        errors,
        if errors == 1 { "" } else { "s" },
        warnings,
        if warnings == 1 { "" } else { "s" },
    );
    if errors > 0 {
        writeln!(out, "{}", summary.red().bold())?;
    } else {
        writeln!(out, "{}", summary.yellow().bold())?;
    }
    Ok(Some(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_groups_by_file_with_summary() {
        colored::control::set_override(false);
        let results = vec![FileResult {
            file_path: "src/a.js".to_string(),
            error_count: 1,
            warning_count: 1,
            messages: vec![
                json!({"line": 1, "column": 1, "severity": 2, "message": "unexpected var", "ruleId": "no-var"}),
                json!({"line": 10, "column": 3, "severity": 1, "message": "console statement"}),
            ],
        }];

        let out = render(&results, &RendererOptions::default())
            .unwrap()
            .unwrap();
        assert!(out.contains("src/a.js"));
        assert!(out.contains("unexpected var"));
        assert!(out.contains("\u{2716} 2 problems (1 error, 1 warning)"));
    }

    #[test]
    fn test_message_free_results_render_nothing() {
        let results = vec![FileResult {
            file_path: "src/a.js".to_string(),
            ..Default::default()
        }];
        assert!(render(&results, &RendererOptions::default())
            .unwrap()
            .is_none());
    }
}
