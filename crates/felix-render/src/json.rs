//! JSON renderer: the file results serialized verbatim.

use crate::RendererOptions;
use felix_core::FileResult;

pub(crate) fn render(
    results: &[FileResult],
    _options: &RendererOptions,
) -> anyhow::Result<Option<String>> {
    let out = serde_json::to_string_pretty(results)?;
    Ok(Some(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_output_deserializes_back() {
        let results = vec![FileResult {
            file_path: "src/a.js".to_string(),
            error_count: 1,
            warning_count: 0,
            messages: vec![json!({"line": 1, "severity": 2, "message": "unexpected var"})],
        }];

        let out = render(&results, &RendererOptions::default())
            .unwrap()
            .unwrap();
        let back: Vec<FileResult> = serde_json::from_str(&out).unwrap();
        assert_eq!(back, results);
    }
}
