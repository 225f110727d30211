//! Wording helpers for fail messages.

/// Appended to fail messages when no renderer has produced output yet.
pub(crate) const FORMAT_HINT: &str =
    "\n    Info:\n    Run the format stage for more information about errors";

/// "error" or "errors".
pub(crate) fn error_word(count: usize) -> &'static str {
    if count == 1 {
        "error"
    } else {
        "errors"
    }
}

/// "path" or "paths".
pub(crate) fn path_word(count: usize) -> &'static str {
    if count == 1 {
        "path"
    } else {
        "paths"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralization() {
        assert_eq!(error_word(1), "error");
        assert_eq!(error_word(0), "errors");
        assert_eq!(error_word(2), "errors");
        assert_eq!(path_word(1), "path");
        assert_eq!(path_word(3), "paths");
    }
}
