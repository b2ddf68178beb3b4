//! Shared text helpers for console and TUI rendering.

/// Truncate to `max_len` characters, appending "..." when cut.
/// Respects UTF-8 character boundaries.
pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Collapse whitespace runs and newlines into single spaces, then truncate.
pub fn normalize_and_clean(text: &str, max_chars: usize) -> String {
    let normalized = text
        .replace(['\n', '\r'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    truncate(normalized.trim(), max_chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn truncate_respects_multibyte_chars() {
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(
            normalize_and_clean("a\n b\r\n   c", 20),
            "a b c"
        );
    }
}
