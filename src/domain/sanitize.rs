//! Free-text normalization for task fields
//!
//! Titles and descriptions are collapsed to single-spaced, trimmed text and
//! cut to their field limit before validation sees them. Every function here
//! is idempotent.

use super::task::{MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH};

/// Normalizes a title. Absent input becomes the empty string.
pub fn normalize_title(raw: Option<&str>) -> String {
    normalize(raw.unwrap_or_default(), MAX_TITLE_LENGTH)
}

/// Normalizes a description. Absent input stays absent; an empty one stays empty.
pub fn normalize_description(raw: Option<&str>) -> Option<String> {
    raw.map(|value| normalize(value, MAX_DESCRIPTION_LENGTH))
}

/// Decodes bytes as UTF-8, dropping any invalid sequences
pub fn decode_lossy(bytes: &[u8]) -> String {
    bytes
        .utf8_chunks()
        .map(|chunk| chunk.valid())
        .collect()
}

/// ASCII whitespace, vertical tab included. Non-breaking and other Unicode
/// spaces are kept as text.
fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

fn normalize(value: &str, max_length: usize) -> String {
    let collapsed = value
        .split(is_blank)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if collapsed.chars().count() <= max_length {
        return collapsed;
    }

    // Cutting can leave a trailing separator behind
    let truncated: String = collapsed.chars().take(max_length).collect();
    truncated.trim_end_matches(' ').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn title_collapses_whitespace() {
        assert_eq!(
            normalize_title(Some("  Title   with  spaces \n")),
            "Title with spaces"
        );
        assert_eq!(normalize_title(Some("line\r\nbreak\ttab")), "line break tab");
    }

    #[test]
    fn unicode_spaces_are_kept() {
        assert_eq!(normalize_title(Some("\u{a0}a\u{a0} \x0B b ")), "\u{a0}a\u{a0} b");
        assert_eq!(normalize_description(Some("x\u{2003}y")), Some("x\u{2003}y".to_string()));
    }

    #[test]
    fn missing_title_is_empty() {
        assert_eq!(normalize_title(None), "");
    }

    #[test]
    fn description_keeps_absence() {
        assert_eq!(normalize_description(None), None);
        assert_eq!(normalize_description(Some("   ")), Some(String::new()));
    }

    #[test]
    fn description_truncates() {
        let long = "a".repeat(MAX_DESCRIPTION_LENGTH + 10);
        let result = normalize_description(Some(long.as_str())).unwrap();
        assert_eq!(result.chars().count(), MAX_DESCRIPTION_LENGTH);
    }

    #[test]
    fn title_truncates_by_characters() {
        let long = "ü".repeat(MAX_TITLE_LENGTH + 1);
        assert_eq!(normalize_title(Some(long.as_str())).chars().count(), MAX_TITLE_LENGTH);
    }

    #[test]
    fn truncation_does_not_leave_trailing_space() {
        let raw = format!("{} tail", "a".repeat(MAX_TITLE_LENGTH - 1));
        let result = normalize_title(Some(raw.as_str()));
        assert_eq!(result, "a".repeat(MAX_TITLE_LENGTH - 1));
    }

    #[test]
    fn decode_drops_invalid_bytes() {
        assert_eq!(decode_lossy(b"ok\xff\xfe text"), "ok text");
        assert_eq!(decode_lossy("naïve".as_bytes()), "naïve");
    }

    proptest! {
        #[test]
        fn title_is_idempotent(raw in "\\PC{0,300}") {
            let once = normalize_title(Some(raw.as_str()));
            prop_assert_eq!(normalize_title(Some(once.as_str())), once);
        }

        #[test]
        fn description_is_idempotent(raw in "[a-z \t\r\n]{0,2100}") {
            let once = normalize_description(Some(raw.as_str()));
            prop_assert_eq!(normalize_description(once.as_deref()), once);
        }
    }
}
