//! Escape decoding for stored translation text.
//!
//! Resource files carry `\n`, `\r` and `\t` as two-character sequences.
//! Any other backslash is kept as-is.

/// Decode `\n`, `\r` and `\t` sequences into their control characters.
///
/// A backslash that does not start one of those sequences is emitted once
/// and the following character is scanned normally, so `\\n` decodes to a
/// backslash followed by a line feed. A trailing backslash is literal.
pub fn unescape(raw: &str) -> String {
    if !raw.contains('\\') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let decoded = match chars.peek() {
            Some('n') => Some('\n'),
            Some('r') => Some('\r'),
            Some('t') => Some('\t'),
            _ => None,
        };
        match decoded {
            Some(control) => {
                out.push(control);
                chars.next();
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(unescape("Hello, world"), "Hello, world");
        assert_eq!(unescape(""), "");
    }

    #[test]
    fn test_known_escapes_decoded() {
        assert_eq!(unescape("a\\nb"), "a\nb");
        assert_eq!(unescape("a\\rb"), "a\rb");
        assert_eq!(unescape("a\\tb"), "a\tb");
        assert_eq!(unescape("\\n\\n"), "\n\n");
    }

    #[test]
    fn test_unknown_escape_keeps_backslash() {
        assert_eq!(unescape("a\\qb"), "a\\qb");
        assert_eq!(unescape("C:\\path"), "C:\\path");
    }

    #[test]
    fn test_trailing_backslash_is_literal() {
        assert_eq!(unescape("end\\"), "end\\");
        assert_eq!(unescape("\\"), "\\");
    }

    #[test]
    fn test_double_backslash_rescans_next_char() {
        // The first backslash is unrecognized, the second starts `\n`.
        assert_eq!(unescape("\\\\n"), "\\\n");
    }

    #[test]
    fn test_multibyte_text_preserved() {
        assert_eq!(unescape("Привет\\tmundo ñ"), "Привет\tmundo ñ");
        assert_eq!(unescape("日本\\"), "日本\\");
    }
}
