//! Line-oriented dotenv parsing.
//!
//! Responsibilities:
//! - Split file content on `\n`, `\r` and `\r\n`.
//! - Classify each line as comment, malformed, or `KEY=VALUE`.
//! - Unquote and unescape values.
//!
//! Does NOT handle:
//! - Writing into the environment store (see `DotEnv::config`).
//!
//! Invariants:
//! - Only a `#` at column 0 starts a comment; a later `#` is part of the value.
//! - Lines without `=` are skipped silently.
//! - Keys are everything before the first `=`, untrimmed and unvalidated.
//! - Keys already present in the store are skipped at parse time.
//! - Unquoted values are trimmed of ECMAScript whitespace; a value wrapped in matching single or double
//!   quotes keeps its interior whitespace and has `\n` turned into a newline.
//! - Later lines overwrite earlier ones for the same key.

use crate::constants::{ASSIGN_CHAR, COMMENT_CHAR, ESCAPED_NEWLINE};
use crate::store::EnvStore;
use crate::types::ParsedEnv;

/// Split text into lines on any of `\n`, `\r`, `\r\n`.
///
/// A trailing line break does not produce a trailing empty line.
pub fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = content.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&content[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&content[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < bytes.len() {
        lines.push(&content[start..]);
    }
    lines
}

/// Parse a single line into a `(key, value)` pair.
///
/// Returns `None` for comments, lines without `=`, and keys already present
/// in `store`.
pub fn parse_line(line: &str, store: &impl EnvStore) -> Option<(String, String)> {
    if line.starts_with(COMMENT_CHAR) {
        return None;
    }

    let (key, raw_value) = line.split_once(ASSIGN_CHAR)?;
    if store.contains(key) {
        return None;
    }

    Some((key.to_string(), unquote(raw_value.trim_matches(is_value_space))))
}

/// Whitespace stripped around values: the ECMAScript WhiteSpace and
/// LineTerminator sets. Unlike `char::is_whitespace` this includes U+FEFF and
/// excludes U+0085.
fn is_value_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Parse whole file content into a mapping, consulting `store` for precedence.
pub fn parse_content(content: &str, store: &impl EnvStore) -> ParsedEnv {
    let mut parsed = ParsedEnv::new();
    for line in split_lines(content) {
        if let Some((key, value)) = parse_line(line, store) {
            parsed.insert(key, value);
        }
    }
    parsed
}

/// Strip a full-span quote pair and expand `\n`; otherwise return the value as is.
fn unquote(value: &str) -> String {
    for quote in ['\'', '"'] {
        if let Some(inner) = strip_quotes(value, quote) {
            return inner.replace(ESCAPED_NEWLINE, "\n");
        }
    }
    value.to_string()
}

fn strip_quotes(value: &str, quote: char) -> Option<&str> {
    if value.len() < 2 * quote.len_utf8() {
        return None;
    }
    value.strip_prefix(quote)?.strip_suffix(quote)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryEnv;

    fn parse(line: &str) -> Option<(String, String)> {
        parse_line(line, &MemoryEnv::new())
    }

    fn value(line: &str) -> String {
        parse(line).expect("line should parse").1
    }

    #[test]
    fn test_split_lines_all_line_endings() {
        assert_eq!(split_lines("A=1\nB=2\r\nC=3\rD=4"), ["A=1", "B=2", "C=3", "D=4"]);
    }

    #[test]
    fn test_split_lines_keeps_blank_lines() {
        assert_eq!(split_lines("A=1\n\nB=2\n"), ["A=1", "", "B=2"]);
        assert_eq!(split_lines("\r\n"), [""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_comment_only_at_column_zero() {
        assert_eq!(parse("# comment"), None);
        assert_eq!(parse("#KEY=value"), None);
        assert_eq!(
            parse(" # not a comment=value"),
            Some((" # not a comment".to_string(), "value".to_string()))
        );
        assert_eq!(value("URL=http://host/#anchor"), "http://host/#anchor");
        assert_eq!(value("KEY=value # trailing"), "value # trailing");
    }

    #[test]
    fn test_line_without_equals_is_skipped() {
        assert_eq!(parse("NO_EQUALS_HERE"), None);
        assert_eq!(parse(""), None);
        assert_eq!(parse("   "), None);
    }

    #[test]
    fn test_key_is_everything_before_first_equals() {
        assert_eq!(
            parse("KEY WITH SPACES =a=b"),
            Some(("KEY WITH SPACES ".to_string(), "a=b".to_string()))
        );
        assert_eq!(parse("=orphan"), Some((String::new(), "orphan".to_string())));
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(value("EMPTY="), "");
        assert_eq!(value("EMPTY=   "), "");
    }

    #[test]
    fn test_unquoted_value_is_trimmed_and_not_unescaped() {
        assert_eq!(value("WHITE_SPACE=  some value "), "some value");
        assert_eq!(value("RAW=new\\nline"), "new\\nline");
        assert_eq!(value("DIR_7ZIP=C:\\Program Files\\7-Zip"), "C:\\Program Files\\7-Zip");
    }

    #[test]
    fn test_trim_uses_ecmascript_whitespace() {
        assert_eq!(value("A=\u{FEFF}x\u{FEFF}"), "x");
        assert_eq!(value("A=\u{00A0}\u{3000}x\u{2028}\u{000B}"), "x");
        assert_eq!(value("A=\u{0085}x\u{0085}"), "\u{0085}x\u{0085}");
        assert_eq!(value("A=\u{FEFF}'  x '\u{FEFF}"), "  x ");
    }

    #[test]
    fn test_single_quotes_keep_interior_whitespace() {
        assert_eq!(value("SINGLE_QUOTE='  some value '"), "  some value ");
        assert_eq!(value("SINGLE_QUOTE=   '  padded'   "), "  padded");
    }

    #[test]
    fn test_double_quotes_keep_interior_whitespace() {
        assert_eq!(value("DOUBLE_QUOTE=\"  Some Value \""), "  Some Value ");
    }

    #[test]
    fn test_quoted_escaped_newline_becomes_newline() {
        assert_eq!(value("MULTILINE=\"new\\nline\""), "new\nline");
        assert_eq!(value("MULTILINE='a\\nb\\nc'"), "a\nb\nc");
    }

    #[test]
    fn test_json_like_value_is_opaque() {
        assert_eq!(value("JSON={ foo: \"bar\" }"), "{ foo: \"bar\" }");
    }

    #[test]
    fn test_partial_quotes_are_left_alone() {
        assert_eq!(value("A=\"unterminated"), "\"unterminated");
        assert_eq!(value("A=say \"hi\""), "say \"hi\"");
        assert_eq!(value("A='mixed\""), "'mixed\"");
        assert_eq!(value("A=\""), "\"");
        assert_eq!(value("A='"), "'");
    }

    #[test]
    fn test_empty_quotes_yield_empty_value() {
        assert_eq!(value("A=''"), "");
        assert_eq!(value("A=\"\""), "");
    }

    #[test]
    fn test_existing_store_key_is_skipped() {
        let store: MemoryEnv = [("HOME", "/root")].into_iter().collect();
        assert_eq!(parse_line("HOME=/elsewhere", &store), None);
        assert!(parse_line("OTHER=1", &store).is_some());
    }

    #[test]
    fn test_parse_content_last_occurrence_wins() {
        let parsed = parse_content("A=1\nB=2\nA=3", &MemoryEnv::new());
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["A"], "3");
        assert_eq!(parsed["B"], "2");
    }

    #[test]
    fn test_parse_content_skips_comments_and_blanks() {
        let content = "# header\r\n\r\nKEY=value\r\nmalformed\r\n";
        let parsed = parse_content(content, &MemoryEnv::new());
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed["KEY"], "value");
    }
}
