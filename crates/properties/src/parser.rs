//! Line-level parsing and escaping of the properties text format.

use std::collections::BTreeMap;

use assist_common::utils::strings::{push_escaped_char, unescape};

use crate::error::Error;

/// Whitespace that may separate keys from values and indent entries.
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// Splits text into physical lines, accepting `\n`, `\r\n` and `\r` terminators.
fn physical_lines(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n").split(&['\n', '\r'][..]).map(String::from).collect()
}

/// Strips a trailing continuation backslash from `line`.
///
/// The line continues only when it ends in an odd number of backslashes, since `\\` is an escaped
/// backslash.
fn strip_continuation(line: &str) -> (&str, bool) {
    let trailing = line.chars().rev().take_while(|c| *c == '\\').count();
    if trailing % 2 == 1 {
        (&line[..line.len() - 1], true)
    } else {
        (line, false)
    }
}

/// Splits a logical line into its raw (still escaped) key and value.
///
/// The key ends at the first unescaped `=`, `:` or whitespace character. The separator is then
/// skipped along with the whitespace surrounding it.
fn split_key_value(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    for (index, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = index;
                break;
            }
            c if is_whitespace(c) => {
                key_end = index;
                break;
            }
            _ => {}
        }
    }

    let mut value = line[key_end..].trim_start_matches(is_whitespace);
    if let Some(stripped) = value.strip_prefix(&['=', ':'][..]) {
        value = stripped.trim_start_matches(is_whitespace);
    }

    (&line[..key_end], value)
}

fn unescape_at(raw: &str, line: usize) -> Result<String, Error> {
    unescape(raw).map_err(|e| Error::ParseError { line, message: e.to_string() })
}

/// Parses properties text into a sorted key/value map.
///
/// Later definitions of a key replace earlier ones.
pub(crate) fn parse(text: &str) -> Result<BTreeMap<String, String>, Error> {
    let mut properties = BTreeMap::new();
    let mut logical = String::new();
    let mut start_line = 0;
    let mut continuing = false;

    for (index, line) in physical_lines(text).iter().enumerate() {
        let line = line.trim_start_matches(is_whitespace);
        if !continuing {
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            start_line = index + 1;
        }

        let (chunk, continues) = strip_continuation(line);
        logical.push_str(chunk);
        continuing = continues;
        if continuing {
            continue;
        }

        let (key, value) = split_key_value(&logical);
        properties.insert(unescape_at(key, start_line)?, unescape_at(value, start_line)?);
        logical.clear();
    }

    // a continuation on the last line keeps whatever was accumulated
    if continuing {
        let (key, value) = split_key_value(&logical);
        properties.insert(unescape_at(key, start_line)?, unescape_at(value, start_line)?);
    }

    Ok(properties)
}

/// Escapes a key so that it reads back as a single key.
pub(crate) fn escape_key(key: &str) -> String {
    let mut escaped = String::with_capacity(key.len());
    for (index, c) in key.chars().enumerate() {
        match c {
            ' ' | '=' | ':' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '#' | '!' if index == 0 => {
                escaped.push('\\');
                escaped.push(c);
            }
            c => push_escaped_char(&mut escaped, c),
        }
    }
    escaped
}

/// Escapes a value, preserving its leading spaces.
pub(crate) fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    let mut leading = true;
    for c in value.chars() {
        if leading && c == ' ' {
            escaped.push_str("\\ ");
            continue;
        }
        leading = false;
        push_escaped_char(&mut escaped, c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(text: &str) -> Vec<(String, String)> {
        parse(text).expect("failed to parse properties").into_iter().collect()
    }

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn test_separators() {
        assert_eq!(parse_ok("a=1"), vec![pair("a", "1")]);
        assert_eq!(parse_ok("a:1"), vec![pair("a", "1")]);
        assert_eq!(parse_ok("a 1"), vec![pair("a", "1")]);
        assert_eq!(parse_ok("a\t=\t1"), vec![pair("a", "1")]);
        assert_eq!(parse_ok("  a  :  1"), vec![pair("a", "1")]);
        assert_eq!(parse_ok("a = = 1"), vec![pair("a", "= 1")]);
        assert_eq!(parse_ok("a"), vec![pair("a", "")]);
        assert_eq!(parse_ok("a ="), vec![pair("a", "")]);
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let text = "# comment\n! another comment\n\n   \n  # indented comment\nkey=value\n";
        assert_eq!(parse_ok(text), vec![pair("key", "value")]);
    }

    #[test]
    fn test_value_trailing_whitespace_is_kept() {
        assert_eq!(parse_ok("key = value  "), vec![pair("key", "value  ")]);
    }

    #[test]
    fn test_line_terminators() {
        assert_eq!(parse_ok("a=1\r\nb=2\rc=3\n"), vec![pair("a", "1"), pair("b", "2"), pair("c", "3")]);
    }

    #[test]
    fn test_continuation_lines() {
        let text = "fruits = apple, banana, \\\n         cherry, \\\r\n   date\nnext = 1";
        assert_eq!(
            parse_ok(text),
            vec![pair("fruits", "apple, banana, cherry, date"), pair("next", "1")]
        );
    }

    #[test]
    fn test_continuation_at_end_of_input() {
        assert_eq!(parse_ok("key = value\\"), vec![pair("key", "value")]);
    }

    #[test]
    fn test_escaped_backslash_does_not_continue() {
        assert_eq!(parse_ok("path = C:\\\\\nnext = 1"), vec![pair("next", "1"), pair("path", "C:\\")]);
    }

    #[test]
    fn test_escaped_key_characters() {
        assert_eq!(parse_ok("my\\ key\\=x = v"), vec![pair("my key=x", "v")]);
        assert_eq!(parse_ok("a\\:b:c"), vec![pair("a:b", "c")]);
        assert_eq!(parse_ok("\\#hash = 1"), vec![pair("#hash", "1")]);
    }

    #[test]
    fn test_escape_sequences_in_values() {
        assert_eq!(
            parse_ok("v = tab\\there\\nnew \\u00e9 \\x41 \\q"),
            vec![pair("v", "tab\there\nnew \u{e9} A q")]
        );
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        assert_eq!(parse_ok("a=1\na=2"), vec![pair("a", "2")]);
    }

    #[test]
    fn test_malformed_escape_reports_line() {
        match parse("a=1\n\nb=\\uZZZZ") {
            Err(Error::ParseError { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_escape_key() {
        assert_eq!(escape_key("my key"), "my\\ key");
        assert_eq!(escape_key("a=b:c"), "a\\=b\\:c");
        assert_eq!(escape_key("#key!"), "\\#key!");
        assert_eq!(escape_key("tab\tkey"), "tab\\tkey");
    }

    #[test]
    fn test_escape_value() {
        assert_eq!(escape_value("  padded value "), "\\ \\ padded value ");
        assert_eq!(escape_value("C:\\temp\n"), "C:\\\\temp\\n");
        assert_eq!(escape_value("a=b:c"), "a=b:c");
    }
}
