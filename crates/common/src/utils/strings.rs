use std::{fmt::Display, fmt::Write, str::Chars, str::FromStr};

use crate::error::Error;

/// Checks whether a string is a decimal number, with an optional sign, fraction and exponent.
///
/// ```
/// use assist_common::utils::strings::is_numeric;
///
/// assert!(is_numeric("-12.5e+3"));
/// assert!(!is_numeric("12a"));
/// ```
pub fn is_numeric(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    // mantissa: digits with at most one decimal point
    let mut digits = 0;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(i) {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        i += 1;
    }
    if digits == 0 {
        return false;
    }

    // optional exponent
    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+') | Some(b'-')) {
            i += 1;
        }
        let start = i;
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        if i == start {
            return false;
        }
    }

    i == bytes.len()
}

/// Replaces every occurrence of `old` in `s` with `new`, returning the number of replacements.
///
/// Occurrences are matched left to right and never overlap. An empty `old` replaces nothing.
///
/// ```
/// use assist_common::utils::strings::replace;
///
/// let mut s = String::from("My name is Antoine and I am a superhero.");
/// assert_eq!(replace(&mut s, "hero", "vilan"), 1);
/// assert_eq!(s, "My name is Antoine and I am a supervilan.");
/// ```
pub fn replace(s: &mut String, old: &str, new: &str) -> usize {
    if old.is_empty() {
        return 0;
    }

    let count = s.matches(old).count();
    if count > 0 {
        *s = s.replace(old, new);
    }
    count
}

/// Replaces the last occurrence of a substring in a string
///
/// ```
/// use assist_common::utils::strings::replace_last;
///
/// let result = replace_last("Hello, world!", "o", "0");
/// assert_eq!(result, String::from("Hello, w0rld!"));
/// ```
pub fn replace_last(s: &str, old: &str, new: &str) -> String {
    match s.rfind(old) {
        Some(index) if !old.is_empty() => {
            format!("{}{}{}", &s[..index], new, &s[index + old.len()..])
        }
        _ => s.to_string(),
    }
}

/// Removes every leading and trailing occurrence of `c`.
pub fn trim(s: &str, c: char) -> &str {
    s.trim_matches(c)
}

/// Removes every leading occurrence of `c`.
pub fn trim_left(s: &str, c: char) -> &str {
    s.trim_start_matches(c)
}

/// Removes every trailing occurrence of `c`.
pub fn trim_right(s: &str, c: char) -> &str {
    s.trim_end_matches(c)
}

/// Reverses the characters of a string.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Converts a string to uppercase.
pub fn uppercase(s: &str) -> String {
    s.to_uppercase()
}

/// Converts a string to lowercase.
pub fn lowercase(s: &str) -> String {
    s.to_lowercase()
}

/// Uppercases the first character of a string, leaving the rest untouched.
///
/// ```
/// use assist_common::utils::strings::capitalize_first_character;
///
/// assert_eq!(capitalize_first_character("hello world"), "Hello world");
/// ```
pub fn capitalize_first_character(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Splits a string on every occurrence of `delimiter`, keeping empty fields.
///
/// ```
/// use assist_common::utils::strings::split;
///
/// assert_eq!(split("a,,b", ","), vec!["a", "", "b"]);
/// assert!(split("", ",").is_empty());
/// ```
pub fn split(s: &str, delimiter: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    if delimiter.is_empty() {
        return vec![s.to_string()];
    }

    s.split(delimiter).map(String::from).collect()
}

/// Joins the given parts with `separator`.
pub fn join<S: AsRef<str>>(parts: &[S], separator: &str) -> String {
    parts.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join(separator)
}

/// Strips a single trailing end of line (`\n`, `\r\n` or `\r`).
pub fn remove_eol(s: &str) -> &str {
    s.strip_suffix("\r\n")
        .or_else(|| s.strip_suffix('\n'))
        .or_else(|| s.strip_suffix('\r'))
        .unwrap_or(s)
}

/// Escapes a string using C conventions.
///
/// ```
/// use assist_common::utils::strings::escape;
///
/// assert_eq!(escape("a\tb\n\"c\""), "a\\tb\\n\\\"c\\\"");
/// ```
pub fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\'' => escaped.push_str("\\'"),
            c => push_escaped_char(&mut escaped, c),
        }
    }
    escaped
}

/// Appends `c` to `out`, escaping backslashes and control characters.
///
/// Quotes are left untouched, which makes this usable for formats that do not quote values.
pub fn push_escaped_char(out: &mut String, c: char) {
    match c {
        '\\' => out.push_str("\\\\"),
        '\x07' => out.push_str("\\a"),
        '\x08' => out.push_str("\\b"),
        '\x0c' => out.push_str("\\f"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\x0b' => out.push_str("\\v"),
        '\0' => out.push_str("\\0"),
        c if c.is_control() && (c as u32) < 0x100 => {
            write!(out, "\\x{:02x}", c as u32).expect("unable to write");
        }
        c if c.is_control() => {
            write!(out, "\\u{:04x}", c as u32).expect("unable to write");
        }
        c => out.push(c),
    }
}

/// Resolves C-style escape sequences.
///
/// Supports the single character escapes, `\xHH` and `\uXXXX`. Characters outside the basic
/// multilingual plane are accepted as a `\uXXXX\uXXXX` surrogate pair. Any other escaped
/// character resolves to itself (`\q` becomes `q`) and a lone trailing backslash is kept.
///
/// ```
/// use assist_common::utils::strings::unescape;
///
/// assert_eq!(unescape("a\\tb\\x41\\u00e9\\:").expect("valid escapes"), "a\tbAé:");
/// ```
pub fn unescape(s: &str) -> Result<String, Error> {
    let mut unescaped = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }

        let Some(next) = chars.next() else {
            unescaped.push('\\');
            break;
        };

        match next {
            'a' => unescaped.push('\x07'),
            'b' => unescaped.push('\x08'),
            'f' => unescaped.push('\x0c'),
            'n' => unescaped.push('\n'),
            'r' => unescaped.push('\r'),
            't' => unescaped.push('\t'),
            'v' => unescaped.push('\x0b'),
            '0' => unescaped.push('\0'),
            'x' => unescaped.push(read_hex_escape(&mut chars, 'x', 2)?),
            'u' => unescaped.push(read_unicode_escape(&mut chars)?),
            other => unescaped.push(other),
        }
    }

    Ok(unescaped)
}

/// Reads exactly `digits` hexadecimal digits.
fn read_hex_value(chars: &mut Chars<'_>, kind: char, digits: usize) -> Result<u32, Error> {
    let hex: String = chars.by_ref().take(digits).collect();
    if hex.chars().count() != digits || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::ParseError(format!(
            "malformed \\{kind} escape: expected {digits} hex digits, found '{hex}'"
        )));
    }

    u32::from_str_radix(&hex, 16)
        .map_err(|e| Error::ParseError(format!("malformed \\{kind} escape '{hex}': {e}")))
}

fn read_hex_escape(chars: &mut Chars<'_>, kind: char, digits: usize) -> Result<char, Error> {
    let value = read_hex_value(chars, kind, digits)?;
    char::from_u32(value).ok_or_else(|| {
        Error::ParseError(format!("\\{kind}{value:0digits$x} is not a valid character"))
    })
}

/// Reads a `\uXXXX` escape, combining a UTF-16 surrogate pair written as two escapes.
fn read_unicode_escape(chars: &mut Chars<'_>) -> Result<char, Error> {
    let high = read_hex_value(chars, 'u', 4)?;
    if !(0xD800..=0xDBFF).contains(&high) {
        return char::from_u32(high)
            .ok_or_else(|| Error::ParseError(format!("\\u{high:04x} is not a valid character")));
    }

    let mut lookahead = chars.clone();
    if lookahead.next() != Some('\\') || lookahead.next() != Some('u') {
        return Err(Error::ParseError(format!("\\u{high:04x} is an unpaired surrogate")));
    }
    let low = read_hex_value(&mut lookahead, 'u', 4)?;
    if !(0xDC00..=0xDFFF).contains(&low) {
        return Err(Error::ParseError(format!(
            "\\u{high:04x} is not followed by a low surrogate, found \\u{low:04x}"
        )));
    }

    *chars = lookahead;
    let scalar = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
    char::from_u32(scalar).ok_or_else(|| {
        Error::ParseError(format!("\\u{high:04x}\\u{low:04x} is not a valid character"))
    })
}

/// Formats a value so that [`parse`] restores it exactly.
///
/// Floating point values are printed with the shortest representation that round trips.
///
/// ```
/// use assist_common::utils::strings::{parse, to_string_lossless};
///
/// let value = 0.1_f64 + 0.2_f64;
/// assert_eq!(parse::<f64>(&to_string_lossless(value)), Some(value));
/// ```
pub fn to_string_lossless<T: Display>(value: T) -> String {
    value.to_string()
}

/// Parses a value, ignoring surrounding whitespace.
pub fn parse<T: FromStr>(s: &str) -> Option<T> {
    s.trim().parse().ok()
}

/// Parses a boolean from `true/false`, `yes/no`, `on/off` or `1/0`, ignoring case.
///
/// ```
/// use assist_common::utils::strings::parse_boolean;
///
/// assert_eq!(parse_boolean("YES"), Some(true));
/// assert_eq!(parse_boolean("0"), Some(false));
/// assert_eq!(parse_boolean("maybe"), None);
/// ```
pub fn parse_boolean(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Extension trait for strings that adds helpful operations.
pub trait StringExt {
    /// Truncates a string to a maximum length, adding an ellipsis if necessary.
    ///
    /// # Arguments
    ///
    /// * `max_length` - The maximum length of the returned string, in characters
    ///
    /// # Returns
    ///
    /// * `String` - The truncated string with ellipsis if needed
    fn truncate(&self, max_length: usize) -> String;
}

/// Truncates a string to a maximum length, keeping its head and tail around an ellipsis.
/// Note: the ellipsis *is* counted towards the maximum length.
///
/// ```
/// use assist_common::utils::strings::StringExt;
///
/// let result = "Hello, world!".truncate(11);
/// assert_eq!(result, "Hell...rld!");
/// ```
impl StringExt for str {
    fn truncate(&self, max_length: usize) -> String {
        let length = self.chars().count();
        if length <= max_length {
            return self.to_string();
        }
        if max_length <= 3 {
            return self.chars().take(max_length).collect();
        }

        let head = (max_length - 3) / 2;
        let tail = max_length - 3 - head;
        self.chars().take(head).chain("...".chars()).chain(self.chars().skip(length - tail)).collect()
    }
}
