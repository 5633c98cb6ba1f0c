//! Interchange string escaping.
//!
//! Escaping is applied wherever a string element could collide with the
//! structural characters of the array grammar (commas, quotes). A bare scalar
//! string value is never escaped; its API form is the text itself.

/// Escapes a string according to the interchange conventions.
///
/// The following characters are escaped: backslash, newline, carriage return,
/// tab, double quote, and NUL. Backslash is itself the escape character and is
/// replaced first.
///
/// # Examples
///
/// ```rust
/// use variable_interop::escaping::escape_string;
///
/// assert_eq!(escape_string("a\tb"), "a\\tb");
/// assert_eq!(escape_string("say \"hi\""), "say \\\"hi\\\"");
/// ```
#[must_use]
pub fn escape_string(unescaped: &str) -> String {
    let mut escaped = String::with_capacity(unescaped.len());
    for ch in unescaped.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '"' => escaped.push_str("\\\""),
            '\0' => escaped.push_str("\\0"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Unescapes a string according to the interchange conventions.
///
/// The sequences `\n`, `\r`, `\t`, and `\0` become newline, carriage return,
/// tab, and NUL. For any other backslash sequence the backslash is removed and
/// the following character kept unchanged, which also yields the correct
/// behavior for `\"` and `\\`. A lone trailing backslash is dropped.
///
/// `unescape_string(&escape_string(s)) == s` holds for every `s`; the reverse
/// does not, since unknown sequences lose their backslash.
///
/// # Examples
///
/// ```rust
/// use variable_interop::escaping::unescape_string;
///
/// assert_eq!(unescape_string("a\\tb"), "a\tb");
/// assert_eq!(unescape_string("unr\\ecogn\\ized \\esc\\ap\\es"), "unrecognized escapes");
/// ```
#[must_use]
pub fn unescape_string(escaped: &str) -> String {
    let mut unescaped = String::with_capacity(escaped.len());
    let mut chars = escaped.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some('n') => unescaped.push('\n'),
                Some('r') => unescaped.push('\r'),
                Some('t') => unescaped.push('\t'),
                Some('0') => unescaped.push('\0'),
                Some(other) => unescaped.push(other),
                None => {}
            }
        } else {
            unescaped.push(ch);
        }
    }
    unescaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_special_characters() {
        assert_eq!(
            escape_string("\\\n\r\t\"\0"),
            "\\\\\\n\\r\\t\\\"\\0"
        );
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape_string("plain text"), "plain text");
    }

    #[test]
    fn test_unescape_known_sequences() {
        assert_eq!(unescape_string("a\\nb\\rc\\td\\0e"), "a\nb\rc\td\0e");
        assert_eq!(unescape_string("\\\"quoted\\\""), "\"quoted\"");
        assert_eq!(unescape_string("back\\\\slash"), "back\\slash");
    }

    #[test]
    fn test_unescape_unknown_sequence_keeps_character() {
        assert_eq!(
            unescape_string("unr\\ecogn\\ized \\esc\\ap\\es"),
            "unrecognized escapes"
        );
    }

    #[test]
    fn test_unescape_trailing_backslash_dropped() {
        assert_eq!(unescape_string("dangling\\"), "dangling");
    }

    #[test]
    fn test_round_trip() {
        let cases = ["", "simple", "tabs\tand\nnewlines", "q\"q", "b\\s", "n\0l"];
        for case in cases {
            assert_eq!(unescape_string(&escape_string(case)), case);
        }
    }
}
