//! The array wire grammar: delimiters, multi-dimensional bounds, quoting.
//!
//! Serialization emits elements comma-joined in storage order, prefixed with
//! `bounds[d0,d1,...]{...}` for arrays of rank 2 or higher. Parsing inverts
//! this exactly and is shared by the canonical and locale-formatted codecs,
//! which supply their own per-element parse actions.

use std::sync::OnceLock;

use regex::Regex;

use crate::array_values::ArrayValue;
use crate::error::{Error, Result};

/// Matches an entire array string carrying an explicit bounds prefix.
fn bounds_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)^\s*bounds\s*\[(?P<bounds>[\d,\s]*)\]\s*\{(?P<values>.*)\}\s*$")
            .expect("bounds pattern is valid")
    })
}

/// Matches an array string wrapped in bare curly braces, without bounds.
fn curly_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)^\s*\{(?P<values>.*)\}\s*$").expect("curly pattern is valid")
    })
}

/// Matches one double-quoted element at the head of the remaining input.
fn quoted_element_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?s)^\s*"(?P<value>(?:[^"\\]|\\.)*)"\s*(?P<comma>,?)(?P<rest>.*)$"#)
            .expect("quoted element pattern is valid")
    })
}

/// Matches one unquoted element at the head of the remaining input.
fn unquoted_element_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?s)^\s*(?P<value>[^,"]*[^,"\s])\s*(?P<comma>,?)(?P<rest>.*)$"#)
            .expect("unquoted element pattern is valid")
    })
}

/// One tokenized element: its text, whether a comma followed it, and the
/// remaining unparsed input.
struct ElementMatch<'a> {
    value: &'a str,
    comma: bool,
    rest: &'a str,
}

/// Tokenizes a single element, which may be surrounded by quotation marks.
fn match_element(input: &str) -> Option<ElementMatch<'_>> {
    let captures = quoted_element_regex()
        .captures(input)
        .or_else(|| unquoted_element_regex().captures(input))?;
    Some(ElementMatch {
        value: captures.name("value").map_or("", |m| m.as_str()),
        comma: captures.name("comma").is_some_and(|m| !m.as_str().is_empty()),
        rest: captures.name("rest").map_or("", |m| m.as_str()),
    })
}

/// Converts an array to its wire string, stringifying each element with the
/// supplied action so both the API and display codecs can share the grammar.
pub(crate) fn value_to_string<T>(
    array: &ArrayValue<T>,
    mut stringify: impl FnMut(&T) -> String,
) -> String {
    try_value_to_string(array, |element| Ok(stringify(element)))
        .expect("infallible stringify action")
}

/// Fallible variant of [`value_to_string`] for element actions that can fail
/// (locale formatting).
pub(crate) fn try_value_to_string<T>(
    array: &ArrayValue<T>,
    mut stringify: impl FnMut(&T) -> Result<String>,
) -> Result<String> {
    let mut output = String::new();
    if array.rank() > 1 {
        output.push_str("bounds[");
        for (position, dimension) in array.shape().iter().enumerate() {
            if position > 0 {
                output.push(',');
            }
            output.push_str(&dimension.to_string());
        }
        output.push_str("]{");
    }
    for (position, element) in array.values().iter().enumerate() {
        if position > 0 {
            output.push(',');
        }
        output.push_str(&stringify(element)?);
    }
    if array.rank() > 1 {
        output.push('}');
    }
    Ok(output)
}

/// Parses a wire string into an array, parsing each element with the supplied
/// action.
///
/// With a `bounds[...]` prefix, exactly the declared number of elements must
/// be present. Without one, a lone element (no comma) yields a
/// zero-dimensional array and a comma list yields a one-dimensional array;
/// empty input yields an empty one-dimensional array.
pub(crate) fn string_to_value<T>(
    input: &str,
    mut parse: impl FnMut(&str) -> Result<T>,
) -> Result<ArrayValue<T>> {
    if let Some(captures) = bounds_regex().captures(input) {
        let bounds_text = captures.name("bounds").map_or("", |m| m.as_str());
        let mut remaining = captures.name("values").map_or("", |m| m.as_str());

        let mut lengths: Vec<usize> = Vec::new();
        for dimension in bounds_text.split(',') {
            lengths.push(dimension.trim().parse::<usize>().map_err(|_| {
                Error::format(format!("malformed array bounds {:?}", bounds_text))
            })?);
        }

        let expected: usize = lengths.iter().product();
        let mut elements = Vec::with_capacity(expected);
        let mut comma_after_last = false;
        for _ in 0..expected {
            let matched = match_element(remaining).ok_or_else(|| {
                Error::format(format!(
                    "array value declares bounds {:?} but holds fewer elements",
                    lengths
                ))
            })?;
            elements.push(parse(matched.value)?);
            comma_after_last = matched.comma;
            remaining = matched.rest;
        }
        if comma_after_last {
            return Err(Error::format(format!(
                "array value declares bounds {:?} but holds extra elements",
                lengths
            )));
        }
        ArrayValue::new(lengths, elements)
    } else {
        let body = curly_regex()
            .captures(input)
            .and_then(|captures| captures.name("values").map(|m| m.as_str()))
            .unwrap_or(input);

        let mut elements = Vec::new();
        let mut saw_comma = false;
        let mut remaining = body;
        while let Some(matched) = match_element(remaining) {
            elements.push(parse(matched.value)?);
            saw_comma |= matched.comma;
            remaining = matched.rest;
        }
        if !remaining.trim().is_empty() {
            return Err(Error::format(format!(
                "unparsable trailing array content {:?}",
                remaining
            )));
        }
        if elements.len() == 1 && !saw_comma {
            let element = elements.pop().expect("one element present");
            Ok(ArrayValue::scalar(element))
        } else {
            Ok(ArrayValue::from_flat(elements))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar_values::IntegerValue;

    fn parse_int(token: &str) -> Result<IntegerValue> {
        IntegerValue::from_api_string(token)
    }

    #[test]
    fn test_one_dimensional_no_prefix() {
        let array = ArrayValue::from_flat(vec![1, 2, 3]);
        assert_eq!(value_to_string(&array, |v| v.to_string()), "1,2,3");
    }

    #[test]
    fn test_multi_dimensional_prefix() {
        let array = ArrayValue::new(vec![2, 2], vec![1, 2, 3, 4]).unwrap();
        assert_eq!(
            value_to_string(&array, |v| v.to_string()),
            "bounds[2,2]{1,2,3,4}"
        );
    }

    #[test]
    fn test_zero_dimensional_is_bare_element() {
        let array = ArrayValue::scalar(9);
        assert_eq!(value_to_string(&array, |v| v.to_string()), "9");
    }

    #[test]
    fn test_parse_reproduces_shape() {
        let parsed = string_to_value("bounds[2,3]{1,2,3,4,5,6}", parse_int).unwrap();
        assert_eq!(parsed.shape(), &[2, 3]);
        assert_eq!(parsed.values().len(), 6);
    }

    #[test]
    fn test_parse_bounds_case_insensitive_with_whitespace() {
        let parsed = string_to_value(" BOUNDS [ 2 , 2 ] { 1, 2, 3, 4 } ", parse_int).unwrap();
        assert_eq!(parsed.shape(), &[2, 2]);
    }

    #[test]
    fn test_parse_comma_list_is_one_dimensional() {
        let parsed = string_to_value("5,6,7", parse_int).unwrap();
        assert_eq!(parsed.shape(), &[3]);
    }

    #[test]
    fn test_parse_lone_element_is_zero_dimensional() {
        let parsed = string_to_value("5", parse_int).unwrap();
        assert_eq!(parsed.rank(), 0);
        assert_eq!(parsed.values(), &[IntegerValue(5)]);
    }

    #[test]
    fn test_parse_empty_input_is_empty_array() {
        let parsed = string_to_value("", parse_int).unwrap();
        assert_eq!(parsed.shape(), &[0]);
        let parsed = string_to_value("   ", parse_int).unwrap();
        assert_eq!(parsed.shape(), &[0]);
    }

    #[test]
    fn test_parse_curly_wrapper_without_bounds() {
        let parsed = string_to_value("{1,2}", parse_int).unwrap();
        assert_eq!(parsed.shape(), &[2]);
    }

    #[test]
    fn test_element_count_must_match_bounds() {
        assert!(string_to_value("bounds[2,2]{1,2,3}", parse_int).is_err());
        assert!(string_to_value("bounds[2,2]{1,2,3,4,5}", parse_int).is_err());
    }

    #[test]
    fn test_malformed_bounds_rejected() {
        assert!(string_to_value("bounds[]{1}", parse_int).is_err());
        assert!(string_to_value("bounds[2,]{1,2}", parse_int).is_err());
    }

    #[test]
    fn test_unparsable_element_fails_whole_parse() {
        assert!(string_to_value("1,x,3", parse_int).is_err());
        assert!(string_to_value("bounds[3]{1,x,3}", parse_int).is_err());
    }

    #[test]
    fn test_quoted_elements_tokenized() {
        let parsed = string_to_value(r#""1","2""#, parse_int).unwrap();
        assert_eq!(parsed.values(), &[IntegerValue(1), IntegerValue(2)]);
    }
}
