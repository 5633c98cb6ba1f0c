//! The locale-formatted (display) string codec.
//!
//! Display strings are for humans: decimal separators and boolean words
//! follow a caller-supplied locale, and real values carry 15 significant
//! digits so that formatting then parsing in the same locale returns the
//! original value to that precision. File values never participate in display
//! round trips; the value-to-string direction shows the file's name and the
//! reverse direction is unsupported.
//!
//! ## Examples
//!
//! ```rust
//! use variable_interop::{from_display_string, to_display_string, VariableType, VariableValue};
//!
//! let value = VariableValue::from(3.2);
//! let display = to_display_string(&value, "C").unwrap();
//! assert_eq!(display, "3.2");
//!
//! let parsed = from_display_string(VariableType::Real, &display, "C").unwrap();
//! assert_eq!(parsed, value);
//! ```

use crate::array_codec;
use crate::array_values::{
    BooleanArrayValue, FileArrayValue, IntegerArrayValue, RealArrayValue, StringArrayValue,
};
use crate::error::{Error, Result};
use crate::file_value::FileValue;
use crate::locale::{
    format_boolean, format_integer, format_real, parse_boolean, parse_integer, parse_real,
    with_numeric_locale, NumericConventions,
};
use crate::scalar_values::{BooleanValue, IntegerValue, RealValue, StringValue};
use crate::variable_type::{vartype_accept, TypePseudoVisitor, VariableType};
use crate::variable_value::{ValueVisitor, VariableValue};

/// Converts a value to a string formatted for the given locale.
///
/// # Errors
///
/// Fails with [`Error::UnsupportedLocale`] for an unavailable locale. All
/// other inputs format successfully; file values display as their name.
pub fn to_display_string(value: &VariableValue, locale_name: &str) -> Result<String> {
    with_numeric_locale(locale_name, |conventions| {
        value.accept(&mut ToDisplayString { conventions })
    })
}

/// Parses a locale-formatted string into a value of the requested type.
///
/// # Errors
///
/// Fails with [`Error::Format`] for numerals or boolean words the locale
/// grammar rejects, and with [`Error::Unsupported`] for file types, which
/// have no display parse.
pub fn from_display_string(
    var_type: VariableType,
    source: &str,
    locale_name: &str,
) -> Result<VariableValue> {
    with_numeric_locale(locale_name, |conventions| {
        vartype_accept(
            &mut FromDisplayString {
                source,
                conventions,
            },
            var_type,
        )
    })
}

/// Formats any value for display under captured locale conventions.
struct ToDisplayString<'a> {
    conventions: &'a NumericConventions,
}

impl ToDisplayString<'_> {
    /// Quotes real array elements when the locale decimal point is the array
    /// delimiter's lookalike (`,`), which would otherwise split elements.
    fn real_element(&self, value: &RealValue) -> String {
        let text = format_real(*value, self.conventions);
        if self.conventions.decimal_point == "," {
            format!("\"{}\"", text)
        } else {
            text
        }
    }
}

impl ValueVisitor for ToDisplayString<'_> {
    type Output = Result<String>;

    fn visit_integer(&mut self, value: &IntegerValue) -> Self::Output {
        Ok(format_integer(*value))
    }

    fn visit_real(&mut self, value: &RealValue) -> Self::Output {
        Ok(format_real(*value, self.conventions))
    }

    fn visit_boolean(&mut self, value: &BooleanValue) -> Self::Output {
        Ok(format_boolean(value.0))
    }

    fn visit_string(&mut self, value: &StringValue) -> Self::Output {
        Ok(value.to_string())
    }

    fn visit_file(&mut self, value: &FileValue) -> Self::Output {
        Ok(value.to_display_string())
    }

    fn visit_integer_array(&mut self, value: &IntegerArrayValue) -> Self::Output {
        Ok(array_codec::value_to_string(value, |element| {
            format_integer(*element)
        }))
    }

    fn visit_real_array(&mut self, value: &RealArrayValue) -> Self::Output {
        Ok(array_codec::value_to_string(value, |element| {
            self.real_element(element)
        }))
    }

    fn visit_boolean_array(&mut self, value: &BooleanArrayValue) -> Self::Output {
        Ok(array_codec::value_to_string(value, |element| {
            format_boolean(element.0)
        }))
    }

    fn visit_string_array(&mut self, value: &StringArrayValue) -> Self::Output {
        Ok(array_codec::value_to_string(value, |element| {
            format!("\"{}\"", element.as_str())
        }))
    }

    fn visit_file_array(&mut self, value: &FileArrayValue) -> Self::Output {
        Ok(value.to_display_string())
    }
}

/// Parses a display string into a value, dispatched on the requested tag.
struct FromDisplayString<'a> {
    source: &'a str,
    conventions: &'a NumericConventions,
}

impl TypePseudoVisitor for FromDisplayString<'_> {
    type Output = Result<VariableValue>;

    fn visit_unknown(&mut self) -> Self::Output {
        Err(Error::unknown_type("parse a display string"))
    }

    fn visit_integer(&mut self) -> Self::Output {
        parse_integer(self.source, self.conventions).map(VariableValue::Integer)
    }

    fn visit_real(&mut self) -> Self::Output {
        parse_real(self.source, self.conventions).map(VariableValue::Real)
    }

    fn visit_boolean(&mut self) -> Self::Output {
        parse_boolean(self.source)
            .map(BooleanValue)
            .map(VariableValue::Boolean)
    }

    fn visit_string(&mut self) -> Self::Output {
        Ok(VariableValue::String(StringValue::from(self.source)))
    }

    fn visit_file(&mut self) -> Self::Output {
        Err(Error::unsupported(
            "file values cannot be read back from display strings",
        ))
    }

    fn visit_integer_array(&mut self) -> Self::Output {
        array_codec::string_to_value(self.source, |token| {
            parse_integer(token, self.conventions)
        })
        .map(VariableValue::IntegerArray)
    }

    fn visit_real_array(&mut self) -> Self::Output {
        array_codec::string_to_value(self.source, |token| parse_real(token, self.conventions))
            .map(VariableValue::RealArray)
    }

    fn visit_boolean_array(&mut self) -> Self::Output {
        array_codec::string_to_value(self.source, |token| {
            parse_boolean(token).map(BooleanValue)
        })
        .map(VariableValue::BooleanArray)
    }

    fn visit_string_array(&mut self) -> Self::Output {
        array_codec::string_to_value(self.source, |token| Ok(StringValue::from(token)))
            .map(VariableValue::StringArray)
    }

    fn visit_file_array(&mut self) -> Self::Output {
        Err(Error::unsupported(
            "file values cannot be read back from display strings",
        ))
    }
}
