//! # variable-interop
//!
//! A typed variable-interchange layer: a closed set of variant value types
//! with bidirectional conversions between an in-memory canonical
//! representation, a locale-invariant "API string" wire format, and a
//! locale-formatted display string.
//!
//! ## Key Features
//!
//! - **Closed variant set**: integer, real, boolean, string, and file values
//!   plus rectangular N-dimensional arrays of each, tagged by
//!   [`VariableType`]
//! - **Visitor-based conversion**: the full N×N conversion matrix is
//!   implemented as [`ValueVisitor`]s, so every source/destination pair has a
//!   compiler-checked outcome instead of an ad-hoc conditional
//! - **Stable wire format**: the API string grammar (see [`api_format`]) is
//!   locale-invariant and round-trips every value, including
//!   multi-dimensional array shapes via `bounds[...]{...}`
//! - **Locale-aware display**: formatting and parsing against a named locale
//!   with a scoped switch/restore protocol around the process-global locale
//! - **Typed failures**: conversions fail with incompatible-type, format,
//!   overflow, or unknown-type errors; there are never partial results
//!
//! ## Quick Start
//!
//! ```rust
//! use variable_interop::{convert, from_api_string, to_api_string, VariableType, VariableValue};
//!
//! // Canonical wire round trip.
//! let value = VariableValue::from(3.2);
//! let wire = to_api_string(&value).unwrap();
//! assert_eq!(wire, "3.2");
//! assert_eq!(from_api_string(VariableType::Real, &wire).unwrap(), value);
//!
//! // Conversions follow the interop matrix.
//! let as_integer = convert(&value, VariableType::Integer).unwrap();
//! assert_eq!(as_integer, VariableValue::from(3i64));
//! ```
//!
//! ## Arrays
//!
//! Arrays are rectangular by construction: a flat row-major buffer plus an
//! explicit shape.
//!
//! ```rust
//! use variable_interop::{to_api_string, IntegerArrayValue, IntegerValue, VariableValue};
//!
//! let array = IntegerArrayValue::from_rows(vec![
//!     vec![IntegerValue(1), IntegerValue(2)],
//!     vec![IntegerValue(3), IntegerValue(4)],
//! ])
//! .unwrap();
//! assert_eq!(
//!     to_api_string(&VariableValue::from(array)).unwrap(),
//!     "bounds[2,2]{1,2,3,4}"
//! );
//! ```
//!
//! ## Display strings
//!
//! ```rust
//! use variable_interop::{to_display_string, VariableValue};
//!
//! let display = to_display_string(&VariableValue::from(true), "C").unwrap();
//! assert_eq!(display, "True");
//! ```
//!
//! Locale switching is process-global and therefore serialized behind a
//! crate-wide lock; see [`locale`] for the hazard discussion. Everything
//! else is pure computation, safe to call concurrently on distinct values.
//!
//! ## File values
//!
//! File content never lives inside a value. Serialization pushes content
//! through a [`SaveContext`] and records an identifier; deserialization
//! resolves identifiers through a [`LoadContext`]. See [`save_context`].

pub mod api_format;
pub mod array_codec;
pub mod array_values;
pub mod convert;
pub mod error;
pub mod escaping;
pub mod file_value;
pub mod formatted;
pub mod locale;
pub mod metadata;
pub mod save_context;
pub mod scalar_values;
pub mod type_library;
pub mod variable_state;
pub mod variable_type;
pub mod variable_value;

pub use array_values::{
    ArrayValue, BooleanArrayValue, FileArrayValue, IntegerArrayValue, RealArrayValue,
    StringArrayValue,
};
pub use convert::{
    convert, to_boolean_array_value, to_boolean_value, to_integer_array_value, to_integer_value,
    to_real_array_value, to_real_value, to_string_array_value, to_string_value,
};
pub use error::{Error, Result};
pub use file_value::{FileApiObject, FileValue, BINARY_MIMETYPE, TEXT_MIMETYPE};
pub use metadata::{
    BooleanArrayMetadata, BooleanMetadata, CustomMetadata, FileArrayMetadata, FileMetadata,
    IntegerArrayMetadata, IntegerMetadata, MetadataVisitor, RealArrayMetadata, RealMetadata,
    StringArrayMetadata, StringMetadata, VariableMetadata,
};
pub use save_context::{LoadContext, NonManagingFileScope, SaveContext};
pub use scalar_values::{BooleanValue, IntegerValue, RealValue, StringValue};
pub use type_library::{TypeCompatibility, TypeInformation, TypeLibrary};
pub use variable_state::VariableState;
pub use variable_type::{vartype_accept, TypePseudoVisitor, VariableType};
pub use variable_value::{ValueVisitor, VariableValue};

/// Serializes a value to the canonical, locale-invariant API string.
///
/// # Examples
///
/// ```rust
/// use variable_interop::{to_api_string, VariableValue};
///
/// assert_eq!(to_api_string(&VariableValue::from(true)).unwrap(), "True");
/// ```
///
/// # Errors
///
/// File and file-array values need a save context; use
/// [`to_api_string_with_context`] for those.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_api_string(value: &VariableValue) -> Result<String> {
    value.to_api_string()
}

/// Serializes a value to the canonical API string, pushing any file content
/// through the given save context.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_api_string_with_context(
    value: &VariableValue,
    context: &mut dyn SaveContext,
) -> Result<String> {
    value.to_api_string_with_context(context)
}

/// Parses a canonical API string into a value of the requested type.
///
/// # Examples
///
/// ```rust
/// use variable_interop::{from_api_string, VariableType, VariableValue};
///
/// let value = from_api_string(VariableType::IntegerArray, "1,2,3").unwrap();
/// assert_eq!(value.variable_type(), VariableType::IntegerArray);
/// ```
///
/// # Errors
///
/// Fails with [`Error::UnknownType`] for [`VariableType::Unknown`],
/// [`Error::Format`] on grammar violations, and [`Error::Overflow`] for
/// out-of-range numerals. File types need a load context; use
/// [`from_api_string_with_context`] for those.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_api_string(var_type: VariableType, source: &str) -> Result<VariableValue> {
    VariableValue::from_api_string(var_type, source)
}

/// Parses a canonical API string, resolving any file content through the
/// given load context.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_api_string_with_context(
    var_type: VariableType,
    source: &str,
    context: &mut dyn LoadContext,
) -> Result<VariableValue> {
    VariableValue::from_api_string_with_context(var_type, source, context)
}

/// Converts a value to a string formatted for the given locale.
///
/// # Errors
///
/// Fails with [`Error::UnsupportedLocale`] when the locale is unavailable.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_display_string(value: &VariableValue, locale_name: &str) -> Result<String> {
    formatted::to_display_string(value, locale_name)
}

/// Parses a locale-formatted string into a value of the requested type.
///
/// # Errors
///
/// Fails with [`Error::Format`] on unparsable input and with
/// [`Error::Unsupported`] for file types, which have no display parse.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_display_string(
    var_type: VariableType,
    source: &str,
    locale_name: &str,
) -> Result<VariableValue> {
    formatted::from_display_string(var_type, source, locale_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_round_trip_per_type() {
        let values = [
            VariableValue::from(-7i64),
            VariableValue::from(0.25),
            VariableValue::from(false),
            VariableValue::from("text"),
        ];
        for value in values {
            let wire = to_api_string(&value).unwrap();
            let back = from_api_string(value.variable_type(), &wire).unwrap();
            assert_eq!(back, value);
        }
    }

    #[test]
    fn test_display_and_api_strings_differ_only_by_locale() {
        let value = VariableValue::from(2.5);
        assert_eq!(to_api_string(&value).unwrap(), "2.5");
        assert_eq!(to_display_string(&value, "C").unwrap(), "2.5");
    }

    #[test]
    fn test_convert_entry_point() {
        let widened = convert(&VariableValue::from(2i64), VariableType::Real).unwrap();
        assert_eq!(widened, VariableValue::from(2.0));
    }
}
