//! Error types for variable conversion and serialization.
//!
//! Every failure in this crate is local and synchronous: a conversion or parse
//! either produces a value or returns one of the variants below to its caller.
//! Conversions are deterministic, so retrying an identical call produces an
//! identical failure, and there are no partial results: array conversions and
//! bounded parses are all-or-nothing.
//!
//! ## Error Categories
//!
//! - **Incompatible types**: a conversion that is never valid (array↔scalar,
//!   or a pair the conversion matrix rejects)
//! - **Format errors**: a string failed to parse against the expected grammar,
//!   canonical or locale-formatted
//! - **Overflow**: a numeric value outside the representable domain of the
//!   destination type
//! - **Unknown type**: an operation needed a concrete type but was given
//!   [`VariableType::Unknown`](crate::VariableType::Unknown)
//!
//! ## Examples
//!
//! ```rust
//! use variable_interop::{from_api_string, Error, VariableType};
//!
//! let result = from_api_string(VariableType::Real, "abc");
//! assert!(matches!(result, Err(Error::Format { .. })));
//! ```

use std::fmt;
use thiserror::Error;

use crate::variable_type::VariableType;

/// Represents all possible errors from conversion, serialization, and parsing.
///
/// Each variant carries enough context to report the failing value or type pair.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// Conversion between two types that is never valid
    #[error("cannot convert a value of type {from} to type {to}")]
    IncompatibleTypes { from: String, to: String },

    /// A string did not match the expected grammar
    #[error("the string is incorrectly formatted: {detail}")]
    Format { detail: String },

    /// A numeric value is outside the destination type's representable domain
    #[error("the value {value} is outside the range representable as {target}")]
    Overflow { value: String, target: String },

    /// An operation required a concrete type but was given `Unknown`
    #[error("cannot {operation} for the unknown variable type")]
    UnknownType { operation: String },

    /// The requested locale is not available on this system
    #[error("the locale {0:?} is not supported on this system")]
    UnsupportedLocale(String),

    /// The operation is not supported for the value's type
    #[error("unsupported operation: {0}")]
    Unsupported(String),

    /// A value was required but its state is marked invalid
    #[error("the variable value is marked invalid")]
    InvalidValue,

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates an incompatible-types error naming both sides of the conversion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use variable_interop::{Error, VariableType};
    ///
    /// let err = Error::incompatible_types(VariableType::RealArray, VariableType::Real);
    /// assert!(err.to_string().contains("RealArrayValue"));
    /// ```
    pub fn incompatible_types(from: VariableType, to: VariableType) -> Self {
        Error::IncompatibleTypes {
            from: from.associated_type_name().to_string(),
            to: to.associated_type_name().to_string(),
        }
    }

    /// Creates an incompatible-types error where the destination is a foreign type name.
    pub fn incompatible_with(from: VariableType, to: &str) -> Self {
        Error::IncompatibleTypes {
            from: from.associated_type_name().to_string(),
            to: to.to_string(),
        }
    }

    /// Creates a format error with a display message.
    pub fn format<T: fmt::Display>(detail: T) -> Self {
        Error::Format {
            detail: detail.to_string(),
        }
    }

    /// Creates an overflow error describing the offending value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use variable_interop::Error;
    ///
    /// let err = Error::overflow("9223372036854775808", "a 64-bit integer");
    /// assert!(err.to_string().contains("9223372036854775808"));
    /// ```
    pub fn overflow<T: fmt::Display>(value: T, target: &str) -> Self {
        Error::Overflow {
            value: value.to_string(),
            target: target.to_string(),
        }
    }

    /// Creates an unknown-type error for the named operation.
    pub fn unknown_type(operation: &str) -> Self {
        Error::UnknownType {
            operation: operation.to_string(),
        }
    }

    /// Creates an unsupported-operation error with a display message.
    pub fn unsupported<T: fmt::Display>(msg: T) -> Self {
        Error::Unsupported(msg.to_string())
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io<T: fmt::Display>(msg: T) -> Self {
        Error::Io(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
