//! Scalar value types and their canonical (API string) codecs.
//!
//! The four scalar types wrap their storage directly: a 64-bit signed integer,
//! a 64-bit float, a boolean, and immutable text. Each serializes to the
//! locale-invariant API grammar with [`std::fmt::Display`] / `to_api_string`
//! and parses back with `from_api_string`.
//!
//! ## Examples
//!
//! ```rust
//! use variable_interop::{IntegerValue, RealValue};
//!
//! let real = RealValue::from(3.2);
//! assert_eq!(real.to_api_string(), "3.2");
//!
//! let parsed = IntegerValue::from_api_string("-42").unwrap();
//! assert_eq!(parsed, IntegerValue::from(-42));
//! ```

use std::fmt;
use std::ops::Deref;

use crate::error::{Error, Result};

/// Smallest `f64` at or above which truncation no longer fits in an `i64`.
const I64_EXCLUSIVE_BOUND: f64 = 9_223_372_036_854_775_808.0; // 2^63

/// Canonical API spelling for positive infinity.
const CANONICAL_INF: &str = "Infinity";
/// Canonical API spelling for negative infinity.
const CANONICAL_NEG_INF: &str = "-Infinity";
/// Canonical API spelling for NaN.
const CANONICAL_NAN: &str = "NaN";

/// Stores a 64-bit signed integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct IntegerValue(pub i64);

impl IntegerValue {
    /// Serializes to the canonical API string (decimal, optional leading `-`).
    #[must_use]
    pub fn to_api_string(&self) -> String {
        self.0.to_string()
    }

    /// Creates an `IntegerValue` from an API string.
    ///
    /// Leading and trailing whitespace is ignored. Strings that look like
    /// floating-point numbers (containing `.`, `e`, or `E`) are parsed as
    /// reals and then converted with the real-to-integer rule.
    ///
    /// # Errors
    ///
    /// Out-of-range numerals fail with [`Error::Overflow`]; anything else that
    /// does not parse fails with [`Error::Format`].
    pub fn from_api_string(value: &str) -> Result<IntegerValue> {
        let trimmed = value.trim();
        if trimmed.contains(&['e', 'E', '.'][..]) {
            return RealValue::from_api_string(trimmed)?.to_integer_value();
        }
        trimmed.parse::<i64>().map(IntegerValue).map_err(|err| {
            use std::num::IntErrorKind;
            match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Error::overflow(trimmed, "a 64-bit integer")
                }
                _ => Error::format(format!("{:?} is not an integer numeral", value)),
            }
        })
    }

    /// Converts to a real value.
    ///
    /// A 64-bit float has a 52-bit mantissa, so this conversion is lossy for
    /// integers of sufficient magnitude.
    #[must_use]
    pub fn to_real_value(&self) -> RealValue {
        RealValue(self.0 as f64)
    }

    /// Converts to a boolean value; any nonzero value is `true`.
    #[must_use]
    pub fn to_boolean_value(&self) -> BooleanValue {
        BooleanValue(self.0 != 0)
    }
}

impl fmt::Display for IntegerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for IntegerValue {
    fn from(value: i64) -> Self {
        IntegerValue(value)
    }
}

impl From<i32> for IntegerValue {
    fn from(value: i32) -> Self {
        IntegerValue(value as i64)
    }
}

impl From<IntegerValue> for i64 {
    fn from(value: IntegerValue) -> Self {
        value.0
    }
}

/// Stores a 64-bit floating point value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct RealValue(pub f64);

impl RealValue {
    /// Serializes to the canonical API string.
    ///
    /// Uses the shortest representation that round-trips the 64-bit value,
    /// switching to scientific notation for very large or very small
    /// magnitudes. Non-finite values spell as `NaN`, `Infinity`, and
    /// `-Infinity`.
    #[must_use]
    pub fn to_api_string(&self) -> String {
        self.to_string()
    }

    /// Creates a `RealValue` from an API string.
    ///
    /// Accepts plain and scientific decimal notation plus the canonical
    /// non-finite spellings (case-insensitive).
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Format`] on an unparsable numeral.
    pub fn from_api_string(value: &str) -> Result<RealValue> {
        value
            .trim()
            .parse::<f64>()
            .map(RealValue)
            .map_err(|_| Error::format(format!("{:?} is not a real numeral", value)))
    }

    /// Converts to an integer value, truncating toward zero.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Overflow`] for NaN, infinities, and values whose
    /// truncation falls outside the 64-bit integer domain.
    pub fn to_integer_value(&self) -> Result<IntegerValue> {
        if !self.0.is_finite() {
            return Err(Error::overflow(self, "a 64-bit integer"));
        }
        let truncated = self.0.trunc();
        if truncated >= I64_EXCLUSIVE_BOUND || truncated < -I64_EXCLUSIVE_BOUND {
            return Err(Error::overflow(self, "a 64-bit integer"));
        }
        Ok(IntegerValue(truncated as i64))
    }

    /// Converts to a boolean value; anything other than exactly zero is `true`.
    #[must_use]
    pub fn to_boolean_value(&self) -> BooleanValue {
        BooleanValue(self.0 != 0.0)
    }
}

impl fmt::Display for RealValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            return write!(f, "{}", CANONICAL_NAN);
        }
        if self.0.is_infinite() {
            return write!(
                f,
                "{}",
                if self.0 > 0.0 {
                    CANONICAL_INF
                } else {
                    CANONICAL_NEG_INF
                }
            );
        }
        let magnitude = self.0.abs();
        if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
            write!(f, "{:e}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<f64> for RealValue {
    fn from(value: f64) -> Self {
        RealValue(value)
    }
}

impl From<RealValue> for f64 {
    fn from(value: RealValue) -> Self {
        value.0
    }
}

/// Stores a boolean value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BooleanValue(pub bool);

impl BooleanValue {
    /// Serializes to the canonical API string, `True` or `False`.
    #[must_use]
    pub fn to_api_string(&self) -> String {
        self.to_string()
    }

    /// Converts an interchange string to a boolean.
    ///
    /// The comparison is case-insensitive and ignores surrounding whitespace:
    /// `true`/`yes`/`y` are `true` and `false`/`no`/`n` are `false`. Anything
    /// else is parsed as a real number and converted nonzero-is-true.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Format`] when neither interpretation applies.
    pub fn str_to_bool(value: &str) -> Result<bool> {
        let normalized = value.trim().to_lowercase();
        match normalized.as_str() {
            "yes" | "y" | "true" => Ok(true),
            "no" | "n" | "false" => Ok(false),
            other => match other.parse::<f64>() {
                Ok(number) => Ok(number != 0.0),
                Err(_) => Err(Error::format(format!(
                    "{:?} is not a recognized boolean token",
                    value
                ))),
            },
        }
    }

    /// Creates a `BooleanValue` from an API string via [`Self::str_to_bool`].
    pub fn from_api_string(value: &str) -> Result<BooleanValue> {
        Self::str_to_bool(value).map(BooleanValue)
    }

    /// Converts to an integer value: `1` for `true`, `0` for `false`.
    #[must_use]
    pub fn to_integer_value(&self) -> IntegerValue {
        IntegerValue(i64::from(self.0))
    }

    /// Converts to a real value: `1.0` for `true`, `0.0` for `false`.
    #[must_use]
    pub fn to_real_value(&self) -> RealValue {
        RealValue(if self.0 { 1.0 } else { 0.0 })
    }
}

impl fmt::Display for BooleanValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl From<bool> for BooleanValue {
    fn from(value: bool) -> Self {
        BooleanValue(value)
    }
}

impl From<BooleanValue> for bool {
    fn from(value: BooleanValue) -> Self {
        value.0
    }
}

/// Stores an immutable text value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct StringValue(String);

impl StringValue {
    /// Creates a new string value.
    pub fn new(value: impl Into<String>) -> Self {
        StringValue(value.into())
    }

    /// Serializes to the canonical API string: the text itself, unescaped.
    ///
    /// Escaping only applies where a delimiter could collide with content,
    /// which is handled by the array codec.
    #[must_use]
    pub fn to_api_string(&self) -> String {
        self.0.clone()
    }

    /// Creates a `StringValue` from an API string. The string is stored
    /// exactly as given; no unescaping is performed.
    #[must_use]
    pub fn from_api_string(value: &str) -> StringValue {
        StringValue(value.to_string())
    }

    /// Returns the text as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StringValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Deref for StringValue {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StringValue {
    fn from(value: &str) -> Self {
        StringValue(value.to_string())
    }
}

impl From<String> for StringValue {
    fn from(value: String) -> Self {
        StringValue(value)
    }
}

impl From<StringValue> for String {
    fn from(value: StringValue) -> Self {
        value.0
    }
}
