//! The closed set of variable type tags and tag-only dispatch.
//!
//! [`VariableType`] identifies a value's concrete shape without holding a
//! value. Logic that needs to branch on a tag alone (building a default
//! value, deciding array-ness from a declared type) implements
//! [`TypePseudoVisitor`] once and dispatches through [`vartype_accept`]
//! instead of repeating an eleven-way `match` at every call site.
//!
//! ## Examples
//!
//! ```rust
//! use variable_interop::VariableType;
//!
//! assert!(VariableType::RealArray.is_array());
//! assert_eq!(
//!     VariableType::Real.to_array_type().unwrap(),
//!     VariableType::RealArray
//! );
//! assert_eq!(VariableType::from_alias("double[]"), VariableType::RealArray);
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::metadata::{
    BooleanArrayMetadata, BooleanMetadata, FileArrayMetadata, FileMetadata, IntegerArrayMetadata,
    IntegerMetadata, RealArrayMetadata, RealMetadata, StringArrayMetadata, StringMetadata,
    VariableMetadata,
};
use crate::variable_value::VariableValue;

/// An enumeration of the possible variable types.
///
/// Every scalar type has an array counterpart; `Unknown` has none. When
/// editing this enumeration, be sure to also update [`TypePseudoVisitor`] and
/// [`crate::ValueVisitor`](crate::ValueVisitor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VariableType {
    /// Type is unknown.
    #[default]
    Unknown,
    /// Integer values, stored as 64-bit signed integers.
    Integer,
    /// Real values, stored as 64-bit floating point numbers.
    Real,
    /// Boolean values.
    Boolean,
    /// String values.
    String,
    /// File values.
    File,
    /// Arrays of integer values. Multidimensional arrays are supported.
    IntegerArray,
    /// Arrays of real values. Multidimensional arrays are supported.
    RealArray,
    /// Arrays of Boolean values. Multidimensional arrays are supported.
    BooleanArray,
    /// Arrays of string values. Multidimensional arrays are supported.
    StringArray,
    /// Arrays of file values. Multidimensional arrays are supported.
    FileArray,
}

impl VariableType {
    /// Gets the name of the associated value type (`IntegerValue`,
    /// `RealArrayValue`, ...), or `"unknown"`.
    #[must_use]
    pub const fn associated_type_name(&self) -> &'static str {
        match self {
            VariableType::Unknown => "unknown",
            VariableType::Integer => "IntegerValue",
            VariableType::Real => "RealValue",
            VariableType::Boolean => "BooleanValue",
            VariableType::String => "StringValue",
            VariableType::File => "FileValue",
            VariableType::IntegerArray => "IntegerArrayValue",
            VariableType::RealArray => "RealArrayValue",
            VariableType::BooleanArray => "BooleanArrayValue",
            VariableType::StringArray => "StringArrayValue",
            VariableType::FileArray => "FileArrayValue",
        }
    }

    /// Gets the `VariableType` value from an alias string.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Accepted aliases are `int`/`integer`/`long`, `real`/`double`/`float`,
    /// `bool`/`boolean`, `str`/`string`, and `file`, each optionally suffixed
    /// with `[]` for the array counterpart. Anything else is `Unknown`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use variable_interop::VariableType;
    ///
    /// assert_eq!(VariableType::from_alias(" LONG "), VariableType::Integer);
    /// assert_eq!(VariableType::from_alias("str[]"), VariableType::StringArray);
    /// assert_eq!(VariableType::from_alias("quaternion"), VariableType::Unknown);
    /// ```
    #[must_use]
    pub fn from_alias(s: &str) -> VariableType {
        match s.trim().to_lowercase().as_str() {
            "int" | "integer" | "long" => VariableType::Integer,
            "real" | "double" | "float" => VariableType::Real,
            "bool" | "boolean" => VariableType::Boolean,
            "str" | "string" => VariableType::String,
            "file" => VariableType::File,
            "int[]" | "integer[]" | "long[]" => VariableType::IntegerArray,
            "real[]" | "double[]" | "float[]" => VariableType::RealArray,
            "bool[]" | "boolean[]" => VariableType::BooleanArray,
            "str[]" | "string[]" => VariableType::StringArray,
            "file[]" => VariableType::FileArray,
            _ => VariableType::Unknown,
        }
    }

    /// Returns `true` if this tag denotes an array type.
    #[must_use]
    pub fn is_array(&self) -> bool {
        struct IsArray;
        impl TypePseudoVisitor for IsArray {
            type Output = bool;
            fn visit_unknown(&mut self) -> bool {
                false
            }
            fn visit_integer(&mut self) -> bool {
                false
            }
            fn visit_real(&mut self) -> bool {
                false
            }
            fn visit_boolean(&mut self) -> bool {
                false
            }
            fn visit_string(&mut self) -> bool {
                false
            }
            fn visit_file(&mut self) -> bool {
                false
            }
            fn visit_integer_array(&mut self) -> bool {
                true
            }
            fn visit_real_array(&mut self) -> bool {
                true
            }
            fn visit_boolean_array(&mut self) -> bool {
                true
            }
            fn visit_string_array(&mut self) -> bool {
                true
            }
            fn visit_file_array(&mut self) -> bool {
                true
            }
        }
        vartype_accept(&mut IsArray, *self)
    }

    /// Gets the array type whose elements have this scalar type.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnknownType`] when called on `Unknown` or on a type
    /// that is already an array.
    pub fn to_array_type(&self) -> Result<VariableType> {
        struct ToArray;
        impl TypePseudoVisitor for ToArray {
            type Output = Option<VariableType>;
            fn visit_unknown(&mut self) -> Self::Output {
                None
            }
            fn visit_integer(&mut self) -> Self::Output {
                Some(VariableType::IntegerArray)
            }
            fn visit_real(&mut self) -> Self::Output {
                Some(VariableType::RealArray)
            }
            fn visit_boolean(&mut self) -> Self::Output {
                Some(VariableType::BooleanArray)
            }
            fn visit_string(&mut self) -> Self::Output {
                Some(VariableType::StringArray)
            }
            fn visit_file(&mut self) -> Self::Output {
                Some(VariableType::FileArray)
            }
            fn visit_integer_array(&mut self) -> Self::Output {
                None
            }
            fn visit_real_array(&mut self) -> Self::Output {
                None
            }
            fn visit_boolean_array(&mut self) -> Self::Output {
                None
            }
            fn visit_string_array(&mut self) -> Self::Output {
                None
            }
            fn visit_file_array(&mut self) -> Self::Output {
                None
            }
        }
        vartype_accept(&mut ToArray, *self)
            .ok_or_else(|| Error::unknown_type("determine an array type"))
    }

    /// Gets the scalar type of this array type's elements.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnknownType`] when called on `Unknown` or on a type
    /// that is not an array.
    pub fn element_type(&self) -> Result<VariableType> {
        struct ElementType;
        impl TypePseudoVisitor for ElementType {
            type Output = Option<VariableType>;
            fn visit_unknown(&mut self) -> Self::Output {
                None
            }
            fn visit_integer(&mut self) -> Self::Output {
                None
            }
            fn visit_real(&mut self) -> Self::Output {
                None
            }
            fn visit_boolean(&mut self) -> Self::Output {
                None
            }
            fn visit_string(&mut self) -> Self::Output {
                None
            }
            fn visit_file(&mut self) -> Self::Output {
                None
            }
            fn visit_integer_array(&mut self) -> Self::Output {
                Some(VariableType::Integer)
            }
            fn visit_real_array(&mut self) -> Self::Output {
                Some(VariableType::Real)
            }
            fn visit_boolean_array(&mut self) -> Self::Output {
                Some(VariableType::Boolean)
            }
            fn visit_string_array(&mut self) -> Self::Output {
                Some(VariableType::String)
            }
            fn visit_file_array(&mut self) -> Self::Output {
                Some(VariableType::File)
            }
        }
        vartype_accept(&mut ElementType, *self)
            .ok_or_else(|| Error::unknown_type("determine an element type"))
    }

    /// Constructs the default value for this type.
    ///
    /// Scalars default to zero, `false`, or the empty string; arrays default to
    /// a zero-dimensional array holding one default element; files default to
    /// the empty file value.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnknownType`] on `Unknown`.
    pub fn default_value(&self) -> Result<VariableValue> {
        use crate::array_values::{
            BooleanArrayValue, FileArrayValue, IntegerArrayValue, RealArrayValue, StringArrayValue,
        };
        use crate::file_value::FileValue;
        use crate::scalar_values::{BooleanValue, IntegerValue, RealValue, StringValue};

        struct DefaultValue;
        impl TypePseudoVisitor for DefaultValue {
            type Output = Result<VariableValue>;
            fn visit_unknown(&mut self) -> Self::Output {
                Err(Error::unknown_type("construct a default value"))
            }
            fn visit_integer(&mut self) -> Self::Output {
                Ok(VariableValue::Integer(IntegerValue::default()))
            }
            fn visit_real(&mut self) -> Self::Output {
                Ok(VariableValue::Real(RealValue::default()))
            }
            fn visit_boolean(&mut self) -> Self::Output {
                Ok(VariableValue::Boolean(BooleanValue::default()))
            }
            fn visit_string(&mut self) -> Self::Output {
                Ok(VariableValue::String(StringValue::default()))
            }
            fn visit_file(&mut self) -> Self::Output {
                Ok(VariableValue::File(FileValue::empty()))
            }
            fn visit_integer_array(&mut self) -> Self::Output {
                Ok(VariableValue::IntegerArray(IntegerArrayValue::default()))
            }
            fn visit_real_array(&mut self) -> Self::Output {
                Ok(VariableValue::RealArray(RealArrayValue::default()))
            }
            fn visit_boolean_array(&mut self) -> Self::Output {
                Ok(VariableValue::BooleanArray(BooleanArrayValue::default()))
            }
            fn visit_string_array(&mut self) -> Self::Output {
                Ok(VariableValue::StringArray(StringArrayValue::default()))
            }
            fn visit_file_array(&mut self) -> Self::Output {
                Ok(VariableValue::FileArray(FileArrayValue::default()))
            }
        }
        vartype_accept(&mut DefaultValue, *self)
    }

    /// Constructs the default metadata for this type.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnknownType`] on `Unknown`.
    pub fn default_metadata(&self) -> Result<VariableMetadata> {
        struct DefaultMetadata;
        impl TypePseudoVisitor for DefaultMetadata {
            type Output = Result<VariableMetadata>;
            fn visit_unknown(&mut self) -> Self::Output {
                Err(Error::unknown_type("construct default metadata"))
            }
            fn visit_integer(&mut self) -> Self::Output {
                Ok(VariableMetadata::Integer(IntegerMetadata::default()))
            }
            fn visit_real(&mut self) -> Self::Output {
                Ok(VariableMetadata::Real(RealMetadata::default()))
            }
            fn visit_boolean(&mut self) -> Self::Output {
                Ok(VariableMetadata::Boolean(BooleanMetadata::default()))
            }
            fn visit_string(&mut self) -> Self::Output {
                Ok(VariableMetadata::String(StringMetadata::default()))
            }
            fn visit_file(&mut self) -> Self::Output {
                Ok(VariableMetadata::File(FileMetadata::default()))
            }
            fn visit_integer_array(&mut self) -> Self::Output {
                Ok(VariableMetadata::IntegerArray(
                    IntegerArrayMetadata::default(),
                ))
            }
            fn visit_real_array(&mut self) -> Self::Output {
                Ok(VariableMetadata::RealArray(RealArrayMetadata::default()))
            }
            fn visit_boolean_array(&mut self) -> Self::Output {
                Ok(VariableMetadata::BooleanArray(
                    BooleanArrayMetadata::default(),
                ))
            }
            fn visit_string_array(&mut self) -> Self::Output {
                Ok(VariableMetadata::StringArray(
                    StringArrayMetadata::default(),
                ))
            }
            fn visit_file_array(&mut self) -> Self::Output {
                Ok(VariableMetadata::FileArray(FileArrayMetadata::default()))
            }
        }
        vartype_accept(&mut DefaultMetadata, *self)
    }
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VariableType::Unknown => "unknown",
            VariableType::Integer => "integer",
            VariableType::Real => "real",
            VariableType::Boolean => "boolean",
            VariableType::String => "string",
            VariableType::File => "file",
            VariableType::IntegerArray => "integer[]",
            VariableType::RealArray => "real[]",
            VariableType::BooleanArray => "boolean[]",
            VariableType::StringArray => "string[]",
            VariableType::FileArray => "file[]",
        };
        write!(f, "{}", name)
    }
}

impl Serialize for VariableType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for VariableType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(VariableType::from_alias(&s))
    }
}

/// Tag-only dispatch over [`VariableType`].
///
/// This is a "pseudo-visitor": it dispatches on the enumeration itself rather
/// than on a live value, for situations where no instance exists yet. The
/// single switch over the enumeration lives in [`vartype_accept`]; implementers
/// get one method per tag, checked for exhaustiveness by the compiler.
pub trait TypePseudoVisitor {
    /// Result type produced by every visit method.
    type Output;

    /// Visit the `Unknown` variable type.
    fn visit_unknown(&mut self) -> Self::Output;
    /// Visit the `Integer` variable type.
    fn visit_integer(&mut self) -> Self::Output;
    /// Visit the `Real` variable type.
    fn visit_real(&mut self) -> Self::Output;
    /// Visit the `Boolean` variable type.
    fn visit_boolean(&mut self) -> Self::Output;
    /// Visit the `String` variable type.
    fn visit_string(&mut self) -> Self::Output;
    /// Visit the `File` variable type.
    fn visit_file(&mut self) -> Self::Output;
    /// Visit the `IntegerArray` variable type.
    fn visit_integer_array(&mut self) -> Self::Output;
    /// Visit the `RealArray` variable type.
    fn visit_real_array(&mut self) -> Self::Output;
    /// Visit the `BooleanArray` variable type.
    fn visit_boolean_array(&mut self) -> Self::Output;
    /// Visit the `StringArray` variable type.
    fn visit_string_array(&mut self) -> Self::Output;
    /// Visit the `FileArray` variable type.
    fn visit_file_array(&mut self) -> Self::Output;
}

/// Invokes the pseudo-visitor method matching the given tag.
///
/// # Examples
///
/// ```rust
/// use variable_interop::{vartype_accept, TypePseudoVisitor, VariableType};
///
/// struct IsNumeric;
/// impl TypePseudoVisitor for IsNumeric {
///     type Output = bool;
///     fn visit_unknown(&mut self) -> bool { false }
///     fn visit_integer(&mut self) -> bool { true }
///     fn visit_real(&mut self) -> bool { true }
///     fn visit_boolean(&mut self) -> bool { false }
///     fn visit_string(&mut self) -> bool { false }
///     fn visit_file(&mut self) -> bool { false }
///     fn visit_integer_array(&mut self) -> bool { false }
///     fn visit_real_array(&mut self) -> bool { false }
///     fn visit_boolean_array(&mut self) -> bool { false }
///     fn visit_string_array(&mut self) -> bool { false }
///     fn visit_file_array(&mut self) -> bool { false }
/// }
///
/// assert!(vartype_accept(&mut IsNumeric, VariableType::Real));
/// assert!(!vartype_accept(&mut IsNumeric, VariableType::RealArray));
/// ```
pub fn vartype_accept<V: TypePseudoVisitor>(visitor: &mut V, vartype: VariableType) -> V::Output {
    match vartype {
        VariableType::Unknown => visitor.visit_unknown(),
        VariableType::Integer => visitor.visit_integer(),
        VariableType::Real => visitor.visit_real(),
        VariableType::Boolean => visitor.visit_boolean(),
        VariableType::String => visitor.visit_string(),
        VariableType::File => visitor.visit_file(),
        VariableType::IntegerArray => visitor.visit_integer_array(),
        VariableType::RealArray => visitor.visit_real_array(),
        VariableType::BooleanArray => visitor.visit_boolean_array(),
        VariableType::StringArray => visitor.visit_string_array(),
        VariableType::FileArray => visitor.visit_file_array(),
    }
}
