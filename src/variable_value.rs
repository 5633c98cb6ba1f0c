//! The canonical variant value and its double-dispatch visitor.
//!
//! [`VariableValue`] is the closed set of concrete value shapes. Operations
//! over values are written as [`ValueVisitor`] implementations: the enum's
//! single exhaustive `match` lives in [`VariableValue::accept`], and every
//! visitor must implement one method per concrete type, so adding a value
//! type or forgetting a visitor method is a compile error, never a silently
//! unhandled variant.
//!
//! ## Examples
//!
//! ```rust
//! use variable_interop::{VariableType, VariableValue};
//!
//! let value = VariableValue::from(3.2);
//! assert_eq!(value.variable_type(), VariableType::Real);
//! assert_eq!(value.to_api_string().unwrap(), "3.2");
//! ```

use crate::array_values::{
    BooleanArrayValue, FileArrayValue, IntegerArrayValue, RealArrayValue, StringArrayValue,
};
use crate::error::{Error, Result};
use crate::file_value::FileValue;
use crate::save_context::{LoadContext, SaveContext};
use crate::scalar_values::{BooleanValue, IntegerValue, RealValue, StringValue};
use crate::variable_type::{vartype_accept, TypePseudoVisitor, VariableType};

/// A value of any of the supported variable types.
///
/// All variants are immutable value types: cloning produces an independent
/// deep copy and equality compares contents.
#[derive(Debug, Clone, PartialEq)]
pub enum VariableValue {
    Integer(IntegerValue),
    Real(RealValue),
    Boolean(BooleanValue),
    String(StringValue),
    File(FileValue),
    IntegerArray(IntegerArrayValue),
    RealArray(RealArrayValue),
    BooleanArray(BooleanArrayValue),
    StringArray(StringArrayValue),
    FileArray(FileArrayValue),
}

/// Double dispatch over concrete value types.
///
/// There is no `visit_unknown`: live values always have a concrete type.
/// Visitors that only have a type tag belong on
/// [`TypePseudoVisitor`](crate::TypePseudoVisitor) instead.
pub trait ValueVisitor {
    /// Result type produced by every visit method.
    type Output;

    /// Visit an integer value.
    fn visit_integer(&mut self, value: &IntegerValue) -> Self::Output;
    /// Visit a real value.
    fn visit_real(&mut self, value: &RealValue) -> Self::Output;
    /// Visit a boolean value.
    fn visit_boolean(&mut self, value: &BooleanValue) -> Self::Output;
    /// Visit a string value.
    fn visit_string(&mut self, value: &StringValue) -> Self::Output;
    /// Visit a file value.
    fn visit_file(&mut self, value: &FileValue) -> Self::Output;
    /// Visit an integer array value.
    fn visit_integer_array(&mut self, value: &IntegerArrayValue) -> Self::Output;
    /// Visit a real array value.
    fn visit_real_array(&mut self, value: &RealArrayValue) -> Self::Output;
    /// Visit a boolean array value.
    fn visit_boolean_array(&mut self, value: &BooleanArrayValue) -> Self::Output;
    /// Visit a string array value.
    fn visit_string_array(&mut self, value: &StringArrayValue) -> Self::Output;
    /// Visit a file array value.
    fn visit_file_array(&mut self, value: &FileArrayValue) -> Self::Output;
}

impl VariableValue {
    /// Invokes the visitor method matching this value's concrete type.
    pub fn accept<V: ValueVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            VariableValue::Integer(value) => visitor.visit_integer(value),
            VariableValue::Real(value) => visitor.visit_real(value),
            VariableValue::Boolean(value) => visitor.visit_boolean(value),
            VariableValue::String(value) => visitor.visit_string(value),
            VariableValue::File(value) => visitor.visit_file(value),
            VariableValue::IntegerArray(value) => visitor.visit_integer_array(value),
            VariableValue::RealArray(value) => visitor.visit_real_array(value),
            VariableValue::BooleanArray(value) => visitor.visit_boolean_array(value),
            VariableValue::StringArray(value) => visitor.visit_string_array(value),
            VariableValue::FileArray(value) => visitor.visit_file_array(value),
        }
    }

    /// The type tag of this value's concrete shape.
    #[must_use]
    pub fn variable_type(&self) -> VariableType {
        struct TypeOf;
        impl ValueVisitor for TypeOf {
            type Output = VariableType;
            fn visit_integer(&mut self, _: &IntegerValue) -> VariableType {
                VariableType::Integer
            }
            fn visit_real(&mut self, _: &RealValue) -> VariableType {
                VariableType::Real
            }
            fn visit_boolean(&mut self, _: &BooleanValue) -> VariableType {
                VariableType::Boolean
            }
            fn visit_string(&mut self, _: &StringValue) -> VariableType {
                VariableType::String
            }
            fn visit_file(&mut self, _: &FileValue) -> VariableType {
                VariableType::File
            }
            fn visit_integer_array(&mut self, _: &IntegerArrayValue) -> VariableType {
                VariableType::IntegerArray
            }
            fn visit_real_array(&mut self, _: &RealArrayValue) -> VariableType {
                VariableType::RealArray
            }
            fn visit_boolean_array(&mut self, _: &BooleanArrayValue) -> VariableType {
                VariableType::BooleanArray
            }
            fn visit_string_array(&mut self, _: &StringArrayValue) -> VariableType {
                VariableType::StringArray
            }
            fn visit_file_array(&mut self, _: &FileArrayValue) -> VariableType {
                VariableType::FileArray
            }
        }
        self.accept(&mut TypeOf)
    }

    /// Serializes to the canonical, locale-invariant API string.
    ///
    /// # Errors
    ///
    /// File and file-array values need a save context; use
    /// [`Self::to_api_string_with_context`] for those.
    pub fn to_api_string(&self) -> Result<String> {
        let mut visitor = ToApiString { context: None };
        self.accept(&mut visitor)
    }

    /// Serializes to the canonical API string, pushing file content through
    /// the given save context.
    pub fn to_api_string_with_context(&self, context: &mut dyn SaveContext) -> Result<String> {
        let mut visitor = ToApiString {
            context: Some(context),
        };
        self.accept(&mut visitor)
    }

    /// Parses a canonical API string into a value of the requested type.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnknownType`] for `Unknown`, [`Error::Format`] on
    /// grammar violations, and [`Error::Overflow`] on out-of-range numerals.
    /// File types need a load context; use
    /// [`Self::from_api_string_with_context`] for those.
    pub fn from_api_string(var_type: VariableType, source: &str) -> Result<VariableValue> {
        let mut visitor = ApiStringToValue {
            source,
            context: None,
        };
        vartype_accept(&mut visitor, var_type)
    }

    /// Parses a canonical API string, pulling file content back through the
    /// given load context.
    pub fn from_api_string_with_context(
        var_type: VariableType,
        source: &str,
        context: &mut dyn LoadContext,
    ) -> Result<VariableValue> {
        let mut visitor = ApiStringToValue {
            source,
            context: Some(context),
        };
        vartype_accept(&mut visitor, var_type)
    }
}

/// Serializes any value to its canonical API string.
struct ToApiString<'a> {
    context: Option<&'a mut dyn SaveContext>,
}

impl ToApiString<'_> {
    fn require_context(&mut self) -> Result<&mut dyn SaveContext> {
        match self.context.as_mut() {
            Some(context) => Ok(&mut **context),
            None => Err(Error::unsupported(
                "file values require a save context for API serialization",
            )),
        }
    }
}

impl ValueVisitor for ToApiString<'_> {
    type Output = Result<String>;

    fn visit_integer(&mut self, value: &IntegerValue) -> Self::Output {
        Ok(value.to_api_string())
    }

    fn visit_real(&mut self, value: &RealValue) -> Self::Output {
        Ok(value.to_api_string())
    }

    fn visit_boolean(&mut self, value: &BooleanValue) -> Self::Output {
        Ok(value.to_api_string())
    }

    fn visit_string(&mut self, value: &StringValue) -> Self::Output {
        Ok(value.to_api_string())
    }

    fn visit_file(&mut self, value: &FileValue) -> Self::Output {
        let context = self.require_context()?;
        value.to_api_string(context)
    }

    fn visit_integer_array(&mut self, value: &IntegerArrayValue) -> Self::Output {
        Ok(value.to_api_string())
    }

    fn visit_real_array(&mut self, value: &RealArrayValue) -> Self::Output {
        Ok(value.to_api_string())
    }

    fn visit_boolean_array(&mut self, value: &BooleanArrayValue) -> Self::Output {
        Ok(value.to_api_string())
    }

    fn visit_string_array(&mut self, value: &StringArrayValue) -> Self::Output {
        Ok(value.to_api_string())
    }

    fn visit_file_array(&mut self, value: &FileArrayValue) -> Self::Output {
        let context = self.require_context()?;
        value.to_api_string(context)
    }
}

/// Parses an API string into a value, dispatched on the requested type tag.
///
/// This is tag-only dispatch: no value exists until parsing succeeds, which
/// is exactly what the pseudo-visitor exists for.
struct ApiStringToValue<'a> {
    source: &'a str,
    context: Option<&'a mut dyn LoadContext>,
}

impl ApiStringToValue<'_> {
    fn require_context(&mut self) -> Result<&mut dyn LoadContext> {
        match self.context.as_mut() {
            Some(context) => Ok(&mut **context),
            None => Err(Error::unsupported(
                "file values require a load context for API deserialization",
            )),
        }
    }
}

impl TypePseudoVisitor for ApiStringToValue<'_> {
    type Output = Result<VariableValue>;

    fn visit_unknown(&mut self) -> Self::Output {
        Err(Error::unknown_type("parse a value"))
    }

    fn visit_integer(&mut self) -> Self::Output {
        IntegerValue::from_api_string(self.source).map(VariableValue::Integer)
    }

    fn visit_real(&mut self) -> Self::Output {
        RealValue::from_api_string(self.source).map(VariableValue::Real)
    }

    fn visit_boolean(&mut self) -> Self::Output {
        BooleanValue::from_api_string(self.source).map(VariableValue::Boolean)
    }

    fn visit_string(&mut self) -> Self::Output {
        Ok(VariableValue::String(StringValue::from_api_string(
            self.source,
        )))
    }

    fn visit_file(&mut self) -> Self::Output {
        let source = self.source;
        let context = self.require_context()?;
        FileValue::from_api_string(source, context).map(VariableValue::File)
    }

    fn visit_integer_array(&mut self) -> Self::Output {
        IntegerArrayValue::from_api_string(self.source).map(VariableValue::IntegerArray)
    }

    fn visit_real_array(&mut self) -> Self::Output {
        RealArrayValue::from_api_string(self.source).map(VariableValue::RealArray)
    }

    fn visit_boolean_array(&mut self) -> Self::Output {
        BooleanArrayValue::from_api_string(self.source).map(VariableValue::BooleanArray)
    }

    fn visit_string_array(&mut self) -> Self::Output {
        StringArrayValue::from_api_string(self.source).map(VariableValue::StringArray)
    }

    fn visit_file_array(&mut self) -> Self::Output {
        let source = self.source;
        let context = self.require_context()?;
        FileArrayValue::from_api_string(source, context).map(VariableValue::FileArray)
    }
}

impl From<IntegerValue> for VariableValue {
    fn from(value: IntegerValue) -> Self {
        VariableValue::Integer(value)
    }
}

impl From<RealValue> for VariableValue {
    fn from(value: RealValue) -> Self {
        VariableValue::Real(value)
    }
}

impl From<BooleanValue> for VariableValue {
    fn from(value: BooleanValue) -> Self {
        VariableValue::Boolean(value)
    }
}

impl From<StringValue> for VariableValue {
    fn from(value: StringValue) -> Self {
        VariableValue::String(value)
    }
}

impl From<FileValue> for VariableValue {
    fn from(value: FileValue) -> Self {
        VariableValue::File(value)
    }
}

impl From<i64> for VariableValue {
    fn from(value: i64) -> Self {
        VariableValue::Integer(IntegerValue(value))
    }
}

impl From<f64> for VariableValue {
    fn from(value: f64) -> Self {
        VariableValue::Real(RealValue(value))
    }
}

impl From<bool> for VariableValue {
    fn from(value: bool) -> Self {
        VariableValue::Boolean(BooleanValue(value))
    }
}

impl From<&str> for VariableValue {
    fn from(value: &str) -> Self {
        VariableValue::String(StringValue::from(value))
    }
}

impl From<IntegerArrayValue> for VariableValue {
    fn from(value: IntegerArrayValue) -> Self {
        VariableValue::IntegerArray(value)
    }
}

impl From<RealArrayValue> for VariableValue {
    fn from(value: RealArrayValue) -> Self {
        VariableValue::RealArray(value)
    }
}

impl From<BooleanArrayValue> for VariableValue {
    fn from(value: BooleanArrayValue) -> Self {
        VariableValue::BooleanArray(value)
    }
}

impl From<StringArrayValue> for VariableValue {
    fn from(value: StringArrayValue) -> Self {
        VariableValue::StringArray(value)
    }
}

impl From<FileArrayValue> for VariableValue {
    fn from(value: FileArrayValue) -> Self {
        VariableValue::FileArray(value)
    }
}
