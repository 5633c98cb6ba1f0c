//! Conversion visitors implementing the full type-conversion matrix.
//!
//! One visitor exists per destination type. Each implements
//! [`ValueVisitor`], so the compiler guarantees every source/destination pair
//! in the matrix has a defined outcome: a converted value or a typed error.
//! Visitors are stateless; conversions have no side effects.
//!
//! ## Examples
//!
//! ```rust
//! use variable_interop::{to_real_value, RealValue, VariableValue};
//!
//! let parsed = to_real_value(&VariableValue::from("3.2")).unwrap();
//! assert_eq!(parsed, RealValue(3.2));
//!
//! assert!(to_real_value(&VariableValue::from("abc")).is_err());
//! ```

use crate::array_values::{
    BooleanArrayValue, FileArrayValue, IntegerArrayValue, RealArrayValue, StringArrayValue,
};
use crate::error::{Error, Result};
use crate::file_value::FileValue;
use crate::scalar_values::{BooleanValue, IntegerValue, RealValue, StringValue};
use crate::variable_type::{vartype_accept, TypePseudoVisitor, VariableType};
use crate::variable_value::{ValueVisitor, VariableValue};

fn incompatible<T>(value_type: VariableType, target: VariableType) -> Result<T> {
    Err(Error::incompatible_types(value_type, target))
}

/// Converts any value to an [`IntegerValue`] where the matrix allows it.
struct ToInteger;

impl ValueVisitor for ToInteger {
    type Output = Result<IntegerValue>;

    fn visit_integer(&mut self, value: &IntegerValue) -> Self::Output {
        Ok(*value)
    }

    fn visit_real(&mut self, value: &RealValue) -> Self::Output {
        value.to_integer_value()
    }

    fn visit_boolean(&mut self, value: &BooleanValue) -> Self::Output {
        Ok(value.to_integer_value())
    }

    fn visit_string(&mut self, value: &StringValue) -> Self::Output {
        IntegerValue::from_api_string(value.as_str())
    }

    fn visit_file(&mut self, _: &FileValue) -> Self::Output {
        incompatible(VariableType::File, VariableType::Integer)
    }

    fn visit_integer_array(&mut self, _: &IntegerArrayValue) -> Self::Output {
        incompatible(VariableType::IntegerArray, VariableType::Integer)
    }

    fn visit_real_array(&mut self, _: &RealArrayValue) -> Self::Output {
        incompatible(VariableType::RealArray, VariableType::Integer)
    }

    fn visit_boolean_array(&mut self, _: &BooleanArrayValue) -> Self::Output {
        incompatible(VariableType::BooleanArray, VariableType::Integer)
    }

    fn visit_string_array(&mut self, _: &StringArrayValue) -> Self::Output {
        incompatible(VariableType::StringArray, VariableType::Integer)
    }

    fn visit_file_array(&mut self, _: &FileArrayValue) -> Self::Output {
        incompatible(VariableType::FileArray, VariableType::Integer)
    }
}

/// Converts any value to a [`RealValue`] where the matrix allows it.
struct ToReal;

impl ValueVisitor for ToReal {
    type Output = Result<RealValue>;

    fn visit_integer(&mut self, value: &IntegerValue) -> Self::Output {
        Ok(value.to_real_value())
    }

    fn visit_real(&mut self, value: &RealValue) -> Self::Output {
        Ok(*value)
    }

    fn visit_boolean(&mut self, value: &BooleanValue) -> Self::Output {
        Ok(value.to_real_value())
    }

    fn visit_string(&mut self, value: &StringValue) -> Self::Output {
        RealValue::from_api_string(value.as_str())
    }

    fn visit_file(&mut self, _: &FileValue) -> Self::Output {
        incompatible(VariableType::File, VariableType::Real)
    }

    fn visit_integer_array(&mut self, _: &IntegerArrayValue) -> Self::Output {
        incompatible(VariableType::IntegerArray, VariableType::Real)
    }

    fn visit_real_array(&mut self, _: &RealArrayValue) -> Self::Output {
        incompatible(VariableType::RealArray, VariableType::Real)
    }

    fn visit_boolean_array(&mut self, _: &BooleanArrayValue) -> Self::Output {
        incompatible(VariableType::BooleanArray, VariableType::Real)
    }

    fn visit_string_array(&mut self, _: &StringArrayValue) -> Self::Output {
        incompatible(VariableType::StringArray, VariableType::Real)
    }

    fn visit_file_array(&mut self, _: &FileArrayValue) -> Self::Output {
        incompatible(VariableType::FileArray, VariableType::Real)
    }
}

/// Converts any value to a [`BooleanValue`] where the matrix allows it.
struct ToBoolean;

impl ValueVisitor for ToBoolean {
    type Output = Result<BooleanValue>;

    fn visit_integer(&mut self, value: &IntegerValue) -> Self::Output {
        Ok(value.to_boolean_value())
    }

    fn visit_real(&mut self, value: &RealValue) -> Self::Output {
        Ok(value.to_boolean_value())
    }

    fn visit_boolean(&mut self, value: &BooleanValue) -> Self::Output {
        Ok(*value)
    }

    fn visit_string(&mut self, value: &StringValue) -> Self::Output {
        BooleanValue::from_api_string(value.as_str())
    }

    fn visit_file(&mut self, _: &FileValue) -> Self::Output {
        incompatible(VariableType::File, VariableType::Boolean)
    }

    fn visit_integer_array(&mut self, _: &IntegerArrayValue) -> Self::Output {
        incompatible(VariableType::IntegerArray, VariableType::Boolean)
    }

    fn visit_real_array(&mut self, _: &RealArrayValue) -> Self::Output {
        incompatible(VariableType::RealArray, VariableType::Boolean)
    }

    fn visit_boolean_array(&mut self, _: &BooleanArrayValue) -> Self::Output {
        incompatible(VariableType::BooleanArray, VariableType::Boolean)
    }

    fn visit_string_array(&mut self, _: &StringArrayValue) -> Self::Output {
        incompatible(VariableType::StringArray, VariableType::Boolean)
    }

    fn visit_file_array(&mut self, _: &FileArrayValue) -> Self::Output {
        incompatible(VariableType::FileArray, VariableType::Boolean)
    }
}

/// Converts any value to a [`StringValue`] via the canonical serializer.
///
/// Arrays serialize to their full wire form. Only file values are excluded,
/// since their serialization needs a save context.
struct ToString;

impl ValueVisitor for ToString {
    type Output = Result<StringValue>;

    fn visit_integer(&mut self, value: &IntegerValue) -> Self::Output {
        Ok(StringValue::from(value.to_api_string()))
    }

    fn visit_real(&mut self, value: &RealValue) -> Self::Output {
        Ok(StringValue::from(value.to_api_string()))
    }

    fn visit_boolean(&mut self, value: &BooleanValue) -> Self::Output {
        Ok(StringValue::from(value.to_api_string()))
    }

    fn visit_string(&mut self, value: &StringValue) -> Self::Output {
        Ok(value.clone())
    }

    fn visit_file(&mut self, _: &FileValue) -> Self::Output {
        incompatible(VariableType::File, VariableType::String)
    }

    fn visit_integer_array(&mut self, value: &IntegerArrayValue) -> Self::Output {
        Ok(StringValue::from(value.to_api_string()))
    }

    fn visit_real_array(&mut self, value: &RealArrayValue) -> Self::Output {
        Ok(StringValue::from(value.to_api_string()))
    }

    fn visit_boolean_array(&mut self, value: &BooleanArrayValue) -> Self::Output {
        Ok(StringValue::from(value.to_api_string()))
    }

    fn visit_string_array(&mut self, value: &StringArrayValue) -> Self::Output {
        Ok(StringValue::from(value.to_api_string()))
    }

    fn visit_file_array(&mut self, _: &FileArrayValue) -> Self::Output {
        incompatible(VariableType::FileArray, VariableType::String)
    }
}

/// Converts any value to an [`IntegerArrayValue`] where the matrix allows it.
struct ToIntegerArray;

impl ValueVisitor for ToIntegerArray {
    type Output = Result<IntegerArrayValue>;

    fn visit_integer(&mut self, _: &IntegerValue) -> Self::Output {
        incompatible(VariableType::Integer, VariableType::IntegerArray)
    }

    fn visit_real(&mut self, _: &RealValue) -> Self::Output {
        incompatible(VariableType::Real, VariableType::IntegerArray)
    }

    fn visit_boolean(&mut self, _: &BooleanValue) -> Self::Output {
        incompatible(VariableType::Boolean, VariableType::IntegerArray)
    }

    fn visit_string(&mut self, _: &StringValue) -> Self::Output {
        incompatible(VariableType::String, VariableType::IntegerArray)
    }

    fn visit_file(&mut self, _: &FileValue) -> Self::Output {
        incompatible(VariableType::File, VariableType::IntegerArray)
    }

    fn visit_integer_array(&mut self, value: &IntegerArrayValue) -> Self::Output {
        Ok(value.clone())
    }

    fn visit_real_array(&mut self, value: &RealArrayValue) -> Self::Output {
        value.to_integer_array_value()
    }

    fn visit_boolean_array(&mut self, value: &BooleanArrayValue) -> Self::Output {
        Ok(value.to_integer_array_value())
    }

    fn visit_string_array(&mut self, value: &StringArrayValue) -> Self::Output {
        value.to_integer_array_value()
    }

    fn visit_file_array(&mut self, _: &FileArrayValue) -> Self::Output {
        incompatible(VariableType::FileArray, VariableType::IntegerArray)
    }
}

/// Converts any value to a [`RealArrayValue`] where the matrix allows it.
struct ToRealArray;

impl ValueVisitor for ToRealArray {
    type Output = Result<RealArrayValue>;

    fn visit_integer(&mut self, _: &IntegerValue) -> Self::Output {
        incompatible(VariableType::Integer, VariableType::RealArray)
    }

    fn visit_real(&mut self, _: &RealValue) -> Self::Output {
        incompatible(VariableType::Real, VariableType::RealArray)
    }

    fn visit_boolean(&mut self, _: &BooleanValue) -> Self::Output {
        incompatible(VariableType::Boolean, VariableType::RealArray)
    }

    fn visit_string(&mut self, _: &StringValue) -> Self::Output {
        incompatible(VariableType::String, VariableType::RealArray)
    }

    fn visit_file(&mut self, _: &FileValue) -> Self::Output {
        incompatible(VariableType::File, VariableType::RealArray)
    }

    fn visit_integer_array(&mut self, value: &IntegerArrayValue) -> Self::Output {
        Ok(value.to_real_array_value())
    }

    fn visit_real_array(&mut self, value: &RealArrayValue) -> Self::Output {
        Ok(value.clone())
    }

    fn visit_boolean_array(&mut self, value: &BooleanArrayValue) -> Self::Output {
        Ok(value.to_real_array_value())
    }

    fn visit_string_array(&mut self, value: &StringArrayValue) -> Self::Output {
        value.to_real_array_value()
    }

    fn visit_file_array(&mut self, _: &FileArrayValue) -> Self::Output {
        incompatible(VariableType::FileArray, VariableType::RealArray)
    }
}

/// Converts any value to a [`BooleanArrayValue`] where the matrix allows it.
struct ToBooleanArray;

impl ValueVisitor for ToBooleanArray {
    type Output = Result<BooleanArrayValue>;

    fn visit_integer(&mut self, _: &IntegerValue) -> Self::Output {
        incompatible(VariableType::Integer, VariableType::BooleanArray)
    }

    fn visit_real(&mut self, _: &RealValue) -> Self::Output {
        incompatible(VariableType::Real, VariableType::BooleanArray)
    }

    fn visit_boolean(&mut self, _: &BooleanValue) -> Self::Output {
        incompatible(VariableType::Boolean, VariableType::BooleanArray)
    }

    fn visit_string(&mut self, _: &StringValue) -> Self::Output {
        incompatible(VariableType::String, VariableType::BooleanArray)
    }

    fn visit_file(&mut self, _: &FileValue) -> Self::Output {
        incompatible(VariableType::File, VariableType::BooleanArray)
    }

    fn visit_integer_array(&mut self, value: &IntegerArrayValue) -> Self::Output {
        Ok(value.to_boolean_array_value())
    }

    fn visit_real_array(&mut self, value: &RealArrayValue) -> Self::Output {
        Ok(value.to_boolean_array_value())
    }

    fn visit_boolean_array(&mut self, value: &BooleanArrayValue) -> Self::Output {
        Ok(value.clone())
    }

    fn visit_string_array(&mut self, value: &StringArrayValue) -> Self::Output {
        value.to_boolean_array_value()
    }

    fn visit_file_array(&mut self, _: &FileArrayValue) -> Self::Output {
        incompatible(VariableType::FileArray, VariableType::BooleanArray)
    }
}

/// Converts any value to a [`StringArrayValue`] where the matrix allows it.
struct ToStringArray;

impl ValueVisitor for ToStringArray {
    type Output = Result<StringArrayValue>;

    fn visit_integer(&mut self, _: &IntegerValue) -> Self::Output {
        incompatible(VariableType::Integer, VariableType::StringArray)
    }

    fn visit_real(&mut self, _: &RealValue) -> Self::Output {
        incompatible(VariableType::Real, VariableType::StringArray)
    }

    fn visit_boolean(&mut self, _: &BooleanValue) -> Self::Output {
        incompatible(VariableType::Boolean, VariableType::StringArray)
    }

    fn visit_string(&mut self, _: &StringValue) -> Self::Output {
        incompatible(VariableType::String, VariableType::StringArray)
    }

    fn visit_file(&mut self, _: &FileValue) -> Self::Output {
        incompatible(VariableType::File, VariableType::StringArray)
    }

    fn visit_integer_array(&mut self, value: &IntegerArrayValue) -> Self::Output {
        Ok(value.to_string_array_value())
    }

    fn visit_real_array(&mut self, value: &RealArrayValue) -> Self::Output {
        Ok(value.to_string_array_value())
    }

    fn visit_boolean_array(&mut self, value: &BooleanArrayValue) -> Self::Output {
        Ok(value.to_string_array_value())
    }

    fn visit_string_array(&mut self, value: &StringArrayValue) -> Self::Output {
        Ok(value.clone())
    }

    fn visit_file_array(&mut self, _: &FileArrayValue) -> Self::Output {
        incompatible(VariableType::FileArray, VariableType::StringArray)
    }
}

/// Converts the given value to an [`IntegerValue`].
///
/// Reals truncate toward zero and fail with an overflow error outside the
/// 64-bit domain; strings parse with the canonical grammar; booleans map to
/// `1`/`0`. Array and file sources are incompatible.
pub fn to_integer_value(value: &VariableValue) -> Result<IntegerValue> {
    value.accept(&mut ToInteger)
}

/// Converts the given value to a [`RealValue`].
///
/// Integers widen exactly (up to mantissa precision); strings parse with the
/// canonical grammar; booleans map to `1.0`/`0.0`. Array and file sources
/// are incompatible.
pub fn to_real_value(value: &VariableValue) -> Result<RealValue> {
    value.accept(&mut ToReal)
}

/// Converts the given value to a [`BooleanValue`].
///
/// Numerics are nonzero-is-true; strings recognize the boolean tokens before
/// falling back to numeric-nonzero. Array and file sources are incompatible.
pub fn to_boolean_value(value: &VariableValue) -> Result<BooleanValue> {
    value.accept(&mut ToBoolean)
}

/// Converts the given value to a [`StringValue`] via the canonical
/// serializer. Succeeds for every source except file values.
pub fn to_string_value(value: &VariableValue) -> Result<StringValue> {
    value.accept(&mut ToString)
}

/// Converts the given value to an [`IntegerArrayValue`] element-wise.
pub fn to_integer_array_value(value: &VariableValue) -> Result<IntegerArrayValue> {
    value.accept(&mut ToIntegerArray)
}

/// Converts the given value to a [`RealArrayValue`] element-wise.
pub fn to_real_array_value(value: &VariableValue) -> Result<RealArrayValue> {
    value.accept(&mut ToRealArray)
}

/// Converts the given value to a [`BooleanArrayValue`] element-wise.
pub fn to_boolean_array_value(value: &VariableValue) -> Result<BooleanArrayValue> {
    value.accept(&mut ToBooleanArray)
}

/// Converts the given value to a [`StringArrayValue`] element-wise.
pub fn to_string_array_value(value: &VariableValue) -> Result<StringArrayValue> {
    value.accept(&mut ToStringArray)
}

/// Converts a value to the requested destination type.
///
/// Identity conversions clone; everything else routes through the matching
/// conversion visitor. File destinations only accept file sources (the
/// identity), since file content cannot be fabricated from other types.
///
/// # Examples
///
/// ```rust
/// use variable_interop::{convert, VariableType, VariableValue};
///
/// let widened = convert(&VariableValue::from(2i64), VariableType::Real).unwrap();
/// assert_eq!(widened, VariableValue::from(2.0));
/// ```
pub fn convert(value: &VariableValue, destination: VariableType) -> Result<VariableValue> {
    struct Convert<'a> {
        value: &'a VariableValue,
    }

    impl Convert<'_> {
        fn identity_or_incompatible(&self, destination: VariableType) -> Result<VariableValue> {
            if self.value.variable_type() == destination {
                Ok(self.value.clone())
            } else {
                incompatible(self.value.variable_type(), destination)
            }
        }
    }

    impl TypePseudoVisitor for Convert<'_> {
        type Output = Result<VariableValue>;

        fn visit_unknown(&mut self) -> Self::Output {
            Err(Error::unknown_type("convert a value"))
        }

        fn visit_integer(&mut self) -> Self::Output {
            to_integer_value(self.value).map(VariableValue::Integer)
        }

        fn visit_real(&mut self) -> Self::Output {
            to_real_value(self.value).map(VariableValue::Real)
        }

        fn visit_boolean(&mut self) -> Self::Output {
            to_boolean_value(self.value).map(VariableValue::Boolean)
        }

        fn visit_string(&mut self) -> Self::Output {
            to_string_value(self.value).map(VariableValue::String)
        }

        fn visit_file(&mut self) -> Self::Output {
            self.identity_or_incompatible(VariableType::File)
        }

        fn visit_integer_array(&mut self) -> Self::Output {
            to_integer_array_value(self.value).map(VariableValue::IntegerArray)
        }

        fn visit_real_array(&mut self) -> Self::Output {
            to_real_array_value(self.value).map(VariableValue::RealArray)
        }

        fn visit_boolean_array(&mut self) -> Self::Output {
            to_boolean_array_value(self.value).map(VariableValue::BooleanArray)
        }

        fn visit_string_array(&mut self) -> Self::Output {
            to_string_array_value(self.value).map(VariableValue::StringArray)
        }

        fn visit_file_array(&mut self) -> Self::Output {
            self.identity_or_incompatible(VariableType::FileArray)
        }
    }

    vartype_accept(&mut Convert { value }, destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_conversions() {
        let value = VariableValue::from(5i64);
        assert_eq!(to_integer_value(&value).unwrap(), IntegerValue(5));
        let value = VariableValue::from("keep");
        assert_eq!(
            to_string_value(&value).unwrap(),
            StringValue::from("keep")
        );
    }

    #[test]
    fn test_boolean_coercions() {
        assert_eq!(
            to_boolean_value(&VariableValue::from(0i64)).unwrap(),
            BooleanValue(false)
        );
        assert_eq!(
            to_boolean_value(&VariableValue::from(-3.5)).unwrap(),
            BooleanValue(true)
        );
        assert_eq!(
            to_integer_value(&VariableValue::from(true)).unwrap(),
            IntegerValue(1)
        );
        assert_eq!(
            to_real_value(&VariableValue::from(false)).unwrap(),
            RealValue(0.0)
        );
    }

    #[test]
    fn test_string_coercions() {
        assert_eq!(
            to_real_value(&VariableValue::from("3.2")).unwrap(),
            RealValue(3.2)
        );
        assert!(matches!(
            to_real_value(&VariableValue::from("abc")),
            Err(Error::Format { .. })
        ));
        assert_eq!(
            to_boolean_value(&VariableValue::from("yes")).unwrap(),
            BooleanValue(true)
        );
    }

    #[test]
    fn test_cross_cardinality_is_incompatible() {
        let array = VariableValue::from(RealArrayValue::from_flat(vec![
            RealValue(1.1),
            RealValue(2.2),
        ]));
        assert!(matches!(
            to_real_value(&array),
            Err(Error::IncompatibleTypes { .. })
        ));
        let scalar = VariableValue::from(1.1);
        assert!(matches!(
            to_real_array_value(&scalar),
            Err(Error::IncompatibleTypes { .. })
        ));
    }

    #[test]
    fn test_array_to_string_scalar_uses_wire_form() {
        let array = VariableValue::from(IntegerArrayValue::from_rows(vec![
            vec![IntegerValue(1), IntegerValue(2)],
            vec![IntegerValue(3), IntegerValue(4)],
        ])
        .unwrap());
        assert_eq!(
            to_string_value(&array).unwrap().as_str(),
            "bounds[2,2]{1,2,3,4}"
        );
    }

    #[test]
    fn test_element_wise_failure_is_all_or_nothing() {
        let strings = VariableValue::from(StringArrayValue::from_flat(vec![
            StringValue::from("1.5"),
            StringValue::from("oops"),
        ]));
        assert!(to_real_array_value(&strings).is_err());
    }

    #[test]
    fn test_convert_dispatches_on_destination() {
        assert_eq!(
            convert(&VariableValue::from(2.7), VariableType::Integer).unwrap(),
            VariableValue::from(2i64)
        );
        assert!(convert(&VariableValue::from(2.7), VariableType::Unknown).is_err());
        assert!(matches!(
            convert(&VariableValue::from(2.7), VariableType::File),
            Err(Error::IncompatibleTypes { .. })
        ));
    }
}
