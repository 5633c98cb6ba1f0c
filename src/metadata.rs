//! Metadata descriptors parallel to the value hierarchy.
//!
//! Metadata describes a variable without holding its value: documentation,
//! units, hard bounds, and enumerated legal values. Each value type has a
//! matching metadata type with the same tag, and metadata dispatches to
//! [`MetadataVisitor`] implementations exactly as values dispatch to
//! [`ValueVisitor`](crate::ValueVisitor).
//!
//! Array metadata wraps the corresponding scalar metadata: the descriptive
//! fields apply element-wise.

use std::ops::{Deref, DerefMut};

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::file_value::FileValue;
use crate::scalar_values::{BooleanValue, IntegerValue, RealValue, StringValue};
use crate::variable_type::VariableType;
use crate::variable_value::VariableValue;

/// Additional, caller-defined metadata fields, in insertion order.
pub type CustomMetadata = IndexMap<String, VariableValue>;

/// Provides metadata for `Boolean` variables.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BooleanMetadata {
    /// Description of the variable.
    pub description: String,
    /// Additional custom metadata.
    pub custom: CustomMetadata,
}

/// Provides metadata for `Integer` variables.
///
/// Bounds are hard limits: values outside them cause an error or invalid
/// result in the systems consuming the variable, which is different from the
/// soft bounds a design exploration might use.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IntegerMetadata {
    /// Description of the variable.
    pub description: String,
    /// Additional custom metadata.
    pub custom: CustomMetadata,
    /// Units of the variable.
    pub units: String,
    /// Display format of the variable.
    pub display_format: String,
    /// Hard lower bound, if any.
    pub lower_bound: Option<IntegerValue>,
    /// Hard upper bound, if any.
    pub upper_bound: Option<IntegerValue>,
    enumerated_values: Vec<IntegerValue>,
    enumerated_aliases: Vec<String>,
}

/// Provides metadata for `Real` variables.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RealMetadata {
    /// Description of the variable.
    pub description: String,
    /// Additional custom metadata.
    pub custom: CustomMetadata,
    /// Units of the variable.
    pub units: String,
    /// Display format of the variable.
    pub display_format: String,
    /// Hard lower bound, if any.
    pub lower_bound: Option<RealValue>,
    /// Hard upper bound, if any.
    pub upper_bound: Option<RealValue>,
    enumerated_values: Vec<RealValue>,
    enumerated_aliases: Vec<String>,
}

/// Provides metadata for `String` variables.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StringMetadata {
    /// Description of the variable.
    pub description: String,
    /// Additional custom metadata.
    pub custom: CustomMetadata,
    enumerated_values: Vec<StringValue>,
    enumerated_aliases: Vec<String>,
}

/// Provides metadata for `File` variables.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FileMetadata {
    /// Description of the variable.
    pub description: String,
    /// Additional custom metadata.
    pub custom: CustomMetadata,
}

macro_rules! enumeration_accessors {
    ($type:ty, $value_type:ty) => {
        impl $type {
            /// The ordered list of enumerated legal values, empty when the
            /// variable is unrestricted.
            #[must_use]
            pub fn enumerated_values(&self) -> &[$value_type] {
                &self.enumerated_values
            }

            /// Display aliases parallel to the enumerated values.
            #[must_use]
            pub fn enumerated_aliases(&self) -> &[String] {
                &self.enumerated_aliases
            }

            /// Sets the enumerated values and their display aliases.
            ///
            /// # Errors
            ///
            /// Fails with [`Error::Format`] unless the alias list has the
            /// same length as the value list or is empty.
            pub fn set_enumeration(
                &mut self,
                values: Vec<$value_type>,
                aliases: Vec<String>,
            ) -> Result<()> {
                if !aliases.is_empty() && aliases.len() != values.len() {
                    return Err(Error::format(
                        "enumerated aliases must parallel the enumerated values or be empty",
                    ));
                }
                self.enumerated_values = values;
                self.enumerated_aliases = aliases;
                Ok(())
            }
        }
    };
}

enumeration_accessors!(IntegerMetadata, IntegerValue);
enumeration_accessors!(RealMetadata, RealValue);
enumeration_accessors!(StringMetadata, StringValue);

macro_rules! array_metadata {
    ($(#[$doc:meta])* $name:ident wraps $element:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Default)]
        pub struct $name(pub $element);

        impl Deref for $name {
            type Target = $element;

            fn deref(&self) -> &$element {
                &self.0
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut $element {
                &mut self.0
            }
        }
    };
}

array_metadata! {
    /// Provides metadata for `IntegerArray` variables.
    IntegerArrayMetadata wraps IntegerMetadata
}
array_metadata! {
    /// Provides metadata for `RealArray` variables.
    RealArrayMetadata wraps RealMetadata
}
array_metadata! {
    /// Provides metadata for `BooleanArray` variables.
    BooleanArrayMetadata wraps BooleanMetadata
}
array_metadata! {
    /// Provides metadata for `StringArray` variables.
    StringArrayMetadata wraps StringMetadata
}
array_metadata! {
    /// Provides metadata for `FileArray` variables.
    FileArrayMetadata wraps FileMetadata
}

/// Double dispatch over concrete metadata types.
///
/// Mirrors [`ValueVisitor`](crate::ValueVisitor): one method per metadata
/// type, total by construction.
pub trait MetadataVisitor {
    /// Result type produced by every visit method.
    type Output;

    /// Visit integer metadata.
    fn visit_integer(&mut self, metadata: &IntegerMetadata) -> Self::Output;
    /// Visit real metadata.
    fn visit_real(&mut self, metadata: &RealMetadata) -> Self::Output;
    /// Visit boolean metadata.
    fn visit_boolean(&mut self, metadata: &BooleanMetadata) -> Self::Output;
    /// Visit string metadata.
    fn visit_string(&mut self, metadata: &StringMetadata) -> Self::Output;
    /// Visit file metadata.
    fn visit_file(&mut self, metadata: &FileMetadata) -> Self::Output;
    /// Visit integer array metadata.
    fn visit_integer_array(&mut self, metadata: &IntegerArrayMetadata) -> Self::Output;
    /// Visit real array metadata.
    fn visit_real_array(&mut self, metadata: &RealArrayMetadata) -> Self::Output;
    /// Visit boolean array metadata.
    fn visit_boolean_array(&mut self, metadata: &BooleanArrayMetadata) -> Self::Output;
    /// Visit string array metadata.
    fn visit_string_array(&mut self, metadata: &StringArrayMetadata) -> Self::Output;
    /// Visit file array metadata.
    fn visit_file_array(&mut self, metadata: &FileArrayMetadata) -> Self::Output;
}

/// Metadata of any of the supported variable types.
#[derive(Debug, Clone, PartialEq)]
pub enum VariableMetadata {
    Integer(IntegerMetadata),
    Real(RealMetadata),
    Boolean(BooleanMetadata),
    String(StringMetadata),
    File(FileMetadata),
    IntegerArray(IntegerArrayMetadata),
    RealArray(RealArrayMetadata),
    BooleanArray(BooleanArrayMetadata),
    StringArray(StringArrayMetadata),
    FileArray(FileArrayMetadata),
}

impl VariableMetadata {
    /// Invokes the visitor method matching this metadata's concrete type.
    pub fn accept<V: MetadataVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            VariableMetadata::Integer(metadata) => visitor.visit_integer(metadata),
            VariableMetadata::Real(metadata) => visitor.visit_real(metadata),
            VariableMetadata::Boolean(metadata) => visitor.visit_boolean(metadata),
            VariableMetadata::String(metadata) => visitor.visit_string(metadata),
            VariableMetadata::File(metadata) => visitor.visit_file(metadata),
            VariableMetadata::IntegerArray(metadata) => visitor.visit_integer_array(metadata),
            VariableMetadata::RealArray(metadata) => visitor.visit_real_array(metadata),
            VariableMetadata::BooleanArray(metadata) => visitor.visit_boolean_array(metadata),
            VariableMetadata::StringArray(metadata) => visitor.visit_string_array(metadata),
            VariableMetadata::FileArray(metadata) => visitor.visit_file_array(metadata),
        }
    }

    /// The type tag this metadata describes.
    #[must_use]
    pub fn variable_type(&self) -> VariableType {
        match self {
            VariableMetadata::Integer(_) => VariableType::Integer,
            VariableMetadata::Real(_) => VariableType::Real,
            VariableMetadata::Boolean(_) => VariableType::Boolean,
            VariableMetadata::String(_) => VariableType::String,
            VariableMetadata::File(_) => VariableType::File,
            VariableMetadata::IntegerArray(_) => VariableType::IntegerArray,
            VariableMetadata::RealArray(_) => VariableType::RealArray,
            VariableMetadata::BooleanArray(_) => VariableType::BooleanArray,
            VariableMetadata::StringArray(_) => VariableType::StringArray,
            VariableMetadata::FileArray(_) => VariableType::FileArray,
        }
    }

    /// Selects a default value satisfying this metadata's restrictions.
    ///
    /// The type's natural default is used when the bounds and enumeration
    /// allow it; otherwise the first admissible enumerated value, then the
    /// lower bound, then the upper bound; when nothing is admissible the
    /// type default is returned anyway.
    #[must_use]
    pub fn default_value(&self) -> VariableValue {
        struct DefaultValue;

        impl MetadataVisitor for DefaultValue {
            type Output = VariableValue;

            fn visit_integer(&mut self, metadata: &IntegerMetadata) -> VariableValue {
                VariableValue::Integer(select_numeric_default(
                    IntegerValue::default(),
                    metadata.enumerated_values(),
                    metadata.lower_bound,
                    metadata.upper_bound,
                ))
            }

            fn visit_real(&mut self, metadata: &RealMetadata) -> VariableValue {
                VariableValue::Real(select_numeric_default(
                    RealValue::default(),
                    metadata.enumerated_values(),
                    metadata.lower_bound,
                    metadata.upper_bound,
                ))
            }

            fn visit_boolean(&mut self, _: &BooleanMetadata) -> VariableValue {
                VariableValue::Boolean(BooleanValue::default())
            }

            fn visit_string(&mut self, metadata: &StringMetadata) -> VariableValue {
                let default = StringValue::default();
                let enumerated = metadata.enumerated_values();
                if enumerated.is_empty() || enumerated.contains(&default) {
                    VariableValue::String(default)
                } else {
                    VariableValue::String(enumerated[0].clone())
                }
            }

            fn visit_file(&mut self, _: &FileMetadata) -> VariableValue {
                VariableValue::File(FileValue::empty())
            }

            fn visit_integer_array(&mut self, _: &IntegerArrayMetadata) -> VariableValue {
                VariableValue::IntegerArray(Default::default())
            }

            fn visit_real_array(&mut self, _: &RealArrayMetadata) -> VariableValue {
                VariableValue::RealArray(Default::default())
            }

            fn visit_boolean_array(&mut self, _: &BooleanArrayMetadata) -> VariableValue {
                VariableValue::BooleanArray(Default::default())
            }

            fn visit_string_array(&mut self, _: &StringArrayMetadata) -> VariableValue {
                VariableValue::StringArray(Default::default())
            }

            fn visit_file_array(&mut self, _: &FileArrayMetadata) -> VariableValue {
                VariableValue::FileArray(Default::default())
            }
        }

        self.accept(&mut DefaultValue)
    }
}

/// Applies the bounded/enumerated default-selection rules for numeric types.
fn select_numeric_default<T: PartialOrd + Copy>(
    type_default: T,
    enumerated: &[T],
    lower_bound: Option<T>,
    upper_bound: Option<T>,
) -> T {
    let within_bounds = |candidate: &T| {
        lower_bound.as_ref().map_or(true, |low| candidate >= low)
            && upper_bound.as_ref().map_or(true, |high| candidate <= high)
    };
    let admissible = |candidate: &T| {
        within_bounds(candidate)
            && (enumerated.is_empty() || enumerated.iter().any(|value| value == candidate))
    };

    if admissible(&type_default) {
        return type_default;
    }
    if let Some(value) = enumerated.iter().find(|value| within_bounds(*value)) {
        return *value;
    }
    if let Some(low) = lower_bound {
        if admissible(&low) {
            return low;
        }
    }
    if let Some(high) = upper_bound {
        if admissible(&high) {
            return high;
        }
    }
    type_default
}

impl From<IntegerMetadata> for VariableMetadata {
    fn from(metadata: IntegerMetadata) -> Self {
        VariableMetadata::Integer(metadata)
    }
}

impl From<RealMetadata> for VariableMetadata {
    fn from(metadata: RealMetadata) -> Self {
        VariableMetadata::Real(metadata)
    }
}

impl From<BooleanMetadata> for VariableMetadata {
    fn from(metadata: BooleanMetadata) -> Self {
        VariableMetadata::Boolean(metadata)
    }
}

impl From<StringMetadata> for VariableMetadata {
    fn from(metadata: StringMetadata) -> Self {
        VariableMetadata::String(metadata)
    }
}

impl From<FileMetadata> for VariableMetadata {
    fn from(metadata: FileMetadata) -> Self {
        VariableMetadata::File(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_length_validated() {
        let mut metadata = StringMetadata::default();
        assert!(metadata
            .set_enumeration(
                vec![StringValue::from("a"), StringValue::from("b")],
                vec!["Alpha".to_string()],
            )
            .is_err());
        assert!(metadata
            .set_enumeration(
                vec![StringValue::from("a"), StringValue::from("b")],
                vec!["Alpha".to_string(), "Beta".to_string()],
            )
            .is_ok());
        assert!(metadata
            .set_enumeration(vec![StringValue::from("a")], Vec::new())
            .is_ok());
    }

    #[test]
    fn test_equality_includes_descriptive_fields() {
        let mut left = IntegerMetadata::default();
        let right = IntegerMetadata::default();
        assert_eq!(left, right);

        left.units = "mm".to_string();
        assert_ne!(left, right);
    }

    #[test]
    fn test_default_value_respects_bounds() {
        let mut metadata = IntegerMetadata::default();
        metadata.lower_bound = Some(IntegerValue(5));
        let selected = VariableMetadata::Integer(metadata).default_value();
        assert_eq!(selected, VariableValue::from(5i64));

        let mut metadata = RealMetadata::default();
        metadata.upper_bound = Some(RealValue(-1.5));
        let selected = VariableMetadata::Real(metadata).default_value();
        assert_eq!(selected, VariableValue::from(-1.5));
    }

    #[test]
    fn test_default_value_prefers_enumeration() {
        let mut metadata = IntegerMetadata::default();
        metadata
            .set_enumeration(vec![IntegerValue(3), IntegerValue(7)], Vec::new())
            .unwrap();
        let selected = VariableMetadata::Integer(metadata).default_value();
        assert_eq!(selected, VariableValue::from(3i64));

        let mut metadata = StringMetadata::default();
        metadata
            .set_enumeration(vec![StringValue::from("red")], Vec::new())
            .unwrap();
        let selected = VariableMetadata::String(metadata).default_value();
        assert_eq!(selected, VariableValue::from("red"));
    }

    #[test]
    fn test_default_value_plain_types() {
        assert_eq!(
            VariableMetadata::Boolean(BooleanMetadata::default()).default_value(),
            VariableValue::from(false)
        );
        assert_eq!(
            VariableMetadata::Integer(IntegerMetadata::default()).default_value(),
            VariableValue::from(0i64)
        );
    }

    #[test]
    fn test_array_metadata_derefs_to_element_metadata() {
        let mut metadata = RealArrayMetadata::default();
        metadata.units = "kg".to_string();
        assert_eq!(metadata.0.units, "kg");
        assert_eq!(
            VariableMetadata::RealArray(metadata).variable_type(),
            VariableType::RealArray
        );
    }
}
