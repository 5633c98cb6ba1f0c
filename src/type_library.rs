//! The pluggable type-library interface.
//!
//! A type library bridges this crate's canonical types and a host ecosystem's
//! native types at runtime. The conversion core does not implement one; it
//! defines the contract libraries implement and the descriptor types they
//! exchange. Canonical-to-canonical conversions should always be delegated to
//! [`convert`](crate::convert) so every library agrees on the scalar/array
//! matrix, while cross-ecosystem pairs are governed by each library's own
//! allow-list.

use std::collections::HashSet;

use crate::error::Result;
use crate::variable_type::VariableType;
use crate::variable_value::VariableValue;

/// Describes one data type a library supports.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeInformation {
    /// The canonical name of the type.
    pub canonical_name: String,
    /// Aliases accepted for the type.
    pub aliases: HashSet<String>,
    /// Detailed description of the type.
    pub description: String,
    /// The canonical variable type values of this type map to.
    pub value_type: VariableType,
}

/// Assertions about how a destination type behaves when assigned a value of
/// a different source type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeCompatibility {
    /// Whether linking the two types is allowed at all.
    pub allowed: bool,
    /// Whether the conversion can lose information.
    pub lossy: bool,
    /// Whether the conversion can fail at runtime for some values.
    pub runtime_checked: bool,
}

impl TypeCompatibility {
    /// The assertion that two types are not compatible at all.
    #[must_use]
    pub const fn incompatible() -> TypeCompatibility {
        TypeCompatibility {
            allowed: false,
            lossy: false,
            runtime_checked: false,
        }
    }

    /// The assertion that the conversion always succeeds without loss.
    #[must_use]
    pub const fn lossless() -> TypeCompatibility {
        TypeCompatibility {
            allowed: true,
            lossy: false,
            runtime_checked: false,
        }
    }
}

/// A library of types that can interoperate with the canonical variable
/// types.
pub trait TypeLibrary {
    /// A stable identifier for this library.
    fn type_library_identifier(&self) -> &str;

    /// The types this library supports.
    fn allowed_types(&self) -> Vec<TypeInformation>;

    /// States how a value of `source` behaves when linked to a variable of
    /// `destination`, by type name.
    fn compute_type_compatibility(
        &self,
        source: &str,
        destination: &str,
    ) -> Result<TypeCompatibility>;

    /// Converts a value declared as `source_type` to `destination_type`.
    ///
    /// Implementations must reject pairs outside their allow-list with an
    /// incompatible-types error and are expected to route pairs of canonical
    /// types through [`convert`](crate::convert) rather than reimplementing
    /// the matrix.
    fn runtime_convert(
        &self,
        value: &VariableValue,
        source_type: &str,
        destination_type: &str,
    ) -> Result<VariableValue>;
}
