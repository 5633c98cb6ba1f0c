//! Pairing of a value with its validity.
//!
//! A variable can hold a value that is known to be stale or unusable without
//! being absent. [`VariableState`] keeps the two concerns separate so callers
//! can propagate "present but invalid" without resorting to sentinel values.

use crate::error::{Error, Result};
use crate::variable_value::VariableValue;

/// Bundles a variable value with a validity flag.
///
/// # Examples
///
/// ```rust
/// use variable_interop::{VariableState, VariableValue};
///
/// let state = VariableState::new(VariableValue::from(4i64), false);
/// assert!(!state.is_valid());
/// assert!(state.safe_value().is_err());
/// assert_eq!(state.value(), &VariableValue::from(4i64));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VariableState {
    value: VariableValue,
    is_valid: bool,
}

impl VariableState {
    /// Creates a new state wrapping the given value.
    pub fn new(value: VariableValue, is_valid: bool) -> VariableState {
        VariableState { value, is_valid }
    }

    /// The wrapped value, regardless of validity.
    #[must_use]
    pub fn value(&self) -> &VariableValue {
        &self.value
    }

    /// Whether the wrapped value is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// The wrapped value, only when it is valid.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidValue`] when the value is marked invalid.
    pub fn safe_value(&self) -> Result<&VariableValue> {
        if self.is_valid {
            Ok(&self.value)
        } else {
            Err(Error::InvalidValue)
        }
    }

    /// Consumes the state, returning the wrapped value regardless of
    /// validity.
    #[must_use]
    pub fn into_value(self) -> VariableValue {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_value_gates_on_validity() {
        let valid = VariableState::new(VariableValue::from(1.5), true);
        assert_eq!(valid.safe_value().unwrap(), &VariableValue::from(1.5));

        let invalid = VariableState::new(VariableValue::from(1.5), false);
        assert_eq!(invalid.safe_value(), Err(Error::InvalidValue));
    }

    #[test]
    fn test_clone_is_independent_and_equal() {
        let state = VariableState::new(VariableValue::from("x"), true);
        let clone = state.clone();
        assert_eq!(state, clone);
        assert_ne!(
            state,
            VariableState::new(VariableValue::from("x"), false)
        );
    }
}
