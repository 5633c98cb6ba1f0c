//! Array value types backed by rectangular N-dimensional storage.
//!
//! [`ArrayValue`] owns a flat, row-major buffer plus an explicit shape, so the
//! element count and shape are consistent by construction and no ragged arrays
//! can exist. The four array value types are instantiations over the scalar
//! types, each with its canonical codec and element-wise conversions.
//!
//! ## Examples
//!
//! ```rust
//! use variable_interop::{IntegerArrayValue, IntegerValue};
//!
//! let array = IntegerArrayValue::from_rows(vec![
//!     vec![IntegerValue(1), IntegerValue(2)],
//!     vec![IntegerValue(3), IntegerValue(4)],
//! ])
//! .unwrap();
//! assert_eq!(array.to_api_string(), "bounds[2,2]{1,2,3,4}");
//! ```

use crate::array_codec;
use crate::error::{Error, Result};
use crate::escaping::{escape_string, unescape_string};
use crate::file_value::FileValue;
use crate::scalar_values::{BooleanValue, IntegerValue, RealValue, StringValue};

/// A rectangular N-dimensional array with homogeneous elements.
///
/// Storage is a flat buffer in row-major order with an explicit shape. A
/// zero-dimensional array (empty shape) holds exactly one element and
/// serializes as that element's scalar form.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayValue<T> {
    shape: Vec<usize>,
    values: Vec<T>,
}

impl<T> ArrayValue<T> {
    /// Creates an array from a shape and a row-major element buffer.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Format`] when the element count does not equal the
    /// product of the dimension sizes.
    pub fn new(shape: Vec<usize>, values: Vec<T>) -> Result<Self> {
        let expected: usize = shape.iter().product();
        if values.len() != expected {
            return Err(Error::format(format!(
                "array shape {:?} requires {} elements but {} were supplied",
                shape,
                expected,
                values.len()
            )));
        }
        Ok(ArrayValue { shape, values })
    }

    /// Creates a zero-dimensional array holding a single element.
    pub fn scalar(value: T) -> Self {
        ArrayValue {
            shape: Vec::new(),
            values: vec![value],
        }
    }

    /// Creates a one-dimensional array from a flat list of elements.
    pub fn from_flat(values: Vec<T>) -> Self {
        ArrayValue {
            shape: vec![values.len()],
            values,
        }
    }

    /// Creates a two-dimensional array from rows.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Format`] when the rows have differing lengths.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let row_count = rows.len();
        let column_count = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != column_count) {
            return Err(Error::format("array rows must all have the same length"));
        }
        Ok(ArrayValue {
            shape: vec![row_count, column_count],
            values: rows.into_iter().flatten().collect(),
        })
    }

    /// Dimension sizes of the array, outermost first.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of dimensions.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the array holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Elements in row-major (storage) order.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Gets the element at a multi-dimensional index, or `None` when the
    /// index rank or any coordinate is out of range.
    #[must_use]
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut flat = 0usize;
        for (coordinate, size) in index.iter().zip(&self.shape) {
            if coordinate >= size {
                return None;
            }
            flat = flat * size + coordinate;
        }
        self.values.get(flat)
    }

    /// Applies a conversion to every element, preserving the shape.
    pub fn map<U>(&self, mut convert: impl FnMut(&T) -> U) -> ArrayValue<U> {
        ArrayValue {
            shape: self.shape.clone(),
            values: self.values.iter().map(&mut convert).collect(),
        }
    }

    /// Applies a fallible conversion to every element, preserving the shape.
    /// A single element's failure fails the whole conversion.
    pub fn try_map<U>(&self, mut convert: impl FnMut(&T) -> Result<U>) -> Result<ArrayValue<U>> {
        let mut converted = Vec::with_capacity(self.values.len());
        for value in &self.values {
            converted.push(convert(value)?);
        }
        Ok(ArrayValue {
            shape: self.shape.clone(),
            values: converted,
        })
    }
}

impl<T: Default> Default for ArrayValue<T> {
    /// The default array is zero-dimensional, holding one default element.
    fn default() -> Self {
        ArrayValue::scalar(T::default())
    }
}

impl<T> From<Vec<T>> for ArrayValue<T> {
    fn from(values: Vec<T>) -> Self {
        ArrayValue::from_flat(values)
    }
}

/// Stores an array of 64-bit signed integers.
pub type IntegerArrayValue = ArrayValue<IntegerValue>;
/// Stores an array of 64-bit floating point numbers.
pub type RealArrayValue = ArrayValue<RealValue>;
/// Stores an array of Boolean values.
pub type BooleanArrayValue = ArrayValue<BooleanValue>;
/// Stores an array of string values.
pub type StringArrayValue = ArrayValue<StringValue>;
/// Stores an array of file values.
pub type FileArrayValue = ArrayValue<FileValue>;

impl ArrayValue<IntegerValue> {
    /// Serializes to the canonical API string.
    #[must_use]
    pub fn to_api_string(&self) -> String {
        array_codec::value_to_string(self, |element| element.to_api_string())
    }

    /// Parses a canonical API string into an integer array.
    pub fn from_api_string(value: &str) -> Result<IntegerArrayValue> {
        array_codec::string_to_value(value, |token| IntegerValue::from_api_string(token))
    }

    /// Converts every element to a real value.
    #[must_use]
    pub fn to_real_array_value(&self) -> RealArrayValue {
        self.map(IntegerValue::to_real_value)
    }

    /// Converts every element nonzero-is-true.
    #[must_use]
    pub fn to_boolean_array_value(&self) -> BooleanArrayValue {
        self.map(IntegerValue::to_boolean_value)
    }

    /// Converts every element to its canonical string form.
    #[must_use]
    pub fn to_string_array_value(&self) -> StringArrayValue {
        self.map(|element| StringValue::from(element.to_api_string()))
    }
}

impl ArrayValue<RealValue> {
    /// Serializes to the canonical API string.
    #[must_use]
    pub fn to_api_string(&self) -> String {
        array_codec::value_to_string(self, |element| element.to_api_string())
    }

    /// Parses a canonical API string into a real array.
    pub fn from_api_string(value: &str) -> Result<RealArrayValue> {
        array_codec::string_to_value(value, |token| RealValue::from_api_string(token))
    }

    /// Converts every element with the real-to-integer truncation rule.
    /// A single out-of-range element fails the whole conversion.
    pub fn to_integer_array_value(&self) -> Result<IntegerArrayValue> {
        self.try_map(RealValue::to_integer_value)
    }

    /// Converts every element nonzero-is-true.
    #[must_use]
    pub fn to_boolean_array_value(&self) -> BooleanArrayValue {
        self.map(RealValue::to_boolean_value)
    }

    /// Converts every element to its canonical string form.
    #[must_use]
    pub fn to_string_array_value(&self) -> StringArrayValue {
        self.map(|element| StringValue::from(element.to_api_string()))
    }
}

impl ArrayValue<BooleanValue> {
    /// Serializes to the canonical API string.
    #[must_use]
    pub fn to_api_string(&self) -> String {
        array_codec::value_to_string(self, |element| element.to_api_string())
    }

    /// Parses a canonical API string into a boolean array.
    pub fn from_api_string(value: &str) -> Result<BooleanArrayValue> {
        array_codec::string_to_value(value, |token| BooleanValue::from_api_string(token))
    }

    /// Converts every element to `1` or `0`.
    #[must_use]
    pub fn to_integer_array_value(&self) -> IntegerArrayValue {
        self.map(BooleanValue::to_integer_value)
    }

    /// Converts every element to `1.0` or `0.0`.
    #[must_use]
    pub fn to_real_array_value(&self) -> RealArrayValue {
        self.map(BooleanValue::to_real_value)
    }

    /// Converts every element to its canonical string form.
    #[must_use]
    pub fn to_string_array_value(&self) -> StringArrayValue {
        self.map(|element| StringValue::from(element.to_api_string()))
    }
}

impl ArrayValue<StringValue> {
    /// Serializes to the canonical API string.
    ///
    /// Each element is double-quoted with interchange escaping applied so
    /// that element text can never collide with the array delimiters.
    #[must_use]
    pub fn to_api_string(&self) -> String {
        array_codec::value_to_string(self, |element| {
            format!("\"{}\"", escape_string(element.as_str()))
        })
    }

    /// Parses a canonical API string into a string array, undoing the
    /// element escaping.
    pub fn from_api_string(value: &str) -> Result<StringArrayValue> {
        array_codec::string_to_value(value, |token| {
            Ok(StringValue::from(unescape_string(token)))
        })
    }

    /// Parses every element with the canonical real grammar.
    /// A single unparsable element fails the whole conversion.
    pub fn to_real_array_value(&self) -> Result<RealArrayValue> {
        self.try_map(|element| RealValue::from_api_string(element.as_str()))
    }

    /// Parses every element as a real and truncates with the
    /// real-to-integer rule.
    pub fn to_integer_array_value(&self) -> Result<IntegerArrayValue> {
        self.to_real_array_value()?.to_integer_array_value()
    }

    /// Parses every element with the boolean token grammar.
    pub fn to_boolean_array_value(&self) -> Result<BooleanArrayValue> {
        self.try_map(|element| BooleanValue::from_api_string(element.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_element_count() {
        assert!(ArrayValue::new(vec![2, 3], vec![0i32; 6]).is_ok());
        assert!(ArrayValue::new(vec![2, 3], vec![0i32; 5]).is_err());
        assert!(ArrayValue::new(vec![], vec![0i32]).is_ok());
        assert!(ArrayValue::new(vec![0], Vec::<i32>::new()).is_ok());
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let ragged = vec![vec![1, 2], vec![3]];
        assert!(ArrayValue::from_rows(ragged).is_err());
    }

    #[test]
    fn test_row_major_indexing() {
        let array = ArrayValue::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(array.shape(), &[2, 3]);
        assert_eq!(array.get(&[0, 0]), Some(&1));
        assert_eq!(array.get(&[1, 2]), Some(&6));
        assert_eq!(array.get(&[2, 0]), None);
        assert_eq!(array.get(&[0]), None);
        assert_eq!(array.values(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_scalar_shape() {
        let array = ArrayValue::scalar(7);
        assert_eq!(array.rank(), 0);
        assert_eq!(array.len(), 1);
        assert_eq!(array.get(&[]), Some(&7));
    }

    #[test]
    fn test_try_map_is_all_or_nothing() {
        let array = RealArrayValue::from_flat(vec![RealValue(1.5), RealValue(f64::NAN)]);
        assert!(array.to_integer_array_value().is_err());
    }

    #[test]
    fn test_string_array_elements_escaped() {
        let array = StringArrayValue::from_flat(vec![
            StringValue::from("a,b"),
            StringValue::from("c\"d"),
        ]);
        assert_eq!(array.to_api_string(), "\"a,b\",\"c\\\"d\"");
        let parsed = StringArrayValue::from_api_string(&array.to_api_string()).unwrap();
        assert_eq!(parsed, array);
    }
}
