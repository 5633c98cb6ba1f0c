//! Integration tests for the conversion matrix.

use variable_interop::{
    convert, to_boolean_array_value, to_boolean_value, to_integer_array_value, to_integer_value,
    to_real_array_value, to_real_value, to_string_array_value, to_string_value, BooleanArrayValue,
    BooleanValue, Error, FileValue, IntegerArrayValue, IntegerValue, RealArrayValue, RealValue,
    StringArrayValue, StringValue, VariableType, VariableValue,
};

#[test]
fn test_identity_is_pass_through() {
    assert_eq!(
        to_real_value(&VariableValue::from(1.25)).unwrap(),
        RealValue(1.25)
    );
    assert_eq!(
        to_integer_value(&VariableValue::from(-3i64)).unwrap(),
        IntegerValue(-3)
    );
    assert_eq!(
        to_boolean_value(&VariableValue::from(true)).unwrap(),
        BooleanValue(true)
    );
    assert_eq!(
        to_string_value(&VariableValue::from("same")).unwrap(),
        StringValue::from("same")
    );
}

#[test]
fn test_integer_to_real_is_exact_widening() {
    assert_eq!(
        to_real_value(&VariableValue::from(1234567i64)).unwrap(),
        RealValue(1234567.0)
    );
}

#[test]
fn test_real_to_integer_truncates_toward_zero() {
    assert_eq!(
        to_integer_value(&VariableValue::from(2.9)).unwrap(),
        IntegerValue(2)
    );
    assert_eq!(
        to_integer_value(&VariableValue::from(-2.9)).unwrap(),
        IntegerValue(-2)
    );
    assert_eq!(
        to_integer_value(&VariableValue::from(0.5)).unwrap(),
        IntegerValue(0)
    );
}

#[test]
fn test_real_to_integer_range_and_finite_errors() {
    for out_of_domain in [1e19, -1e19, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let result = to_integer_value(&VariableValue::from(out_of_domain));
        assert!(
            matches!(result, Err(Error::Overflow { .. })),
            "{} should overflow",
            out_of_domain
        );
    }
}

#[test]
fn test_overflow_error_describes_value() {
    let error = to_integer_value(&VariableValue::from(f64::NAN)).unwrap_err();
    assert!(error.to_string().contains("NaN"));
}

#[test]
fn test_boolean_numeric_coercions() {
    assert_eq!(
        to_boolean_value(&VariableValue::from(2i64)).unwrap(),
        BooleanValue(true)
    );
    assert_eq!(
        to_boolean_value(&VariableValue::from(0.0)).unwrap(),
        BooleanValue(false)
    );
    assert_eq!(
        to_integer_value(&VariableValue::from(true)).unwrap(),
        IntegerValue(1)
    );
    assert_eq!(
        to_real_value(&VariableValue::from(true)).unwrap(),
        RealValue(1.0)
    );
}

#[test]
fn test_string_to_numeric_parses_canonical_grammar() {
    assert_eq!(
        to_real_value(&VariableValue::from("3.2")).unwrap(),
        RealValue(3.2)
    );
    assert_eq!(
        to_integer_value(&VariableValue::from("-17")).unwrap(),
        IntegerValue(-17)
    );
    assert_eq!(
        to_integer_value(&VariableValue::from("2.5e2")).unwrap(),
        IntegerValue(250)
    );
    assert!(matches!(
        to_real_value(&VariableValue::from("abc")),
        Err(Error::Format { .. })
    ));
    assert!(matches!(
        to_integer_value(&VariableValue::from("")),
        Err(Error::Format { .. })
    ));
}

#[test]
fn test_string_to_boolean_recognizes_words_then_numbers() {
    for token in ["true", "YES", "y"] {
        assert_eq!(
            to_boolean_value(&VariableValue::from(token)).unwrap(),
            BooleanValue(true)
        );
    }
    for token in ["False", "no", "N"] {
        assert_eq!(
            to_boolean_value(&VariableValue::from(token)).unwrap(),
            BooleanValue(false)
        );
    }
    assert_eq!(
        to_boolean_value(&VariableValue::from("-0.0")).unwrap(),
        BooleanValue(false)
    );
    assert!(to_boolean_value(&VariableValue::from("truthy")).is_err());
}

#[test]
fn test_everything_nonfile_converts_to_string() {
    assert_eq!(
        to_string_value(&VariableValue::from(3.2)).unwrap(),
        StringValue::from("3.2")
    );
    assert_eq!(
        to_string_value(&VariableValue::from(false)).unwrap(),
        StringValue::from("False")
    );
    let array = VariableValue::from(RealArrayValue::from_flat(vec![
        RealValue(1.1),
        RealValue(2.2),
    ]));
    assert_eq!(
        to_string_value(&array).unwrap(),
        StringValue::from("1.1,2.2")
    );
    assert!(matches!(
        to_string_value(&VariableValue::File(FileValue::empty())),
        Err(Error::IncompatibleTypes { .. })
    ));
}

#[test]
fn test_cross_cardinality_fails_naming_both_types() {
    let array = VariableValue::from(RealArrayValue::from_flat(vec![
        RealValue(1.1),
        RealValue(2.2),
    ]));
    match to_real_value(&array) {
        Err(Error::IncompatibleTypes { from, to }) => {
            assert_eq!(from, "RealArrayValue");
            assert_eq!(to, "RealValue");
        }
        other => panic!("expected incompatible types, found {:?}", other),
    }

    let scalar = VariableValue::from(3i64);
    assert!(matches!(
        to_integer_array_value(&scalar),
        Err(Error::IncompatibleTypes { .. })
    ));
}

#[test]
fn test_element_wise_array_conversions() {
    let integers = VariableValue::from(IntegerArrayValue::from_flat(vec![
        IntegerValue(0),
        IntegerValue(5),
    ]));
    assert_eq!(
        to_real_array_value(&integers).unwrap(),
        RealArrayValue::from_flat(vec![RealValue(0.0), RealValue(5.0)])
    );
    assert_eq!(
        to_boolean_array_value(&integers).unwrap(),
        BooleanArrayValue::from_flat(vec![BooleanValue(false), BooleanValue(true)])
    );
    assert_eq!(
        to_string_array_value(&integers).unwrap(),
        StringArrayValue::from_flat(vec![StringValue::from("0"), StringValue::from("5")])
    );
}

#[test]
fn test_string_array_to_integer_array_goes_through_real() {
    let strings = VariableValue::from(StringArrayValue::from_flat(vec![
        StringValue::from("2.9"),
        StringValue::from("-1e1"),
    ]));
    assert_eq!(
        to_integer_array_value(&strings).unwrap(),
        IntegerArrayValue::from_flat(vec![IntegerValue(2), IntegerValue(-10)])
    );
}

#[test]
fn test_array_conversion_failure_produces_no_partial_result() {
    let strings = VariableValue::from(StringArrayValue::from_flat(vec![
        StringValue::from("1.0"),
        StringValue::from("not a number"),
        StringValue::from("3.0"),
    ]));
    assert!(to_real_array_value(&strings).is_err());
}

#[test]
fn test_array_conversion_preserves_shape() {
    let reals = VariableValue::from(
        RealArrayValue::from_rows(vec![
            vec![RealValue(1.5), RealValue(2.5)],
            vec![RealValue(-0.5), RealValue(9.9)],
        ])
        .unwrap(),
    );
    let integers = to_integer_array_value(&reals).unwrap();
    assert_eq!(integers.shape(), &[2, 2]);
    assert_eq!(
        integers.values(),
        &[
            IntegerValue(1),
            IntegerValue(2),
            IntegerValue(0),
            IntegerValue(9)
        ]
    );
}

#[test]
fn test_convert_by_destination_tag() {
    assert_eq!(
        convert(&VariableValue::from("42"), VariableType::Integer).unwrap(),
        VariableValue::from(42i64)
    );
    assert_eq!(
        convert(&VariableValue::from(0i64), VariableType::Boolean).unwrap(),
        VariableValue::from(false)
    );
    let file = VariableValue::File(FileValue::empty());
    assert_eq!(
        convert(&file, VariableType::File).unwrap(),
        file
    );
    assert!(matches!(
        convert(&VariableValue::from(1i64), VariableType::File),
        Err(Error::IncompatibleTypes { .. })
    ));
    assert!(matches!(
        convert(&VariableValue::from(1i64), VariableType::Unknown),
        Err(Error::UnknownType { .. })
    ));
}

#[test]
fn test_file_never_coerces_to_other_types() {
    let file = VariableValue::File(FileValue::empty());
    assert!(to_integer_value(&file).is_err());
    assert!(to_real_value(&file).is_err());
    assert!(to_boolean_value(&file).is_err());
    assert!(to_real_array_value(&file).is_err());
}
