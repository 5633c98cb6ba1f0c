//! Integration tests for the locale-formatted string codec.
//!
//! End-to-end cases run in the `C` locale, which every system provides. The
//! behavior of other conventions (comma decimal points, grouping separators)
//! is covered against the pure helpers in `locale`, which do not depend on
//! locales being installed.

use variable_interop::locale::{format_real, parse_real, NumericConventions};
use variable_interop::{
    from_display_string, to_display_string, BooleanValue, Error, IntegerArrayValue, IntegerValue,
    RealArrayValue, RealValue, StringArrayValue, StringValue, VariableType, VariableValue,
};

fn comma_conventions() -> NumericConventions {
    NumericConventions {
        decimal_point: ",".to_string(),
        thousands_sep: ".".to_string(),
    }
}

#[test]
fn test_scalar_display_round_trip_c_locale() {
    let values = [
        VariableValue::from(0i64),
        VariableValue::from(-987654321i64),
        VariableValue::from(3.2),
        VariableValue::from(-0.015625),
        VariableValue::from(true),
        VariableValue::from(false),
        VariableValue::from("unchanged text"),
    ];
    for value in values {
        let display = to_display_string(&value, "C").unwrap();
        let parsed = from_display_string(value.variable_type(), &display, "C").unwrap();
        assert_eq!(parsed, value, "display form was {:?}", display);
    }
}

#[test]
fn test_real_display_round_trip_within_15_digits() {
    let original = RealValue(0.123456789012345678);
    let display = to_display_string(&VariableValue::Real(original), "C").unwrap();
    let parsed = match from_display_string(VariableType::Real, &display, "C").unwrap() {
        VariableValue::Real(parsed) => parsed,
        other => panic!("expected a real, found {:?}", other),
    };
    let relative = ((parsed.0 - original.0) / original.0).abs();
    assert!(relative < 1e-14, "relative error {}", relative);
}

#[test]
fn test_integer_display_has_no_grouping() {
    let display =
        to_display_string(&VariableValue::from(1234567890i64), "C").unwrap();
    assert_eq!(display, "1234567890");
}

#[test]
fn test_array_display_round_trip_c_locale() {
    let array = VariableValue::from(
        IntegerArrayValue::from_rows(vec![
            vec![IntegerValue(10), IntegerValue(20)],
            vec![IntegerValue(30), IntegerValue(40)],
        ])
        .unwrap(),
    );
    let display = to_display_string(&array, "C").unwrap();
    assert_eq!(display, "bounds[2,2]{10,20,30,40}");
    assert_eq!(
        from_display_string(VariableType::IntegerArray, &display, "C").unwrap(),
        array
    );
}

#[test]
fn test_string_array_display_quotes_elements() {
    let array = VariableValue::from(StringArrayValue::from_flat(vec![
        StringValue::from("one"),
        StringValue::from("two"),
    ]));
    let display = to_display_string(&array, "C").unwrap();
    assert_eq!(display, "\"one\",\"two\"");
    assert_eq!(
        from_display_string(VariableType::StringArray, &display, "C").unwrap(),
        array
    );
}

#[test]
fn test_comma_decimal_conventions_quote_real_elements() {
    // The element-quoting rule is driven by the conventions, exercised here
    // without requiring a comma-decimal locale to be installed.
    let conventions = comma_conventions();
    assert_eq!(format_real(RealValue(1.5), &conventions), "1,5");
    assert_eq!(
        parse_real("1,5", &conventions).unwrap(),
        RealValue(1.5)
    );
    assert_eq!(
        parse_real("1.234,56", &conventions).unwrap(),
        RealValue(1234.56)
    );
}

#[test]
fn test_boolean_display_words() {
    assert_eq!(
        to_display_string(&VariableValue::from(true), "C").unwrap(),
        "True"
    );
    for token in ["t", "on", "1", "yes"] {
        assert_eq!(
            from_display_string(VariableType::Boolean, token, "C").unwrap(),
            VariableValue::from(true),
            "{}",
            token
        );
    }
    for token in ["f", "off", "0", "no"] {
        assert_eq!(
            from_display_string(VariableType::Boolean, token, "C").unwrap(),
            VariableValue::from(false),
            "{}",
            token
        );
    }
    assert!(matches!(
        from_display_string(VariableType::Boolean, "2", "C"),
        Err(Error::Format { .. })
    ));
}

#[test]
fn test_boolean_array_display() {
    let array = VariableValue::from(
        variable_interop::BooleanArrayValue::from_rows(vec![
            vec![BooleanValue(true)],
            vec![BooleanValue(false)],
        ])
        .unwrap(),
    );
    assert_eq!(
        to_display_string(&array, "C").unwrap(),
        "bounds[2,1]{True,False}"
    );
}

#[test]
fn test_real_array_display_round_trip() {
    let array = VariableValue::from(RealArrayValue::from_flat(vec![
        RealValue(0.5),
        RealValue(-123.25),
        RealValue(1e18),
    ]));
    let display = to_display_string(&array, "C").unwrap();
    assert_eq!(display, "0.5,-123.25,1E+18");
    assert_eq!(
        from_display_string(VariableType::RealArray, &display, "C").unwrap(),
        array
    );
}

#[test]
fn test_unsupported_locale_fails() {
    assert!(matches!(
        to_display_string(&VariableValue::from(1.5), "zz_ZZ.not-a-locale"),
        Err(Error::UnsupportedLocale(_))
    ));
}

#[test]
fn test_file_types_have_no_display_parse() {
    for var_type in [VariableType::File, VariableType::FileArray] {
        assert!(matches!(
            from_display_string(var_type, "irrelevant", "C"),
            Err(Error::Unsupported(_))
        ));
    }
}

#[test]
fn test_unknown_type_has_no_display_parse() {
    assert!(matches!(
        from_display_string(VariableType::Unknown, "1", "C"),
        Err(Error::UnknownType { .. })
    ));
}
