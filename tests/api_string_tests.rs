//! Integration tests for the canonical API string codec.

use variable_interop::{
    from_api_string, to_api_string, to_api_string_with_context, BooleanArrayValue, BooleanValue,
    Error, FileValue, IntegerArrayValue, IntegerValue, NonManagingFileScope, RealArrayValue,
    RealValue, StringArrayValue, StringValue, VariableType, VariableValue, TEXT_MIMETYPE,
};

fn round_trip(value: VariableValue) {
    let wire = to_api_string(&value).unwrap();
    let parsed = from_api_string(value.variable_type(), &wire).unwrap();
    assert_eq!(parsed, value, "wire form was {:?}", wire);
}

#[test]
fn test_scalar_round_trips() {
    round_trip(VariableValue::from(0i64));
    round_trip(VariableValue::from(i64::MAX));
    round_trip(VariableValue::from(i64::MIN));
    round_trip(VariableValue::from(3.2));
    round_trip(VariableValue::from(-1.0 / 3.0));
    round_trip(VariableValue::from(f64::INFINITY));
    round_trip(VariableValue::from(f64::NEG_INFINITY));
    round_trip(VariableValue::from(true));
    round_trip(VariableValue::from(false));
    round_trip(VariableValue::from(""));
    round_trip(VariableValue::from("comma, quote\", backslash \\"));
}

#[test]
fn test_real_canonical_examples() {
    assert_eq!(to_api_string(&VariableValue::from(3.2)).unwrap(), "3.2");
    assert_eq!(
        from_api_string(VariableType::Real, "3.2").unwrap(),
        VariableValue::from(3.2)
    );
    assert!(matches!(
        from_api_string(VariableType::Real, "abc"),
        Err(Error::Format { .. })
    ));
}

#[test]
fn test_integer_boundary_parsing() {
    assert_eq!(
        from_api_string(VariableType::Integer, "9223372036854775807").unwrap(),
        VariableValue::from(i64::MAX)
    );
    assert!(matches!(
        from_api_string(VariableType::Integer, "9223372036854775808"),
        Err(Error::Overflow { .. })
    ));
    assert!(matches!(
        from_api_string(VariableType::Integer, "-9223372036854775809"),
        Err(Error::Overflow { .. })
    ));
}

#[test]
fn test_boolean_parse_tokens() {
    for (token, expected) in [
        ("True", true),
        ("yes", true),
        ("Y", true),
        ("1", true),
        ("False", false),
        ("NO", false),
        ("n", false),
        ("0.0", false),
    ] {
        assert_eq!(
            from_api_string(VariableType::Boolean, token).unwrap(),
            VariableValue::from(expected),
            "{}",
            token
        );
    }
    assert!(from_api_string(VariableType::Boolean, "affirmative").is_err());
}

#[test]
fn test_two_by_two_integer_array_wire_form() {
    let array = IntegerArrayValue::from_rows(vec![
        vec![IntegerValue(1), IntegerValue(2)],
        vec![IntegerValue(3), IntegerValue(4)],
    ])
    .unwrap();
    let value = VariableValue::from(array);
    assert_eq!(to_api_string(&value).unwrap(), "bounds[2,2]{1,2,3,4}");
    round_trip(value);
}

#[test]
fn test_boolean_array_wire_form() {
    let array = BooleanArrayValue::from_rows(vec![
        vec![BooleanValue(true)],
        vec![BooleanValue(false)],
    ])
    .unwrap();
    let value = VariableValue::from(array.clone());
    assert_eq!(to_api_string(&value).unwrap(), "bounds[2,1]{True,False}");

    let parsed = from_api_string(VariableType::BooleanArray, "bounds[2,1]{True,False}").unwrap();
    match parsed {
        VariableValue::BooleanArray(parsed) => {
            assert_eq!(parsed.shape(), &[2, 1]);
            assert_eq!(parsed, array);
        }
        other => panic!("expected a boolean array, found {:?}", other),
    }
}

#[test]
fn test_array_shape_reproduced_for_higher_ranks() {
    let array = RealArrayValue::new(
        vec![2, 3, 2],
        (0..12).map(|n| RealValue(f64::from(n) / 4.0)).collect(),
    )
    .unwrap();
    let wire = to_api_string(&VariableValue::from(array.clone())).unwrap();
    assert!(wire.starts_with("bounds[2,3,2]{"));
    match from_api_string(VariableType::RealArray, &wire).unwrap() {
        VariableValue::RealArray(parsed) => {
            assert_eq!(parsed.shape(), &[2, 3, 2]);
            assert_eq!(parsed.values(), array.values());
        }
        other => panic!("expected a real array, found {:?}", other),
    }
}

#[test]
fn test_flat_array_wire_form_has_no_bounds() {
    let array = RealArrayValue::from_flat(vec![RealValue(1.1), RealValue(2.2)]);
    assert_eq!(
        to_api_string(&VariableValue::from(array)).unwrap(),
        "1.1,2.2"
    );
}

#[test]
fn test_lone_element_parses_zero_dimensional() {
    match from_api_string(VariableType::IntegerArray, "42").unwrap() {
        VariableValue::IntegerArray(parsed) => {
            assert_eq!(parsed.rank(), 0);
            assert_eq!(parsed.values(), &[IntegerValue(42)]);
        }
        other => panic!("expected an integer array, found {:?}", other),
    }
}

#[test]
fn test_string_array_escaping_round_trip() {
    let array = StringArrayValue::from_rows(vec![
        vec![
            StringValue::from("first,second"),
            StringValue::from("with \"quotes\""),
        ],
        vec![
            StringValue::from("tab\tnewline\n"),
            StringValue::from("back\\slash"),
        ],
    ])
    .unwrap();
    round_trip(VariableValue::from(array));
}

#[test]
fn test_malformed_array_strings_fail() {
    for malformed in [
        "bounds[2,2]{1,2,3}",
        "bounds[2,2]{1,2,3,4,5}",
        "bounds[two]{1,2}",
        "bounds[2]{1,oops}",
        "1,oops,3",
    ] {
        assert!(
            matches!(
                from_api_string(VariableType::IntegerArray, malformed),
                Err(Error::Format { .. }) | Err(Error::Overflow { .. })
            ),
            "{}",
            malformed
        );
    }
}

#[test]
fn test_empty_string_parses_empty_array() {
    match from_api_string(VariableType::RealArray, "").unwrap() {
        VariableValue::RealArray(parsed) => assert!(parsed.is_empty()),
        other => panic!("expected a real array, found {:?}", other),
    }
}

#[test]
fn test_unknown_type_rejected() {
    assert!(matches!(
        from_api_string(VariableType::Unknown, "1"),
        Err(Error::UnknownType { .. })
    ));
}

#[test]
fn test_file_value_wire_form_uses_context() {
    let mut scope = NonManagingFileScope;
    let file = VariableValue::File(FileValue::from_local_file(
        "input/mesh.stl",
        TEXT_MIMETYPE,
        None,
    ));

    assert!(to_api_string(&file).is_err());
    let wire = to_api_string_with_context(&file, &mut scope).unwrap();
    assert!(wire.contains("\"contents\":\"input/mesh.stl\""));

    let parsed = variable_interop::from_api_string_with_context(
        VariableType::File,
        &wire,
        &mut scope,
    )
    .unwrap();
    match parsed {
        VariableValue::File(parsed) => {
            assert_eq!(parsed.content_path(), Some(std::path::Path::new("input/mesh.stl")));
        }
        other => panic!("expected a file, found {:?}", other),
    }
}
