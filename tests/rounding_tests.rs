use ptfmt::{process_total_cost, to_number, NumberError, Value};

#[test]
fn test_round_half_up() {
    assert_eq!(to_number(1.005).unwrap(), 1.01);
    assert_eq!(to_number(1.004).unwrap(), 1.0);
    assert_eq!(to_number(2.675).unwrap(), 2.68);
    assert_eq!(to_number(0.125).unwrap(), 0.13);
}

#[test]
fn test_round_negative_away_from_zero() {
    assert_eq!(to_number(-1.005).unwrap(), -1.01);
    assert_eq!(to_number(-0.125).unwrap(), -0.13);
}

#[test]
fn test_integers_are_exact() {
    assert_eq!(to_number(42).unwrap(), 42.0);
    assert_eq!(to_number(-7_i64).unwrap(), -7.0);
}

#[test]
fn test_numeric_strings() {
    assert_eq!(to_number("10.0").unwrap(), 10.0);
    assert_eq!(to_number(" 123.456 ").unwrap(), 123.46);
    assert_eq!(to_number("1.5e2").unwrap(), 150.0);
    assert_eq!(to_number("-0.005").unwrap(), -0.01);
}

#[test]
fn test_idempotent() {
    for n in [0.1, 1.005, 33.333333, 1234.565, -98.765, 1e12 + 0.5] {
        let once = to_number(n).unwrap();
        assert_eq!(to_number(once).unwrap(), once, "not idempotent for {}", n);
    }
}

#[test]
fn test_large_floats_pass_through() {
    assert_eq!(to_number(1e20).unwrap(), 1e20);
    assert_eq!(to_number(-1e300).unwrap(), -1e300);
}

#[test]
fn test_infinity_is_rejected() {
    assert_eq!(to_number(f64::INFINITY), Err(NumberError::Infinite));
    assert_eq!(to_number(f64::NEG_INFINITY), Err(NumberError::Infinite));
    assert_eq!(to_number("inf"), Err(NumberError::Infinite));
    assert_eq!(to_number("-Infinity"), Err(NumberError::Infinite));
}

#[test]
fn test_unparseable_inputs() {
    for value in [
        Value::Text("abc"),
        Value::Text("12,5"),
        Value::Text(""),
        Value::Empty,
        Value::Bool(true),
        Value::Number(f64::NAN),
    ] {
        assert!(
            matches!(to_number(value), Err(NumberError::InvalidNumber { .. })),
            "expected InvalidNumber for {:?}",
            value
        );
    }
}

#[test]
fn test_total_cost_basic() {
    assert_eq!(process_total_cost(10, 25).unwrap(), 250.0);
    assert_eq!(process_total_cost(2.5, 4.0).unwrap(), 10.0);
    assert_eq!(process_total_cost(0, 99.99).unwrap(), 0.0);
}

#[test]
fn test_total_cost_rounds_float_artifacts() {
    // 1/3 repeating
    assert_eq!(process_total_cost(1.0, 1.0 / 3.0).unwrap(), 0.33);
    assert_eq!(process_total_cost(3, 33.333).unwrap(), 100.0);
    assert_eq!(process_total_cost(0.1, 3.0).unwrap(), 0.3);
    assert_eq!(process_total_cost(1.5, 0.67).unwrap(), 1.01);
}

#[test]
fn test_total_cost_integer_overflow_falls_back_to_float() {
    let total = process_total_cost(i64::MAX, 2).unwrap();
    assert_eq!(total, i64::MAX as f64 * 2.0);
}

#[test]
fn test_total_cost_rejects_non_numeric() {
    assert!(matches!(
        process_total_cost((), 10),
        Err(NumberError::TypeMismatch { got: "empty", .. })
    ));
    assert!(matches!(
        process_total_cost(10, "5"),
        Err(NumberError::TypeMismatch { got: "text", .. })
    ));
    assert!(matches!(
        process_total_cost(true, 5),
        Err(NumberError::TypeMismatch { got: "boolean", .. })
    ));
}

#[test]
fn test_total_cost_infinite_product() {
    assert_eq!(process_total_cost(1e308, 10.0), Err(NumberError::Infinite));
}
