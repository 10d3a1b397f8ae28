use ptfmt::Value;

#[test]
fn test_value_from_primitives() {
    assert_eq!(Value::from(1.5), Value::Number(1.5));
    assert_eq!(Value::from(7), Value::Integer(7));
    assert_eq!(Value::from("12"), Value::Text("12"));
    assert_eq!(Value::from(()), Value::Empty);
    assert_eq!(Value::from(None::<f64>), Value::Empty);
    assert_eq!(Value::from(Some(2.0)), Value::Number(2.0));
}

#[test]
fn test_value_accessors() {
    assert_eq!(Value::Integer(3).as_number(), Some(3.0));
    assert_eq!(Value::Text("x").as_number(), None);
    assert_eq!(Value::Text("x").as_text(), Some("x"));
    assert!(Value::Number(0.0).is_numeric());
    assert!(!Value::Bool(true).is_numeric());
    assert!(Value::Empty.is_empty());
}

#[test]
fn test_value_type_names() {
    assert_eq!(Value::Number(1.0).type_name(), "float");
    assert_eq!(Value::Integer(1).type_name(), "integer");
    assert_eq!(Value::Text("").type_name(), "text");
    assert_eq!(Value::Bool(false).type_name(), "boolean");
    assert_eq!(Value::Empty.type_name(), "empty");
}
