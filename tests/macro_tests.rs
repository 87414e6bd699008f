use num_bigint::BigInt;
use serde::Serialize;
use serde_json5::{json5, parse, Json5Map, Number, Value};

fn int(n: i64) -> Value {
    Value::Number(Number::Integer(BigInt::from(n)))
}

#[test]
fn test_json5_macro_null() {
    assert_eq!(json5!(null), Value::Null);
}

#[test]
fn test_json5_macro_booleans() {
    assert_eq!(json5!(true), Value::Bool(true));
    assert_eq!(json5!(false), Value::Bool(false));
}

#[test]
fn test_json5_macro_numbers() {
    assert_eq!(json5!(42), int(42));
    assert_eq!(json5!(-123), int(-123));
    assert_eq!(json5!(u64::MAX), Value::from(u64::MAX));

    let decimal = json5!(3.5);
    assert!(matches!(decimal, Value::Number(Number::Decimal(_))));
    assert_eq!(decimal.as_f64(), Some(3.5));

    assert!(json5!(f64::NAN).as_number().unwrap().is_nan());
}

#[test]
fn test_json5_macro_strings() {
    assert_eq!(json5!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(json5!(""), Value::String(String::new()));
}

#[test]
fn test_json5_macro_arrays() {
    assert_eq!(json5!([]), Value::Array(vec![]));
    assert_eq!(json5!([1, 2, 3]), Value::Array(vec![int(1), int(2), int(3)]));
    assert_eq!(
        json5!([1, "hello", true, null,]),
        Value::Array(vec![
            int(1),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );
}

#[test]
fn test_json5_macro_objects() {
    assert_eq!(json5!({}), Value::Object(Json5Map::new()));

    let object = json5!({
        "name": "Alice",
        "age": 30
    });
    let map = object.as_object().unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get_str("name").unwrap(), "Alice");
    assert_eq!(map.get("age"), Some(&int(30)));
}

#[test]
fn test_json5_macro_nested_matches_parse() {
    let built = json5!({
        "user": {
            "id": 123,
            "name": "Bob",
            "active": true
        },
        "tags": ["admin", "developer"],
        "offset": (-4),
    });
    let parsed = parse(
        "{user: {id: 123, name: 'Bob', active: true}, tags: ['admin', 'developer'], offset: -4}",
    )
    .unwrap();
    assert_eq!(built, parsed);
}

#[test]
fn test_json5_macro_reads_like_json5() {
    let built = json5!({
        name: "gateway",
        retries: -1,
        ratios: [0.5, -0.25,],
        limits: {min: -10, max: 10},
    });
    let parsed = parse(
        "{name: 'gateway', retries: -1, ratios: [0.5, -0.25,], limits: {min: -10, max: 10},}",
    )
    .unwrap();
    assert_eq!(built, parsed);
}

#[test]
fn test_json5_macro_variables_and_expressions() {
    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    let name = "Carol";
    let scores = vec![1, 2];
    let value = json5!({
        "name": name,
        "scores": scores,
        "origin": (Point { x: 0, y: -1 }),
        "sum": (1 + 2),
    });

    assert_eq!(value["name"].as_str(), Some("Carol"));
    assert_eq!(value["scores"][1], int(2));
    assert_eq!(value["origin"]["y"], int(-1));
    assert_eq!(value["sum"], int(3));
}

#[test]
fn test_json5_macro_display() {
    let value = json5!({"a": [1, {"b": null}], "c": "d"});
    assert_eq!(value.to_string(), r#"{"a":[1,{"b":null}],"c":"d"}"#);
}
