//! Working with Value for runtime flexibility.
//!
//! Run with: cargo run --example dynamic_values

use serde::{Deserialize, Serialize};
use serde_json5::{from_value, json5, parse, to_string_pretty, to_value, Number, Value};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = json5!({
        "host": "localhost",
        "port": 8080,
        "features": ["auth", "logging", "metrics"],
        "debug": true
    });

    println!("Config as JSON5:\n{}\n", to_string_pretty(&config)?);

    if let Value::Object(obj) = &config {
        if let Some(Value::String(host)) = obj.get("host") {
            println!("Accessing field 'host': {}", host);
        }

        if let Some(port) = obj.get("port").and_then(|v| v.as_i64()) {
            println!("Accessing field 'port': {}", port);
        }

        if let Some(Value::Array(features)) = obj.get("features") {
            println!("Accessing field 'features': {} items\n", features.len());
        }
    }

    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };

    let user_value = to_value(&user)?;
    println!("User as Value:\n{}\n", to_string_pretty(&user_value)?);

    let back: User = from_value(user_value)?;
    println!("Back to struct: {:?}\n", back);

    // Numbers keep their exact text
    let exact = parse("[123456789012345678901234567890, 0.10, 1.5e400]")?;
    for item in exact.as_array().into_iter().flatten() {
        match item.as_number() {
            Some(Number::Integer(n)) => println!("integer {}", n),
            Some(Number::Decimal(d)) => println!("decimal {}", d),
            Some(Number::Float(f)) => println!("float {}", f),
            None => {}
        }
    }

    Ok(())
}
