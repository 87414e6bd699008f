//! Basic JSON5 serialization and deserialization.
//!
//! Run with: cargo run --example simple

use serde::{Deserialize, Serialize};
use serde_json5::{from_str, to_string, to_string_pretty};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct User {
    id: u32,
    name: String,
    email: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let users = vec![
        User {
            id: 42,
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
        },
        User {
            id: 43,
            name: "Bob Smith".to_string(),
            email: "bob@example.com".to_string(),
        },
    ];

    let compact = to_string(&users)?;
    println!("Compact:\n{}\n", compact);
    println!("Pretty:\n{}\n", to_string_pretty(&users)?);

    let users_back: Vec<User> = from_str(&compact)?;
    assert_eq!(users, users_back);
    println!("✓ Round-trip successful");

    // Handwritten JSON5 with comments, unquoted keys and trailing commas
    let handwritten = r#"
        [
            // the first user
            {id: 42, name: 'Alice Johnson', email: 'alice@example.com',},
            {id: 0x2B, name: "Bob Smith", email: 'bob@example.com'},
        ]
    "#;
    let parsed: Vec<User> = from_str(handwritten)?;
    assert_eq!(users, parsed);
    println!("✓ Handwritten JSON5 parsed");

    Ok(())
}
