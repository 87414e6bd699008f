//! Using the json5! macro for dynamic value construction.
//!
//! Run with: cargo run --example macro

use serde_json5::{json5, to_string_pretty};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let null_val = json5!(null);
    let bool_val = json5!(true);
    let number = json5!(42);
    let text = json5!("Hello, JSON5!");

    println!("Primitives:");
    println!("  null:   {}", null_val);
    println!("  bool:   {}", bool_val);
    println!("  number: {}", number);
    println!("  text:   {}\n", text);

    let numbers = json5!([1, 2, 3, 4, 5]);
    let mixed = json5!([1, "two", true, null, -3]);

    println!("Arrays:");
    println!("  Numbers: {}", numbers);
    println!("  Mixed:   {}\n", mixed);

    let name = "Alice";
    // Keys may be bare identifiers, as in JSON5
    let user = json5!({
        id: 123,
        name: name,
        "e-mail": "alice@example.com",
        tags: ["admin", "developer"],
        limits: {requests: (60 * 60), burst: 10, offset: -5},
    });

    println!("Object:\n{}", to_string_pretty(&user)?);
    Ok(())
}
