//! Customizing parsing and output with Json5Options.
//!
//! Run with: cargo run --example custom_options

use serde::{Deserialize, Serialize};
use serde_json5::{
    parse_with_options, stringify, to_string_with_options, DuplicateBehavior, Json5Options,
};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct Config {
    name: String,
    greeting: String,
    ratio: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config {
        name: "MyApp".to_string(),
        greeting: "héllo ✓".to_string(),
        ratio: f64::INFINITY,
    };

    println!("Default:");
    println!("{}\n", serde_json5::to_string(&config)?);

    println!("Single quotes, ASCII only, indent 4:");
    let options = Json5Options::new()
        .with_quote_single(true)
        .with_stringify_ascii(true);
    println!("{}\n", to_string_with_options(&config, 4, &options)?);

    println!("Infinity disallowed:");
    let strict = Json5Options::new().with_infinity(false);
    match to_string_with_options(&config, 0, &strict) {
        Ok(text) => println!("{}\n", text),
        Err(e) => println!("error: {}\n", e),
    }

    println!("Extended number literals:");
    let extended = Json5Options::all_extensions();
    let value = parse_with_options("[0b1010, 0o17, 1_000_000, 0x1.8p1]", &extended)?;
    println!("{}\n", stringify(&value, 0, &extended)?);

    println!("Duplicate keys:");
    let text = "{tag: 'a', tag: 'b'}";
    for behavior in [
        DuplicateBehavior::Unique,
        DuplicateBehavior::LastWins,
        DuplicateBehavior::Collect,
    ] {
        let options = Json5Options::new().with_duplicate_behavior(behavior);
        match parse_with_options(text, &options) {
            Ok(value) => println!("  {:?}: {}", behavior, value),
            Err(e) => println!("  {:?}: error: {}", behavior, e),
        }
    }

    Ok(())
}
