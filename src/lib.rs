//! # serde_json5
//!
//! A JSON5 parser and serializer with exact numbers and Serde support.
//!
//! ## What is JSON5?
//!
//! JSON5 extends JSON with the syntax people tend to write by hand: comments,
//! trailing commas, unquoted keys, single-quoted strings, hexadecimal numbers,
//! leading or trailing decimal points, `NaN` and `Infinity`, and escaped line
//! breaks inside strings. Every JSON document is also a JSON5 document.
//!
//! ## Key Features
//!
//! - **Exact Numbers**: integers are arbitrary precision and decimals keep
//!   their digits and scale; only `NaN` and `Infinity` are floating point
//! - **Positioned Errors**: syntax errors name the index, column and line
//! - **Opt-in Extensions**: binary, octal and hexadecimal floating-point
//!   literals, digit separators, `\U` escapes and duplicate-key policies
//! - **Serde Compatible**: `from_str` and `to_string` work with any
//!   `#[derive(Serialize, Deserialize)]` type
//! - **Pluggable Trees**: [`parse_with_builder`] fills any representation
//!   through the [`builder`] traits
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! serde_json5 = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Typed Data
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_json5::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let text = "{
//!     // comments are fine
//!     id: 0x7B,
//!     name: 'Alice',
//!     active: true,
//! }";
//!
//! let user: User = from_str(text).unwrap();
//! assert_eq!(user, User { id: 123, name: "Alice".to_string(), active: true });
//! assert_eq!(to_string(&user).unwrap(), r#"{"id":123,"name":"Alice","active":true}"#);
//! ```
//!
//! ### Dynamic Values
//!
//! ```rust
//! use serde_json5::{parse, Number};
//!
//! let value = parse("{price: 19.990, huge: 123456789012345678901234567890}").unwrap();
//!
//! // Decimals keep their scale
//! assert_eq!(value["price"].to_string(), "19.990");
//! assert!(matches!(value["huge"].as_number(), Some(Number::Integer(_))));
//! ```
//!
//! ### Extensions
//!
//! ```rust
//! use serde_json5::{parse_with_options, Json5Options};
//!
//! let options = Json5Options::all_extensions();
//! let value = parse_with_options("[0b1010, 0o17, 1_000_000, 0x1.8p1]", &options).unwrap();
//! assert_eq!(value.to_string(), "[10,15,1000000,3.0]");
//! ```
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - typed round trip
//! - **`macro.rs`** - building values with `json5!`
//! - **`dynamic_values.rs`** - walking a [`Value`] tree
//! - **`custom_options.rs`** - extensions, duplicate keys and output formatting
//!
//! Run any demo with: `cargo run --example <name>`

pub mod builder;
pub mod de;
mod decimal;
pub mod error;
pub mod macros;
pub mod map;
mod number;
pub mod options;
mod scanner;
pub mod ser;
pub mod source;
mod string;
mod unicode;
pub mod value;

pub use de::{from_value, parse_with_builder, ValueDeserializer};
pub use decimal::Decimal;
pub use error::{Error, Position, Result};
pub use map::Json5Map;
pub use options::{default_options, set_default_options, DuplicateBehavior, Json5Options};
pub use ser::{quote, stringify, stringify_to_writer, to_value, Serializer, ValueSerializer};
pub use source::{CharSource, InfallibleChars, Utf8Chars};
pub use value::{Number, Value};

use builder::ValueBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Indent used by [`to_string_pretty`].
pub const PRETTY_INDENT: usize = 2;

/// Parses JSON5 text into a [`Value`] using the [default options](default_options).
///
/// # Examples
///
/// ```rust
/// use serde_json5::parse;
///
/// let value = parse("{a: [1, 'two', null,],}").unwrap();
/// assert_eq!(value["a"][1].as_str(), Some("two"));
/// ```
///
/// # Errors
///
/// Returns a syntax error, with its position, if `text` is not valid JSON5.
pub fn parse(text: &str) -> Result<Value> {
    parse_with_options(text, default_options())
}

/// Parses JSON5 text into a [`Value`] with explicit options.
///
/// # Errors
///
/// Returns a syntax error for malformed input and a configuration error for
/// literal forms the options do not allow.
pub fn parse_with_options(text: &str, options: &Json5Options) -> Result<Value> {
    parse_chars_with_options(text.chars(), options)
}

/// Parses JSON5 from any sequence of characters.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_chars<T>(chars: T) -> Result<Value>
where
    T: IntoIterator<Item = char>,
{
    parse_chars_with_options(chars, default_options())
}

/// Parses JSON5 from any sequence of characters with explicit options.
///
/// # Errors
///
/// See [`parse_with_options`].
pub fn parse_chars_with_options<T>(chars: T, options: &Json5Options) -> Result<Value>
where
    T: IntoIterator<Item = char>,
{
    parse_with_builder(CharSource::from_chars(chars), options, &mut ValueBuilder)
}

/// Parses UTF-8 encoded JSON5 from a reader.
///
/// The reader is buffered internally; pass `&mut reader` to keep ownership of
/// it.
///
/// # Examples
///
/// ```rust
/// use serde_json5::parse_reader;
///
/// let value = parse_reader(&b"[1, 2, 3]"[..]).unwrap();
/// assert_eq!(value.as_array().map(Vec::len), Some(3));
/// ```
///
/// # Errors
///
/// Read failures and invalid UTF-8 are reported as syntax errors whose
/// [`source`](std::error::Error::source) is the underlying I/O error.
pub fn parse_reader<R>(reader: R) -> Result<Value>
where
    R: io::Read,
{
    parse_reader_with_options(reader, default_options())
}

/// Parses UTF-8 encoded JSON5 from a reader with explicit options.
///
/// # Errors
///
/// See [`parse_reader`] and [`parse_with_options`].
pub fn parse_reader_with_options<R>(reader: R, options: &Json5Options) -> Result<Value>
where
    R: io::Read,
{
    parse_with_builder(CharSource::from_reader(reader), options, &mut ValueBuilder)
}

/// Deserialize an instance of type `T` from JSON5 text.
///
/// # Examples
///
/// ```rust
/// use serde_json5::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("{x: 1, y: -2,}").unwrap();
/// assert_eq!(point, Point { x: 1, y: -2 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid JSON5 or does not match `T`.
pub fn from_str<T>(text: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_str_with_options(text, default_options())
}

/// Deserialize an instance of type `T` from JSON5 text with explicit options.
///
/// # Errors
///
/// Returns an error if the input is not valid JSON5 under `options` or does
/// not match `T`.
pub fn from_str_with_options<T>(text: &str, options: &Json5Options) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(parse_with_options(text, options)?)
}

/// Deserialize an instance of type `T` from UTF-8 encoded JSON5 bytes.
///
/// # Examples
///
/// ```rust
/// use serde_json5::from_slice;
///
/// let list: Vec<u8> = from_slice(b"[1, 2, 3]").unwrap();
/// assert_eq!(list, vec![1, 2, 3]);
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid JSON5, or do
/// not match `T`.
pub fn from_slice<T>(bytes: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(parse_reader(bytes)?)
}

/// Deserialize an instance of type `T` from a reader of UTF-8 encoded JSON5.
///
/// # Examples
///
/// ```rust
/// use serde_json5::from_reader;
/// use serde::Deserialize;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_reader(Cursor::new("{x: 1, y: 2}")).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid JSON5, or it
/// does not match `T`.
pub fn from_reader<R, T>(reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    from_reader_with_options(reader, default_options())
}

/// Deserialize an instance of type `T` from a reader with explicit options.
///
/// # Errors
///
/// See [`from_reader`].
pub fn from_reader_with_options<R, T>(reader: R, options: &Json5Options) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    from_value(parse_reader_with_options(reader, options)?)
}

/// Serialize any `T: Serialize` to compact JSON5 text.
///
/// # Examples
///
/// ```rust
/// use serde_json5::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// assert_eq!(to_string(&Point { x: 1, y: 2 }).unwrap(), r#"{"x":1,"y":2}"#);
/// ```
///
/// # Errors
///
/// Returns an error if `T` cannot be represented, or contains `NaN` or an
/// infinity that the default options do not allow.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, 0, default_options())
}

/// Serialize any `T: Serialize` to JSON5 text indented by [`PRETTY_INDENT`]
/// spaces per level.
///
/// # Examples
///
/// ```rust
/// use serde_json5::to_string_pretty;
///
/// assert_eq!(to_string_pretty(&vec![1, 2]).unwrap(), "[\n  1,\n  2\n]");
/// ```
///
/// # Errors
///
/// See [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, PRETTY_INDENT, default_options())
}

/// Serialize any `T: Serialize` to JSON5 text with an explicit indent and options.
///
/// # Examples
///
/// ```rust
/// use serde_json5::{to_string_with_options, Json5Options};
///
/// let options = Json5Options::new().with_quote_single(true);
/// assert_eq!(to_string_with_options(&["it's"], 0, &options).unwrap(), r"['it\'s']");
/// ```
///
/// # Errors
///
/// See [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, indent: usize, options: &Json5Options) -> Result<String>
where
    T: ?Sized + Serialize,
{
    stringify(&to_value(value)?, indent, options)
}

/// Serialize any `T: Serialize` as compact JSON5 into a writer.
///
/// # Examples
///
/// ```rust
/// use serde_json5::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &("a", 1)).unwrap();
/// assert_eq!(buffer, br#"["a",1]"#);
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, 0, default_options())
}

/// Serialize any `T: Serialize` into a writer with an explicit indent and options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(
    writer: W,
    value: &T,
    indent: usize,
    options: &Json5Options,
) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    stringify_to_writer(writer, &to_value(value)?, indent, options)
}
