//! JSON5 text output and serialization.
//!
//! [`Serializer`] writes a [`Value`] tree as JSON5 text, compact or indented.
//! [`ValueSerializer`] is the serde [`Serializer`](serde::Serializer) that
//! turns any `T: Serialize` into a [`Value`], which is how the typed entry
//! points in the crate root produce text.
//!
//! ## Layout
//!
//! With an indent of zero everything is written on one line with no spaces.
//! A positive indent puts every member and element on its own line, nested
//! that many spaces per level, with a space after each `:`. Empty containers
//! are always written as `{}` and `[]`. Keys are always quoted.
//!
//! ```rust
//! use serde_json5::{json5, stringify, Json5Options};
//!
//! let value = json5!({"name": "Alice", "tags": ["x"], "extra": {}});
//! let options = Json5Options::new();
//!
//! assert_eq!(
//!     stringify(&value, 0, &options).unwrap(),
//!     r#"{"name":"Alice","tags":["x"],"extra":{}}"#
//! );
//! assert_eq!(
//!     stringify(&value, 2, &options).unwrap(),
//!     "{\n  \"name\": \"Alice\",\n  \"tags\": [\n    \"x\"\n  ],\n  \"extra\": {}\n}"
//! );
//! ```

use crate::unicode::needs_unicode_escape;
use crate::value::{Number, NUMBER_TOKEN};
use crate::{Error, Json5Map, Json5Options, Result, Value};
use chrono::SecondsFormat;
use serde::{ser, Serialize};
use std::fmt::Write as _;
use std::io;

/// Writes [`Value`] trees as JSON5 text.
pub struct Serializer<'o> {
    output: String,
    indent: usize,
    options: &'o Json5Options,
}

impl<'o> Serializer<'o> {
    #[must_use]
    pub fn new(indent: usize, options: &'o Json5Options) -> Self {
        Serializer {
            output: String::new(),
            indent,
            options,
        }
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends `value` to the output.
    ///
    /// # Errors
    ///
    /// Fails when the tree holds `NaN` or an infinity that the options do not
    /// allow; nothing useful is left in the output in that case.
    pub fn serialize_value(&mut self, value: &Value) -> Result<()> {
        self.write_value(value, 0)
    }

    fn write_newline(&mut self, depth: usize) {
        if self.indent > 0 {
            self.output.push('\n');
            for _ in 0..depth * self.indent {
                self.output.push(' ');
            }
        }
    }

    fn write_value(&mut self, value: &Value, depth: usize) -> Result<()> {
        match value {
            Value::Null => self.output.push_str("null"),
            Value::Bool(b) => self.output.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => self.write_number(n)?,
            Value::String(s) => write_quoted(&mut self.output, s, self.options),
            Value::Array(arr) => self.write_array(arr, depth)?,
            Value::Object(obj) => self.write_object(obj, depth)?,
            Value::Instant(instant) => {
                if self.options.stringify_unix_instants {
                    let _ = write!(self.output, "{}", instant.timestamp());
                } else {
                    let text = instant.to_rfc3339_opts(SecondsFormat::AutoSi, true);
                    write_quoted(&mut self.output, &text, self.options);
                }
            }
        }
        Ok(())
    }

    fn write_number(&mut self, number: &Number) -> Result<()> {
        if let Number::Float(f) = number {
            if f.is_nan() && !self.options.allow_nan {
                return Err(Error::disallowed("NaN is not allowed"));
            }
            if f.is_infinite() && !self.options.allow_infinity {
                return Err(Error::disallowed("Infinity is not allowed"));
            }
        }
        let _ = write!(self.output, "{}", number);
        Ok(())
    }

    fn write_array(&mut self, arr: &[Value], depth: usize) -> Result<()> {
        if arr.is_empty() {
            self.output.push_str("[]");
            return Ok(());
        }
        self.output.push('[');
        for (i, elem) in arr.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.write_newline(depth + 1);
            self.write_value(elem, depth + 1)?;
        }
        self.write_newline(depth);
        self.output.push(']');
        Ok(())
    }

    fn write_object(&mut self, obj: &Json5Map, depth: usize) -> Result<()> {
        if obj.is_empty() {
            self.output.push_str("{}");
            return Ok(());
        }
        self.output.push('{');
        for (i, (key, value)) in obj.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.write_newline(depth + 1);
            write_quoted(&mut self.output, key, self.options);
            self.output.push(':');
            if self.indent > 0 {
                self.output.push(' ');
            }
            self.write_value(value, depth + 1)?;
        }
        self.write_newline(depth);
        self.output.push('}');
        Ok(())
    }
}

/// Writes `value` as JSON5 text, indenting nested levels by `indent` spaces
/// (zero for compact output).
///
/// # Errors
///
/// Returns a configuration error when `value` contains `NaN` or an infinity
/// and `options` does not allow it.
///
/// # Examples
///
/// ```rust
/// use serde_json5::{parse, stringify, Json5Options};
///
/// let value = parse("{big: 123456789012345678901234567890, exact: 1.50}").unwrap();
/// assert_eq!(
///     stringify(&value, 0, &Json5Options::new()).unwrap(),
///     r#"{"big":123456789012345678901234567890,"exact":1.50}"#
/// );
/// ```
pub fn stringify(value: &Value, indent: usize, options: &Json5Options) -> Result<String> {
    let mut serializer = Serializer::new(indent, options);
    serializer.serialize_value(value)?;
    Ok(serializer.into_inner())
}

/// Like [`stringify`], writing the text to `writer`.
///
/// # Errors
///
/// Fails like [`stringify`], or when writing fails.
pub fn stringify_to_writer<W>(
    mut writer: W,
    value: &Value,
    indent: usize,
    options: &Json5Options,
) -> Result<()>
where
    W: io::Write,
{
    let text = stringify(value, indent, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::custom(e.to_string()))
}

/// Quotes `text` as a JSON5 string literal.
///
/// The quote character, backslash and the usual control characters get their
/// short escapes. Format, separator, control, private-use and unassigned
/// characters are written as `\uXXXX`, characters above U+FFFF as a
/// `\uXXXX\uXXXX` surrogate pair, and everything outside ASCII is escaped
/// when [`Json5Options::stringify_ascii`] is set.
///
/// # Examples
///
/// ```rust
/// use serde_json5::{quote, Json5Options};
///
/// let options = Json5Options::new();
/// assert_eq!(quote("", &options), "\"\"");
/// assert_eq!(quote("a\"b\n", &options), r#""a\"b\n""#);
/// assert_eq!(quote("\u{200B}", &options), r#""\u200B""#);
/// assert_eq!(quote("\u{1F600}", &options), r#""\uD83D\uDE00""#);
/// ```
#[must_use]
pub fn quote(text: &str, options: &Json5Options) -> String {
    let mut output = String::with_capacity(text.len() + 2);
    write_quoted(&mut output, text, options);
    output
}

fn write_quoted(output: &mut String, text: &str, options: &Json5Options) {
    let quote = if options.quote_single { '\'' } else { '"' };
    output.push(quote);
    for c in text.chars() {
        match c {
            '\\' => output.push_str("\\\\"),
            '\u{0008}' => output.push_str("\\b"),
            '\u{000C}' => output.push_str("\\f"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            '\u{000B}' => output.push_str("\\v"),
            _ if c == quote => {
                output.push('\\');
                output.push(c);
            }
            _ if needs_unicode_escape(c) || (options.stringify_ascii && !c.is_ascii()) => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    let _ = write!(output, "\\u{:04X}", unit);
                }
            }
            _ => output.push(c),
        }
    }
    output.push(quote);
}

/// Serializes any `T: Serialize` into a [`Value`].
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
    variant: Option<&'static str>,
}

pub struct SerializeMap {
    map: Json5Map,
    current_key: Option<String>,
    variant: Option<&'static str>,
}

/// Wraps `value` as `{variant: value}` for externally tagged enums.
fn tagged(variant: &'static str, value: Value) -> Value {
    let mut map = Json5Map::with_capacity(1);
    map.insert(variant.to_string(), value);
    Value::Object(map)
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Array(v.iter().map(|&b| Value::from(b)).collect()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let inner = value.serialize(self)?;
        if name != NUMBER_TOKEN {
            return Ok(inner);
        }
        match inner {
            Value::String(text) => Number::from_exact_text(&text)
                .map(Value::Number)
                .ok_or_else(|| Error::custom(format!("Invalid number '{}'", text))),
            _ => Err(Error::custom("Invalid number")),
        }
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(tagged(variant, to_value(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0), None))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, None))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, None))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, Some(variant)))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new(None))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new(None))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeMap> {
        Ok(SerializeMap::new(Some(variant)))
    }
}

impl SerializeVec {
    fn new(capacity: usize, variant: Option<&'static str>) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
            variant,
        }
    }

    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn finish(self) -> Value {
        let array = Value::Array(self.vec);
        match self.variant {
            Some(variant) => tagged(variant, array),
            None => array,
        }
    }
}

impl SerializeMap {
    fn new(variant: Option<&'static str>) -> Self {
        SerializeMap {
            map: Json5Map::new(),
            current_key: None,
            variant,
        }
    }

    fn finish(self) -> Value {
        let object = Value::Object(self.map);
        match self.variant {
            Some(variant) => tagged(variant, object),
            None => object,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = match to_value(key)? {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => return Err(Error::custom("Map keys must be strings")),
        };
        self.current_key = Some(key);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

/// Converts any `T: Serialize` into a [`Value`].
///
/// # Errors
///
/// Fails when a map key is not a string, number or boolean, or when `T`'s
/// `Serialize` implementation reports an error.
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}
