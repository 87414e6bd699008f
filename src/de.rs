//! JSON5 parsing and deserialization.
//!
//! This module holds the recursive-descent grammar driver and the serde
//! [`Deserializer`](serde::Deserializer) that maps a parsed [`Value`] onto
//! Rust types.
//!
//! ## Overview
//!
//! - **Single pass**: one character of lookahead, no backtracking
//! - **Pluggable trees**: containers are created through a [`TreeBuilder`]
//! - **Positioned errors**: every syntax error names index, column and line
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_json5::from_str;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Data { x: i32, y: i32 }
//!
//! let data: Data = from_str("{x: 1, y: 2, /* done */}").unwrap();
//! assert_eq!(data, Data { x: 1, y: 2 });
//! ```

use crate::builder::{ArrayBuilder, ObjectBuilder, TreeBuilder};
use crate::number;
use crate::options::{DuplicateBehavior, Json5Options};
use crate::scanner::Scanner;
use crate::source::CharSource;
use crate::string::{parse_member_name, parse_string};
use crate::value::{Number, NUMBER_TOKEN};
use crate::{Error, Json5Map, Position, Result, Value};
use chrono::SecondsFormat;
use indexmap::IndexMap;
use num_traits::ToPrimitive;
use serde::de::IntoDeserializer;
use serde::{de, forward_to_deserialize_any};
use std::io;

/// Parses one JSON5 document from `source`, building the result with `builder`.
///
/// # Errors
///
/// Returns a syntax error for malformed input, and a configuration error when
/// the input uses a literal form that `options` does not allow.
pub fn parse_with_builder<I, B>(
    source: CharSource<I>,
    options: &Json5Options,
    builder: &mut B,
) -> Result<B::Value>
where
    I: Iterator<Item = io::Result<char>>,
    B: TreeBuilder,
{
    Parser {
        scanner: Scanner::new(source),
        options,
        builder,
    }
    .parse_root()
}

struct Parser<'a, I, B> {
    scanner: Scanner<I>,
    options: &'a Json5Options,
    builder: &'a mut B,
}

impl<'a, I, B> Parser<'a, I, B>
where
    I: Iterator<Item = io::Result<char>>,
    B: TreeBuilder,
{
    fn parse_root(&mut self) -> Result<B::Value> {
        let value = self.parse_value()?;
        if !self.options.allow_trailing_data {
            if let Some(c) = self.scanner.next_clean()? {
                return Err(self
                    .scanner
                    .syntax_error(format!("Unexpected trailing data '{}'", c)));
            }
        }
        Ok(value)
    }

    fn parse_value(&mut self) -> Result<B::Value> {
        let c = self.scanner.expect_clean()?;
        match c {
            '"' | '\'' => {
                let text = parse_string(&mut self.scanner, c, self.options)?;
                Ok(self.builder.string(text))
            }
            '{' => {
                self.scanner.back();
                self.parse_object()
            }
            '[' => {
                self.scanner.back();
                self.parse_array()
            }
            _ => {
                let start = self.scanner.position();
                self.scanner.back();
                let token = self.scanner.next_clean_to(",]}")?;
                if token.is_empty() {
                    return Err(Error::syntax(format!("Unexpected character '{}'", c), start));
                }
                self.parse_token(&token, start)
            }
        }
    }

    /// Classifies a bare token as `null`, a boolean or a number.
    fn parse_token(&mut self, token: &str, start: Position) -> Result<B::Value> {
        match token {
            "null" => return Ok(self.builder.null()),
            "true" => return Ok(self.builder.boolean(true)),
            "false" => return Ok(self.builder.boolean(false)),
            _ => {}
        }

        let (negative, body) = match token.as_bytes()[0] {
            b'-' => (true, &token[1..]),
            b'+' => (false, &token[1..]),
            _ => (false, token),
        };
        let sign = if negative { -1.0 } else { 1.0 };
        let body_start = if body.len() < token.len() {
            Position {
                index: start.index + 1,
                character: start.character + 1,
                line: start.line,
            }
        } else {
            start
        };

        let number = match body {
            "NaN" => {
                if !self.options.allow_nan {
                    return Err(Error::syntax("NaN is not allowed", start));
                }
                Number::Float(f64::NAN.copysign(sign))
            }
            "Infinity" => {
                if !self.options.allow_infinity {
                    return Err(Error::syntax("Infinity is not allowed", start));
                }
                Number::Float(f64::INFINITY.copysign(sign))
            }
            _ if body.starts_with(|c: char| c.is_ascii_digit() || c == '.') => {
                let magnitude = number::parse_unsigned(body, body_start, self.options)?;
                if negative {
                    magnitude.negate()
                } else {
                    magnitude
                }
            }
            _ => return Err(Error::syntax(format!("Illegal value '{}'", token), start)),
        };
        Ok(self.builder.number(number))
    }

    fn parse_object(&mut self) -> Result<B::Value> {
        if self.scanner.next_clean()? != Some('{') {
            return Err(self.scanner.syntax_error("A JSON5 object must begin with '{'"));
        }
        let mut object = self.builder.new_object();
        let mut collected: IndexMap<String, Vec<B::Value>> = IndexMap::new();

        loop {
            let c = self.scanner.expect_clean()?;
            if c == '}' {
                break;
            }
            let key = parse_member_name(&mut self.scanner, c, self.options)?;
            if self.options.duplicate_behavior == DuplicateBehavior::Unique && object.has_key(&key) {
                return Err(self.scanner.syntax_error(format!("Duplicate key \"{}\"", key)));
            }
            if self.scanner.expect_clean()? != ':' {
                return Err(self.scanner.syntax_error("Expected ':' after a key"));
            }
            let value = self.parse_value()?;
            self.put_member(&mut object, &mut collected, key, value);

            match self.scanner.expect_clean()? {
                ',' => {}
                '}' => break,
                _ => return Err(self.scanner.syntax_error("Expected ',' or '}' after value")),
            }
        }

        for (key, values) in collected {
            let mut array = self.builder.new_array();
            for value in values {
                array.append(value);
            }
            let array = self.builder.finish_array(array);
            object.put(key, array);
        }
        Ok(self.builder.finish_object(object))
    }

    /// Stores a member according to the duplicate-key policy. Under
    /// [`DuplicateBehavior::Collect`] repeated keys are held back in `collected`
    /// and turned into arrays once the object is complete; the key keeps the
    /// position of its first occurrence.
    fn put_member(
        &mut self,
        object: &mut B::Object,
        collected: &mut IndexMap<String, Vec<B::Value>>,
        key: String,
        value: B::Value,
    ) {
        if self.options.duplicate_behavior != DuplicateBehavior::Collect {
            object.put(key, value);
            return;
        }
        if let Some(values) = collected.get_mut(&key) {
            values.push(value);
            return;
        }
        if !object.has_key(&key) {
            object.put(key, value);
            return;
        }
        let placeholder = self.builder.null();
        if let Some(first) = object.put(key.clone(), placeholder) {
            collected.insert(key, vec![first, value]);
        }
    }

    fn parse_array(&mut self) -> Result<B::Value> {
        if self.scanner.next_clean()? != Some('[') {
            return Err(self.scanner.syntax_error("A JSON5 array must begin with '['"));
        }
        let mut array = self.builder.new_array();

        loop {
            let c = self.scanner.expect_clean()?;
            if c == ']' {
                break;
            }
            self.scanner.back();
            let value = self.parse_value()?;
            array.append(value);

            match self.scanner.expect_clean()? {
                ',' => {}
                ']' => break,
                _ => return Err(self.scanner.syntax_error("Expected ',' or ']' after value")),
            }
        }
        Ok(self.builder.finish_array(array))
    }
}

/// Deserializes a `T` from an already parsed [`Value`].
///
/// # Errors
///
/// Fails when the shape of `value` does not match `T`.
///
/// # Examples
///
/// ```rust
/// use serde_json5::{from_value, parse};
/// use std::collections::BTreeMap;
///
/// let value = parse("{b: 2, a: 1}").unwrap();
/// let map: BTreeMap<String, u8> = from_value(value).unwrap();
/// assert_eq!(map.into_iter().collect::<Vec<_>>(), vec![("a".into(), 1), ("b".into(), 2)]);
/// ```
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: de::DeserializeOwned,
{
    T::deserialize(ValueDeserializer::new(value))
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl SeqDeserializer {
    fn new(vec: Vec<Value>) -> Self {
        SeqDeserializer {
            iter: vec.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<String, Value>,
    value: Option<Value>,
}

impl MapDeserializer {
    fn new(map: Json5Map) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(ValueDeserializer::new(Value::String(key)))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct EnumDeserializer {
    variant: String,
    value: Option<Value>,
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(ValueDeserializer::new(Value::String(self.variant)))?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Option<Value>,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            Some(Value::Null) | None => Ok(()),
            _ => Err(Error::custom("Expected unit variant")),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.value {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("Expected newtype variant")),
        }
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Value::Array(arr)) => visitor.visit_seq(SeqDeserializer::new(arr)),
            _ => Err(Error::custom("Expected tuple variant")),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Value::Object(obj)) => visitor.visit_map(MapDeserializer::new(obj)),
            _ => Err(Error::custom("Expected struct variant")),
        }
    }
}

/// A serde [`Deserializer`](serde::Deserializer) over an owned [`Value`].
///
/// Integers are offered through the narrowest of `i64`, `u64`, `i128` and
/// `u128` that holds them; decimals are offered as `f64`. When a type asks
/// for any value and the number has no faithful primitive form, it is
/// offered as a one-entry map holding its exact text, which the `Value`
/// visitor reads back without loss.
pub struct ValueDeserializer {
    value: Value,
}

impl ValueDeserializer {
    #[must_use]
    pub fn new(value: Value) -> Self {
        ValueDeserializer { value }
    }

    fn visit_number<'de, V>(number: Number, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match number {
            Number::Integer(i) => {
                if let Some(v) = i.to_i64() {
                    visitor.visit_i64(v)
                } else if let Some(v) = i.to_u64() {
                    visitor.visit_u64(v)
                } else if let Some(v) = i.to_i128() {
                    visitor.visit_i128(v)
                } else if let Some(v) = i.to_u128() {
                    visitor.visit_u128(v)
                } else {
                    visitor.visit_string(i.to_string())
                }
            }
            Number::Decimal(d) => visitor.visit_f64(d.to_f64()),
            Number::Float(f) => visitor.visit_f64(f),
        }
    }

    /// Primitive targets take numbers directly, never the exact-text map.
    fn deserialize_primitive<'de, V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Number(number) => Self::visit_number(number, visitor),
            value => de::Deserializer::deserialize_any(ValueDeserializer::new(value), visitor),
        }
    }
}

macro_rules! deserialize_primitive {
    ($($method:ident)*) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                self.deserialize_primitive(visitor)
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Number(number) => match number.exact_text() {
                Some(text) => {
                    let mut exact = Json5Map::with_capacity(1);
                    exact.insert(NUMBER_TOKEN.to_string(), Value::String(text));
                    visitor.visit_map(MapDeserializer::new(exact))
                }
                None => Self::visit_number(number, visitor),
            },
            Value::String(s) => visitor.visit_string(s),
            Value::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            Value::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
            Value::Instant(instant) => {
                visitor.visit_string(instant.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(s) => visitor.visit_enum(s.into_deserializer()),
            Value::Object(obj) if obj.len() == 1 => match obj.into_iter().next() {
                Some((variant, value)) => visitor.visit_enum(EnumDeserializer {
                    variant,
                    value: Some(value),
                }),
                None => Err(Error::custom("Expected enum variant")),
            },
            Value::Object(_) => Err(Error::custom("Expected enum variant")),
            _ => Err(Error::custom("Expected enum")),
        }
    }

    deserialize_primitive! {
        deserialize_i8 deserialize_i16 deserialize_i32 deserialize_i64 deserialize_i128
        deserialize_u8 deserialize_u16 deserialize_u32 deserialize_u64 deserialize_u128
        deserialize_f32 deserialize_f64 deserialize_str deserialize_string
    }

    forward_to_deserialize_any! {
        bool char bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

impl<'de> IntoDeserializer<'de, Error> for Value {
    type Deserializer = ValueDeserializer;

    fn into_deserializer(self) -> ValueDeserializer {
        ValueDeserializer::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ValueBuilder;
    use serde::Deserialize;

    fn parse(text: &str, options: &Json5Options) -> Result<Value> {
        parse_with_builder(CharSource::from_chars(text.chars()), options, &mut ValueBuilder)
    }

    fn parse_default(text: &str) -> Result<Value> {
        parse(text, &Json5Options::default())
    }

    #[test]
    fn test_scalars_at_root() {
        assert_eq!(parse_default("null").unwrap(), Value::Null);
        assert_eq!(parse_default(" true ").unwrap(), Value::Bool(true));
        assert_eq!(parse_default("'x'").unwrap(), Value::from("x"));
        assert_eq!(parse_default("-12").unwrap(), Value::from(-12));
        assert_eq!(parse_default("+.5").unwrap().to_string(), "0.5");
    }

    #[test]
    fn test_special_floats() {
        let value = parse_default("[NaN, +NaN, -Infinity, Infinity]").unwrap();
        let items = value.as_array().unwrap();
        assert!(items[0].as_number().unwrap().is_nan());
        assert!(items[1].as_number().unwrap().is_nan());
        assert_eq!(items[2].as_f64(), Some(f64::NEG_INFINITY));
        assert_eq!(items[3].as_f64(), Some(f64::INFINITY));

        let strict = Json5Options::default().with_nan(false).with_infinity(false);
        assert!(parse("{a: NaN}", &strict).unwrap_err().is_syntax());
        assert!(parse("[-Infinity]", &strict).unwrap_err().is_syntax());
    }

    #[test]
    fn test_illegal_values() {
        let err = parse_default("[undefined]").unwrap_err();
        assert!(err.to_string().starts_with("Illegal value 'undefined'"));
        let err = parse_default("[_123]").unwrap_err();
        assert!(err.to_string().starts_with("Illegal value '_123'"));
        let err = parse_default("[,]").unwrap_err();
        assert!(err.to_string().starts_with("Unexpected character ','"));
    }

    #[test]
    fn test_object_grammar_errors() {
        let err = parse_default("{a 1}").unwrap_err();
        assert!(err.to_string().starts_with("Expected ':' after a key"));
        let err = parse_default("{a: 1 b: 2}").unwrap_err();
        assert!(err.to_string().starts_with("Expected ',' or '}' after value"));
        let err = parse_default("[1 2]").unwrap_err();
        assert!(err.to_string().starts_with("Expected ',' or ']' after value"));
        let err = parse_default("{a: 1,").unwrap_err();
        assert!(err.to_string().starts_with("Unexpected end of data"));
    }

    #[test]
    fn test_trailing_data() {
        let err = parse_default("{} x").unwrap_err();
        assert!(err.to_string().starts_with("Unexpected trailing data 'x'"));
        assert_eq!(err.position().unwrap().index, 3);

        let lenient = Json5Options::default().with_trailing_data(true);
        assert_eq!(
            parse("[1] garbage", &lenient).unwrap(),
            Value::Array(vec![Value::from(1)])
        );
        assert!(parse_default("[1] // fine\n/* also fine */").is_ok());
    }

    #[test]
    fn test_duplicate_policies() {
        let text = "{a: 123, b: 1, a: 456, a: 'test123'}";
        let err = parse_default(text).unwrap_err();
        assert!(err.to_string().starts_with("Duplicate key \"a\""));

        let last = Json5Options::default().with_duplicate_behavior(DuplicateBehavior::LastWins);
        assert_eq!(parse(text, &last).unwrap().to_string(), r#"{"a":"test123","b":1}"#);

        let collect = Json5Options::default().with_duplicate_behavior(DuplicateBehavior::Collect);
        assert_eq!(
            parse(text, &collect).unwrap().to_string(),
            r#"{"a":[123,456,"test123"],"b":1}"#
        );
    }

    #[test]
    fn test_collect_nests_array_values() {
        let collect = Json5Options::default().with_duplicate_behavior(DuplicateBehavior::Collect);
        let value = parse("{a: [1], a: [2, 3]}", &collect).unwrap();
        assert_eq!(value.to_string(), r#"{"a":[[1],[2,3]]}"#);
    }

    #[test]
    fn test_error_position() {
        let err = parse_default("{\n  a: 1,\n  b: ?\n}").unwrap_err();
        let position = err.position().unwrap();
        assert_eq!(position.line, 3);
        assert_eq!(position.character, 6);
    }

    #[derive(Debug, Deserialize, PartialEq)]
    enum Shape {
        Point,
        Circle(u32),
        Rect { w: u32, h: u32 },
    }

    #[test]
    fn test_value_deserializer_enums() {
        let shapes: Vec<Shape> =
            from_value(parse_default("['Point', {Circle: 3}, {Rect: {w: 1, h: 2}}]").unwrap())
                .unwrap();
        assert_eq!(
            shapes,
            vec![Shape::Point, Shape::Circle(3), Shape::Rect { w: 1, h: 2 }]
        );
    }

    #[test]
    fn test_value_deserializer_options_and_big_numbers() {
        let value = parse_default("[null, 18446744073709551615, 1.5]").unwrap();
        let (a, b, c): (Option<u8>, u64, f64) = from_value(value).unwrap();
        assert_eq!(a, None);
        assert_eq!(b, u64::MAX);
        assert_eq!(c, 1.5);
    }

    #[test]
    fn test_value_deserializer_keeps_exact_numbers() {
        let text = "[1.50, 0.1000000000000000000001, 123456789012345678901234567890123456789012345, 2.5]";
        let parsed = parse_default(text).unwrap();
        let back: Value = from_value(parsed.clone()).unwrap();
        assert_eq!(back.to_string(), parsed.to_string());

        let (a, b, c, d): (f64, f64, String, f64) = from_value(parsed).unwrap();
        assert_eq!(a, 1.5);
        assert_eq!(b, 0.1);
        assert_eq!(c, "123456789012345678901234567890123456789012345");
        assert_eq!(d, 2.5);
    }
}
