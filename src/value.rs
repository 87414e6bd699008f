//! Dynamic value representation for JSON5 data.
//!
//! This module provides the [`Value`] enum which represents any parsed JSON5
//! value, and the exact [`Number`] type behind it.
//!
//! ## Core Types
//!
//! - [`Value`]: null, bool, number, string, array, object or instant
//! - [`Number`]: an exact integer, an exact decimal, or a non-finite float
//!
//! Finite literals are never stored as `f64`: `0.1` stays exactly one tenth and
//! `123456789012345678901234567890` keeps all of its digits. Only `NaN` and
//! `Infinity` use [`Number::Float`].
//!
//! ## Usage Patterns
//!
//! ### Reading Values
//!
//! ```rust
//! use serde_json5::{parse, Value};
//!
//! let value = parse("{name: 'Alice', tags: ['a', 'b'], score: 9.50}").unwrap();
//! assert_eq!(value["name"].as_str(), Some("Alice"));
//! assert_eq!(value["tags"][1].as_str(), Some("b"));
//! assert_eq!(value["score"].to_string(), "9.50");
//! assert!(value["missing"].is_null());
//! ```
//!
//! ### Instants
//!
//! Instants are not a grammar production. A string in RFC 3339 form or an
//! integer of epoch seconds can be read back as one on demand:
//!
//! ```rust
//! use serde_json5::parse;
//!
//! let value = parse("{at: '2001-09-09T01:46:40Z', unix: 1000000000}").unwrap();
//! assert_eq!(value["at"].as_instant(), value["unix"].as_instant());
//! assert!(value["at"].is_string());
//! ```
//!
//! ### Converting from Rust Types
//!
//! ```rust
//! use serde_json5::{to_value, Value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let value: Value = to_value(&Point { x: 10, y: 20 }).unwrap();
//! assert_eq!(value["x"].as_i64(), Some(10));
//! ```

use crate::decimal::Decimal;
use crate::options::{default_options, Json5Options};
use crate::Json5Map;
use chrono::{DateTime, SecondsFormat, Utc};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Index;

/// Serde name under which a number with no faithful primitive form travels,
/// carrying its exact text. [`ValueSerializer`](crate::ValueSerializer) and
/// the `Value` visitor turn it back into a [`Number`].
pub(crate) const NUMBER_TOKEN: &str = "$serde_json5::private::Number";

/// Digits of `u128::MAX` and `i128::MIN`.
const MAX_NATIVE_DIGITS: u32 = 39;

/// A dynamically-typed representation of any JSON5 value.
///
/// # Examples
///
/// ```rust
/// use serde_json5::{Number, Value};
///
/// let null = Value::Null;
/// let num = Value::from(42);
/// let text = Value::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// assert_eq!(num, Value::Number(Number::from(42)));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Json5Map),
    /// A point in time. The parser never produces this variant; it exists for
    /// trees built in code and is written as an RFC 3339 string or epoch seconds.
    Instant(DateTime<Utc>),
}

/// An exact numeric value.
///
/// # Examples
///
/// ```rust
/// use serde_json5::{parse, Number, Value};
///
/// let Value::Number(n) = parse("123456789012345678901234567890").unwrap() else {
///     unreachable!()
/// };
/// assert!(n.is_integer());
/// assert_eq!(n.to_string(), "123456789012345678901234567890");
/// assert_eq!(n.as_i64(), None);
///
/// let Value::Number(nan) = parse("-NaN").unwrap() else { unreachable!() };
/// assert!(nan.is_nan());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(BigInt),
    Decimal(Decimal),
    /// `NaN` or an infinity.
    Float(f64),
}

impl Number {
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_decimal(&self) -> bool {
        matches!(self, Number::Decimal(_))
    }

    /// Returns `true` for `NaN` and the infinities.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    #[inline]
    #[must_use]
    pub fn is_nan(&self) -> bool {
        matches!(self, Number::Float(f) if f.is_nan())
    }

    #[inline]
    #[must_use]
    pub fn is_infinite(&self) -> bool {
        matches!(self, Number::Float(f) if f.is_infinite())
    }

    /// Converts this number to an `i64` if that is exact.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json5::{Decimal, Number};
    ///
    /// assert_eq!(Number::from(42).as_i64(), Some(42));
    /// assert_eq!(Number::Decimal("42.0".parse().unwrap()).as_i64(), Some(42));
    /// assert_eq!(Number::Decimal("42.5".parse().unwrap()).as_i64(), None);
    /// assert_eq!(Number::Float(f64::INFINITY).as_i64(), None);
    /// ```
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_native_bigint()?.to_i64()
    }

    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        self.as_native_bigint()?.to_u64()
    }

    /// Integral values small enough for a primitive integer type.
    fn as_native_bigint(&self) -> Option<BigInt> {
        match self {
            Number::Integer(i) => Some(i.clone()),
            Number::Decimal(d) => d.to_bigint_within(MAX_NATIVE_DIGITS),
            Number::Float(_) => None,
        }
    }

    /// Returns the value as an integer if it has no fractional part.
    ///
    /// This is exact, so a decimal such as `1e30000000` is fully expanded.
    #[must_use]
    pub fn as_bigint(&self) -> Option<BigInt> {
        match self {
            Number::Integer(i) => Some(i.clone()),
            Number::Decimal(d) => d.to_bigint(),
            Number::Float(_) => None,
        }
    }

    /// Text of a number that no primitive type carries faithfully, `None`
    /// when `i64`, `u64`, `i128`, `u128` or `f64` does.
    pub(crate) fn exact_text(&self) -> Option<String> {
        match self {
            Number::Integer(i) if i.to_i128().is_some() || i.to_u128().is_some() => None,
            Number::Integer(i) => Some(i.to_string()),
            Number::Decimal(d) => match Decimal::from_f64(d.to_f64()) {
                Some(nearest) if nearest.unscaled() == d.unscaled() && nearest.scale() == d.scale() => {
                    None
                }
                _ => Some(d.to_string()),
            },
            Number::Float(_) => None,
        }
    }

    /// Reads back the output of [`exact_text`](Self::exact_text). Decimal
    /// text always has a `.` or an exponent.
    pub(crate) fn from_exact_text(text: &str) -> Option<Number> {
        if text.contains(['.', 'e', 'E']) {
            text.parse().ok().map(Number::Decimal)
        } else {
            text.parse().ok().map(Number::Integer)
        }
    }

    /// Converts this number to the nearest `f64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json5::Number;
    ///
    /// assert_eq!(Number::from(42).as_f64(), 42.0);
    /// assert_eq!(Number::from(0.25).as_f64(), 0.25);
    /// assert_eq!(Number::Float(f64::NEG_INFINITY).as_f64(), f64::NEG_INFINITY);
    /// ```
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => i.to_f64().unwrap_or(f64::NAN),
            Number::Decimal(d) => d.to_f64(),
            Number::Float(f) => *f,
        }
    }

    /// Negates the value. Integers and decimals have no negative zero.
    #[must_use]
    pub(crate) fn negate(self) -> Number {
        match self {
            Number::Integer(i) => Number::Integer(-i),
            Number::Decimal(d) => Number::Decimal(-d),
            Number::Float(f) => Number::Float(-f),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Decimal(d) => write!(f, "{}", d),
            Number::Float(fl) if fl.is_nan() => f.write_str("NaN"),
            Number::Float(fl) if fl.is_infinite() && *fl > 0.0 => f.write_str("Infinity"),
            Number::Float(fl) if fl.is_infinite() => f.write_str("-Infinity"),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

macro_rules! number_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Integer(BigInt::from(value))
                }
            }

            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

number_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Number::Integer(value)
    }
}

impl From<Decimal> for Number {
    fn from(value: Decimal) -> Self {
        Number::Decimal(value)
    }
}

/// Finite values become exact decimals; `NaN` and the infinities stay floats.
impl From<f64> for Number {
    fn from(value: f64) -> Self {
        match Decimal::from_f64(value) {
            Some(decimal) => Number::Decimal(decimal),
            None => Number::Float(value),
        }
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        if value.is_finite() {
            match value.to_string().parse::<Decimal>() {
                Ok(decimal) => Number::Decimal(decimal.with_scale_at_least(1)),
                Err(_) => Number::from(f64::from(value)),
            }
        } else {
            Number::Float(f64::from(value))
        }
    }
}

/// Integers that fit `i128`/`u128` and decimals whose shortest `f64` form
/// prints the same digits and scale are serialized as primitives. Anything
/// else is a newtype struct around its exact text, which other serializers
/// write as a string.
impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Number::Integer(i) => {
                if let Some(v) = i.to_i64() {
                    serializer.serialize_i64(v)
                } else if let Some(v) = i.to_u64() {
                    serializer.serialize_u64(v)
                } else if let Some(v) = i.to_i128() {
                    serializer.serialize_i128(v)
                } else if let Some(v) = i.to_u128() {
                    serializer.serialize_u128(v)
                } else {
                    serializer.serialize_newtype_struct(NUMBER_TOKEN, &i.to_string())
                }
            }
            Number::Decimal(d) => match self.exact_text() {
                Some(text) => serializer.serialize_newtype_struct(NUMBER_TOKEN, &text),
                None => serializer.serialize_f64(d.to_f64()),
            },
            Number::Float(f) => serializer.serialize_f64(*f),
        }
    }
}

static NULL: Value = Value::Null;

impl Value {
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns `true` if [`as_instant`](Self::as_instant) would succeed.
    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.as_instant().is_some()
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the number as an `i64` if it is integral and in range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json5::parse;
    ///
    /// assert_eq!(parse("42").unwrap().as_i64(), Some(42));
    /// assert_eq!(parse("4.2e1").unwrap().as_i64(), Some(42));
    /// assert_eq!(parse("4.25").unwrap().as_i64(), None);
    /// ```
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number()?.as_i64()
    }

    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        self.as_number()?.as_u64()
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(Number::as_f64)
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Json5Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object_mut(&mut self) -> Option<&mut Json5Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Reads the value as an instant using the process-wide default options.
    #[must_use]
    pub fn as_instant(&self) -> Option<DateTime<Utc>> {
        self.as_instant_with(default_options())
    }

    /// Reads the value as an instant.
    ///
    /// An RFC 3339 string is accepted when `parse_string_instants` is set and an
    /// integer of epoch seconds when `parse_unix_instants` is set, both only
    /// while `parse_instants` is on. [`Value::Instant`] is always accepted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json5::{Json5Options, Value};
    ///
    /// let unix = Value::from(1338150759534i64);
    /// assert!(unix.as_instant_with(&Json5Options::new()).is_some());
    ///
    /// let off = Json5Options::new().with_parse_unix_instants(false);
    /// assert!(unix.as_instant_with(&off).is_none());
    ///
    /// assert!(Value::from(i64::MIN).as_instant_with(&Json5Options::new()).is_none());
    /// ```
    #[must_use]
    pub fn as_instant_with(&self, options: &Json5Options) -> Option<DateTime<Utc>> {
        match self {
            Value::Instant(instant) => Some(*instant),
            _ if !options.parse_instants => None,
            Value::String(s) if options.parse_string_instants => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|instant| instant.with_timezone(&Utc)),
            Value::Number(Number::Integer(i)) if options.parse_unix_instants => {
                DateTime::from_timestamp(i.to_i64()?, 0)
            }
            _ => None,
        }
    }

    /// Looks up a key in an object. Returns `None` for other kinds of value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object()?.get(key)
    }

    /// Looks up an element of an array. Returns `None` for other kinds of value.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array()?.get(index)
    }

    /// Human-readable name of the value's kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
            Value::Instant(_) => "an instant",
        }
    }
}

/// Missing keys and non-objects index to [`Value::Null`].
impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&NULL)
    }
}

/// Out-of-range indices and non-arrays index to [`Value::Null`].
impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        self.get_index(index).unwrap_or(&NULL)
    }
}

/// Compact JSON5 text with double quotes.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = crate::ser::stringify(self, 0, &Json5Options::default()).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Value::Instant(instant) => {
                serializer.serialize_str(&instant.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid JSON5 value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_i128<E>(self, value: i128) -> Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_u128<E>(self, value: u128) -> Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let first: Option<String> = map.next_key()?;
                let mut values = Json5Map::new();
                match first {
                    None => return Ok(Value::Object(values)),
                    Some(key) if key == NUMBER_TOKEN => {
                        let text: String = map.next_value()?;
                        return Number::from_exact_text(&text)
                            .map(Value::Number)
                            .ok_or_else(|| de::Error::custom(format!("Invalid number '{}'", text)));
                    }
                    Some(key) => {
                        values.insert(key, map.next_value()?);
                    }
                }
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_i64()
            .ok_or_else(|| crate::Error::custom(format!("expected i64, found {}", value.kind())))
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_f64()
            .ok_or_else(|| crate::Error::custom(format!("expected number, found {}", value.kind())))
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_bool()
            .ok_or_else(|| crate::Error::custom(format!("expected bool, found {}", value.kind())))
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(crate::Error::custom(format!(
                "expected string, found {}",
                other.kind()
            ))),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::Number(Number::Integer(value))
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Number(Number::Decimal(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Json5Map> for Value {
    fn from(value: Json5Map) -> Self {
        Value::Object(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Instant(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_tryfrom_i64() {
        assert_eq!(i64::try_from(Value::from(42)).unwrap(), 42);
        assert_eq!(i64::try_from(Value::from(42.0)).unwrap(), 42);
        assert!(i64::try_from(Value::from(42.5)).is_err());
        assert!(i64::try_from(Value::from("test")).is_err());
    }

    #[test]
    fn test_tryfrom_f64() {
        assert_eq!(f64::try_from(Value::from(3.5)).unwrap(), 3.5);
        assert_eq!(f64::try_from(Value::from(42)).unwrap(), 42.0);
        assert_eq!(
            f64::try_from(Value::from(f64::INFINITY)).unwrap(),
            f64::INFINITY
        );
    }

    #[test]
    fn test_tryfrom_bool_and_string() {
        assert!(bool::try_from(Value::Bool(true)).unwrap());
        assert!(bool::try_from(Value::from(1)).is_err());
        assert_eq!(String::try_from(Value::from("hello")).unwrap(), "hello");
        assert!(String::try_from(Value::from(42)).is_err());
    }

    #[test]
    fn test_from_f64_is_exact_decimal() {
        assert_eq!(
            Value::from(0.1),
            Value::Number(Number::Decimal("0.1".parse().unwrap()))
        );
        assert!(matches!(Value::from(f64::NAN), Value::Number(Number::Float(_))));
        assert_eq!(Value::from(2.0).to_string(), "2.0");
    }

    #[test]
    fn test_number_display() {
        assert_eq!(Number::Float(f64::NAN).to_string(), "NaN");
        assert_eq!(Number::Float(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Number::Float(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Number::from(u128::MAX).to_string(), u128::MAX.to_string());
    }

    #[test]
    fn test_negate() {
        assert_eq!(Number::from(5).negate(), Number::from(-5));
        assert_eq!(Number::from(0).negate(), Number::from(0));
        let neg_nan = Number::Float(f64::NAN).negate();
        assert!(matches!(neg_nan, Number::Float(f) if f.is_nan() && f.is_sign_negative()));
    }

    #[test]
    fn test_instants() {
        let options = Json5Options::default();
        let expected = Utc.timestamp_opt(1_000_000_000, 0).unwrap();
        assert_eq!(
            Value::from("2001-09-09T01:46:40Z").as_instant_with(&options),
            Some(expected)
        );
        assert_eq!(
            Value::from("2001-09-09T03:46:40+02:00").as_instant_with(&options),
            Some(expected)
        );
        assert_eq!(
            Value::from(1_000_000_000).as_instant_with(&options),
            Some(expected)
        );
        assert!(Value::from("yesterday").as_instant_with(&options).is_none());
        assert!(Value::from(1.5).as_instant_with(&options).is_none());

        let off = options.clone().with_parse_instants(false);
        assert!(Value::from(1_000_000_000).as_instant_with(&off).is_none());
        assert_eq!(Value::Instant(expected).as_instant_with(&off), Some(expected));

        let no_strings = Json5Options::default().with_parse_string_instants(false);
        assert!(Value::from("2001-09-09T01:46:40Z")
            .as_instant_with(&no_strings)
            .is_none());
    }

    #[test]
    fn test_index() {
        let mut map = Json5Map::new();
        map.insert("list".to_string(), Value::from(vec![Value::from(1)]));
        let value = Value::Object(map);
        assert_eq!(value["list"][0], Value::from(1));
        assert!(value["list"][5].is_null());
        assert!(value["nope"]["deeper"].is_null());
    }

    #[test]
    fn test_const_is_methods() {
        const fn check_null(v: &Value) -> bool {
            v.is_null()
        }
        assert!(check_null(&Value::Null));
        assert_eq!(Value::Null.kind(), "null");
    }
}
