//! Ordered map type for JSON5 objects.
//!
//! [`Json5Map`] wraps an [`IndexMap`] so members keep the order they were
//! parsed or inserted in, which is also the order they are written back out.
//! Besides the usual map operations it offers typed getters that report a
//! missing key or a wrong kind of value as an [`Error`].
//!
//! ## Examples
//!
//! ```rust
//! use serde_json5::{parse, Error};
//!
//! let value = parse("{name: 'Alice', age: 30}").unwrap();
//! let object = value.as_object().unwrap();
//!
//! assert_eq!(object.get_str("name").unwrap(), "Alice");
//! assert_eq!(object.get_i64("age").unwrap(), 30);
//! assert!(matches!(object.get_bool("name"), Err(Error::TypeMismatch { .. })));
//! assert!(matches!(object.get_str("email"), Err(Error::MissingKey(_))));
//! ```

use crate::error::{Error, Result};
use crate::options::Json5Options;
use crate::value::{Number, Value};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of string keys to JSON5 values.
///
/// # Examples
///
/// ```rust
/// use serde_json5::{Json5Map, Value};
///
/// let mut map = Json5Map::new();
/// map.insert("second".to_string(), Value::from(2));
/// map.insert("first".to_string(), Value::from(1));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["second", "first"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Json5Map(IndexMap<String, Value>);

impl Json5Map {
    #[must_use]
    pub fn new() -> Self {
        Json5Map(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Json5Map(IndexMap::with_capacity(capacity))
    }

    /// Inserts a member, returning the value it replaced. A replaced key keeps
    /// its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json5::{Json5Map, Value};
    ///
    /// let mut map = Json5Map::new();
    /// assert!(map.insert("key".to_string(), Value::from(42)).is_none());
    /// assert_eq!(map.insert("key".to_string(), Value::from(43)), Some(Value::from(42)));
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Removes a member, keeping the order of the remaining ones.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Value> {
        self.0.iter_mut()
    }

    fn require(&self, key: &str) -> Result<&Value> {
        self.0.get(key).ok_or_else(|| Error::missing_key(key))
    }

    pub fn get_str(&self, key: &str) -> Result<&str> {
        self.require(key)?
            .as_str()
            .ok_or_else(|| Error::type_mismatch(key, "a string"))
    }

    pub fn get_bool(&self, key: &str) -> Result<bool> {
        self.require(key)?
            .as_bool()
            .ok_or_else(|| Error::type_mismatch(key, "a boolean"))
    }

    pub fn get_number(&self, key: &str) -> Result<&Number> {
        self.require(key)?
            .as_number()
            .ok_or_else(|| Error::type_mismatch(key, "a number"))
    }

    /// Returns the member as an `i64`; decimals qualify when they are integral.
    pub fn get_i64(&self, key: &str) -> Result<i64> {
        self.get_number(key)?
            .as_i64()
            .ok_or_else(|| Error::type_mismatch(key, "an integer in i64 range"))
    }

    pub fn get_f64(&self, key: &str) -> Result<f64> {
        Ok(self.get_number(key)?.as_f64())
    }

    pub fn get_array(&self, key: &str) -> Result<&Vec<Value>> {
        self.require(key)?
            .as_array()
            .ok_or_else(|| Error::type_mismatch(key, "an array"))
    }

    pub fn get_object(&self, key: &str) -> Result<&Json5Map> {
        self.require(key)?
            .as_object()
            .ok_or_else(|| Error::type_mismatch(key, "an object"))
    }

    /// Reads the member as an instant, see [`Value::as_instant_with`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json5::{parse, Json5Options};
    ///
    /// let value = parse("{created: '2012-05-27T20:32:39Z', count: 3.5}").unwrap();
    /// let object = value.as_object().unwrap();
    /// let options = Json5Options::new();
    ///
    /// assert_eq!(object.get_instant("created", &options).unwrap().timestamp(), 1338150759);
    /// assert!(object.is_instant("created", &options));
    /// assert!(!object.is_instant("count", &options));
    /// ```
    pub fn get_instant(&self, key: &str, options: &Json5Options) -> Result<DateTime<Utc>> {
        self.require(key)?
            .as_instant_with(options)
            .ok_or_else(|| Error::type_mismatch(key, "an instant"))
    }

    #[must_use]
    pub fn is_instant(&self, key: &str, options: &Json5Options) -> bool {
        self.0
            .get(key)
            .is_some_and(|value| value.as_instant_with(options).is_some())
    }
}

impl From<HashMap<String, Value>> for Json5Map {
    fn from(map: HashMap<String, Value>) -> Self {
        Json5Map(map.into_iter().collect())
    }
}

impl From<Json5Map> for HashMap<String, Value> {
    fn from(map: Json5Map) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for Json5Map {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Json5Map {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for Json5Map {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Json5Map(IndexMap::from_iter(iter))
    }
}
