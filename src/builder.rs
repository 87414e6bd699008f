//! Value-tree construction callbacks used by the parser.
//!
//! The parser never names a container type. It creates objects and arrays
//! through a [`TreeBuilder`], so the same grammar can fill a [`Value`] tree
//! (via [`ValueBuilder`]) or any other representation.
//!
//! ```rust
//! use serde_json5::builder::{ArrayBuilder, ObjectBuilder, TreeBuilder};
//! use serde_json5::{parse_with_builder, CharSource, Json5Options, Number};
//!
//! /// Counts the leaves of a document instead of building it.
//! struct LeafCounter;
//!
//! struct Count(usize);
//!
//! impl ObjectBuilder for Count {
//!     type Value = usize;
//!     fn has_key(&self, _key: &str) -> bool {
//!         false
//!     }
//!     fn put(&mut self, _key: String, value: usize) -> Option<usize> {
//!         self.0 += value;
//!         None
//!     }
//! }
//!
//! impl ArrayBuilder for Count {
//!     type Value = usize;
//!     fn append(&mut self, value: usize) {
//!         self.0 += value;
//!     }
//! }
//!
//! impl TreeBuilder for LeafCounter {
//!     type Value = usize;
//!     type Object = Count;
//!     type Array = Count;
//!     fn new_object(&mut self) -> Count { Count(0) }
//!     fn new_array(&mut self) -> Count { Count(0) }
//!     fn finish_object(&mut self, object: Count) -> usize { object.0 }
//!     fn finish_array(&mut self, array: Count) -> usize { array.0 }
//!     fn null(&mut self) -> usize { 1 }
//!     fn boolean(&mut self, _value: bool) -> usize { 1 }
//!     fn number(&mut self, _value: Number) -> usize { 1 }
//!     fn string(&mut self, _value: String) -> usize { 1 }
//! }
//!
//! let source = CharSource::from_chars("{a: [1, 2, {b: null}], c: 'x'}".chars());
//! let leaves = parse_with_builder(source, &Json5Options::new(), &mut LeafCounter).unwrap();
//! assert_eq!(leaves, 4);
//! ```

use crate::map::Json5Map;
use crate::value::{Number, Value};

/// An object under construction.
pub trait ObjectBuilder {
    type Value;

    fn has_key(&self, key: &str) -> bool;

    /// Sets `key`, returning the previous value. Replacing a key must keep
    /// its position.
    fn put(&mut self, key: String, value: Self::Value) -> Option<Self::Value>;
}

/// An array under construction.
pub trait ArrayBuilder {
    type Value;

    fn append(&mut self, value: Self::Value);
}

/// Factory for the values produced by one parse.
pub trait TreeBuilder {
    type Value;
    type Object: ObjectBuilder<Value = Self::Value>;
    type Array: ArrayBuilder<Value = Self::Value>;

    fn new_object(&mut self) -> Self::Object;
    fn new_array(&mut self) -> Self::Array;
    fn finish_object(&mut self, object: Self::Object) -> Self::Value;
    fn finish_array(&mut self, array: Self::Array) -> Self::Value;
    fn null(&mut self) -> Self::Value;
    fn boolean(&mut self, value: bool) -> Self::Value;
    fn number(&mut self, value: Number) -> Self::Value;
    fn string(&mut self, value: String) -> Self::Value;
}

/// Builds [`Value`] trees.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValueBuilder;

impl ObjectBuilder for Json5Map {
    type Value = Value;

    fn has_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn put(&mut self, key: String, value: Value) -> Option<Value> {
        self.insert(key, value)
    }
}

impl ArrayBuilder for Vec<Value> {
    type Value = Value;

    fn append(&mut self, value: Value) {
        self.push(value);
    }
}

impl TreeBuilder for ValueBuilder {
    type Value = Value;
    type Object = Json5Map;
    type Array = Vec<Value>;

    fn new_object(&mut self) -> Json5Map {
        Json5Map::new()
    }

    fn new_array(&mut self) -> Vec<Value> {
        Vec::new()
    }

    fn finish_object(&mut self, object: Json5Map) -> Value {
        Value::Object(object)
    }

    fn finish_array(&mut self, array: Vec<Value>) -> Value {
        Value::Array(array)
    }

    fn null(&mut self) -> Value {
        Value::Null
    }

    fn boolean(&mut self, value: bool) -> Value {
        Value::Bool(value)
    }

    fn number(&mut self, value: Number) -> Value {
        Value::Number(value)
    }

    fn string(&mut self, value: String) -> Value {
        Value::String(value)
    }
}
