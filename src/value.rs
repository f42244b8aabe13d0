//! Dynamically typed fixture data.
//!
//! Generated values are represented by [`Value`], a small JSON-like sum type.
//! Objects keep their fields in insertion order and remember the name of the
//! constructor that produced them, which is how a built instance reports the
//! type it mirrors.

use std::fmt;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// A dynamically typed value produced by the fixture engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
	/// The absent value.
	#[default]
	Null,
	/// A boolean.
	Bool(bool),
	/// A floating point number.
	Number(f64),
	/// A string.
	String(String),
	/// An ordered sequence of values.
	Array(Vec<Value>),
	/// An object with insertion-ordered fields.
	Object(ObjectValue),
}

impl Value {
	/// Returns the string content if this is a string value.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(s) => Some(s),
			_ => None,
		}
	}

	/// Returns the numeric content if this is a number value.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Value::Number(n) => Some(*n),
			_ => None,
		}
	}

	/// Returns the boolean content if this is a boolean value.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(b) => Some(*b),
			_ => None,
		}
	}

	/// Returns the object content if this is an object value.
	pub fn as_object(&self) -> Option<&ObjectValue> {
		match self {
			Value::Object(object) => Some(object),
			_ => None,
		}
	}

	/// Returns the array content if this is an array value.
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Value::Array(items) => Some(items),
			_ => None,
		}
	}

	/// Returns true if this is the null value.
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	/// Returns true if this is a string value.
	pub fn is_string(&self) -> bool {
		matches!(self, Value::String(_))
	}

	/// Returns true if this is a number value.
	pub fn is_number(&self) -> bool {
		matches!(self, Value::Number(_))
	}

	/// Returns true if this is a boolean value.
	pub fn is_bool(&self) -> bool {
		matches!(self, Value::Bool(_))
	}

	/// Returns true if this is an object value.
	pub fn is_object(&self) -> bool {
		matches!(self, Value::Object(_))
	}

	/// Looks up a field on an object value.
	///
	/// Returns `None` for non-object values and missing keys.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.as_object().and_then(|object| object.get(key))
	}

	/// Converts this value into its `serde_json` representation.
	///
	/// Object type names are not part of the structural data and are
	/// dropped. A non-finite number maps to JSON null.
	pub fn to_json(&self) -> serde_json::Value {
		match self {
			Value::Null => serde_json::Value::Null,
			Value::Bool(b) => serde_json::Value::Bool(*b),
			Value::Number(n) => serde_json::Number::from_f64(*n)
				.map(serde_json::Value::Number)
				.unwrap_or(serde_json::Value::Null),
			Value::String(s) => serde_json::Value::String(s.clone()),
			Value::Array(items) => {
				serde_json::Value::Array(items.iter().map(Value::to_json).collect())
			}
			Value::Object(object) => serde_json::Value::Object(
				object
					.iter()
					.map(|(key, value)| (key.clone(), value.to_json()))
					.collect(),
			),
		}
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.to_json())
	}
}

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Value::Null => serializer.serialize_unit(),
			Value::Bool(b) => serializer.serialize_bool(*b),
			Value::Number(n) => serializer.serialize_f64(*n),
			Value::String(s) => serializer.serialize_str(s),
			Value::Array(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
			Value::Object(object) => object.serialize(serializer),
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Number(value)
	}
}

impl From<f32> for Value {
	fn from(value: f32) -> Self {
		Value::Number(value.into())
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Value::Number(value.into())
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Number(value as f64)
	}
}

impl From<u32> for Value {
	fn from(value: u32) -> Self {
		Value::Number(value.into())
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::String(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::String(value)
	}
}

impl From<Vec<Value>> for Value {
	fn from(items: Vec<Value>) -> Self {
		Value::Array(items)
	}
}

impl From<ObjectValue> for Value {
	fn from(object: ObjectValue) -> Self {
		Value::Object(object)
	}
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Value::Null,
			serde_json::Value::Bool(b) => Value::Bool(b),
			serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or_default()),
			serde_json::Value::String(s) => Value::String(s),
			serde_json::Value::Array(items) => {
				Value::Array(items.into_iter().map(Value::from).collect())
			}
			serde_json::Value::Object(map) => Value::Object(
				map.into_iter()
					.map(|(key, value)| (key, Value::from(value)))
					.collect(),
			),
		}
	}
}

/// An object with insertion-ordered fields and an optional type name.
///
/// The type name records which named constructor produced the instance; plain
/// object samples build plain results without one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectValue {
	type_name: Option<String>,
	fields: IndexMap<String, Value>,
}

impl ObjectValue {
	/// Creates an empty, unnamed object.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty object carrying a constructor name.
	pub fn named(name: impl Into<String>) -> Self {
		Self {
			type_name: Some(name.into()),
			fields: IndexMap::new(),
		}
	}

	/// Returns the name of the constructor that produced this object.
	pub fn type_name(&self) -> Option<&str> {
		self.type_name.as_deref()
	}

	/// Replaces the recorded constructor name.
	pub fn set_type_name(&mut self, name: Option<String>) {
		self.type_name = name;
	}

	/// Inserts a field, replacing any previous value for the key.
	///
	/// A replaced key keeps its original position in the field order.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		self.fields.insert(key.into(), value.into())
	}

	/// Looks up a field by key.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.fields.get(key)
	}

	/// Looks up a field by key, mutably.
	pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
		self.fields.get_mut(key)
	}

	/// Removes a field, preserving the order of the remaining fields.
	pub fn remove(&mut self, key: &str) -> Option<Value> {
		self.fields.shift_remove(key)
	}

	/// Returns true if the key is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.fields.contains_key(key)
	}

	/// Iterates the field names in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.fields.keys().map(String::as_str)
	}

	/// Iterates the fields in insertion order.
	pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
		self.fields.iter()
	}

	/// Returns the number of fields.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Returns true if the object has no fields.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}

impl Serialize for ObjectValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.len()))?;
		for (key, value) in self.iter() {
			map.serialize_entry(key, value)?;
		}
		map.end()
	}
}

impl From<IndexMap<String, Value>> for ObjectValue {
	fn from(fields: IndexMap<String, Value>) -> Self {
		Self {
			type_name: None,
			fields,
		}
	}
}

impl FromIterator<(String, Value)> for ObjectValue {
	fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
		Self {
			type_name: None,
			fields: iter.into_iter().collect(),
		}
	}
}
