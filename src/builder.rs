//! The object builder.
//!
//! A builder accumulates a likeness (the sample whose shape the result
//! mirrors) plus per-path overrides, then materializes fresh instances.
//! Property values are regenerated through specimen dispatch, which is what
//! makes nested objects recurse: the builder calls back into the fixture,
//! the fixture dispatches to a specimen, and object-shaped properties open a
//! new builder.
//!
//! Builders are disposable: one is created per [`AutoFixture::build`] call,
//! borrows the fixture, and is dropped when the caller is done creating.

use indexmap::IndexMap;
use tracing::trace;

use crate::error::FixtureResult;
use crate::fixture::AutoFixture;
use crate::hint::{Callable, Hint};
use crate::path::PropertyPath;
use crate::value::{ObjectValue, Value};

/// The sample a built result mirrors.
///
/// Callables resolve to their produced instance at `create()` time; an
/// absent likeness builds an empty object.
#[derive(Debug, Clone, Default)]
pub enum Likeness {
	/// No sample; builds an empty object.
	#[default]
	None,
	/// A plain sample object, used directly.
	Sample(ObjectValue),
	/// A constructor or factory function invoked to obtain the sample.
	Callable(Callable),
}

impl From<ObjectValue> for Likeness {
	fn from(object: ObjectValue) -> Self {
		Likeness::Sample(object)
	}
}

impl From<Callable> for Likeness {
	fn from(callable: Callable) -> Self {
		Likeness::Callable(callable)
	}
}

impl From<Value> for Likeness {
	fn from(value: Value) -> Self {
		match value {
			Value::Object(object) => Likeness::Sample(object),
			// Scalars, arrays and null have no enumerable fields to mirror.
			_ => Likeness::None,
		}
	}
}

impl From<serde_json::Value> for Likeness {
	fn from(value: serde_json::Value) -> Self {
		Likeness::from(Value::from(value))
	}
}

/// Fluent builder for one-off object construction.
///
/// # Example
///
/// ```
/// use autofixture::AutoFixture;
/// use serde_json::json;
///
/// let fixture = AutoFixture::new();
/// let value = fixture
///     .build()
///     .like(json!({"name": "", "age": 0, "address": {"city": ""}}))
///     .with("age", 30.0)
///     .without("address.city")
///     .create()?;
///
/// assert!(value.get("name").is_some());
/// assert_eq!(value.get("age").and_then(|v| v.as_f64()), Some(30.0));
/// # Ok::<(), autofixture::FixtureError>(())
/// ```
#[derive(Debug)]
pub struct ObjectBuilder<'f> {
	fixture: &'f AutoFixture,
	likeness: Likeness,
	withs: IndexMap<String, Value>,
	withouts: Vec<String>,
}

impl<'f> ObjectBuilder<'f> {
	pub(crate) fn new(fixture: &'f AutoFixture) -> Self {
		Self {
			fixture,
			likeness: Likeness::None,
			withs: IndexMap::new(),
			withouts: Vec::new(),
		}
	}

	/// Sets the sample the built result should mirror.
	#[must_use]
	pub fn like(mut self, likeness: impl Into<Likeness>) -> Self {
		self.likeness = likeness.into();
		self
	}

	/// Marks a property path for deletion from the built result.
	#[must_use]
	pub fn without(mut self, path: impl Into<String>) -> Self {
		self.withouts.push(path.into());
		self
	}

	/// Forces a property path to a specific value in the built result.
	///
	/// The value is set verbatim after generation and after `without`
	/// deletions, so `with` wins over `without` for the same path no matter
	/// the order they were declared in. The last `with` per path wins.
	#[must_use]
	pub fn with(mut self, path: impl Into<String>, value: impl Into<Value>) -> Self {
		self.withs.insert(path.into(), value.into());
		self
	}

	/// Produces one built instance.
	///
	/// The likeness is resolved (callables are invoked), its fields are
	/// walked in insertion order, and each is regenerated through specimen
	/// dispatch: string-valued fields use their own key as the prefix hint,
	/// everything else dispatches on the field's value. Overrides apply
	/// last.
	///
	/// # Errors
	///
	/// Fails if the likeness cannot be instantiated or any nested
	/// regeneration fails; the in-progress result is discarded.
	pub fn create(&self) -> FixtureResult<Value> {
		let (resolved, type_name) = match &self.likeness {
			Likeness::None => (None, None),
			Likeness::Sample(object) => (Some(Value::Object(object.clone())), None),
			Likeness::Callable(callable) => {
				let instance = callable.instantiate()?;
				let name = match &instance {
					Value::Object(object) => object.type_name().map(str::to_string),
					_ => None,
				};
				(Some(instance), name)
			}
		};

		let mut result = ObjectValue::new();
		result.set_type_name(type_name);

		if let Some(Value::Object(likeness)) = &resolved {
			trace!(fields = likeness.len(), "building instance");
			for (key, value) in likeness.iter() {
				let generated = match value {
					Value::String(_) => self.fixture.create(Hint::Prefix(key.clone()))?,
					other => self.fixture.create(Hint::from(other.clone()))?,
				};
				result.insert(key.clone(), generated);
			}
		}

		for path in &self.withouts {
			PropertyPath::parse(path).remove(&mut result);
		}
		for (path, value) in &self.withs {
			PropertyPath::parse(path).set(&mut result, value.clone());
		}

		Ok(Value::Object(result))
	}

	/// Produces a random number of instances.
	///
	/// The count is drawn uniformly from the fixture's configured range,
	/// `[3, 10]` by default, both endpoints achievable.
	pub fn create_many(&self) -> FixtureResult<Vec<Value>> {
		self.create_batch(self.fixture.config().sample_many_count())
	}

	/// Produces exactly `count` instances.
	///
	/// Each instance independently re-runs the full `create()` algorithm,
	/// so property values differ across instances.
	pub fn create_batch(&self, count: usize) -> FixtureResult<Vec<Value>> {
		let mut values = Vec::with_capacity(count);
		for _ in 0..count {
			values.push(self.create()?);
		}
		Ok(values)
	}
}
