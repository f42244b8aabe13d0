//! Type hints and callables.
//!
//! A [`Hint`] tells the fixture what kind of value to produce. The JS-style
//! "pass anything" surface becomes an explicit sum type here, with `From`
//! conversions so call sites stay as terse as the dynamic original:
//! `fixture.create("name")`, `fixture.create(123)`,
//! `fixture.create(Hint::String)`.
//!
//! [`Callable`] covers the two function-shaped hints: a named constructor
//! (uppercase-leading name) and an anonymous factory function. Rust has no
//! source-text reflection, so the name travels with the handle;
//! [`Callable::of`] derives it from the target type's name.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{FixtureError, FixtureResult};
use crate::value::Value;

/// The producer closure backing a [`Callable`].
type Producer = Arc<dyn Fn() -> FixtureResult<Value> + Send + Sync>;

/// A type hint describing what kind of value to produce.
#[derive(Clone)]
pub enum Hint {
	/// A string hint: the desired prefix of a generated string.
	Prefix(String),
	/// The `String` constructor marker: a fresh random identifier.
	String,
	/// The `Number` constructor marker: a fresh random number.
	Number,
	/// The `Boolean` constructor marker: a fresh random boolean.
	Boolean,
	/// A numeric seed, treated as a multiplier for a random number.
	Seed(f64),
	/// A boolean seed; the outcome is still randomized.
	SeedBool(bool),
	/// A named constructor or factory function.
	Callable(Callable),
	/// A sample of object kind (object, array or null), used directly.
	Sample(Value),
}

impl fmt::Display for Hint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Hint::Prefix(prefix) => write!(f, "string prefix {prefix:?}"),
			Hint::String => f.write_str("String constructor"),
			Hint::Number => f.write_str("Number constructor"),
			Hint::Boolean => f.write_str("Boolean constructor"),
			Hint::Seed(seed) => write!(f, "numeric seed {seed}"),
			Hint::SeedBool(seed) => write!(f, "boolean seed {seed}"),
			Hint::Callable(callable) => match callable.name() {
				Some(name) => write!(f, "callable {name}"),
				None => f.write_str("anonymous callable"),
			},
			Hint::Sample(value) => write!(f, "sample {value}"),
		}
	}
}

impl fmt::Debug for Hint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Hint({self})")
	}
}

impl From<&str> for Hint {
	fn from(prefix: &str) -> Self {
		Hint::Prefix(prefix.to_string())
	}
}

impl From<String> for Hint {
	fn from(prefix: String) -> Self {
		Hint::Prefix(prefix)
	}
}

impl From<f64> for Hint {
	fn from(seed: f64) -> Self {
		Hint::Seed(seed)
	}
}

impl From<f32> for Hint {
	fn from(seed: f32) -> Self {
		Hint::Seed(seed.into())
	}
}

impl From<i32> for Hint {
	fn from(seed: i32) -> Self {
		Hint::Seed(seed.into())
	}
}

impl From<i64> for Hint {
	fn from(seed: i64) -> Self {
		Hint::Seed(seed as f64)
	}
}

impl From<u32> for Hint {
	fn from(seed: u32) -> Self {
		Hint::Seed(seed.into())
	}
}

impl From<bool> for Hint {
	fn from(seed: bool) -> Self {
		Hint::SeedBool(seed)
	}
}

impl From<Callable> for Hint {
	fn from(callable: Callable) -> Self {
		Hint::Callable(callable)
	}
}

impl From<crate::value::ObjectValue> for Hint {
	fn from(object: crate::value::ObjectValue) -> Self {
		Hint::Sample(Value::Object(object))
	}
}

impl From<Value> for Hint {
	fn from(value: Value) -> Self {
		match value {
			Value::String(s) => Hint::Prefix(s),
			Value::Number(n) => Hint::Seed(n),
			Value::Bool(b) => Hint::SeedBool(b),
			other => Hint::Sample(other),
		}
	}
}

impl From<serde_json::Value> for Hint {
	fn from(value: serde_json::Value) -> Self {
		Hint::from(Value::from(value))
	}
}

/// A function-shaped hint: a named constructor or a factory function.
///
/// The handle is cheap to clone and safe to share across threads. Whether it
/// takes the constructor path or the factory path is decided solely by its
/// declared name: an uppercase-leading name marks a constructor, anything
/// else is a factory function.
#[derive(Clone)]
pub struct Callable {
	name: Option<String>,
	produce: Producer,
}

impl Callable {
	/// Creates a named constructor from a producer closure.
	///
	/// # Example
	///
	/// ```
	/// use autofixture::{Callable, ObjectValue, Value};
	///
	/// let ctor = Callable::constructor("Person", || {
	///     let mut person = ObjectValue::new();
	///     person.insert("name", "");
	///     person.insert("age", 0.0);
	///     Ok(Value::Object(person))
	/// });
	/// assert!(ctor.is_constructor());
	/// ```
	pub fn constructor<F>(name: impl Into<String>, produce: F) -> Self
	where
		F: Fn() -> FixtureResult<Value> + Send + Sync + 'static,
	{
		Self {
			name: Some(name.into()),
			produce: Arc::new(produce),
		}
	}

	/// Creates an anonymous factory function from a producer closure.
	pub fn factory<F>(produce: F) -> Self
	where
		F: Fn() -> FixtureResult<Value> + Send + Sync + 'static,
	{
		Self {
			name: None,
			produce: Arc::new(produce),
		}
	}

	/// Creates a constructor for a concrete Rust type.
	///
	/// The callable instantiates `T::default()`, converts it through serde
	/// into a [`Value`], and carries `T`'s unqualified type name. Types named
	/// with the usual uppercase convention therefore take the
	/// named-constructor path.
	///
	/// # Example
	///
	/// ```
	/// use autofixture::Callable;
	/// use serde::Serialize;
	///
	/// #[derive(Default, Serialize)]
	/// struct Person {
	///     name: String,
	///     age: f64,
	/// }
	///
	/// let ctor = Callable::of::<Person>();
	/// assert_eq!(ctor.name(), Some("Person"));
	/// assert!(ctor.is_constructor());
	/// ```
	pub fn of<T>() -> Self
	where
		T: Default + Serialize + 'static,
	{
		let full = std::any::type_name::<T>();
		let name = full.rsplit("::").next().unwrap_or(full);
		Self {
			name: Some(name.to_string()),
			produce: Arc::new(|| {
				let json = serde_json::to_value(T::default())
					.map_err(|err| FixtureError::Callable(err.to_string()))?;
				Ok(Value::from(json))
			}),
		}
	}

	/// Returns the declared name, if any.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Returns true if this callable is a named constructor.
	pub fn is_constructor(&self) -> bool {
		self.name
			.as_deref()
			.and_then(|name| name.chars().next())
			.is_some_and(char::is_uppercase)
	}

	/// Invokes the producer closure without any error wrapping.
	pub fn invoke(&self) -> FixtureResult<Value> {
		(self.produce)()
	}

	/// Resolves the callable into a sample instance.
	///
	/// Constructors stamp the produced object with their own name and wrap
	/// failures in [`FixtureError::ConstructionFailed`]. Factory functions
	/// wrap failures in [`FixtureError::FactoryFailed`], and a factory
	/// returning null is itself a failure.
	pub fn instantiate(&self) -> FixtureResult<Value> {
		if self.is_constructor() {
			let name = self.name.clone().unwrap_or_default();
			match self.invoke() {
				Ok(Value::Object(mut object)) => {
					object.set_type_name(Some(name));
					Ok(Value::Object(object))
				}
				Ok(value) => Ok(value),
				Err(err) => Err(FixtureError::ConstructionFailed {
					name,
					source: Some(Box::new(err)),
				}),
			}
		} else {
			match self.invoke() {
				Ok(Value::Null) => Err(FixtureError::FactoryFailed { source: None }),
				Ok(value) => Ok(value),
				Err(err) => Err(FixtureError::FactoryFailed {
					source: Some(Box::new(err)),
				}),
			}
		}
	}
}

impl fmt::Debug for Callable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Callable")
			.field("name", &self.name)
			.field("constructor", &self.is_constructor())
			.finish()
	}
}
