//! The fixture facade.
//!
//! [`AutoFixture`] is the entry point callers use: `create` for single
//! values, `create_many`/`create_batch` for sequences, and `build` for the
//! fluent object builder. It owns an immutable specimen registry constructed
//! at initialization; creation itself is stateless, so a fixture can be
//! shared freely.

use tracing::trace;

use crate::builder::ObjectBuilder;
use crate::config::FixtureConfig;
use crate::error::FixtureResult;
use crate::hint::Hint;
use crate::registry::SpecimenRegistry;
use crate::value::Value;

/// The top-level test-data generator.
///
/// # Example
///
/// ```
/// use autofixture::{AutoFixture, Hint};
///
/// let fixture = AutoFixture::new();
///
/// let name = fixture.create("name")?;
/// assert!(name.as_str().is_some_and(|s| s.starts_with("name")));
///
/// let id = fixture.create(Hint::String)?;
/// assert_eq!(id.as_str().map(str::len), Some(36));
/// # Ok::<(), autofixture::FixtureError>(())
/// ```
#[derive(Debug, Default)]
pub struct AutoFixture {
	registry: SpecimenRegistry,
	config: FixtureConfig,
}

impl AutoFixture {
	/// Creates a fixture with the default specimens and configuration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a fixture with a custom configuration.
	pub fn with_config(config: FixtureConfig) -> Self {
		Self {
			registry: SpecimenRegistry::with_default_specimens(),
			config,
		}
	}

	/// Returns the fixture's configuration.
	pub fn config(&self) -> &FixtureConfig {
		&self.config
	}

	/// Returns the fixture's specimen registry.
	pub fn registry(&self) -> &SpecimenRegistry {
		&self.registry
	}

	/// Creates a value for the hint.
	///
	/// # Errors
	///
	/// Returns [`UnsupportedSpecimen`](crate::FixtureError::UnsupportedSpecimen)
	/// when no specimen recognizes the hint, or a construction error when a
	/// callable hint fails to produce a sample.
	pub fn create(&self, hint: impl Into<Hint>) -> FixtureResult<Value> {
		self.dispatch(&hint.into(), &[])
	}

	/// Creates a value for the hint with specimen-specific extra arguments.
	///
	/// Only the number constructor consumes one today: an optional numeric
	/// multiplier as the first argument.
	pub fn create_with(&self, hint: impl Into<Hint>, args: &[Value]) -> FixtureResult<Value> {
		self.dispatch(&hint.into(), args)
	}

	/// Creates a random number of values for the hint.
	///
	/// The count is drawn uniformly from the configured range, `[3, 10]` by
	/// default.
	pub fn create_many(&self, hint: impl Into<Hint>) -> FixtureResult<Vec<Value>> {
		self.create_many_with(hint, &[])
	}

	/// Creates a random number of values, forwarding extra arguments to
	/// each creation.
	pub fn create_many_with(
		&self,
		hint: impl Into<Hint>,
		args: &[Value],
	) -> FixtureResult<Vec<Value>> {
		self.create_batch_with(hint, self.config.sample_many_count(), args)
	}

	/// Creates exactly `count` values for the hint, each generated
	/// independently.
	pub fn create_batch(&self, hint: impl Into<Hint>, count: usize) -> FixtureResult<Vec<Value>> {
		self.create_batch_with(hint, count, &[])
	}

	/// Creates exactly `count` values, forwarding extra arguments to each
	/// creation.
	pub fn create_batch_with(
		&self,
		hint: impl Into<Hint>,
		count: usize,
		args: &[Value],
	) -> FixtureResult<Vec<Value>> {
		let hint = hint.into();
		let mut values = Vec::with_capacity(count);
		for _ in 0..count {
			values.push(self.dispatch(&hint, args)?);
		}
		Ok(values)
	}

	/// Opens a fluent object builder bound to this fixture.
	pub fn build(&self) -> ObjectBuilder<'_> {
		ObjectBuilder::new(self)
	}

	fn dispatch(&self, hint: &Hint, args: &[Value]) -> FixtureResult<Value> {
		trace!(hint = %hint, "dispatching hint");
		let specimen = self.registry.resolve(hint)?;
		specimen.create(hint, args, self)
	}
}
