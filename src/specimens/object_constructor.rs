//! Specimen for named constructors.

use crate::error::{FixtureError, FixtureResult};
use crate::fixture::AutoFixture;
use crate::hint::Hint;
use crate::value::Value;

/// Handles callables whose declared name starts with an uppercase letter.
///
/// The constructor is instantiated and the resulting instance runs through
/// the object builder's property-regeneration pass. Any failure surfaces as
/// [`FixtureError::ConstructionFailed`] naming the constructor.
#[derive(Debug, Default)]
pub struct ObjectConstructorSpecimen;

impl super::Specimen for ObjectConstructorSpecimen {
	fn handles(&self, hint: &Hint) -> bool {
		matches!(hint, Hint::Callable(callable) if callable.is_constructor())
	}

	fn create(&self, hint: &Hint, _args: &[Value], fixture: &AutoFixture) -> FixtureResult<Value> {
		match hint {
			Hint::Callable(callable) => fixture
				.build()
				.like(callable.clone())
				.create()
				.map_err(|err| match err {
					err @ FixtureError::ConstructionFailed { .. } => err,
					other => FixtureError::ConstructionFailed {
						name: callable.name().unwrap_or_default().to_string(),
						source: Some(Box::new(other)),
					},
				}),
			other => Err(FixtureError::UnsupportedSpecimen(other.to_string())),
		}
	}
}
