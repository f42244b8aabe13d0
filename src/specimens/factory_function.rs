//! Specimen for factory functions.

use crate::error::{FixtureError, FixtureResult};
use crate::fixture::AutoFixture;
use crate::hint::Hint;
use crate::value::Value;

/// Handles any callable not claimed by the named-constructor specimen.
///
/// The function is invoked to obtain a sample, which then runs through the
/// object builder's regeneration pass. A failure, or a factory returning
/// null, surfaces as [`FixtureError::FactoryFailed`].
#[derive(Debug, Default)]
pub struct FactoryFunctionSpecimen;

impl super::Specimen for FactoryFunctionSpecimen {
	fn handles(&self, hint: &Hint) -> bool {
		matches!(hint, Hint::Callable(_))
	}

	fn create(&self, hint: &Hint, _args: &[Value], fixture: &AutoFixture) -> FixtureResult<Value> {
		match hint {
			Hint::Callable(callable) => fixture
				.build()
				.like(callable.clone())
				.create()
				.map_err(|err| match err {
					err @ FixtureError::FactoryFailed { .. } => err,
					other => FixtureError::FactoryFailed {
						source: Some(Box::new(other)),
					},
				}),
			other => Err(FixtureError::UnsupportedSpecimen(other.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::hint::Callable;
	use crate::specimens::Specimen;
	use crate::value::ObjectValue;
	use rstest::rstest;

	#[rstest]
	fn test_sample_shape_is_regenerated() {
		let fixture = AutoFixture::new();
		let specimen = FactoryFunctionSpecimen;
		let factory = Callable::factory(|| {
			let mut sample = ObjectValue::new();
			sample.insert("sample", "");
			Ok(Value::Object(sample))
		});

		let value = specimen
			.create(&Hint::from(factory), &[], &fixture)
			.expect("creates");
		assert!(value.get("sample").is_some());
	}

	#[rstest]
	fn test_null_return_fails() {
		let fixture = AutoFixture::new();
		let specimen = FactoryFunctionSpecimen;
		let factory = Callable::factory(|| Ok(Value::Null));

		let err = specimen
			.create(&Hint::from(factory), &[], &fixture)
			.expect_err("fails");
		assert_eq!(
			err.to_string(),
			"unable to create instance using factory function"
		);
	}
}
