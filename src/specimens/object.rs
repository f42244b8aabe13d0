//! Terminal specimen for object-kind samples.

use crate::error::{FixtureError, FixtureResult};
use crate::fixture::AutoFixture;
use crate::hint::Hint;
use crate::value::Value;

/// Handles anything of object kind: objects, arrays and null.
///
/// Objects run through the builder's regeneration pass. Arrays regenerate
/// element-wise, each element dispatched on its own value. Null builds an
/// empty object.
#[derive(Debug, Default)]
pub struct ObjectSpecimen;

impl super::Specimen for ObjectSpecimen {
	fn handles(&self, hint: &Hint) -> bool {
		matches!(
			hint,
			Hint::Sample(Value::Null | Value::Array(_) | Value::Object(_))
		)
	}

	fn create(&self, hint: &Hint, _args: &[Value], fixture: &AutoFixture) -> FixtureResult<Value> {
		match hint {
			Hint::Sample(Value::Object(sample)) => {
				fixture.build().like(sample.clone()).create()
			}
			Hint::Sample(Value::Array(items)) => {
				let mut regenerated = Vec::with_capacity(items.len());
				for item in items {
					regenerated.push(fixture.create(Hint::from(item.clone()))?);
				}
				Ok(Value::Array(regenerated))
			}
			Hint::Sample(Value::Null) => fixture.build().create(),
			other => Err(FixtureError::UnsupportedSpecimen(other.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::specimens::Specimen;
	use crate::value::ObjectValue;
	use rstest::rstest;

	#[rstest]
	fn test_null_sample_builds_an_empty_object() {
		let fixture = AutoFixture::new();
		let specimen = ObjectSpecimen;

		let value = specimen
			.create(&Hint::Sample(Value::Null), &[], &fixture)
			.expect("creates");
		assert!(value.as_object().is_some_and(ObjectValue::is_empty));
	}

	#[rstest]
	fn test_array_sample_regenerates_each_element() {
		let fixture = AutoFixture::new();
		let specimen = ObjectSpecimen;
		let hint = Hint::Sample(Value::Array(vec![
			Value::from("tag"),
			Value::from(10.0),
			Value::from(true),
		]));

		let value = specimen.create(&hint, &[], &fixture).expect("creates");
		let items = value.as_array().expect("array");
		assert_eq!(items.len(), 3);
		assert!(items[0].as_str().is_some_and(|s| s.starts_with("tag")));
		assert!(items[1].is_number());
		assert!(items[2].is_bool());
	}

	#[rstest]
	fn test_scalar_samples_are_not_handled() {
		let specimen = ObjectSpecimen;
		assert!(!specimen.handles(&Hint::Sample(Value::Bool(true))));
	}
}
