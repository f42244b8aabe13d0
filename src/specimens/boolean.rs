//! Specimen for boolean hints.

use rand::Rng;

use crate::error::{FixtureError, FixtureResult};
use crate::fixture::AutoFixture;
use crate::hint::Hint;
use crate::value::Value;

/// Handles the `Boolean` marker and boolean seed values.
///
/// The seed's own value never biases the outcome; either way the result is
/// a fair coin flip.
#[derive(Debug, Default)]
pub struct BooleanSpecimen;

impl super::Specimen for BooleanSpecimen {
	fn handles(&self, hint: &Hint) -> bool {
		matches!(hint, Hint::Boolean | Hint::SeedBool(_))
	}

	fn create(&self, hint: &Hint, _args: &[Value], _fixture: &AutoFixture) -> FixtureResult<Value> {
		match hint {
			Hint::Boolean | Hint::SeedBool(_) => {
				Ok(Value::Bool(rand::thread_rng().gen_bool(0.5)))
			}
			other => Err(FixtureError::UnsupportedSpecimen(other.to_string())),
		}
	}
}
