//! Specimen for the `String` constructor marker.

use crate::error::{FixtureError, FixtureResult};
use crate::fixture::AutoFixture;
use crate::guid;
use crate::hint::Hint;
use crate::value::Value;

/// Handles the `String` marker by producing a fresh identifier.
#[derive(Debug, Default)]
pub struct StringConstructorSpecimen;

impl super::Specimen for StringConstructorSpecimen {
	fn handles(&self, hint: &Hint) -> bool {
		matches!(hint, Hint::String)
	}

	fn create(&self, hint: &Hint, _args: &[Value], _fixture: &AutoFixture) -> FixtureResult<Value> {
		match hint {
			Hint::String => Ok(Value::String(guid::generate())),
			other => Err(FixtureError::UnsupportedSpecimen(other.to_string())),
		}
	}
}
