//! Specimen for string hints: deterministic prefix, random suffix.

use crate::error::{FixtureError, FixtureResult};
use crate::fixture::AutoFixture;
use crate::guid;
use crate::hint::Hint;
use crate::value::Value;

/// Handles any string hint by appending a fresh identifier to it.
#[derive(Debug, Default)]
pub struct PrefixedStringSpecimen;

impl super::Specimen for PrefixedStringSpecimen {
	fn handles(&self, hint: &Hint) -> bool {
		matches!(hint, Hint::Prefix(_))
	}

	fn create(&self, hint: &Hint, _args: &[Value], _fixture: &AutoFixture) -> FixtureResult<Value> {
		match hint {
			Hint::Prefix(prefix) => Ok(Value::String(format!("{prefix}{}", guid::generate()))),
			other => Err(FixtureError::UnsupportedSpecimen(other.to_string())),
		}
	}
}
