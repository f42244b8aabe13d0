//! Specimen for numeric seed hints.

use rand::Rng;

use crate::error::{FixtureError, FixtureResult};
use crate::fixture::AutoFixture;
use crate::hint::Hint;
use crate::value::Value;

/// Handles any numeric hint, treating the seed as a multiplier.
///
/// A seed of exactly 0 uses multiplier 1 instead, so a zero seed never pins
/// the output to zero.
#[derive(Debug, Default)]
pub struct SeededNumberSpecimen;

impl super::Specimen for SeededNumberSpecimen {
	fn handles(&self, hint: &Hint) -> bool {
		matches!(hint, Hint::Seed(_))
	}

	fn create(&self, hint: &Hint, _args: &[Value], _fixture: &AutoFixture) -> FixtureResult<Value> {
		match hint {
			Hint::Seed(seed) => {
				let multiplier = if *seed == 0.0 { 1.0 } else { *seed };
				let uniform: f64 = rand::thread_rng().gen_range(0.0..1.0);
				Ok(Value::Number(uniform * multiplier))
			}
			other => Err(FixtureError::UnsupportedSpecimen(other.to_string())),
		}
	}
}
