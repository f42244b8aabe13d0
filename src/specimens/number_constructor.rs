//! Specimen for the `Number` constructor marker.

use rand::Rng;

use crate::error::{FixtureError, FixtureResult};
use crate::fixture::AutoFixture;
use crate::hint::Hint;
use crate::value::Value;

/// Handles the `Number` marker, scaling by an optional multiplier argument.
///
/// The multiplier is the first extra argument when numeric, else 1. It may
/// be negative, flipping the output range to `(multiplier, 0]`.
#[derive(Debug, Default)]
pub struct NumberConstructorSpecimen;

impl super::Specimen for NumberConstructorSpecimen {
	fn handles(&self, hint: &Hint) -> bool {
		matches!(hint, Hint::Number)
	}

	fn create(&self, hint: &Hint, args: &[Value], _fixture: &AutoFixture) -> FixtureResult<Value> {
		match hint {
			Hint::Number => {
				let multiplier = args.first().and_then(Value::as_f64).unwrap_or(1.0);
				let uniform: f64 = rand::thread_rng().gen_range(0.0..1.0);
				Ok(Value::Number(uniform * multiplier))
			}
			other => Err(FixtureError::UnsupportedSpecimen(other.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::specimens::Specimen;
	use rstest::rstest;

	#[rstest]
	fn test_defaults_to_the_unit_range() {
		let fixture = AutoFixture::new();
		let specimen = NumberConstructorSpecimen;
		for _ in 0..100 {
			let value = specimen
				.create(&Hint::Number, &[], &fixture)
				.expect("creates");
			let n = value.as_f64().expect("number");
			assert!((0.0..1.0).contains(&n));
		}
	}

	#[rstest]
	fn test_non_numeric_argument_is_ignored() {
		let fixture = AutoFixture::new();
		let specimen = NumberConstructorSpecimen;
		let args = [Value::from("not a number")];
		for _ in 0..100 {
			let value = specimen
				.create(&Hint::Number, &args, &fixture)
				.expect("creates");
			let n = value.as_f64().expect("number");
			assert!((0.0..1.0).contains(&n));
		}
	}
}
