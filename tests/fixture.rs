//! Facade integration tests: specimen dispatch and statistical behavior.

use std::collections::HashSet;

use autofixture::{AutoFixture, Callable, FixtureError, Hint, ObjectValue, Value};
use regex::Regex;
use rstest::rstest;
use serde::Serialize;

const GUID_PATTERN: &str = "^[a-f0-9]{8}(?:-[a-f0-9]{4}){3}-[a-f0-9]{12}$";
const TRIALS: usize = 2000;

fn fixture() -> AutoFixture {
	AutoFixture::new()
}

#[rstest]
fn test_string_hint_creates_a_random_string_with_the_given_prefix() {
	let value = fixture().create("foo").expect("creates");
	let text = value.as_str().expect("string");
	assert!(text.starts_with("foo"));
	assert!(text.len() > "foo".len());
}

#[rstest]
fn test_string_constructor_creates_a_random_identifier() {
	let value = fixture().create(Hint::String).expect("creates");
	let pattern = Regex::new(GUID_PATTERN).expect("valid pattern");
	assert!(pattern.is_match(value.as_str().expect("string")));
}

#[rstest]
fn test_number_constructor_creates_a_number_in_the_unit_range() {
	for _ in 0..TRIALS {
		let value = fixture().create(Hint::Number).expect("creates");
		let n = value.as_f64().expect("number");
		assert!((0.0..1.0).contains(&n));
	}
}

#[rstest]
fn test_boolean_constructor_creates_either_true_or_false() {
	let fixture = fixture();
	let mut seen = HashSet::new();
	for _ in 0..100 {
		let value = fixture.create(Hint::Boolean).expect("creates");
		seen.insert(value.as_bool().expect("boolean"));
		if seen.len() == 2 {
			break;
		}
	}
	assert_eq!(seen.len(), 2);
}

#[rstest]
#[case(true)]
#[case(false)]
fn test_boolean_seed_is_rerandomized_fifty_fifty(#[case] seed: bool) {
	let fixture = fixture();
	let mut trues = 0usize;
	for _ in 0..TRIALS {
		if fixture
			.create(seed)
			.expect("creates")
			.as_bool()
			.expect("boolean")
		{
			trues += 1;
		}
	}
	let lower = (0.45 * TRIALS as f64) as usize;
	let upper = (0.55 * TRIALS as f64) as usize;
	assert!((lower..=upper).contains(&trues), "{trues} trues out of {TRIALS}");
}

#[rstest]
#[case(1.0)]
#[case(5.0)]
#[case(10.0)]
#[case(100.0)]
#[case(1000.0)]
fn test_number_constructor_accepts_a_positive_multiplier(#[case] multiplier: f64) {
	let fixture = fixture();
	let mut sum = 0.0;
	for _ in 0..TRIALS {
		let value = fixture
			.create_with(Hint::Number, &[Value::from(multiplier)])
			.expect("creates");
		let n = value.as_f64().expect("number");
		assert!(n >= 0.0 && n < multiplier);
		sum += n;
	}
	// The uniform average converges to half the multiplier.
	let average = sum / TRIALS as f64;
	assert!(average > 0.45 * multiplier);
	assert!(average < 0.55 * multiplier);
}

#[rstest]
#[case(-1.0)]
#[case(-10.0)]
#[case(-1000.0)]
fn test_number_constructor_accepts_a_negative_multiplier(#[case] multiplier: f64) {
	let fixture = fixture();
	let mut sum = 0.0;
	for _ in 0..TRIALS {
		let value = fixture
			.create_with(Hint::Number, &[Value::from(multiplier)])
			.expect("creates");
		let n = value.as_f64().expect("number");
		assert!(n > multiplier && n <= 0.0);
		sum += n;
	}
	let average = sum / TRIALS as f64;
	assert!(average > 0.55 * multiplier);
	assert!(average < 0.45 * multiplier);
}

#[rstest]
#[case(1.0)]
#[case(50.0)]
#[case(1000.0)]
fn test_numeric_seed_acts_as_a_multiplier(#[case] seed: f64) {
	let fixture = fixture();
	let mut sum = 0.0;
	for _ in 0..TRIALS {
		let value = fixture.create(seed).expect("creates");
		let n = value.as_f64().expect("number");
		assert!(n >= 0.0 && n < seed);
		sum += n;
	}
	let average = sum / TRIALS as f64;
	assert!(average > 0.45 * seed);
	assert!(average < 0.55 * seed);
}

#[rstest]
fn test_zero_seed_never_pins_the_output_to_zero() {
	let fixture = fixture();
	for _ in 0..TRIALS {
		let value = fixture.create(0.0).expect("creates");
		let n = value.as_f64().expect("number");
		assert!((0.0..1.0).contains(&n));
	}
}

#[rstest]
fn test_create_many_uses_the_default_count_range() {
	let fixture = fixture();
	let mut length_sum = 0usize;
	for _ in 0..TRIALS {
		let values = fixture.create_many(Hint::String).expect("creates");
		assert!((3..=10).contains(&values.len()));
		length_sum += values.len();
	}
	// Uniform over [3, 10]; the average converges on 6.5 within 5%.
	let average = length_sum as f64 / TRIALS as f64;
	assert!(average >= 0.95 * 6.5);
	assert!(average <= 1.05 * 6.5);
}

#[rstest]
fn test_create_batch_creates_the_requested_number() {
	let values = fixture()
		.create_batch(Hint::String, 125)
		.expect("creates");
	assert_eq!(values.len(), 125);
}

#[rstest]
fn test_create_many_forwards_extra_arguments() {
	let values = fixture()
		.create_many_with(Hint::Number, &[Value::from(10.0)])
		.expect("creates");
	for value in values {
		let n = value.as_f64().expect("number");
		assert!(n >= 0.0 && n < 10.0);
	}
}

#[derive(Default, Serialize)]
struct MyObjectType {
	prop1: String,
	prop2: String,
	prop3: f64,
	prop4: bool,
}

#[rstest]
fn test_constructor_hint_reports_the_constructor_name() {
	let value = fixture()
		.create(Callable::of::<MyObjectType>())
		.expect("creates");
	let object = value.as_object().expect("object");
	assert_eq!(object.type_name(), Some("MyObjectType"));
}

#[rstest]
fn test_constructor_hint_regenerates_every_property() {
	let value = fixture()
		.create(Callable::of::<MyObjectType>())
		.expect("creates");

	let prop1 = value.get("prop1").and_then(Value::as_str).expect("string");
	assert!(prop1.starts_with("prop1"));
	assert!(prop1.len() > "prop1".len());

	let prop2 = value.get("prop2").and_then(Value::as_str).expect("string");
	assert!(prop2.starts_with("prop2"));

	let prop3 = value.get("prop3").and_then(Value::as_f64).expect("number");
	assert!(prop3 != 0.0);

	assert!(value.get("prop4").is_some_and(Value::is_bool));
}

#[rstest]
fn test_explicitly_named_constructor_behaves_like_a_type() {
	let ctor = Callable::constructor("Invoice", || {
		let mut sample = ObjectValue::new();
		sample.insert("number", "");
		sample.insert("amount", 0.0);
		Ok(Value::Object(sample))
	});

	let value = fixture().create(ctor).expect("creates");
	let object = value.as_object().expect("object");
	assert_eq!(object.type_name(), Some("Invoice"));
	assert!(object.contains_key("number"));
	assert!(object.contains_key("amount"));
}

#[rstest]
fn test_failing_constructor_reports_its_name() {
	let failing = Callable::constructor("FooBar", || {
		Err(FixtureError::Callable("Failed!".to_string()))
	});

	let err = fixture().create(failing).expect_err("fails");
	assert_eq!(err.to_string(), "unable to create instance of FooBar");
	assert!(matches!(err, FixtureError::ConstructionFailed { .. }));
}

#[rstest]
fn test_factory_function_supplies_the_sample() {
	let factory = Callable::factory(|| {
		let mut sample = ObjectValue::new();
		sample.insert("sample", "");
		Ok(Value::Object(sample))
	});

	let value = fixture().create(factory).expect("creates");
	assert!(value.get("sample").is_some());
}

#[rstest]
fn test_factory_function_returning_null_fails() {
	let factory = Callable::factory(|| Ok(Value::Null));

	let err = fixture().create(factory).expect_err("fails");
	assert_eq!(
		err.to_string(),
		"unable to create instance using factory function"
	);
}

#[rstest]
fn test_failing_factory_function_is_wrapped() {
	let factory = Callable::factory(|| Err(FixtureError::Callable("nope".to_string())));

	let err = fixture().create(factory).expect_err("fails");
	assert!(matches!(err, FixtureError::FactoryFailed { source: Some(_) }));
}

#[rstest]
fn test_repeated_string_creation_is_collision_free() {
	let fixture = fixture();
	let mut seen = HashSet::new();
	for _ in 0..1000 {
		let value = fixture.create(Hint::String).expect("creates");
		let text = value.as_str().expect("string").to_string();
		assert!(seen.insert(text), "identifier created multiple times");
	}
}

#[rstest]
fn test_repeated_prefixed_string_creation_is_collision_free() {
	let fixture = fixture();
	let mut seen = HashSet::new();
	for _ in 0..1000 {
		let value = fixture.create("prefix").expect("creates");
		let text = value.as_str().expect("string").to_string();
		assert!(seen.insert(text), "prefixed string created multiple times");
	}
}

#[rstest]
fn test_repeated_number_creation_is_collision_free() {
	let fixture = fixture();
	let mut seen = HashSet::new();
	for _ in 0..1000 {
		let value = fixture.create(Hint::Number).expect("creates");
		let bits = value.as_f64().expect("number").to_bits();
		assert!(seen.insert(bits), "number created multiple times");
	}
}
