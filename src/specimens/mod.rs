//! Specimens: the type recognizers behind `create`.
//!
//! A specimen decides whether it can interpret a hint (`handles`) and knows
//! how to produce a value for it (`create`). The facade consults an ordered
//! registry of specimens and the first match wins, so predicates may
//! overlap; [`default_specimens`] returns the canonical order, most specific
//! first.
//!
//! Specimens that build whole objects (constructors, factory functions,
//! plain samples) delegate to the object builder through the `fixture`
//! parameter, which is also how the builder recurses back into dispatch for
//! nested properties.

mod boolean;
mod factory_function;
mod number_constructor;
mod object;
mod object_constructor;
mod prefixed_string;
mod seeded_number;
mod string_constructor;

pub use boolean::BooleanSpecimen;
pub use factory_function::FactoryFunctionSpecimen;
pub use number_constructor::NumberConstructorSpecimen;
pub use object::ObjectSpecimen;
pub use object_constructor::ObjectConstructorSpecimen;
pub use prefixed_string::PrefixedStringSpecimen;
pub use seeded_number::SeededNumberSpecimen;
pub use string_constructor::StringConstructorSpecimen;

use crate::error::FixtureResult;
use crate::fixture::AutoFixture;
use crate::hint::Hint;
use crate::value::Value;

/// A unit of type recognition and value production.
pub trait Specimen: Send + Sync + std::fmt::Debug {
	/// Returns true if this specimen can interpret the hint.
	fn handles(&self, hint: &Hint) -> bool;

	/// Produces a value for the hint.
	///
	/// `args` are specimen-specific extras (currently only the number
	/// constructor consumes one: an optional multiplier). `fixture` is the
	/// dispatch seam used by object-building specimens.
	fn create(&self, hint: &Hint, args: &[Value], fixture: &AutoFixture) -> FixtureResult<Value>;
}

/// Returns the default specimens in their canonical dispatch order.
///
/// Order is significant: predicates are not mutually exclusive (a named
/// constructor also satisfies the factory-function predicate), and the first
/// match wins.
pub fn default_specimens() -> Vec<Box<dyn Specimen>> {
	vec![
		Box::new(PrefixedStringSpecimen),
		Box::new(StringConstructorSpecimen),
		Box::new(NumberConstructorSpecimen),
		Box::new(SeededNumberSpecimen),
		Box::new(BooleanSpecimen),
		Box::new(ObjectConstructorSpecimen),
		Box::new(FactoryFunctionSpecimen),
		Box::new(ObjectSpecimen),
	]
}
