//! Ordered specimen dispatch.
//!
//! The registry holds specimens in a fixed priority order and resolves a
//! hint to the first one whose predicate matches. Ordering is load-bearing:
//! a named constructor also satisfies the factory-function predicate, so the
//! more specific specimen must be consulted first.
//!
//! Each fixture owns its registry; there is no process-wide specimen state.

use tracing::trace;

use crate::error::{FixtureError, FixtureResult};
use crate::hint::Hint;
use crate::specimens::{Specimen, default_specimens};

/// An ordered, immutable collection of specimens.
pub struct SpecimenRegistry {
	specimens: Vec<Box<dyn Specimen>>,
}

impl SpecimenRegistry {
	/// Creates a registry from an explicit specimen list.
	///
	/// The list order is the dispatch order.
	pub fn new(specimens: Vec<Box<dyn Specimen>>) -> Self {
		Self { specimens }
	}

	/// Creates a registry with the default specimens in canonical order.
	pub fn with_default_specimens() -> Self {
		Self::new(default_specimens())
	}

	/// Resolves a hint to the first specimen that handles it.
	///
	/// # Errors
	///
	/// Returns [`FixtureError::UnsupportedSpecimen`] carrying the rendered
	/// hint when no specimen matches.
	pub fn resolve(&self, hint: &Hint) -> FixtureResult<&dyn Specimen> {
		match self.specimens.iter().find(|specimen| specimen.handles(hint)) {
			Some(specimen) => Ok(specimen.as_ref()),
			None => {
				trace!(hint = %hint, "no specimen matched hint");
				Err(FixtureError::UnsupportedSpecimen(hint.to_string()))
			}
		}
	}

	/// Returns the number of registered specimens.
	pub fn len(&self) -> usize {
		self.specimens.len()
	}

	/// Returns true if no specimens are registered.
	pub fn is_empty(&self) -> bool {
		self.specimens.is_empty()
	}
}

impl Default for SpecimenRegistry {
	fn default() -> Self {
		Self::with_default_specimens()
	}
}

impl std::fmt::Debug for SpecimenRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SpecimenRegistry")
			.field("specimens", &self.specimens.len())
			.finish()
	}
}
