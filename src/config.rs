//! Fixture configuration.

use rand::Rng;

/// Tunable policies for an [`AutoFixture`](crate::AutoFixture).
///
/// Currently this is the `create_many` count range, drawn uniformly when no
/// explicit count is given. The default range is `[3, 10]`, both endpoints
/// inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
	many_min: usize,
	many_max: usize,
}

impl FixtureConfig {
	/// Creates the default configuration.
	pub fn new() -> Self {
		Self {
			many_min: 3,
			many_max: 10,
		}
	}

	/// Sets the inclusive count range used by `create_many`.
	///
	/// # Example
	///
	/// ```
	/// use autofixture::FixtureConfig;
	///
	/// let config = FixtureConfig::new().with_many_range(5, 5);
	/// assert_eq!(config.sample_many_count(), 5);
	/// ```
	#[must_use]
	pub fn with_many_range(mut self, min: usize, max: usize) -> Self {
		debug_assert!(min <= max, "count range must be ordered");
		self.many_min = min;
		self.many_max = max;
		self
	}

	/// Returns the inclusive lower bound of the count range.
	pub fn many_min(&self) -> usize {
		self.many_min
	}

	/// Returns the inclusive upper bound of the count range.
	pub fn many_max(&self) -> usize {
		self.many_max
	}

	/// Draws a count uniformly from the configured range.
	pub fn sample_many_count(&self) -> usize {
		rand::thread_rng().gen_range(self.many_min..=self.many_max)
	}
}

impl Default for FixtureConfig {
	fn default() -> Self {
		Self::new()
	}
}
