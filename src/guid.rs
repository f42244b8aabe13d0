//! Random identifier generation.
//!
//! String-producing specimens suffix their output with a fresh identifier in
//! the canonical 8-4-4-4-12 hyphenated v4 form. Collisions across thousands
//! of calls are practically impossible, which is what makes generated string
//! values usable as unique test data.

use uuid::Uuid;

/// Produces a fresh random identifier string.
///
/// # Example
///
/// ```
/// let id = autofixture::guid::generate();
/// assert_eq!(id.len(), 36);
/// ```
pub fn generate() -> String {
	Uuid::new_v4().to_string()
}
