//! Error types for the fixture engine.
//!
//! This module defines the error types used throughout the autofixture crate.

use thiserror::Error;

/// Errors that can occur while generating fixture data.
#[derive(Debug, Error)]
pub enum FixtureError {
	/// No registered specimen recognized the hint.
	#[error("unsupported specimen: {0}")]
	UnsupportedSpecimen(String),

	/// A named constructor failed to produce an instance.
	#[error("unable to create instance of {name}")]
	ConstructionFailed {
		/// Name of the constructor that failed.
		name: String,
		/// The underlying failure, when one was reported.
		#[source]
		source: Option<Box<FixtureError>>,
	},

	/// A factory function failed or returned no sample.
	#[error("unable to create instance using factory function")]
	FactoryFailed {
		/// The underlying failure; absent when the factory returned null.
		#[source]
		source: Option<Box<FixtureError>>,
	},

	/// A user-supplied callable reported a failure of its own.
	#[error("callable error: {0}")]
	Callable(String),
}

/// Result type alias for fixture operations.
pub type FixtureResult<T> = Result<T, FixtureError>;
