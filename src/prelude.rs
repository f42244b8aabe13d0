//! Convenience re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use autofixture::prelude::*;
//!
//! let fixture = AutoFixture::new();
//! let value = fixture.create("user-")?;
//! assert!(value.as_str().is_some_and(|s| s.starts_with("user-")));
//! # Ok::<(), FixtureError>(())
//! ```

// Facade and builder
pub use crate::builder::{Likeness, ObjectBuilder};
pub use crate::fixture::AutoFixture;

// Hints and values
pub use crate::hint::{Callable, Hint};
pub use crate::value::{ObjectValue, Value};

// Dispatch
pub use crate::registry::SpecimenRegistry;
pub use crate::specimens::Specimen;

// Configuration and paths
pub use crate::config::FixtureConfig;
pub use crate::path::PropertyPath;

// Error types
pub use crate::error::{FixtureError, FixtureResult};
