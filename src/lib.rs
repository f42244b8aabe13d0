//! Specimen-based test-data generation.
//!
//! This crate eliminates hand-written boilerplate when constructing objects
//! for unit tests: given a type hint, it synthesizes a plausible random
//! instance of that shape, recursively populating object properties with
//! further generated values.
//!
//! # Quick Start
//!
//! ## Creating single values
//!
//! ```
//! use autofixture::{AutoFixture, Hint};
//!
//! let fixture = AutoFixture::new();
//!
//! // A string hint is a prefix; the rest is a random identifier.
//! let email = fixture.create("email-")?;
//! assert!(email.as_str().is_some_and(|s| s.starts_with("email-")));
//!
//! // Constructor markers produce fresh primitives.
//! let id = fixture.create(Hint::String)?;      // random identifier
//! let ratio = fixture.create(Hint::Number)?;   // uniform in [0, 1)
//! let flag = fixture.create(Hint::Boolean)?;   // fair coin flip
//!
//! // A numeric hint seeds the range: uniform in [0, 123).
//! let scaled = fixture.create(123)?;
//! # let _ = (id, ratio, flag, scaled);
//! # Ok::<(), autofixture::FixtureError>(())
//! ```
//!
//! ## Mirroring object shapes
//!
//! ```
//! use autofixture::AutoFixture;
//! use serde_json::json;
//!
//! let fixture = AutoFixture::new();
//! let order = fixture
//!     .build()
//!     .like(json!({
//!         "reference": "",
//!         "total": 100,
//!         "shipping": {"street": "", "express": false}
//!     }))
//!     .with("total", 42.0)
//!     .without("shipping.street")
//!     .create()?;
//!
//! // String fields are prefixed by their own key name.
//! assert!(order.get("reference").and_then(|v| v.as_str()).is_some_and(|s| s.starts_with("reference")));
//! assert_eq!(order.get("total").and_then(|v| v.as_f64()), Some(42.0));
//! # Ok::<(), autofixture::FixtureError>(())
//! ```
//!
//! ## Generating from Rust types
//!
//! ```
//! use autofixture::{AutoFixture, Callable};
//! use serde::Serialize;
//!
//! #[derive(Default, Serialize)]
//! struct Customer {
//!     name: String,
//!     discount: f64,
//!     active: bool,
//! }
//!
//! let fixture = AutoFixture::new();
//! let customer = fixture.create(Callable::of::<Customer>())?;
//! assert_eq!(
//!     customer.as_object().and_then(|o| o.type_name()),
//!     Some("Customer")
//! );
//! # Ok::<(), autofixture::FixtureError>(())
//! ```
//!
//! # Architecture
//!
//! Dispatch is polymorphic over a closed, ordered specimen list:
//!
//! - [`Hint`] - the discriminated type hint passed to `create`
//! - [`Specimen`](specimens::Specimen) - recognizes hints and produces values
//! - [`SpecimenRegistry`] - ordered dispatch, first match wins
//! - [`ObjectBuilder`] - fluent likeness + `with`/`without` overrides
//! - [`AutoFixture`] - the facade tying dispatch and building together
//!
//! The facade and the builder are mutually recursive: object-shaped
//! specimens delegate to a builder, and the builder dispatches each property
//! back through the facade. Likeness graphs are finite by construction
//! ([`Value`] trees cannot be cyclic).
//!
//! Output is intentionally randomized per call; there is no seeded
//! reproducibility.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod builder;
pub mod config;
pub mod error;
pub mod fixture;
pub mod guid;
pub mod hint;
pub mod path;
pub mod prelude;
pub mod registry;
pub mod specimens;
pub mod value;

// Re-export commonly used types at crate root
pub use builder::{Likeness, ObjectBuilder};
pub use config::FixtureConfig;
pub use error::{FixtureError, FixtureResult};
pub use fixture::AutoFixture;
pub use hint::{Callable, Hint};
pub use registry::SpecimenRegistry;
pub use specimens::Specimen;
pub use value::{ObjectValue, Value};
