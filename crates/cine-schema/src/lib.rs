//! # cine-schema — Movie Record Validation
//!
//! Runtime validation of arbitrary JSON values against the movie record
//! rule set defined in `cine-core`.
//!
//! ## Entry Points
//!
//! - [`validate_movie`] — every field required; returns the normalized
//!   [`cine_core::MovieRecord`] with `rate` defaulted when absent.
//! - [`validate_partial_movie`] — every field optional; returns a
//!   [`cine_core::MoviePatch`] with only the supplied fields.
//!
//! Both entry points share one parameterized rule table, so the full and
//! partial modes cannot drift apart. All violations across all fields
//! are collected into a single error value; validation never stops at
//! the first bad field and never panics, whatever the input's shape.
//!
//! ```
//! use serde_json::json;
//!
//! let input = json!({
//!     "title": "Drive",
//!     "year": 2011,
//!     "director": "Nicolas Winding Refn",
//!     "duration": 100,
//!     "poster": "https://example.com/p.jpg",
//!     "genre": ["Action", "Crime", "Drama"]
//! });
//! let record = cine_schema::validate_movie(&input).unwrap();
//! assert_eq!(record.rate, 5.0);
//! ```

pub mod validate;

pub use validate::{validate_movie, validate_partial_movie};
