//! # cine-core — Foundational Types for Movie Record Validation
//!
//! This crate defines the domain types shared by the validation stack.
//! It depends on nothing internal; `cine-schema` builds its rule set on
//! top of these types.
//!
//! ## Key Design Principles
//!
//! 1. **Single `Genre` enum.** One definition, nine variants, exhaustive
//!    `match` everywhere. The wire names (including the hyphenated
//!    `Sci-Fi`) live in exactly one place.
//!
//! 2. **Two record shapes, one field set.** [`MovieRecord`] is the fully
//!    validated, normalized entity. [`MoviePatch`] carries the same
//!    fields as `Option`s for partial validation and updates. A patch
//!    applies onto a record field by field, so the two shapes cannot
//!    drift apart silently.
//!
//! 3. **Violations are values.** A failed validation is reported as
//!    [`ValidationErrors`], an ordered collection of [`FieldError`]s,
//!    each carrying the offending path, a human-readable message, and a
//!    [`ViolationCode`]. Nothing in this crate panics on bad input.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`; the record and
//!   violation types implement `Serialize`/`Deserialize`.

pub mod error;
pub mod genre;
pub mod movie;

// Re-export primary types for ergonomic imports.
pub use error::{FieldError, ValidationErrors, ViolationCode};
pub use genre::{Genre, UnknownGenre, GENRE_COUNT};
pub use movie::{
    MoviePatch, MovieRecord, RATE_DEFAULT, RATE_MAX, RATE_MIN, YEAR_MAX, YEAR_MIN,
};
