//! # Movie Record Validation
//!
//! Validates untrusted JSON values against the movie record rule set.
//!
//! ## Rule-Set Consistency Invariant
//!
//! The full and partial entry points run the SAME per-field checkers
//! through one shared rule table; the only difference is the presence
//! flag, which decides whether an absent field is a violation. A constraint can therefore never hold in one mode and not
//! the other.
//!
//! ## Failure Semantics
//!
//! Violations across all fields are collected and returned together in
//! one call — never fail-fast on the first error. Malformed input of
//! any shape (including `null` or a non-object top level) produces a
//! failed result, not a panic. Unknown keys on the input are neither
//! reported nor retained in the normalized output.

use serde_json::{Map, Value};
use url::Url;

use cine_core::{
    FieldError, Genre, MoviePatch, MovieRecord, ValidationErrors, ViolationCode, RATE_DEFAULT,
    RATE_MAX, RATE_MIN, YEAR_MAX, YEAR_MIN,
};

/// Presence requirement for a field in one validation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Presence {
    /// An absent field is a `MissingField` violation.
    Required,
    /// An absent field is skipped without a violation.
    Optional,
}

/// Validate an arbitrary JSON value as a complete movie record.
///
/// Every field except `rate` is required. On success, returns the
/// normalized [`MovieRecord`] with `rate` defaulted to `RATE_DEFAULT`
/// when the input omitted it. On failure, returns every violation
/// found, in field-table order.
///
/// # Errors
///
/// Returns [`ValidationErrors`] listing all constraint violations. A
/// non-object input (null, array, string, ...) yields a single
/// root-path `WrongType` violation.
pub fn validate_movie(input: &Value) -> Result<MovieRecord, ValidationErrors> {
    let obj = as_object(input)?;
    let mut errors = Vec::new();
    let fields = check_fields(obj, Presence::Required, &mut errors);
    match finalize(fields) {
        Some(record) if errors.is_empty() => Ok(record),
        // A required field is None exactly when a violation was pushed
        // for it, so this branch always carries at least one error.
        _ => Err(ValidationErrors::from(errors)),
    }
}

/// Validate an arbitrary JSON value as a partial movie record.
///
/// Identical per-field constraints, but every field is optional: absent
/// fields produce no violation and come back as `None`. An absent
/// `rate` is NOT defaulted here — a patch only carries what the caller
/// supplied.
///
/// # Errors
///
/// Returns [`ValidationErrors`] listing the violations of every
/// present-but-invalid field.
pub fn validate_partial_movie(input: &Value) -> Result<MoviePatch, ValidationErrors> {
    let obj = as_object(input)?;
    let mut errors = Vec::new();
    let patch = check_fields(obj, Presence::Optional, &mut errors);
    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(ValidationErrors::from(errors))
    }
}

/// The rule table: one entry per declared field.
///
/// `presence` applies to the required fields; `rate` is optional in
/// both modes. Fields are checked independently — no field's validity
/// depends on another's.
fn check_fields(
    obj: &Map<String, Value>,
    presence: Presence,
    errors: &mut Vec<FieldError>,
) -> MoviePatch {
    MoviePatch {
        title: check_field(obj, "title", presence, errors, |v, e| {
            string_value("title", "Movie title must be a string", v, e)
        }),
        year: check_field(obj, "year", presence, errors, check_year),
        director: check_field(obj, "director", presence, errors, |v, e| {
            string_value("director", "director must be a string", v, e)
        }),
        duration: check_field(obj, "duration", presence, errors, check_duration),
        poster: check_field(obj, "poster", presence, errors, check_poster),
        genre: check_field(obj, "genre", presence, errors, check_genre),
        rate: check_field(obj, "rate", Presence::Optional, errors, check_rate),
    }
}

/// Assemble a full record from checked fields, defaulting `rate`.
///
/// Returns `None` if any required field is absent or failed its check.
fn finalize(fields: MoviePatch) -> Option<MovieRecord> {
    Some(MovieRecord {
        title: fields.title?,
        year: fields.year?,
        director: fields.director?,
        duration: fields.duration?,
        poster: fields.poster?,
        genre: fields.genre?,
        rate: fields.rate.unwrap_or(RATE_DEFAULT),
    })
}

/// Require the top-level input to be a JSON object.
fn as_object(input: &Value) -> Result<&Map<String, Value>, ValidationErrors> {
    input.as_object().ok_or_else(|| {
        ValidationErrors::from(vec![FieldError::new(
            "",
            format!("expected an object, got {}", json_type_name(input)),
            ViolationCode::WrongType,
        )])
    })
}

/// Look up one field and run its checker, honoring the presence flag.
fn check_field<T>(
    obj: &Map<String, Value>,
    field: &'static str,
    presence: Presence,
    errors: &mut Vec<FieldError>,
    check: impl FnOnce(&Value, &mut Vec<FieldError>) -> Option<T>,
) -> Option<T> {
    match obj.get(field) {
        Some(value) => check(value, errors),
        None => {
            if presence == Presence::Required {
                errors.push(missing(field));
            }
            None
        }
    }
}

/// Violation for an absent required field.
///
/// `title` and `genre` keep their historical bespoke messages.
fn missing(field: &'static str) -> FieldError {
    let message = match field {
        "title" => "Movie title is required.".to_string(),
        "genre" => "Movie genre is required.".to_string(),
        _ => format!("{field} is required"),
    };
    FieldError::new(field, message, ViolationCode::MissingField)
}

fn string_value(
    field: &'static str,
    type_message: &str,
    value: &Value,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value.as_str() {
        Some(s) => Some(s.to_string()),
        None => {
            errors.push(FieldError::new(field, type_message, ViolationCode::WrongType));
            None
        }
    }
}

fn check_year(value: &Value, errors: &mut Vec<FieldError>) -> Option<i64> {
    match value.as_i64() {
        Some(year) if (YEAR_MIN..=YEAR_MAX).contains(&year) => Some(year),
        Some(year) => {
            errors.push(FieldError::new(
                "year",
                format!("year must be between {YEAR_MIN} and {YEAR_MAX}, got {year}"),
                ViolationCode::OutOfRange,
            ));
            None
        }
        None => {
            errors.push(FieldError::new(
                "year",
                "year must be an integer",
                ViolationCode::WrongType,
            ));
            None
        }
    }
}

fn check_duration(value: &Value, errors: &mut Vec<FieldError>) -> Option<i64> {
    match value.as_i64() {
        Some(duration) if duration > 0 => Some(duration),
        Some(duration) => {
            errors.push(FieldError::new(
                "duration",
                format!("duration must be a positive integer, got {duration}"),
                ViolationCode::OutOfRange,
            ));
            None
        }
        None => {
            errors.push(FieldError::new(
                "duration",
                "duration must be an integer",
                ViolationCode::WrongType,
            ));
            None
        }
    }
}

fn check_poster(value: &Value, errors: &mut Vec<FieldError>) -> Option<String> {
    let Some(s) = value.as_str() else {
        errors.push(FieldError::new(
            "poster",
            "poster must be a string",
            ViolationCode::WrongType,
        ));
        return None;
    };
    if Url::parse(s).is_err() {
        errors.push(FieldError::new(
            "poster",
            "Poster must be a valid URL",
            ViolationCode::InvalidUrl,
        ));
        return None;
    }
    Some(s.to_string())
}

fn check_genre(value: &Value, errors: &mut Vec<FieldError>) -> Option<Vec<Genre>> {
    let Some(items) = value.as_array() else {
        errors.push(FieldError::new(
            "genre",
            "Movie genre must be an array of enum Genre",
            ViolationCode::NotAnArray,
        ));
        return None;
    };
    if items.is_empty() {
        errors.push(FieldError::new(
            "genre",
            "Movie genre must contain at least one genre",
            ViolationCode::EmptyArray,
        ));
        return None;
    }
    let mut genres = Vec::with_capacity(items.len());
    let mut valid = true;
    for (i, item) in items.iter().enumerate() {
        match item.as_str() {
            Some(s) => match s.parse::<Genre>() {
                Ok(genre) => genres.push(genre),
                Err(unknown) => {
                    errors.push(FieldError::new(
                        format!("genre[{i}]"),
                        unknown.to_string(),
                        ViolationCode::InvalidEnumValue,
                    ));
                    valid = false;
                }
            },
            None => {
                errors.push(FieldError::new(
                    format!("genre[{i}]"),
                    format!("expected a genre name, got {}", json_type_name(item)),
                    ViolationCode::InvalidEnumValue,
                ));
                valid = false;
            }
        }
    }
    if valid {
        Some(genres)
    } else {
        None
    }
}

fn check_rate(value: &Value, errors: &mut Vec<FieldError>) -> Option<f64> {
    match value.as_f64() {
        Some(rate) if (RATE_MIN..=RATE_MAX).contains(&rate) => Some(rate),
        Some(rate) => {
            errors.push(FieldError::new(
                "rate",
                format!("rate must be between {RATE_MIN} and {RATE_MAX}, got {rate}"),
                ViolationCode::OutOfRange,
            ));
            None
        }
        None => {
            errors.push(FieldError::new(
                "rate",
                "rate must be a number",
                ViolationCode::WrongType,
            ));
            None
        }
    }
}

/// JSON type name for violation messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn genre_name() -> impl Strategy<Value = &'static str> {
        prop::sample::select(
            Genre::all()
                .iter()
                .map(|g| g.as_str())
                .collect::<Vec<_>>(),
        )
    }

    /// Strategy for generating inputs that satisfy every constraint.
    fn valid_movie_input() -> impl Strategy<Value = Value> {
        (
            "[a-zA-Z0-9_ ]{0,50}",
            YEAR_MIN..=YEAR_MAX,
            "[a-zA-Z ]{1,30}",
            1i64..=600,
            prop::collection::vec(genre_name(), 1..5),
            prop::option::of(RATE_MIN..=RATE_MAX),
        )
            .prop_map(|(title, year, director, duration, genres, rate)| {
                let mut input = json!({
                    "title": title,
                    "year": year,
                    "director": director,
                    "duration": duration,
                    "poster": "https://example.com/poster.jpg",
                    "genre": genres
                });
                if let Some(rate) = rate {
                    input["rate"] = json!(rate);
                }
                input
            })
    }

    /// Strategy for arbitrary JSON values of any shape.
    fn arbitrary_json() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| json!(n)),
            (-1e9f64..1e9).prop_map(|f| json!(f)),
            "[a-zA-Z0-9_ -]{0,30}".prop_map(Value::String),
        ];
        leaf.prop_recursive(4, 64, 8, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,10}", inner, 0..8).prop_map(|m| {
                    let map: Map<String, Value> = m.into_iter().collect();
                    Value::Object(map)
                }),
            ]
        })
    }

    proptest! {
        /// Every structurally valid input validates Ok, with the rate
        /// defaulted when absent.
        #[test]
        fn valid_inputs_validate(input in valid_movie_input()) {
            let result = validate_movie(&input);
            prop_assert!(result.is_ok(), "rejected valid input: {:?}", result.err());
            let record = result.unwrap();
            prop_assert!((RATE_MIN..=RATE_MAX).contains(&record.rate));
            if input.get("rate").is_none() {
                prop_assert_eq!(record.rate, RATE_DEFAULT);
            }
        }

        /// Anything the full validator accepts, the partial one accepts.
        #[test]
        fn full_acceptance_implies_partial_acceptance(input in valid_movie_input()) {
            prop_assert!(validate_movie(&input).is_ok());
            prop_assert!(validate_partial_movie(&input).is_ok());
        }

        /// Validation of arbitrary JSON never panics, and a rejection
        /// always carries at least one violation.
        #[test]
        fn never_panics_on_arbitrary_json(input in arbitrary_json()) {
            if let Err(errors) = validate_movie(&input) {
                prop_assert!(!errors.is_empty());
            }
            if let Err(errors) = validate_partial_movie(&input) {
                prop_assert!(!errors.is_empty());
            }
        }

        /// An empty patch never changes a record.
        #[test]
        fn partial_of_empty_subset_is_identity(input in valid_movie_input()) {
            let mut record = validate_movie(&input).unwrap();
            let before = record.clone();
            let patch = validate_partial_movie(&json!({})).unwrap();
            patch.apply(&mut record);
            prop_assert_eq!(record, before);
        }
    }
}
