//! # Violation Types — Structured Validation Errors
//!
//! A failed validation must be reported with structured information:
//! the offending field path, a human-readable message, and a machine-
//! readable violation code. All violations from one call are collected
//! into a single [`ValidationErrors`] value — validation never stops at
//! the first bad field and never panics on malformed input.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single constraint violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    /// A required field is absent from the input.
    MissingField,
    /// A field is present but has the wrong JSON type.
    WrongType,
    /// A numeric field is outside its permitted range.
    OutOfRange,
    /// A value is not a member of the fixed enum set.
    InvalidEnumValue,
    /// A string field does not parse as a URL.
    InvalidUrl,
    /// A field that must be an array is something else.
    NotAnArray,
    /// An array field that must be non-empty is empty.
    EmptyArray,
}

/// A single validation violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name in the input, with an index suffix for array elements
    /// (`genre[2]`). Empty for violations at the input's root.
    pub path: String,
    /// Human-readable description of the violation.
    pub message: String,
    /// Machine-readable violation classification.
    pub code: ViolationCode,
}

impl FieldError {
    /// Build a violation for the given path.
    pub fn new(path: impl Into<String>, message: impl Into<String>, code: ViolationCode) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            code,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.path, self.message)
        }
    }
}

/// Ordered collection of all violations from one validation call.
///
/// This is the error half of a validation result. It is an ordinary
/// value: the caller inspects it, reports it, or discards it — the
/// validator itself never treats a violation as fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns a slice of all violations, in collection order.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Iterate over the violations.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<FieldError> {
        self.errors
    }

    /// Returns true if any violation references the given path, either
    /// exactly or as an indexed element of it.
    pub fn mentions(&self, path: &str) -> bool {
        self.errors
            .iter()
            .any(|e| e.path == path || e.path.starts_with(&format!("{path}[")))
    }
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_display_format() {
        let e = FieldError::new(
            "year",
            "year must be between 1900 and 2024",
            ViolationCode::OutOfRange,
        );
        let display = e.to_string();
        assert!(display.contains("year"));
        assert!(display.contains("between 1900 and 2024"));
    }

    #[test]
    fn test_field_error_display_root() {
        let e = FieldError::new("", "expected an object, got null", ViolationCode::WrongType);
        assert!(e.to_string().contains("(root)"));
    }

    #[test]
    fn test_validation_errors_display_one_per_line() {
        let errors = ValidationErrors::from(vec![
            FieldError::new("title", "Movie title is required.", ViolationCode::MissingField),
            FieldError::new("rate", "rate must be a number", ViolationCode::WrongType),
        ]);
        let display = errors.to_string();
        let lines: Vec<&str> = display.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("title"));
        assert!(lines[1].contains("rate"));
    }

    #[test]
    fn test_mentions_indexed_path() {
        let errors = ValidationErrors::from(vec![FieldError::new(
            "genre[2]",
            "'Musical' is not a valid genre",
            ViolationCode::InvalidEnumValue,
        )]);
        assert!(errors.mentions("genre"));
        assert!(!errors.mentions("gen"));
        assert!(!errors.mentions("title"));
    }

    #[test]
    fn test_violation_code_serde_names() {
        let json = serde_json::to_string(&ViolationCode::InvalidEnumValue).unwrap();
        assert_eq!(json, "\"invalid_enum_value\"");
    }
}
