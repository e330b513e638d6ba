//! # Movie Record Shapes
//!
//! Defines [`MovieRecord`], the fully validated movie entity, and
//! [`MoviePatch`], the all-optional shape used for partial validation
//! and updates. Both carry the same field set; a patch applies onto a
//! record field by field.
//!
//! The numeric constraint bounds live here as constants so the rule set
//! and its tests share one definition.

use serde::{Deserialize, Serialize};

use crate::genre::Genre;

/// Earliest accepted release year.
pub const YEAR_MIN: i64 = 1900;
/// Latest accepted release year.
pub const YEAR_MAX: i64 = 2024;
/// Lowest accepted rating.
pub const RATE_MIN: f64 = 0.0;
/// Highest accepted rating.
pub const RATE_MAX: f64 = 10.0;
/// Rating assigned when the input omits `rate`.
pub const RATE_DEFAULT: f64 = 5.0;

/// A validated, normalized movie record.
///
/// Instances are produced by the validator, never deserialized from
/// untrusted input directly: the validator checks every constraint and
/// fills in the `rate` default before constructing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Movie title.
    pub title: String,
    /// Release year, within `YEAR_MIN..=YEAR_MAX`.
    pub year: i64,
    /// Director name.
    pub director: String,
    /// Runtime in minutes, strictly positive.
    pub duration: i64,
    /// Poster image URL.
    pub poster: String,
    /// Non-empty list of genres.
    pub genre: Vec<Genre>,
    /// Rating, within `RATE_MIN..=RATE_MAX`. Defaults to `RATE_DEFAULT`.
    pub rate: f64,
}

/// A partial movie record: every field optional, same constraints.
///
/// Used for update payloads, where the caller supplies only the fields
/// to change. Absent fields are `None` and were not checked; present
/// fields passed the same per-field constraints as [`MovieRecord`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoviePatch {
    /// Movie title, if supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Release year, if supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    /// Director name, if supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    /// Runtime in minutes, if supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    /// Poster image URL, if supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    /// Genre list, if supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<Vec<Genre>>,
    /// Rating, if supplied. A partial validation does NOT default this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
}

impl MoviePatch {
    /// Returns true if no field is present.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.year.is_none()
            && self.director.is_none()
            && self.duration.is_none()
            && self.poster.is_none()
            && self.genre.is_none()
            && self.rate.is_none()
    }

    /// Merge this patch into an existing record.
    ///
    /// Present fields overwrite the record's values; absent fields leave
    /// them untouched.
    pub fn apply(self, record: &mut MovieRecord) {
        if let Some(title) = self.title {
            record.title = title;
        }
        if let Some(year) = self.year {
            record.year = year;
        }
        if let Some(director) = self.director {
            record.director = director;
        }
        if let Some(duration) = self.duration {
            record.duration = duration;
        }
        if let Some(poster) = self.poster {
            record.poster = poster;
        }
        if let Some(genre) = self.genre {
            record.genre = genre;
        }
        if let Some(rate) = self.rate {
            record.rate = rate;
        }
    }
}
