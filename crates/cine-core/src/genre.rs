//! # Genre Taxonomy — Single Source of Truth
//!
//! Defines the `Genre` enum with the nine recognized movie genres.
//! This is the ONE definition used across the stack. Every `match` on
//! `Genre` must be exhaustive — adding a genre forces every consumer to
//! handle it at compile time.
//!
//! The wire names are the capitalized English genre names; `Sci-Fi` is
//! the only one that differs from its Rust identifier and carries an
//! explicit serde rename.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// All recognized movie genres.
///
/// Serialized by wire name (`"Action"`, `"Sci-Fi"`, ...). A genre list
/// on a movie record is a sequence over this enum; strings outside the
/// set are rejected at validation time, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    /// Action.
    Action,
    /// Adventure.
    Adventure,
    /// Crime.
    Crime,
    /// Comedy.
    Comedy,
    /// Drama.
    Drama,
    /// Fantasy.
    Fantasy,
    /// Horror.
    Horror,
    /// Thriller.
    Thriller,
    /// Science fiction. Wire name is the hyphenated `Sci-Fi`.
    #[serde(rename = "Sci-Fi")]
    SciFi,
}

/// Total number of genres. Used for compile-time assertions.
pub const GENRE_COUNT: usize = 9;

/// A string that does not name a recognized genre.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{0}' is not a valid genre; expected one of: Action, Adventure, Crime, Comedy, Drama, Fantasy, Horror, Thriller, Sci-Fi")]
pub struct UnknownGenre(pub String);

impl Genre {
    /// Returns all genres in canonical order.
    pub fn all() -> &'static [Genre] {
        &[
            Self::Action,
            Self::Adventure,
            Self::Crime,
            Self::Comedy,
            Self::Drama,
            Self::Fantasy,
            Self::Horror,
            Self::Thriller,
            Self::SciFi,
        ]
    }

    /// Returns the wire name of this genre.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Adventure => "Adventure",
            Self::Crime => "Crime",
            Self::Comedy => "Comedy",
            Self::Drama => "Drama",
            Self::Fantasy => "Fantasy",
            Self::Horror => "Horror",
            Self::Thriller => "Thriller",
            Self::SciFi => "Sci-Fi",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = UnknownGenre;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Action" => Ok(Self::Action),
            "Adventure" => Ok(Self::Adventure),
            "Crime" => Ok(Self::Crime),
            "Comedy" => Ok(Self::Comedy),
            "Drama" => Ok(Self::Drama),
            "Fantasy" => Ok(Self::Fantasy),
            "Horror" => Ok(Self::Horror),
            "Thriller" => Ok(Self::Thriller),
            "Sci-Fi" => Ok(Self::SciFi),
            other => Err(UnknownGenre(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_genre() {
        assert_eq!(Genre::all().len(), GENRE_COUNT);
    }

    #[test]
    fn test_wire_name_round_trip() {
        for genre in Genre::all() {
            let parsed: Genre = genre.as_str().parse().unwrap();
            assert_eq!(parsed, *genre);
        }
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&Genre::SciFi).unwrap();
        assert_eq!(json, "\"Sci-Fi\"");
        let back: Genre = serde_json::from_str("\"Sci-Fi\"").unwrap();
        assert_eq!(back, Genre::SciFi);
    }

    #[test]
    fn test_unknown_genre_rejected() {
        let err = "Musical".parse::<Genre>().unwrap_err();
        assert_eq!(err, UnknownGenre("Musical".to_string()));
        assert!(err.to_string().contains("Musical"));
        assert!(err.to_string().contains("Sci-Fi"));
    }

    #[test]
    fn test_display_matches_wire_name() {
        assert_eq!(Genre::SciFi.to_string(), "Sci-Fi");
        assert_eq!(Genre::Drama.to_string(), "Drama");
    }
}
