//! Core domain types for the movie catalog.
//!
//! This module defines the record type loaded from `movies.json`, the fixed
//! MPAA rating enumeration, and the `Catalog` that owns the loaded dataset.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Movie Record
// =============================================================================

/// A single movie record as it appears in the dataset file.
///
/// Every field is optional: the source data has gaps everywhere, and a missing
/// key is treated the same as an explicit `null`. Only title, major genre,
/// MPAA rating and the two scores take part in querying; the rest is carried
/// along for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Some titles in the dataset are bare numbers (e.g. `1776`), so this
    /// accepts either a JSON string or number.
    #[serde(rename = "Title", default, deserialize_with = "string_or_number")]
    pub title: Option<String>,
    #[serde(rename = "US Gross", default)]
    pub us_gross: Option<f64>,
    #[serde(rename = "Worldwide Gross", default)]
    pub worldwide_gross: Option<f64>,
    #[serde(rename = "US DVD Sales", default)]
    pub us_dvd_sales: Option<f64>,
    #[serde(rename = "Production Budget", default)]
    pub production_budget: Option<f64>,
    #[serde(rename = "Release Date", default)]
    pub release_date: Option<String>,
    #[serde(rename = "MPAA Rating", default)]
    pub mpaa_rating: Option<String>,
    #[serde(rename = "Running Time min", default)]
    pub running_time_min: Option<f64>,
    #[serde(rename = "Distributor", default)]
    pub distributor: Option<String>,
    #[serde(rename = "Source", default)]
    pub source: Option<String>,
    #[serde(rename = "Major Genre", default)]
    pub major_genre: Option<String>,
    #[serde(rename = "Creative Type", default)]
    pub creative_type: Option<String>,
    #[serde(rename = "Director", default)]
    pub director: Option<String>,
    /// Rotten Tomatoes score, 0-100
    #[serde(rename = "Rotten Tomatoes Rating", default)]
    pub rotten_tomatoes_rating: Option<f64>,
    /// IMDB score, 0-10
    #[serde(rename = "IMDB Rating", default)]
    pub imdb_rating: Option<f64>,
    #[serde(rename = "IMDB Votes", default)]
    pub imdb_votes: Option<f64>,
}

impl Movie {
    /// Create a record with only a title set. Handy for tests and fixtures.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

/// Accepts `"Jaws"`, `1776` or `null` for a title field.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTitle {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<RawTitle>::deserialize(deserializer)?.map(|raw| match raw {
        RawTitle::Text(text) => text,
        RawTitle::Number(number) => number.to_string(),
    }))
}

// =============================================================================
// MPAA Ratings
// =============================================================================

/// The fixed set of MPAA ratings offered as filter choices.
///
/// This list does not depend on the dataset. Records may carry other strings
/// such as "Not Rated"; those load fine and are kept as plain strings on
/// [`Movie::mpaa_rating`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MpaaRating {
    #[serde(rename = "G")]
    G,
    #[serde(rename = "PG")]
    Pg,
    #[serde(rename = "PG-13")]
    Pg13,
    #[serde(rename = "R")]
    R,
    #[serde(rename = "NC-17")]
    Nc17,
}

impl MpaaRating {
    /// All ratings, in display order
    pub const ALL: [MpaaRating; 5] = [
        MpaaRating::G,
        MpaaRating::Pg,
        MpaaRating::Pg13,
        MpaaRating::R,
        MpaaRating::Nc17,
    ];

    /// The rating code as it appears in the data file
    pub fn as_str(&self) -> &'static str {
        match self {
            MpaaRating::G => "G",
            MpaaRating::Pg => "PG",
            MpaaRating::Pg13 => "PG-13",
            MpaaRating::R => "R",
            MpaaRating::Nc17 => "NC-17",
        }
    }
}

impl fmt::Display for MpaaRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the five MPAA codes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown MPAA rating: {0} (expected one of G, PG, PG-13, R, NC-17)")]
pub struct UnknownMpaaRating(pub String);

impl FromStr for MpaaRating {
    type Err = UnknownMpaaRating;

    /// Codes are matched exactly, the way they are stored in the dataset
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        MpaaRating::ALL
            .into_iter()
            .find(|rating| rating.as_str() == s)
            .ok_or_else(|| UnknownMpaaRating(s.to_string()))
    }
}

// =============================================================================
// Catalog - The In-Memory Dataset
// =============================================================================

/// The loaded dataset plus values derived from it at load time.
///
/// A `Catalog` is built once at startup and never mutated afterwards. Share it
/// between request handlers with `Arc<Catalog>`; all query operations only
/// borrow from it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Records in file order
    pub(crate) movies: Vec<Movie>,
    /// Distinct non-null major genres, sorted
    pub(crate) genres: Vec<String>,
}

impl Catalog {
    /// All records, in the order they were loaded
    pub fn all(&self) -> &[Movie] {
        &self.movies
    }

    /// Distinct major genres present in the dataset, sorted for stable display
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// The MPAA ratings offered as filter choices
    pub fn mpaa_ratings(&self) -> &'static [MpaaRating] {
        &MpaaRating::ALL
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mpaa_round_trip_through_str() {
        for rating in MpaaRating::ALL {
            assert_eq!(rating.as_str().parse::<MpaaRating>().unwrap(), rating);
        }
    }

    #[test]
    fn test_mpaa_rejects_unknown_codes() {
        assert!("Not Rated".parse::<MpaaRating>().is_err());
        // Case matters: the data file stores upper-case codes
        assert!("pg-13".parse::<MpaaRating>().is_err());
    }

    #[test]
    fn test_mpaa_display_order() {
        let codes: Vec<&str> = MpaaRating::ALL.iter().map(|r| r.as_str()).collect();
        assert_eq!(codes, vec!["G", "PG", "PG-13", "R", "NC-17"]);
    }

    #[test]
    fn test_movie_titled() {
        let movie = Movie::titled("Jaws");
        assert_eq!(movie.title.as_deref(), Some("Jaws"));
        assert!(movie.major_genre.is_none());
        assert!(movie.imdb_rating.is_none());
    }
}
