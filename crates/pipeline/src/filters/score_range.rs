//! Numeric range filters on the IMDB and Rotten Tomatoes scores.
//!
//! One predicate covers every combination of bounds: `value >= min` when a
//! minimum is set, `value <= max` when a maximum is set, both when both are.
//! Each qualifying movie is kept exactly once.

use crate::traits::Filter;
use data_loader::Movie;

/// Which score a range applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreField {
    /// IMDB rating, 0-10
    Imdb,
    /// Rotten Tomatoes rating, 0-100
    RottenTomatoes,
}

impl ScoreField {
    /// Read this score off a movie
    pub fn value(&self, movie: &Movie) -> Option<f64> {
        match self {
            ScoreField::Imdb => movie.imdb_rating,
            ScoreField::RottenTomatoes => movie.rotten_tomatoes_rating,
        }
    }
}

/// Optional inclusive bounds on a score.
///
/// Non-finite bounds (NaN, infinities) are dropped on construction, so a
/// stray `NaN` from user input behaves like a missing bound.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreRange {
    min: Option<f64>,
    max: Option<f64>,
}

impl ScoreRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min: min.filter(|v| v.is_finite()),
            max: max.filter(|v| v.is_finite()),
        }
    }

    /// A range with no bounds at all
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    /// True when neither bound is set
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Check a value against whichever bounds are present
    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

/// Narrow `movies` to those whose `field` score lies within `range`.
///
/// Movies with no score for `field` are kept: range filters only exclude
/// movies that have a score and fall outside the bounds.
pub fn filter_by_score_range<'a>(
    movies: Vec<&'a Movie>,
    field: ScoreField,
    range: ScoreRange,
) -> Vec<&'a Movie> {
    if range.is_unbounded() {
        return movies;
    }
    movies
        .into_iter()
        .filter(|movie| field.value(movie).is_none_or(|score| range.contains(score)))
        .collect()
}

/// Keeps movies whose score on one field lies within a range.
pub struct ScoreRangeFilter {
    field: ScoreField,
    range: ScoreRange,
}

impl ScoreRangeFilter {
    /// Create a new ScoreRangeFilter.
    ///
    /// # Arguments
    /// * `field` - Which score to test
    /// * `min` - Inclusive lower bound, if any
    /// * `max` - Inclusive upper bound, if any
    pub fn new(field: ScoreField, min: Option<f64>, max: Option<f64>) -> Self {
        Self::with_range(field, ScoreRange::new(min, max))
    }

    pub fn with_range(field: ScoreField, range: ScoreRange) -> Self {
        Self { field, range }
    }
}

impl Filter for ScoreRangeFilter {
    fn name(&self) -> &str {
        match self.field {
            ScoreField::Imdb => "ImdbRangeFilter",
            ScoreField::RottenTomatoes => "RottenTomatoesRangeFilter",
        }
    }

    fn apply<'a>(&self, movies: Vec<&'a Movie>) -> Vec<&'a Movie> {
        filter_by_score_range(movies, self.field, self.range)
    }
}
