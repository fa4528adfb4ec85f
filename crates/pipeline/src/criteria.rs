//! Query criteria collected from a request.

use crate::filters::ScoreRange;

/// Everything a caller can ask the pipeline for.
///
/// Every part is optional. `SearchCriteria::default()` matches the whole
/// catalog.
///
/// ## Usage
/// ```ignore
/// let criteria = SearchCriteria::new()
///     .with_terms("jaw")
///     .with_genre("Horror")
///     .with_imdb(Some(6.0), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    /// Free-text title search
    pub terms: Option<String>,
    /// Allowed MPAA rating codes
    pub mpaa_ratings: Vec<String>,
    /// Allowed major genres
    pub genres: Vec<String>,
    pub imdb: ScoreRange,
    pub rotten_tomatoes: ScoreRange,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title search; an empty string clears it
    pub fn with_terms(mut self, terms: impl Into<String>) -> Self {
        let terms = terms.into();
        self.terms = (!terms.is_empty()).then_some(terms);
        self
    }

    pub fn with_mpaa_rating(mut self, rating: impl Into<String>) -> Self {
        self.mpaa_ratings.push(rating.into());
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genres.push(genre.into());
        self
    }

    pub fn with_imdb(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.imdb = ScoreRange::new(min, max);
        self
    }

    pub fn with_rotten_tomatoes(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.rotten_tomatoes = ScoreRange::new(min, max);
        self
    }

    /// True when no step of the pipeline would narrow anything
    pub fn is_empty(&self) -> bool {
        self.terms.as_deref().is_none_or(str::is_empty)
            && self.mpaa_ratings.is_empty()
            && self.genres.is_empty()
            && self.imdb.is_unbounded()
            && self.rotten_tomatoes.is_unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(SearchCriteria::new().is_empty());
        assert!(SearchCriteria::new().with_terms("").is_empty());
        assert!(SearchCriteria::new().with_imdb(None, None).is_empty());
    }

    #[test]
    fn test_builder_sets_fields() {
        let criteria = SearchCriteria::new()
            .with_terms("jaw")
            .with_mpaa_rating("PG")
            .with_mpaa_rating("R")
            .with_genre("Horror")
            .with_imdb(Some(6.0), None)
            .with_rotten_tomatoes(None, Some(90.0));

        assert!(!criteria.is_empty());
        assert_eq!(criteria.terms.as_deref(), Some("jaw"));
        assert_eq!(criteria.mpaa_ratings, vec!["PG", "R"]);
        assert_eq!(criteria.genres, vec!["Horror"]);
        assert_eq!(criteria.imdb.min(), Some(6.0));
        assert_eq!(criteria.rotten_tomatoes.max(), Some(90.0));
    }
}
