//! The FilterPipeline chains the query steps.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern, and the fixed
//! browse order used by the web page and the CLI.

use crate::criteria::SearchCriteria;
use crate::filters::{GenreFilter, MpaaRatingFilter, ScoreField, ScoreRangeFilter, TitleSearchFilter};
use crate::traits::Filter;
use data_loader::{Catalog, Movie};

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TitleSearchFilter::new(Some("jaw")))
///     .add_filter(GenreFilter::new(vec!["Horror".to_string()]));
///
/// let movies = pipeline.apply(catalog.all().iter().collect());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the standard browse pipeline for a set of criteria.
    ///
    /// Steps run in this order:
    /// 1. Title search
    /// 2. MPAA rating
    /// 3. Major genre
    /// 4. IMDB range
    /// 5. Rotten Tomatoes range
    ///
    /// Every step narrows independently, so the order does not change the
    /// result; searching first just keeps later steps working on less.
    pub fn from_criteria(criteria: &SearchCriteria) -> Self {
        Self::new()
            .add_filter(TitleSearchFilter::new(criteria.terms.as_deref()))
            .add_filter(MpaaRatingFilter::new(criteria.mpaa_ratings.clone()))
            .add_filter(GenreFilter::new(criteria.genres.clone()))
            .add_filter(ScoreRangeFilter::with_range(ScoreField::Imdb, criteria.imdb))
            .add_filter(ScoreRangeFilter::with_range(
                ScoreField::RottenTomatoes,
                criteria.rotten_tomatoes,
            ))
    }

    /// Add a filter to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the Filter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of steps in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the movies.
    ///
    /// Each filter consumes the previous filter's output. Per-step counts are
    /// logged at debug level.
    pub fn apply<'a>(&self, movies: Vec<&'a Movie>) -> Vec<&'a Movie> {
        let mut current = movies;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the standard browse pipeline against the whole catalog.
pub fn run_query<'a>(catalog: &'a Catalog, criteria: &SearchCriteria) -> Vec<&'a Movie> {
    FilterPipeline::from_criteria(criteria).apply(catalog.all().iter().collect())
}
