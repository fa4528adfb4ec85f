//! Core traits for the query pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! independent narrowing steps to be applied to a set of movies.

use data_loader::Movie;

/// Core trait for narrowing a collection of movies.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` lets one pipeline be shared across request handlers
/// - Filters take ownership of the Vec of borrowed records and return a
///   narrowed Vec; the records themselves are never cloned or mutated
/// - Implementations keep the relative order of their input and never
///   repeat a record
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of movies.
    ///
    /// Filters are total: an empty or absent criterion means "no
    /// restriction" and the input comes back unchanged.
    fn apply<'a>(&self, movies: Vec<&'a Movie>) -> Vec<&'a Movie>;
}
