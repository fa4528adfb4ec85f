//! Query pipeline for searching and filtering the movie catalog.
//!
//! This crate provides:
//! - Filter trait and implementations for each query step
//! - FilterPipeline for composing filters
//! - SearchCriteria describing one browse request
//!
//! ## Architecture
//! A query runs in stages, each a pure narrowing of the previous stage's
//! output:
//! 1. Title search over the full catalog
//! 2. MPAA rating and genre membership
//! 3. IMDB and Rotten Tomatoes score ranges
//!
//! Records are borrowed from the `Catalog` throughout; nothing is cloned and
//! the catalog is never mutated.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{run_query, SearchCriteria};
//!
//! let criteria = SearchCriteria::new()
//!     .with_terms("jaw")
//!     .with_genre("Horror")
//!     .with_imdb(Some(6.0), None);
//!
//! let movies = run_query(&catalog, &criteria);
//! ```

pub mod criteria;
pub mod filter_pipeline;
pub mod filters;
pub mod traits;

// Re-export main types
pub use criteria::SearchCriteria;
pub use filter_pipeline::{run_query, FilterPipeline};
pub use filters::{
    filter_by_genre, filter_by_mpaa_rating, filter_by_score_range, search, ScoreField, ScoreRange,
};
pub use traits::Filter;
