//! Filter implementations for the query pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline, plus the free-function form
//! of each step for callers that only need one.

pub mod membership;
pub mod score_range;
pub mod title_search;

// Re-export for convenience
pub use membership::{filter_by_genre, filter_by_mpaa_rating, GenreFilter, MpaaRatingFilter};
pub use score_range::{filter_by_score_range, ScoreField, ScoreRange, ScoreRangeFilter};
pub use title_search::{search, TitleSearchFilter};
