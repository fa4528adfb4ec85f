//! Set-membership filters on MPAA rating and major genre.
//!
//! Both filters share one contract: an empty allow-list lets everything
//! through, otherwise a movie is kept only when its field is present and
//! appears in the list.

use crate::traits::Filter;
use data_loader::Movie;

/// Keep movies whose `field` value is one of `allowed`.
fn keep_members<'a>(
    movies: Vec<&'a Movie>,
    allowed: &[String],
    field: impl Fn(&Movie) -> Option<&str>,
) -> Vec<&'a Movie> {
    if allowed.is_empty() {
        return movies;
    }
    movies
        .into_iter()
        .filter(|movie| field(*movie).is_some_and(|value| allowed.iter().any(|a| a == value)))
        .collect()
}

/// Narrow `movies` to the given MPAA ratings.
///
/// Matching is exact (`"PG-13"`, not `"pg13"`). Unrated movies are dropped
/// unless `ratings` is empty.
pub fn filter_by_mpaa_rating<'a>(movies: Vec<&'a Movie>, ratings: &[String]) -> Vec<&'a Movie> {
    keep_members(movies, ratings, |movie| movie.mpaa_rating.as_deref())
}

/// Narrow `movies` to the given major genres.
pub fn filter_by_genre<'a>(movies: Vec<&'a Movie>, genres: &[String]) -> Vec<&'a Movie> {
    keep_members(movies, genres, |movie| movie.major_genre.as_deref())
}

/// Keeps only movies carrying one of the selected MPAA ratings.
pub struct MpaaRatingFilter {
    ratings: Vec<String>,
}

impl MpaaRatingFilter {
    /// Create a new MpaaRatingFilter.
    ///
    /// # Arguments
    /// * `ratings` - Allowed rating codes; empty means no restriction
    pub fn new(ratings: Vec<String>) -> Self {
        Self { ratings }
    }
}

impl Filter for MpaaRatingFilter {
    fn name(&self) -> &str {
        "MpaaRatingFilter"
    }

    fn apply<'a>(&self, movies: Vec<&'a Movie>) -> Vec<&'a Movie> {
        filter_by_mpaa_rating(movies, &self.ratings)
    }
}

/// Keeps only movies whose major genre is one of the selected genres.
pub struct GenreFilter {
    genres: Vec<String>,
}

impl GenreFilter {
    /// Create a new GenreFilter.
    ///
    /// # Arguments
    /// * `genres` - Allowed major genres; empty means no restriction
    pub fn new(genres: Vec<String>) -> Self {
        Self { genres }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply<'a>(&self, movies: Vec<&'a Movie>) -> Vec<&'a Movie> {
        filter_by_genre(movies, &self.genres)
    }
}
