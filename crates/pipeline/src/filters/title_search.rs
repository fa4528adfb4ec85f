//! Case-insensitive title search.
//!
//! This is the first step of every query: it narrows the full catalog down
//! to the movies whose title contains the search terms.

use crate::traits::Filter;
use data_loader::{Catalog, Movie};

/// Keeps movies whose title contains the search terms, ignoring case.
///
/// ## Algorithm
/// 1. Empty or absent terms: keep everything, in order
/// 2. Otherwise lower-case the terms once, then keep each movie that has a
///    title whose lower-cased form contains them
///
/// Movies without a title never match a non-empty search.
pub struct TitleSearchFilter {
    /// Lower-cased terms, `None` when the search is unrestricted
    needle: Option<String>,
}

impl TitleSearchFilter {
    /// Create a new TitleSearchFilter.
    ///
    /// # Arguments
    /// * `terms` - Free-text search string; `None` or `""` disables the search
    pub fn new(terms: Option<&str>) -> Self {
        let needle = terms
            .filter(|terms| !terms.is_empty())
            .map(str::to_lowercase);
        Self { needle }
    }

    fn matches(&self, movie: &Movie, needle: &str) -> bool {
        movie
            .title
            .as_deref()
            .is_some_and(|title| title.to_lowercase().contains(needle))
    }
}

impl Filter for TitleSearchFilter {
    fn name(&self) -> &str {
        "TitleSearchFilter"
    }

    fn apply<'a>(&self, movies: Vec<&'a Movie>) -> Vec<&'a Movie> {
        let Some(needle) = self.needle.as_deref() else {
            return movies;
        };
        movies
            .into_iter()
            .filter(|movie| self.matches(movie, needle))
            .collect()
    }
}

/// Search the whole catalog by title.
///
/// Returns every record, in load order, when `terms` is `None` or empty.
pub fn search<'a>(catalog: &'a Catalog, terms: Option<&str>) -> Vec<&'a Movie> {
    TitleSearchFilter::new(terms).apply(catalog.all().iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_catalog() -> Catalog {
        Catalog::from_movies(vec![
            Movie::titled("Jaws"),
            Movie::titled("Jawbreaker"),
            Movie::default(), // no title
            Movie::titled("The Shawshank Redemption"),
        ])
    }

    fn titles(movies: &[&Movie]) -> Vec<String> {
        movies
            .iter()
            .map(|m| m.title.clone().unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let catalog = create_test_catalog();

        let results = search(&catalog, Some("jaw"));
        assert_eq!(titles(&results), vec!["Jaws", "Jawbreaker"]);

        let results = search(&catalog, Some("SHAW"));
        assert_eq!(titles(&results), vec!["The Shawshank Redemption"]);
    }

    #[test]
    fn test_search_without_terms_returns_everything() {
        let catalog = create_test_catalog();

        for terms in [None, Some("")] {
            let results = search(&catalog, terms);
            assert_eq!(results.len(), 4);
            // Same records, same order, including the untitled one
            for (result, original) in results.iter().zip(catalog.all()) {
                assert!(std::ptr::eq(*result, original));
            }
        }
    }

    #[test]
    fn test_search_skips_untitled_movies() {
        let catalog = create_test_catalog();
        // "a" appears in every title; the untitled record still drops out
        let results = search(&catalog, Some("a"));
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|m| m.title.is_some()));
    }

    #[test]
    fn test_search_no_match() {
        let catalog = create_test_catalog();
        assert!(search(&catalog, Some("godfather")).is_empty());
    }

    #[test]
    fn test_whitespace_is_a_real_search() {
        let catalog = create_test_catalog();
        // A space only matches multi-word titles
        let results = search(&catalog, Some(" "));
        assert_eq!(titles(&results), vec!["The Shawshank Redemption"]);
    }
}
