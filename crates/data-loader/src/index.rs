//! Catalog building logic.
//!
//! This module builds the `Catalog` from parsed records:
//! - Keep the records in file order
//! - Derive the genre list used to build filter choices

use crate::error::Result;
use crate::parser;
use crate::types::{Catalog, Movie};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load the catalog from a JSON data file
    ///
    /// This is the main entry point for loading data. Any failure is fatal:
    /// there is no partially loaded catalog.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading movie dataset from {:?}", path);

        let movies = parser::parse_movies_json(path)?;
        let catalog = Self::from_movies(movies);

        info!(
            "Loaded {} movies across {} genres",
            catalog.len(),
            catalog.genres.len()
        );
        Ok(catalog)
    }

    /// Build a catalog from records that are already in memory
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        let genres = derive_genres(&movies);
        Self { movies, genres }
    }
}

/// Collect the distinct non-null major genres, sorted
fn derive_genres(movies: &[Movie]) -> Vec<String> {
    movies
        .iter()
        .filter_map(|movie| movie.major_genre.as_deref())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn with_genre(title: &str, genre: Option<&str>) -> Movie {
        Movie {
            major_genre: genre.map(str::to_string),
            ..Movie::titled(title)
        }
    }

    #[test]
    fn test_genres_are_distinct_and_skip_nulls() {
        let catalog = Catalog::from_movies(vec![
            with_genre("A", None),
            with_genre("B", Some("Horror")),
            with_genre("C", Some("Comedy")),
            with_genre("D", Some("Horror")),
        ]);

        assert_eq!(catalog.genres(), &["Comedy".to_string(), "Horror".to_string()]);
        // Records themselves are untouched
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.all()[0].title.as_deref(), Some("A"));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_movies(vec![]);
        assert!(catalog.is_empty());
        assert!(catalog.genres().is_empty());
        assert_eq!(catalog.mpaa_ratings().len(), 5);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"Title": "Jaws", "Major Genre": "Horror", "MPAA Rating": "PG"}},
                {{"Title": "Jawbreaker", "Major Genre": "Comedy", "MPAA Rating": "R"}}
            ]"#
        )
        .unwrap();

        let catalog = Catalog::load_from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.genres(), &["Comedy".to_string(), "Horror".to_string()]);
    }

    #[test]
    fn test_load_fails_on_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[{{\"Title\": \"Jaws\"}}").unwrap();

        assert!(Catalog::load_from_file(file.path()).is_err());
    }
}
