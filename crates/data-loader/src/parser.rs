//! Parser for the movie data file.
//!
//! The dataset is a single JSON array of movie records:
//!
//! ```text
//! [
//!   { "Title": "Jaws", "Major Genre": "Horror", "MPAA Rating": "PG",
//!     "IMDB Rating": 8.0, "Rotten Tomatoes Rating": 97, ... },
//!   ...
//! ]
//! ```
//!
//! Parsing is all-or-nothing. One malformed record fails the whole file.

use crate::error::{DataLoadError, Result};
use crate::types::Movie;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Parse a JSON data file into movie records
///
/// Records come back in file order.
pub fn parse_movies_json(path: &Path) -> Result<Vec<Movie>> {
    let json = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    parse_movies_str(&json, &path.display().to_string())
}

/// Parse movie records from an in-memory JSON string
///
/// `origin` names the source in error messages (usually the file path).
pub fn parse_movies_str(json: &str, origin: &str) -> Result<Vec<Movie>> {
    serde_json::from_str(json).map_err(|e| DataLoadError::ParseError {
        file: origin.to_string(),
        line: e.line(),
        column: e.column(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {
            "Title": "Jaws",
            "US Gross": 260000000,
            "Worldwide Gross": 470700000,
            "US DVD Sales": null,
            "Production Budget": 12000000,
            "Release Date": "Jun 20 1975",
            "MPAA Rating": "PG",
            "Running Time min": 124,
            "Distributor": "Universal",
            "Source": "Based on Book/Short Story",
            "Major Genre": "Horror",
            "Creative Type": "Contemporary Fiction",
            "Director": "Steven Spielberg",
            "Rotten Tomatoes Rating": 97,
            "IMDB Rating": 8.0,
            "IMDB Votes": 138000
        },
        {
            "Title": 1776,
            "MPAA Rating": "Not Rated",
            "IMDB Rating": null
        },
        {}
    ]"#;

    #[test]
    fn test_parse_full_record() {
        let movies = parse_movies_str(SAMPLE, "sample").unwrap();
        assert_eq!(movies.len(), 3);

        let jaws = &movies[0];
        assert_eq!(jaws.title.as_deref(), Some("Jaws"));
        assert_eq!(jaws.major_genre.as_deref(), Some("Horror"));
        assert_eq!(jaws.mpaa_rating.as_deref(), Some("PG"));
        assert_eq!(jaws.imdb_rating, Some(8.0));
        assert_eq!(jaws.rotten_tomatoes_rating, Some(97.0));
        assert_eq!(jaws.director.as_deref(), Some("Steven Spielberg"));
        assert_eq!(jaws.us_dvd_sales, None);
    }

    #[test]
    fn test_numeric_title_becomes_string() {
        let movies = parse_movies_str(SAMPLE, "sample").unwrap();
        assert_eq!(movies[1].title.as_deref(), Some("1776"));
        assert_eq!(movies[1].mpaa_rating.as_deref(), Some("Not Rated"));
        assert_eq!(movies[1].imdb_rating, None);
    }

    #[test]
    fn test_missing_keys_are_none() {
        let movies = parse_movies_str(SAMPLE, "sample").unwrap();
        assert_eq!(movies[2], Movie::default());
    }

    #[test]
    fn test_malformed_json_reports_position() {
        let err = parse_movies_str("[\n  {\"Title\": }\n]", "broken.json").unwrap_err();
        match err {
            DataLoadError::ParseError { file, line, .. } => {
                assert_eq!(file, "broken.json");
                assert_eq!(line, 2);
            }
            other => panic!("expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        // An object instead of an array
        let err = parse_movies_str(r#"{"Title": "Jaws"}"#, "object.json").unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { .. }));

        // A numeric field holding text
        let err = parse_movies_str(r#"[{"IMDB Rating": "high"}]"#, "bad.json").unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { .. }));
    }

    #[test]
    fn test_parse_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let movies = parse_movies_json(file.path()).unwrap();
        assert_eq!(movies.len(), 3);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_movies_json(&dir.path().join("movies.json")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }
}
