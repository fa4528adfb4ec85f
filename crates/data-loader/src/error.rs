//! Error types for the data-loader crate.
//!
//! Loading is all-or-nothing: any of these errors means the catalog could not
//! be built and the process should not start serving queries.

use thiserror::Error;

/// Errors that can occur while loading the movie dataset
///
/// The `#[derive(Error)]` macro from thiserror implements `std::error::Error`
/// and `Display` from the `#[error(...)]` attributes.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The data file is not a valid JSON array of movie records
    ///
    /// Line and column point at the offending position, as reported by serde_json
    #[error("Parse error at line {line}, column {column} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        column: usize,
        reason: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message_has_position() {
        let err = DataLoadError::ParseError {
            file: "movies.json".to_string(),
            line: 3,
            column: 14,
            reason: "expected value".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Parse error at line 3, column 14 in movies.json: expected value"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DataLoadError = io.into();
        assert!(matches!(err, DataLoadError::IoError(_)));
    }
}
