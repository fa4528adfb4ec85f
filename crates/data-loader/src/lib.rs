//! # Data Loader Crate
//!
//! This crate loads the static movie dataset into memory.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, MpaaRating, Catalog)
//! - **parser**: Parse the JSON data file into Rust structs
//! - **index**: Build the `Catalog` and its derived genre list
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! // Load once at startup, then share
//! let catalog = Arc::new(Catalog::load_from_file(Path::new("movies.json"))?);
//!
//! println!("{} movies, genres: {:?}", catalog.len(), catalog.genres());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{Catalog, Movie, MpaaRating, UnknownMpaaRating};
