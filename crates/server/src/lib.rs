//! Server crate for the movie catalog browser.
//!
//! This crate is the web front-end: it binds request parameters to the
//! query pipeline and renders the matching movies.

pub mod app;
pub mod params;
pub mod render;

pub use app::{build_router, serve, serve_catalog, AppState, ServerConfig};
pub use params::BrowseParams;
