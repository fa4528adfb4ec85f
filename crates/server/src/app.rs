//! # Catalog Web App
//!
//! This module wires the catalog and the query pipeline to HTTP:
//! 1. Bind query parameters to `SearchCriteria`
//! 2. Run the pipeline against the shared catalog
//! 3. Render the result as an HTML page or JSON
//!
//! The catalog is loaded once before the listener is bound and then only
//! read, so handlers share it through an `Arc` without locking.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use data_loader::{Catalog, Movie, MpaaRating};
use pipeline::run_query;

use crate::params::BrowseParams;
use crate::render::render_page;

/// Server settings, filled in from the command line
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address
    pub listen_addr: SocketAddr,
    /// Path to the JSON dataset
    pub data_file: PathBuf,
}

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Bind parameters and run the browse pipeline
    fn browse(&self, pairs: Vec<(String, String)>) -> (BrowseParams, Vec<&Movie>) {
        let start_time = Instant::now();
        let params = BrowseParams::from_pairs(pairs);
        let movies = run_query(&self.catalog, &params.to_criteria());
        debug!(
            "Browse query matched {} of {} movies in {:.2?}",
            movies.len(),
            self.catalog.len(),
            start_time.elapsed()
        );
        (params, movies)
    }
}

/// JSON body for `/api/movies`
#[derive(Debug, Serialize)]
struct MoviesResponse<'a> {
    count: usize,
    movies: Vec<&'a Movie>,
}

/// Build the router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/api/movies", get(movies_api))
        .route("/api/genres", get(genres_api))
        .route("/api/ratings", get(ratings_api))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Load the dataset and serve until interrupted
///
/// A missing or malformed data file stops startup here.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let catalog = Catalog::load_from_file(&config.data_file)
        .with_context(|| format!("Failed to load movie dataset from {}", config.data_file.display()))?;
    serve_catalog(Arc::new(catalog), config.listen_addr).await
}

/// Serve an already loaded catalog until interrupted
pub async fn serve_catalog(catalog: Arc<Catalog>, listen_addr: SocketAddr) -> Result<()> {
    let app = build_router(AppState::new(catalog));

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", listen_addr))?;
    info!("Serving movie catalog on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown requested");
    }
}

/// Browse page handler
async fn index_page(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Html<String> {
    let (params, movies) = state.browse(pairs);
    Html(render_page(state.catalog(), &params, &movies))
}

/// Same query as the page, as JSON
async fn movies_api(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let (_, movies) = state.browse(pairs);
    Json(MoviesResponse {
        count: movies.len(),
        movies,
    })
    .into_response()
}

async fn genres_api(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog().genres().to_vec())
}

async fn ratings_api() -> Json<Vec<MpaaRating>> {
    Json(MpaaRating::ALL.to_vec())
}

/// Health check handler
async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}
