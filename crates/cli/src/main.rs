use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{Catalog, Movie, MpaaRating};
use pipeline::{run_query, SearchCriteria};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Movie Catalog - search and filter a static movie dataset
#[derive(Parser)]
#[command(name = "movie-catalog")]
#[command(about = "Search and filter a movie catalog by title, rating and genre", long_about = None)]
struct Cli {
    /// Path to the JSON movie dataset
    #[arg(short, long, default_value = "movies.json")]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search and filter movies
    Search {
        /// Title to search for (case-insensitive substring match)
        #[arg(long)]
        title: Option<String>,

        /// Allowed MPAA rating (repeatable)
        #[arg(long)]
        mpaa: Vec<MpaaRating>,

        /// Allowed major genre (repeatable)
        #[arg(long)]
        genre: Vec<String>,

        /// Minimum IMDB rating
        #[arg(long)]
        imdb_min: Option<f64>,

        /// Maximum IMDB rating
        #[arg(long)]
        imdb_max: Option<f64>,

        /// Minimum Rotten Tomatoes rating
        #[arg(long)]
        rt_min: Option<f64>,

        /// Maximum Rotten Tomatoes rating
        #[arg(long)]
        rt_max: Option<f64>,

        /// Show at most this many results
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List the genres present in the dataset
    Genres,

    /// List the MPAA ratings offered as filters
    Ratings,

    /// Run the web server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load the catalog once; every command reads from it
    let start = Instant::now();
    let catalog = Arc::new(
        Catalog::load_from_file(&cli.data_file)
            .with_context(|| format!("Failed to load movie dataset from {}", cli.data_file.display()))?,
    );
    println!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Search {
            title,
            mpaa,
            genre,
            imdb_min,
            imdb_max,
            rt_min,
            rt_max,
            limit,
        } => {
            let criteria = SearchCriteria {
                terms: title.filter(|t| !t.is_empty()),
                mpaa_ratings: mpaa.iter().map(|r| r.as_str().to_string()).collect(),
                genres: genre,
                ..SearchCriteria::default()
            }
            .with_imdb(imdb_min, imdb_max)
            .with_rotten_tomatoes(rt_min, rt_max);
            info!("Running search with {:?}", criteria);
            handle_search(&catalog, &criteria, limit)
        }
        Commands::Genres => handle_genres(&catalog),
        Commands::Ratings => handle_ratings(&catalog),
        Commands::Serve { addr } => {
            info!("Starting web server on {}", addr);
            server::serve_catalog(catalog, addr).await?
        }
    }

    Ok(())
}

/// Handle the 'search' command
fn handle_search(catalog: &Catalog, criteria: &SearchCriteria, limit: Option<usize>) {
    let start_time = Instant::now();
    let results = run_query(catalog, criteria);
    info!(
        "Search matched {} of {} movies in {:.2?}",
        results.len(),
        catalog.len(),
        start_time.elapsed()
    );

    println!("{}", format!("Found {} of {} movies:", results.len(), catalog.len()).bold().blue());
    for movie in results.iter().take(limit.unwrap_or(usize::MAX)) {
        print_movie(movie);
    }
    if let Some(limit) = limit.filter(|&limit| limit < results.len()) {
        println!("... {} more not shown", results.len() - limit);
    }
}

/// Handle the 'genres' command
fn handle_genres(catalog: &Catalog) {
    println!("{}", "Genres:".bold().blue());
    for genre in catalog.genres() {
        println!("{}{}", "• ".green(), genre);
    }
}

/// Handle the 'ratings' command
fn handle_ratings(catalog: &Catalog) {
    println!("{}", "MPAA Ratings:".bold().blue());
    for rating in catalog.mpaa_ratings() {
        println!("{}{}", "• ".green(), rating);
    }
}

/// Print one movie on a single line
fn print_movie(movie: &Movie) {
    let score = |s: Option<f64>| s.map(|s| s.to_string()).unwrap_or_else(|| "n/a".to_string());
    println!(
        "{} [{}] {} - IMDB {} / RT {}",
        movie.title.as_deref().unwrap_or("(untitled)").bold(),
        movie.mpaa_rating.as_deref().unwrap_or("n/a"),
        movie.major_genre.as_deref().unwrap_or("n/a").cyan(),
        score(movie.imdb_rating),
        score(movie.rotten_tomatoes_rating),
    );
}
