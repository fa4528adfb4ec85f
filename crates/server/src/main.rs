//! Web server for the movie catalog.
//!
//! Loads the dataset once, then serves the browse page and JSON API.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use server::ServerConfig;

/// Movie catalog web server
#[derive(Parser)]
#[command(name = "movie-catalog-server")]
#[command(about = "Serve the movie catalog browse page", long_about = None)]
struct Args {
    /// Path to the JSON movie dataset
    #[arg(short, long, default_value = "movies.json")]
    data_file: PathBuf,

    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    addr: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    info!("Starting movie catalog server");

    server::serve(ServerConfig {
        listen_addr: args.addr,
        data_file: args.data_file,
    })
    .await
}
