//! songdepot - a self-hosted depository for songs, their lyrics and release info

mod api;
mod config;
mod core;
mod db;
mod errors;
mod models;
mod plugins;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::config::Config;
use crate::core::SongService;
use crate::db::SongTable;
use crate::plugins::MusicInfoClient;

/// songdepot - song depository service
#[derive(Parser, Debug)]
#[command(name = "songdepot")]
#[command(version = "0.1.0")]
#[command(about = "A self-hosted depository for songs, their lyrics and release info")]
struct Args {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Path to the SQLite database file
    #[arg(long, env = "SONGDEPOT_DB", default_value = "songdepot.db")]
    database: String,

    /// Base address of the music info provider
    #[arg(long, env = "MUSIC_INFO_ADDRESS", default_value = "http://localhost:8081")]
    music_info: String,

    /// Songs per listing page
    #[arg(long, default_value_t = config::DEFAULT_PAGE_SIZE)]
    page_size: u32,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,
}

impl Args {
    fn into_config(self) -> Config {
        Config {
            host: self.host,
            port: self.port,
            database_path: self.database,
            music_info_address: self.music_info,
            page_size: self.page_size,
            debug: self.debug,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Args::parse().into_config();

    // initialize logging, keeping sqlx statement logging out of normal runs
    let log_level = if config.debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::new(format!("{},sqlx=warn", log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    info!("songdepot v0.1.0 starting...");

    // Setup database
    let pool = db::setup_sqlite(&config.database_path).await?;
    db::run_migrations(&pool).await?;
    info!("Database ready at {}", config.database_path);

    // Wire the service with its explicit dependencies
    let songs = SongTable::new(pool.clone(), config.page_size);
    let music_info = MusicInfoClient::new(config.music_info_address.clone());
    let service = web::Data::new(SongService::new(songs, music_info));

    info!("Music info provider: {}", config.music_info_address);

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    info!("Server listening on http://{}", addr);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(service.clone())
            .configure(api::configure)
    })
    .bind(addr)?
    .run()
    .await?;

    Ok(())
}
