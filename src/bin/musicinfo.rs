//! Mock music info provider for local development and manual testing.
//!
//! Serves `GET /info` with a fixed payload in the shape the real provider
//! uses, so songdepot can be exercised without external connectivity.

use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use serde::Deserialize;
use tracing::info;

/// musicinfo - mock music info provider
#[derive(Parser, Debug)]
#[command(name = "musicinfo")]
#[command(about = "Mock music info provider for songdepot")]
struct Args {
    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8081)]
    port: u16,
}

#[derive(Debug, Deserialize)]
struct InfoQuery {
    group: String,
    song: String,
}

#[get("/info")]
async fn song_info(query: web::Query<InfoQuery>) -> impl Responder {
    info!("info requested for {} - {}", query.group, query.song);

    HttpResponse::Ok().json(serde_json::json!({
        "releaseDate": "16.07.2006",
        "text": "Ooh baby, don't you know I suffer?\nOoh baby, can you hear me moan?\nYou caught me under false pretenses\nHow long before you let me go?\n\nOoh\nYou set my soul alight\nOoh\nYou set my soul alight",
        "link": "https://www.youtube.com/watch?v=Xsp3_a-PMTw"
    }))
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt().with_target(false).compact().init();

    let args = Args::parse();
    let addr = format!("{}:{}", args.host, args.port);

    info!("Mock music info provider listening on http://{}", addr);

    HttpServer::new(|| App::new().service(song_info))
        .bind(addr)?
        .run()
        .await
}
