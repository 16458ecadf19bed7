//! REST API routes for songdepot

pub mod songs;

use actix_web::web;

/// Configure all API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    songs::configure(cfg);
}
