//! Runtime configuration
//!
//! All settings are carried in a plain `Config` value and handed to
//! constructors explicitly; nothing reads ambient global state.

/// Default number of songs per listing page
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Runtime configuration for the service
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Path to the SQLite database file
    pub database_path: String,
    /// Base address of the music info provider
    pub music_info_address: String,
    /// Songs per listing page
    pub page_size: u32,
    /// Enable debug logging
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_path: "songdepot.db".to_string(),
            music_info_address: "http://localhost:8081".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            debug: false,
        }
    }
}
