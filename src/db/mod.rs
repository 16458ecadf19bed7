//! Database module for songdepot
//!
//! All persistence goes through SQLx with SQLite.

mod engine;
mod migrations;
pub mod tables;

pub use engine::setup_sqlite;
pub use migrations::run_migrations;
pub use tables::SongTable;

#[cfg(test)]
pub use engine::memory_pool;
