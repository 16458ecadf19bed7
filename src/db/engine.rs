//! Database connection setup

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Setup the SQLite database and return the connection pool
pub async fn setup_sqlite(database_path: &str) -> Result<SqlitePool> {
    // Create connection options with SQLite pragmas
    let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", database_path))?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30))
        .pragma("foreign_keys", "ON");

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .min_connections(1)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    create_tables(&pool).await?;

    Ok(pool)
}

/// Create the database tables
async fn create_tables(pool: &SqlitePool) -> Result<()> {
    // Songs table. GROUP is an SQL keyword, hence song_name/song_group.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS songs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            song_name TEXT NOT NULL,
            song_group TEXT NOT NULL,
            song_text TEXT NOT NULL DEFAULT '',
            release_date TEXT NOT NULL,
            link TEXT NOT NULL DEFAULT ''
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Migration table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS dbmigration (
            id INTEGER PRIMARY KEY,
            version INTEGER NOT NULL DEFAULT 0
        );
        INSERT OR IGNORE INTO dbmigration (id, version) VALUES (1, 0);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    create_tables(&pool).await.expect("create tables");
    pool
}
