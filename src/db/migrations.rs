//! Database migrations

use anyhow::Result;
use sqlx::SqlitePool;
use tracing::info;

/// Current migration version
const CURRENT_VERSION: i32 = 2;

/// Run database migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    let row: (i32,) = sqlx::query_as("SELECT version FROM dbmigration WHERE id = 1")
        .fetch_one(pool)
        .await?;
    let current_version = row.0;

    if current_version >= CURRENT_VERSION {
        info!("Database is up to date (version {})", current_version);
        return Ok(());
    }

    info!(
        "Running migrations from version {} to {}",
        current_version, CURRENT_VERSION
    );

    for version in (current_version + 1)..=CURRENT_VERSION {
        run_migration(pool, version).await?;

        sqlx::query("UPDATE dbmigration SET version = ? WHERE id = 1")
            .bind(version)
            .execute(pool)
            .await?;

        info!("Applied migration {}", version);
    }

    Ok(())
}

async fn run_migration(pool: &SqlitePool, version: i32) -> Result<()> {
    match version {
        1 => {
            // Initial schema is created by setup_sqlite
        }
        2 => {
            // Index for the exact-match release date filter
            sqlx::query("CREATE INDEX IF NOT EXISTS idx_songs_release_date ON songs(release_date)")
                .execute(pool)
                .await?;
        }
        _ => {
            tracing::warn!("Unknown migration version: {}", version);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory_pool;

    #[tokio::test]
    async fn test_migrations_run_and_are_idempotent() {
        let pool = memory_pool().await;

        run_migrations(&pool).await.unwrap();
        let (version,): (i32,) = sqlx::query_as("SELECT version FROM dbmigration WHERE id = 1")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(version, CURRENT_VERSION);

        // Second run is a no-op
        run_migrations(&pool).await.unwrap();
    }
}
