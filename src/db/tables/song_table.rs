//! Songs table operations

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};

use crate::errors::SongError;
use crate::models::{Song, SongFilter, SongUpdate};

/// Database row for the songs table
#[derive(Debug, FromRow)]
struct SongRow {
    id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    song_name: String,
    song_group: String,
    song_text: String,
    release_date: NaiveDate,
    link: String,
}

impl SongRow {
    fn into_song(self) -> Song {
        Song {
            id: self.id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            name: self.song_name,
            group: self.song_group,
            text: self.song_text,
            release_date: self.release_date,
            link: self.link,
        }
    }
}

/// Songs table operations
#[derive(Clone)]
pub struct SongTable {
    pool: SqlitePool,
    page_size: u32,
}

impl SongTable {
    pub fn new(pool: SqlitePool, page_size: u32) -> Self {
        Self { pool, page_size }
    }

    /// Insert a song and return its new id
    pub async fn create(&self, song: &Song) -> Result<i64, SongError> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO songs (
                created_at, updated_at, song_name, song_group,
                song_text, release_date, link
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(now)
        .bind(now)
        .bind(&song.name)
        .bind(&song.group)
        .bind(&song.text)
        .bind(song.release_date)
        .bind(&song.link)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Get a song by id
    pub async fn get_by_id(&self, id: i64) -> Result<Song, SongError> {
        let row: SongRow = sqlx::query_as("SELECT * FROM songs WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => SongError::SongNotFound,
                other => SongError::Storage(other),
            })?;

        Ok(row.into_song())
    }

    /// Fetch a page of songs matching the filter, newest id first.
    ///
    /// An empty result set is reported as `NoSongs` so callers can
    /// distinguish it from a successful non-empty page.
    pub async fn list_filtered(
        &self,
        filter: &SongFilter,
        page: u32,
    ) -> Result<Vec<Song>, SongError> {
        let mut conditions: Vec<&str> = Vec::new();

        if filter.name.is_some() {
            conditions.push("song_name LIKE ?");
        }
        if filter.group.is_some() {
            conditions.push("song_group LIKE ?");
        }
        if filter.text.is_some() {
            conditions.push("song_text LIKE ?");
        }
        if filter.release_date.is_some() {
            conditions.push("release_date = ?");
        }

        let mut sql = String::from("SELECT * FROM songs");
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY id DESC LIMIT ? OFFSET ?");

        let offset = i64::from(page) * i64::from(self.page_size);

        let mut query = sqlx::query_as::<_, SongRow>(&sql);
        if let Some(name) = &filter.name {
            query = query.bind(format!("%{}%", name));
        }
        if let Some(group) = &filter.group {
            query = query.bind(format!("%{}%", group));
        }
        if let Some(text) = &filter.text {
            query = query.bind(format!("%{}%", text));
        }
        if let Some(date) = filter.release_date {
            query = query.bind(date);
        }
        query = query.bind(i64::from(self.page_size)).bind(offset);

        let rows = query.fetch_all(&self.pool).await?;

        if rows.is_empty() {
            return Err(SongError::NoSongs);
        }

        Ok(rows.into_iter().map(|r| r.into_song()).collect())
    }

    /// Fetch only the lyrics text of a song
    pub async fn get_song_text(&self, id: i64) -> Result<String, SongError> {
        let text: String = sqlx::query_scalar("SELECT song_text FROM songs WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => SongError::SongNotFound,
                other => SongError::Storage(other),
            })?;

        Ok(text)
    }

    /// Apply the set fields of a partial update; `updated_at` is always
    /// refreshed. Returns the number of affected rows so callers can detect
    /// a concurrently deleted song.
    pub async fn update(&self, id: i64, patch: &SongUpdate) -> Result<u64, SongError> {
        let mut sets: Vec<&str> = vec!["updated_at = ?"];

        if patch.name.is_some() {
            sets.push("song_name = ?");
        }
        if patch.group.is_some() {
            sets.push("song_group = ?");
        }
        if patch.text.is_some() {
            sets.push("song_text = ?");
        }
        if patch.release_date.is_some() {
            sets.push("release_date = ?");
        }
        if patch.link.is_some() {
            sets.push("link = ?");
        }

        let sql = format!("UPDATE songs SET {} WHERE id = ?", sets.join(", "));

        let mut query = sqlx::query(&sql).bind(Utc::now());
        if let Some(name) = &patch.name {
            query = query.bind(name);
        }
        if let Some(group) = &patch.group {
            query = query.bind(group);
        }
        if let Some(text) = &patch.text {
            query = query.bind(text);
        }
        if let Some(date) = patch.release_date {
            query = query.bind(date);
        }
        if let Some(link) = &patch.link {
            query = query.bind(link);
        }

        let result = query.bind(id).execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    /// Remove a song, returning the number of affected rows
    pub async fn delete(&self, id: i64) -> Result<u64, SongError> {
        let result = sqlx::query("DELETE FROM songs WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
