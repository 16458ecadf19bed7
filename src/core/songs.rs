//! Song service - orchestrates validation, metadata enrichment, storage and
//! domain error translation

use chrono::Utc;
use tracing::debug;

use crate::core::lyrics;
use crate::db::SongTable;
use crate::errors::SongError;
use crate::models::{Song, SongFilter, SongUpdate};
use crate::plugins::MusicInfoClient;

/// Song management service.
///
/// Dependencies are injected at construction; the service itself holds no
/// ambient state.
pub struct SongService {
    songs: SongTable,
    music_info: MusicInfoClient,
}

impl SongService {
    pub fn new(songs: SongTable, music_info: MusicInfoClient) -> Self {
        Self { songs, music_info }
    }

    /// Add a new song, enriched with details from the music info provider.
    ///
    /// If the provider lookup fails nothing is persisted.
    pub async fn add(&self, name: &str, group: &str) -> Result<i64, SongError> {
        let name = name.trim();
        let group = group.trim();

        if name.is_empty() {
            return Err(SongError::Validation("song name must not be empty".into()));
        }
        if group.is_empty() {
            return Err(SongError::Validation("group must not be empty".into()));
        }

        let detail = self.music_info.fetch(group, name).await?;

        let now = Utc::now();
        let song = Song {
            id: 0,
            created_at: now,
            updated_at: now,
            name: name.to_string(),
            group: group.to_string(),
            text: detail.text,
            release_date: detail.release_date,
            link: detail.link,
        };

        let id = self.songs.create(&song).await?;
        debug!("added song {} ({} - {})", id, song.group, song.name);

        Ok(id)
    }

    /// List a page of songs matching the filter; `NoSongs` passes through
    /// unchanged so the boundary can answer with 204.
    pub async fn list(&self, filter: &SongFilter, page: u32) -> Result<Vec<Song>, SongError> {
        debug!("list request: page {}, filtered: {}", page, !filter.is_empty());

        self.songs.list_filtered(filter, page).await
    }

    /// Get one verse of a song's text by 0-based index
    pub async fn verse(&self, id: i64, verse: usize) -> Result<String, SongError> {
        let text = self.songs.get_song_text(id).await?;

        lyrics::verse_at(&text, verse)
            .map(str::to_string)
            .ok_or(SongError::VerseNotFound)
    }

    /// Apply a partial update to an existing song
    pub async fn modify(&self, id: i64, patch: &SongUpdate) -> Result<(), SongError> {
        // Nonexistent ids never reach the write path
        self.songs.get_by_id(id).await?;

        let affected = self.songs.update(id, patch).await?;
        if affected == 0 {
            // deleted between the existence check and the write
            return Err(SongError::SongNotFound);
        }

        Ok(())
    }

    /// Remove a song by id
    pub async fn remove(&self, id: i64) -> Result<(), SongError> {
        self.songs.get_by_id(id).await?;

        let affected = self.songs.delete(id).await?;
        if affected == 0 {
            return Err(SongError::SongNotFound);
        }

        Ok(())
    }
}
