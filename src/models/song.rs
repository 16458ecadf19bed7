//! Song model and request/filter types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A stored song
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    /// Database ID
    pub id: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
    /// Song title
    #[serde(rename = "song")]
    pub name: String,
    /// Performing group
    pub group: String,
    /// Full lyrics, verses separated by blank lines
    pub text: String,
    /// Release date
    pub release_date: NaiveDate,
    /// Reference link (e.g. a media URL)
    pub link: String,
}

/// Optional listing criteria; absent fields add no constraint.
///
/// `name`, `group` and `text` are substring matches, `release_date` is exact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SongFilter {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
}

impl SongFilter {
    /// True when no criteria are set
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.group.is_none()
            && self.text.is_none()
            && self.release_date.is_none()
    }
}

/// Partial update for a song. `None` leaves a field untouched; `Some`
/// overwrites it, including `Some("")` for string fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SongUpdate {
    #[serde(default, rename = "song")]
    pub name: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub link: Option<String>,
}
