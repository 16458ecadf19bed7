//! Music info provider data

use chrono::NaiveDate;

/// Song details fetched from the music info provider, with the wire-format
/// release date already parsed.
#[derive(Debug, Clone)]
pub struct SongDetail {
    pub release_date: NaiveDate,
    pub text: String,
    pub link: String,
}
