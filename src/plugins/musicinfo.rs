//! Music info client - fetches release details for a song from the
//! configured external provider

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

use crate::errors::SongError;
use crate::models::SongDetail;

/// Date format used by the music info provider (e.g. "16.07.2006")
const RELEASE_DATE_FORMAT: &str = "%d.%m.%Y";

/// Wire format of the provider response
#[derive(Debug, Deserialize)]
struct SongDetailResponse {
    #[serde(rename = "releaseDate")]
    release_date: String,
    text: String,
    link: String,
}

/// Client for the external music info endpoint.
///
/// One synchronous GET per lookup; no retries, no fallback. Any failure
/// (transport, non-success status, undecodable body, unparseable date)
/// surfaces as `SongError::SongDetail`.
pub struct MusicInfoClient {
    client: Client,
    endpoint: String,
}

impl MusicInfoClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Fetch song details for a group/song pair
    pub async fn fetch(&self, group: &str, song: &str) -> Result<SongDetail, SongError> {
        let url = format!("{}/info", self.endpoint);

        let resp = self
            .client
            .get(&url)
            .query(&[("group", group), ("song", song)])
            .send()
            .await
            .map_err(|e| {
                warn!("music info request failed: {}", e);
                SongError::SongDetail
            })?;

        if !resp.status().is_success() {
            warn!("music info endpoint returned status {}", resp.status());
            return Err(SongError::SongDetail);
        }

        let raw: SongDetailResponse = resp.json().await.map_err(|e| {
            warn!("music info response could not be decoded: {}", e);
            SongError::SongDetail
        })?;

        parse_detail(raw)
    }
}

fn parse_detail(raw: SongDetailResponse) -> Result<SongDetail, SongError> {
    let release_date =
        NaiveDate::parse_from_str(&raw.release_date, RELEASE_DATE_FORMAT).map_err(|e| {
            warn!(
                "music info returned unparseable release date '{}': {}",
                raw.release_date, e
            );
            SongError::SongDetail
        })?;

    Ok(SongDetail {
        release_date,
        text: raw.text,
        link: raw.link,
    })
}
