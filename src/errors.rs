//! Domain errors shared across the service and storage layers

use thiserror::Error;

/// Errors produced by song operations
#[derive(Debug, Error)]
pub enum SongError {
    /// No row matched the requested song id
    #[error("song with provided ID not found")]
    SongNotFound,

    /// The requested verse index is past the end of the song text
    #[error("requested verse doesn't exist in this song")]
    VerseNotFound,

    /// A filtered listing matched nothing (mapped to 204 at the boundary)
    #[error("no songs found")]
    NoSongs,

    /// The music info endpoint could not supply song details
    #[error("failed to retrieve song detail")]
    SongDetail,

    /// Malformed or missing request data
    #[error("validation error: {0}")]
    Validation(String),

    /// Any other persistence failure
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl SongError {
    /// Whether this error is a not-found condition (song or verse)
    pub fn is_not_found(&self) -> bool {
        matches!(self, SongError::SongNotFound | SongError::VerseNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(SongError::SongNotFound.is_not_found());
        assert!(SongError::VerseNotFound.is_not_found());
        assert!(!SongError::NoSongs.is_not_found());
        assert!(!SongError::SongDetail.is_not_found());
    }

    #[test]
    fn test_storage_from_sqlx() {
        let err: SongError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, SongError::Storage(_)));
    }
}
