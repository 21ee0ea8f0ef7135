//! Error types for Story Card

use thiserror::Error;

use crate::types::MediaKind;

/// Main error type for Story Card operations
#[derive(Error, Debug)]
pub enum CardError {
    /// The media converter could not produce a reference
    #[error("Media read failed: {0}")]
    MediaRead(String),

    /// The selected file is not the kind of media the slot expects
    #[error("Unsupported media: expected {expected}, found {found}")]
    UnsupportedMedia {
        /// Kind the slot accepts
        expected: MediaKind,
        /// Mime type detected for the file
        found: String,
    },

    /// The selected file has no content
    #[error("Media file is empty")]
    EmptyMedia,

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("Config error: {0}")]
    Config(String),

    /// Error during JSON (de)serialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The store was torn down before a pending read completed
    #[error("Card store is closed")]
    StoreClosed,

    /// Background conversion task panicked or was aborted
    #[error("Task join error: {0}")]
    TaskJoin(String),
}

impl CardError {
    /// Whether this error belongs to the media-read failure class.
    ///
    /// These are the only failures `bind_media` can observe, and all of them
    /// leave the card untouched.
    pub fn is_media_read_failure(&self) -> bool {
        matches!(
            self,
            CardError::MediaRead(_)
                | CardError::UnsupportedMedia { .. }
                | CardError::EmptyMedia
                | CardError::Io(_)
        )
    }
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CardError::UnsupportedMedia {
            expected: MediaKind::Audio,
            found: "image/png".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Unsupported media: expected audio, found image/png"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let card_err: CardError = io_err.into();
        assert!(matches!(card_err, CardError::Io(_)));
        assert!(card_err.is_media_read_failure());
    }

    #[test]
    fn test_config_errors_are_not_media_failures() {
        assert!(!CardError::Config("bad".into()).is_media_read_failure());
        assert!(!CardError::StoreClosed.is_media_read_failure());
    }
}
