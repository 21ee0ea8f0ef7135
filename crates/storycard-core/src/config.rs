//! Card configuration
//!
//! Defaults reproduce the stock holiday card. A JSON file can override any
//! subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CardError, CardResult};
use crate::types::{CardData, MediaRef};

/// Message shown on the inner page until the user writes their own
pub const DEFAULT_MESSAGE: &str = "Wishing you a season filled with warmth, laughter, and magical moments. May your holidays be as bright as the Christmas lights!";

/// Cover placeholder when no cover was uploaded
pub const DEFAULT_COVER_PLACEHOLDER: &str =
    "https://images.unsplash.com/photo-1543589077-47d81606c1bf?auto=format&fit=crop&q=80&w=1000";

/// Inner photo placeholder when no photo was uploaded
pub const DEFAULT_INNER_PLACEHOLDER: &str =
    "https://images.unsplash.com/photo-1544273677-242ef927164b?auto=format&fit=crop&q=80&w=1000";

/// NetEase Cloud Music track used as the preset tune
pub const DEFAULT_PRESET_TRACK_ID: &str = "2617646167";

/// Default capacity for the store's event broadcast channel
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Fixed externally hosted track offered instead of uploaded audio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetTrack {
    /// Track identifier on the hosting player
    pub id: String,
}

impl PresetTrack {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// URL of the embeddable player widget
    pub fn widget_url(&self, autoplay: bool) -> String {
        format!(
            "//music.163.com/outchain/player?type=2&id={}&auto={}&height=66",
            self.id,
            u8::from(autoplay)
        )
    }
}

impl Default for PresetTrack {
    fn default() -> Self {
        Self::new(DEFAULT_PRESET_TRACK_ID)
    }
}

/// Application-wide card settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Initial inner page message
    pub default_message: String,
    /// Preset music track
    pub preset_track: PresetTrack,
    /// Cover shown when none was uploaded
    pub cover_placeholder: String,
    /// Inner photo shown when none was uploaded
    pub inner_placeholder: String,
    /// Page headline above the card
    pub headline: String,
    /// Capacity of the store's event channel
    pub event_capacity: usize,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            default_message: DEFAULT_MESSAGE.to_string(),
            preset_track: PresetTrack::default(),
            cover_placeholder: DEFAULT_COVER_PLACEHOLDER.to_string(),
            inner_placeholder: DEFAULT_INNER_PLACEHOLDER.to_string(),
            headline: "Christmas Story".to_string(),
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl CardConfig {
    /// Load from a JSON file.
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load(path: impl AsRef<Path>) -> CardResult<Self> {
        let path = path.as_ref();
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(?path, "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        debug!(?path, "Loaded card config");
        Ok(config)
    }

    /// Reject values the application cannot run with
    pub fn validate(&self) -> CardResult<()> {
        if self.event_capacity == 0 {
            return Err(CardError::Config("event_capacity must be positive".into()));
        }
        if self.preset_track.id.trim().is_empty() {
            return Err(CardError::Config("preset_track.id must not be empty".into()));
        }
        Ok(())
    }

    /// The card as it looks at application start
    pub fn initial_card(&self) -> CardData {
        CardData::with_message(self.default_message.clone())
    }

    pub fn cover_placeholder(&self) -> MediaRef {
        MediaRef::from_url(self.cover_placeholder.clone())
    }

    pub fn inner_placeholder(&self) -> MediaRef {
        MediaRef::from_url(self.inner_placeholder.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_url() {
        let track = PresetTrack::default();
        assert_eq!(
            track.widget_url(true),
            "//music.163.com/outchain/player?type=2&id=2617646167&auto=1&height=66"
        );
        assert!(track.widget_url(false).contains("auto=0"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CardConfig::load(dir.path().join("absent.json")).unwrap();
        assert_eq!(config, CardConfig::default());
    }

    #[test]
    fn test_partial_file_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.json");
        std::fs::write(&path, r#"{ "default_message": "Happy New Year" }"#).unwrap();

        let config = CardConfig::load(&path).unwrap();
        assert_eq!(config.default_message, "Happy New Year");
        assert_eq!(config.preset_track, PresetTrack::default());
        assert_eq!(config.initial_card().inner_page.text, "Happy New Year");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(CardConfig::load(&path), Err(CardError::Json(_))));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = CardConfig {
            event_capacity: 0,
            ..CardConfig::default()
        };
        assert!(matches!(config.validate(), Err(CardError::Config(_))));
    }
}
