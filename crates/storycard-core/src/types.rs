//! Core types for Story Card
//!
//! The card is a single [`CardData`] value: a cover, one inner page, and a
//! music choice. Media is carried as self-contained [`MediaRef`] strings so
//! the view can use them directly as `src` attributes.

use serde::{Deserialize, Serialize};

/// Embeddable media reference.
///
/// Usually a base64 data URL (`data:image/png;base64,...`) produced by the
/// media converter. Placeholders and the preset track use plain URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaRef(String);

impl MediaRef {
    /// Wrap an already-encoded data URL
    pub fn from_data_url(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Wrap a remote URL (placeholders, preset assets)
    pub fn from_url(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The raw reference, usable as a `src` attribute
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is an inline `data:` URL
    pub fn is_data_url(&self) -> bool {
        self.0.starts_with("data:")
    }

    /// Mime type declared in a `data:` URL header
    ///
    /// Returns `None` for plain URLs or a header without a mime type.
    pub fn mime_type(&self) -> Option<&str> {
        let rest = self.0.strip_prefix("data:")?;
        let header = rest.split(',').next()?;
        let mime = header.split(';').next()?;
        if mime.is_empty() {
            None
        } else {
            Some(mime)
        }
    }

    /// Media kind derived from the data URL mime type
    pub fn kind(&self) -> Option<MediaKind> {
        self.mime_type().and_then(MediaKind::from_mime)
    }
}

impl std::fmt::Display for MediaRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Data URLs are huge; show only the header
        match self.0.find(',') {
            Some(idx) if self.is_data_url() => write!(f, "{},<{} chars>", &self.0[..idx], self.0.len() - idx - 1),
            _ => write!(f, "{}", self.0),
        }
    }
}

/// Declared kind of a media file handed to the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still image (cover or inner photo)
    Image,
    /// Background audio
    Audio,
}

impl MediaKind {
    /// Top-level mime type for this kind
    pub fn mime_prefix(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Audio => "audio",
        }
    }

    /// Classify a mime type string, e.g. `audio/mpeg`
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.split('/').next()? {
            "image" => Some(MediaKind::Image),
            "audio" => Some(MediaKind::Audio),
            _ => None,
        }
    }

    /// File extensions offered by the upload picker
    pub fn picker_extensions(&self) -> &'static [&'static str] {
        match self {
            MediaKind::Image => &["png", "jpg", "jpeg", "webp", "gif"],
            MediaKind::Audio => &["mp3", "wav", "ogg", "m4a", "aac", "flac"],
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mime_prefix())
    }
}

/// Which card field a media upload targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaSlot {
    /// Front cover image
    Cover,
    /// Photo on the inner page
    InnerImage,
    /// User-supplied background audio
    Audio,
}

impl MediaSlot {
    /// Kind of media this slot accepts
    pub fn media_kind(&self) -> MediaKind {
        match self {
            MediaSlot::Cover | MediaSlot::InnerImage => MediaKind::Image,
            MediaSlot::Audio => MediaKind::Audio,
        }
    }

    /// Short label for logs and notices
    pub fn label(&self) -> &'static str {
        match self {
            MediaSlot::Cover => "cover",
            MediaSlot::InnerImage => "inner image",
            MediaSlot::Audio => "audio",
        }
    }
}

impl std::fmt::Display for MediaSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Content of the inner page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageContent {
    /// Inner photo, placeholder shown when absent
    pub image: Option<MediaRef>,
    /// Message text, may be empty but never missing
    pub text: String,
}

impl PageContent {
    /// Page with a message and no photo
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            image: None,
            text: text.into(),
        }
    }
}

/// The whole user customization of a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardData {
    /// Front cover image, placeholder shown when absent
    pub cover: Option<MediaRef>,
    /// The single inner page
    pub inner_page: PageContent,
    /// Uploaded audio; only played when `use_preset_music` is false
    pub audio: Option<MediaRef>,
    /// Play the preset track instead of `audio`
    pub use_preset_music: bool,
}

impl CardData {
    /// Initial card: no media, the given message, preset music on
    pub fn with_message(text: impl Into<String>) -> Self {
        Self {
            cover: None,
            inner_page: PageContent::with_text(text),
            audio: None,
            use_preset_music: true,
        }
    }

    /// The one music source that is active for this card
    pub fn music_source(&self) -> MusicSource<'_> {
        if self.use_preset_music {
            MusicSource::Preset
        } else {
            match &self.audio {
                Some(audio) => MusicSource::Uploaded(audio),
                None => MusicSource::Silent,
            }
        }
    }
}

/// Active music source of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicSource<'a> {
    /// The fixed external preset track
    Preset,
    /// The user's uploaded audio
    Uploaded(&'a MediaRef),
    /// Own-audio mode without an upload
    Silent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type_from_data_url() {
        let media = MediaRef::from_data_url("data:audio/mpeg;base64,AAA=");
        assert!(media.is_data_url());
        assert_eq!(media.mime_type(), Some("audio/mpeg"));
        assert_eq!(media.kind(), Some(MediaKind::Audio));
    }

    #[test]
    fn test_plain_url_has_no_mime() {
        let media = MediaRef::from_url("https://example.com/cover.jpg");
        assert!(!media.is_data_url());
        assert_eq!(media.mime_type(), None);
        assert_eq!(media.kind(), None);
    }

    #[test]
    fn test_display_truncates_payload() {
        let media = MediaRef::from_data_url("data:image/png;base64,QUJDRA==");
        assert_eq!(media.to_string(), "data:image/png;base64,<8 chars>");
    }

    #[test]
    fn test_slot_kinds() {
        assert_eq!(MediaSlot::Cover.media_kind(), MediaKind::Image);
        assert_eq!(MediaSlot::InnerImage.media_kind(), MediaKind::Image);
        assert_eq!(MediaSlot::Audio.media_kind(), MediaKind::Audio);
    }

    #[test]
    fn test_default_card() {
        let card = CardData::with_message("Hello");
        assert_eq!(card.cover, None);
        assert_eq!(card.audio, None);
        assert_eq!(card.inner_page.image, None);
        assert_eq!(card.inner_page.text, "Hello");
        assert!(card.use_preset_music);
    }

    #[test]
    fn test_preset_ignores_uploaded_audio() {
        let mut card = CardData::with_message("");
        card.audio = Some(MediaRef::from_data_url("data:audio/mpeg;base64,AAA="));
        assert_eq!(card.music_source(), MusicSource::Preset);

        card.use_preset_music = false;
        assert!(matches!(card.music_source(), MusicSource::Uploaded(_)));

        card.audio = None;
        assert_eq!(card.music_source(), MusicSource::Silent);
    }
}
