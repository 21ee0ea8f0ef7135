//! Render decisions derived from the card and the presentation flags
//!
//! Pure functions: the view layer asks what to show and these answer. None
//! of them touch the store.
//!
//! | use_preset_music | open | audio | muted | MusicView                 |
//! |------------------|------|-------|-------|---------------------------|
//! | true             | no   | -     | -     | Hidden                    |
//! | true             | yes  | -     | -     | PresetWidget (autoplay)   |
//! | false            | -    | no    | -     | NoControl                 |
//! | false            | -    | yes   | no    | AudioControl "Playing"    |
//! | false            | -    | yes   | yes   | AudioControl "Unmute"     |

use crate::config::{CardConfig, PresetTrack};
use crate::presentation::PresentationState;
use crate::types::{CardData, MediaRef, MusicSource};

/// Music affordance shown on the inner page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MusicView {
    /// Preset mode while closed: widget not rendered, nothing plays
    Hidden,
    /// Preset mode while open: embedded player
    PresetWidget {
        /// Player widget URL
        url: String,
        autoplay: bool,
    },
    /// Own-audio mode without an upload
    NoControl,
    /// Own-audio mode with an upload: the mute toggle
    AudioControl {
        muted: bool,
    },
}

impl MusicView {
    /// Label of the audio control, if one is shown
    pub fn label(&self) -> Option<&'static str> {
        match self {
            MusicView::AudioControl { muted: false } => Some("Playing Audio"),
            MusicView::AudioControl { muted: true } => Some("Unmute Audio"),
            _ => None,
        }
    }

    /// Whether anything is rendered at all
    pub fn is_rendered(&self) -> bool {
        matches!(self, MusicView::PresetWidget { .. } | MusicView::AudioControl { .. })
    }
}

/// Decide which music affordance the card shows
pub fn resolve_music_view(
    card: &CardData,
    state: PresentationState,
    preset: &PresetTrack,
) -> MusicView {
    match card.music_source() {
        MusicSource::Preset if state.is_open => MusicView::PresetWidget {
            url: preset.widget_url(true),
            autoplay: true,
        },
        MusicSource::Preset => MusicView::Hidden,
        MusicSource::Silent => MusicView::NoControl,
        MusicSource::Uploaded(_) => MusicView::AudioControl {
            muted: state.is_audio_muted,
        },
    }
}

/// What the application shell's audio element should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Playback {
    /// No audio element
    None,
    /// Looping uploaded audio
    Uploaded { src: MediaRef },
}

impl Playback {
    pub fn is_playing(&self) -> bool {
        matches!(self, Playback::Uploaded { .. })
    }
}

/// Decide uploaded-audio playback.
///
/// Independent of `is_open`: uploaded audio plays as soon as it is the
/// active source. Switching back to preset music stops it immediately.
///
/// Muting stops playback outright: the `muted` content attribute has no
/// effect on an element that is already playing, so the element is removed
/// and remounted on unmute.
pub fn resolve_playback(card: &CardData, state: PresentationState) -> Playback {
    match card.music_source() {
        MusicSource::Uploaded(_) if state.is_audio_muted => Playback::None,
        MusicSource::Uploaded(src) => Playback::Uploaded { src: src.clone() },
        MusicSource::Preset | MusicSource::Silent => Playback::None,
    }
}

/// Display sources for the card faces, placeholders substituted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFace {
    pub cover: MediaRef,
    pub inner_image: MediaRef,
    pub message: String,
    pub cover_is_placeholder: bool,
    pub inner_is_placeholder: bool,
}

impl CardFace {
    pub fn resolve(card: &CardData, config: &CardConfig) -> Self {
        let (cover, cover_is_placeholder) = match &card.cover {
            Some(cover) => (cover.clone(), false),
            None => (config.cover_placeholder(), true),
        };
        let (inner_image, inner_is_placeholder) = match &card.inner_page.image {
            Some(image) => (image.clone(), false),
            None => (config.inner_placeholder(), true),
        };

        Self {
            cover,
            inner_image,
            message: card.inner_page.text.clone(),
            cover_is_placeholder,
            inner_is_placeholder,
        }
    }
}
