//! Typed partial updates for [`CardData`]
//!
//! A [`CardPatch`] replaces whole top-level fields and nothing else. The
//! inner page is one field: changing only its text means re-supplying the
//! current image alongside it.
//!
//! ```ignore
//! let patch = CardPatch::new().use_preset_music(false);
//! store.update(patch);
//! ```

use crate::types::{CardData, MediaRef, PageContent};

/// Shallow patch over the top-level fields of a card.
///
/// `None` leaves a field alone. Nullable media fields take an inner
/// `Option`, so `Some(None)` clears them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardPatch {
    pub cover: Option<Option<MediaRef>>,
    pub inner_page: Option<PageContent>,
    pub audio: Option<Option<MediaRef>>,
    pub use_preset_music: Option<bool>,
}

impl CardPatch {
    /// Empty patch
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cover(mut self, cover: Option<MediaRef>) -> Self {
        self.cover = Some(cover);
        self
    }

    /// Replace the whole inner page
    pub fn inner_page(mut self, page: PageContent) -> Self {
        self.inner_page = Some(page);
        self
    }

    pub fn audio(mut self, audio: Option<MediaRef>) -> Self {
        self.audio = Some(audio);
        self
    }

    pub fn use_preset_music(mut self, enabled: bool) -> Self {
        self.use_preset_music = Some(enabled);
        self
    }

    /// Whether the patch names no field at all
    pub fn is_empty(&self) -> bool {
        self.cover.is_none()
            && self.inner_page.is_none()
            && self.audio.is_none()
            && self.use_preset_music.is_none()
    }

    /// Apply onto `card`, reporting which fields changed value.
    ///
    /// Fields present in the patch with the current value count as unchanged.
    pub fn apply(&self, card: &mut CardData) -> ChangedFields {
        let mut changed = ChangedFields::default();

        if let Some(cover) = &self.cover {
            if card.cover != *cover {
                card.cover = cover.clone();
                changed.cover = true;
            }
        }
        if let Some(page) = &self.inner_page {
            if card.inner_page != *page {
                card.inner_page = page.clone();
                changed.inner_page = true;
            }
        }
        if let Some(audio) = &self.audio {
            if card.audio != *audio {
                card.audio = audio.clone();
                changed.audio = true;
            }
        }
        if let Some(enabled) = self.use_preset_music {
            if card.use_preset_music != enabled {
                card.use_preset_music = enabled;
                changed.use_preset_music = true;
            }
        }

        changed
    }
}

/// Which top-level fields an update actually changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangedFields {
    pub cover: bool,
    pub inner_page: bool,
    pub audio: bool,
    pub use_preset_music: bool,
}

impl ChangedFields {
    /// True when nothing changed
    pub fn is_empty(&self) -> bool {
        !(self.cover || self.inner_page || self.audio || self.use_preset_music)
    }

    /// Names of the changed fields, for logging
    pub fn names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.cover {
            names.push("cover");
        }
        if self.inner_page {
            names.push("inner_page");
        }
        if self.audio {
            names.push("audio");
        }
        if self.use_preset_music {
            names.push("use_preset_music");
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_card() -> CardData {
        let mut card = CardData::with_message("Merry Christmas");
        card.cover = Some(MediaRef::from_data_url("data:image/png;base64,Q09WRVI="));
        card.audio = Some(MediaRef::from_data_url("data:audio/mpeg;base64,AAA="));
        card
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let mut card = sample_card();
        let before = card.clone();
        let patch = CardPatch::new();
        assert!(patch.is_empty());
        assert!(patch.apply(&mut card).is_empty());
        assert_eq!(card, before);
    }

    #[test]
    fn test_music_flag_only() {
        let mut card = sample_card();
        let before = card.clone();

        let changed = CardPatch::new().use_preset_music(false).apply(&mut card);

        assert_eq!(changed.names(), vec!["use_preset_music"]);
        assert!(!card.use_preset_music);
        assert_eq!(card.cover, before.cover);
        assert_eq!(card.audio, before.audio);
        assert_eq!(card.inner_page, before.inner_page);
    }

    #[test]
    fn test_inner_page_is_replaced_whole() {
        let mut card = sample_card();
        card.inner_page.image = Some(MediaRef::from_data_url("data:image/png;base64,SU5ORVI="));

        // Text-only page drops the image: no deep merge
        CardPatch::new()
            .inner_page(PageContent::with_text("New text"))
            .apply(&mut card);

        assert_eq!(card.inner_page.text, "New text");
        assert_eq!(card.inner_page.image, None);
    }

    #[test]
    fn test_clear_cover() {
        let mut card = sample_card();
        let changed = CardPatch::new().cover(None).apply(&mut card);
        assert!(changed.cover);
        assert_eq!(card.cover, None);
    }

    #[test]
    fn test_same_value_is_not_a_change() {
        let mut card = sample_card();
        let changed = CardPatch::new()
            .use_preset_music(true)
            .audio(card.audio.clone())
            .apply(&mut card);
        assert!(changed.is_empty());
    }
}
