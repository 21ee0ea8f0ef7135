//! Card context providers for Story Card.
//!
//! `App` provides the store, the presentation controller, the config and
//! two mirrored signals. Components read the signals to re-render and call
//! the handles to mutate.
//!
//! ## Usage
//!
//! ```ignore
//! let store = use_card_store();
//! let card = use_card();
//!
//! store.update(CardPatch::new().use_preset_music(false));
//! // `card` updates once the store event arrives
//! ```

use dioxus::prelude::*;
use storycard_core::{CardConfig, CardData, CardStore, PresentationController, PresentationState};

/// Card configuration loaded at startup.
pub fn get_card_config() -> CardConfig {
    crate::get_card_config()
}

/// Hook to access the Card Data Store.
pub fn use_card_store() -> CardStore {
    use_context::<CardStore>()
}

/// Hook to access the presentation controller.
pub fn use_presentation() -> PresentationController {
    use_context::<PresentationController>()
}

pub fn use_card_config() -> CardConfig {
    use_context::<CardConfig>()
}

/// Hook to read the latest card snapshot.
///
/// Mirrors the store: refreshed after every committed change.
pub fn use_card() -> Signal<CardData> {
    use_context::<Signal<CardData>>()
}

/// Hook to read the open/mute flags.
pub fn use_presentation_state() -> Signal<PresentationState> {
    use_context::<Signal<PresentationState>>()
}

/// Last failed upload, shown as a dismissable notice.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadNotice {
    pub message: String,
}
