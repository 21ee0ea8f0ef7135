//! Upload Tile
//!
//! Dashed drop-zone style button that asks the shell to pick a file for a
//! card slot. The picking and reading happen in the shell.

use dioxus::prelude::*;
use storycard_core::MediaSlot;

/// Default tile caption for a slot
pub fn tile_caption(slot: MediaSlot) -> &'static str {
    match slot {
        MediaSlot::Cover => "Upload Cover",
        MediaSlot::InnerImage => "Upload Story Photo",
        MediaSlot::Audio => "Choose Audio File",
    }
}

fn tile_icon(slot: MediaSlot) -> &'static str {
    match slot {
        MediaSlot::Cover => "📷",
        MediaSlot::InnerImage => "✨",
        MediaSlot::Audio => "🎵",
    }
}

#[component]
pub fn UploadTile(
    /// Card slot this tile uploads into
    slot: MediaSlot,
    /// Called when the user clicks the tile
    on_pick: EventHandler<MediaSlot>,
    /// Show a busy state while a read is pending
    #[props(default = false)]
    busy: bool,
    /// Inline failure notice from the last attempt
    #[props(default = None)]
    error: Option<String>,
) -> Element {
    rsx! {
        div { class: "upload-tile",
            button {
                class: "upload-tile__button",
                r#type: "button",
                disabled: busy,
                onclick: move |_| {
                    tracing::debug!(%slot, "Upload pick requested");
                    on_pick.call(slot);
                },
                span { class: "upload-tile__icon", "{tile_icon(slot)}" }
                span { class: "upload-tile__label",
                    if busy { "Reading..." } else { "{tile_caption(slot)}" }
                }
            }
            if let Some(err) = error {
                div { class: "upload-tile__error", "⚠️ {err}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captions() {
        assert_eq!(tile_caption(MediaSlot::Cover), "Upload Cover");
        assert_eq!(tile_caption(MediaSlot::InnerImage), "Upload Story Photo");
        assert_eq!(tile_caption(MediaSlot::Audio), "Choose Audio File");
    }
}
