//! Editor Panel
//!
//! Customization surface: two image uploads, the music choice with its own
//! upload, and the message text. Every change goes through the store.

use std::collections::HashSet;

use dioxus::prelude::*;
use storycard_core::{CardPatch, MediaSlot};
use storycard_ui::{MusicChoice, MusicOption, UploadTile};

use super::media_picker::pick_media_file;
use crate::context::{use_card, use_card_config, use_card_store};

#[component]
pub fn EditorPanel() -> Element {
    let store = use_card_store();
    let card = use_card();
    let config = use_card_config();
    let mut busy: Signal<HashSet<MediaSlot>> = use_signal(HashSet::new);
    let mut errors: Signal<Vec<(MediaSlot, String)>> = use_signal(Vec::new);

    let upload_store = store.clone();
    let start_upload = use_callback(move |slot: MediaSlot| {
        let store = upload_store.clone();
        spawn(async move {
            // Native dialog blocks; keep it off the UI thread
            let picked = tokio::task::spawn_blocking(move || pick_media_file(slot)).await;

            match picked {
                Ok(Some(path)) => {
                    busy.write().insert(slot);
                    errors.write().retain(|(s, _)| *s != slot);

                    let result = store.bind_media(slot, path).finished().await;

                    busy.write().remove(&slot);
                    if let Err(e) = result {
                        errors.write().push((slot, e.to_string()));
                    }
                }
                Ok(None) => {
                    // User cancelled
                }
                Err(e) => {
                    tracing::error!(%slot, error = %e, "File picker task failed");
                }
            }
        });
    });

    let music_store = store.clone();
    let select_music = use_callback(move |use_preset_music: bool| {
        music_store.update(CardPatch::new().use_preset_music(use_preset_music));
    });

    let text_store = store;
    let edit_message = use_callback(move |text: String| {
        text_store.set_message(text);
    });

    let snapshot = card.read().clone();
    let error_for = move |slot: MediaSlot| -> Option<String> {
        errors
            .read()
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, e)| e.clone())
    };

    rsx! {
        div { class: "editor-panel",
            div { class: "editor-panel__ribbon" }

            div { class: "editor-panel__grid",
                div { class: "editor-section",
                    label { class: "editor-section__label editor-section__label--holly", "1. Front Cover" }
                    UploadTile {
                        slot: MediaSlot::Cover,
                        on_pick: start_upload,
                        busy: busy.read().contains(&MediaSlot::Cover),
                        error: error_for(MediaSlot::Cover),
                    }
                }

                div { class: "editor-section",
                    label { class: "editor-section__label editor-section__label--pine", "2. Inner Photo" }
                    UploadTile {
                        slot: MediaSlot::InnerImage,
                        on_pick: start_upload,
                        busy: busy.read().contains(&MediaSlot::InnerImage),
                        error: error_for(MediaSlot::InnerImage),
                    }
                }
            }

            div { class: "editor-section",
                label { class: "editor-section__label editor-section__label--holly", "3. Holiday Music" }

                MusicOption {
                    choice: MusicChoice::Preset,
                    use_preset_music: snapshot.use_preset_music,
                    on_select: select_music,
                    iframe {
                        class: "music-option__preview",
                        src: "{config.preset_track.widget_url(false)}",
                        width: "100%",
                        height: "86",
                        "frameborder": "no",
                    }
                }

                MusicOption {
                    choice: MusicChoice::Own,
                    use_preset_music: snapshot.use_preset_music,
                    on_select: select_music,
                    UploadTile {
                        slot: MediaSlot::Audio,
                        on_pick: start_upload,
                        busy: busy.read().contains(&MediaSlot::Audio),
                        error: error_for(MediaSlot::Audio),
                    }
                    if snapshot.audio.is_some() {
                        span { class: "music-option__status", "Audio ready" }
                    }
                }
            }

            div { class: "editor-section",
                label { class: "editor-section__label editor-section__label--pine", "4. Your Message" }
                textarea {
                    class: "editor-message",
                    rows: "3",
                    value: "{snapshot.inner_page.text}",
                    placeholder: "Write your wishes...",
                    oninput: move |e: FormEvent| edit_message.call(e.value()),
                }
            }
        }
    }
}
