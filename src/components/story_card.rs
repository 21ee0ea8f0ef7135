//! Story Card
//!
//! The flip card itself: cover, back of the cover, and the inner page with
//! photo, message and music affordance.

use dioxus::prelude::*;
use storycard_core::{resolve_music_view, CardFace, MusicView};
use storycard_ui::{Button, ButtonVariant};

use crate::context::{use_card, use_card_config, use_presentation, use_presentation_state};

/// Number of falling flakes on the inner page
const SNOWFLAKES: usize = 10;

#[component]
pub fn StoryCard() -> Element {
    let card = use_card();
    let view_state = use_presentation_state();
    let presentation = use_presentation();
    let config = use_card_config();

    let state = view_state();
    let face = CardFace::resolve(&card.read(), &config);
    let music = resolve_music_view(&card.read(), state, &config.preset_track);

    let leaf_class = if state.is_open {
        "story-card__leaf story-card__leaf--open"
    } else {
        "story-card__leaf"
    };

    let open_presentation = presentation.clone();
    let close_presentation = presentation.clone();
    let mute_presentation = presentation;

    let music_label = music.label().unwrap_or_default();
    let music_control = match music {
        MusicView::PresetWidget { url, .. } => rsx! {
            div { class: "story-card__player",
                iframe {
                    class: "story-card__iframe",
                    src: "{url}",
                    width: "100%",
                    height: "86",
                    "frameborder": "no",
                }
            }
        },
        MusicView::AudioControl { muted } => rsx! {
            button {
                class: "story-card__audio-toggle",
                r#type: "button",
                onclick: move |_| {
                    mute_presentation.toggle_mute();
                },
                span { class: if muted { "audio-icon" } else { "audio-icon audio-icon--pulse" },
                    if muted { "🔇" } else { "🔊" }
                }
                "{music_label}"
            }
        },
        MusicView::Hidden | MusicView::NoControl => rsx! {},
    };

    rsx! {
        div { class: "story-card",
            div { class: "{leaf_class}",
                // FRONT: click anywhere on the cover to open
                div {
                    class: "story-card__front",
                    onclick: move |_| {
                        open_presentation.open();
                    },
                    img {
                        class: "story-card__cover",
                        src: "{face.cover.as_str()}",
                        alt: "Card cover",
                    }
                    div { class: "story-card__border" }

                    if !state.is_open {
                        div { class: "story-card__plate-wrap",
                            div { class: "story-card__plate",
                                div { class: "story-card__plate-inner",
                                    div { class: "story-card__plate-title", "Merry" br {} "Christmas" }
                                    div { class: "story-card__plate-rule" }
                                    div { class: "story-card__plate-to", "To You" }
                                    span { class: "story-card__chevron", "›" }
                                }
                            }
                            div { class: "story-card__open-hint", "Click to Open" }
                        }
                    }
                }

                // BACK of the cover: left page once open
                div { class: "story-card__back",
                    div { class: "story-card__back-frame",
                        div { class: "story-card__back-head",
                            div { class: "story-card__gift", "🎁" }
                            h2 { class: "story-card__back-title", "A Magical Moment" }
                            div { class: "story-card__stars",
                                for i in 0..5 {
                                    span { key: "{i}", "★" }
                                }
                            }
                        }
                        p { class: "story-card__quote",
                            "\"Christmas is not just a season, it's a feeling of warmth, togetherness, and love.\""
                        }
                        div { class: "story-card__back-actions",
                            Button { variant: ButtonVariant::Pine, class: "wide".to_string(), "♥ Love this Card" }
                            Button {
                                variant: ButtonVariant::Link,
                                onclick: move |_| {
                                    close_presentation.close();
                                },
                                "‹ Close Story"
                            }
                        }
                    }
                }
            }

            // INNER page, revealed by the flip
            div { class: "story-card__inner",
                div { class: "snowflakes", "aria-hidden": "true",
                    for i in 0..SNOWFLAKES {
                        div { key: "{i}", class: "snowflake", "❅" }
                    }
                }

                div { class: "story-card__photo",
                    img {
                        class: "story-card__photo-img",
                        src: "{face.inner_image.as_str()}",
                        alt: "Inner memory",
                    }
                    div { class: "story-card__sparkle", "✦" }
                }

                div { class: "story-card__text",
                    div { class: "story-card__divider", "✧" }
                    p { class: "story-card__message", "{face.message}" }
                }

                div { class: "story-card__footer",
                    div { class: "story-card__signoff",
                        span { "Sent with Love" }
                    }

                    {music_control}
                }
            }
        }
    }
}
