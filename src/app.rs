use dioxus::prelude::*;
use storycard_core::{
    resolve_playback, CardEvent, CardStore, DataUrlReader, Playback, PresentationController,
};
use storycard_ui::{Button, ButtonVariant};
use tokio::sync::broadcast::error::RecvError;

use crate::components::{EditorPanel, StoryCard};
use crate::context::{get_card_config, UploadNotice};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the card store and presentation controller, mirrors both into
/// signals, and hosts the hidden audio element for uploaded music.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_card_config);
    let store = use_hook(|| {
        CardStore::with_reader(config.initial_card(), DataUrlReader, config.event_capacity)
    });
    let presentation = use_hook(PresentationController::new);

    let mut card = use_signal(|| store.get());
    let mut view_state = use_signal(|| presentation.state());
    let mut notice: Signal<Option<UploadNotice>> = use_signal(|| None);
    let mut editor_open = use_signal(|| false);

    use_context_provider(|| config.clone());
    use_context_provider(|| store.clone());
    use_context_provider(|| presentation.clone());
    use_context_provider(|| card);
    use_context_provider(|| view_state);
    use_context_provider(|| notice);

    // Mirror committed store changes into the card signal
    let events_store = store.clone();
    use_effect(move || {
        let store = events_store.clone();
        spawn(async move {
            let mut event_rx = store.subscribe();
            loop {
                match event_rx.recv().await {
                    Ok(CardEvent::Updated { snapshot, changed }) => {
                        tracing::debug!(fields = ?changed.names(), "Card snapshot refreshed");
                        card.set((*snapshot).clone());
                    }
                    Ok(CardEvent::MediaBound { slot, .. }) => {
                        tracing::debug!(%slot, "Upload committed");
                        notice.set(None);
                    }
                    Ok(CardEvent::MediaFailed { slot, reason }) => {
                        notice.set(Some(UploadNotice {
                            message: format!("Could not use that {} file: {}", slot, reason),
                        }));
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Card events lagged, resyncing snapshot");
                        card.set(store.get());
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });
    });

    // Mirror presentation transitions into the view-state signal
    let watch_presentation = presentation.clone();
    use_effect(move || {
        let mut state_rx = watch_presentation.subscribe();
        spawn(async move {
            while state_rx.changed().await.is_ok() {
                let state = *state_rx.borrow_and_update();
                view_state.set(state);
            }
        });
    });

    // Pending reads must not land after the window is gone
    let teardown_store = store.clone();
    use_drop(move || teardown_store.close());

    let playback = resolve_playback(&card.read(), view_state());
    let headline = config.headline.clone();

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "storybook",
            div { class: "storybook__decor", "aria-hidden": "true",
                span { class: "decor decor--snow", "❄️" }
                span { class: "decor decor--tree", "🎄" }
            }

            main { class: "storybook__main",
                header { class: "storybook__header",
                    h1 { class: "storybook__title", "{headline}" }
                    p { class: "storybook__subtitle", "Interactive Holiday Greeting" }
                }

                StoryCard {}

                if let Some(current) = notice() {
                    div { class: "upload-notice",
                        span { "{current.message}" }
                        button {
                            class: "upload-notice__dismiss",
                            onclick: move |_| notice.set(None),
                            "×"
                        }
                    }
                }

                div { class: "storybook__actions",
                    Button {
                        variant: ButtonVariant::Holly,
                        onclick: move |_| editor_open.set(!editor_open()),
                        "⚙ "
                        if editor_open() { "Finish Editing" } else { "Customize Your Card" }
                    }
                }

                if editor_open() {
                    EditorPanel {}
                }
            }

            if let Playback::Uploaded { src } = playback {
                audio {
                    class: "hidden-audio",
                    src: "{src.as_str()}",
                    autoplay: true,
                    r#loop: true,
                }
            }
        }
    }
}
