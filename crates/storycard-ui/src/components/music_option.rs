//! Music Choice Option
//!
//! One of the two mutually exclusive radio rows for the music mode.

use dioxus::prelude::*;

/// Which music mode a row selects
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MusicChoice {
    /// The fixed preset track
    Preset,
    /// The user's uploaded audio
    Own,
}

impl MusicChoice {
    /// Value of `use_preset_music` this row stands for
    pub fn use_preset_music(&self) -> bool {
        matches!(self, MusicChoice::Preset)
    }

    pub fn title(&self) -> &'static str {
        match self {
            MusicChoice::Preset => "Preset Festive Tune",
            MusicChoice::Own => "Upload Your Own Audio",
        }
    }

    /// Whether this row is the selected one for the given flag
    pub fn is_selected(&self, use_preset_music: bool) -> bool {
        self.use_preset_music() == use_preset_music
    }
}

/// Radio row with a title and free-form body (player preview, file input)
#[component]
pub fn MusicOption(
    choice: MusicChoice,
    /// Current `use_preset_music` flag
    use_preset_music: bool,
    /// Called with the flag value this row selects
    on_select: EventHandler<bool>,
    children: Element,
) -> Element {
    let selected = choice.is_selected(use_preset_music);
    let row_class = if selected {
        "music-option music-option--selected"
    } else {
        "music-option"
    };

    rsx! {
        div { class: "{row_class}",
            input {
                r#type: "radio",
                name: "music-choice",
                checked: selected,
                onchange: move |_| on_select.call(choice.use_preset_music()),
            }
            div { class: "music-option__body",
                span { class: "music-option__title", "{choice.title()}" }
                {children}
            }
        }
    }
}
