//! Story Card Core Library
//!
//! State model and presentation logic for an interactive greeting card.
//!
//! ## Overview
//!
//! The user customizes a cover image, an inner photo, a message, and
//! background music, then opens the card with a flip transition.
//!
//! - [`CardStore`] holds the one [`CardData`] value. It changes through
//!   shallow [`CardPatch`]es and background media uploads, and notifies
//!   subscribers after every committed change.
//! - [`PresentationController`] owns the open/closed and mute flags.
//! - [`view`] turns both into render decisions: which music widget to
//!   show, what the audio element does, and which images to display.
//!
//! ## Quick Start
//!
//! ```ignore
//! use storycard_core::{CardConfig, CardStore, MediaSlot, PresentationController};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CardConfig::default();
//!     let store = CardStore::new(config.initial_card());
//!     let presentation = PresentationController::new();
//!
//!     store.bind_media(MediaSlot::Audio, std::path::PathBuf::from("carol.mp3"))
//!         .finished()
//!         .await?;
//!
//!     presentation.open();
//!     let view = storycard_core::view::resolve_music_view(
//!         &store.get(),
//!         presentation.state(),
//!         &config.preset_track,
//!     );
//!     println!("{:?}", view.label());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod media;
pub mod patch;
pub mod presentation;
pub mod store;
pub mod types;
pub mod view;

// Re-exports
pub use config::{CardConfig, PresetTrack};
pub use error::{CardError, CardResult};
pub use media::{encode_data_url, DataUrlReader, MediaFile, MediaReader};
pub use patch::{CardPatch, ChangedFields};
pub use presentation::{PresentationController, PresentationState};
pub use store::{CardEvent, CardStore, MediaBinding};
pub use types::*;
pub use view::{resolve_music_view, resolve_playback, CardFace, MusicView, Playback};
