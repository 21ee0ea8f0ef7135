//! End-to-end card scenario: own audio upload, open, mute.

mod common;

use common::{audio_ref, named, ScriptedReader};
use storycard_core::{
    resolve_music_view, resolve_playback, CardConfig, CardPatch, CardStore, MediaSlot, MusicView,
    Playback, PresentationController,
};

#[tokio::test]
async fn test_uploaded_audio_scenario() {
    let config = CardConfig::default();
    let reader = ScriptedReader::new();
    let gate = reader.gate("sample.mp3");
    let store = CardStore::with_reader(config.initial_card(), reader, config.event_capacity);

    store.update(CardPatch::new().use_preset_music(false));
    let binding = store.bind_media(MediaSlot::Audio, named("sample.mp3"));
    gate.send(Ok(audio_ref("AAA="))).unwrap();
    binding.finished().await.unwrap();

    let card = store.get();
    assert_eq!(
        card.audio.as_ref().map(|a| a.as_str()),
        Some("data:audio/mpeg;base64,AAA=")
    );
    assert!(!card.use_preset_music);

    let presentation = PresentationController::new();
    presentation.open();
    let before = presentation.state();

    let view = resolve_music_view(&card, presentation.state(), &config.preset_track);
    assert_eq!(view, MusicView::AudioControl { muted: false });
    assert_eq!(view.label(), Some("Playing Audio"));

    presentation.toggle_mute();
    let after = presentation.state();
    let view = resolve_music_view(&card, after, &config.preset_track);
    assert_eq!(view.label(), Some("Unmute Audio"));

    assert_eq!(after.is_open, before.is_open);
    assert_ne!(after.is_audio_muted, before.is_audio_muted);
    assert_eq!(store.get(), card);
    assert_eq!(resolve_playback(&card, after), Playback::None);

    presentation.toggle_mute();
    assert!(resolve_playback(&card, presentation.state()).is_playing());
}

#[tokio::test]
async fn test_preset_widget_only_while_open() {
    let config = CardConfig::default();
    let store = CardStore::new(config.initial_card());
    let presentation = PresentationController::new();

    let closed = resolve_music_view(&store.get(), presentation.state(), &config.preset_track);
    assert_eq!(closed, MusicView::Hidden);

    presentation.open();
    let open = resolve_music_view(&store.get(), presentation.state(), &config.preset_track);
    assert!(matches!(open, MusicView::PresetWidget { autoplay: true, .. }));

    presentation.close();
    let closed_again = resolve_music_view(&store.get(), presentation.state(), &config.preset_track);
    assert_eq!(closed_again, MusicView::Hidden);
}

#[test]
fn test_open_close_sequence() {
    let presentation = PresentationController::new();
    presentation.open();
    presentation.close();
    presentation.open();
    assert!(presentation.is_open());

    presentation.close();
    assert!(!presentation.close());
    assert!(!presentation.is_open());
}
