//! Card Presentation Controller
//!
//! Owns the two ephemeral view flags:
//!
//! ```text
//! ┌──────────┐   open()    ┌──────────┐
//! │  Closed  │ ──────────► │   Open   │
//! │ (initial)│ ◄────────── │          │
//! └──────────┘   close()   └──────────┘
//!
//! is_audio_muted: toggled by toggle_mute() only, survives open/close
//! ```
//!
//! The flip animation is CSS; there is no "opening" state here.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info};

/// Ephemeral presentation flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresentationState {
    /// Card flipped open
    pub is_open: bool,
    /// Local mute toggle for uploaded audio
    pub is_audio_muted: bool,
}

/// Drives the open/closed state and the mute toggle.
///
/// Every transition that actually changes a flag is published to
/// subscribers; no-op calls publish nothing.
#[derive(Debug, Clone)]
pub struct PresentationController {
    state: Arc<watch::Sender<PresentationState>>,
}

impl Default for PresentationController {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentationController {
    /// Closed and unmuted
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(PresentationState::default());
        Self {
            state: Arc::new(tx),
        }
    }

    /// Current flags
    pub fn state(&self) -> PresentationState {
        *self.state.borrow()
    }

    pub fn is_open(&self) -> bool {
        self.state().is_open
    }

    pub fn is_audio_muted(&self) -> bool {
        self.state().is_audio_muted
    }

    /// Watch the flags for changes
    pub fn subscribe(&self) -> watch::Receiver<PresentationState> {
        self.state.subscribe()
    }

    /// Closed → Open. Returns whether the transition fired.
    pub fn open(&self) -> bool {
        let fired = self.state.send_if_modified(|s| {
            if s.is_open {
                false
            } else {
                s.is_open = true;
                true
            }
        });
        if fired {
            info!("Card opened");
        }
        fired
    }

    /// Open → Closed. Returns whether the transition fired.
    pub fn close(&self) -> bool {
        let fired = self.state.send_if_modified(|s| {
            if s.is_open {
                s.is_open = false;
                true
            } else {
                false
            }
        });
        if fired {
            info!("Card closed");
        }
        fired
    }

    /// Flip in whichever direction applies; returns the new `is_open`
    pub fn toggle_open(&self) -> bool {
        if self.is_open() {
            self.close();
            false
        } else {
            self.open();
            true
        }
    }

    /// Flip the mute flag; returns the new `is_audio_muted`
    pub fn toggle_mute(&self) -> bool {
        let mut muted = false;
        self.state.send_modify(|s| {
            s.is_audio_muted = !s.is_audio_muted;
            muted = s.is_audio_muted;
        });
        debug!(muted, "Audio mute toggled");
        muted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let controller = PresentationController::new();
        assert_eq!(controller.state(), PresentationState::default());
        assert!(!controller.is_open());
        assert!(!controller.is_audio_muted());
    }

    #[test]
    fn test_open_close_open() {
        let controller = PresentationController::new();
        assert!(controller.open());
        assert!(controller.close());
        assert!(controller.open());
        assert!(controller.is_open());
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let controller = PresentationController::new();
        let rx = controller.subscribe();

        assert!(!controller.close());
        assert!(!controller.is_open());
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_open_when_open_is_noop() {
        let controller = PresentationController::new();
        controller.open();
        let rx = controller.subscribe();

        assert!(!controller.open());
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_mute_survives_open_close() {
        let controller = PresentationController::new();
        assert!(controller.toggle_mute());
        controller.open();
        controller.close();
        assert!(controller.is_audio_muted());
        assert!(!controller.toggle_mute());
    }

    #[test]
    fn test_toggle_open() {
        let controller = PresentationController::new();
        assert!(controller.toggle_open());
        assert!(!controller.toggle_open());
        assert!(!controller.is_open());
    }

    #[tokio::test]
    async fn test_subscribers_see_transitions() {
        let controller = PresentationController::new();
        let mut rx = controller.subscribe();

        controller.open();
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_open);

        controller.toggle_mute();
        rx.changed().await.unwrap();
        let state = *rx.borrow_and_update();
        assert!(state.is_open);
        assert!(state.is_audio_muted);
    }
}
