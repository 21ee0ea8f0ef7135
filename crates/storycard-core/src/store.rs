//! Card Data Store
//!
//! Single source of truth for the card. All mutation goes through
//! [`CardStore::update`] or a completed [`CardStore::bind_media`], each
//! applied under one write lock so readers never see half a patch.
//!
//! ## Notifications
//!
//! ```text
//! update(patch) ──┐
//!                 ├──► write lock ──► CardEvent::Updated ──► subscribers
//! bind_media ─────┘         (read completes)
//!     └──► CardEvent::MediaBound / CardEvent::MediaFailed
//! ```
//!
//! ## Ordering
//!
//! Media reads complete in any order. Each result is committed when its read
//! finishes, so for one slot the read that finishes last decides the value.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::DEFAULT_EVENT_CAPACITY;
use crate::error::{CardError, CardResult};
use crate::media::{DataUrlReader, MediaFile, MediaReader};
use crate::patch::{CardPatch, ChangedFields};
use crate::types::{CardData, MediaRef, MediaSlot, PageContent};

/// Events emitted after committed store mutations
#[derive(Debug, Clone)]
pub enum CardEvent {
    /// The card changed
    Updated {
        /// Card as it was right after the change
        snapshot: Arc<CardData>,
        /// Fields that changed value
        changed: ChangedFields,
    },
    /// A media upload finished and was committed
    MediaBound {
        slot: MediaSlot,
        media: MediaRef,
    },
    /// A media upload failed; the card is unchanged
    MediaFailed {
        slot: MediaSlot,
        /// Human readable failure reason
        reason: String,
    },
}

struct StoreInner {
    card: RwLock<CardData>,
    event_tx: broadcast::Sender<CardEvent>,
    closed: AtomicBool,
}

/// Shared handle to the card.
///
/// Cloning is cheap; all clones see the same card.
pub struct CardStore<R = DataUrlReader> {
    inner: Arc<StoreInner>,
    reader: Arc<R>,
}

impl<R> Clone for CardStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            reader: Arc::clone(&self.reader),
        }
    }
}

impl<R> PartialEq for CardStore<R> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl CardStore<DataUrlReader> {
    /// Store with the default data URL converter
    pub fn new(initial: CardData) -> Self {
        Self::with_reader(initial, DataUrlReader, DEFAULT_EVENT_CAPACITY)
    }
}

impl<R: MediaReader> CardStore<R> {
    /// Store with a custom media converter and event channel capacity
    pub fn with_reader(initial: CardData, reader: R, event_capacity: usize) -> Self {
        let (event_tx, _) = broadcast::channel(event_capacity.max(1));
        Self {
            inner: Arc::new(StoreInner {
                card: RwLock::new(initial),
                event_tx,
                closed: AtomicBool::new(false),
            }),
            reader: Arc::new(reader),
        }
    }

    /// Current snapshot of the card
    pub fn get(&self) -> CardData {
        self.inner.card.read().clone()
    }

    /// Subscribe to committed changes
    pub fn subscribe(&self) -> broadcast::Receiver<CardEvent> {
        self.inner.event_tx.subscribe()
    }

    /// Apply a shallow patch.
    ///
    /// Subscribers are notified only when a field actually changed.
    pub fn update(&self, patch: CardPatch) -> ChangedFields {
        let mut card = self.inner.card.write();
        let changed = patch.apply(&mut card);
        if !changed.is_empty() {
            debug!(fields = ?changed.names(), "Card updated");
            self.notify_updated(&card, changed);
        }
        changed
    }

    /// Replace the inner page text, keeping whatever photo is bound.
    ///
    /// The current photo is read under the same write lock, so an inner
    /// image upload committing concurrently is never reverted.
    pub fn set_message(&self, text: impl Into<String>) -> ChangedFields {
        let mut card = self.inner.card.write();
        let patch = CardPatch::new().inner_page(PageContent {
            image: card.inner_page.image.clone(),
            text: text.into(),
        });
        let changed = patch.apply(&mut card);
        if !changed.is_empty() {
            debug!(fields = ?changed.names(), "Card message edited");
            self.notify_updated(&card, changed);
        }
        changed
    }

    /// Convert `file` in the background and bind it to `slot` when done.
    ///
    /// Returns immediately. On failure the card is left untouched. Must be
    /// called from within a tokio runtime.
    pub fn bind_media(&self, slot: MediaSlot, file: impl Into<MediaFile>) -> MediaBinding {
        let file = file.into();
        debug!(%slot, file = %file.name(), "Reading media");

        let store = self.clone();
        let handle = tokio::spawn(async move {
            let result = store.reader.read(file, slot.media_kind()).await;
            store.complete_binding(slot, result)
        });

        MediaBinding { slot, handle }
    }

    /// Tear the store down.
    ///
    /// Reads still in flight are discarded when they complete.
    pub fn close(&self) {
        self.inner.closed.store(true, Ordering::SeqCst);
        debug!("Card store closed");
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::SeqCst)
    }

    fn complete_binding(&self, slot: MediaSlot, result: CardResult<MediaRef>) -> CardResult<MediaRef> {
        let media = match result {
            Ok(media) => media,
            Err(e) => {
                warn!(%slot, error = %e, "Media read failed, card unchanged");
                if !self.is_closed() {
                    let _ = self.inner.event_tx.send(CardEvent::MediaFailed {
                        slot,
                        reason: e.to_string(),
                    });
                }
                return Err(e);
            }
        };

        let mut card = self.inner.card.write();
        if self.is_closed() {
            debug!(%slot, "Discarding media read completed after close");
            return Err(CardError::StoreClosed);
        }

        let patch = match slot {
            MediaSlot::Cover => CardPatch::new().cover(Some(media.clone())),
            MediaSlot::InnerImage => CardPatch::new().inner_page(PageContent {
                image: Some(media.clone()),
                text: card.inner_page.text.clone(),
            }),
            MediaSlot::Audio => CardPatch::new()
                .audio(Some(media.clone()))
                .use_preset_music(false),
        };

        let changed = patch.apply(&mut card);
        if !changed.is_empty() {
            self.notify_updated(&card, changed);
        }
        let _ = self.inner.event_tx.send(CardEvent::MediaBound {
            slot,
            media: media.clone(),
        });
        info!(%slot, %media, "Media bound");

        Ok(media)
    }

    fn notify_updated(&self, card: &CardData, changed: ChangedFields) {
        // No subscribers is fine
        let _ = self.inner.event_tx.send(CardEvent::Updated {
            snapshot: Arc::new(card.clone()),
            changed,
        });
    }
}

/// Handle to an in-flight media upload.
///
/// Dropping it does not cancel the read.
#[derive(Debug)]
pub struct MediaBinding {
    slot: MediaSlot,
    handle: JoinHandle<CardResult<MediaRef>>,
}

impl MediaBinding {
    pub fn slot(&self) -> MediaSlot {
        self.slot
    }

    /// Wait for the read to finish and report what was committed
    pub async fn finished(self) -> CardResult<MediaRef> {
        self.handle
            .await
            .map_err(|e| CardError::TaskJoin(e.to_string()))?
    }
}
