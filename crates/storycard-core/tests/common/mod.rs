//! Shared helpers for store integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::future::Future;

use parking_lot::Mutex;
use storycard_core::{CardError, CardResult, MediaFile, MediaKind, MediaReader, MediaRef};
use tokio::sync::oneshot;

/// Media reader whose reads finish only when the test says so.
///
/// Each file name is gated by a oneshot; the test decides completion
/// order by sending results in the order it wants.
#[derive(Default)]
pub struct ScriptedReader {
    pending: Mutex<HashMap<String, oneshot::Receiver<CardResult<MediaRef>>>>,
}

impl ScriptedReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a gate for `name` and get its completion handle
    pub fn gate(&self, name: &str) -> oneshot::Sender<CardResult<MediaRef>> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().insert(name.to_string(), rx);
        tx
    }
}

impl MediaReader for ScriptedReader {
    fn read(
        &self,
        file: MediaFile,
        _kind: MediaKind,
    ) -> impl Future<Output = CardResult<MediaRef>> + Send {
        let gate = self.pending.lock().remove(&file.name());
        async move {
            match gate {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(CardError::MediaRead("gate dropped".into()))),
                None => Err(CardError::MediaRead(format!("unscripted file {}", file.name()))),
            }
        }
    }
}

/// In-memory file with no content; the scripted reader only looks at the name
pub fn named(name: &str) -> MediaFile {
    MediaFile::Bytes {
        name: name.to_string(),
        data: Vec::new(),
    }
}

pub fn image_ref(tag: &str) -> MediaRef {
    MediaRef::from_data_url(format!("data:image/png;base64,{}", tag))
}

pub fn audio_ref(tag: &str) -> MediaRef {
    MediaRef::from_data_url(format!("data:audio/mpeg;base64,{}", tag))
}
