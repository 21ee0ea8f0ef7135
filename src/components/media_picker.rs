//! Media Picker
//!
//! Native file dialog for card uploads, filtered by the slot's media kind.

use std::path::PathBuf;

use rfd::FileDialog;
use storycard_core::{MediaKind, MediaSlot};

/// Ask the user for a file for `slot`.
///
/// Blocks until the dialog closes; run it on a blocking task.
pub fn pick_media_file(slot: MediaSlot) -> Option<PathBuf> {
    let kind = slot.media_kind();
    let (filter_name, title) = match kind {
        MediaKind::Image => ("images", "Select Image"),
        MediaKind::Audio => ("audio", "Select Audio"),
    };

    FileDialog::new()
        .add_filter(filter_name, kind.picker_extensions())
        .set_title(title)
        .pick_file()
}
