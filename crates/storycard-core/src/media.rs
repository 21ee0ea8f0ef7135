//! Embedded-media conversion
//!
//! Turns a user-selected file into a self-contained `data:` URL. The
//! conversion runs off the calling interaction; [`crate::CardStore`] only
//! sees the finished reference or an error.

use std::future::Future;
use std::path::PathBuf;

use base64::Engine;
use tracing::debug;

use crate::error::{CardError, CardResult};
use crate::types::{MediaKind, MediaRef};

/// A file selected for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaFile {
    /// File on the local filesystem
    Path(PathBuf),
    /// Already-loaded content (drag and drop, tests)
    Bytes {
        /// Original file name, used to guess the mime type
        name: String,
        data: Vec<u8>,
    },
}

impl MediaFile {
    /// Display name of the file
    pub fn name(&self) -> String {
        match self {
            MediaFile::Path(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            MediaFile::Bytes { name, .. } => name.clone(),
        }
    }
}

impl From<PathBuf> for MediaFile {
    fn from(path: PathBuf) -> Self {
        MediaFile::Path(path)
    }
}

/// Converts a local file into an embeddable reference.
///
/// Implementations must not block the caller; the returned future is
/// driven on the async runtime.
pub trait MediaReader: Send + Sync + 'static {
    fn read(
        &self,
        file: MediaFile,
        kind: MediaKind,
    ) -> impl Future<Output = CardResult<MediaRef>> + Send;
}

/// Default reader producing base64 `data:` URLs
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUrlReader;

impl MediaReader for DataUrlReader {
    async fn read(&self, file: MediaFile, kind: MediaKind) -> CardResult<MediaRef> {
        let name = file.name();
        let data = match file {
            MediaFile::Path(path) => tokio::fs::read(&path)
                .await
                .map_err(|e| CardError::MediaRead(format!("{}: {}", name, e)))?,
            MediaFile::Bytes { data, .. } => data,
        };

        if data.is_empty() {
            return Err(CardError::EmptyMedia);
        }

        let mime = detect_mime(&name, &data, kind)?;
        debug!(%name, %mime, bytes = data.len(), "Encoded media file");
        Ok(MediaRef::from_data_url(encode_data_url(&mime, &data)))
    }
}

/// Encode bytes as `data:<mime>;base64,<payload>`
pub fn encode_data_url(mime: &str, data: &[u8]) -> String {
    let base64 = base64::engine::general_purpose::STANDARD.encode(data);
    format!("data:{};base64,{}", mime, base64)
}

/// Work out the mime type and check it matches the declared kind.
///
/// Images are sniffed from their content; audio relies on the file name,
/// the same way the picker's type filter does.
fn detect_mime(name: &str, data: &[u8], kind: MediaKind) -> CardResult<String> {
    let guessed = mime_guess::from_path(name).first();

    match kind {
        MediaKind::Image => match image::guess_format(data) {
            Ok(format) => Ok(format.to_mime_type().to_string()),
            Err(_) => Err(CardError::UnsupportedMedia {
                expected: kind,
                found: guessed
                    .map(|m| m.essence_str().to_string())
                    .unwrap_or_else(|| "unknown".to_string()),
            }),
        },
        MediaKind::Audio => match guessed {
            Some(mime) if mime.type_().as_str() == kind.mime_prefix() => {
                Ok(mime.essence_str().to_string())
            }
            Some(mime) => Err(CardError::UnsupportedMedia {
                expected: kind,
                found: mime.essence_str().to_string(),
            }),
            None => Err(CardError::UnsupportedMedia {
                expected: kind,
                found: "unknown".to_string(),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1x1 transparent PNG
    const PNG_1X1: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
        0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
        0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
        0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];

    #[test]
    fn test_encode_data_url() {
        assert_eq!(
            encode_data_url("audio/mpeg", &[0, 0]),
            "data:audio/mpeg;base64,AAA="
        );
    }

    #[tokio::test]
    async fn test_read_png_bytes() {
        let file = MediaFile::Bytes {
            name: "cover.png".into(),
            data: PNG_1X1.to_vec(),
        };
        let media = DataUrlReader.read(file, MediaKind::Image).await.unwrap();
        assert_eq!(media.mime_type(), Some("image/png"));
        assert_eq!(media.kind(), Some(MediaKind::Image));
    }

    #[tokio::test]
    async fn test_image_sniffed_despite_wrong_extension() {
        let file = MediaFile::Bytes {
            name: "cover.txt".into(),
            data: PNG_1X1.to_vec(),
        };
        let media = DataUrlReader.read(file, MediaKind::Image).await.unwrap();
        assert_eq!(media.mime_type(), Some("image/png"));
    }

    #[tokio::test]
    async fn test_read_audio_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("carol.mp3");
        std::fs::write(&path, [0u8, 0u8]).unwrap();

        let media = DataUrlReader
            .read(MediaFile::Path(path), MediaKind::Audio)
            .await
            .unwrap();
        assert_eq!(media.as_str(), "data:audio/mpeg;base64,AAA=");
    }

    #[tokio::test]
    async fn test_garbage_image_rejected() {
        let file = MediaFile::Bytes {
            name: "cover.png".into(),
            data: b"definitely not a png".to_vec(),
        };
        let err = DataUrlReader.read(file, MediaKind::Image).await.unwrap_err();
        assert!(matches!(err, CardError::UnsupportedMedia { expected: MediaKind::Image, .. }));
    }

    #[tokio::test]
    async fn test_image_as_audio_rejected() {
        let file = MediaFile::Bytes {
            name: "cover.png".into(),
            data: PNG_1X1.to_vec(),
        };
        let err = DataUrlReader.read(file, MediaKind::Audio).await.unwrap_err();
        assert!(err.is_media_read_failure());
    }

    #[tokio::test]
    async fn test_empty_file_rejected() {
        let file = MediaFile::Bytes {
            name: "silence.mp3".into(),
            data: Vec::new(),
        };
        let err = DataUrlReader.read(file, MediaKind::Audio).await.unwrap_err();
        assert!(matches!(err, CardError::EmptyMedia));
    }

    #[tokio::test]
    async fn test_missing_file_is_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = DataUrlReader
            .read(MediaFile::Path(dir.path().join("gone.mp3")), MediaKind::Audio)
            .await
            .unwrap_err();
        assert!(err.is_media_read_failure());
        match err {
            CardError::MediaRead(reason) => assert!(reason.starts_with("gone.mp3: ")),
            other => panic!("expected MediaRead, got {:?}", other),
        }
    }
}
