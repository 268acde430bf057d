//! Media-library picker adapter.
//!
//! Used on platforms where camera access is restricted (browser security
//! models); opens the library picker directly with no permission gate.

use std::fmt;

use async_trait::async_trait;
use tracing::{debug, info};

use labelscan_core::{CaptureAdapter, ImageAsset, ScanError, UploadSource};

/// Picker options fixed by the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct PickOptions {
    /// Edit cropping is never offered before upload.
    pub allow_editing: bool,
}

impl Default for PickOptions {
    fn default() -> Self {
        Self { allow_editing: false }
    }
}

type PickFn = Box<dyn Fn(PickOptions) -> Vec<ImageAsset> + Send + Sync>;

/// Opens the host's media-library picker and hands back the selection.
///
/// The pick interaction itself is injected by the host; an empty selection
/// means the user dismissed the picker.
pub struct GalleryPicker {
    pick: PickFn,
}

impl GalleryPicker {
    pub fn new(pick: impl Fn(PickOptions) -> Vec<ImageAsset> + Send + Sync + 'static) -> Self {
        Self { pick: Box::new(pick) }
    }
}

impl fmt::Debug for GalleryPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GalleryPicker").finish_non_exhaustive()
    }
}

#[async_trait]
impl CaptureAdapter for GalleryPicker {
    fn name(&self) -> &str {
        "gallery"
    }

    async fn acquire_image(&self) -> Result<ImageAsset, ScanError> {
        let mut assets = (self.pick)(PickOptions::default());
        if assets.is_empty() {
            debug!("picker dismissed without a selection");
            return Err(ScanError::Cancelled);
        }
        if assets.len() > 1 {
            // Multi-selection is unsupported; extras are dropped.
            debug!(extra = assets.len() - 1, "picker returned multiple assets, using the first");
        }
        let asset = assets.remove(0);
        info!(uri = %asset.uri, "image selected from library");
        Ok(asset)
    }

    async fn resolve_source(&self, asset: &ImageAsset) -> Result<UploadSource, ScanError> {
        // Picker URIs on this platform are only reachable by fetching the
        // URI itself, so dereference into raw bytes before transport.
        let bytes = tokio::fs::read(&asset.uri).await.map_err(|e| {
            ScanError::Network(format!("could not dereference {}: {e}", asset.uri))
        })?;
        debug!(uri = %asset.uri, len = bytes.len(), "dereferenced picked image");
        Ok(UploadSource::Bytes(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_selection_is_cancelled() {
        let picker = GalleryPicker::new(|_| Vec::new());
        let err = picker.acquire_image().await.unwrap_err();
        assert!(err.is_cancelled());
    }

    #[tokio::test]
    async fn first_asset_wins() {
        let picker = GalleryPicker::new(|_| {
            vec![ImageAsset::new("first.jpg"), ImageAsset::new("second.jpg")]
        });
        let asset = picker.acquire_image().await.unwrap();
        assert_eq!(asset.uri, "first.jpg");
    }

    #[tokio::test]
    async fn editing_is_never_offered() {
        let picker = GalleryPicker::new(|opts| {
            assert!(!opts.allow_editing);
            vec![ImageAsset::new("label.jpg")]
        });
        picker.acquire_image().await.unwrap();
    }

    #[tokio::test]
    async fn resolves_into_bytes() {
        let path = std::env::temp_dir().join("labelscan-gallery-resolve-test.jpg");
        std::fs::write(&path, b"jpeg bytes").unwrap();

        let picker = GalleryPicker::new(|_| Vec::new());
        let asset = ImageAsset::new(path.to_string_lossy());
        match picker.resolve_source(&asset).await.unwrap() {
            UploadSource::Bytes(bytes) => assert_eq!(bytes, b"jpeg bytes"),
            other => panic!("expected bytes, got {other:?}"),
        }
        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn unreadable_uri_is_an_error() {
        let picker = GalleryPicker::new(|_| Vec::new());
        let asset = ImageAsset::new("/nonexistent/labelscan/blob");
        assert!(picker.resolve_source(&asset).await.is_err());
    }
}
