//! Native camera adapter.
//!
//! Requests camera permission before opening the capture surface; a refusal
//! fails the scan with the canonical "Camera permission denied" message.

use std::fmt;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use labelscan_core::{CaptureAdapter, ImageAsset, ScanError, UploadSource};

/// Capture quality requested from the host camera: always maximum, the
/// backend handles any downscaling itself.
pub const CAPTURE_QUALITY: f64 = 1.0;

type PermissionFn = Box<dyn Fn() -> bool + Send + Sync>;
type ShutterFn = Box<dyn Fn(f64) -> Option<ImageAsset> + Send + Sync>;

/// Permission-gated camera capture on platforms with native camera access.
pub struct CameraCapture {
    request_permission: PermissionFn,
    capture: ShutterFn,
}

impl CameraCapture {
    pub fn new(
        request_permission: impl Fn() -> bool + Send + Sync + 'static,
        capture: impl Fn(f64) -> Option<ImageAsset> + Send + Sync + 'static,
    ) -> Self {
        Self {
            request_permission: Box::new(request_permission),
            capture: Box::new(capture),
        }
    }
}

impl fmt::Debug for CameraCapture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CameraCapture").finish_non_exhaustive()
    }
}

#[async_trait]
impl CaptureAdapter for CameraCapture {
    fn name(&self) -> &str {
        "camera"
    }

    async fn acquire_image(&self) -> Result<ImageAsset, ScanError> {
        if !(self.request_permission)() {
            warn!("camera permission refused by host");
            return Err(ScanError::camera_denied());
        }

        match (self.capture)(CAPTURE_QUALITY) {
            Some(asset) => {
                info!(uri = %asset.uri, "image captured");
                Ok(asset)
            }
            None => {
                debug!("camera dismissed without a capture");
                Err(ScanError::Cancelled)
            }
        }
    }

    async fn resolve_source(&self, asset: &ImageAsset) -> Result<UploadSource, ScanError> {
        // Camera URIs on this platform are plain file references the
        // transport layer can stream directly.
        Ok(UploadSource::File(PathBuf::from(&asset.uri)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn refusal_is_permission_denied() {
        let camera = CameraCapture::new(|| false, |_| Some(ImageAsset::new("x.jpg")));
        let err = camera.acquire_image().await.unwrap_err();
        assert_eq!(err.to_string(), "Camera permission denied");
    }

    #[tokio::test]
    async fn dismissal_is_cancelled() {
        let camera = CameraCapture::new(|| true, |_| None);
        assert!(camera.acquire_image().await.unwrap_err().is_cancelled());
    }

    #[tokio::test]
    async fn captures_at_maximum_quality() {
        let camera = CameraCapture::new(
            || true,
            |quality| {
                assert_eq!(quality, CAPTURE_QUALITY);
                Some(ImageAsset::new("shot.jpg"))
            },
        );
        let asset = camera.acquire_image().await.unwrap();
        assert_eq!(asset.uri, "shot.jpg");
    }

    #[tokio::test]
    async fn resolves_as_direct_file_reference() {
        let camera = CameraCapture::new(|| true, |_| None);
        let asset = ImageAsset::new("/var/media/shot.jpg");
        match camera.resolve_source(&asset).await.unwrap() {
            UploadSource::File(path) => assert_eq!(path, PathBuf::from("/var/media/shot.jpg")),
            other => panic!("expected file reference, got {other:?}"),
        }
    }
}
