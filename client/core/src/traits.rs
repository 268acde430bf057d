use async_trait::async_trait;

use crate::error::ScanError;
use crate::types::{ImageAsset, ScanResponse, UploadSource};

/// Capability for obtaining a single image from the host platform.
///
/// One implementation per platform (media-library picker, native camera);
/// the controller never branches on platform itself.
#[async_trait]
pub trait CaptureAdapter: Send + Sync {
    /// Human-readable adapter name used in logs.
    fn name(&self) -> &str;

    /// Acquire exactly one image.
    ///
    /// Returns `ScanError::Cancelled` when the user dismisses the surface
    /// without selecting, and `ScanError::PermissionDenied` when the host
    /// refuses camera access.
    async fn acquire_image(&self) -> Result<ImageAsset, ScanError>;

    /// Resolve the acquired asset into transport-ready form for this
    /// platform (dereferenced bytes or a direct file reference).
    async fn resolve_source(&self, asset: &ImageAsset) -> Result<UploadSource, ScanError>;
}

/// Capability for shipping an image to the analysis backend.
#[async_trait]
pub trait ScanBackend: Send + Sync {
    async fn upload(&self, source: UploadSource) -> Result<ScanResponse, ScanError>;
}

/// Modal alert surface owned by the host UI.
///
/// Every failure except user cancellation funnels through this single path.
pub trait AlertSink: Send + Sync {
    fn alert(&self, title: &str, message: &str);
}
