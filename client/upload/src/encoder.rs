//! Multipart payload construction for one captured image.

use anyhow::anyhow;
use reqwest::multipart::{Form, Part};
use tokio_util::io::ReaderStream;
use tracing::debug;

use labelscan_core::{ScanError, UploadSource};

/// The single form field the backend reads.
pub const UPLOAD_FIELD: &str = "file";

/// Fixed filename attached to every upload. Byte-form sources lose the
/// original name, and the backend never looks at it anyway.
pub const UPLOAD_FILENAME: &str = "photo.jpg";

/// Fixed MIME type regardless of the original image format; a deliberate
/// simplification the backend tolerates.
pub const UPLOAD_MIME: &str = "image/jpeg";

/// Build the multipart/form-data payload for an image source.
///
/// `Bytes` sources are attached in-memory; `File` sources are streamed from
/// disk without intermediate buffering.
pub async fn encode(source: UploadSource) -> Result<Form, ScanError> {
    let part = match source {
        UploadSource::Bytes(bytes) => {
            debug!(len = bytes.len(), "encoding dereferenced image bytes");
            Part::bytes(bytes)
        }
        UploadSource::File(path) => {
            debug!(path = %path.display(), "encoding image as streamed file reference");
            let file = tokio::fs::File::open(&path)
                .await
                .map_err(|e| ScanError::Other(anyhow!("cannot open {}: {e}", path.display())))?;
            Part::stream(reqwest::Body::wrap_stream(ReaderStream::new(file)))
        }
    };

    let part = part
        .file_name(UPLOAD_FILENAME)
        .mime_str(UPLOAD_MIME)
        .map_err(|e| ScanError::Other(anyhow!(e)))?;

    Ok(Form::new().part(UPLOAD_FIELD, part))
}
