//! HTTP client for the OCR/analysis backend.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use labelscan_core::{ScanBackend, ScanError, ScanResponse, UploadSource};

use crate::encoder::encode;

/// Response of the backend's root health probe.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendHealth {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub msg: String,
}

/// Client for the analysis endpoint.
///
/// The base URL is injected at construction (selected by deployment target),
/// never read from ambient global state, so the same pipeline runs against a
/// mock endpoint in tests.
pub struct OcrClient {
    base_url: String,
    http: reqwest::Client,
}

impl OcrClient {
    /// Build a client for the given base URL with an optional bounded
    /// request timeout (`None` leaves the request unbounded).
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ScanError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ScanError::Config(format!("http client: {e}")))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST the multipart payload to `/ocr` and decode the permissive
    /// JSON response.
    pub async fn upload_multipart(&self, source: UploadSource) -> Result<ScanResponse, ScanError> {
        let form = encode(source).await?;
        info!(base_url = %self.base_url, "uploading label image");
        let resp = self
            .http
            .post(format!("{}/ocr", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(map_transport)?;
        Self::decode(resp).await
    }

    /// POST raw image bytes to `/ocr-bytes`, for hosts with no multipart
    /// support. Same response contract as `/ocr`.
    pub async fn upload_bytes(&self, bytes: Vec<u8>) -> Result<ScanResponse, ScanError> {
        info!(base_url = %self.base_url, len = bytes.len(), "uploading raw image bytes");
        let resp = self
            .http
            .post(format!("{}/ocr-bytes", self.base_url))
            .body(bytes)
            .send()
            .await
            .map_err(map_transport)?;
        Self::decode(resp).await
    }

    /// Probe the backend root endpoint.
    pub async fn health(&self) -> Result<BackendHealth, ScanError> {
        let resp = self
            .http
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .map_err(map_transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScanError::Server { status: status.as_u16() });
        }
        resp.json()
            .await
            .map_err(|e| ScanError::Network(format!("invalid health body: {e}")))
    }

    async fn decode(resp: reqwest::Response) -> Result<ScanResponse, ScanError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(ScanError::Server { status: status.as_u16() });
        }
        let parsed: ScanResponse = resp
            .json()
            .await
            .map_err(|e| ScanError::Network(format!("invalid response body: {e}")))?;
        debug!(
            lines = parsed.lines.len(),
            structured = parsed.structured.is_some(),
            "scan response decoded"
        );
        Ok(parsed)
    }
}

fn map_transport(e: reqwest::Error) -> ScanError {
    ScanError::Network(e.to_string())
}

#[async_trait]
impl ScanBackend for OcrClient {
    async fn upload(&self, source: UploadSource) -> Result<ScanResponse, ScanError> {
        self.upload_multipart(source).await
    }
}
