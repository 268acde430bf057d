//! Upload packaging and the HTTP client for the analysis backend.

pub mod client;
pub mod encoder;

pub use client::{BackendHealth, OcrClient};
pub use encoder::{encode, UPLOAD_FIELD, UPLOAD_FILENAME, UPLOAD_MIME};
