use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single image obtained from the host platform's picker or camera.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    /// Platform URI of the image (file path, blob URI, content URI).
    pub uri: String,
}

impl ImageAsset {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

/// One recognized text line from the backend's OCR pass.
///
/// The backend sends lines in display order; the client never deduplicates
/// or re-sorts them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrLine {
    pub text: String,
    /// Recognition confidence in [0,1], when the backend reports one.
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl OcrLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), confidence: None }
    }
}

/// One parsed ingredient entry with an optional declared percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub percent: Option<f64>,
}

/// One detected additive: an E-number style code plus optional display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Additive {
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// The backend's parsed ingredient/allergen/additive breakdown.
///
/// Every field tolerates absence. An entirely absent `StructuredResult`
/// means "no structured data" and is distinct from an empty one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredResult {
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub additives: Vec<Additive>,
    /// Boolean signals keyed by name (e.g. "palmOil", "addedSugar").
    /// Flags outside the scoring table are still displayed.
    #[serde(default)]
    pub flags: HashMap<String, bool>,
}

/// Wire response from the analysis endpoint.
///
/// Decoding is permissive: absent fields fill with defaults, `structured: null`
/// and a missing `structured` both map to `None`, and unknown top-level or
/// nested fields are ignored rather than rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    #[serde(default)]
    pub lines: Vec<OcrLine>,
    #[serde(default)]
    pub structured: Option<StructuredResult>,
    /// Full recognized text, newline-joined by the backend.
    #[serde(default)]
    pub full_text: Option<String>,
}

/// Platform-specific byte access for a captured image URI.
///
/// Some hosts expose the image only through an in-memory blob reachable by
/// fetching the URI itself; those must dereference into `Bytes` before the
/// transport layer can attach it. Hosts whose URIs are plain file references
/// hand the path over directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadSource {
    /// URI already dereferenced into raw bytes. The byte form loses the
    /// original filename, so the encoder supplies the fixed one.
    Bytes(Vec<u8>),
    /// URI directly consumable as a file reference by the transport layer.
    File(PathBuf),
}
