//! Client-side state for one capture-upload-display cycle.

use crate::score::compute_health_score;
use crate::types::{OcrLine, StructuredResult};

/// The unit of work for one scan attempt.
///
/// Exactly one session is live at a time. It is created idle at startup,
/// spans `busy = true` for the duration of a scan, and returns to idle on
/// every terminal path. Never persisted across process restarts.
#[derive(Debug, Clone, Default)]
pub struct ScanSession {
    /// URI of the captured image, set as soon as capture succeeds so the
    /// host can show the photo while analysis is still in flight.
    pub image_uri: Option<String>,
    /// Sole concurrency gate: true from trigger to terminal transition.
    pub busy: bool,
    /// Raw recognized lines, shown only when `structured` is absent.
    pub lines: Vec<OcrLine>,
    /// Parsed breakdown; when present the structured view is shown exclusively.
    pub structured: Option<StructuredResult>,
    /// Newline-joined recognized text, kept verbatim from the backend.
    pub full_text: Option<String>,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear previous results and mark the session in flight.
    ///
    /// Results are cleared before `busy` flips so a failed scan never shows
    /// stale data from the previous attempt.
    pub fn begin(&mut self) {
        self.lines.clear();
        self.structured = None;
        self.full_text = None;
        self.busy = true;
    }

    /// Locally derived health score; absent whenever `structured` is absent.
    pub fn health_score(&self) -> Option<u8> {
        compute_health_score(self.structured.as_ref())
    }
}
