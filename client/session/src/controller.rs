//! The scan state machine: `Idle → Scanning → {Success, Cancelled, Failed} → Idle`.

use std::sync::Arc;

use tracing::{debug, info, warn};

use labelscan_core::{AlertSink, CaptureAdapter, ScanBackend, ScanError, ScanSession};

/// Title of the single user-facing failure alert.
pub const ALERT_TITLE: &str = "Scan failed";

/// Terminal result of one trigger of the scan action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Capture, upload, and decode all succeeded; results are populated.
    Completed,
    /// The user dismissed the capture surface. Silent no-op.
    Cancelled,
    /// Some stage failed; one alert was shown.
    Failed,
    /// A scan was already in flight; the trigger had no effect.
    Ignored,
}

/// Orchestrates one scan attempt at a time over the platform capture
/// adapter and the analysis backend.
///
/// The session's `busy` flag is the sole concurrency gate: triggers while a
/// scan is outstanding are ignored rather than queued or aborted.
pub struct ScanController {
    capture: Arc<dyn CaptureAdapter>,
    backend: Arc<dyn ScanBackend>,
    alerts: Arc<dyn AlertSink>,
    session: ScanSession,
}

impl ScanController {
    pub fn new(
        capture: Arc<dyn CaptureAdapter>,
        backend: Arc<dyn ScanBackend>,
        alerts: Arc<dyn AlertSink>,
    ) -> Self {
        Self { capture, backend, alerts, session: ScanSession::new() }
    }

    /// Current UI-facing state.
    pub fn session(&self) -> &ScanSession {
        &self.session
    }

    /// Run one scan in response to the user action.
    pub async fn scan(&mut self) -> ScanOutcome {
        if self.session.busy {
            debug!("scan already in flight, trigger ignored");
            return ScanOutcome::Ignored;
        }

        self.session.begin();
        let result = self.run_pipeline().await;
        // Terminal guarantee: busy resets on every path before any outcome
        // is reported, error or not.
        self.session.busy = false;

        match result {
            Ok(()) => {
                info!(
                    adapter = self.capture.name(),
                    score = ?self.session.health_score(),
                    lines = self.session.lines.len(),
                    "scan completed"
                );
                ScanOutcome::Completed
            }
            Err(err) if err.is_cancelled() => {
                debug!("scan cancelled by user");
                ScanOutcome::Cancelled
            }
            Err(err) => {
                warn!(error = %err, "scan failed");
                self.alerts.alert(ALERT_TITLE, &err.alert_message());
                ScanOutcome::Failed
            }
        }
    }

    async fn run_pipeline(&mut self) -> Result<(), ScanError> {
        let asset = self.capture.acquire_image().await?;
        // Set the photo immediately so the host can show it while the
        // analysis is still in flight. On later failure it stays in place;
        // results were already cleared by begin().
        self.session.image_uri = Some(asset.uri.clone());

        let source = self.capture.resolve_source(&asset).await?;
        let response = self.backend.upload(source).await?;

        self.session.lines = response.lines;
        self.session.structured = response.structured;
        self.session.full_text = response.full_text;
        Ok(())
    }
}
