use thiserror::Error;

/// Fallback alert body when an error somehow carries no message.
pub const GENERIC_ALERT_MESSAGE: &str = "Something went wrong";

/// Top-level error type for the LabelScan client pipeline.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The user dismissed the picker/camera without choosing an image.
    /// A silent no-op for the caller, never surfaced as an alert.
    #[error("capture cancelled by user")]
    Cancelled,

    #[error("{0}")]
    PermissionDenied(String),

    /// Transport-level failure (DNS, connection refused, timeout).
    #[error("{0}")]
    Network(String),

    /// Non-success HTTP status from the analysis endpoint.
    #[error("Server error: {status}")]
    Server { status: u16 },

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScanError {
    /// The canonical camera-permission refusal.
    pub fn camera_denied() -> Self {
        Self::PermissionDenied("Camera permission denied".to_string())
    }

    /// True for the silent user-abort case.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Body text for the user-facing alert.
    pub fn alert_message(&self) -> String {
        let msg = self.to_string();
        if msg.is_empty() {
            GENERIC_ALERT_MESSAGE.to_string()
        } else {
            msg
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_message_format() {
        let err = ScanError::Server { status: 500 };
        assert_eq!(err.to_string(), "Server error: 500");
    }

    #[test]
    fn camera_denied_message() {
        assert_eq!(ScanError::camera_denied().to_string(), "Camera permission denied");
    }

    #[test]
    fn only_cancelled_is_silent() {
        assert!(ScanError::Cancelled.is_cancelled());
        assert!(!ScanError::Network("refused".into()).is_cancelled());
        assert!(!ScanError::Server { status: 502 }.is_cancelled());
    }
}
