//! Scan session orchestration: one user action drives capture, upload, and
//! response handling against a single mutually-exclusive session.

pub mod controller;

pub use controller::{ScanController, ScanOutcome, ALERT_TITLE};
