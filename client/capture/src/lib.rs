//! Capture adapters — obtain a single label image from the host platform.
//!
//! Platform quirks (picker vs. permission-gated camera, blob dereferencing
//! vs. direct file references) live entirely in these adapters; the session
//! controller only sees the `CaptureAdapter` trait.

pub mod camera;
pub mod gallery;

pub use camera::{CameraCapture, CAPTURE_QUALITY};
pub use gallery::{GalleryPicker, PickOptions};
