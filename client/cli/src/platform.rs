//! Terminal implementations of the host-platform capability surface.
//!
//! The "gallery" is a path the user already chose on the command line; the
//! "camera" adds an interactive permission prompt in front of it.

use std::io::Write;
use std::path::PathBuf;

use labelscan_capture::{CameraCapture, GalleryPicker};
use labelscan_core::{AlertSink, ImageAsset};

use crate::render;

/// Gallery picker whose selection is the path given on the command line.
pub fn gallery_from_path(path: PathBuf) -> GalleryPicker {
    GalleryPicker::new(move |_| vec![ImageAsset::new(path.to_string_lossy())])
}

/// Camera capture that prompts for permission on the terminal and then
/// "shoots" the given path.
pub fn camera_from_path(path: PathBuf) -> CameraCapture {
    CameraCapture::new(prompt_permission, move |_| {
        Some(ImageAsset::new(path.to_string_lossy()))
    })
}

fn prompt_permission() -> bool {
    eprint!("Allow camera access? [y/N] ");
    std::io::stderr().flush().ok();
    let mut answer = String::new();
    if std::io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "y" | "Y" | "yes")
}

/// Modal alert rendered as a terminal error note.
pub struct TerminalAlert;

impl AlertSink for TerminalAlert {
    fn alert(&self, title: &str, message: &str) {
        render::note_error(&format!("{title}: {message}"));
    }
}
