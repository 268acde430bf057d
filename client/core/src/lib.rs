pub mod error;
pub mod score;
pub mod session;
pub mod traits;
pub mod types;

pub use error::ScanError;
pub use score::compute_health_score;
pub use session::ScanSession;
pub use traits::{AlertSink, CaptureAdapter, ScanBackend};
pub use types::{
    Additive, ImageAsset, Ingredient, OcrLine, ScanResponse, StructuredResult, UploadSource,
};
