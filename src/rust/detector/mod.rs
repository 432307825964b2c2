//! The streaming detector and the options and results around it.

mod config;
mod error;
mod result;
mod universal;

pub use config::{DetectorConfig, DEFAULT_CHUNK_SIZE, DEFAULT_MAX_BYTES};
pub use error::DetectError;
pub use result::DetectionResult;
pub use universal::UniversalDetector;
