//! Universal character encoding detection.
//!
//! Given bytes with no metadata, `charprobe` guesses which character
//! encoding produced them and, where the encoding alone does not say, which
//! language the text is in. The answer comes with a confidence score; it is
//! a heuristic, never a guarantee.
//!
//! # Basic Usage
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use charprobe::{detect, DetectorConfig};
//!
//! let result = detect(b"Hello, world!", &DetectorConfig::default())?;
//! assert_eq!(result.encoding, Some("ascii"));
//! assert_eq!(result.confidence, 1.0);
//!
//! let result = detect("Grüße aus Köln, schöne Straße".as_bytes(), &DetectorConfig::default())?;
//! assert_eq!(result.encoding, Some("utf-8"));
//! # Ok(())
//! # }
//! ```
//!
//! # Streaming
//!
//! Large or incrementally received documents can be fed piece by piece
//! through a [`UniversalDetector`]; it stops asking for input as soon as it
//! is sure:
//!
//! ```rust
//! use charprobe::{DetectorConfig, UniversalDetector};
//!
//! let mut detector = UniversalDetector::new(DetectorConfig::default());
//! for chunk in [&b"\xEF\xBB\xBF"[..], b"more text"] {
//!     detector.feed(chunk);
//!     if detector.is_done() {
//!         break;
//!     }
//! }
//! assert_eq!(detector.close().encoding, Some("UTF-8-SIG"));
//! ```
//!
//! # Thread Safety
//!
//! The statistical tables are immutable statics shared by every detector.
//! A detector owns all of its mutable state, so independent detections run
//! on separate threads without locking, and a detector can be moved to
//! another thread:
//!
//! ```rust
//! use charprobe::{detect, DetectorConfig};
//! use std::thread;
//!
//! let handles: Vec<_> = (0..3)
//!     .map(|_| thread::spawn(|| detect(b"plain text", &DetectorConfig::default())))
//!     .collect();
//! for handle in handles {
//!     let result = handle.join().unwrap().unwrap();
//!     assert_eq!(result.encoding, Some("ascii"));
//! }
//! ```

pub mod detector;
pub mod distribution;
pub mod enums;
mod eras;
pub mod filters;
pub mod models;
pub mod probers;
pub mod statemachine;

pub use detector::{DetectError, DetectionResult, DetectorConfig, UniversalDetector};
pub use enums::{EncodingEra, InputState, LanguageFilter, ProbingState};
pub use eras::encoding_era;
pub use probers::CharSetProber;

pub fn init_logger() {
    env_logger::init();
}

fn run(bytes: &[u8], config: &DetectorConfig) -> Result<UniversalDetector, DetectError> {
    config.validate()?;
    let mut detector = UniversalDetector::new(config.clone());
    for chunk in bytes.chunks(config.chunk_size) {
        detector.feed(chunk);
        if detector.is_done() {
            break;
        }
    }
    detector.close();
    Ok(detector)
}

/// Detects the encoding of a complete document.
///
/// The input is fed in `config.chunk_size` pieces and examination stops
/// after `config.max_bytes`. Fails only when `config` is unusable.
pub fn detect(bytes: &[u8], config: &DetectorConfig) -> Result<DetectionResult, DetectError> {
    Ok(run(bytes, config)?.result())
}

/// Every encoding that plausibly fits the document, most confident first.
///
/// The first entry is always what [`detect`] returns for the same input
/// and configuration. Candidates at or below the 0.20 reporting threshold
/// are left out unless `ignore_threshold` is set.
pub fn detect_all(
    bytes: &[u8],
    config: &DetectorConfig,
    ignore_threshold: bool,
) -> Result<Vec<DetectionResult>, DetectError> {
    Ok(run(bytes, config)?.candidates(ignore_threshold))
}
