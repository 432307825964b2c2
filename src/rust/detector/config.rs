use log::warn;
use std::env;

use super::DetectError;
use crate::enums::{EncodingEra, LanguageFilter};

pub const DEFAULT_CHUNK_SIZE: usize = 65_536;
pub const DEFAULT_MAX_BYTES: usize = 200_000;

/// Tuning knobs for a detection run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorConfig {
    pub language_filter: LanguageFilter,
    pub encoding_era: EncodingEra,
    /// Replace legacy names with their modern supersets. `None` renames
    /// only when `encoding_era` is exactly `MODERN_WEB`.
    pub should_rename_legacy: Option<bool>,
    /// Bytes handed to the detector per `feed` by [`crate::detect`]
    pub chunk_size: usize,
    /// The detector stops looking once it has seen more than this many bytes
    pub max_bytes: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            language_filter: LanguageFilter::ALL,
            encoding_era: EncodingEra::MODERN_WEB,
            should_rename_legacy: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

impl DetectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `CHARPROBE_MAX_BYTES`, `CHARPROBE_CHUNK_SIZE`
    /// and `CHARPROBE_ENCODING_ERA` where those are set and parse.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(max_bytes) = env_usize("CHARPROBE_MAX_BYTES") {
            config.max_bytes = max_bytes;
        }
        if let Some(chunk_size) = env_usize("CHARPROBE_CHUNK_SIZE") {
            config.chunk_size = chunk_size;
        }
        if let Ok(value) = env::var("CHARPROBE_ENCODING_ERA") {
            match EncodingEra::parse(&value) {
                Some(era) => config.encoding_era = era,
                None => warn!(
                    "Ignoring CHARPROBE_ENCODING_ERA={:?}: expected modern_web, legacy, dos, mainframe or all",
                    value
                ),
            }
        }
        config
    }

    pub fn with_language_filter(mut self, filter: LanguageFilter) -> Self {
        self.language_filter = filter;
        self
    }

    pub fn with_encoding_era(mut self, era: EncodingEra) -> Self {
        self.encoding_era = era;
        self
    }

    pub fn with_rename_legacy(mut self, rename: bool) -> Self {
        self.should_rename_legacy = Some(rename);
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Whether legacy names get renamed, with the era default applied.
    pub fn rename_legacy(&self) -> bool {
        self.should_rename_legacy
            .unwrap_or(self.encoding_era == EncodingEra::MODERN_WEB)
    }

    pub fn validate(&self) -> Result<(), DetectError> {
        if self.chunk_size == 0 {
            return Err(DetectError::InvalidInput("chunk_size must be greater than 0".into()));
        }
        if self.max_bytes == 0 {
            return Err(DetectError::InvalidInput("max_bytes must be greater than 0".into()));
        }
        if self.language_filter.is_empty() {
            return Err(DetectError::InvalidInput(
                "language_filter must select at least one language family".into(),
            ));
        }
        if self.encoding_era.is_empty() {
            return Err(DetectError::InvalidInput(
                "encoding_era must select at least one era".into(),
            ));
        }
        Ok(())
    }
}

fn env_usize(key: &str) -> Option<usize> {
    let value = env::var(key).ok()?;
    match value.trim().parse::<usize>() {
        Ok(parsed) if parsed > 0 => Some(parsed),
        _ => {
            warn!("Ignoring {}={:?}: expected a positive integer", key, value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DetectorConfig::default();
        assert_eq!(config.chunk_size, 65_536);
        assert_eq!(config.max_bytes, 200_000);
        assert_eq!(config.language_filter, LanguageFilter::ALL);
        assert_eq!(config.encoding_era, EncodingEra::MODERN_WEB);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rename_follows_era_unless_set() {
        assert!(DetectorConfig::default().rename_legacy());
        assert!(!DetectorConfig::default().with_encoding_era(EncodingEra::ALL).rename_legacy());
        assert!(DetectorConfig::default()
            .with_encoding_era(EncodingEra::ALL)
            .with_rename_legacy(true)
            .rename_legacy());
        assert!(!DetectorConfig::default().with_rename_legacy(false).rename_legacy());
        // MODERN_WEB combined with anything else is no longer the plain default
        assert!(!DetectorConfig::default()
            .with_encoding_era(EncodingEra::MODERN_WEB | EncodingEra::LEGACY)
            .rename_legacy());
    }

    #[test]
    fn test_validate_rejects_degenerate_options() {
        let cases = [
            DetectorConfig::default().with_chunk_size(0),
            DetectorConfig::default().with_max_bytes(0),
            DetectorConfig::default().with_language_filter(LanguageFilter::empty()),
            DetectorConfig::default().with_encoding_era(EncodingEra::empty()),
        ];
        for config in cases {
            assert!(matches!(config.validate(), Err(DetectError::InvalidInput(_))), "{:?}", config);
        }
    }

    #[test]
    fn test_from_env() {
        env::set_var("CHARPROBE_MAX_BYTES", "4096");
        env::set_var("CHARPROBE_CHUNK_SIZE", "not a number");
        env::set_var("CHARPROBE_ENCODING_ERA", "legacy");
        let config = DetectorConfig::from_env();
        env::remove_var("CHARPROBE_MAX_BYTES");
        env::remove_var("CHARPROBE_CHUNK_SIZE");
        env::remove_var("CHARPROBE_ENCODING_ERA");

        assert_eq!(config.max_bytes, 4096);
        assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
        assert_eq!(config.encoding_era, EncodingEra::LEGACY);
    }
}
