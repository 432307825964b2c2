use bitflags::bitflags;
use std::fmt;

/// Where a prober stands on the document it has seen so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbingState {
    /// Still collecting evidence
    Detecting,
    /// Positively identified, no more input needed
    FoundIt,
    /// Ruled out for this document
    NotMe,
}

/// How the universal detector has classified the input so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputState {
    /// Only 7-bit bytes without escape sequences
    PureAscii,
    /// 7-bit bytes including an ESC byte or a `~{` shift sequence
    EscAscii,
    /// At least one byte in 0x80..=0xFF
    HighByte,
}

/// Distinguished coding state machine states. Any other value is an
/// intermediate state private to one machine's table.
pub struct MachineState;

impl MachineState {
    pub const START: u8 = 0;
    pub const ERROR: u8 = 1;
    pub const ITS_ME: u8 = 2;
}

/// Buckets of the single-byte bigram likelihood matrix.
pub struct SequenceLikelihood;

impl SequenceLikelihood {
    pub const NEGATIVE: u8 = 0;
    pub const UNLIKELY: u8 = 1;
    pub const LIKELY: u8 = 2;
    pub const POSITIVE: u8 = 3;

    pub const COUNT: usize = 4;
}

/// Non-letter categories used by single-byte byte-to-order maps. Anything
/// below `CONTROL` is a letter rank.
pub struct CharacterCategory;

impl CharacterCategory {
    pub const UNDEFINED: u8 = 255;
    pub const LINE_BREAK: u8 = 254;
    pub const SYMBOL: u8 = 253;
    pub const DIGIT: u8 = 252;
    pub const CONTROL: u8 = 251;
}

bitflags! {
    /// Restricts which language families get probed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LanguageFilter: u8 {
        const CHINESE_SIMPLIFIED  = 0x01;
        const CHINESE_TRADITIONAL = 0x02;
        const JAPANESE            = 0x04;
        const KOREAN              = 0x08;
        const NON_CJK             = 0x10;
        const ALL                 = 0x1F;
        const CHINESE             = Self::CHINESE_SIMPLIFIED.bits() | Self::CHINESE_TRADITIONAL.bits();
        const CJK                 = Self::CHINESE.bits() | Self::JAPANESE.bits() | Self::KOREAN.bits();
    }
}

impl Default for LanguageFilter {
    fn default() -> Self {
        LanguageFilter::ALL
    }
}

bitflags! {
    /// Coarse usage era of a charset. Single-byte models are only loaded
    /// when their era is part of the configured set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EncodingEra: u8 {
        /// Encodings in common use on the web today
        const MODERN_WEB = 0b0001;
        /// Older ISO standards and Mac encodings
        const LEGACY     = 0b0010;
        /// DOS code pages
        const DOS        = 0b0100;
        /// EBCDIC code pages
        const MAINFRAME  = 0b1000;
        const ALL        = 0b1111;
    }
}

impl Default for EncodingEra {
    fn default() -> Self {
        EncodingEra::MODERN_WEB
    }
}

impl EncodingEra {
    /// Parses the names accepted on the command line and in the environment.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "modern_web" | "modern" | "web" => Some(EncodingEra::MODERN_WEB),
            "legacy" => Some(EncodingEra::LEGACY),
            "dos" => Some(EncodingEra::DOS),
            "mainframe" => Some(EncodingEra::MAINFRAME),
            "all" => Some(EncodingEra::ALL),
            _ => None,
        }
    }
}

impl fmt::Display for ProbingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Detecting => write!(f, "detecting"),
            Self::FoundIt => write!(f, "found it"),
            Self::NotMe => write!(f, "not me"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_filter_composites() {
        assert_eq!(LanguageFilter::CHINESE.bits(), 0x03);
        assert_eq!(LanguageFilter::CJK.bits(), 0x0F);
        assert!(LanguageFilter::ALL.contains(LanguageFilter::NON_CJK));
        assert!(!LanguageFilter::CJK.contains(LanguageFilter::NON_CJK));
    }

    #[test]
    fn test_era_parse() {
        assert_eq!(EncodingEra::parse("modern_web"), Some(EncodingEra::MODERN_WEB));
        assert_eq!(EncodingEra::parse("ALL"), Some(EncodingEra::ALL));
        assert_eq!(EncodingEra::parse("Legacy"), Some(EncodingEra::LEGACY));
        assert_eq!(EncodingEra::parse("sometime"), None);
        assert!(EncodingEra::ALL.contains(EncodingEra::DOS | EncodingEra::MAINFRAME));
    }
}
