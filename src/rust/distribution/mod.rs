//! Character frequency statistics for the multi-byte charsets.
//!
//! Each two-byte character is mapped to its order in the charset's code
//! table, the order is looked up in a frequency-rank table, and the rank
//! lands in one of four likelihood buckets.

mod context;
mod tables;

pub use context::{ContextAnalyzer, ContextKind, DONT_KNOW};

use crate::enums::SequenceLikelihood;

/// Ranks below this are common characters of the language.
const POSITIVE_RANK_THRESHOLD: u16 = 512;
/// Ranks below this (and at least the positive threshold) are plausible.
const LIKELY_RANK_THRESHOLD: u16 = 1024;
const ENOUGH_DATA_THRESHOLD: u32 = 1024;
const MINIMUM_DATA_THRESHOLD: u32 = 3;
const SURE_YES: f64 = 0.99;
const SURE_NO: f64 = 0.01;

/// Static frequency-rank table for one charset family.
#[derive(Debug)]
pub struct DistributionModel {
    /// Charset order to frequency rank (0 is the most frequent character)
    pub char_to_freq_order: &'static [u16],
    /// Number of orders covered by the table
    pub table_size: usize,
    /// Scales the bucket score to the charset's typical text
    pub typical_ratio: f64,
}

/// Which code layout a two-byte window is interpreted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionKind {
    Big5,
    EucTw,
    Gb2312,
    EucKr,
    Johab,
    Sjis,
    EucJp,
}

impl DistributionKind {
    fn model(self) -> &'static DistributionModel {
        match self {
            Self::Big5 => &tables::BIG5_DISTRIBUTION,
            Self::EucTw => &tables::EUCTW_DISTRIBUTION,
            Self::Gb2312 => &tables::GB2312_DISTRIBUTION,
            Self::EucKr | Self::Johab => &tables::EUCKR_DISTRIBUTION,
            Self::Sjis | Self::EucJp => &tables::JIS_DISTRIBUTION,
        }
    }

    /// Position of a two-byte character in the charset's code table, or
    /// `None` when the window is not a character the table tracks.
    fn order(self, first: u8, second: u8) -> Option<usize> {
        let (b0, b1) = (first as usize, second as usize);
        match self {
            Self::EucTw => (b0 >= 0xC4 && b1 >= 0xA1).then(|| 94 * (b0 - 0xC4) + b1 - 0xA1),
            Self::EucKr => (b0 >= 0xB0 && b1 >= 0xA1).then(|| 94 * (b0 - 0xB0) + b1 - 0xA1),
            Self::Gb2312 => (b0 >= 0xB0 && b1 >= 0xA1).then(|| 94 * (b0 - 0xB0) + b1 - 0xA1),
            Self::Big5 => {
                if b0 < 0xA4 || b1 < 0x40 {
                    None
                } else if b1 >= 0xA1 {
                    Some(157 * (b0 - 0xA4) + b1 - 0xA1 + 63)
                } else {
                    Some(157 * (b0 - 0xA4) + b1 - 0x40)
                }
            }
            Self::Sjis => {
                let row = match b0 {
                    0x81..=0x9F => 188 * (b0 - 0x81),
                    0xE0..=0xEF => 188 * (b0 - 0xE0 + 31),
                    _ => return None,
                };
                if b1 < 0x40 {
                    return None;
                }
                // 0x7F is never a trail byte, so the column skips it.
                let column = if b1 > 0x7F { b1 - 0x41 } else { b1 - 0x40 };
                Some(row + column)
            }
            Self::EucJp => (b0 >= 0xA1 && b1 >= 0xA1).then(|| 94 * (b0 - 0xA1) + b1 - 0xA1),
            Self::Johab => {
                if !(0x88..0xD4).contains(&b0) {
                    return None;
                }
                let code = (first as u16) << 8 | second as u16;
                tables::JOHAB_TO_EUCKR_ORDER
                    .binary_search_by_key(&code, |&(johab, _)| johab)
                    .ok()
                    .map(|index| tables::JOHAB_TO_EUCKR_ORDER[index].1 as usize)
            }
        }
    }
}

/// Running frequency statistics for one prober.
#[derive(Debug, Clone)]
pub struct DistributionAnalyzer {
    kind: DistributionKind,
    model: &'static DistributionModel,
    hits: [u32; SequenceLikelihood::COUNT],
    total_chars: u32,
}

impl DistributionAnalyzer {
    pub fn new(kind: DistributionKind) -> Self {
        Self {
            kind,
            model: kind.model(),
            hits: [0; SequenceLikelihood::COUNT],
            total_chars: 0,
        }
    }

    pub fn reset(&mut self) {
        self.hits = [0; SequenceLikelihood::COUNT];
        self.total_chars = 0;
    }

    /// Records one completed character. `window` holds the last two bytes
    /// seen when the state machine returned to START; only characters of
    /// length two carry frequency information.
    pub fn feed(&mut self, window: [u8; 2], char_len: usize) {
        if char_len != 2 {
            return;
        }
        let Some(order) = self.kind.order(window[0], window[1]) else {
            return;
        };
        self.total_chars += 1;
        let bucket = if order >= self.model.table_size {
            SequenceLikelihood::NEGATIVE
        } else {
            match self.model.char_to_freq_order.get(order) {
                Some(&rank) if rank < POSITIVE_RANK_THRESHOLD => SequenceLikelihood::POSITIVE,
                Some(&rank) if rank < LIKELY_RANK_THRESHOLD => SequenceLikelihood::LIKELY,
                Some(_) => SequenceLikelihood::UNLIKELY,
                None => SequenceLikelihood::NEGATIVE,
            }
        };
        self.hits[bucket as usize] += 1;
    }

    pub fn confidence(&self) -> f64 {
        if self.total_chars <= MINIMUM_DATA_THRESHOLD {
            return SURE_NO;
        }
        let positive = self.hits[SequenceLikelihood::POSITIVE as usize] as f64;
        let likely = self.hits[SequenceLikelihood::LIKELY as usize] as f64;
        let unlikely = self.hits[SequenceLikelihood::UNLIKELY as usize] as f64;
        let negative = self.hits[SequenceLikelihood::NEGATIVE as usize] as f64;
        let score = (positive + 0.25 * likely - unlikely - negative) / self.total_chars as f64;
        (score * self.model.typical_ratio).clamp(SURE_NO, SURE_YES)
    }

    pub fn got_enough_data(&self) -> bool {
        self.total_chars >= ENOUGH_DATA_THRESHOLD
    }

    pub fn total_chars(&self) -> u32 {
        self.total_chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(analyzer: &mut DistributionAnalyzer, bytes: &[u8]) {
        for pair in bytes.chunks_exact(2) {
            analyzer.feed([pair[0], pair[1]], 2);
        }
    }

    #[test]
    fn test_tables_cover_declared_size() {
        for kind in [
            DistributionKind::Big5,
            DistributionKind::EucTw,
            DistributionKind::Gb2312,
            DistributionKind::EucKr,
            DistributionKind::Sjis,
        ] {
            let model = kind.model();
            assert!(model.char_to_freq_order.len() >= model.table_size);
        }
        assert!(tables::JOHAB_TO_EUCKR_ORDER.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_too_little_data_is_sure_no() {
        let mut analyzer = DistributionAnalyzer::new(DistributionKind::Big5);
        // 的 in Big5 is AA BA
        feed_all(&mut analyzer, &[0xAA, 0xBA, 0xAA, 0xBA]);
        assert_eq!(analyzer.confidence(), SURE_NO);
    }

    #[test]
    fn test_frequent_big5_characters_score_high() {
        let mut analyzer = DistributionAnalyzer::new(DistributionKind::Big5);
        // 的 (AA BA), 一 (A4 40), 是 (AC 4F), 不 (A4 A3)
        let text = [0xAA, 0xBA, 0xA4, 0x40, 0xAC, 0x4F, 0xA4, 0xA3];
        for _ in 0..20 {
            feed_all(&mut analyzer, &text);
        }
        assert_eq!(analyzer.total_chars(), 80);
        assert!(analyzer.confidence() > 0.5);
    }

    #[test]
    fn test_single_byte_chars_are_ignored() {
        let mut analyzer = DistributionAnalyzer::new(DistributionKind::Gb2312);
        analyzer.feed([b'a', b'b'], 1);
        analyzer.feed([0xB0, 0xA1], 3);
        assert_eq!(analyzer.total_chars(), 0);
    }

    #[test]
    fn test_confidence_stays_in_range() {
        let mut analyzer = DistributionAnalyzer::new(DistributionKind::EucKr);
        for b0 in 0xB0..=0xC8u8 {
            for b1 in (0xA1..=0xFEu8).step_by(7) {
                analyzer.feed([b0, b1], 2);
            }
        }
        let confidence = analyzer.confidence();
        assert!((SURE_NO..=SURE_YES).contains(&confidence));
        analyzer.reset();
        assert_eq!(analyzer.total_chars(), 0);
    }

    #[test]
    fn test_sjis_order_skips_0x7f_column() {
        assert_eq!(DistributionKind::Sjis.order(0x81, 0x40), Some(0));
        assert_eq!(DistributionKind::Sjis.order(0x81, 0x7E), Some(0x3E));
        assert_eq!(DistributionKind::Sjis.order(0x81, 0x80), Some(0x3F));
        assert_eq!(DistributionKind::Sjis.order(0xA0, 0x80), None);
    }
}
