use super::tables::JP2_CHAR_CONTEXT;

const NUM_OF_CATEGORY: usize = 6;
const ENOUGH_REL_THRESHOLD: u32 = 100;
const MAX_REL_THRESHOLD: u32 = 1000;
const MINIMUM_DATA_THRESHOLD: u32 = 4;
/// Returned by [`ContextAnalyzer::confidence`] before there is enough data.
pub const DONT_KNOW: f64 = -1.0;

/// Byte layout of the Japanese text being scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextKind {
    Sjis,
    EucJp,
}

/// Scores how plausible consecutive hiragana pairs are.
///
/// Japanese prose is full of hiragana, and which hiragana follows which is
/// highly regular, so the pair table separates real Japanese from byte soup
/// long before the kanji frequency statistics settle.
#[derive(Debug, Clone)]
pub struct ContextAnalyzer {
    kind: ContextKind,
    rel_sample: [u32; NUM_OF_CATEGORY],
    total_rel: u32,
    last_char_order: Option<usize>,
    need_to_skip: usize,
    done: bool,
    saw_cp932: bool,
}

impl ContextAnalyzer {
    pub fn new(kind: ContextKind) -> Self {
        Self {
            kind,
            rel_sample: [0; NUM_OF_CATEGORY],
            total_rel: 0,
            last_char_order: None,
            need_to_skip: 0,
            done: false,
            saw_cp932: false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.kind);
    }

    pub fn kind(&self) -> ContextKind {
        self.kind
    }

    /// Scores the characters in the first `num_bytes` bytes of `buf`; bytes
    /// past that point are only used as lookahead. A character that runs
    /// past `num_bytes` is skipped, and so are its remaining bytes in the
    /// next call.
    pub fn feed(&mut self, buf: &[u8], num_bytes: usize) {
        if self.done {
            return;
        }
        let mut i = std::mem::take(&mut self.need_to_skip);
        while i < num_bytes && i < buf.len() {
            let end = (i + 2).min(buf.len());
            let (order, char_len) = self.order(&buf[i..end]);
            i += char_len;
            if i > num_bytes {
                self.need_to_skip = i - num_bytes;
                self.last_char_order = None;
                break;
            }
            if let (Some(order), Some(last)) = (order, self.last_char_order) {
                self.total_rel += 1;
                if self.total_rel > MAX_REL_THRESHOLD {
                    self.done = true;
                    break;
                }
                let category = JP2_CHAR_CONTEXT[last][order] as usize;
                self.rel_sample[category] += 1;
            }
            self.last_char_order = order;
        }
    }

    pub fn got_enough_data(&self) -> bool {
        self.total_rel > ENOUGH_REL_THRESHOLD
    }

    /// Share of hiragana pairs that are not implausible, or [`DONT_KNOW`].
    pub fn confidence(&self) -> f64 {
        if self.total_rel > MINIMUM_DATA_THRESHOLD {
            (self.total_rel - self.rel_sample[0]) as f64 / self.total_rel as f64
        } else {
            DONT_KNOW
        }
    }

    /// True once a lead byte only Microsoft's Shift_JIS extension uses has
    /// been seen.
    pub fn saw_cp932(&self) -> bool {
        self.saw_cp932
    }

    /// Hiragana order of the character starting `buf`, and its length.
    fn order(&mut self, buf: &[u8]) -> (Option<usize>, usize) {
        let Some(&first) = buf.first() else {
            return (None, 1);
        };
        let second = buf.get(1).copied();
        match self.kind {
            ContextKind::Sjis => {
                let char_len = match first {
                    0x81..=0x9F | 0xE0..=0xFC => 2,
                    _ => 1,
                };
                if first == 0x87 || (0xFA..=0xFC).contains(&first) {
                    self.saw_cp932 = true;
                }
                match second {
                    Some(b @ 0x9F..=0xF1) if first == 0x82 => (Some((b - 0x9F) as usize), char_len),
                    _ => (None, char_len),
                }
            }
            ContextKind::EucJp => {
                let char_len = match first {
                    0x8E | 0xA1..=0xFE => 2,
                    0x8F => 3,
                    _ => 1,
                };
                match second {
                    Some(b @ 0xA1..=0xF3) if first == 0xA4 => (Some((b - 0xA1) as usize), char_len),
                    _ => (None, char_len),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // "ありがとうございます" in EUC-JP
    const EUC_JP_THANKS: &[u8] = &[
        0xA4, 0xA2, 0xA4, 0xEA, 0xA4, 0xAC, 0xA4, 0xC8, 0xA4, 0xA6, 0xA4, 0xB4, 0xA4, 0xB6,
        0xA4, 0xA4, 0xA4, 0xDE, 0xA4, 0xB9,
    ];

    #[test]
    fn test_dont_know_without_data() {
        let analyzer = ContextAnalyzer::new(ContextKind::EucJp);
        assert_eq!(analyzer.confidence(), DONT_KNOW);
        assert!(!analyzer.got_enough_data());
    }

    #[test]
    fn test_hiragana_pairs_are_counted() {
        let mut analyzer = ContextAnalyzer::new(ContextKind::EucJp);
        analyzer.feed(EUC_JP_THANKS, EUC_JP_THANKS.len());
        assert_eq!(analyzer.total_rel, 9);
        let confidence = analyzer.confidence();
        assert!((0.0..=1.0).contains(&confidence));
    }

    #[test]
    fn test_enough_data_after_many_pairs() {
        let mut analyzer = ContextAnalyzer::new(ContextKind::EucJp);
        for _ in 0..20 {
            analyzer.feed(EUC_JP_THANKS, EUC_JP_THANKS.len());
        }
        assert!(analyzer.got_enough_data());
    }

    #[test]
    fn test_split_character_is_skipped() {
        let mut analyzer = ContextAnalyzer::new(ContextKind::EucJp);
        analyzer.feed(&[0xA4, 0xA2, 0xA4], 3);
        assert_eq!(analyzer.need_to_skip, 1);
        analyzer.feed(&[0xEA, 0xA4, 0xAC], 3);
        assert_eq!(analyzer.need_to_skip, 0);
        assert_eq!(analyzer.last_char_order, Some(0xAC - 0xA1));
        assert_eq!(analyzer.total_rel, 0);
    }

    #[test]
    fn test_sjis_hiragana_and_cp932_lead() {
        let mut analyzer = ContextAnalyzer::new(ContextKind::Sjis);
        // "あり" in Shift_JIS
        assert_eq!(analyzer.order(&[0x82, 0xA0]), (Some(1), 2));
        assert_eq!(analyzer.order(&[0x82, 0xE8]), (Some(73), 2));
        assert_eq!(analyzer.order(&[b'a', 0x82]), (None, 1));
        assert!(!analyzer.saw_cp932());
        analyzer.order(&[0xFA, 0x40]);
        assert!(analyzer.saw_cp932());
        analyzer.reset();
        assert!(!analyzer.saw_cp932());
    }
}
