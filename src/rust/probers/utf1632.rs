use super::CharSetProber;
use crate::enums::ProbingState;

const MIN_CHARS_FOR_DETECTION: f64 = 20.0;
const EXPECTED_RATIO: f64 = 0.94;
const MIN_RATIO: f64 = 0.08;
const LIKELY_CONFIDENCE: f64 = 0.85;
const FOUND_THRESHOLD: f64 = 0.80;
/// Bytes after which an undecided prober gives up.
const GIVE_UP_AFTER: usize = 4 * 1024;

/// Spots BOM-less UTF-16 and UTF-32 from where the zero bytes sit.
///
/// Text in those encodings is dominated by code points below U+0100, so in
/// UTF-16LE nearly every odd byte is zero, in UTF-32BE three of every four
/// bytes are zero, and so on. Code units are also checked for validity so
/// that binary data with a similar zero pattern is not mistaken for text.
#[derive(Debug, Clone, Default)]
pub struct Utf1632Prober {
    position: usize,
    zeros_at_mod: [usize; 4],
    nonzeros_at_mod: [usize; 4],
    quad: [u8; 4],
    invalid_utf16be: bool,
    invalid_utf16le: bool,
    invalid_utf32be: bool,
    invalid_utf32le: bool,
    pending_surrogate_16be: bool,
    pending_surrogate_16le: bool,
    state: Option<ProbingState>,
}

fn is_high_surrogate(byte: u8) -> bool {
    (0xD8..=0xDB).contains(&byte)
}

fn is_low_surrogate(byte: u8) -> bool {
    (0xDC..=0xDF).contains(&byte)
}

impl Utf1632Prober {
    pub fn new() -> Self {
        Self::default()
    }

    fn approx_32bit_chars(&self) -> f64 {
        (self.position as f64 / 4.0).max(1.0)
    }

    fn approx_16bit_chars(&self) -> f64 {
        (self.position as f64 / 2.0).max(1.0)
    }

    fn is_likely_utf32be(&self) -> bool {
        let chars = self.approx_32bit_chars();
        if chars < MIN_CHARS_FOR_DETECTION {
            return false;
        }
        let z = &self.zeros_at_mod;
        let zero_ratio = (z[0] + z[1] + z[2]) as f64 / (chars * 3.0);
        let nonzero_ratio = self.nonzeros_at_mod[3] as f64 / chars;
        zero_ratio > MIN_RATIO * 3.0 && nonzero_ratio > EXPECTED_RATIO && !self.invalid_utf32be
    }

    fn is_likely_utf32le(&self) -> bool {
        let chars = self.approx_32bit_chars();
        if chars < MIN_CHARS_FOR_DETECTION {
            return false;
        }
        let z = &self.zeros_at_mod;
        let nonzero_ratio = self.nonzeros_at_mod[0] as f64 / chars;
        let zero_ratio = (z[1] + z[2] + z[3]) as f64 / (chars * 3.0);
        nonzero_ratio > EXPECTED_RATIO && zero_ratio > MIN_RATIO * 3.0 && !self.invalid_utf32le
    }

    fn is_likely_utf16be(&self) -> bool {
        let chars = self.approx_16bit_chars();
        if chars < MIN_CHARS_FOR_DETECTION {
            return false;
        }
        let nonzero_ratio = (self.nonzeros_at_mod[1] + self.nonzeros_at_mod[3]) as f64 / chars;
        let zero_ratio = (self.zeros_at_mod[0] + self.zeros_at_mod[2]) as f64 / chars;
        nonzero_ratio > EXPECTED_RATIO && zero_ratio > MIN_RATIO && !self.invalid_utf16be
    }

    fn is_likely_utf16le(&self) -> bool {
        let chars = self.approx_16bit_chars();
        if chars < MIN_CHARS_FOR_DETECTION {
            return false;
        }
        let nonzero_ratio = (self.nonzeros_at_mod[0] + self.nonzeros_at_mod[2]) as f64 / chars;
        let zero_ratio = (self.zeros_at_mod[1] + self.zeros_at_mod[3]) as f64 / chars;
        nonzero_ratio > EXPECTED_RATIO && zero_ratio > MIN_RATIO && !self.invalid_utf16le
    }

    /// Code points above U+10FFFF or in the surrogate range are invalid.
    fn validate_utf32(&mut self) {
        let q = self.quad;
        if q[0] != 0 || q[1] > 0x10 || (q[1] == 0 && is_surrogate_byte(q[2])) {
            self.invalid_utf32be = true;
        }
        if q[3] != 0 || q[2] > 0x10 || (q[2] == 0 && is_surrogate_byte(q[1])) {
            self.invalid_utf32le = true;
        }
    }

    /// Surrogates must come as a high half followed by a low half.
    fn validate_utf16(&mut self, pair: [u8; 2]) {
        let (be, le) = (pair[0], pair[1]);
        if !self.pending_surrogate_16be {
            if is_high_surrogate(be) {
                self.pending_surrogate_16be = true;
            } else if is_low_surrogate(be) {
                self.invalid_utf16be = true;
            }
        } else if is_low_surrogate(be) {
            self.pending_surrogate_16be = false;
        } else {
            self.invalid_utf16be = true;
        }

        if !self.pending_surrogate_16le {
            if is_high_surrogate(le) {
                self.pending_surrogate_16le = true;
            } else if is_low_surrogate(le) {
                self.invalid_utf16le = true;
            }
        } else if is_low_surrogate(le) {
            self.pending_surrogate_16le = false;
        } else {
            self.invalid_utf16le = true;
        }
    }

    fn is_likely_any(&self) -> bool {
        self.is_likely_utf16le()
            || self.is_likely_utf16be()
            || self.is_likely_utf32le()
            || self.is_likely_utf32be()
    }
}

fn is_surrogate_byte(byte: u8) -> bool {
    (0xD8..=0xDF).contains(&byte)
}

impl CharSetProber for Utf1632Prober {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn feed(&mut self, buf: &[u8]) -> ProbingState {
        for &byte in buf {
            let mod4 = self.position % 4;
            self.quad[mod4] = byte;
            if mod4 == 3 {
                self.validate_utf32();
                self.validate_utf16([self.quad[0], self.quad[1]]);
                self.validate_utf16([self.quad[2], self.quad[3]]);
            }
            if byte == 0 {
                self.zeros_at_mod[mod4] += 1;
            } else {
                self.nonzeros_at_mod[mod4] += 1;
            }
            self.position += 1;
        }
        if self.state.is_none() {
            if self.confidence() > FOUND_THRESHOLD {
                self.state = Some(ProbingState::FoundIt);
            } else if self.position > GIVE_UP_AFTER {
                self.state = Some(ProbingState::NotMe);
            }
        }
        self.state()
    }

    fn state(&self) -> ProbingState {
        self.state.unwrap_or(ProbingState::Detecting)
    }

    fn confidence(&self) -> f64 {
        if self.is_likely_any() {
            LIKELY_CONFIDENCE
        } else {
            0.0
        }
    }

    fn charset_name(&self) -> Option<&'static str> {
        let name = if self.is_likely_utf32be() {
            "utf-32be"
        } else if self.is_likely_utf32le() {
            "utf-32le"
        } else if self.is_likely_utf16be() {
            "utf-16be"
        } else if self.is_likely_utf16le() {
            "utf-16le"
        } else {
            "utf-16"
        };
        Some(name)
    }

    fn language(&self) -> Option<&'static str> {
        Some("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_utf16(text: &str, big_endian: bool) -> Vec<u8> {
        text.encode_utf16()
            .flat_map(|unit| if big_endian { unit.to_be_bytes() } else { unit.to_le_bytes() })
            .collect()
    }

    fn encode_utf32(text: &str, big_endian: bool) -> Vec<u8> {
        text.chars()
            .flat_map(|c| {
                let code = c as u32;
                if big_endian {
                    code.to_be_bytes()
                } else {
                    code.to_le_bytes()
                }
            })
            .collect()
    }

    const SAMPLE: &str = "The quick brown fox jumps over the lazy dog, again and again.";

    #[test]
    fn test_each_variant_is_named() {
        let cases = [
            (encode_utf16(SAMPLE, false), "utf-16le"),
            (encode_utf16(SAMPLE, true), "utf-16be"),
            (encode_utf32(SAMPLE, false), "utf-32le"),
            (encode_utf32(SAMPLE, true), "utf-32be"),
        ];
        for (bytes, expected) in cases {
            let mut prober = Utf1632Prober::new();
            assert_eq!(prober.feed(&bytes), ProbingState::FoundIt, "{}", expected);
            assert_eq!(prober.charset_name(), Some(expected));
            assert_eq!(prober.confidence(), LIKELY_CONFIDENCE);
        }
    }

    #[test]
    fn test_mostly_cjk_text() {
        // only about a quarter of the code units are ASCII
        let text = "東京の天気は晴れ 2024年10月 気温は25度です 明日は雨が降るでしょう 週末の予定を確認してください OK";
        for (big_endian, expected) in [(false, "utf-16le"), (true, "utf-16be")] {
            let mut prober = Utf1632Prober::new();
            assert_eq!(prober.feed(&encode_utf16(text, big_endian)), ProbingState::FoundIt);
            assert_eq!(prober.charset_name(), Some(expected));
        }
    }

    #[test]
    fn test_too_short_is_undecided() {
        let mut prober = Utf1632Prober::new();
        assert_eq!(prober.feed(&encode_utf16("short", false)), ProbingState::Detecting);
        assert_eq!(prober.confidence(), 0.0);
        assert_eq!(prober.charset_name(), Some("utf-16"));
    }

    #[test]
    fn test_unpaired_surrogate_is_invalid() {
        let mut bytes = encode_utf16(SAMPLE, false);
        // a lone low surrogate, U+DC00
        bytes.splice(0..0, [0x00, 0xDC, b'a', 0x00]);
        let mut prober = Utf1632Prober::new();
        prober.feed(&bytes);
        assert!(prober.invalid_utf16le);
        assert_ne!(prober.charset_name(), Some("utf-16le"));
    }

    #[test]
    fn test_plain_text_gives_up() {
        let mut prober = Utf1632Prober::new();
        let text = SAMPLE.repeat(80);
        assert_eq!(prober.feed(text.as_bytes()), ProbingState::NotMe);
        prober.reset();
        assert_eq!(prober.state(), ProbingState::Detecting);
    }
}
