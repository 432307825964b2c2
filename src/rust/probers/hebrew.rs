//! Logical versus visual Hebrew.
//!
//! Hebrew text is stored either in logical order (Windows-1255, the order
//! it is typed) or in visual order (ISO-8859-8, the order it is displayed,
//! i.e. reversed). Both use the same code points, so the letter model alone
//! only says "Hebrew". The direction comes from two sources:
//!
//! * final letter forms: five letters have a distinct form used only at
//!   the end of a word, so a final form before a space means logical text
//!   and a final form after a space means visual text;
//! * the same bigram model read forwards and backwards.
//!
//! Final-letter evidence wins when it is clear; otherwise the model with
//! the better score decides.

use super::{CharSetProber, SingleByteCharSetProber};
use crate::enums::ProbingState;
use crate::filters;
use crate::models::WINDOWS_1255_HEBREW_MODEL;

const FINAL_KAF: u8 = 0xEA;
const NORMAL_KAF: u8 = 0xEB;
const FINAL_MEM: u8 = 0xED;
const NORMAL_MEM: u8 = 0xEE;
const FINAL_NUN: u8 = 0xEF;
const NORMAL_NUN: u8 = 0xF0;
const FINAL_PE: u8 = 0xF3;
const NORMAL_PE: u8 = 0xF4;
const FINAL_TSADI: u8 = 0xF5;

/// Final-letter score difference that decides on its own.
const MIN_FINAL_CHAR_DISTANCE: i64 = 5;
/// Model confidence difference that decides when final letters do not.
const MIN_MODEL_DISTANCE: f64 = 0.01;

const VISUAL_HEBREW_NAME: &str = "ISO-8859-8";
const LOGICAL_HEBREW_NAME: &str = "Windows-1255";

const SPACE: u8 = b' ';

fn is_final(c: u8) -> bool {
    matches!(c, FINAL_KAF | FINAL_MEM | FINAL_NUN | FINAL_PE | FINAL_TSADI)
}

/// Tsadi is left out: its normal form legitimately ends some words in
/// logical text.
fn is_non_final(c: u8) -> bool {
    matches!(c, NORMAL_KAF | NORMAL_MEM | NORMAL_NUN | NORMAL_PE)
}

#[derive(Debug, Clone)]
pub struct HebrewProber {
    logical: SingleByteCharSetProber,
    visual: SingleByteCharSetProber,
    final_char_logical_score: i64,
    final_char_visual_score: i64,
    prev: u8,
    before_prev: u8,
}

impl HebrewProber {
    pub fn new() -> Self {
        Self {
            logical: SingleByteCharSetProber::new(&WINDOWS_1255_HEBREW_MODEL),
            visual: SingleByteCharSetProber::reversed(&WINDOWS_1255_HEBREW_MODEL),
            final_char_logical_score: 0,
            final_char_visual_score: 0,
            prev: SPACE,
            before_prev: SPACE,
        }
    }

    fn score_final_letters(&mut self, buf: &[u8]) {
        for &cur in filters::filter_high_byte_only(buf).iter() {
            if cur == SPACE {
                // A word just ended; one-letter words say nothing.
                if self.before_prev != SPACE {
                    if is_final(self.prev) {
                        self.final_char_logical_score += 1;
                    } else if is_non_final(self.prev) {
                        self.final_char_visual_score += 1;
                    }
                }
            } else if self.before_prev == SPACE && is_final(self.prev) {
                self.final_char_visual_score += 1;
            }
            self.before_prev = self.prev;
            self.prev = cur;
        }
    }
}

impl Default for HebrewProber {
    fn default() -> Self {
        Self::new()
    }
}

impl CharSetProber for HebrewProber {
    fn reset(&mut self) {
        self.logical.reset();
        self.visual.reset();
        self.final_char_logical_score = 0;
        self.final_char_visual_score = 0;
        self.prev = SPACE;
        self.before_prev = SPACE;
    }

    fn feed(&mut self, buf: &[u8]) -> ProbingState {
        if self.state() != ProbingState::Detecting {
            return self.state();
        }
        self.logical.feed(buf);
        self.visual.feed(buf);
        self.score_final_letters(buf);
        self.state()
    }

    fn state(&self) -> ProbingState {
        match (self.logical.state(), self.visual.state()) {
            (ProbingState::NotMe, ProbingState::NotMe) => ProbingState::NotMe,
            (ProbingState::FoundIt, _) | (_, ProbingState::FoundIt) => ProbingState::FoundIt,
            _ => ProbingState::Detecting,
        }
    }

    fn confidence(&self) -> f64 {
        self.logical.confidence().max(self.visual.confidence())
    }

    fn charset_name(&self) -> Option<&'static str> {
        let final_sub = self.final_char_logical_score - self.final_char_visual_score;
        if final_sub >= MIN_FINAL_CHAR_DISTANCE {
            return Some(LOGICAL_HEBREW_NAME);
        }
        if final_sub <= -MIN_FINAL_CHAR_DISTANCE {
            return Some(VISUAL_HEBREW_NAME);
        }
        let model_sub = self.logical.confidence() - self.visual.confidence();
        if model_sub > MIN_MODEL_DISTANCE {
            return Some(LOGICAL_HEBREW_NAME);
        }
        if model_sub < -MIN_MODEL_DISTANCE {
            return Some(VISUAL_HEBREW_NAME);
        }
        if final_sub < 0 {
            Some(VISUAL_HEBREW_NAME)
        } else {
            Some(LOGICAL_HEBREW_NAME)
        }
    }

    fn language(&self) -> Option<&'static str> {
        Some("Hebrew")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // "שלום עולם, מה נשמע? אני כותב לך מכתב ארוך" in Windows-1255
    const LOGICAL_TEXT: &[u8] = b"\xf9\xec\xe5\xed \xf2\xe5\xec\xed, \xee\xe4 \xf0\xf9\xee\xf2? \xe0\xf0\xe9 \xeb\xe5\xfa\xe1 \xec\xea \xee\xeb\xfa\xe1 \xe0\xf8\xe5\xea ";

    fn visual_text() -> Vec<u8> {
        LOGICAL_TEXT.iter().rev().copied().collect()
    }

    #[test]
    fn test_final_letters_mark_logical_text() {
        let mut prober = HebrewProber::new();
        for _ in 0..3 {
            prober.feed(LOGICAL_TEXT);
        }
        assert!(prober.final_char_logical_score >= MIN_FINAL_CHAR_DISTANCE);
        assert_eq!(prober.charset_name(), Some(LOGICAL_HEBREW_NAME));
        assert_eq!(prober.language(), Some("Hebrew"));
    }

    #[test]
    fn test_final_letters_mark_visual_text() {
        let mut prober = HebrewProber::new();
        let text = visual_text();
        for _ in 0..3 {
            prober.feed(&text);
        }
        assert!(prober.final_char_visual_score >= MIN_FINAL_CHAR_DISTANCE);
        assert_eq!(prober.charset_name(), Some(VISUAL_HEBREW_NAME));
    }

    #[test]
    fn test_confidence_is_best_of_both_directions() {
        let mut prober = HebrewProber::new();
        prober.feed(LOGICAL_TEXT);
        let expected = prober.logical.confidence().max(prober.visual.confidence());
        assert_eq!(prober.confidence(), expected);
        prober.reset();
        assert_eq!(prober.final_char_logical_score, 0);
        assert_eq!(prober.state(), ProbingState::Detecting);
    }
}
