use log::debug;

use super::{CharSetProber, SURE_NO, SURE_YES};
use crate::enums::{CharacterCategory, ProbingState, SequenceLikelihood};
use crate::filters;
use crate::models::SingleByteModel;

/// Orders below this take part in bigram statistics.
const SAMPLE_SIZE: u8 = 64;
const SB_ENOUGH_REL_THRESHOLD: u32 = 1024;
const POSITIVE_SHORTCUT_THRESHOLD: f64 = 0.95;
const NEGATIVE_SHORTCUT_THRESHOLD: f64 = 0.05;

/// Scores text against one language's letter-bigram model in one charset.
#[derive(Debug, Clone)]
pub struct SingleByteCharSetProber {
    model: &'static SingleByteModel,
    /// Look pairs up as (current, previous), for visually ordered text
    reversed: bool,
    state: ProbingState,
    last_order: u8,
    seq_counters: [u32; SequenceLikelihood::COUNT],
    total_seqs: u32,
    total_char: u32,
    freq_char: u32,
}

impl SingleByteCharSetProber {
    /// A prober reading in the direction the model's charset stores text.
    pub fn new(model: &'static SingleByteModel) -> Self {
        Self::with_direction(model, model.reversed)
    }

    /// A prober that reads every bigram backwards.
    pub fn reversed(model: &'static SingleByteModel) -> Self {
        Self::with_direction(model, true)
    }

    fn with_direction(model: &'static SingleByteModel, reversed: bool) -> Self {
        Self {
            model,
            reversed,
            state: ProbingState::Detecting,
            last_order: CharacterCategory::UNDEFINED,
            seq_counters: [0; SequenceLikelihood::COUNT],
            total_seqs: 0,
            total_char: 0,
            freq_char: 0,
        }
    }

    pub fn model(&self) -> &'static SingleByteModel {
        self.model
    }
}

impl CharSetProber for SingleByteCharSetProber {
    fn reset(&mut self) {
        *self = Self::with_direction(self.model, self.reversed);
    }

    fn feed(&mut self, buf: &[u8]) -> ProbingState {
        if self.state != ProbingState::Detecting {
            return self.state;
        }
        let buf = if self.model.keep_ascii_letters {
            filters::remove_xml_tags(buf)
        } else {
            filters::filter_international_words(buf)
        };
        if buf.is_empty() {
            return self.state;
        }

        let char_to_order = self.model.char_to_order_map;
        let language_model = self.model.language_model;
        for &byte in buf.iter() {
            let order = char_to_order[byte as usize];
            if order < CharacterCategory::CONTROL {
                self.total_char += 1;
            }
            if order < SAMPLE_SIZE {
                self.freq_char += 1;
                if self.last_order < SAMPLE_SIZE {
                    self.total_seqs += 1;
                    let (first, second) = if self.reversed {
                        (order, self.last_order)
                    } else {
                        (self.last_order, order)
                    };
                    let index = first as usize * SAMPLE_SIZE as usize + second as usize;
                    self.seq_counters[language_model[index] as usize] += 1;
                }
            }
            self.last_order = order;
        }

        if self.total_seqs > SB_ENOUGH_REL_THRESHOLD {
            let confidence = self.confidence();
            if confidence > POSITIVE_SHORTCUT_THRESHOLD {
                debug!(
                    "{} {} confidence = {}, we have a winner",
                    self.model.charset_name, self.model.language, confidence
                );
                self.state = ProbingState::FoundIt;
            } else if confidence < NEGATIVE_SHORTCUT_THRESHOLD {
                debug!(
                    "{} {} confidence = {}, below negative shortcut threshold {}",
                    self.model.charset_name,
                    self.model.language,
                    confidence,
                    NEGATIVE_SHORTCUT_THRESHOLD
                );
                self.state = ProbingState::NotMe;
            }
        }
        self.state
    }

    fn state(&self) -> ProbingState {
        self.state
    }

    fn confidence(&self) -> f64 {
        if self.total_seqs == 0 || self.total_char == 0 {
            return SURE_NO;
        }
        let positive = self.seq_counters[SequenceLikelihood::POSITIVE as usize] as f64;
        let ratio = positive / self.total_seqs as f64 / self.model.typical_positive_ratio;
        let confidence = ratio * self.freq_char as f64 / self.total_char as f64;
        confidence.min(SURE_YES)
    }

    fn charset_name(&self) -> Option<&'static str> {
        Some(self.model.charset_name)
    }

    fn language(&self) -> Option<&'static str> {
        Some(self.model.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SINGLE_BYTE_MODELS, WINDOWS_1255_HEBREW_MODEL};

    fn model(charset: &str, language: &str) -> &'static SingleByteModel {
        SINGLE_BYTE_MODELS
            .iter()
            .copied()
            .find(|m| m.charset_name == charset && m.language == language)
            .unwrap()
    }

    #[test]
    fn test_starts_unsure() {
        let prober = SingleByteCharSetProber::new(model("KOI8-R", "Russian"));
        assert_eq!(prober.confidence(), SURE_NO);
        assert_eq!(prober.charset_name(), Some("KOI8-R"));
        assert_eq!(prober.language(), Some("Russian"));
    }

    #[test]
    fn test_plain_ascii_is_filtered_for_non_latin_models() {
        let mut prober = SingleByteCharSetProber::new(model("Windows-1251", "Russian"));
        prober.feed(b"nothing but ascii here");
        assert_eq!(prober.total_char, 0);
        assert_eq!(prober.confidence(), SURE_NO);
    }

    #[test]
    fn test_markup_is_ignored_for_latin_models() {
        let mut with_tags = SingleByteCharSetProber::new(model("ISO-8859-1", "German"));
        let mut without = SingleByteCharSetProber::new(model("ISO-8859-1", "German"));
        with_tags.feed(b"<b>gr\xfc\xdfe</b>");
        without.feed(b"gr\xfc\xdfe ");
        assert_eq!(with_tags.total_seqs, without.total_seqs);
        assert_eq!(with_tags.confidence(), without.confidence());
    }

    #[test]
    fn test_last_order_carries_across_chunks() {
        let text = b"die Stra\xdfe und der Fu\xdfball";
        let mut whole = SingleByteCharSetProber::new(model("ISO-8859-1", "German"));
        whole.feed(text);
        let mut split = SingleByteCharSetProber::new(model("ISO-8859-1", "German"));
        split.feed(&text[..7]);
        split.feed(&text[7..]);
        assert_eq!(whole.total_seqs, split.total_seqs);
        assert_eq!(whole.confidence(), split.confidence());
    }

    #[test]
    fn test_reversed_reads_pairs_backwards() {
        let forward_text: Vec<u8> = b"\xf9\xec\xe5\xed \xf2\xec\xe9\xeb\xed ".to_vec();
        let backward_text: Vec<u8> = forward_text.iter().rev().copied().collect();
        let mut logical = SingleByteCharSetProber::new(&WINDOWS_1255_HEBREW_MODEL);
        let mut visual = SingleByteCharSetProber::reversed(&WINDOWS_1255_HEBREW_MODEL);
        logical.feed(&forward_text);
        visual.feed(&backward_text);
        assert_eq!(logical.seq_counters, visual.seq_counters);
    }

    #[test]
    fn test_reset() {
        let mut prober = SingleByteCharSetProber::new(model("ISO-8859-7", "Greek"));
        prober.feed(b"\xe1\xe8\xde\xed\xe1");
        prober.reset();
        assert_eq!(prober.total_seqs, 0);
        assert_eq!(prober.state(), ProbingState::Detecting);
    }
}
