use log::debug;

use super::{
    CharSetProber, HebrewProber, MultiByteCharSetProber, SingleByteCharSetProber, Utf8Prober,
    SURE_NO, SURE_YES,
};
use crate::enums::{EncodingEra, LanguageFilter, ProbingState};
use crate::eras::encoding_era;
use crate::models::SINGLE_BYTE_MODELS;

/// Runs a list of probers side by side and reports the most confident.
pub struct CharSetGroupProber {
    probers: Vec<Box<dyn CharSetProber>>,
    active: Vec<bool>,
    active_num: usize,
    state: ProbingState,
    /// Member that reported FOUND_IT, once there is one
    locked: Option<usize>,
    /// Most confident active member after the last feed
    best_guess: Option<usize>,
}

impl CharSetGroupProber {
    pub fn new(probers: Vec<Box<dyn CharSetProber>>) -> Self {
        let active_num = probers.len();
        Self {
            active: vec![true; active_num],
            probers,
            active_num,
            state: ProbingState::Detecting,
            locked: None,
            best_guess: None,
        }
    }

    /// UTF-8 plus the CJK multi-byte probers admitted by `filter`.
    pub fn multi_byte(filter: LanguageFilter) -> Self {
        let mut probers: Vec<Box<dyn CharSetProber>> = vec![Box::new(Utf8Prober::new())];
        if filter.contains(LanguageFilter::JAPANESE) {
            probers.push(Box::new(MultiByteCharSetProber::shift_jis()));
            probers.push(Box::new(MultiByteCharSetProber::euc_jp()));
        }
        if filter.contains(LanguageFilter::CHINESE_SIMPLIFIED) {
            probers.push(Box::new(MultiByteCharSetProber::gb18030()));
        }
        if filter.contains(LanguageFilter::KOREAN) {
            probers.push(Box::new(MultiByteCharSetProber::euc_kr()));
            probers.push(Box::new(MultiByteCharSetProber::cp949()));
        }
        if filter.contains(LanguageFilter::CHINESE_TRADITIONAL) {
            probers.push(Box::new(MultiByteCharSetProber::big5()));
            probers.push(Box::new(MultiByteCharSetProber::euc_tw()));
        }
        if filter.contains(LanguageFilter::KOREAN) {
            probers.push(Box::new(MultiByteCharSetProber::johab()));
        }
        Self::new(probers)
    }

    /// Every single-byte model whose charset belongs to one of `eras`,
    /// followed by the Hebrew prober.
    pub fn single_byte(eras: EncodingEra) -> Self {
        let mut probers: Vec<Box<dyn CharSetProber>> = SINGLE_BYTE_MODELS
            .iter()
            .filter(|model| encoding_era(model.charset_name).intersects(eras))
            .map(|&model| Box::new(SingleByteCharSetProber::new(model)) as Box<dyn CharSetProber>)
            .collect();
        probers.push(Box::new(HebrewProber::new()));
        Self::new(probers)
    }

    /// The active member named `charset`, compared case-insensitively.
    pub fn find_active(&self, charset: &str) -> Option<&dyn CharSetProber> {
        self.probers
            .iter()
            .zip(&self.active)
            .filter(|(_, active)| **active)
            .map(|(prober, _)| prober.as_ref())
            .find(|prober| {
                prober
                    .charset_name()
                    .is_some_and(|name| name.eq_ignore_ascii_case(charset))
            })
    }

    fn current(&self) -> Option<&dyn CharSetProber> {
        self.locked
            .or(self.best_guess)
            .map(|index| self.probers[index].as_ref())
    }

    fn update_best_guess(&mut self) {
        let mut best: Option<(usize, f64)> = None;
        for (index, prober) in self.probers.iter().enumerate() {
            if !self.active[index] {
                continue;
            }
            let confidence = prober.confidence();
            if best.map_or(true, |(_, max)| confidence > max) {
                best = Some((index, confidence));
            }
        }
        self.best_guess = best.map(|(index, _)| index);
    }
}

impl CharSetProber for CharSetGroupProber {
    fn reset(&mut self) {
        for prober in &mut self.probers {
            prober.reset();
        }
        self.active.iter_mut().for_each(|active| *active = true);
        self.active_num = self.probers.len();
        self.state = ProbingState::Detecting;
        self.locked = None;
        self.best_guess = None;
    }

    fn feed(&mut self, buf: &[u8]) -> ProbingState {
        if self.state != ProbingState::Detecting {
            return self.state;
        }
        let mut found: Option<(usize, f64)> = None;
        for (index, prober) in self.probers.iter_mut().enumerate() {
            if !self.active[index] {
                continue;
            }
            match prober.feed(buf) {
                ProbingState::FoundIt => {
                    let confidence = prober.confidence();
                    if found.map_or(true, |(_, max)| confidence > max) {
                        found = Some((index, confidence));
                    }
                }
                ProbingState::NotMe => {
                    self.active[index] = false;
                    self.active_num -= 1;
                }
                ProbingState::Detecting => {}
            }
        }

        if let Some((index, confidence)) = found {
            debug!(
                "{:?} {:?} found with confidence {}",
                self.probers[index].charset_name(),
                self.probers[index].language(),
                confidence
            );
            self.locked = Some(index);
            self.best_guess = Some(index);
            self.state = ProbingState::FoundIt;
        } else if self.active_num == 0 {
            self.best_guess = None;
            self.state = ProbingState::NotMe;
        } else {
            self.update_best_guess();
        }
        self.state
    }

    fn state(&self) -> ProbingState {
        self.state
    }

    fn confidence(&self) -> f64 {
        match self.state {
            ProbingState::FoundIt => SURE_YES,
            ProbingState::NotMe => SURE_NO,
            ProbingState::Detecting => self.current().map_or(0.0, |prober| prober.confidence()),
        }
    }

    fn charset_name(&self) -> Option<&'static str> {
        self.current().and_then(|prober| prober.charset_name())
    }

    fn language(&self) -> Option<&'static str> {
        self.current().and_then(|prober| prober.language())
    }

    fn children(&self) -> &[Box<dyn CharSetProber>] {
        &self.probers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_byte_roster_follows_filter() {
        let all = CharSetGroupProber::multi_byte(LanguageFilter::ALL);
        let names: Vec<_> = all.children().iter().filter_map(|p| p.charset_name()).collect();
        assert_eq!(
            names,
            ["utf-8", "Shift_JIS", "EUC-JP", "GB18030", "EUC-KR", "CP949", "Big5", "EUC-TW", "Johab"]
        );
        let korean = CharSetGroupProber::multi_byte(LanguageFilter::KOREAN);
        let names: Vec<_> = korean.children().iter().filter_map(|p| p.charset_name()).collect();
        assert_eq!(names, ["utf-8", "EUC-KR", "CP949", "Johab"]);
    }

    #[test]
    fn test_single_byte_roster_follows_era() {
        let modern = CharSetGroupProber::single_byte(EncodingEra::MODERN_WEB);
        assert!(modern
            .children()
            .iter()
            .all(|p| p.charset_name() != Some("ISO-8859-1") && p.charset_name() != Some("CP850")));
        assert!(modern.find_active("windows-1252").is_some());
        assert_eq!(modern.children().last().and_then(|p| p.language()), Some("Hebrew"));

        let all = CharSetGroupProber::single_byte(EncodingEra::ALL);
        assert_eq!(all.children().len(), SINGLE_BYTE_MODELS.len() + 1);
    }

    #[test]
    fn test_members_that_rule_themselves_out_are_dropped() {
        let mut group = CharSetGroupProber::multi_byte(LanguageFilter::ALL);
        // "中文" in Big5 opens with a UTF-8 continuation byte
        group.feed(b"\xa4\xa4\xa4\xe5");
        assert!(group.find_active("utf-8").is_none());
        assert_eq!(group.state(), ProbingState::Detecting);
    }

    #[test]
    fn test_locks_onto_found_member() {
        let mut group = CharSetGroupProber::multi_byte(LanguageFilter::ALL);
        let text = "Ünïcödé tëxt wîth plénty of áccénts".as_bytes();
        assert_eq!(group.feed(text), ProbingState::FoundIt);
        assert_eq!(group.charset_name(), Some("utf-8"));
        assert_eq!(group.confidence(), SURE_YES);
        group.reset();
        assert_eq!(group.state(), ProbingState::Detecting);
        assert_eq!(group.charset_name(), None);
        assert_eq!(group.confidence(), 0.0);
    }
}
