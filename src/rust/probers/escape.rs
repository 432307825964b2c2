use log::debug;

use super::{CharSetProber, SURE_NO, SURE_YES};
use crate::enums::{LanguageFilter, MachineState, ProbingState};
use crate::statemachine::{
    CodingStateMachine, HZ_SM_MODEL, ISO2022CN_SM_MODEL, ISO2022JP_SM_MODEL, ISO2022KR_SM_MODEL,
};

/// Recognises the 7-bit encodings that switch character sets with escape
/// (or, for HZ, tilde) sequences.
#[derive(Debug, Clone)]
pub struct EscCharSetProber {
    machines: Vec<(CodingStateMachine, bool)>,
    active_count: usize,
    state: ProbingState,
    detected: Option<(&'static str, &'static str)>,
}

impl EscCharSetProber {
    pub fn new(filter: LanguageFilter) -> Self {
        let mut machines = Vec::new();
        if filter.contains(LanguageFilter::CHINESE_SIMPLIFIED) {
            machines.push(CodingStateMachine::new(&HZ_SM_MODEL));
            machines.push(CodingStateMachine::new(&ISO2022CN_SM_MODEL));
        }
        if filter.contains(LanguageFilter::JAPANESE) {
            machines.push(CodingStateMachine::new(&ISO2022JP_SM_MODEL));
        }
        if filter.contains(LanguageFilter::KOREAN) {
            machines.push(CodingStateMachine::new(&ISO2022KR_SM_MODEL));
        }
        let active_count = machines.len();
        Self {
            machines: machines.into_iter().map(|m| (m, true)).collect(),
            active_count,
            state: ProbingState::Detecting,
            detected: None,
        }
    }
}

impl CharSetProber for EscCharSetProber {
    fn reset(&mut self) {
        for (machine, active) in &mut self.machines {
            machine.reset();
            *active = true;
        }
        self.active_count = self.machines.len();
        self.state = ProbingState::Detecting;
        self.detected = None;
    }

    fn feed(&mut self, buf: &[u8]) -> ProbingState {
        if self.state != ProbingState::Detecting {
            return self.state;
        }
        if self.active_count == 0 {
            self.state = ProbingState::NotMe;
            return self.state;
        }
        for &byte in buf {
            for (machine, active) in self.machines.iter_mut().filter(|(_, active)| *active) {
                match machine.next_state(byte) {
                    MachineState::ERROR => {
                        debug!("{} escape machine ruled out", machine.name());
                        *active = false;
                        self.active_count -= 1;
                        if self.active_count == 0 {
                            self.state = ProbingState::NotMe;
                            return self.state;
                        }
                    }
                    MachineState::ITS_ME => {
                        self.state = ProbingState::FoundIt;
                        self.detected = Some((machine.name(), machine.language()));
                        return self.state;
                    }
                    _ => {}
                }
            }
        }
        self.state
    }

    fn state(&self) -> ProbingState {
        self.state
    }

    fn confidence(&self) -> f64 {
        if self.detected.is_some() {
            SURE_YES
        } else {
            SURE_NO
        }
    }

    fn charset_name(&self) -> Option<&'static str> {
        self.detected.map(|(name, _)| name)
    }

    fn language(&self) -> Option<&'static str> {
        self.detected.map(|(_, language)| language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso2022jp_is_found() {
        let mut prober = EscCharSetProber::new(LanguageFilter::ALL);
        // "日本" in ISO-2022-JP
        let state = prober.feed(b"Subject: \x1b$BF|K\\\x1b(B");
        assert_eq!(state, ProbingState::FoundIt);
        assert_eq!(prober.charset_name(), Some("ISO-2022-JP"));
        assert_eq!(prober.language(), Some("Japanese"));
        assert_eq!(prober.confidence(), SURE_YES);
    }

    #[test]
    fn test_filter_limits_machines() {
        let mut prober = EscCharSetProber::new(LanguageFilter::KOREAN);
        assert_eq!(prober.machines.len(), 1);
        prober.feed(b"\x1b$B");
        assert_ne!(prober.state(), ProbingState::FoundIt);
        assert_eq!(prober.charset_name(), None);
        assert_eq!(prober.confidence(), SURE_NO);
    }

    #[test]
    fn test_no_machines_is_not_me() {
        let mut prober = EscCharSetProber::new(LanguageFilter::NON_CJK);
        assert_eq!(prober.feed(b"\x1b"), ProbingState::NotMe);
    }

    #[test]
    fn test_reset_clears_detection() {
        let mut prober = EscCharSetProber::new(LanguageFilter::JAPANESE);
        prober.feed(b"\x1b$B");
        assert_eq!(prober.state(), ProbingState::FoundIt);
        prober.reset();
        assert_eq!(prober.state(), ProbingState::Detecting);
        assert_eq!(prober.charset_name(), None);
    }
}
