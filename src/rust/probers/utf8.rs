use log::debug;

use super::{CharSetProber, SHORTCUT_THRESHOLD, SURE_YES};
use crate::enums::{MachineState, ProbingState};
use crate::statemachine::{CodingStateMachine, UTF8_SM_MODEL};

const ONE_CHAR_PROB: f64 = 0.5;
/// After this many multi-byte characters the confidence saturates.
const SATURATION_CHARS: u32 = 6;

/// Validates UTF-8 and gains confidence with every multi-byte character.
#[derive(Debug, Clone)]
pub struct Utf8Prober {
    machine: CodingStateMachine,
    state: ProbingState,
    num_mb_chars: u32,
}

impl Utf8Prober {
    pub fn new() -> Self {
        Self {
            machine: CodingStateMachine::new(&UTF8_SM_MODEL),
            state: ProbingState::Detecting,
            num_mb_chars: 0,
        }
    }
}

impl Default for Utf8Prober {
    fn default() -> Self {
        Self::new()
    }
}

impl CharSetProber for Utf8Prober {
    fn reset(&mut self) {
        self.machine.reset();
        self.state = ProbingState::Detecting;
        self.num_mb_chars = 0;
    }

    fn feed(&mut self, buf: &[u8]) -> ProbingState {
        if self.state != ProbingState::Detecting {
            return self.state;
        }
        for (i, &byte) in buf.iter().enumerate() {
            match self.machine.next_state(byte) {
                MachineState::ERROR => {
                    debug!("utf-8 prober hit error at byte {}", i);
                    self.state = ProbingState::NotMe;
                    break;
                }
                MachineState::ITS_ME => {
                    self.state = ProbingState::FoundIt;
                    break;
                }
                MachineState::START if self.machine.current_char_len() >= 2 => {
                    self.num_mb_chars += 1;
                }
                _ => {}
            }
        }
        if self.state == ProbingState::Detecting && self.confidence() > SHORTCUT_THRESHOLD {
            self.state = ProbingState::FoundIt;
        }
        self.state
    }

    fn state(&self) -> ProbingState {
        self.state
    }

    fn confidence(&self) -> f64 {
        if self.num_mb_chars < SATURATION_CHARS {
            1.0 - SURE_YES * ONE_CHAR_PROB.powi(self.num_mb_chars as i32)
        } else {
            SURE_YES
        }
    }

    fn charset_name(&self) -> Option<&'static str> {
        Some("utf-8")
    }

    fn language(&self) -> Option<&'static str> {
        Some("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_only_is_low_confidence() {
        let mut prober = Utf8Prober::new();
        assert_eq!(prober.feed(b"hello world"), ProbingState::Detecting);
        assert!((prober.confidence() - 0.01).abs() < 1e-9);
    }

    #[test]
    fn test_multibyte_chars_raise_confidence() {
        let mut prober = Utf8Prober::new();
        prober.feed("né".as_bytes());
        assert!((prober.confidence() - 0.505).abs() < 1e-9);
        prober.feed("ü ö ä ß".as_bytes());
        assert_eq!(prober.state(), ProbingState::FoundIt);
        assert!(prober.confidence() > SHORTCUT_THRESHOLD);
    }

    #[test]
    fn test_invalid_sequence_rules_out() {
        let mut prober = Utf8Prober::new();
        assert_eq!(prober.feed(b"caf\xe9 au lait"), ProbingState::NotMe);
        assert!(!prober.is_active());
        prober.reset();
        assert_eq!(prober.state(), ProbingState::Detecting);
    }

    #[test]
    fn test_char_split_across_chunks() {
        let mut prober = Utf8Prober::new();
        let bytes = "é".as_bytes();
        prober.feed(&bytes[..1]);
        prober.feed(&bytes[1..]);
        assert_eq!(prober.num_mb_chars, 1);
    }
}
