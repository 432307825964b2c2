//! Table-driven DFAs that validate byte sequences against an encoding's
//! grammar.

mod tables;

pub(crate) use tables::*;

use crate::enums::MachineState;

/// Static description of one encoding's state machine.
#[derive(Debug)]
pub struct StateMachineModel {
    /// Byte value to byte class
    pub class_table: &'static [u8],
    /// Number of byte classes, i.e. the width of one state row
    pub class_factor: usize,
    /// `state * class_factor + class` to next state
    pub state_table: &'static [u8],
    /// Byte class of a lead byte to the length of the character it starts
    pub char_len_table: &'static [u8],
    pub name: &'static str,
    pub language: &'static str,
}

/// A running instance of a [`StateMachineModel`].
#[derive(Debug, Clone)]
pub struct CodingStateMachine {
    model: &'static StateMachineModel,
    current_state: u8,
    current_char_len: usize,
}

impl CodingStateMachine {
    pub fn new(model: &'static StateMachineModel) -> Self {
        Self {
            model,
            current_state: MachineState::START,
            current_char_len: 0,
        }
    }

    pub fn reset(&mut self) {
        self.current_state = MachineState::START;
        self.current_char_len = 0;
    }

    /// Advances the machine by one byte and returns the new state.
    ///
    /// The character length is latched from the class of the byte that
    /// leaves START, so it describes the character completed on the next
    /// return to START.
    #[inline]
    pub fn next_state(&mut self, byte: u8) -> u8 {
        let class = self.model.class_table[byte as usize] as usize;
        if self.current_state == MachineState::START {
            self.current_char_len = self.model.char_len_table[class] as usize;
        }
        let index = self.current_state as usize * self.model.class_factor + class;
        self.current_state = self.model.state_table[index];
        self.current_state
    }

    /// Length of the character most recently started.
    pub fn current_char_len(&self) -> usize {
        self.current_char_len
    }

    pub fn name(&self) -> &'static str {
        self.model.name
    }

    pub fn language(&self) -> &'static str {
        self.model.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_MODELS: [&StateMachineModel; 13] = [
        &UTF8_SM_MODEL,
        &SJIS_SM_MODEL,
        &EUCJP_SM_MODEL,
        &GB18030_SM_MODEL,
        &EUCKR_SM_MODEL,
        &CP949_SM_MODEL,
        &BIG5_SM_MODEL,
        &EUCTW_SM_MODEL,
        &JOHAB_SM_MODEL,
        &HZ_SM_MODEL,
        &ISO2022CN_SM_MODEL,
        &ISO2022JP_SM_MODEL,
        &ISO2022KR_SM_MODEL,
    ];

    fn run(model: &'static StateMachineModel, bytes: &[u8]) -> Vec<u8> {
        let mut sm = CodingStateMachine::new(model);
        bytes.iter().map(|&b| sm.next_state(b)).collect()
    }

    #[test]
    fn test_tables_are_consistent() {
        for model in ALL_MODELS {
            assert_eq!(model.class_table.len(), 256, "{}", model.name);
            assert_eq!(model.char_len_table.len(), model.class_factor, "{}", model.name);
            assert!(
                model.class_table.iter().all(|&c| (c as usize) < model.class_factor),
                "{} has a class outside its factor",
                model.name
            );
            let states = model.state_table.len() / model.class_factor;
            assert!(
                model.state_table.iter().all(|&s| (s as usize) < states.max(3)),
                "{} transitions to a state without a row",
                model.name
            );
        }
    }

    #[test]
    fn test_utf8_multibyte_char_len() {
        let mut sm = CodingStateMachine::new(&UTF8_SM_MODEL);
        // "é" is C3 A9
        assert_ne!(sm.next_state(0xC3), MachineState::START);
        assert_eq!(sm.next_state(0xA9), MachineState::START);
        assert_eq!(sm.current_char_len(), 2);
        assert_eq!(sm.next_state(b'a'), MachineState::START);
        assert_eq!(sm.current_char_len(), 1);
    }

    #[test]
    fn test_utf8_rejects_bare_continuation() {
        let states = run(&UTF8_SM_MODEL, &[b'a', 0x80]);
        assert_eq!(states.last(), Some(&MachineState::ERROR));
    }

    #[test]
    fn test_iso2022jp_escape_is_identified() {
        // ESC $ B switches to JIS X 0208
        let states = run(&ISO2022JP_SM_MODEL, &[0x1B, b'$', b'B']);
        assert_eq!(states.last(), Some(&MachineState::ITS_ME));
    }

    #[test]
    fn test_reset_returns_to_start() {
        let mut sm = CodingStateMachine::new(&UTF8_SM_MODEL);
        sm.next_state(0xE3);
        sm.reset();
        assert_eq!(sm.current_char_len(), 0);
        assert_eq!(sm.next_state(b'x'), MachineState::START);
    }
}
