use log::debug;

use super::{CharSetProber, SHORTCUT_THRESHOLD};
use crate::distribution::{ContextAnalyzer, ContextKind, DistributionAnalyzer, DistributionKind};
use crate::enums::{MachineState, ProbingState};
use crate::statemachine::{self, CodingStateMachine, StateMachineModel};

/// A state machine for validity plus character-frequency statistics.
///
/// The Japanese probers also run a [`ContextAnalyzer`] over hiragana
/// pairs; for them it decides when enough data has been seen.
#[derive(Debug, Clone)]
pub struct MultiByteCharSetProber {
    machine: CodingStateMachine,
    distribution: DistributionAnalyzer,
    context: Option<ContextAnalyzer>,
    state: ProbingState,
    /// Last byte of the previous chunk, then the first byte of this one
    last_char: [u8; 2],
}

impl MultiByteCharSetProber {
    fn new(
        model: &'static StateMachineModel,
        distribution: DistributionKind,
        context: Option<ContextKind>,
    ) -> Self {
        Self {
            machine: CodingStateMachine::new(model),
            distribution: DistributionAnalyzer::new(distribution),
            context: context.map(ContextAnalyzer::new),
            state: ProbingState::Detecting,
            last_char: [0; 2],
        }
    }

    pub fn shift_jis() -> Self {
        Self::new(&statemachine::SJIS_SM_MODEL, DistributionKind::Sjis, Some(ContextKind::Sjis))
    }

    pub fn euc_jp() -> Self {
        Self::new(&statemachine::EUCJP_SM_MODEL, DistributionKind::EucJp, Some(ContextKind::EucJp))
    }

    pub fn gb18030() -> Self {
        Self::new(&statemachine::GB18030_SM_MODEL, DistributionKind::Gb2312, None)
    }

    pub fn euc_kr() -> Self {
        Self::new(&statemachine::EUCKR_SM_MODEL, DistributionKind::EucKr, None)
    }

    pub fn cp949() -> Self {
        Self::new(&statemachine::CP949_SM_MODEL, DistributionKind::EucKr, None)
    }

    pub fn big5() -> Self {
        Self::new(&statemachine::BIG5_SM_MODEL, DistributionKind::Big5, None)
    }

    pub fn euc_tw() -> Self {
        Self::new(&statemachine::EUCTW_SM_MODEL, DistributionKind::EucTw, None)
    }

    pub fn johab() -> Self {
        Self::new(&statemachine::JOHAB_SM_MODEL, DistributionKind::Johab, None)
    }

    /// Hands one completed character to the analyzers. `i` is the index
    /// of its last byte in `buf`.
    fn analyze(&mut self, buf: &[u8], i: usize, char_len: usize) {
        let window = if i == 0 {
            self.last_char[1] = buf[0];
            self.last_char
        } else {
            [buf[i - 1], buf[i]]
        };
        if let Some(context) = self.context.as_mut() {
            match context.kind() {
                // Shift_JIS is read from the character's lead byte on.
                ContextKind::Sjis if i == 0 => {
                    let start = 2usize.saturating_sub(char_len);
                    context.feed(&self.last_char[start..], char_len);
                }
                ContextKind::Sjis => {
                    let start = (i + 1).saturating_sub(char_len);
                    let end = (start + 2).min(buf.len());
                    context.feed(&buf[start..end], char_len);
                }
                ContextKind::EucJp => context.feed(&window, char_len),
            }
        }
        self.distribution.feed(window, char_len);
    }

    fn got_enough_data(&self) -> bool {
        match &self.context {
            Some(context) => context.got_enough_data(),
            None => self.distribution.got_enough_data(),
        }
    }
}

impl CharSetProber for MultiByteCharSetProber {
    fn reset(&mut self) {
        self.machine.reset();
        self.distribution.reset();
        if let Some(context) = self.context.as_mut() {
            context.reset();
        }
        self.state = ProbingState::Detecting;
        self.last_char = [0; 2];
    }

    fn feed(&mut self, buf: &[u8]) -> ProbingState {
        if self.state != ProbingState::Detecting {
            return self.state;
        }
        for (i, &byte) in buf.iter().enumerate() {
            match self.machine.next_state(byte) {
                MachineState::ERROR => {
                    debug!("{} prober hit error at byte {}", self.machine.name(), i);
                    self.state = ProbingState::NotMe;
                    break;
                }
                MachineState::ITS_ME => {
                    self.state = ProbingState::FoundIt;
                    break;
                }
                MachineState::START => {
                    let char_len = self.machine.current_char_len();
                    self.analyze(buf, i, char_len);
                }
                _ => {}
            }
        }
        if let Some(&last) = buf.last() {
            self.last_char[0] = last;
        }
        if self.state == ProbingState::Detecting
            && self.got_enough_data()
            && self.confidence() > SHORTCUT_THRESHOLD
        {
            debug!("{} prober is confident, stopping early", self.machine.name());
            self.state = ProbingState::FoundIt;
        }
        self.state
    }

    fn state(&self) -> ProbingState {
        self.state
    }

    fn confidence(&self) -> f64 {
        let distribution = self.distribution.confidence();
        match &self.context {
            Some(context) => context.confidence().max(distribution),
            None => distribution,
        }
    }

    fn charset_name(&self) -> Option<&'static str> {
        match &self.context {
            Some(context) if context.saw_cp932() => Some("CP932"),
            _ => Some(self.machine.name()),
        }
    }

    fn language(&self) -> Option<&'static str> {
        Some(self.machine.language())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // "私は毎朝早く起きて、近くの公園を散歩します。天気がいい日には、
    // 友達と一緒にお茶を飲みながら話をするのが好きです。"
    const JAPANESE_SJIS: &[u8] = b"\x8e\x84\x82\xcd\x96\x88\x92\xa9\x91\x81\x82\xad\x8bN\x82\xab\x82\xc4\x81A\x8b\xdf\x82\xad\x82\xcc\x8c\xf6\x89\x80\x82\xf0\x8eU\x95\xe0\x82\xb5\x82\xdc\x82\xb7\x81B\x93V\x8bC\x82\xaa\x82\xa2\x82\xa2\x93\xfa\x82\xc9\x82\xcd\x81A\x97F\x92B\x82\xc6\x88\xea\x8f\x8f\x82\xc9\x82\xa8\x92\x83\x82\xf0\x88\xf9\x82\xdd\x82\xc8\x82\xaa\x82\xe7\x98b\x82\xf0\x82\xb7\x82\xe9\x82\xcc\x82\xaa\x8dD\x82\xab\x82\xc5\x82\xb7\x81B";
    const JAPANESE_EUC_JP: &[u8] = b"\xbb\xe4\xa4\xcf\xcb\xe8\xc4\xab\xc1\xe1\xa4\xaf\xb5\xaf\xa4\xad\xa4\xc6\xa1\xa2\xb6\xe1\xa4\xaf\xa4\xce\xb8\xf8\xb1\xe0\xa4\xf2\xbb\xb6\xca\xe2\xa4\xb7\xa4\xde\xa4\xb9\xa1\xa3\xc5\xb7\xb5\xa4\xa4\xac\xa4\xa4\xa4\xa4\xc6\xfc\xa4\xcb\xa4\xcf\xa1\xa2\xcd\xa7\xc3\xa3\xa4\xc8\xb0\xec\xbd\xef\xa4\xcb\xa4\xaa\xc3\xe3\xa4\xf2\xb0\xfb\xa4\xdf\xa4\xca\xa4\xac\xa4\xe9\xcf\xc3\xa4\xf2\xa4\xb9\xa4\xeb\xa4\xce\xa4\xac\xb9\xa5\xa4\xad\xa4\xc7\xa4\xb9\xa1\xa3";
    // "오늘은 날씨가 아주 좋아서 친구들과 함께 공원에 가서 산책을 했습니다.
    // 저녁에는 맛있는 음식을 먹었습니다."
    const KOREAN_EUC_KR: &[u8] = b"\xbf\xc0\xb4\xc3\xc0\xba \xb3\xaf\xbe\xbe\xb0\xa1 \xbe\xc6\xc1\xd6 \xc1\xc1\xbe\xc6\xbc\xad \xc4\xa3\xb1\xb8\xb5\xe9\xb0\xfa \xc7\xd4\xb2\xb2 \xb0\xf8\xbf\xf8\xbf\xa1 \xb0\xa1\xbc\xad \xbb\xea\xc3\xa5\xc0\xbb \xc7\xdf\xbd\xc0\xb4\xcf\xb4\xd9. \xc0\xfa\xb3\xe1\xbf\xa1\xb4\xc2 \xb8\xc0\xc0\xd6\xb4\xc2 \xc0\xbd\xbd\xc4\xc0\xbb \xb8\xd4\xbe\xfa\xbd\xc0\xb4\xcf\xb4\xd9.";
    const KOREAN_JOHAB: &[u8] = b"\xb5\xa1\x93i\xb7e \x90i\xb3\xa1\x88a \xb4a\xba\x81 \xb9\xbd\xb4a\xac\xe1 \xc3\xa5\x8a\x81\x97i\x89\xc1 \xd0q\x8dA \x89\xb7\xb6\xa5\xb5A \x88a\xac\xe1 \xace\xc0\x82\xb7i \xd0\x96\xafs\x93\xa1\x94a. \xb8\xe1\x91b\xb5A\x93e \xa0u\xb7\xb6\x93e \xb7q\xaf\xa2\xb7i \xa0\xe2\xb4\xf6\xafs\x93\xa1\x94a.";

    #[test]
    fn test_japanese_in_both_encodings() {
        for (mut prober, bytes, name) in [
            (MultiByteCharSetProber::shift_jis(), JAPANESE_SJIS, "Shift_JIS"),
            (MultiByteCharSetProber::euc_jp(), JAPANESE_EUC_JP, "EUC-JP"),
        ] {
            assert_eq!(prober.feed(bytes), ProbingState::Detecting);
            assert!(prober.confidence() > SHORTCUT_THRESHOLD, "{}", name);
            assert_eq!(prober.charset_name(), Some(name));
            assert_eq!(prober.language(), Some("Japanese"));
            assert_eq!(prober.distribution.total_chars(), 56);
        }
    }

    #[test]
    fn test_statistics_do_not_depend_on_chunking() {
        let mut whole = MultiByteCharSetProber::shift_jis();
        whole.feed(JAPANESE_SJIS);
        for size in [1, 3, 5] {
            let mut split = MultiByteCharSetProber::shift_jis();
            for chunk in JAPANESE_SJIS.chunks(size) {
                split.feed(chunk);
            }
            assert_eq!(split.distribution.total_chars(), whole.distribution.total_chars());
            assert_eq!(split.confidence(), whole.confidence(), "chunk size {}", size);
        }
    }

    #[test]
    fn test_microsoft_extension_renames_to_cp932() {
        let mut prober = MultiByteCharSetProber::shift_jis();
        prober.feed(JAPANESE_SJIS);
        // circled digits one and two
        prober.feed(b"\x87@\x87A");
        assert_eq!(prober.charset_name(), Some("CP932"));
        prober.reset();
        assert_eq!(prober.charset_name(), Some("Shift_JIS"));
    }

    #[test]
    fn test_invalid_sequence_rules_out() {
        let mut prober = MultiByteCharSetProber::euc_jp();
        assert_eq!(prober.feed(JAPANESE_SJIS), ProbingState::NotMe);
        assert!(!prober.is_active());
        // NotMe is sticky until reset
        assert_eq!(prober.feed(JAPANESE_EUC_JP), ProbingState::NotMe);
        prober.reset();
        assert_eq!(prober.feed(JAPANESE_EUC_JP), ProbingState::Detecting);
    }

    #[test]
    fn test_korean() {
        for (mut prober, bytes) in [
            (MultiByteCharSetProber::euc_kr(), KOREAN_EUC_KR),
            (MultiByteCharSetProber::cp949(), KOREAN_EUC_KR),
            (MultiByteCharSetProber::johab(), KOREAN_JOHAB),
        ] {
            prober.feed(bytes);
            assert_eq!(prober.language(), Some("Korean"));
            assert!(prober.confidence() > 0.9, "{:?}", prober.charset_name());
        }
    }
}
