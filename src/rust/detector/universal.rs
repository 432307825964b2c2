use lazy_static::lazy_static;
use log::debug;
use std::collections::{HashMap, HashSet};

use super::{DetectionResult, DetectorConfig};
use crate::enums::{InputState, LanguageFilter, ProbingState};
use crate::filters;
use crate::probers::{CharSetGroupProber, CharSetProber, EscCharSetProber, Utf1632Prober};

/// Best confidence a high-byte verdict needs to be reported at all.
const MINIMUM_THRESHOLD: f64 = 0.20;
/// Share of the Windows-1252 confidence MacRoman needs to take over.
const MAC_ROMAN_PREFERENCE: f64 = 0.90;

const BINARY_SAMPLE: usize = 8192;
const UTF16_32_SAMPLE: usize = 100;
const UTF16_32_MIN_NULLS: usize = 20;

lazy_static! {
    /// ISO-8859 charsets and the Windows code pages that extend them with
    /// printable characters in 0x80..=0x9F.
    static ref ISO_WIN_MAP: HashMap<&'static str, &'static str> = HashMap::from([
        ("iso-8859-1", "Windows-1252"),
        ("iso-8859-2", "Windows-1250"),
        ("iso-8859-5", "Windows-1251"),
        ("iso-8859-6", "Windows-1256"),
        ("iso-8859-7", "Windows-1253"),
        ("iso-8859-8", "Windows-1255"),
        ("iso-8859-9", "Windows-1254"),
        ("iso-8859-13", "Windows-1257"),
    ]);

    /// Legacy names and the modern supersets that decode them correctly.
    static ref LEGACY_MAP: HashMap<&'static str, &'static str> = {
        let mut map = ISO_WIN_MAP.clone();
        map.extend([
            ("ascii", "Windows-1252"),
            ("iso-8859-11", "CP874"),
            ("tis-620", "CP874"),
            ("gb2312", "GB18030"),
            ("euc-kr", "CP949"),
            ("utf-16le", "UTF-16"),
        ]);
        map
    };
}

fn map_name(map: &HashMap<&'static str, &'static str>, name: &'static str) -> &'static str {
    map.get(name.to_ascii_lowercase().as_str()).copied().unwrap_or(name)
}

/// Streaming charset detector.
///
/// Feed the document in order with [`feed`](Self::feed), stop early once
/// [`is_done`](Self::is_done) reports true, then call
/// [`close`](Self::close) for the verdict:
///
/// ```
/// use charprobe::{DetectorConfig, UniversalDetector};
///
/// let mut detector = UniversalDetector::new(DetectorConfig::default());
/// for line in ["plain ", "ascii ", "text"] {
///     detector.feed(line.as_bytes());
///     if detector.is_done() {
///         break;
///     }
/// }
/// let result = detector.close();
/// assert_eq!(result.encoding, Some("ascii"));
/// ```
pub struct UniversalDetector {
    config: DetectorConfig,
    rename_legacy: bool,
    input_state: InputState,
    got_data: bool,
    done: bool,
    /// Byte budget spent; further input is ignored but `close` still decides
    exhausted: bool,
    result: DetectionResult,
    /// Tail of the previous chunk, for patterns split across chunks
    last_bytes: [u8; 2],
    /// Leading bytes held until there are enough to rule out binary input
    leading: Option<Vec<u8>>,
    total_bytes: usize,
    has_win_bytes: bool,
    has_mac_letter: bool,
    utf1632_prober: Utf1632Prober,
    esc_prober: Option<EscCharSetProber>,
    groups: Vec<CharSetGroupProber>,
}

// Compile-time verification that a detector can move between threads
const _: () = {
    fn assert_send<T: Send>() {}
    fn verify_thread_safety() {
        assert_send::<UniversalDetector>();
    }
};

impl UniversalDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            rename_legacy: config.rename_legacy(),
            config,
            input_state: InputState::PureAscii,
            got_data: false,
            done: false,
            exhausted: false,
            result: DetectionResult::UNSET,
            last_bytes: [0; 2],
            leading: None,
            total_bytes: 0,
            has_win_bytes: false,
            has_mac_letter: false,
            utf1632_prober: Utf1632Prober::new(),
            esc_prober: None,
            groups: Vec::new(),
        }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// True once more input cannot change the verdict.
    pub fn is_done(&self) -> bool {
        self.done || self.exhausted
    }

    /// The verdict so far. Only final after [`close`](Self::close) or once
    /// the detector is done.
    pub fn result(&self) -> DetectionResult {
        self.result
    }

    pub fn input_state(&self) -> InputState {
        self.input_state
    }

    pub fn has_win_bytes(&self) -> bool {
        self.has_win_bytes
    }

    /// Prepares the detector for a new document. Probers already built are
    /// kept and reset.
    pub fn reset(&mut self) {
        self.input_state = InputState::PureAscii;
        self.got_data = false;
        self.done = false;
        self.exhausted = false;
        self.result = DetectionResult::UNSET;
        self.last_bytes = [0; 2];
        self.leading = None;
        self.total_bytes = 0;
        self.has_win_bytes = false;
        self.has_mac_letter = false;
        self.utf1632_prober.reset();
        if let Some(esc) = &mut self.esc_prober {
            esc.reset();
        }
        for group in &mut self.groups {
            group.reset();
        }
    }

    pub fn feed(&mut self, chunk: &[u8]) {
        if self.is_done() || chunk.is_empty() {
            return;
        }

        if !self.got_data {
            self.got_data = true;
            if let Some(encoding) = bom_encoding(chunk) {
                debug!("{} byte order mark found", encoding);
                self.result = DetectionResult::neutral(encoding, 1.0);
                self.done = true;
                return;
            }
            self.leading = Some(Vec::with_capacity(UTF16_32_SAMPLE));
        }
        let sampled = match &mut self.leading {
            Some(leading) => {
                let room = BINARY_SAMPLE.saturating_sub(leading.len());
                leading.extend_from_slice(&chunk[..chunk.len().min(room)]);
                leading.len() >= UTF16_32_SAMPLE
            }
            None => false,
        };
        if sampled && self.settle_binary() {
            return;
        }

        let allowance = self.config.max_bytes.saturating_sub(self.total_bytes);
        let chunk = &chunk[..chunk.len().min(allowance)];
        if chunk.is_empty() {
            self.exhausted = true;
            return;
        }

        if self.input_state == InputState::PureAscii {
            if filters::has_high_byte(chunk) {
                self.input_state = InputState::HighByte;
            } else if filters::has_escape_sequence(chunk)
                || (self.last_bytes[1] == b'~' && chunk[0] == b'{')
            {
                self.input_state = InputState::EscAscii;
            }
        }
        let previous = self.last_bytes;
        match chunk {
            [.., second_last, last] => self.last_bytes = [*second_last, *last],
            [only] => self.last_bytes = [previous[1], *only],
            [] => {}
        }

        self.total_bytes += chunk.len();
        if self.total_bytes >= self.config.max_bytes {
            debug!("read {} bytes, no more input will be examined", self.total_bytes);
            self.exhausted = true;
        }

        if self.utf1632_prober.state() == ProbingState::Detecting
            && self.utf1632_prober.feed(chunk) == ProbingState::FoundIt
        {
            let result = DetectionResult {
                encoding: self.utf1632_prober.charset_name(),
                confidence: self.utf1632_prober.confidence(),
                language: Some(""),
            };
            self.settle(result);
            return;
        }

        match self.input_state {
            InputState::EscAscii => {
                let filter = self.config.language_filter;
                let esc = self.esc_prober.get_or_insert_with(|| EscCharSetProber::new(filter));
                if esc.feed(chunk) == ProbingState::FoundIt {
                    let result = DetectionResult {
                        encoding: esc.charset_name(),
                        confidence: esc.confidence(),
                        language: esc.language(),
                    };
                    self.settle(result);
                }
            }
            InputState::HighByte => {
                if self.groups.is_empty() {
                    self.build_groups();
                }
                if filters::has_win_bytes(chunk) {
                    self.has_win_bytes = true;
                }
                if filters::has_mac_letter_pattern(chunk)
                    || filters::has_mac_letter_pattern(&boundary(previous, chunk))
                {
                    self.has_mac_letter = true;
                }
                let found = self
                    .groups
                    .iter_mut()
                    .position(|group| group.feed(chunk) == ProbingState::FoundIt);
                if let Some(index) = found {
                    let group = &self.groups[index];
                    let result = match group.charset_name() {
                        Some(name) => self.refine(group, name, group.confidence()),
                        None => DetectionResult::UNSET,
                    };
                    self.settle(result);
                }
            }
            InputState::PureAscii => {}
        }
    }

    /// Settles on `result`, unless the leading bytes turn out to be binary.
    fn settle(&mut self, result: DetectionResult) {
        if !self.settle_binary() {
            self.result = result;
            self.done = true;
        }
    }

    /// Runs the pending binary check, settling on "no encoding" if it hits.
    fn settle_binary(&mut self) -> bool {
        let binary = self
            .leading
            .take()
            .map_or(false, |leading| looks_binary(&leading));
        if binary {
            debug!("too many null bytes, treating input as binary");
            self.result = DetectionResult {
                encoding: None,
                confidence: 0.0,
                language: Some(""),
            };
            self.done = true;
        }
        binary
    }

    fn build_groups(&mut self) {
        self.groups
            .push(CharSetGroupProber::multi_byte(self.config.language_filter));
        if self.config.language_filter.contains(LanguageFilter::NON_CJK) {
            self.groups
                .push(CharSetGroupProber::single_byte(self.config.encoding_era));
        }
    }

    /// Ends the document and returns the verdict. Further calls return the
    /// same result until [`reset`](Self::reset).
    pub fn close(&mut self) -> DetectionResult {
        if self.done || self.settle_binary() {
            return self.result;
        }
        self.done = true;

        if !self.got_data {
            debug!("no data received");
        } else {
            self.result = match self.input_state {
                InputState::PureAscii => DetectionResult::neutral("ascii", 1.0),
                InputState::EscAscii => self.escape_verdict(),
                InputState::HighByte => self.high_byte_verdict(),
            };
        }

        if self.result.encoding.is_none() {
            debug!("no probers hit minimum threshold");
            for prober in self.flattened_probers() {
                debug!(
                    "{:?} {:?} confidence = {}",
                    prober.charset_name(),
                    prober.language(),
                    prober.confidence()
                );
            }
        }
        self.result
    }

    fn escape_verdict(&self) -> DetectionResult {
        match &self.esc_prober {
            Some(esc) if esc.charset_name().is_some() => DetectionResult {
                encoding: esc.charset_name(),
                confidence: esc.confidence(),
                language: esc.language(),
            },
            // 7-bit text with stray escapes is still valid UTF-8
            _ => DetectionResult::neutral("utf-8", 1.0),
        }
    }

    fn high_byte_verdict(&self) -> DetectionResult {
        let mut best: Option<(&CharSetGroupProber, f64)> = None;
        for group in &self.groups {
            let confidence = group.confidence();
            if confidence > best.map_or(0.0, |(_, max)| max) {
                best = Some((group, confidence));
            }
        }

        match best {
            Some((group, confidence)) if confidence > MINIMUM_THRESHOLD => {
                if let Some(name) = group.charset_name() {
                    return self.refine(group, name, confidence);
                }
            }
            _ => {}
        }
        match self.groups.iter().find_map(|group| group.find_active("utf-8")) {
            Some(utf8) => DetectionResult::neutral("utf-8", utf8.confidence()),
            None => DetectionResult::UNSET,
        }
    }

    /// Turns the winning group's guess into a result, swapping in the
    /// Windows or MacRoman sibling when the bytes seen call for it.
    fn refine(
        &self,
        group: &CharSetGroupProber,
        mut name: &'static str,
        mut confidence: f64,
    ) -> DetectionResult {
        let lower = name.to_ascii_lowercase();
        if lower.starts_with("iso-8859") {
            if self.has_win_bytes {
                name = map_name(&ISO_WIN_MAP, name);
            }
        } else if lower == "windows-1252" && self.has_mac_letter {
            // 0x80..=0x9F inside words are letters in MacRoman, punctuation in Windows-1252
            let mac_roman = self
                .groups
                .iter()
                .flat_map(|group| group.children())
                .filter(|prober| prober.charset_name() == Some("MacRoman"))
                .map(|prober| prober.confidence())
                .find(|&mac| mac >= confidence * MAC_ROMAN_PREFERENCE);
            if let Some(mac) = mac_roman {
                name = "MacRoman";
                confidence = mac;
            }
        }
        if self.rename_legacy {
            name = map_name(&LEGACY_MAP, name);
        }
        DetectionResult {
            encoding: Some(name),
            confidence,
            language: group.language(),
        }
    }

    /// Every leaf prober built so far, group members included.
    fn flattened_probers(&self) -> Vec<&dyn CharSetProber> {
        let mut probers: Vec<&dyn CharSetProber> = Vec::new();
        if let Some(esc) = &self.esc_prober {
            probers.push(esc);
        }
        for group in &self.groups {
            for prober in group.children() {
                probers.push(prober.as_ref());
            }
        }
        probers
    }

    /// Every plausible candidate for the document just closed, most
    /// confident first, with the detector's own verdict leading.
    pub(crate) fn candidates(&self, ignore_threshold: bool) -> Vec<DetectionResult> {
        let mut candidates = Vec::new();
        if matches!(self.input_state, InputState::HighByte | InputState::EscAscii) {
            for prober in self.flattened_probers() {
                if !prober.is_active() {
                    continue;
                }
                let confidence = prober.confidence();
                if !ignore_threshold && confidence <= MINIMUM_THRESHOLD {
                    continue;
                }
                let encoding = prober.charset_name().map(|mut name| {
                    if self.has_win_bytes && name.to_ascii_lowercase().starts_with("iso-8859") {
                        name = map_name(&ISO_WIN_MAP, name);
                    }
                    if self.rename_legacy {
                        name = map_name(&LEGACY_MAP, name);
                    }
                    name
                });
                candidates.push(DetectionResult {
                    encoding,
                    confidence,
                    language: prober.language(),
                });
            }
        }
        candidates.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

        // renaming can fold several probers into one (encoding, language)
        let verdict = self.result;
        let mut seen = HashSet::from([(verdict.encoding, verdict.language)]);
        candidates.retain(|candidate| seen.insert((candidate.encoding, candidate.language)));
        candidates.insert(0, verdict);
        candidates
    }
}

fn bom_encoding(chunk: &[u8]) -> Option<&'static str> {
    if chunk.starts_with(b"\xEF\xBB\xBF") {
        Some("UTF-8-SIG")
    } else if chunk.starts_with(b"\xFF\xFE\x00\x00") || chunk.starts_with(b"\x00\x00\xFE\xFF") {
        Some("UTF-32")
    } else if chunk.starts_with(b"\xFF\xFE") || chunk.starts_with(b"\xFE\xFF") {
        Some("UTF-16")
    } else {
        None
    }
}

/// The previous chunk's tail joined to the first bytes of `chunk`.
fn boundary(previous: [u8; 2], chunk: &[u8]) -> Vec<u8> {
    let mut joined = previous.to_vec();
    joined.extend_from_slice(&chunk[..chunk.len().min(2)]);
    joined
}

/// More than 10% nulls, unless the nulls line up the way UTF-16/32 text does.
/// Inputs shorter than the parity sample are held to a proportional share.
fn looks_binary(bytes: &[u8]) -> bool {
    let sample = &bytes[..bytes.len().min(UTF16_32_SAMPLE)];
    let limit = sample.len() * UTF16_32_MIN_NULLS / UTF16_32_SAMPLE;
    let even_nulls = sample.iter().step_by(2).filter(|&&b| b == 0).count();
    let odd_nulls = sample.iter().skip(1).step_by(2).filter(|&&b| b == 0).count();
    if even_nulls > limit || odd_nulls > limit {
        return false;
    }
    let sample = &bytes[..bytes.len().min(BINARY_SAMPLE)];
    let nulls = memchr::memchr_iter(0, sample).count();
    nulls * 10 > sample.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::EncodingEra;

    fn detector() -> UniversalDetector {
        UniversalDetector::new(DetectorConfig::default())
    }

    #[test]
    fn test_bom_short_circuits() {
        let cases: [(&[u8], &str); 5] = [
            (b"\xEF\xBB\xBFhello", "UTF-8-SIG"),
            (b"\xFF\xFE\x00\x00h\x00\x00\x00", "UTF-32"),
            (b"\x00\x00\xFE\xFF\x00\x00\x00h", "UTF-32"),
            (b"\xFF\xFEh\x00", "UTF-16"),
            (b"\xFE\xFF\x00h", "UTF-16"),
        ];
        for (bytes, expected) in cases {
            let mut detector = detector();
            detector.feed(bytes);
            assert!(detector.is_done());
            assert_eq!(detector.close(), DetectionResult::neutral(expected, 1.0));
        }
    }

    #[test]
    fn test_bom_only_counts_at_start() {
        let mut detector = detector();
        detector.feed(b"abc");
        detector.feed(b"\xEF\xBB\xBF");
        assert!(!detector.is_done());
        assert_ne!(detector.close().encoding, Some("UTF-8-SIG"));
    }

    #[test]
    fn test_binary_input() {
        // one null in every eight bytes, all at odd offsets
        let bytes = b"\x7fELF\x02\x01\x01\x00".repeat(20);
        let mut detector = detector();
        detector.feed(&bytes);
        assert!(detector.is_done());
        let result = detector.close();
        assert_eq!(result.encoding, None);
        assert_eq!(result.language, Some(""));
    }

    #[test]
    fn test_utf16_nulls_are_not_binary() {
        assert!(!looks_binary(&b"a\x00".repeat(100)));
        assert!(!looks_binary(&b"a\x00".repeat(8)));
        assert!(looks_binary(&b"\x7fELF\x02\x01\x01\x00".repeat(8)));
        assert!(!looks_binary(b"no nulls at all"));
    }

    #[test]
    fn test_small_chunks_keep_utf16_parity() {
        let utf16 = b"a\x00".repeat(100);
        let elf = b"\x7fELF\x02\x01\x01\x00".repeat(20);
        for chunk_size in [16, 64, 99] {
            let config = DetectorConfig::default().with_chunk_size(chunk_size);
            let result = crate::detect(&utf16, &config).unwrap();
            assert_eq!(result.encoding, Some("utf-16le"), "chunk size {}", chunk_size);
            let result = crate::detect(&elf, &config).unwrap();
            assert_eq!(result.encoding, None, "chunk size {}", chunk_size);
        }
    }

    #[test]
    fn test_mac_letter_split_across_chunks() {
        let text = b"\xe9t\xe9 Caf\x8es";
        for chunk_size in [1, 7, 8] {
            let config = DetectorConfig::default().with_encoding_era(EncodingEra::ALL);
            let mut detector = UniversalDetector::new(config);
            for chunk in text.chunks(chunk_size) {
                detector.feed(chunk);
            }
            assert!(detector.has_mac_letter, "chunk size {}", chunk_size);
        }

        let config = DetectorConfig::default().with_encoding_era(EncodingEra::ALL);
        let mut detector = UniversalDetector::new(config);
        detector.feed(b"\xe9t\xe9 Caf \x8e");
        detector.feed(b" s");
        assert!(!detector.has_mac_letter);
    }

    #[test]
    fn test_mac_letters_prefer_mac_roman() {
        let config = DetectorConfig::default()
            .with_encoding_era(EncodingEra::ALL)
            .with_rename_legacy(false);
        let mut detector = UniversalDetector::new(config);
        detector.feed(include_bytes!("../../../tests/data/french.macroman.txt"));
        assert!(detector.has_mac_letter);
        let group = &detector.groups[1];
        let best_mac = group
            .children()
            .iter()
            .filter(|prober| prober.charset_name() == Some("MacRoman"))
            .map(|prober| prober.confidence())
            .fold(0.0, f64::max);

        // within 90% of the Windows-1252 confidence
        let refined = detector.refine(group, "Windows-1252", best_mac / 0.95);
        assert_eq!(refined.encoding, Some("MacRoman"));
        assert!(refined.confidence >= best_mac / 0.95 * MAC_ROMAN_PREFERENCE);

        let refined = detector.refine(group, "Windows-1252", best_mac / 0.85);
        assert_eq!(refined.encoding, Some("Windows-1252"));

        // ISO names only ever move to their Windows sibling
        let refined = detector.refine(group, "ISO-8859-1", best_mac);
        assert_eq!(refined.encoding, Some("Windows-1252"));

        detector.has_mac_letter = false;
        let refined = detector.refine(&detector.groups[1], "Windows-1252", best_mac / 0.95);
        assert_eq!(refined.encoding, Some("Windows-1252"));
    }

    #[test]
    fn test_candidates_are_unique_after_renaming() {
        let mut bytes = include_bytes!("../../../tests/data/french.latin1.txt").to_vec();
        // a Windows-1252 apostrophe pulls every ISO-8859-1 prober onto Windows-1252
        bytes.insert(bytes.iter().position(|&b| b == b' ').unwrap() + 1, 0x92);
        let config = DetectorConfig::default()
            .with_encoding_era(EncodingEra::ALL)
            .with_rename_legacy(false);
        let candidates = crate::detect_all(&bytes, &config, true).unwrap();

        assert_eq!(candidates[0].encoding, Some("Windows-1252"));
        assert_eq!(candidates[0].language, Some("French"));
        let mut seen = HashSet::new();
        for candidate in &candidates {
            assert!(
                seen.insert((candidate.encoding, candidate.language)),
                "duplicate {:?}",
                candidate
            );
        }
    }

    #[test]
    fn test_input_state_transitions_are_sticky() {
        let mut detector = detector();
        detector.feed(b"plain");
        assert_eq!(detector.input_state(), InputState::PureAscii);
        detector.feed(b"\x1b(B");
        assert_eq!(detector.input_state(), InputState::EscAscii);
        detector.feed(b"caf\xc3\xa9");
        assert_eq!(detector.input_state(), InputState::EscAscii);
    }

    #[test]
    fn test_hz_shift_split_across_chunks() {
        let mut detector = detector();
        detector.feed(b"text ~");
        assert_eq!(detector.input_state(), InputState::PureAscii);
        detector.feed(b"{ more");
        assert_eq!(detector.input_state(), InputState::EscAscii);
    }

    #[test]
    fn test_escape_without_known_charset_is_utf8() {
        let mut detector = detector();
        detector.feed(b"colour \x1b[31mred\x1b[0m");
        let result = detector.close();
        assert_eq!(result, DetectionResult::neutral("utf-8", 1.0));
    }

    #[test]
    fn test_no_data() {
        let mut detector = detector();
        detector.feed(b"");
        assert_eq!(detector.close(), DetectionResult::UNSET);
    }

    #[test]
    fn test_byte_budget_stops_input_but_still_decides() {
        let config = DetectorConfig::default().with_max_bytes(10);
        let mut detector = UniversalDetector::new(config);
        detector.feed(b"0123456789 and then caf\xc3\xa9");
        assert!(detector.is_done());
        assert_eq!(detector.input_state(), InputState::PureAscii);
        detector.feed(b"\xff\xfe");
        assert_eq!(detector.close().encoding, Some("ascii"));
    }

    #[test]
    fn test_single_byte_group_needs_non_cjk() {
        let config = DetectorConfig::default().with_language_filter(LanguageFilter::CJK);
        let mut detector = UniversalDetector::new(config);
        detector.feed(b"caf\xe9");
        assert_eq!(detector.groups.len(), 1);

        let mut detector = UniversalDetector::new(DetectorConfig::default());
        detector.feed(b"caf\xe9");
        assert_eq!(detector.groups.len(), 2);
    }

    #[test]
    fn test_legacy_map() {
        assert_eq!(map_name(&LEGACY_MAP, "ISO-8859-1"), "Windows-1252");
        assert_eq!(map_name(&LEGACY_MAP, "EUC-KR"), "CP949");
        assert_eq!(map_name(&LEGACY_MAP, "TIS-620"), "CP874");
        assert_eq!(map_name(&LEGACY_MAP, "Big5"), "Big5");
        assert_eq!(map_name(&ISO_WIN_MAP, "ISO-8859-11"), "ISO-8859-11");
    }

    #[test]
    fn test_reset_keeps_built_probers() {
        let config = DetectorConfig::default().with_encoding_era(EncodingEra::ALL);
        let mut detector = UniversalDetector::new(config);
        detector.feed(b"caf\xe9 cr\xe8me");
        detector.close();
        assert!(detector.is_done());

        detector.reset();
        assert!(!detector.is_done());
        assert_eq!(detector.input_state(), InputState::PureAscii);
        assert_eq!(detector.result(), DetectionResult::UNSET);
        assert_eq!(detector.groups.len(), 2);
        detector.feed(b"ascii again");
        assert_eq!(detector.close().encoding, Some("ascii"));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut detector = detector();
        detector.feed(b"hello");
        let first = detector.close();
        detector.feed(b"\xe9\xe9\xe9");
        assert_eq!(detector.close(), first);
    }
}
