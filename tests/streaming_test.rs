use charprobe::{detect, DetectionResult, DetectorConfig, EncodingEra, InputState, UniversalDetector};
use std::sync::Arc;
use std::thread;

const FIXTURES: [(&str, &[u8]); 8] = [
    ("chinese.big5", include_bytes!("data/chinese.big5.txt")),
    ("french.latin1", include_bytes!("data/french.latin1.txt")),
    ("german.utf-8", include_bytes!("data/german.utf-8.txt")),
    ("greek.iso-8859-7", include_bytes!("data/greek.iso-8859-7.txt")),
    ("hebrew.windows-1255", include_bytes!("data/hebrew.windows-1255.txt")),
    ("japanese.iso-2022-jp", include_bytes!("data/japanese.iso-2022-jp.txt")),
    ("russian.koi8-r", include_bytes!("data/russian.koi8-r.txt")),
    ("russian.windows-1251", include_bytes!("data/russian.windows-1251.txt")),
];

fn feed_in_chunks(detector: &mut UniversalDetector, bytes: &[u8], size: usize) -> DetectionResult {
    for chunk in bytes.chunks(size) {
        detector.feed(chunk);
        if detector.is_done() {
            break;
        }
    }
    detector.close()
}

#[test]
fn test_chunk_size_does_not_change_the_verdict() {
    let configs = [
        DetectorConfig::default(),
        DetectorConfig::default()
            .with_encoding_era(EncodingEra::ALL)
            .with_rename_legacy(false),
    ];
    for config in configs {
        for (name, bytes) in FIXTURES {
            let whole = detect(bytes, &config).unwrap();
            for size in [1, 7, 13, 256, 1000] {
                let mut detector = UniversalDetector::new(config.clone());
                let streamed = feed_in_chunks(&mut detector, bytes, size);
                assert_eq!(streamed.encoding, whole.encoding, "{} in {}-byte chunks", name, size);
                assert_eq!(streamed.language, whole.language, "{} in {}-byte chunks", name, size);
            }
        }
    }
}

#[test]
fn test_detector_is_reusable_after_reset() {
    let mut detector = UniversalDetector::new(DetectorConfig::default());
    for (name, bytes) in FIXTURES.iter().chain(FIXTURES.iter().rev()) {
        let streamed = feed_in_chunks(&mut detector, bytes, 64);
        let mut fresh = UniversalDetector::new(DetectorConfig::default());
        assert_eq!(streamed, feed_in_chunks(&mut fresh, bytes, 64), "{}", name);
        detector.reset();
        assert_eq!(detector.input_state(), InputState::PureAscii);
        assert_eq!(detector.result(), DetectionResult::default());
        assert!(!detector.is_done());
    }
}

#[test]
fn test_done_once_certain() {
    let mut detector = UniversalDetector::new(DetectorConfig::default());
    detector.feed(b"\xEF\xBB\xBFhello");
    assert!(detector.is_done());
    assert_eq!(detector.result().encoding, Some("UTF-8-SIG"));
    // later input cannot change a settled verdict
    detector.feed(b"\xA4\xA4\xA4\xE5");
    assert_eq!(detector.close().encoding, Some("UTF-8-SIG"));

    let (_, iso_2022_jp) = FIXTURES[5];
    let mut detector = UniversalDetector::new(DetectorConfig::default());
    detector.feed(iso_2022_jp);
    assert!(detector.is_done());
    assert_eq!(detector.input_state(), InputState::EscAscii);
}

#[test]
fn test_byte_budget_stops_examination() {
    let config = DetectorConfig::default().with_max_bytes(10);
    let mut detector = UniversalDetector::new(config.clone());
    detector.feed(b"Hello");
    assert!(!detector.is_done());
    detector.feed(b" world");
    assert!(detector.is_done());
    // past the budget, so never seen
    detector.feed(b"\xE9\xE9");
    assert_eq!(detector.input_state(), InputState::PureAscii);
    assert_eq!(detector.close(), DetectionResult {
        encoding: Some("ascii"),
        confidence: 1.0,
        language: Some(""),
    });

    let mut latin = b"Hello world, ".to_vec();
    latin.extend_from_slice(&[0xE9; 50]);
    assert_eq!(detect(&latin, &config).unwrap().encoding, Some("ascii"));
}

#[test]
fn test_detectors_run_on_separate_threads() {
    let config = Arc::new(DetectorConfig::default());
    let expected: Vec<DetectionResult> = FIXTURES
        .iter()
        .map(|(_, bytes)| detect(bytes, &config).unwrap())
        .collect();

    let handles: Vec<_> = FIXTURES
        .iter()
        .map(|&(_, bytes)| {
            let config = Arc::clone(&config);
            thread::spawn(move || {
                let mut detector = UniversalDetector::new((*config).clone());
                feed_in_chunks(&mut detector, bytes, 128)
            })
        })
        .collect();

    for (handle, expected) in handles.into_iter().zip(expected) {
        let result = handle.join().expect("detector thread panicked");
        assert_eq!(result.encoding, expected.encoding);
        assert_eq!(result.language, expected.language);
    }

    // a detector can also be moved across threads mid-document
    let mut detector = UniversalDetector::new(DetectorConfig::default());
    let (_, big5) = FIXTURES[0];
    detector.feed(&big5[..300]);
    let result = thread::spawn(move || {
        detector.feed(&big5[300..]);
        detector.close()
    })
    .join()
    .expect("detector thread panicked");
    assert_eq!(result.encoding, Some("Big5"));
}
