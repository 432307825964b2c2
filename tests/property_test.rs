//! Property-based tests for the detector.
//!
//! 1. Confidence always lies in [0, 1], for any bytes.
//! 2. `detect_all` always leads with what `detect` returns.
//! 3. A leading byte order mark settles the verdict at 1.0.
//! 4. 7-bit text without escapes is reported as ascii.
//! 5. How UTF-8 text is split into chunks does not change the verdict.

use charprobe::{detect, detect_all, DetectorConfig, EncodingEra, UniversalDetector};
use proptest::prelude::*;

fn config_strategy() -> impl Strategy<Value = DetectorConfig> {
    (any::<bool>(), 1usize..4096).prop_map(|(all_eras, chunk_size)| {
        let config = DetectorConfig::default().with_chunk_size(chunk_size);
        if all_eras {
            config.with_encoding_era(EncodingEra::ALL)
        } else {
            config
        }
    })
}

/// Latin text with at least six accented letters, encoded as UTF-8.
fn accented_utf8_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(("[a-z ]{0,8}", "[à-ÿ]"), 6..40).prop_map(|pieces| {
        pieces
            .into_iter()
            .flat_map(|(plain, accented)| [plain, accented])
            .collect::<String>()
            .into_bytes()
    })
}

proptest! {
    #[test]
    fn confidence_is_a_probability(
        bytes in prop::collection::vec(any::<u8>(), 0..2048),
        config in config_strategy(),
    ) {
        let result = detect(&bytes, &config).unwrap();
        prop_assert!((0.0..=1.0).contains(&result.confidence), "{:?}", result);
        for candidate in detect_all(&bytes, &config, true).unwrap() {
            prop_assert!((0.0..=1.0).contains(&candidate.confidence), "{:?}", candidate);
        }
    }

    #[test]
    fn detect_all_leads_with_detect(
        bytes in prop::collection::vec(any::<u8>(), 0..2048),
        config in config_strategy(),
        ignore_threshold in any::<bool>(),
    ) {
        let all = detect_all(&bytes, &config, ignore_threshold).unwrap();
        prop_assert_eq!(all[0], detect(&bytes, &config).unwrap());
    }

    #[test]
    fn byte_order_mark_wins(
        tail in prop::collection::vec(any::<u8>(), 0..300),
        chunk_size in 3usize..64,
    ) {
        let config = DetectorConfig::default().with_chunk_size(chunk_size);

        let mut utf8 = b"\xEF\xBB\xBF".to_vec();
        utf8.extend_from_slice(&tail);
        let result = detect(&utf8, &config).unwrap();
        prop_assert_eq!(result.encoding, Some("UTF-8-SIG"));
        prop_assert_eq!(result.confidence, 1.0);

        let mut utf16 = b"\xFE\xFF".to_vec();
        utf16.extend_from_slice(&tail);
        let result = detect(&utf16, &config).unwrap();
        prop_assert_eq!(result.encoding, Some("UTF-16"));
        prop_assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn plain_text_is_ascii(text in "[a-zA-Z0-9 ,.!?\n]{1,500}", chunk_size in 1usize..128) {
        let config = DetectorConfig::default().with_chunk_size(chunk_size);
        let result = detect(text.as_bytes(), &config).unwrap();
        prop_assert_eq!(result.encoding, Some("ascii"));
        prop_assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn utf8_verdict_ignores_chunking(bytes in accented_utf8_strategy(), chunk_size in 1usize..64) {
        let whole = detect(&bytes, &DetectorConfig::default()).unwrap();

        let mut detector = UniversalDetector::new(DetectorConfig::default());
        for chunk in bytes.chunks(chunk_size) {
            detector.feed(chunk);
        }
        let streamed = detector.close();

        prop_assert_eq!(whole.encoding, Some("utf-8"));
        prop_assert_eq!(streamed.encoding, whole.encoding);
    }
}
