use charprobe::{detect, detect_all, DetectionResult, DetectorConfig, EncodingEra};
use env_logger::{Builder, Env};

const FRENCH_LATIN1: &[u8] = include_bytes!("data/french.latin1.txt");
const CHINESE_BIG5: &[u8] = include_bytes!("data/chinese.big5.txt");
const GERMAN_UTF8: &[u8] = include_bytes!("data/german.utf-8.txt");
const GREEK_ISO_8859_7: &[u8] = include_bytes!("data/greek.iso-8859-7.txt");
const HEBREW_WINDOWS_1255: &[u8] = include_bytes!("data/hebrew.windows-1255.txt");
const JAPANESE_ISO_2022_JP: &[u8] = include_bytes!("data/japanese.iso-2022-jp.txt");
const RUSSIAN_KOI8_R: &[u8] = include_bytes!("data/russian.koi8-r.txt");
const RUSSIAN_WINDOWS_1251: &[u8] = include_bytes!("data/russian.windows-1251.txt");
const TURKISH_WINDOWS_1254: &[u8] = include_bytes!("data/turkish.windows-1254.txt");
const ARABIC_WINDOWS_1256: &[u8] = include_bytes!("data/arabic.windows-1256.txt");
const UKRAINIAN_KOI8_U: &[u8] = include_bytes!("data/ukrainian.koi8-u.txt");
const FRENCH_CP500: &[u8] = include_bytes!("data/french.cp500.txt");

fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or("warn"))
        .is_test(true)
        .try_init();
}

/// Every era, legacy names kept as detected.
fn all_eras() -> DetectorConfig {
    DetectorConfig::default()
        .with_encoding_era(EncodingEra::ALL)
        .with_rename_legacy(false)
}

#[test]
fn test_plain_ascii() -> Result<(), Box<dyn std::error::Error>> {
    init();
    let result = detect(b"Hello, world!", &DetectorConfig::default())?;
    assert_eq!(
        result,
        DetectionResult {
            encoding: Some("ascii"),
            confidence: 1.0,
            language: Some(""),
        }
    );
    Ok(())
}

#[test]
fn test_utf8_bom() -> Result<(), Box<dyn std::error::Error>> {
    init();
    let mut bytes = b"\xEF\xBB\xBF".to_vec();
    bytes.extend_from_slice(GERMAN_UTF8);
    let result = detect(&bytes, &DetectorConfig::default())?;
    assert_eq!(result.encoding, Some("UTF-8-SIG"));
    assert_eq!(result.confidence, 1.0);
    Ok(())
}

#[test]
fn test_french_latin1() -> Result<(), Box<dyn std::error::Error>> {
    init();
    assert!(!FRENCH_LATIN1.iter().any(|b| (0x80..=0x9F).contains(b)));

    let result = detect(FRENCH_LATIN1, &all_eras())?;
    assert_eq!(result.encoding, Some("ISO-8859-1"));
    assert_eq!(result.language, Some("French"));
    assert!(result.confidence > 0.20);

    let renamed = detect(FRENCH_LATIN1, &all_eras().with_rename_legacy(true))?;
    assert_eq!(renamed.encoding, Some("Windows-1252"));
    assert_eq!(renamed.language, Some("French"));
    Ok(())
}

#[test]
fn test_windows_byte_upgrades_iso_8859_1() -> Result<(), Box<dyn std::error::Error>> {
    init();
    // a right single quotation mark, which only Windows-1252 has
    let mut bytes = FRENCH_LATIN1.to_vec();
    let quote = bytes
        .windows(2)
        .position(|pair| pair == b"l'")
        .expect("sample has an elided article");
    bytes[quote + 1] = 0x92;

    let result = detect(&bytes, &all_eras())?;
    assert_eq!(result.encoding, Some("Windows-1252"));
    assert_eq!(result.language, Some("French"));
    Ok(())
}

#[test]
fn test_big5_chinese() -> Result<(), Box<dyn std::error::Error>> {
    init();
    let result = detect(CHINESE_BIG5, &DetectorConfig::default())?;
    assert_eq!(result.encoding, Some("Big5"));
    assert_eq!(result.language, Some("Chinese"));
    assert!(result.confidence > 0.20);
    Ok(())
}

#[test]
fn test_bomless_utf16le() -> Result<(), Box<dyn std::error::Error>> {
    init();
    let result = detect(&b"a\x00".repeat(100), &DetectorConfig::default())?;
    assert_eq!(result.encoding, Some("utf-16le"));
    assert_eq!(result.confidence, 0.85);
    assert_eq!(result.language, Some(""));
    Ok(())
}

#[test]
fn test_single_byte_languages() -> Result<(), Box<dyn std::error::Error>> {
    init();
    let config = DetectorConfig::default();
    let cases: [(&[u8], &str, &str); 4] = [
        (RUSSIAN_KOI8_R, "KOI8-R", "Russian"),
        (RUSSIAN_WINDOWS_1251, "Windows-1251", "Russian"),
        (GREEK_ISO_8859_7, "Windows-1253", "Greek"),
        (HEBREW_WINDOWS_1255, "Windows-1255", "Hebrew"),
    ];
    for (bytes, encoding, language) in cases {
        let result = detect(bytes, &config)?;
        assert_eq!(result.encoding, Some(encoding));
        assert_eq!(result.language, Some(language));
        assert!(result.confidence > 0.9, "{:?}", result);
    }

    let greek = detect(GREEK_ISO_8859_7, &all_eras())?;
    assert_eq!(greek.encoding, Some("ISO-8859-7"));
    Ok(())
}

#[test]
fn test_regional_single_byte_languages() -> Result<(), Box<dyn std::error::Error>> {
    init();
    let config = DetectorConfig::default();
    let cases: [(&[u8], &str, &str); 3] = [
        (TURKISH_WINDOWS_1254, "Windows-1254", "Turkish"),
        (ARABIC_WINDOWS_1256, "Windows-1256", "Arabic"),
        (UKRAINIAN_KOI8_U, "KOI8-U", "Ukrainian"),
    ];
    for (bytes, encoding, language) in cases {
        let result = detect(bytes, &config)?;
        assert_eq!(result.encoding, Some(encoding));
        assert_eq!(result.language, Some(language));
        assert!(result.confidence > 0.9, "{:?}", result);
    }

    // KOI8-R reads Ukrainian nearly as well, but not quite
    let all = detect_all(UKRAINIAN_KOI8_U, &config, false)?;
    assert!(all.iter().any(|candidate| candidate.encoding == Some("KOI8-R")));
    Ok(())
}

#[test]
fn test_mainframe_ebcdic() -> Result<(), Box<dyn std::error::Error>> {
    init();
    let config = DetectorConfig::default()
        .with_encoding_era(EncodingEra::MAINFRAME)
        .with_rename_legacy(false);
    let result = detect(FRENCH_CP500, &config)?;
    // CP037 and CP500 agree on every byte this sample uses
    assert!(matches!(result.encoding, Some("CP500") | Some("CP037")), "{:?}", result);
    assert_eq!(result.language, Some("French"));

    let modern = detect(FRENCH_CP500, &DetectorConfig::default())?;
    assert!(!matches!(modern.encoding, Some("CP500") | Some("CP037")));
    Ok(())
}

#[test]
fn test_fixtures_detect_as_decodable_encoding() -> Result<(), Box<dyn std::error::Error>> {
    init();
    // each sample with the encoding it was written in and the encodings that
    // decode it to the same text
    let fixtures: [(&[u8], &[&str]); 11] = [
        (ARABIC_WINDOWS_1256, &["Windows-1256"]),
        (CHINESE_BIG5, &["Big5"]),
        (FRENCH_LATIN1, &["ISO-8859-1", "Windows-1252"]),
        (GERMAN_UTF8, &["utf-8"]),
        (GREEK_ISO_8859_7, &["ISO-8859-7", "Windows-1253"]),
        (HEBREW_WINDOWS_1255, &["Windows-1255"]),
        (JAPANESE_ISO_2022_JP, &["ISO-2022-JP"]),
        (RUSSIAN_KOI8_R, &["KOI8-R"]),
        (RUSSIAN_WINDOWS_1251, &["Windows-1251"]),
        (TURKISH_WINDOWS_1254, &["Windows-1254"]),
        (UKRAINIAN_KOI8_U, &["KOI8-U"]),
    ];
    for (bytes, equivalents) in fixtures {
        let result = detect(bytes, &DetectorConfig::default())?;
        let encoding = result.encoding.unwrap_or_default();
        assert!(equivalents.contains(&encoding), "{:?} not in {:?}", result, equivalents);
    }
    Ok(())
}

#[test]
fn test_escape_encoding() -> Result<(), Box<dyn std::error::Error>> {
    init();
    let result = detect(JAPANESE_ISO_2022_JP, &DetectorConfig::default())?;
    assert_eq!(result.encoding, Some("ISO-2022-JP"));
    assert_eq!(result.language, Some("Japanese"));
    assert_eq!(result.confidence, 0.99);
    Ok(())
}

#[test]
fn test_utf8_text() -> Result<(), Box<dyn std::error::Error>> {
    init();
    let result = detect(GERMAN_UTF8, &DetectorConfig::default())?;
    assert_eq!(result.encoding, Some("utf-8"));
    assert_eq!(result.confidence, 0.99);
    Ok(())
}

#[test]
fn test_binary_and_empty_input_have_no_encoding() -> Result<(), Box<dyn std::error::Error>> {
    init();
    let binary: Vec<u8> = (0..2048u32).map(|i| if i % 7 == 0 { 0 } else { (i * 31 % 251) as u8 }).collect();
    let result = detect(&binary, &DetectorConfig::default())?;
    assert_eq!(result.encoding, None);
    assert_eq!(result.confidence, 0.0);

    let empty = detect(b"", &DetectorConfig::default())?;
    assert_eq!(empty, DetectionResult::default());
    Ok(())
}

#[test]
fn test_detect_all_leads_with_detect() -> Result<(), Box<dyn std::error::Error>> {
    init();
    let samples: [&[u8]; 6] = [
        FRENCH_LATIN1,
        CHINESE_BIG5,
        GERMAN_UTF8,
        RUSSIAN_WINDOWS_1251,
        JAPANESE_ISO_2022_JP,
        b"Hello, world!",
    ];
    for config in [DetectorConfig::default(), all_eras()] {
        for bytes in samples {
            let single = detect(bytes, &config)?;
            let all = detect_all(bytes, &config, false)?;
            assert_eq!(all[0], single);
            assert!(all[1..]
                .windows(2)
                .all(|pair| pair[0].confidence >= pair[1].confidence));
            assert!(all[1..].iter().all(|candidate| candidate.confidence > 0.20));
            assert!(!all[1..].iter().any(|candidate| {
                candidate.encoding == single.encoding && candidate.language == single.language
            }));
        }
    }
    Ok(())
}

#[test]
fn test_detect_all_offers_alternatives() -> Result<(), Box<dyn std::error::Error>> {
    init();
    let all = detect_all(FRENCH_LATIN1, &all_eras(), false)?;
    assert_eq!(all[0].encoding, Some("ISO-8859-1"));
    assert!(all.len() > 1);
    assert!(all.iter().any(|candidate| candidate.encoding == Some("Windows-1252")));

    let everything = detect_all(FRENCH_LATIN1, &all_eras(), true)?;
    assert!(everything.len() >= all.len());

    let ascii = detect_all(b"just ascii", &DetectorConfig::default(), false)?;
    assert_eq!(ascii.len(), 1);
    assert_eq!(ascii[0].encoding, Some("ascii"));
    Ok(())
}
