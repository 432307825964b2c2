use charprobe::{detect, detect_all, DetectError, DetectorConfig, EncodingEra, LanguageFilter};

#[test]
fn test_zero_chunk_size() {
    let config = DetectorConfig::default().with_chunk_size(0);
    let result = detect(b"some text", &config);
    assert!(matches!(result, Err(DetectError::InvalidInput(_))));
}

#[test]
fn test_zero_byte_budget() {
    let config = DetectorConfig::default().with_max_bytes(0);
    let result = detect_all(b"some text", &config, false);
    assert!(matches!(result, Err(DetectError::InvalidInput(_))));
}

#[test]
fn test_empty_language_filter() {
    let config = DetectorConfig::default().with_language_filter(LanguageFilter::empty());
    let err = detect(b"some text", &config).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid input: language_filter must select at least one language family"
    );
}

#[test]
fn test_empty_encoding_era() {
    let config = DetectorConfig::default().with_encoding_era(EncodingEra::empty());
    assert!(matches!(detect(b"", &config), Err(DetectError::InvalidInput(_))));
}

#[test]
fn test_narrow_but_valid_configs() -> Result<(), DetectError> {
    let configs = [
        DetectorConfig::default().with_language_filter(LanguageFilter::CJK),
        DetectorConfig::default().with_language_filter(LanguageFilter::NON_CJK),
        DetectorConfig::default().with_encoding_era(EncodingEra::DOS),
        DetectorConfig::default().with_encoding_era(EncodingEra::MAINFRAME),
        DetectorConfig::default().with_chunk_size(1).with_max_bytes(1),
    ];
    for config in configs {
        assert!(config.validate().is_ok());
        let result = detect(b"plain words", &config)?;
        assert_eq!(result.encoding, Some("ascii"));
    }
    Ok(())
}

#[test]
fn test_from_env_defaults_are_valid() {
    assert!(DetectorConfig::from_env().validate().is_ok());
}
