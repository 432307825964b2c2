//! Pretrained single-byte language models.
//!
//! Each model pairs a byte-to-order map for one charset with the 64x64
//! bigram likelihood matrix of one language. All data is generated offline.

mod arabic;
mod belarusian;
mod breton;
mod bulgarian;
mod croatian;
mod czech;
mod danish;
mod dutch;
mod english;
mod esperanto;
mod estonian;
mod farsi;
mod finnish;
mod french;
mod german;
mod greek;
mod hebrew;
mod hungarian;
mod icelandic;
mod indonesian;
mod irish;
mod italian;
mod kazakh;
mod latvian;
mod lithuanian;
mod macedonian;
mod malay;
mod maltese;
mod norwegian;
mod polish;
mod portuguese;
mod romanian;
mod russian;
mod scottish_gaelic;
mod serbian;
mod slovak;
mod slovene;
mod spanish;
mod swedish;
mod tajik;
mod thai;
mod turkish;
mod ukrainian;
mod vietnamese;
mod welsh;

pub(crate) use hebrew::WINDOWS_1255_HEBREW_MODEL;

/// Static description of one (charset, language) pair.
#[derive(Debug)]
pub struct SingleByteModel {
    pub charset_name: &'static str,
    pub language: &'static str,
    /// Byte value to frequency order; values from 251 up are categories
    pub char_to_order_map: &'static [u8; 256],
    /// `previous_order * 64 + order` to likelihood bucket
    pub language_model: &'static [u8; 4096],
    /// Share of positive sequences in the training text
    pub typical_positive_ratio: f64,
    /// Whether ASCII letters carry signal for this language
    pub keep_ascii_letters: bool,
    /// Text in this charset is stored in visual order, so bigrams read backwards
    pub reversed: bool,
}

/// Every single-byte model except logical Windows-1255 Hebrew, which gets
/// its own prober. Grouped by language; the order is the tie-break order of
/// the single-byte group.
pub(crate) static SINGLE_BYTE_MODELS: &[&SingleByteModel] = &[
    &arabic::CP720_ARABIC_MODEL,
    &arabic::CP864_ARABIC_MODEL,
    &arabic::ISO_8859_6_ARABIC_MODEL,
    &arabic::WINDOWS_1256_ARABIC_MODEL,
    &belarusian::CP866_BELARUSIAN_MODEL,
    &belarusian::ISO_8859_5_BELARUSIAN_MODEL,
    &belarusian::MACCYRILLIC_BELARUSIAN_MODEL,
    &belarusian::WINDOWS_1251_BELARUSIAN_MODEL,
    &breton::ISO_8859_14_BRETON_MODEL,
    &breton::CP037_BRETON_MODEL,
    &breton::CP500_BRETON_MODEL,
    &bulgarian::CP855_BULGARIAN_MODEL,
    &bulgarian::ISO_8859_5_BULGARIAN_MODEL,
    &bulgarian::MACCYRILLIC_BULGARIAN_MODEL,
    &bulgarian::WINDOWS_1251_BULGARIAN_MODEL,
    &croatian::CP852_CROATIAN_MODEL,
    &croatian::ISO_8859_16_CROATIAN_MODEL,
    &croatian::ISO_8859_2_CROATIAN_MODEL,
    &croatian::MACLATIN2_CROATIAN_MODEL,
    &croatian::WINDOWS_1250_CROATIAN_MODEL,
    &czech::ISO_8859_2_CZECH_MODEL,
    &czech::WINDOWS_1250_CZECH_MODEL,
    &danish::CP037_DANISH_MODEL,
    &danish::CP500_DANISH_MODEL,
    &danish::CP850_DANISH_MODEL,
    &danish::CP858_DANISH_MODEL,
    &danish::CP865_DANISH_MODEL,
    &danish::ISO_8859_1_DANISH_MODEL,
    &danish::ISO_8859_15_DANISH_MODEL,
    &danish::MACROMAN_DANISH_MODEL,
    &danish::WINDOWS_1252_DANISH_MODEL,
    &dutch::CP037_DUTCH_MODEL,
    &dutch::CP500_DUTCH_MODEL,
    &dutch::CP850_DUTCH_MODEL,
    &dutch::CP858_DUTCH_MODEL,
    &dutch::ISO_8859_1_DUTCH_MODEL,
    &dutch::ISO_8859_15_DUTCH_MODEL,
    &dutch::MACROMAN_DUTCH_MODEL,
    &dutch::WINDOWS_1252_DUTCH_MODEL,
    &english::CP037_ENGLISH_MODEL,
    &english::CP437_ENGLISH_MODEL,
    &english::CP500_ENGLISH_MODEL,
    &english::CP850_ENGLISH_MODEL,
    &english::CP858_ENGLISH_MODEL,
    &english::ISO_8859_1_ENGLISH_MODEL,
    &english::ISO_8859_15_ENGLISH_MODEL,
    &english::MACROMAN_ENGLISH_MODEL,
    &english::WINDOWS_1252_ENGLISH_MODEL,
    &esperanto::ISO_8859_3_ESPERANTO_MODEL,
    &estonian::CP775_ESTONIAN_MODEL,
    &estonian::ISO_8859_13_ESTONIAN_MODEL,
    &estonian::ISO_8859_4_ESTONIAN_MODEL,
    &estonian::WINDOWS_1257_ESTONIAN_MODEL,
    &farsi::ISO_8859_6_FARSI_MODEL,
    &farsi::WINDOWS_1256_FARSI_MODEL,
    &finnish::CP037_FINNISH_MODEL,
    &finnish::CP500_FINNISH_MODEL,
    &finnish::CP850_FINNISH_MODEL,
    &finnish::CP858_FINNISH_MODEL,
    &finnish::ISO_8859_1_FINNISH_MODEL,
    &finnish::ISO_8859_15_FINNISH_MODEL,
    &finnish::MACROMAN_FINNISH_MODEL,
    &finnish::WINDOWS_1252_FINNISH_MODEL,
    &french::CP037_FRENCH_MODEL,
    &french::CP500_FRENCH_MODEL,
    &french::CP850_FRENCH_MODEL,
    &french::CP858_FRENCH_MODEL,
    &french::CP863_FRENCH_MODEL,
    &french::ISO_8859_1_FRENCH_MODEL,
    &french::ISO_8859_15_FRENCH_MODEL,
    &french::MACROMAN_FRENCH_MODEL,
    &french::WINDOWS_1252_FRENCH_MODEL,
    &german::CP037_GERMAN_MODEL,
    &german::CP500_GERMAN_MODEL,
    &german::CP850_GERMAN_MODEL,
    &german::CP858_GERMAN_MODEL,
    &german::ISO_8859_1_GERMAN_MODEL,
    &german::ISO_8859_15_GERMAN_MODEL,
    &german::MACROMAN_GERMAN_MODEL,
    &german::WINDOWS_1252_GERMAN_MODEL,
    &greek::CP737_GREEK_MODEL,
    &greek::CP869_GREEK_MODEL,
    &greek::CP875_GREEK_MODEL,
    &greek::ISO_8859_7_GREEK_MODEL,
    &greek::MACGREEK_GREEK_MODEL,
    &greek::WINDOWS_1253_GREEK_MODEL,
    &hebrew::CP424_HEBREW_MODEL,
    &hebrew::CP856_HEBREW_MODEL,
    &hebrew::CP862_HEBREW_MODEL,
    &hungarian::CP852_HUNGARIAN_MODEL,
    &hungarian::ISO_8859_16_HUNGARIAN_MODEL,
    &hungarian::ISO_8859_2_HUNGARIAN_MODEL,
    &hungarian::MACLATIN2_HUNGARIAN_MODEL,
    &hungarian::WINDOWS_1250_HUNGARIAN_MODEL,
    &icelandic::CP037_ICELANDIC_MODEL,
    &icelandic::CP500_ICELANDIC_MODEL,
    &icelandic::CP861_ICELANDIC_MODEL,
    &icelandic::ISO_8859_10_ICELANDIC_MODEL,
    &icelandic::ISO_8859_1_ICELANDIC_MODEL,
    &icelandic::MACICELAND_ICELANDIC_MODEL,
    &indonesian::CP037_INDONESIAN_MODEL,
    &indonesian::CP500_INDONESIAN_MODEL,
    &indonesian::ISO_8859_1_INDONESIAN_MODEL,
    &indonesian::MACROMAN_INDONESIAN_MODEL,
    &indonesian::WINDOWS_1252_INDONESIAN_MODEL,
    &irish::ISO_8859_14_IRISH_MODEL,
    &irish::CP037_IRISH_MODEL,
    &irish::CP500_IRISH_MODEL,
    &italian::CP037_ITALIAN_MODEL,
    &italian::CP500_ITALIAN_MODEL,
    &italian::CP850_ITALIAN_MODEL,
    &italian::CP858_ITALIAN_MODEL,
    &italian::ISO_8859_1_ITALIAN_MODEL,
    &italian::ISO_8859_15_ITALIAN_MODEL,
    &italian::MACROMAN_ITALIAN_MODEL,
    &italian::WINDOWS_1252_ITALIAN_MODEL,
    &kazakh::KZ1048_KAZAKH_MODEL,
    &kazakh::PTCP154_KAZAKH_MODEL,
    &latvian::CP775_LATVIAN_MODEL,
    &latvian::ISO_8859_13_LATVIAN_MODEL,
    &latvian::ISO_8859_4_LATVIAN_MODEL,
    &latvian::WINDOWS_1257_LATVIAN_MODEL,
    &lithuanian::CP775_LITHUANIAN_MODEL,
    &lithuanian::ISO_8859_13_LITHUANIAN_MODEL,
    &lithuanian::ISO_8859_4_LITHUANIAN_MODEL,
    &lithuanian::WINDOWS_1257_LITHUANIAN_MODEL,
    &macedonian::CP855_MACEDONIAN_MODEL,
    &macedonian::ISO_8859_5_MACEDONIAN_MODEL,
    &macedonian::MACCYRILLIC_MACEDONIAN_MODEL,
    &macedonian::WINDOWS_1251_MACEDONIAN_MODEL,
    &malay::CP037_MALAY_MODEL,
    &malay::CP500_MALAY_MODEL,
    &malay::ISO_8859_1_MALAY_MODEL,
    &malay::MACROMAN_MALAY_MODEL,
    &malay::WINDOWS_1252_MALAY_MODEL,
    &maltese::ISO_8859_3_MALTESE_MODEL,
    &norwegian::CP037_NORWEGIAN_MODEL,
    &norwegian::CP500_NORWEGIAN_MODEL,
    &norwegian::CP850_NORWEGIAN_MODEL,
    &norwegian::CP858_NORWEGIAN_MODEL,
    &norwegian::CP865_NORWEGIAN_MODEL,
    &norwegian::ISO_8859_1_NORWEGIAN_MODEL,
    &norwegian::ISO_8859_15_NORWEGIAN_MODEL,
    &norwegian::MACROMAN_NORWEGIAN_MODEL,
    &norwegian::WINDOWS_1252_NORWEGIAN_MODEL,
    &polish::CP852_POLISH_MODEL,
    &polish::ISO_8859_16_POLISH_MODEL,
    &polish::ISO_8859_2_POLISH_MODEL,
    &polish::MACLATIN2_POLISH_MODEL,
    &polish::WINDOWS_1250_POLISH_MODEL,
    &portuguese::CP037_PORTUGUESE_MODEL,
    &portuguese::CP500_PORTUGUESE_MODEL,
    &portuguese::CP850_PORTUGUESE_MODEL,
    &portuguese::CP858_PORTUGUESE_MODEL,
    &portuguese::CP860_PORTUGUESE_MODEL,
    &portuguese::ISO_8859_1_PORTUGUESE_MODEL,
    &portuguese::ISO_8859_15_PORTUGUESE_MODEL,
    &portuguese::MACROMAN_PORTUGUESE_MODEL,
    &portuguese::WINDOWS_1252_PORTUGUESE_MODEL,
    &romanian::CP852_ROMANIAN_MODEL,
    &romanian::ISO_8859_16_ROMANIAN_MODEL,
    &romanian::ISO_8859_2_ROMANIAN_MODEL,
    &romanian::MACLATIN2_ROMANIAN_MODEL,
    &romanian::WINDOWS_1250_ROMANIAN_MODEL,
    &russian::CP855_RUSSIAN_MODEL,
    &russian::CP866_RUSSIAN_MODEL,
    &russian::ISO_8859_5_RUSSIAN_MODEL,
    &russian::KOI8_R_RUSSIAN_MODEL,
    &russian::MACCYRILLIC_RUSSIAN_MODEL,
    &russian::WINDOWS_1251_RUSSIAN_MODEL,
    &serbian::CP855_SERBIAN_MODEL,
    &serbian::ISO_8859_5_SERBIAN_MODEL,
    &serbian::MACCYRILLIC_SERBIAN_MODEL,
    &serbian::WINDOWS_1251_SERBIAN_MODEL,
    &scottish_gaelic::ISO_8859_14_SCOTTISH_GAELIC_MODEL,
    &scottish_gaelic::CP037_SCOTTISH_GAELIC_MODEL,
    &scottish_gaelic::CP500_SCOTTISH_GAELIC_MODEL,
    &slovak::CP852_SLOVAK_MODEL,
    &slovak::ISO_8859_16_SLOVAK_MODEL,
    &slovak::ISO_8859_2_SLOVAK_MODEL,
    &slovak::MACLATIN2_SLOVAK_MODEL,
    &slovak::WINDOWS_1250_SLOVAK_MODEL,
    &slovene::CP852_SLOVENE_MODEL,
    &slovene::ISO_8859_16_SLOVENE_MODEL,
    &slovene::ISO_8859_2_SLOVENE_MODEL,
    &slovene::MACLATIN2_SLOVENE_MODEL,
    &slovene::WINDOWS_1250_SLOVENE_MODEL,
    &spanish::CP037_SPANISH_MODEL,
    &spanish::CP500_SPANISH_MODEL,
    &spanish::CP850_SPANISH_MODEL,
    &spanish::CP858_SPANISH_MODEL,
    &spanish::ISO_8859_1_SPANISH_MODEL,
    &spanish::ISO_8859_15_SPANISH_MODEL,
    &spanish::MACROMAN_SPANISH_MODEL,
    &spanish::WINDOWS_1252_SPANISH_MODEL,
    &swedish::CP037_SWEDISH_MODEL,
    &swedish::CP500_SWEDISH_MODEL,
    &swedish::CP850_SWEDISH_MODEL,
    &swedish::CP858_SWEDISH_MODEL,
    &swedish::ISO_8859_1_SWEDISH_MODEL,
    &swedish::ISO_8859_15_SWEDISH_MODEL,
    &swedish::MACROMAN_SWEDISH_MODEL,
    &swedish::WINDOWS_1252_SWEDISH_MODEL,
    &tajik::KOI8_T_TAJIK_MODEL,
    &thai::CP874_THAI_MODEL,
    &thai::ISO_8859_11_THAI_MODEL,
    &thai::TIS_620_THAI_MODEL,
    &turkish::CP1026_TURKISH_MODEL,
    &turkish::CP857_TURKISH_MODEL,
    &turkish::ISO_8859_3_TURKISH_MODEL,
    &turkish::ISO_8859_9_TURKISH_MODEL,
    &turkish::MACTURKISH_TURKISH_MODEL,
    &turkish::WINDOWS_1254_TURKISH_MODEL,
    &ukrainian::CP1125_UKRAINIAN_MODEL,
    &ukrainian::ISO_8859_5_UKRAINIAN_MODEL,
    &ukrainian::KOI8_U_UKRAINIAN_MODEL,
    &ukrainian::MACCYRILLIC_UKRAINIAN_MODEL,
    &ukrainian::WINDOWS_1251_UKRAINIAN_MODEL,
    &welsh::ISO_8859_14_WELSH_MODEL,
    &welsh::CP037_WELSH_MODEL,
    &welsh::CP500_WELSH_MODEL,
    &vietnamese::WINDOWS_1258_VIETNAMESE_MODEL,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding_era;
    use crate::enums::{CharacterCategory, EncodingEra, SequenceLikelihood};
    use std::collections::HashSet;

    #[test]
    fn test_models_are_well_formed() {
        for model in SINGLE_BYTE_MODELS.iter().chain([&&WINDOWS_1255_HEBREW_MODEL]) {
            assert!(
                model.typical_positive_ratio > 0.0 && model.typical_positive_ratio <= 1.0,
                "{} {}",
                model.charset_name,
                model.language
            );
            assert!(model
                .language_model
                .iter()
                .all(|&bucket| (bucket as usize) < SequenceLikelihood::COUNT));
        }
    }

    #[test]
    fn test_ascii_digits_are_not_letters() {
        for model in SINGLE_BYTE_MODELS {
            for digit in b'0'..=b'9' {
                assert!(model.char_to_order_map[digit as usize] >= CharacterCategory::CONTROL);
            }
        }
    }

    #[test]
    fn test_roster_is_grouped_by_language() {
        let mut languages: Vec<&str> = SINGLE_BYTE_MODELS.iter().map(|m| m.language).collect();
        languages.dedup();
        let distinct: HashSet<&str> = languages.iter().copied().collect();
        assert_eq!(languages.len(), distinct.len());
        assert_eq!(languages.len(), 45);
        assert_eq!(SINGLE_BYTE_MODELS.len(), 222);
    }

    #[test]
    fn test_every_era_has_models() {
        for era in [
            EncodingEra::MODERN_WEB,
            EncodingEra::LEGACY,
            EncodingEra::DOS,
            EncodingEra::MAINFRAME,
        ] {
            assert!(
                SINGLE_BYTE_MODELS
                    .iter()
                    .any(|model| encoding_era(model.charset_name) == era),
                "{:?}",
                era
            );
        }
        for windows in 1250..=1258 {
            let name = format!("Windows-{}", windows);
            assert!(
                SINGLE_BYTE_MODELS.iter().any(|model| model.charset_name == name)
                    || WINDOWS_1255_HEBREW_MODEL.charset_name == name,
                "{}",
                name
            );
        }
    }

    #[test]
    fn test_only_visual_hebrew_reads_backwards() {
        for model in SINGLE_BYTE_MODELS {
            let visual = matches!(model.charset_name, "CP424" | "CP856" | "CP862");
            assert_eq!(model.reversed, visual, "{} {}", model.charset_name, model.language);
        }
        assert!(!WINDOWS_1255_HEBREW_MODEL.reversed);
    }
}
