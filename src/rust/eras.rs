use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::enums::EncodingEra;

lazy_static! {
    static ref ENCODING_ERA_MAP: HashMap<&'static str, EncodingEra> = {
        use EncodingEra as E;
        let entries: &[(&'static str, EncodingEra)] = &[
            // Unicode
            ("UTF-8", E::MODERN_WEB),
            ("UTF-16", E::MODERN_WEB),
            ("UTF-16BE", E::MODERN_WEB),
            ("UTF-16LE", E::MODERN_WEB),
            ("UTF-32", E::MODERN_WEB),
            ("UTF-32BE", E::MODERN_WEB),
            ("UTF-32LE", E::MODERN_WEB),
            // Windows code pages still served on the web
            ("WINDOWS-1250", E::MODERN_WEB),
            ("WINDOWS-1251", E::MODERN_WEB),
            ("WINDOWS-1252", E::MODERN_WEB),
            ("WINDOWS-1253", E::MODERN_WEB),
            ("WINDOWS-1254", E::MODERN_WEB),
            ("WINDOWS-1255", E::MODERN_WEB),
            ("WINDOWS-1256", E::MODERN_WEB),
            ("WINDOWS-1257", E::MODERN_WEB),
            ("WINDOWS-1258", E::MODERN_WEB),
            ("CP874", E::MODERN_WEB),
            ("TIS-620", E::MODERN_WEB),
            ("KOI8-R", E::MODERN_WEB),
            ("KOI8-U", E::MODERN_WEB),
            // East Asian multi-byte
            ("GB18030", E::MODERN_WEB),
            ("BIG5", E::MODERN_WEB),
            ("SHIFT-JIS", E::MODERN_WEB),
            ("EUC-JP", E::MODERN_WEB),
            ("EUC-KR", E::MODERN_WEB),
            ("CP949", E::MODERN_WEB),
            ("ISO-2022-JP", E::MODERN_WEB),
            ("ISO-2022-KR", E::MODERN_WEB),
            // ISO and Mac families
            ("ISO-8859-1", E::LEGACY),
            ("ISO-8859-2", E::LEGACY),
            ("ISO-8859-3", E::LEGACY),
            ("ISO-8859-4", E::LEGACY),
            ("ISO-8859-5", E::LEGACY),
            ("ISO-8859-6", E::LEGACY),
            ("ISO-8859-7", E::LEGACY),
            ("ISO-8859-8", E::LEGACY),
            ("ISO-8859-9", E::LEGACY),
            ("ISO-8859-10", E::LEGACY),
            ("ISO-8859-11", E::LEGACY),
            ("ISO-8859-13", E::LEGACY),
            ("ISO-8859-14", E::LEGACY),
            ("ISO-8859-15", E::LEGACY),
            ("ISO-8859-16", E::LEGACY),
            ("MACCYRILLIC", E::LEGACY),
            ("MACGREEK", E::LEGACY),
            ("MACICELAND", E::LEGACY),
            ("MACLATIN2", E::LEGACY),
            ("MACROMAN", E::LEGACY),
            ("MACTURKISH", E::LEGACY),
            ("KOI8-T", E::LEGACY),
            ("KZ1048", E::LEGACY),
            ("PTCP154", E::LEGACY),
            ("CP1125", E::LEGACY),
            ("CP720", E::LEGACY),
            ("CP1006", E::LEGACY),
            ("GB2312", E::LEGACY),
            ("EUC-TW", E::LEGACY),
            ("JOHAB", E::LEGACY),
            ("CP932", E::LEGACY),
            // DOS
            ("CP437", E::DOS),
            ("CP737", E::DOS),
            ("CP775", E::DOS),
            ("CP850", E::DOS),
            ("CP852", E::DOS),
            ("CP855", E::DOS),
            ("CP856", E::DOS),
            ("CP857", E::DOS),
            ("CP858", E::DOS),
            ("CP860", E::DOS),
            ("CP861", E::DOS),
            ("CP862", E::DOS),
            ("CP863", E::DOS),
            ("CP864", E::DOS),
            ("CP865", E::DOS),
            ("CP866", E::DOS),
            ("CP869", E::DOS),
            // EBCDIC
            ("CP037", E::MAINFRAME),
            ("CP424", E::MAINFRAME),
            ("CP500", E::MAINFRAME),
            ("CP875", E::MAINFRAME),
            ("CP1026", E::MAINFRAME),
        ];
        entries.iter().copied().collect()
    };
}

/// Returns the usage era of a charset name. Lookup ignores case and treats
/// `_` like `-`; names not in the table count as modern web encodings.
pub fn encoding_era(name: &str) -> EncodingEra {
    let normalized = name.to_ascii_uppercase().replace('_', "-");
    ENCODING_ERA_MAP
        .get(normalized.as_str())
        .copied()
        .unwrap_or(EncodingEra::MODERN_WEB)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_eras() {
        assert_eq!(encoding_era("Windows-1252"), EncodingEra::MODERN_WEB);
        assert_eq!(encoding_era("iso-8859-1"), EncodingEra::LEGACY);
        assert_eq!(encoding_era("MacRoman"), EncodingEra::LEGACY);
        assert_eq!(encoding_era("cp850"), EncodingEra::DOS);
        assert_eq!(encoding_era("CP500"), EncodingEra::MAINFRAME);
        assert_eq!(encoding_era("CP1006"), EncodingEra::LEGACY);
        assert_eq!(encoding_era("KOI8-U"), EncodingEra::MODERN_WEB);
    }

    #[test]
    fn test_normalization_and_default() {
        assert_eq!(encoding_era("shift_jis"), EncodingEra::MODERN_WEB);
        assert_eq!(encoding_era("iso_8859_15"), EncodingEra::LEGACY);
        assert_eq!(encoding_era("x-unheard-of"), EncodingEra::MODERN_WEB);
    }
}
