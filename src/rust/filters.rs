//! Byte-level filters applied to a chunk before the single-byte probers see
//! it, plus the cheap scans the universal detector runs on every chunk.

use lazy_static::lazy_static;
use memchr::memmem;
use regex::bytes::Regex;

lazy_static! {
    /// A run of high bytes, optionally flanked by ASCII letters, plus at
    /// most one trailing delimiter.
    static ref INTERNATIONAL_WORD: Regex =
        Regex::new(r"(?-u)[a-zA-Z]*[\x80-\xFF]+[a-zA-Z]*[^a-zA-Z\x80-\xFF]?")
            .expect("international word pattern compiles");
    static ref ASCII_RUN: Regex =
        Regex::new(r"(?-u)[\x00-\x7F]+").expect("ascii run pattern compiles");
    /// A C1-range byte between two ASCII letters. In MacRoman 0x80..=0x9F
    /// are accented letters; in Windows-1252 they are punctuation.
    static ref MAC_LETTER: Regex =
        Regex::new(r"(?-u)[A-Za-z][\x80-\x9F][A-Za-z]").expect("mac letter pattern compiles");
}

const ESC: u8 = 0x1B;

/// Keeps only words containing at least one high byte. The delimiter after
/// each word survives as a space when it is ASCII punctuation, so bigrams
/// never span two kept words.
pub fn filter_international_words(buf: &[u8]) -> Vec<u8> {
    let mut filtered = Vec::with_capacity(buf.len());
    for word in INTERNATIONAL_WORD.find_iter(buf) {
        let word = word.as_bytes();
        let Some((&last, body)) = word.split_last() else {
            continue;
        };
        filtered.extend_from_slice(body);
        if !last.is_ascii_alphabetic() && last < 0x80 {
            filtered.push(b' ');
        } else {
            filtered.push(last);
        }
    }
    filtered
}

/// Replaces every run of ASCII bytes with a single space.
pub fn filter_high_byte_only(buf: &[u8]) -> Vec<u8> {
    ASCII_RUN.replace_all(buf, &b" "[..]).into_owned()
}

/// Drops everything between `<` and `>`. Text before each tag is followed
/// by a space; a tag left open at the end of the buffer drops its tail.
pub fn remove_xml_tags(buf: &[u8]) -> Vec<u8> {
    let mut filtered = Vec::with_capacity(buf.len());
    let mut in_tag = false;
    let mut prev = 0;
    for (curr, &byte) in buf.iter().enumerate() {
        match byte {
            b'>' => {
                prev = curr + 1;
                in_tag = false;
            }
            b'<' => {
                if curr > prev && !in_tag {
                    filtered.extend_from_slice(&buf[prev..curr]);
                    filtered.push(b' ');
                }
                in_tag = true;
            }
            _ => {}
        }
    }
    if !in_tag && prev < buf.len() {
        filtered.extend_from_slice(&buf[prev..]);
    }
    filtered
}

pub fn has_high_byte(buf: &[u8]) -> bool {
    buf.iter().any(|&b| b >= 0x80)
}

/// True when `buf` holds an ESC byte or the HZ shift-in `~{`.
pub fn has_escape_sequence(buf: &[u8]) -> bool {
    memchr::memchr(ESC, buf).is_some() || memmem::find(buf, b"~{").is_some()
}

/// True when `buf` holds a byte that is printable in Windows code pages
/// but a C1 control in ISO-8859.
pub fn has_win_bytes(buf: &[u8]) -> bool {
    buf.iter().any(|b| (0x80..=0x9F).contains(b))
}

pub fn has_mac_letter_pattern(buf: &[u8]) -> bool {
    MAC_LETTER.is_match(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_international_words() {
        // "café au lait, déjà!" in Latin-1
        let input = b"caf\xe9 au lait, d\xe9j\xe0!";
        assert_eq!(filter_international_words(input), b"caf\xe9 d\xe9j\xe0 ".to_vec());
        assert!(filter_international_words(b"plain ascii only").is_empty());
    }

    #[test]
    fn test_international_word_keeps_high_delimiter() {
        assert_eq!(filter_international_words(b"a\xe9\xe8"), b"a\xe9\xe8".to_vec());
        assert_eq!(filter_international_words(b"\xe9x\xe8"), b"\xe9x\xe8".to_vec());
    }

    #[test]
    fn test_high_byte_only() {
        assert_eq!(filter_high_byte_only(b"ab\xe0\xe1 cd\xe2"), b" \xe0\xe1 \xe2".to_vec());
        assert_eq!(filter_high_byte_only(b"\xe0"), b"\xe0".to_vec());
    }

    #[test]
    fn test_remove_xml_tags() {
        assert_eq!(remove_xml_tags(b"<p>hello</p> world"), b"hello  world".to_vec());
        assert_eq!(remove_xml_tags(b"text <unterminated"), b"text  ".to_vec());
        assert_eq!(remove_xml_tags(b"no markup"), b"no markup".to_vec());
    }

    #[test]
    fn test_scans() {
        assert!(has_high_byte(b"abc\x80"));
        assert!(!has_high_byte(b"abc"));
        assert!(has_escape_sequence(b"a\x1b$B"));
        assert!(has_escape_sequence(b"x~{y"));
        assert!(!has_escape_sequence(b"~ {"));
        assert!(has_win_bytes(b"\x93quoted\x94"));
        assert!(!has_win_bytes(b"\xe9"));
        assert!(has_mac_letter_pattern(b"caf\x8ee"));
        assert!(!has_mac_letter_pattern(b"\x93quote\x94"));
    }
}
