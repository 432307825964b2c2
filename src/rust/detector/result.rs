use serde::Serialize;
use std::fmt;

/// Outcome of a detection run.
///
/// `encoding` is `None` when nothing qualified. `language` is `Some("")`
/// for language-neutral encodings (ASCII, the Unicode family, BOM hits)
/// and `None` when no guess was made at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DetectionResult {
    pub encoding: Option<&'static str>,
    pub confidence: f64,
    pub language: Option<&'static str>,
}

impl DetectionResult {
    pub(crate) const UNSET: DetectionResult = DetectionResult {
        encoding: None,
        confidence: 0.0,
        language: None,
    };

    pub(crate) fn neutral(encoding: &'static str, confidence: f64) -> Self {
        Self {
            encoding: Some(encoding),
            confidence,
            language: Some(""),
        }
    }
}

impl Default for DetectionResult {
    fn default() -> Self {
        Self::UNSET
    }
}

impl fmt::Display for DetectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.encoding {
            Some(encoding) => write!(f, "{} with confidence {}", encoding, self.confidence),
            None => write!(f, "no result"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_to_flat_object() {
        let result = DetectionResult {
            encoding: Some("Big5"),
            confidence: 0.99,
            language: Some("Chinese"),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"encoding":"Big5","confidence":0.99,"language":"Chinese"}"#);

        let json = serde_json::to_string(&DetectionResult::default()).unwrap();
        assert_eq!(json, r#"{"encoding":null,"confidence":0.0,"language":null}"#);
    }

    #[test]
    fn test_display() {
        assert_eq!(DetectionResult::neutral("ascii", 1.0).to_string(), "ascii with confidence 1");
        assert_eq!(DetectionResult::UNSET.to_string(), "no result");
    }
}
