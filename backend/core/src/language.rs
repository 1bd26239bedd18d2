use serde::{Deserialize, Serialize};

use crate::error::TranscribeError;

/// Client-supplied language selector for the transcription endpoint.
///
/// `Auto` and an absent selector are semantically identical (the model
/// auto-detects the language) but remain distinct wire values: absence is
/// handled before parsing, so the rejection message only ever lists the three
/// wire codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    Auto,
}

impl Language {
    /// Parse a wire-level selector. Case-sensitive exact match; anything
    /// outside the supported set is rejected.
    pub fn parse(raw: &str) -> Result<Self, TranscribeError> {
        match raw {
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            "auto" => Ok(Self::Auto),
            _ => Err(TranscribeError::InvalidLanguage),
        }
    }

    /// The hint to pass to the speech model. `Auto` normalizes to no hint.
    pub fn hint(self) -> Option<&'static str> {
        match self {
            Self::En => Some("en"),
            Self::Es => Some("es"),
            Self::Auto => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Auto => "auto",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_codes() {
        assert_eq!(Language::parse("en").unwrap(), Language::En);
        assert_eq!(Language::parse("es").unwrap(), Language::Es);
        assert_eq!(Language::parse("auto").unwrap(), Language::Auto);
    }

    #[test]
    fn rejects_unsupported_codes() {
        for raw in ["fr", "EN", "english", " en", "en "] {
            assert!(matches!(
                Language::parse(raw),
                Err(TranscribeError::InvalidLanguage)
            ));
        }
    }

    #[test]
    fn auto_normalizes_to_no_hint() {
        assert_eq!(Language::Auto.hint(), None);
        assert_eq!(Language::En.hint(), Some("en"));
        assert_eq!(Language::Es.hint(), Some("es"));
    }
}
