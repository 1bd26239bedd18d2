use serde::{Deserialize, Serialize};

/// Substituted when the model returns no recognizable speech, so the `text`
/// field in a success response is never empty.
pub const NO_SPEECH_PLACEHOLDER: &str = "No speech detected.";

/// Substituted when the model does not report a detected language.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// A completed transcription as returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcription {
    /// Recognized text, trimmed, never empty.
    pub text: String,
    /// Detected language code (kept alongside `detected_language` for wire
    /// compatibility with existing clients).
    pub language: String,
    pub detected_language: String,
}

impl Transcription {
    /// Shape raw model output into the response form: trim the text,
    /// substitute the sentinels for empty text and missing language.
    pub fn from_model_output(text: &str, detected_language: Option<String>) -> Self {
        let trimmed = text.trim();
        let text = if trimmed.is_empty() {
            NO_SPEECH_PLACEHOLDER.to_string()
        } else {
            trimmed.to_string()
        };
        let language = detected_language.unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string());
        Self {
            text,
            detected_language: language.clone(),
            language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace() {
        let t = Transcription::from_model_output("  hello world \n", Some("en".into()));
        assert_eq!(t.text, "hello world");
        assert_eq!(t.language, "en");
        assert_eq!(t.detected_language, "en");
    }

    #[test]
    fn empty_text_becomes_placeholder() {
        let t = Transcription::from_model_output("   \n\t ", Some("en".into()));
        assert_eq!(t.text, NO_SPEECH_PLACEHOLDER);
    }

    #[test]
    fn missing_language_becomes_unknown() {
        let t = Transcription::from_model_output("hola", None);
        assert_eq!(t.language, UNKNOWN_LANGUAGE);
        assert_eq!(t.detected_language, UNKNOWN_LANGUAGE);
    }
}
