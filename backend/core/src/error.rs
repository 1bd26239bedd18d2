use thiserror::Error;

/// Top-level error type for the OpenTranscribe service.
///
/// The first two variants are client input errors and map to HTTP 400; the
/// messages are the exact details the HTTP layer returns. `TranscriptionFailed`
/// wraps any internal failure (file I/O, model invocation) and maps to 500:
/// the underlying cause's message is embedded but its type never crosses the
/// service boundary.
#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error("File must be an audio file")]
    InvalidMediaType,

    #[error("Invalid language code. Supported: 'en' (English), 'es' (Spanish), 'auto' (auto-detect)")]
    InvalidLanguage,

    #[error("Transcription failed: {source:#}")]
    TranscriptionFailed {
        #[source]
        source: anyhow::Error,
    },
}

impl TranscribeError {
    /// Whether this error was caused by client input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidMediaType | Self::InvalidLanguage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_message() {
        assert_eq!(
            TranscribeError::InvalidMediaType.to_string(),
            "File must be an audio file"
        );
    }

    #[test]
    fn language_message_lists_supported_codes() {
        let msg = TranscribeError::InvalidLanguage.to_string();
        assert!(msg.contains("'en' (English)"));
        assert!(msg.contains("'es' (Spanish)"));
        assert!(msg.contains("'auto' (auto-detect)"));
    }

    #[test]
    fn transcription_failure_embeds_cause() {
        let err = TranscribeError::TranscriptionFailed {
            source: anyhow::anyhow!("corrupt audio header"),
        };
        assert_eq!(err.to_string(), "Transcription failed: corrupt audio header");
        assert!(!err.is_client_error());
    }
}
