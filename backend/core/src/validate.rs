//! Upload validation: pure decision functions, run before any file I/O.

use crate::error::TranscribeError;

/// Whether a MIME type is for audio.
pub fn is_audio(mime: &str) -> bool {
    mime.starts_with("audio/")
}

/// Validate an upload's declared media type. The type must be present and
/// begin with `audio/`; absence or any other prefix is a client error.
pub fn validate_media_type(content_type: Option<&str>) -> Result<(), TranscribeError> {
    match content_type {
        Some(mime) if is_audio(mime) => Ok(()),
        _ => Err(TranscribeError::InvalidMediaType),
    }
}
