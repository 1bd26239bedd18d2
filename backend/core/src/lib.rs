pub mod error;
pub mod language;
pub mod transcription;
pub mod validate;

pub use error::TranscribeError;
pub use language::Language;
pub use transcription::{NO_SPEECH_PLACEHOLDER, Transcription, UNKNOWN_LANGUAGE};
pub use validate::{is_audio, validate_media_type};
