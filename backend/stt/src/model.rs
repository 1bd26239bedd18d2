use std::path::Path;

use async_trait::async_trait;

/// Raw output of a speech model invocation, before result shaping.
#[derive(Debug, Clone, Default)]
pub struct ModelOutput {
    /// Free-text transcription, untrimmed and possibly empty.
    pub text: String,
    /// Detected language code, if the model reports one.
    pub language: Option<String>,
}

/// A loaded speech-recognition capability.
///
/// Implementations operate on a file path rather than an in-memory buffer
/// (container format is inferred from the file), so callers stage uploads to
/// a scratch file first. The invocation is CPU-bound and blocking from the
/// caller's perspective; it may take seconds to minutes for long audio.
#[async_trait]
pub trait SpeechModel: Send + Sync {
    /// Transcribe the audio at `audio`, optionally constrained to `language`
    /// (a lowercase ISO 639-1 code). `None` means auto-detect.
    async fn transcribe(&self, audio: &Path, language: Option<&str>)
        -> anyhow::Result<ModelOutput>;
}
