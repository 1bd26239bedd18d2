//! Transcription invoker: staging, model invocation, and result shaping.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};

use opentranscribe_core::{Language, TranscribeError, Transcription};

use crate::engine::LazyModel;
use crate::scratch::ScratchFile;

/// Runs validated uploads through the speech model.
///
/// One instance is shared by all requests; the model handle inside is
/// constructed on first use and reused afterwards.
pub struct Transcriber {
    model: LazyModel,
}

impl Transcriber {
    pub fn new(model: LazyModel) -> Self {
        Self { model }
    }

    /// Transcribe validated upload bytes.
    ///
    /// Stages the bytes to a scratch file (removed on every exit path),
    /// normalizes the language selector, obtains the shared model and shapes
    /// its output. Any internal failure is reported as
    /// [`TranscribeError::TranscriptionFailed`]; raw error types do not cross
    /// this boundary.
    pub async fn transcribe(
        &self,
        bytes: &[u8],
        original_name: &str,
        language: Option<Language>,
    ) -> Result<Transcription, TranscribeError> {
        let started = Instant::now();
        let result = self.run(bytes, original_name, language).await;
        match &result {
            Ok(t) => info!(
                elapsed_ms = started.elapsed().as_millis() as u64,
                language = %t.detected_language,
                chars = t.text.len(),
                "Transcription complete"
            ),
            Err(e) => debug!(error = %e, "Transcription attempt failed"),
        }
        result.map_err(|source| TranscribeError::TranscriptionFailed { source })
    }

    async fn run(
        &self,
        bytes: &[u8],
        original_name: &str,
        language: Option<Language>,
    ) -> Result<Transcription> {
        let scratch = ScratchFile::write(bytes, original_name)
            .await
            .context("failed to stage upload")?;

        // Absent selector and `auto` both mean no hint.
        let hint = language.and_then(Language::hint);

        let model = self.model.get().await?;
        let output = model.transcribe(scratch.path(), hint).await?;

        Ok(Transcription::from_model_output(
            &output.text,
            output.language,
        ))
        // `scratch` drops here; the file is removed on the error paths above
        // as well.
    }
}
