//! Local whisper.cpp backend for the speech model seam.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use tracing::{debug, info};
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::decode;
use crate::model::{ModelOutput, SpeechModel};

/// Speech model backed by a GGML whisper checkpoint loaded into memory.
///
/// The context is loaded once and shared; each invocation gets its own
/// decoding state, so the model is safe to call from concurrent requests.
pub struct WhisperModel {
    ctx: WhisperContext,
}

impl WhisperModel {
    /// Load the GGML model file at `model_path`. Expensive: reads the full
    /// checkpoint into memory.
    pub fn load(model_path: &Path) -> Result<Self> {
        let path_str = model_path
            .to_str()
            .ok_or_else(|| anyhow!("model path is not valid UTF-8: {}", model_path.display()))?;

        info!(model = %model_path.display(), "Loading whisper model");
        let ctx = WhisperContext::new_with_params(path_str, WhisperContextParameters::default())
            .with_context(|| format!("failed to load whisper model from {path_str}"))?;
        info!(model = %model_path.display(), "Whisper model loaded");

        Ok(Self { ctx })
    }
}

#[async_trait]
impl SpeechModel for WhisperModel {
    async fn transcribe(
        &self,
        audio: &Path,
        language: Option<&str>,
    ) -> Result<ModelOutput> {
        let bytes = tokio::fs::read(audio)
            .await
            .with_context(|| format!("failed to read staged audio at {}", audio.display()))?;
        let samples = decode::pcm_mono_16k(&bytes)?;
        debug!(samples = samples.len(), language = ?language, "Running whisper full decode");

        // whisper.cpp treats "auto" as language auto-detection.
        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
        params.set_language(Some(language.unwrap_or("auto")));
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);

        // CPU-bound and does not yield; the call occupies its worker until
        // the full decode completes.
        let mut state = self.ctx.create_state().context("failed to create whisper state")?;
        state.full(params, &samples).context("whisper decode failed")?;

        let mut text = String::new();
        let segments = state.full_n_segments().context("failed to read segment count")?;
        for i in 0..segments {
            text.push_str(
                &state
                    .full_get_segment_text(i)
                    .with_context(|| format!("failed to read segment {i}"))?,
            );
        }

        let detected = state
            .full_lang_id_from_state()
            .ok()
            .and_then(whisper_rs::get_lang_str)
            .map(str::to_owned);

        Ok(ModelOutput {
            text,
            language: detected,
        })
    }
}
