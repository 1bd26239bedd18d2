//! Process-wide model handle with guarded one-time initialization.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::OnceCell;
use tracing::info;

use crate::model::SpeechModel;
use crate::whisper::WhisperModel;

type ModelLoader = Arc<dyn Fn() -> Result<Arc<dyn SpeechModel>> + Send + Sync>;

/// Lazily constructed, shared handle to the speech model.
///
/// The load runs at most once per process: concurrent first requests await
/// the same initialization instead of each triggering a duplicate load. A
/// failed load is not cached, so the next caller retries. Once constructed
/// the handle lives for the rest of the process; it is never reloaded.
pub struct LazyModel {
    loader: ModelLoader,
    cell: OnceCell<Arc<dyn SpeechModel>>,
}

impl LazyModel {
    /// Handle that loads a whisper GGML checkpoint from `model_path` on
    /// first use.
    pub fn whisper(model_path: impl Into<PathBuf>) -> Self {
        let path = model_path.into();
        Self::with_loader(Arc::new(move || {
            Ok(Arc::new(WhisperModel::load(&path)?) as Arc<dyn SpeechModel>)
        }))
    }

    /// Handle backed by an arbitrary loader. Used by tests to substitute a
    /// mock model.
    pub fn with_loader(loader: ModelLoader) -> Self {
        Self {
            loader,
            cell: OnceCell::new(),
        }
    }

    /// Get the shared model, constructing it on first call. The blocking
    /// load runs off the async worker.
    pub async fn get(&self) -> Result<Arc<dyn SpeechModel>> {
        self.cell
            .get_or_try_init(|| async {
                info!("Initializing speech model (first request)");
                let loader = Arc::clone(&self.loader);
                tokio::task::spawn_blocking(move || loader())
                    .await
                    .context("model load task panicked")?
            })
            .await
            .cloned()
    }
}
