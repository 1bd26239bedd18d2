//! Scratch-file lifecycle for staged uploads.
//!
//! The speech model operates on a file path, so upload bytes are written to a
//! uniquely named temp file for the duration of one invocation. The guard
//! deletes the file when dropped, on every exit path.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;
use uuid::Uuid;

/// A uniquely named temporary file holding one request's audio bytes.
///
/// Deleted on drop. Deletion tolerates the file already being absent; any
/// other deletion failure is logged and ignored, since cleanup must never
/// turn a completed transcription into an error.
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    /// Write `bytes` to a fresh scratch file, keeping the original filename's
    /// extension as suffix so the model can infer the container format.
    pub async fn write(bytes: &[u8], original_name: &str) -> std::io::Result<Self> {
        let suffix = Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();
        let path = std::env::temp_dir().join(format!("opentranscribe-{}{suffix}", Uuid::new_v4()));
        tokio::fs::write(&path, bytes).await?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!(path = %self.path.display(), error = %e, "Failed to remove scratch file"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_and_removes_on_drop() {
        let scratch = ScratchFile::write(b"RIFF....", "sample.wav").await.unwrap();
        let path = scratch.path().to_path_buf();
        assert!(path.exists());
        assert_eq!(std::fs::read(&path).unwrap(), b"RIFF....");

        drop(scratch);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn keeps_extension_suffix() {
        let scratch = ScratchFile::write(b"x", "clip.mp3").await.unwrap();
        assert_eq!(
            scratch.path().extension().and_then(|e| e.to_str()),
            Some("mp3")
        );
    }

    #[tokio::test]
    async fn no_suffix_without_extension() {
        let scratch = ScratchFile::write(b"x", "noext").await.unwrap();
        assert_eq!(scratch.path().extension(), None);
    }

    #[tokio::test]
    async fn unique_paths_for_identical_uploads() {
        let a = ScratchFile::write(b"same", "a.wav").await.unwrap();
        let b = ScratchFile::write(b"same", "a.wav").await.unwrap();
        assert_ne!(a.path(), b.path());
    }

    #[tokio::test]
    async fn tolerates_already_removed_file() {
        let scratch = ScratchFile::write(b"x", "gone.wav").await.unwrap();
        std::fs::remove_file(scratch.path()).unwrap();
        // Drop must not panic.
        drop(scratch);
    }
}
