pub mod decode;
pub mod engine;
pub mod model;
pub mod scratch;
pub mod service;
pub mod whisper;

pub use engine::LazyModel;
pub use model::{ModelOutput, SpeechModel};
pub use scratch::ScratchFile;
pub use service::Transcriber;
pub use whisper::WhisperModel;
