//! HTTP API routes and handlers.

use std::sync::Arc;

use axum::{
    Router,
    extract::{DefaultBodyLimit, Multipart, State},
    response::Json,
    routing::{get, post},
};
use serde_json::{Value, json};
use tracing::info;

use opentranscribe_core::{Language, TranscribeError, Transcription, validate_media_type};
use opentranscribe_stt::Transcriber;

use crate::error::ApiError;

/// Largest accepted upload body. Audio files run well past axum's 2 MB
/// default limit.
const MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

/// Shared application state for API handlers.
#[derive(Clone)]
pub struct AppState {
    pub transcriber: Arc<Transcriber>,
}

/// Build the Axum router with all API routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/transcribe", post(transcribe))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

/// Root endpoint: service banner.
async fn root() -> Json<Value> {
    Json(json!({ "message": "OpenTranscribe API is running" }))
}

/// Health check endpoint.
async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// One upload extracted from the multipart form.
struct Upload {
    bytes: axum::body::Bytes,
    filename: String,
    content_type: Option<String>,
}

/// `POST /transcribe` — multipart form with a required `file` part (declared
/// media type must start `audio/`) and an optional `language` part
/// (`en`/`es`/`auto`). Validation runs before any file is staged.
async fn transcribe(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Transcription>, ApiError> {
    let mut upload: Option<Upload> = None;
    let mut language_raw: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Malformed multipart body: {e}")))?
    {
        match field.name() {
            Some("file") => {
                let content_type = field.content_type().map(str::to_owned);
                let filename = field.file_name().unwrap_or("upload").to_owned();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {e}")))?;
                upload = Some(Upload {
                    bytes,
                    filename,
                    content_type,
                });
            }
            Some("language") => {
                language_raw = Some(field.text().await.map_err(|e| {
                    ApiError::bad_request(format!("Failed to read language field: {e}"))
                })?);
            }
            _ => {}
        }
    }

    // A missing file part is reported the same way as a non-audio one.
    let upload = upload.ok_or(TranscribeError::InvalidMediaType)?;
    validate_media_type(upload.content_type.as_deref())?;

    // Absence (and an empty field, which some form clients send) means
    // auto-detect and skips the parser, so the rejection message only lists
    // the three wire codes.
    let language = match language_raw.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(Language::parse(raw)?),
    };

    info!(
        file = %upload.filename,
        bytes = upload.bytes.len(),
        language = language_raw.as_deref().unwrap_or("auto"),
        "Received transcription request"
    );

    let transcription = state
        .transcriber
        .transcribe(&upload.bytes, &upload.filename, language)
        .await?;

    Ok(Json(transcription))
}
