//! API error handling: the single point where internal errors become
//! client-visible responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use opentranscribe_core::TranscribeError;

/// An error response: status code plus a single human-readable detail.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

impl From<TranscribeError> for ApiError {
    fn from(err: TranscribeError) -> Self {
        if err.is_client_error() {
            Self::bad_request(err.to_string())
        } else {
            tracing::error!(error = %err, "Transcription request failed");
            Self::internal(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_400() {
        let api: ApiError = TranscribeError::InvalidMediaType.into();
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.detail, "File must be an audio file");

        let api: ApiError = TranscribeError::InvalidLanguage.into();
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_errors_map_to_500_with_cause() {
        let api: ApiError = TranscribeError::TranscriptionFailed {
            source: anyhow::anyhow!("decode blew up"),
        }
        .into();
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.detail, "Transcription failed: decode blew up");
    }
}
