//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Request body is not valid url-encoded form data.
    #[error("Invalid form data: {0}")]
    Form(#[from] serde_urlencoded::de::Error),

    /// Document generation failed.
    #[error("Markup error: {0}")]
    Markup(#[from] quill_markup::MarkupError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Form(_) => StatusCode::BAD_REQUEST,
            Self::Markup(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!(status = %status, error = %self, "Request failed");

        (status, axum::Json(json!({"error": self.to_string()}))).into_response()
    }
}
