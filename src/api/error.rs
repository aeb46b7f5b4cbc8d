use crate::{DeckError, ErrorKind};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Message shown for failures that carry no caller-safe context
pub const GENERIC_ERROR_MESSAGE: &str = "Oops! Something went wrong";

/// A [`DeckError`] on its way out of an HTTP handler
#[derive(Debug)]
pub struct ApiError(pub DeckError);

impl From<DeckError> for ApiError {
    fn from(err: DeckError) -> Self {
        ApiError(err)
    }
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.0.kind();
        let status = status_for(kind);
        let message = self.0.context().unwrap_or(GENERIC_ERROR_MESSAGE);

        match kind {
            ErrorKind::Internal => {
                tracing::error!(error = %self.0, "error occurred while handling request")
            }
            _ => tracing::warn!(error = %self.0, status = status.as_u16(), "request rejected"),
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}
