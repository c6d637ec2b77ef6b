use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use billed_core::error::CoreError;
use billed_db::StoreError;

use crate::views;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and [`StoreError`] and adds HTTP-specific variants.
/// Implements [`IntoResponse`] by rendering the error page with the message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `billed_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure reported by the bill store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A `multipart/form-data` body that could not be read.
    #[error(transparent)]
    Multipart(#[from] MultipartError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Message shown in place of internal details.
const INTERNAL_MESSAGE: &str = "Une erreur interne est survenue";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            },

            AppError::Store(err) => classify_store_error(err),

            // Keeps the extractor's status, e.g. 413 past the body limit.
            AppError::Multipart(err) => {
                tracing::debug!(error = %err, "Unreadable multipart body");
                (err.status(), err.body_text())
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        (status, Html(views::error_page::render(&message))).into_response()
    }
}

/// Classify a store error into an HTTP status and the message to display.
///
/// - `Http` keeps its literal message and mirrors its status; a status that
///   is not a valid HTTP code maps to 502.
/// - `Serialization` maps to 500 with a sanitized message.
fn classify_store_error(err: &StoreError) -> (StatusCode, String) {
    match err {
        StoreError::Http { status, message } => {
            tracing::warn!(status, error = %message, "Store call rejected");
            let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, message.clone())
        }
        StoreError::Serialization(e) => {
            tracing::error!(error = %e, "Store serialization error");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
        }
    }
}
