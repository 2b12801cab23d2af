use std::fmt::Display;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use diacare_core::error::CoreError;

/// Unified error type for all route handlers. Bodies are plain text.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    /// `message` goes to the client, `detail` only to the log.
    Internal {
        message: &'static str,
        detail: String,
    },
}

impl ApiError {
    /// Adapter for `map_err`: logs the underlying error, answers with `message`.
    pub fn internal<E: Display>(message: &'static str) -> impl FnOnce(E) -> ApiError {
        move |e| ApiError::Internal {
            message,
            detail: e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal { message, detail } => {
                tracing::error!("internal error: {detail}");
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        (status, message).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
