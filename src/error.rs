use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("configuration error: {0}")]
    Config(String),

    /// Order/Delivery Backend answered non-OK. The body is relayed to the
    /// caller verbatim at the backend's status code.
    #[error("backend returned {status}")]
    Backend { status: StatusCode, body: Value },

    /// Courier API answered non-201. Status and body pass through to the
    /// caller; the request is never retried.
    #[error("courier returned {status}")]
    Courier { status: StatusCode, body: Value },

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            AppError::Config(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Configuration error", "details": msg })),
            )
                .into_response(),
            AppError::Backend { status, body } => (status, Json(body)).into_response(),
            AppError::Courier { status, body } => (
                status,
                Json(json!({ "error": "Courier error", "details": body })),
            )
                .into_response(),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Server error", "details": msg })),
            )
                .into_response(),
        }
    }
}
