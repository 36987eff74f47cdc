use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Error type returned by every handler.
///
/// Callers never see the cause: every variant renders as the same opaque
/// `500 {"error": "Internal server error"}`. The cause is logged instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Malformed request payload: {0}")]
    MalformedPayload(#[from] JsonRejection),

    #[error("Email error: {0}")]
    EmailError(String),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = match &self {
            AppError::MalformedPayload(_) => "malformed_payload",
            AppError::EmailError(_) => "email",
            AppError::InternalError(_) => "internal",
            AppError::ConfigError(_) => "configuration",
        };
        tracing::error!(error.kind = kind, error = %self, "Request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Internal server error",
            }),
        )
            .into_response()
    }
}
