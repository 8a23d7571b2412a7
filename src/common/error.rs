use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::infrastructure::encoder::EncodeError;

/// Everything a request can fail with. Each variant maps to one HTTP
/// status; the service itself never dies on a failed request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client sent a malformed or incomplete request.
    #[error("{0}")]
    Validation(String),

    #[error("request body exceeds the configured upload limit")]
    PayloadTooLarge,

    /// Writing an upload to local storage failed.
    #[error("failed to store upload: {0}")]
    Storage(#[from] std::io::Error),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    /// Multipart read failures are validation errors, except for the body
    /// cap which surfaces as 413.
    pub fn from_multipart(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::Validation(err.body_text())
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Raw encoder stderr, present only for encode failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let details = match &self {
            ApiError::Encode(EncodeError::ExitFailure { stderr, .. }) => Some(stderr.clone()),
            _ => None,
        };

        let body = ErrorResponse {
            error: self.to_string(),
            details,
        };
        (status, Json(body)).into_response()
    }
}
