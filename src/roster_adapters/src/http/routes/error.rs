//! API error type shared by the user routes.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use roster_application::CreateUserError;
use roster_core::StoreError;

/// Wire shape for failures: a machine-readable code plus a human-readable
/// message.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    Validation {
        code: &'static str,
        message: String,
    },
    #[error("The user was not found.")]
    NotFound,
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::Validation { code, message } => (StatusCode::BAD_REQUEST, code, message),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                "User.NotFound",
                "The user was not found.".to_owned(),
            ),
            ApiError::Unexpected(detail) => {
                // The detail is logged, never leaked to the client.
                tracing::error!(%detail, "request failed with a store fault");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server.Unexpected",
                    "An unexpected error occurred.".to_owned(),
                )
            }
        };

        let body = Json(ErrorBody {
            code: code.to_owned(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<CreateUserError> for ApiError {
    fn from(error: CreateUserError) -> Self {
        match &error {
            CreateUserError::Store(fault) => ApiError::Unexpected(fault.to_string()),
            _ => ApiError::Validation {
                code: error.code(),
                message: error.to_string(),
            },
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        ApiError::Unexpected(error.to_string())
    }
}
