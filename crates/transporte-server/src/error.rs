use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use transporte_identification_types::IdentificationTypeError;

/// API error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {message}")]
    Validation {
        field: &'static str,
        message: String,
        /// Submitted values, echoed back so the form can be re-displayed
        /// with prior input preserved
        submitted: Option<serde_json::Value>,
    },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<IdentificationTypeError> for ApiError {
    fn from(err: IdentificationTypeError) -> Self {
        match err {
            IdentificationTypeError::NotFound(id) => {
                ApiError::NotFound(format!("identification type {}", id))
            }
            IdentificationTypeError::Validation { field, message } => ApiError::Validation {
                field,
                message,
                submitted: None,
            },
            IdentificationTypeError::Conflict(id) => {
                ApiError::Conflict(format!("identification type {}", id))
            }
            IdentificationTypeError::Store(e) => ApiError::Internal(anyhow::Error::new(e)),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg, None),
            ApiError::Validation {
                field,
                message,
                submitted,
            } => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_FAILED",
                message,
                Some(serde_json::json!({
                    "field": field,
                    "submitted": submitted,
                })),
            ),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg, None),
            ApiError::Internal(err) => {
                tracing::error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorDetails {
                code: code.to_string(),
                message,
                details,
            },
        });

        (status, body).into_response()
    }
}
