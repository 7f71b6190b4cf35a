use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Error taxonomy for the proxy pipeline. Generator failures never appear
/// here: they are recovered in-place with a templated fallback email.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Missing required field: {0}")]
    Validation(String),

    #[error("{0}")]
    InvalidTransition(String),

    #[error("Mailjet API keys not configured for this user")]
    CredentialsMissing,

    #[error("{0} not found")]
    NotFound(String),

    #[error("An operation is already in progress for prospect {0}")]
    Busy(String),

    #[error("Error sending email: {0}")]
    UpstreamSend(String),

    #[error("Database error: {0}")]
    Persistence(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidTransition(_) => StatusCode::BAD_REQUEST,
            ApiError::CredentialsMissing => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Busy(_) => StatusCode::CONFLICT,
            ApiError::UpstreamSend(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Persistence(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
