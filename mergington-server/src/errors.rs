use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mergington_core::SignupError;
use thiserror::Error;
use tracing::warn;

/// Process-level failures: startup, roster loading, serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid activity roster: {0}")]
    Roster(#[from] serde_json::Error),
}

/// Request-level failures, mapped onto HTTP status codes. The JSON body
/// carries the message under `detail`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("Status=404, NotFound: {0}")]
    NotFound(String),

    #[error("Status=400, BadRequest: {0}")]
    BadRequest(String),

    #[error("Status=500, InternalServerError: {0}")]
    InternalServerError(String),
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalServerError(message.into())
    }
}

impl From<SignupError> for ApiError {
    fn from(err: SignupError) -> Self {
        match err {
            SignupError::UnknownActivity(_) => ApiError::not_found(err.to_string()),
            SignupError::AlreadySignedUp { .. } | SignupError::NotSignedUp { .. } => {
                ApiError::bad_request(err.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        #[derive(serde::Serialize)]
        struct ErrorResponse {
            detail: String,
        }

        warn!("{}", self);

        let (status, detail) = match self {
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, detail),
            ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, detail),
            ApiError::InternalServerError(detail) => (StatusCode::INTERNAL_SERVER_ERROR, detail),
        };

        (status, axum::Json(ErrorResponse { detail })).into_response()
    }
}
