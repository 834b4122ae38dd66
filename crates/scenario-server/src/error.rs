//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// API errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body failed validation.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The uploaded document format is not supported.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Document extraction failed.
    #[error("extraction error: {0}")]
    Extraction(String),

    /// Report rendering failed.
    #[error("report error: {0}")]
    Report(#[from] scenario_report::ReportError),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<scenario_core::AnalyzeError> for ApiError {
    fn from(err: scenario_core::AnalyzeError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<scenario_extract::ExtractError> for ApiError {
    fn from(err: scenario_extract::ExtractError) -> Self {
        match err {
            scenario_extract::ExtractError::UnsupportedFormat(name) => {
                ApiError::UnsupportedFormat(name)
            }
            other => ApiError::Extraction(other.to_string()),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::UnsupportedFormat(_) => (StatusCode::BAD_REQUEST, "unsupported_format"),
            ApiError::Extraction(_) => (StatusCode::UNPROCESSABLE_ENTITY, "extraction_error"),
            ApiError::Report(_) => (StatusCode::INTERNAL_SERVER_ERROR, "report_error"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
