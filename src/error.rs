//! # Error Handling
//!
//! Custom error type for the service and its conversion into HTTP responses.
//!
//! Every error body has the same shape, a single `detail` string:
//! ```json
//! { "detail": "Processing failed: artifact pipeline panicked" }
//! ```
//!
//! ## Status Code Mapping:
//! - Processing → 500 (Internal Server Error)
//! - InvalidRequest → 422 (Unprocessable Entity)
//! - NotFound → 404 (Not Found)

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use std::fmt;

/// Errors surfaced to API clients.
#[derive(Debug)]
pub enum AppError {
    /// Anything that went wrong while building an analysis. Carries the
    /// textual description of the underlying failure.
    Processing(String),

    /// The request body could not be turned into a `ProcessRequest`
    /// (malformed JSON, a missing field, a non-string value, wrong content type).
    InvalidRequest(String),

    /// No route matched the request path.
    NotFound(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Processing(msg) => write!(f, "Processing failed: {}", msg),
            AppError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl AppError {
    /// The client-facing `detail` text.
    pub fn detail(&self) -> String {
        match self {
            AppError::Processing(_) => self.to_string(),
            AppError::InvalidRequest(msg) => msg.clone(),
            AppError::NotFound(_) => "Not Found".to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "detail": self.detail()
        }))
    }
}

/// Any `anyhow` failure bubbling out of the analysis pipeline is a processing failure.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Processing(err.to_string())
    }
}

/// Shorthand for `Result<T, AppError>`.
pub type AppResult<T> = Result<T, AppError>;
