/// Error handling module
///
/// Provides unified error responses
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

use crate::parser::ParseError;
use crate::store::StoreError;

#[derive(Debug)]
pub enum ApiError {
    Internal {
        reason: String,
    },
    BadRequest {
        reason: String,
    },
    ServiceUnavailable {
        details: String,
    },
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Internal { reason } => write!(f, "Internal error: {}", reason),
            ApiError::BadRequest { reason } => write!(f, "Bad request: {}", reason),
            ApiError::ServiceUnavailable { details } => {
                write!(f, "Service unavailable: {}", details)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let response = match self {
            ApiError::Internal { reason } => ErrorResponse {
                error: "Internal server error".to_string(),
                details: Some(reason.clone()),
            },
            ApiError::BadRequest { reason } => ErrorResponse {
                error: "Bad request".to_string(),
                details: Some(reason.clone()),
            },
            ApiError::ServiceUnavailable { details } => ErrorResponse {
                error: "Service unavailable".to_string(),
                details: Some(details.clone()),
            },
        };
        HttpResponse::build(status).json(response)
    }
}

// Store failures surface to the caller with the underlying message, no retries
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "Store operation failed");
        ApiError::Internal {
            reason: err.to_string(),
        }
    }
}

impl From<ParseError> for ApiError {
    fn from(err: ParseError) -> Self {
        ApiError::BadRequest {
            reason: err.to_string(),
        }
    }
}
