//! HTTP error payloads and mapping from domain errors.
//!
//! Keep the domain free of transport concerns by translating
//! [`crate::domain::Error`] into Actix responses here. Every failed request
//! answers with a fresh [`ErrorDetail`] envelope; nothing in it is ever
//! persisted.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};

/// Failure payload returned to API clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// HTTP status code of the failure, repeated in the body for clients
    /// that only look at the payload.
    #[schema(example = 404)]
    pub status: u16,
    /// Human-readable failure message.
    #[schema(example = "restaurant 42 not found")]
    pub message: String,
    /// Moment this response was produced.
    pub timestamp: DateTime<Utc>,
    /// Structured context, e.g. the field-violation list for validation
    /// failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorDetail {
    fn assemble(status: StatusCode, message: impl Into<String>, details: Option<Value>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            timestamp: Utc::now(),
            details,
        }
    }
}

/// Adapter-level error wrapping a domain failure.
#[derive(Debug, Clone)]
pub struct ApiError {
    inner: Error,
}

impl ApiError {
    /// The wrapped domain error.
    pub fn domain_error(&self) -> &Error {
        &self.inner
    }
}

impl From<Error> for ApiError {
    fn from(inner: Error) -> Self {
        Self { inner }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.inner.message())
    }
}

impl std::error::Error for ApiError {}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(self.inner.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        // Internal failures carry repository context that does not belong on
        // the wire; log it and answer with a generic message.
        if matches!(self.inner.code(), ErrorCode::InternalError) {
            error!(message = self.inner.message(), "internal error promoted to response");
            return HttpResponse::build(status).json(ErrorDetail::assemble(
                status,
                "Internal server error",
                None,
            ));
        }
        HttpResponse::build(status).json(ErrorDetail::assemble(
            status,
            self.inner.message(),
            self.inner.details().cloned(),
        ))
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;
