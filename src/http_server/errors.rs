//! # HTTP API Errors
//!
//! Maps every domain error onto its HTTP status code and the JSON error
//! body. Domain modules stay HTTP-agnostic; this is the only place that
//! knows about status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::matcher::MatchError;
use crate::query::QueryError;
use crate::store::StoreError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Request body had no `value` field, or the body was not parseable
    /// JSON at all (treated identically)
    #[error("Missing 'value' field")]
    MissingField,

    /// The `value` field was present but not a string
    #[error("Value must be a string")]
    WrongType,

    /// Store-level failure (duplicate insert, missing key)
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Filter evaluation failure
    #[error("{0}")]
    Query(#[from] QueryError),

    /// Fuzzy matching failure
    #[error("{0}")]
    Match(#[from] MatchError),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingField => StatusCode::BAD_REQUEST,
            ApiError::WrongType => StatusCode::UNPROCESSABLE_ENTITY,

            ApiError::Store(StoreError::AlreadyExists) => StatusCode::CONFLICT,
            ApiError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,

            ApiError::Query(QueryError::InvalidFilterValue(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Query(QueryError::MissingQuery) => StatusCode::BAD_REQUEST,

            ApiError::Match(MatchError::NoCandidates) => StatusCode::NOT_FOUND,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
