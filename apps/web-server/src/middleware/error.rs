//! Page-level error handling.
//!
//! Every operation ends in a definite response: validation failures
//! re-render their form inside the handler, everything else funnels
//! through `PageError` so store failures can never drop a request.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use quill_core::error::RepoError;
use quill_core::ports::{AuthError, SessionError};

use crate::views;

/// Application-level error type rendered as an error page.
#[derive(Debug)]
pub enum PageError {
    NotFound,
    Internal(String),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::NotFound => write!(f, "Not found"),
            PageError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        match self {
            PageError::NotFound => StatusCode::NOT_FOUND,
            PageError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            PageError::NotFound => views::not_found_page(),
            PageError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                views::error_page()
            }
        }
    }
}

impl From<RepoError> for PageError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => PageError::NotFound,
            RepoError::Constraint(msg) => PageError::Internal(msg),
            RepoError::Connection(msg) | RepoError::Query(msg) => {
                tracing::error!("Database error: {}", msg);
                PageError::Internal("Database error".to_string())
            }
        }
    }
}

impl From<AuthError> for PageError {
    fn from(err: AuthError) -> Self {
        PageError::Internal(err.to_string())
    }
}

impl From<SessionError> for PageError {
    fn from(err: SessionError) -> Self {
        PageError::Internal(err.to_string())
    }
}

/// Result type alias for handlers.
pub type PageResult<T> = Result<T, PageError>;
