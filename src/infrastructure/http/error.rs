//! HTTP Error Handling
//!
//! Every dispatch-time error maps to an empty-body 405, regardless of kind.
//! The flattened mapping is a documented limitation of the wire contract and
//! is preserved verbatim; callers cannot tell "no such beer" from "method
//! not allowed". The single exception is a post-success marshal failure,
//! which the dispatcher answers with an empty-body 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::application::ports::RepositoryError;

/// Dispatch errors
#[derive(Debug)]
pub enum DispatchError {
    /// Requested identifier has no corresponding entity
    NotFound(String),
    /// Repository failure on a collection-level operation
    Internal(String),
    /// Unsupported HTTP verb; no service call was made
    UnknownMethod(String),
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        match &self {
            DispatchError::NotFound(msg) => {
                tracing::warn!(error = %msg, "Entity not found");
            }
            DispatchError::UnknownMethod(method) => {
                tracing::warn!(method = %method, "Unknown method");
            }
            DispatchError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
            }
        }

        StatusCode::METHOD_NOT_ALLOWED.into_response()
    }
}

impl From<RepositoryError> for DispatchError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound(msg) => DispatchError::NotFound(msg),
            _ => DispatchError::Internal(e.to_string()),
        }
    }
}
