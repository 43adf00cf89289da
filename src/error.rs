//! Error types and HTTP response conversion.
//!
//! A failed backend call becomes a 500 response whose JSON body carries only
//! the route's fixed message. The underlying cause is logged, never returned.
//! A path segment that cannot be decoded is rejected with a 400 before any
//! backend call is made.

use crate::client::BackendError;
use crate::gateway::operation::Operation;
use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Gateway error types with automatic HTTP status code mapping.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{operation} failed: {source}")]
    Forward {
        operation: Operation,
        #[source]
        source: BackendError,
    },

    #[error("invalid path parameter: {0}")]
    InvalidPath(#[from] PathRejection),
}

impl GatewayError {
    pub fn forward(operation: Operation, source: impl Into<BackendError>) -> Self {
        GatewayError::Forward {
            operation,
            source: source.into(),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            GatewayError::Forward { operation, source } => {
                tracing::error!(%operation, error = %source, "backend call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    operation.failure_message(),
                )
            }
            GatewayError::InvalidPath(rejection) => {
                tracing::debug!(error = %rejection, "rejected undecodable path parameter");
                (StatusCode::BAD_REQUEST, "Invalid path parameter")
            }
        };

        let body = ErrorResponse { error: message };
        (status, Json(body)).into_response()
    }
}
