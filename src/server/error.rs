//! Error-to-HTTP response conversion.
//!
//! Implements `IntoResponse` for [`movietracker_common::Error`] so that route
//! handlers can return `Result<T, AppError>` and use `?` on catalog calls.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// JSON body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
    /// Machine-readable error code
    pub code: String,
}

/// Wrapper so we can implement `IntoResponse` for an external type.
#[derive(Debug)]
pub struct AppError(pub movietracker_common::Error);

impl From<movietracker_common::Error> for AppError {
    fn from(e: movietracker_common::Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(
                status = %status,
                error = %self.0,
                "Server error in API handler"
            );
        }

        let body = ErrorResponse {
            error: self.0.to_string(),
            code: self.0.code().to_string(),
        };

        (status, Json(body)).into_response()
    }
}
