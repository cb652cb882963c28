//! Server error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Server errors
#[derive(Debug, Error)]
pub enum ServerError {
    /// Server bind error
    #[error("failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Listen address could not be parsed
    #[error("invalid listen address: {0}")]
    InvalidAddress(String),
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;

/// JSON error body returned by the API routes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    /// HTTP status code
    pub code: u16,
    /// Error message
    pub message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
        }
    }

    /// Opcode identifier did not resolve
    pub fn unknown_opcode(identifier: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, format!("unknown opcode: {identifier}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ServerError::InvalidAddress("nowhere".into());
        assert_eq!(err.to_string(), "invalid listen address: nowhere");

        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use");
        assert!(ServerError::from(io).to_string().starts_with("failed to bind server"));
    }

    #[test]
    fn test_api_error_serialization() {
        let err = ApiError::unknown_opcode("OP_NOPE");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], 404);
        assert_eq!(json["message"], "unknown opcode: OP_NOPE");
    }

    #[test]
    fn test_api_error_status() {
        let response = ApiError::unknown_opcode("x").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
