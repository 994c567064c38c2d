//! Error types and HTTP error response handling.
//!
//! Client errors are rendered directly. Server-side failures are rendered as
//! a [`ServerFault`], which the fallback error middleware turns into the final
//! 500 body according to the operating mode.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// # Status Code Mapping
///
/// - `Unauthorized` → 401 Unauthorized
/// - `InvalidQuery` → 400 Bad Request
/// - `Serialization` → 500 Internal Server Error (via [`ServerFault`])
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Authorization header missing, malformed, or carrying the wrong token.
    #[error("Unauthorized request")]
    Unauthorized,

    /// A query parameter could not be interpreted.
    #[error("{0}")]
    InvalidQuery(String),

    /// The response body could not be serialized.
    #[error("Failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            AppError::Serialization(_) => {
                return ServerFault::new(self.to_string()).into_response();
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// An unhandled server-side failure.
///
/// Rendered as a bare 500 carrying the fault in its extensions; the body is
/// written later by `middleware::server_error`, which knows whether the
/// detail may be shown to the client.
#[derive(Debug, Clone)]
pub struct ServerFault {
    pub detail: String,
}

impl ServerFault {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ServerFault {
    fn into_response(self) -> Response {
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(self);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization_errors_become_server_faults() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let response = AppError::Serialization(source).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let fault = response.extensions().get::<ServerFault>().unwrap();
        assert!(fault.detail.starts_with("Failed to serialize response"));
    }

    #[test]
    fn client_errors_carry_no_fault() {
        let response = AppError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.extensions().get::<ServerFault>().is_none());

        let response = AppError::InvalidQuery("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.extensions().get::<ServerFault>().is_none());
    }
}
