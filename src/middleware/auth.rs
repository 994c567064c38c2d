//! Bearer token authentication middleware.
//!
//! Every request must carry `Authorization: Bearer <token>` where `<token>`
//! equals the configured `API_TOKEN` byte for byte. Anything else is answered
//! with 401 before routing happens.

use crate::{error::AppError, state::AppState};
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

/// Extract the token from an `Authorization: Bearer <token>` header.
///
/// Returns `None` when the header is missing, not valid ASCII, or does not
/// use the `Bearer` scheme.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        // Expected format: "Bearer <token>", scheme is case-sensitive
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Check the request headers against the configured secret.
pub fn authorize(headers: &HeaderMap, api_token: &str) -> Result<(), AppError> {
    match bearer_token(headers) {
        // Byte-exact comparison, no trimming or case folding
        Some(token) if token == api_token => Ok(()),
        _ => Err(AppError::Unauthorized),
    }
}

/// Authentication middleware function.
///
/// # Flow
///
/// 1. Read the `Authorization` header
/// 2. Strip the `Bearer ` prefix
/// 3. Compare the remainder with the configured token
/// 4. On match call the next handler, otherwise return 401
pub async fn require_bearer_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Step 1-3: Extract the bearer token and compare it with the configured secret
    if let Err(err) = authorize(request.headers(), &state.config.api_token) {
        // Step 4a: Reject; a 401 is an expected outcome, not a server error
        tracing::debug!(path = %request.uri().path(), "rejected unauthenticated request");
        return Err(err);
    }

    // Step 4b: Call the next middleware/handler
    Ok(next.run(request).await)
}
