//! HTTP middleware components.
//!
//! Middleware run around route handlers. They can:
//! - Authenticate requests
//! - Add response headers
//! - Render unhandled server errors

/// Bearer token authentication middleware
pub mod auth;
/// Helmet-style response headers
pub mod security_headers;
/// Fallback 500 handler
pub mod server_error;
