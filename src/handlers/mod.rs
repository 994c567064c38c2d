//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (query string, state)
//! 2. Runs the search
//! 3. Returns HTTP response (JSON, status code)

/// Movie search endpoint
pub mod movies;
