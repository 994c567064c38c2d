//! Data models served by the API.

/// Movie catalog record
pub mod movie;
