//! Business logic services.
//!
//! Services contain the query logic, kept separate from HTTP handlers.

pub mod movie_filter;
