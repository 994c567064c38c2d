//! Movie catalog API.
//!
//! A single authenticated endpoint, `GET /movie`, that searches a read-only
//! in-memory movie catalog by genre, country and minimum average vote.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: JSON catalog loaded once at startup, shared read-only
//! - **Authentication**: static bearer token from `API_TOKEN`
//! - **Format**: JSON responses

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;

pub use app::build_router;
pub use catalog::Catalog;
pub use config::{Config, Environment};
pub use state::AppState;
