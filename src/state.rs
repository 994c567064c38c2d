//! Shared application state.

use crate::{catalog::Catalog, config::Config};
use std::sync::Arc;

/// State handed to every handler and middleware through axum `State`.
///
/// Both parts are immutable for the lifetime of the process, so cloning the
/// state only bumps reference counts.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Catalog,
}

impl AppState {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        Self {
            config: Arc::new(config),
            catalog,
        }
    }
}
