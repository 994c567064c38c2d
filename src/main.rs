//! Movie catalog API - Main Application Entry Point
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Initialize logging for the configured mode
//! 3. Load the movie catalog
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

use moviedex_server::{AppState, Catalog, Config, build_router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first: the mode decides how much we log
    let config = Config::from_env()?;

    let default_filter = if config.app_env.is_production() {
        "info"
    } else {
        "debug,tower_http=debug"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    if config.app_env.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .compact()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!(mode = ?config.app_env, "Configuration loaded");

    let catalog = Catalog::load(config.catalog_path.as_deref())?;
    tracing::info!(movies = catalog.len(), "Catalog loaded");

    let port = config.port;
    let app = build_router(AppState::new(config, catalog));

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening to http://localhost:{port}");

    axum::serve(listener, app).await?;

    Ok(())
}
