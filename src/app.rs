//! Router composition.
//!
//! Layers are listed innermost first; a request passes through them in
//! reverse order:
//!
//! trace → security headers → CORS → server error rendering → panic capture
//! → bearer authentication → handler

use crate::{
    handlers,
    middleware::{auth, security_headers::with_security_headers, server_error},
    state::AppState,
};
use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Build the complete application router.
pub fn build_router(state: AppState) -> Router {
    let routes = Router::new().route("/movie", get(handlers::movies::list_movies));

    with_layers(routes, state)
}

/// Wrap `routes` in the middleware stack shared by every endpoint.
pub(crate) fn with_layers(routes: Router<AppState>, state: AppState) -> Router {
    // Development logs carry request headers, production only the request line
    let verbose = !state.config.app_env.is_production();
    let trace = TraceLayer::new_for_http()
        .make_span_with(
            DefaultMakeSpan::new()
                .level(Level::INFO)
                .include_headers(verbose),
        )
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let routes = routes
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer_token,
        ))
        .layer(CatchPanicLayer::custom(server_error::panic_to_fault))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            server_error::render_server_errors,
        ));

    // Outside CORS so preflight answers carry the headers too
    with_security_headers(routes.layer(CorsLayer::permissive()))
        .layer(trace)
        .with_state(state)
}
