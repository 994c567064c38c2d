//! Fallback handler for unhandled server errors.
//!
//! Handlers report server-side failures as a [`ServerFault`] and panics are
//! turned into one by `CatchPanicLayer`. This middleware sits outside both,
//! logs the fault and writes the 500 body. In production the body is a fixed
//! message; in development it carries the error detail.

use crate::{config::Environment, error::ServerFault, state::AppState};
use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use std::any::Any;

/// JSON body for a fault in the given mode.
pub fn fault_body(fault: &ServerFault, env: Environment) -> Value {
    if env.is_production() {
        json!({ "error": { "message": "server error" } })
    } else {
        json!({ "error": fault.detail })
    }
}

/// Turn a caught panic payload into a [`ServerFault`] response.
pub fn panic_to_fault(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    ServerFault::new(detail).into_response()
}

pub async fn render_server_errors(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    let Some(fault) = response.extensions().get::<ServerFault>() else {
        return response;
    };

    tracing::error!(%method, %path, detail = %fault.detail, "unhandled server error");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(fault_body(fault, state.config.app_env)),
    )
        .into_response()
}
