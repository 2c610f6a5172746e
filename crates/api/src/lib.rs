//! Minimal HTTP service exposing a greeting and a health check.
//!
//! Two read-only JSON endpoints, each answering GET only:
//! - `GET /` — greeting carrying the current local time
//! - `GET /health` — static status and version with a timestamp

pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use clock::{Clock, SystemClock};
use routes::AppState;

/// Creates the Axum application router with all routes and shared state.
///
/// Non-GET requests on a registered path get 405, unknown paths get 404,
/// both with a plain-text body. HEAD is routed explicitly since `get`
/// would otherwise answer it.
pub fn create_app<C: Clock + 'static>(state: Arc<AppState<C>>) -> Router {
    Router::new()
        .route(
            "/",
            get(routes::root::hello::<C>)
                .head(routes::method_not_allowed)
                .fallback(routes::method_not_allowed),
        )
        .route(
            "/health",
            get(routes::health::check::<C>)
                .head(routes::method_not_allowed)
                .fallback(routes::method_not_allowed),
        )
        .fallback(routes::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state backed by the system clock.
pub fn create_default_state() -> Arc<AppState<SystemClock>> {
    Arc::new(AppState { clock: SystemClock })
}
