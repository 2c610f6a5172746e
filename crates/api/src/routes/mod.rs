//! Route handlers and the state they share.

pub mod health;
pub mod root;

use crate::clock::Clock;
use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<C: Clock> {
    pub clock: C,
}

/// Fallback for non-GET requests on a registered path.
pub async fn method_not_allowed() -> ApiError {
    tracing::debug!("rejecting non-GET request");
    ApiError::MethodNotAllowed
}

/// Fallback for paths with no route.
pub async fn not_found() -> ApiError {
    tracing::debug!("no route for request");
    ApiError::NotFound
}
