//! Health check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use crate::clock::Clock;
use crate::models::HealthStatus;
use crate::routes::AppState;

/// GET /health — returns static service status stamped with the current time.
pub async fn check<C: Clock + 'static>(
    State(state): State<Arc<AppState<C>>>,
) -> Json<HealthStatus> {
    Json(HealthStatus::at(state.clock.now()))
}
