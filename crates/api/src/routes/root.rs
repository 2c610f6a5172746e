//! Greeting endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use crate::clock::Clock;
use crate::models::GreetingMessage;
use crate::routes::AppState;

/// GET / — greets the caller with the current local time.
pub async fn hello<C: Clock + 'static>(
    State(state): State<Arc<AppState<C>>>,
) -> Json<GreetingMessage> {
    Json(GreetingMessage::at(state.clock.now()))
}
