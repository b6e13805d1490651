use crate::interface_adapters::handlers::decode::decode;
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::post};
use std::sync::Arc;

// Build the HTTP router for the decode API.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/decode", post(decode))
        .with_state(state)
}
