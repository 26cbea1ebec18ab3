pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::export;
use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/generate", post(handlers::handle_generate))
        .route("/api/export", post(export::handle_export))
        .with_state(state)
}
