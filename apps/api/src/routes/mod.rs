pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::pathway::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/pathway", post(handlers::handle_generate_pathway))
        .with_state(state)
}
