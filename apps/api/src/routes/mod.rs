pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::matching::handlers;
use crate::state::AppState;

async fn unknown_route() -> Result<(), AppError> {
    Err(AppError::NotFound("No such endpoint".to_string()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Match API
        .route("/api/v1/match/skills", post(handlers::handle_skill_score))
        .route(
            "/api/v1/match/semantic",
            post(handlers::handle_semantic_match),
        )
        .fallback(unknown_route)
        .with_state(state)
}
