pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::practice::handlers::handle_practice;
use crate::questions::handlers::handle_generate_questions;
use crate::resume::upload::handle_upload;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/generate-questions", post(handle_generate_questions))
        .route("/api/practice", get(handle_practice))
        .route("/api/resume/upload", post(handle_upload))
        .with_state(state)
}
