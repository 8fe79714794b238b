//! Axum route handlers for the question generation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::warn;

use crate::errors::AppError;
use crate::questions::generator::generate_questions;
use crate::questions::models::{GenerateQuestionsRequest, GenerateQuestionsResponse};
use crate::state::AppState;

/// POST /api/generate-questions
///
/// Generates interview questions for a resume and job posting.
/// 400 on bad input or missing credential, 503 when every model fails,
/// 500 when the model's answer cannot be parsed.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    payload: Result<Json<GenerateQuestionsRequest>, JsonRejection>,
) -> Result<Json<GenerateQuestionsResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected generate-questions body: {rejection}");
        AppError::Validation(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let response =
        generate_questions(state.llm.as_ref(), &state.config.generation, request).await?;

    Ok(Json(response))
}
