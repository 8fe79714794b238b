#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::fallback::AllModelsFailed;
use crate::questions::extractor::ParseError;

pub const MISSING_CREDENTIAL_MESSAGE: &str = "Gemini API key is required to generate contextual \
    interview questions. Please configure your API key in the environment variables.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Bodies are `{ "error": … }` for client errors and
/// `{ "error": …, "details": … }` for upstream and parse failures.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No model API credential configured")]
    MissingCredential,

    #[error("Failed to parse model response: {0}")]
    ParseFailure(#[from] ParseError),

    #[error("All models failed: {0}")]
    ModelsUnavailable(#[from] AllModelsFailed),

    #[error("Model returned an empty response")]
    EmptyModelResponse,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::MissingCredential => StatusCode::BAD_REQUEST,
            AppError::ParseFailure(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ModelsUnavailable(_) | AppError::EmptyModelResponse => {
                StatusCode::SERVICE_UNAVAILABLE
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (message, details) = match &self {
            AppError::Validation(msg) => (msg.clone(), None),
            AppError::MissingCredential => (MISSING_CREDENTIAL_MESSAGE.to_string(), None),
            AppError::ParseFailure(e) => (
                "Failed to parse AI response. The AI may have returned an unexpected format. \
                Please try again."
                    .to_string(),
                Some(e.to_string()),
            ),
            AppError::ModelsUnavailable(e) => {
                tracing::error!("Model fallback exhausted: {e}");
                (
                    "Failed to generate AI-powered interview questions. All available models \
                    failed. This could be due to API rate limits, network issues, or invalid \
                    API key."
                        .to_string(),
                    Some(e.to_string()),
                )
            }
            AppError::EmptyModelResponse => (
                "No response received from AI models.".to_string(),
                Some("All models failed to generate content.".to_string()),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                ("Failed to generate questions".to_string(), None)
            }
        };

        let body = match details {
            Some(details) => json!({ "error": message, "details": details }),
            None => json!({ "error": message }),
        };

        (status, Json(body)).into_response()
    }
}
