//! Question generation — orchestrates one generation request.
//!
//! Flow: validate input → check credential → build prompt →
//!       model fallback loop → extract questions → note.
//!
//! Nothing is persisted. Every failure is terminal for the request.

use tracing::{error, info};

use crate::config::GenerationConfig;
use crate::errors::AppError;
use crate::llm_client::fallback::attempt_in_order;
use crate::llm_client::TextGenerator;
use crate::questions::extractor::{extract_questions, ParseError};
use crate::questions::models::{GenerateQuestionsRequest, GenerateQuestionsResponse};
use crate::questions::prompts::build_question_prompt;

pub const MISSING_INPUT_MESSAGE: &str = "Resume and job description are required";

/// Resume and posting after validation.
#[derive(Debug, Clone)]
pub struct ValidatedInput {
    pub resume: String,
    pub job_description: String,
}

/// Rejects missing or whitespace-only fields.
pub fn validate(request: GenerateQuestionsRequest) -> Result<ValidatedInput, AppError> {
    match (request.resume, request.job_description) {
        (Some(resume), Some(job_description))
            if !resume.trim().is_empty() && !job_description.trim().is_empty() =>
        {
            Ok(ValidatedInput {
                resume,
                job_description,
            })
        }
        _ => Err(AppError::Validation(MISSING_INPUT_MESSAGE.to_string())),
    }
}

/// Runs the full generation pipeline against the given model backend.
///
/// Steps:
/// 1. validate() → ValidatedInput (400 on failure, no model call)
/// 2. credential check (400, no model call)
/// 3. build_question_prompt()
/// 4. attempt_in_order() over `config.models` (503 when all fail)
/// 5. extract_questions() (500 on failure, raw text logged)
pub async fn generate_questions(
    llm: &dyn TextGenerator,
    config: &GenerationConfig,
    request: GenerateQuestionsRequest,
) -> Result<GenerateQuestionsResponse, AppError> {
    let input = validate(request)?;

    if !config.has_credential() {
        return Err(AppError::MissingCredential);
    }

    let prompt = build_question_prompt(&input.resume, &input.job_description);
    let prompt = prompt.as_str();

    let success = attempt_in_order(&config.models, move |model: String| async move {
        llm.generate(&model, prompt).await
    })
    .await?;

    if success.output.is_empty() {
        return Err(AppError::EmptyModelResponse);
    }

    let questions = extract_questions(&success.output).map_err(|e| {
        error!("Error parsing {} response: {e}", success.model);
        if let ParseError::InvalidStructure { index } = &e {
            error!("First malformed question at index {index}");
        }
        error!("Raw response: {}", success.output);
        AppError::from(e)
    })?;

    info!(
        "Generated {} questions with model {}",
        questions.len(),
        success.model
    );

    Ok(GenerateQuestionsResponse {
        questions,
        note: generation_note(&success.model),
    })
}

/// Human-readable attribution returned alongside the questions.
pub fn generation_note(model: &str) -> String {
    format!(
        "These questions were generated by AI ({model}) specifically for your resume and this job posting."
    )
}
