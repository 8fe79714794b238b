//! Model fallback — tries an ordered list of model identifiers until one answers.
//!
//! Strictly sequential: each attempt is awaited to completion before the next
//! one starts. There is no health checking or circuit breaking; the list order
//! is the whole policy.

use std::fmt::Display;
use std::future::Future;

use thiserror::Error;
use tracing::{info, warn};

/// Output of the first model attempt that succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSuccess<T> {
    pub model: String,
    pub output: T,
}

/// Every model in the list failed.
#[derive(Debug, Clone, Error)]
#[error("Tried models: {}. Last error: {}", .attempted.join(", "), .last_error)]
pub struct AllModelsFailed {
    pub attempted: Vec<String>,
    pub last_error: String,
}

/// Calls `attempt` once per model, in order, and returns the first success.
///
/// If every call fails, the error names all attempted models and carries the
/// message of the last failure. An empty list fails without calling anything.
pub async fn attempt_in_order<T, E, F, Fut>(
    models: &[String],
    mut attempt: F,
) -> Result<ModelSuccess<T>, AllModelsFailed>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut attempted = Vec::with_capacity(models.len());
    let mut last_error = String::from("no models configured");

    for model in models {
        info!("Trying model: {model}");
        attempted.push(model.clone());

        match attempt(model.clone()).await {
            Ok(output) => {
                info!("Successfully generated content with model: {model}");
                return Ok(ModelSuccess {
                    model: model.clone(),
                    output,
                });
            }
            Err(e) => {
                warn!("Model {model} failed: {e}");
                last_error = e.to_string();
            }
        }
    }

    if !attempted.is_empty() {
        tracing::error!("All models failed. Last error: {last_error}");
    }

    Err(AllModelsFailed {
        attempted,
        last_error,
    })
}
