//! Response extractor — pulls the question array out of free-form model text.
//!
//! The match is greedy: it runs from the first `[` to the last `]` in the
//! text. Prose around the array that itself contains brackets breaks the
//! parse. This is a known limitation and is kept as-is; there is no repair or
//! re-prompt step.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

use crate::questions::models::Question;

static JSON_ARRAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[\s\S]*\]").unwrap());

const REQUIRED_FIELDS: [&str; 3] = ["category", "question", "tips"];

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("No JSON found in response")]
    NoJsonFound,

    #[error("Invalid JSON in response: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid questions format received")]
    InvalidFormat,

    #[error("Invalid question structure")]
    InvalidStructure { index: usize },
}

/// Extracts and validates the question list from raw model output.
///
/// All or nothing: one malformed element fails the whole list.
pub fn extract_questions(text: &str) -> Result<Vec<Question>, ParseError> {
    let fragment = JSON_ARRAY
        .find(text)
        .ok_or(ParseError::NoJsonFound)?
        .as_str();

    let value: Value = serde_json::from_str(fragment)?;

    let elements = match value {
        Value::Array(elements) if !elements.is_empty() => elements,
        _ => return Err(ParseError::InvalidFormat),
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| parse_question(index, element))
        .collect()
}

fn parse_question(index: usize, element: Value) -> Result<Question, ParseError> {
    let has_required = REQUIRED_FIELDS.iter().all(|field| {
        element
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.is_empty())
    });
    if !has_required {
        return Err(ParseError::InvalidStructure { index });
    }

    // Remaining failure mode: a suggestedAnswer that is neither string nor null.
    serde_json::from_value(element).map_err(|_| ParseError::InvalidStructure { index })
}
