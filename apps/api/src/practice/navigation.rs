#![allow(dead_code)]

//! The `questions` navigation parameter.
//!
//! The question list travels from the generate step to the practice step as
//! JSON, percent-encoded into a single query parameter. Decoding is
//! defensive: anything unusable yields an empty list, which the practice
//! view treats as its normal "no questions" state.
//!
//! There is no size cap on the parameter. Long lists can outgrow what
//! browsers and proxies accept in a URL.

use tracing::warn;

use crate::questions::models::Question;

pub const PRACTICE_PATH: &str = "/practice";
pub const QUESTIONS_PARAM: &str = "questions";

/// `encodeURIComponent(JSON.stringify(questions))`.
pub fn encode_questions_param(questions: &[Question]) -> String {
    // Serializing plain string fields cannot fail.
    let json = serde_json::to_string(questions).unwrap_or_else(|_| "[]".to_string());
    urlencoding::encode(&json).into_owned()
}

/// Link to the practice view for a freshly generated list.
pub fn practice_url(questions: &[Question]) -> String {
    format!(
        "{PRACTICE_PATH}?{QUESTIONS_PARAM}={}",
        encode_questions_param(questions)
    )
}

/// Decodes the parameter into the question list, or an empty list.
///
/// Accepts the value either still percent-encoded or already decoded by the
/// query extractor. Order is preserved exactly.
pub fn decode_questions_param(raw: Option<&str>) -> Vec<Question> {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return Vec::new();
    };

    let decoded = match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            warn!("questions parameter is not valid UTF-8 after decoding: {e}");
            return Vec::new();
        }
    };

    // An already-decoded value may contain a literal '%' that the second
    // decode mangled; fall back to the raw text before giving up.
    serde_json::from_str::<Vec<Question>>(&decoded)
        .or_else(|_| serde_json::from_str::<Vec<Question>>(raw))
        .unwrap_or_else(|e| {
            warn!("Error parsing questions parameter: {e}");
            Vec::new()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Question> {
        vec![
            Question {
                category: "Technical".to_string(),
                question: "How did you cut p99 latency by 40% & keep costs flat?".to_string(),
                tips: "Numbers first".to_string(),
                suggested_answer: Some("Caching + batching".to_string()),
            },
            Question {
                category: "Behavioral".to_string(),
                question: "Tell me about a conflict at Acme?".to_string(),
                tips: "Stay constructive".to_string(),
                suggested_answer: None,
            },
        ]
    }

    #[test]
    fn test_practice_url_is_query_safe() {
        let url = practice_url(&sample());
        assert!(url.starts_with("/practice?questions=%5B%7B"));
        let query = url.split_once('?').unwrap().1;
        assert!(!query.contains(' '));
        assert!(!query.contains('&'));
        assert_eq!(query.matches('=').count(), 1);
    }

    #[test]
    fn test_encoded_parameter_decodes_to_same_list() {
        let encoded = encode_questions_param(&sample());
        assert_eq!(decode_questions_param(Some(&encoded)), sample());
    }

    #[test]
    fn test_already_decoded_parameter_is_accepted() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(decode_questions_param(Some(&json)), sample());
    }

    #[test]
    fn test_absent_or_blank_parameter_is_empty() {
        assert!(decode_questions_param(None).is_empty());
        assert!(decode_questions_param(Some("")).is_empty());
        assert!(decode_questions_param(Some("   ")).is_empty());
    }

    #[test]
    fn test_malformed_parameter_is_empty_not_an_error() {
        assert!(decode_questions_param(Some("%7Bnot-json")).is_empty());
        assert!(decode_questions_param(Some("{\"category\": \"x\"}")).is_empty());
        assert!(decode_questions_param(Some("[{\"category\": \"x\"}]")).is_empty());
        assert!(decode_questions_param(Some("%FF%FE")).is_empty());
    }
}
