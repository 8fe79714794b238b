use serde::{Deserialize, Serialize};

/// A single interview question as produced by the model.
///
/// Pass-through only: nothing in the service creates or edits questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub category: String,
    pub question: String,
    pub tips: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_answer: Option<String>,
}

/// Request body for `POST /api/generate-questions`.
///
/// Both fields are optional at the serde level so that a missing field is
/// reported by validation as a 400, not rejected by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsRequest {
    #[serde(default)]
    pub resume: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
}

impl GenerateQuestionsRequest {
    #[cfg(test)]
    pub fn new(resume: impl Into<String>, job_description: impl Into<String>) -> Self {
        Self {
            resume: Some(resume.into()),
            job_description: Some(job_description.into()),
        }
    }
}

/// Successful generation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<Question>,
    /// Human-readable note naming the model that produced the questions.
    pub note: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_uses_camel_case_on_the_wire() {
        let q = Question {
            category: "Behavioral".to_string(),
            question: "Tell me about a hard deadline.".to_string(),
            tips: "Use STAR.".to_string(),
            suggested_answer: Some("Situation, task, action, result.".to_string()),
        };
        let value = serde_json::to_value(&q).unwrap();
        assert_eq!(value["suggestedAnswer"], "Situation, task, action, result.");
        assert!(value.get("suggested_answer").is_none());
    }

    #[test]
    fn test_question_without_suggested_answer_omits_the_field() {
        let json = r#"{"category": "Technical", "question": "Q", "tips": "T"}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert!(q.suggested_answer.is_none());
        let value = serde_json::to_value(&q).unwrap();
        assert!(value.get("suggestedAnswer").is_none());
    }

    #[test]
    fn test_request_tolerates_missing_fields() {
        let request: GenerateQuestionsRequest =
            serde_json::from_str(r#"{"resume": "Rust engineer"}"#).unwrap();
        assert_eq!(request.resume.as_deref(), Some("Rust engineer"));
        assert!(request.job_description.is_none());

        let request: GenerateQuestionsRequest =
            serde_json::from_str(r#"{"jobDescription": null}"#).unwrap();
        assert!(request.resume.is_none());
        assert!(request.job_description.is_none());
    }
}
