// Prompt constants for interview question generation.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::{GROUNDING_RULES, JSON_ARRAY_ONLY};

/// Question generation prompt template.
/// Replace: {resume}, {job_description}, {grounding_rules}, {json_only}
pub const QUESTION_PROMPT_TEMPLATE: &str = r#"
Generate 6-8 interview questions based on the exact resume and job posting content below.

RESUME:
{resume}

JOB POSTING:
{job_description}

{grounding_rules}

Read the resume carefully and identify:
- The actual company names mentioned
- The real project names or descriptions
- The specific technologies and skills listed
- The actual job title and experience details

Then create questions that connect these REAL details from the resume to the ACTUAL requirements in the job posting.

LANGUAGE STYLE:
- Sound like a natural, conversational interviewer
- Avoid formal phrases like "the posting," "the role requires," "this position"
- Use natural language: "I see you worked with..." "I noticed..." "Given that we're looking for..."
- Be specific and personal, referencing their actual experience

{json_only}
[
  {
    "category": "Technical",
    "question": "I see you have experience with [ACTUAL technology] at [ACTUAL company]. Can you walk me through how you'd apply that experience to [ACTUAL challenge/requirement]?",
    "tips": "Reference your specific experience with [ACTUAL details from resume]",
    "suggestedAnswer": "Use the STAR method to describe your actual experience with [REAL technology/project from resume]"
  }
]

REMEMBER: Use ONLY real information from the documents. Sound conversational and natural.
"#;

/// Fills the template. Resume and posting are embedded verbatim.
///
/// Fixed fragments go in first, then the posting, then the resume. Each
/// document slot is filled once, and the resume slot precedes the posting,
/// so placeholder-looking text inside either document is never expanded.
pub fn build_question_prompt(resume: &str, job_description: &str) -> String {
    QUESTION_PROMPT_TEMPLATE
        .replace("{grounding_rules}", GROUNDING_RULES)
        .replace("{json_only}", JSON_ARRAY_ONLY)
        .replacen("{job_description}", job_description, 1)
        .replacen("{resume}", resume, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_both_documents_verbatim() {
        let resume = "Backend engineer at Acme Payments.\nBuilt the ledger service in Rust.";
        let jd = "We need a Rust engineer for our settlement platform.";
        let prompt = build_question_prompt(resume, jd);

        assert!(prompt.contains(resume));
        assert!(prompt.contains(jd));
        assert!(prompt.find("RESUME:").unwrap() < prompt.find(resume).unwrap());
        assert!(prompt.find("JOB POSTING:").unwrap() < prompt.find(jd).unwrap());
    }

    #[test]
    fn test_prompt_carries_grounding_rules_and_schema() {
        let prompt = build_question_prompt("r", "j");
        assert!(prompt.contains("NEVER use placeholder names"));
        assert!(prompt.contains("Return ONLY valid JSON:"));
        assert!(prompt.contains("\"suggestedAnswer\""));
        assert!(!prompt.contains("{grounding_rules}"));
        assert!(!prompt.contains("{json_only}"));
    }

    #[test]
    fn test_placeholders_inside_documents_are_left_alone() {
        let resume = "Templating work: {job_description} and {json_only}";
        let jd = "Posting text mentioning {resume}";
        let prompt = build_question_prompt(resume, jd);
        assert!(prompt.contains(resume));
        assert!(prompt.contains(jd));
        assert_eq!(prompt.matches("Posting text").count(), 1);
    }
}
