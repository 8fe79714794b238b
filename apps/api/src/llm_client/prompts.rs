// Shared prompt fragments.
// Each feature that needs model calls defines its own prompts.rs alongside it.
// This file contains the cross-cutting pieces.

/// Rules that keep the model from inventing employers, projects or details.
pub const GROUNDING_RULES: &str = "\
STRICT RULES - FOLLOW EXACTLY:
1. ONLY reference company names, projects, and details that appear EXACTLY in the resume text above
2. NEVER use placeholder names like \"ABC Company\", \"XYZ Corp\", \"TechCorp\", or any made-up company names
3. If a technology is mentioned in both documents, reference the EXACT context from the resume
4. If you cannot find specific details in the resume, ask more general behavioral questions instead
5. Do NOT invent or assume any information not explicitly written in the provided documents";

/// Instruction appended to prompts whose answer is parsed as a JSON array.
pub const JSON_ARRAY_ONLY: &str = "Return ONLY valid JSON:";
