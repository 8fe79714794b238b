// Interview question generation.
// Implements: input validation, prompt building, model fallback, response extraction.
// All model calls go through llm_client — no direct Gemini calls here.

pub mod extractor;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
