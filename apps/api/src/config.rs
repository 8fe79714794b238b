use anyhow::{bail, Context, Result};

/// Model identifiers tried in order when `GEMINI_MODELS` is not set.
pub const DEFAULT_MODELS: &[&str] = &[
    "gemini-2.0-flash-001",
    "gemini-1.5-flash-001",
    "gemini-1.5-pro-001",
    "gemini-2.0-flash",
    "gemini-1.5-flash",
    "gemini-1.5-pro",
];

pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration loaded from environment variables.
///
/// A missing `GEMINI_API_KEY` does not fail startup: the generation endpoint
/// reports it to the caller as a client error instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub generation: GenerationConfig,
    pub port: u16,
    pub rust_log: String,
}

/// Everything the question generation pipeline needs from the environment.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub api_key: Option<String>,
    pub api_url: String,
    /// Priority order for the model fallback loop.
    pub models: Vec<String>,
    pub timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let models = match optional_env("GEMINI_MODELS") {
            Some(raw) => parse_model_list(&raw),
            None => DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
        };
        if models.is_empty() {
            bail!("GEMINI_MODELS must name at least one model");
        }

        Ok(Config {
            generation: GenerationConfig {
                api_key: optional_env("GEMINI_API_KEY"),
                api_url: optional_env("GEMINI_API_URL")
                    .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string()),
                models,
                timeout_secs: optional_env("GEMINI_TIMEOUT_SECS")
                    .unwrap_or_else(|| "120".to_string())
                    .parse::<u64>()
                    .context("GEMINI_TIMEOUT_SECS must be a whole number of seconds")?,
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl GenerationConfig {
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Reads an env var, treating blank values the same as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Splits a comma-separated model list, dropping blank entries.
fn parse_model_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}
