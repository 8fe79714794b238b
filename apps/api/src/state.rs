use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Immutable after startup: no cache, no session store, nothing shared
/// between requests beyond configuration and the model client.
#[derive(Clone)]
pub struct AppState {
    /// Model backend. Default: `GeminiClient`; tests swap in a stub.
    pub llm: Arc<dyn TextGenerator>,
    pub config: Config,
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    use crate::config::{GenerationConfig, DEFAULT_GEMINI_API_URL, DEFAULT_MODELS};

    Config {
        generation: GenerationConfig {
            api_key: Some("test-key".to_string()),
            api_url: DEFAULT_GEMINI_API_URL.to_string(),
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
            timeout_secs: 5,
        },
        port: 0,
        rust_log: "debug".to_string(),
    }
}
