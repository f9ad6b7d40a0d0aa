use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable: requests never observe each other through it.
#[derive(Clone)]
pub struct AppState {
    /// Model backend. `GeminiClient` in production, a stub in tests.
    pub llm: Arc<dyn LlmClient>,
    pub config: Config,
}

#[cfg(test)]
impl AppState {
    pub fn for_tests(llm: Arc<dyn LlmClient>) -> Self {
        Self {
            llm,
            config: Config::for_tests(),
        }
    }
}
