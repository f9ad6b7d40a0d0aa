//! LLM Client: the single point of entry for all model calls in TauxJuste.
//!
//! ARCHITECTURAL RULE: No other module may call the Gemini API directly.
//! Handlers receive an `Arc<dyn LlmClient>` and go through `call_json`.
//!
//! Every call is a single attempt: failures are surfaced to the user, who retries.
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub mod gemini;
pub mod json;
pub mod prompts;
#[cfg(test)]
pub mod stub;

pub use gemini::GeminiClient;
pub use json::extract_json;

/// Sampling temperature for every call. Pricing output must stay consistent
/// between identical requests.
pub const TEMPERATURE: f32 = 0.3;

/// Output ceiling for structured multi-field answers.
pub const STRUCTURED_MAX_TOKENS: u32 = 8192;

/// Characters of the raw model text written to the debug log.
const LOG_PREVIEW_CHARS: usize = 150;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("GEMINI_API_KEY manquante")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("No valid JSON found: {preview}")]
    MalformedOutput { preview: String },
}

/// Minimal capability every model backend provides.
///
/// Carried in `AppState` as `Arc<dyn LlmClient>` so tests can substitute a
/// deterministic double without touching handler code.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends one generation request and returns the trimmed response text.
    ///
    /// When `schema` is given the model is constrained to that JSON shape.
    async fn invoke(
        &self,
        system: &str,
        prompt: &str,
        max_tokens: u32,
        schema: Option<&Value>,
    ) -> Result<String, LlmError>;
}

/// Calls the model and deserializes the JSON embedded in its answer.
///
/// Extraction failures and shape mismatches are both `MalformedOutput`, so the
/// caller can tell them apart from transport errors.
pub async fn call_json<T: DeserializeOwned>(
    llm: &dyn LlmClient,
    system: &str,
    prompt: &str,
    max_tokens: u32,
    schema: Option<&Value>,
) -> Result<T, LlmError> {
    let raw = llm.invoke(system, prompt, max_tokens, schema).await?;

    debug!(
        "Model response preview: {}",
        json::preview(&raw, LOG_PREVIEW_CHARS).replace('\n', "\\n")
    );

    let value = extract_json(&raw)?;
    serde_json::from_value(value).map_err(|e| {
        debug!("Model JSON did not match the expected shape: {e}");
        json::malformed(&raw)
    })
}
