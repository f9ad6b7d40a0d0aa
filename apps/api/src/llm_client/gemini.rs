//! Gemini implementation of `LlmClient` over the `generateContent` REST endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::{LlmClient, LlmError, TEMPERATURE};
use crate::config::Config;

const JSON_MIME_TYPE: &str = "application/json";

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    api_base: String,
}

impl GeminiClient {
    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.llm_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            api_base: config.gemini_api_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }
}

/// Generation parameters shared by every call: low temperature, JSON output,
/// optional schema constraint.
fn build_generation_config(max_tokens: u32, schema: Option<&Value>) -> GenerationConfig {
    GenerationConfig {
        max_output_tokens: max_tokens,
        temperature: TEMPERATURE,
        response_mime_type: JSON_MIME_TYPE,
        response_schema: schema.cloned(),
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn invoke(
        &self,
        system: &str,
        prompt: &str,
        max_tokens: u32,
        schema: Option<&Value>,
    ) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::NotConfigured)?;

        let request = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part::text(system)],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part::text(prompt)],
            }],
            generation_config: build_generation_config(max_tokens, schema),
        };

        debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            max_tokens,
            with_schema = schema.is_some(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response.json().await?;

        if let Some(usage) = &body.usage_metadata {
            debug!(
                "Gemini call succeeded: input_tokens={}, output_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        body.into_text()
    }
}

// ============================================================================
// Gemini API request/response types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

impl<'a> Part<'a> {
    fn text(text: &'a str) -> Self {
        Self { text }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
    temperature: f32,
    response_mime_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorEnvelope {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

impl GenerateContentResponse {
    /// Joins the text parts of the first candidate and trims the result.
    fn into_text(self) -> Result<String, LlmError> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            let reason = self
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "no candidates returned".to_string());
            return Err(LlmError::Api {
                status: 200,
                message: format!("Prompt blocked: {reason}"),
            });
        };

        if matches!(
            candidate.finish_reason.as_deref(),
            Some("SAFETY") | Some("PROHIBITED_CONTENT") | Some("BLOCKLIST")
        ) {
            return Err(LlmError::Api {
                status: 200,
                message: format!(
                    "Response blocked: {}",
                    candidate.finish_reason.unwrap_or_default()
                ),
            });
        }

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect::<String>())
            .unwrap_or_default();

        let text = text.trim();
        if text.is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(text.to_string())
    }
}
