use anyhow::{Context, Result};

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration loaded once from environment variables at startup.
///
/// The Gemini key is optional: without it the service still starts and the
/// AI endpoints answer with a configuration error.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub llm_timeout_secs: u64,
    pub port: u16,
    pub static_dir: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            gemini_model: optional_env("GEMINI_MODEL")
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_base: optional_env("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
            llm_timeout_secs: optional_env("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|| "120".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            port: optional_env("PORT")
                .unwrap_or_else(|| "3457".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            static_dir: optional_env("STATIC_DIR").unwrap_or_else(|| "public".to_string()),
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn llm_configured(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}

/// Reads a variable, treating an empty or blank value as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
impl Config {
    /// Configuration used by router tests; never reads the environment.
    pub fn for_tests() -> Self {
        Config {
            gemini_api_key: Some("test-key".to_string()),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            llm_timeout_secs: 5,
            port: 0,
            static_dir: "public".to_string(),
            rust_log: "debug".to_string(),
        }
    }
}
