//! Deterministic `LlmClient` double that records every call it receives.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{LlmClient, LlmError};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub schema: Option<Value>,
}

enum Reply {
    Text(String),
    Error(fn() -> LlmError),
}

pub struct StubLlm {
    reply: Reply,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubLlm {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Reply::Text(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(make_error: fn() -> LlmError) -> Self {
        Self {
            reply: Reply::Error(make_error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LlmClient for StubLlm {
    async fn invoke(
        &self,
        system: &str,
        prompt: &str,
        max_tokens: u32,
        schema: Option<&Value>,
    ) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(RecordedCall {
            system: system.to_string(),
            prompt: prompt.to_string(),
            max_tokens,
            schema: schema.cloned(),
        });

        match &self.reply {
            Reply::Text(text) => Ok(text.trim().to_string()),
            Reply::Error(make_error) => Err(make_error()),
        }
    }
}
