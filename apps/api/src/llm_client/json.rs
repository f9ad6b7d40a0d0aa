//! Recovers the JSON payload from a free-form model response.
//!
//! Models are asked for bare JSON but sometimes wrap it in a markdown fence or
//! in a sentence of prose. Strategies are tried in a fixed order and the first
//! one that matches decides the outcome: its parse error is final.

use serde_json::Value;

use super::LlmError;

/// Number of characters of the raw text kept in a `MalformedOutput` error.
const PREVIEW_CHARS: usize = 100;

/// Extracts the single JSON value embedded in `raw`.
///
/// Tries, in order:
/// 1. the whole trimmed text, when it starts with `{` or `[`
/// 2. the content of the first ` ``` ` / ` ```json ` fenced block
/// 3. the greedy span from the first `{` to the last `}`
pub fn extract_json(raw: &str) -> Result<Value, LlmError> {
    let trimmed = raw.trim();

    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return parse(trimmed, raw);
    }

    if let Some(inner) = first_fenced_block(trimmed) {
        return parse(inner.trim(), raw);
    }

    if let Some(span) = greedy_brace_span(trimmed) {
        return parse(span, raw);
    }

    Err(malformed(raw))
}

/// Returns the body of the first fenced block, without the optional `json` tag.
/// An opening fence with no closing fence is not a block.
fn first_fenced_block(text: &str) -> Option<&str> {
    let start = text.find("```")? + 3;
    let body = &text[start..];
    let body = body.strip_prefix("json").unwrap_or(body);
    let end = body.find("```")?;
    Some(&body[..end])
}

/// Slice from the first `{` through the last `}`, if they are in that order.
fn greedy_brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

fn parse(candidate: &str, raw: &str) -> Result<Value, LlmError> {
    serde_json::from_str(candidate).map_err(|_| malformed(raw))
}

pub(crate) fn malformed(raw: &str) -> LlmError {
    LlmError::MalformedOutput {
        preview: preview(raw, PREVIEW_CHARS),
    }
}

/// First `max_chars` characters of `text`, cut on a char boundary.
pub(crate) fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
