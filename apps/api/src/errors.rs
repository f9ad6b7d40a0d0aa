use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

pub const MISSING_KEY_MESSAGE: &str = "Clé API manquante. Configurez GEMINI_API_KEY.";
pub const PARSING_ERROR_MESSAGE: &str = "Erreur de parsing. Veuillez réessayer.";
pub const INVALID_BODY_MESSAGE: &str = "Corps de requête JSON invalide.";
pub const BODY_TOO_LARGE_MESSAGE: &str = "Requête trop volumineuse.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid request body: {detail}")]
    InvalidBody { status: StatusCode, detail: String },

    #[error("Gemini API key is not configured")]
    Configuration,

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Malformed model output: {preview}")]
    MalformedOutput { preview: String },
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::NotConfigured => AppError::Configuration,
            LlmError::MalformedOutput { preview } => AppError::MalformedOutput { preview },
            other => AppError::Llm(other.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let status = match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        };
        AppError::InvalidBody {
            status,
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InvalidBody { status, detail } => {
                tracing::warn!("Rejected request body: {detail}");
                let message = if *status == StatusCode::PAYLOAD_TOO_LARGE {
                    BODY_TOO_LARGE_MESSAGE
                } else {
                    INVALID_BODY_MESSAGE
                };
                (*status, message.to_string())
            }
            AppError::Configuration => {
                tracing::error!("Rejecting AI request: GEMINI_API_KEY is not set");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MISSING_KEY_MESSAGE.to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Erreur: {msg}"))
            }
            AppError::MalformedOutput { preview } => {
                tracing::error!("Could not extract JSON from model output: {preview}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    PARSING_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_not_configured_maps_to_configuration() {
        let err: AppError = LlmError::NotConfigured.into();
        assert!(matches!(err, AppError::Configuration));
    }

    #[test]
    fn test_llm_malformed_output_keeps_preview() {
        let err: AppError = LlmError::MalformedOutput {
            preview: "Désolé".to_string(),
        }
        .into();
        match err {
            AppError::MalformedOutput { preview } => assert_eq!(preview, "Désolé"),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_llm_api_error_is_interpolated() {
        let err: AppError = LlmError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        }
        .into();
        match err {
            AppError::Llm(msg) => assert!(msg.contains("quota exceeded")),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_body_renders_json_error() {
        let response = AppError::InvalidBody {
            status: StatusCode::BAD_REQUEST,
            detail: "EOF while parsing".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": INVALID_BODY_MESSAGE }));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Configuration.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Llm("boom".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::MalformedOutput {
                preview: String::new()
            }
            .into_response()
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
