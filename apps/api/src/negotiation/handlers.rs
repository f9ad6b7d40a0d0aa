//! Axum route handler for the negotiation coach.

use axum::{extract::State, Json};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::fields::or_label;
use crate::llm_client::{call_json, STRUCTURED_MAX_TOKENS};
use crate::negotiation::models::{NegotiationRequest, NegotiationResult, TargetRate};
use crate::negotiation::prompts::{
    negotiation_schema, negotiation_system_prompt, NEGOTIATION_PROMPT_TEMPLATE,
};
use crate::state::AppState;

const MISSING_RATE_MESSAGE: &str = "Taux cible requis.";

/// POST /api/negotiate
#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn handle_negotiate(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<NegotiationRequest>,
) -> Result<Json<NegotiationResult>, AppError> {
    let Some(target_rate) = request.target_rate.as_ref().filter(|r| r.is_set()) else {
        return Err(AppError::Validation(MISSING_RATE_MESSAGE.to_string()));
    };

    info!("Negotiation request: target_rate={target_rate}");

    let prompt = build_negotiation_prompt(&request, target_rate);
    let schema = negotiation_schema();

    let result: NegotiationResult = call_json(
        state.llm.as_ref(),
        &negotiation_system_prompt(),
        &prompt,
        STRUCTURED_MAX_TOKENS,
        Some(&schema),
    )
    .await?;

    info!("Negotiation scripts generated: {} fields", result.field_count());

    Ok(Json(result))
}

fn build_negotiation_prompt(request: &NegotiationRequest, target_rate: &TargetRate) -> String {
    NEGOTIATION_PROMPT_TEMPLATE
        .replace("{skill}", or_label(&request.skill, "développement web"))
        .replace("{target_rate}", &target_rate.to_string())
        .replace("{client_type}", or_label(&request.client_type, "PME"))
        .replace("{duration}", or_label(&request.duration, "non précisé"))
        .replace("{description}", or_label(&request.description, "non précisé"))
}
