//! Axum route handler for the pricing calculator.

use axum::{extract::State, Json};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::fields::{non_blank, or_label};
use crate::llm_client::{call_json, STRUCTURED_MAX_TOKENS};
use crate::pricing::market_data::MARKET_DATA_FR;
use crate::pricing::models::{PricingRequest, PricingResult};
use crate::pricing::projection::monthly_projection;
use crate::pricing::prompts::{pricing_schema, pricing_system_prompt, PRICING_PROMPT_TEMPLATE};
use crate::state::AppState;

const MISSING_FIELDS_MESSAGE: &str = "Compétence et expérience requis.";

/// POST /api/calculate
///
/// Validates the profile, asks the model for rate tiers and advice, then
/// attaches the monthly projection computed from the returned daily rates.
#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn handle_calculate(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<PricingRequest>,
) -> Result<Json<PricingResult>, AppError> {
    let (Some(skill), Some(experience)) =
        (non_blank(&request.skill), non_blank(&request.experience))
    else {
        return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
    };

    info!("Pricing request: skill={skill:?}, experience={experience:?}");

    let prompt = build_pricing_prompt(&request, skill, experience);
    let system = pricing_system_prompt(&MARKET_DATA_FR);
    let schema = pricing_schema();

    let mut result: PricingResult = call_json(
        state.llm.as_ref(),
        &system,
        &prompt,
        STRUCTURED_MAX_TOKENS,
        Some(&schema),
    )
    .await?;

    result.set_monthly_projection(monthly_projection(&result.daily_rate()));

    info!("Pricing computed: position={:?}", result.market_position());

    Ok(Json(result))
}

/// Fills the pricing template, substituting default labels for absent fields.
fn build_pricing_prompt(request: &PricingRequest, skill: &str, experience: &str) -> String {
    PRICING_PROMPT_TEMPLATE
        .replace("{skill}", skill)
        .replace("{experience}", experience)
        .replace("{location}", or_label(&request.location, "France (non précisé)"))
        .replace("{arrangement}", or_label(&request.arrangement, "Non précisé"))
        .replace("{specialization}", or_label(&request.specialization, "Généraliste"))
        .replace("{project_type}", or_label(&request.project_type, "Non précisé"))
        .replace("{complexity}", or_label(&request.complexity, "Standard"))
        .replace("{client_type}", or_label(&request.client_type, "PME"))
        .replace("{duration}", or_label(&request.duration, "Non précisé"))
        .replace("{description}", or_label(&request.description, "Non précisé"))
        .replace("{portfolio_quality}", or_label(&request.portfolio_quality, "Solide"))
        .replace("{demand_level}", or_label(&request.demand_level, "Quelques leads"))
        .replace("{unique_value}", or_label(&request.unique_value, "Non précisé"))
}
