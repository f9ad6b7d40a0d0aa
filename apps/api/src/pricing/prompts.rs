// Prompt constants and output schema for the pricing calculator.
// Reuses cross-cutting fragments from llm_client::prompts.

use serde_json::{json, Value};

use crate::llm_client::prompts::{EURO_UNITS_INSTRUCTION, JSON_ONLY_SYSTEM};
use crate::pricing::market_data::MarketSnapshot;

/// Role statement of the pricing system prompt; the market data block follows it.
const PRICING_SYSTEM_ROLE: &str = "Tu es un conseiller expert en pricing pour freelances français.\n\
    Tu aides les indépendants à fixer leur taux de façon objective, basée sur les données marché réelles.";

/// Pricing user prompt template.
/// Replace: {skill}, {experience}, {location}, {arrangement}, {specialization},
///          {project_type}, {complexity}, {client_type}, {duration}, {description},
///          {portfolio_quality}, {demand_level}, {unique_value}
pub const PRICING_PROMPT_TEMPLATE: &str = r#"
PROFIL FREELANCE :
- Compétence principale : {skill}
- Expérience : {experience}
- Localisation : {location}
- Mode de travail : {arrangement}
- Spécialisation : {specialization}

DÉTAILS DE LA MISSION :
- Type : {project_type}
- Complexité : {complexity}
- Type de client : {client_type}
- Durée estimée : {duration}
- Description : {description}

POSITIONNEMENT :
- Qualité du portfolio : {portfolio_quality}
- Niveau de demande actuel : {demand_level}
- Valeur unique : {unique_value}

Calcule les taux recommandés en €/h et TJM (€/jour base 8h) pour ce profil.
"#;

/// Builds the pricing system prompt around a market snapshot.
pub fn pricing_system_prompt(market: &MarketSnapshot) -> String {
    format!(
        "{PRICING_SYSTEM_ROLE}\n{JSON_ONLY_SYSTEM}\n{EURO_UNITS_INSTRUCTION}\n{}",
        market.render()
    )
}

fn rate_tiers_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "bas": { "type": "number" },
            "cible": { "type": "number" },
            "premium": { "type": "number" }
        },
        "required": ["bas", "cible", "premium"]
    })
}

/// Output schema of a pricing answer. `projectionMensuelle` is not part of it:
/// the handler computes it after the call.
pub fn pricing_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "tauxHoraire": rate_tiers_schema(),
            "tjm": rate_tiers_schema(),
            "positionMarche": { "type": "string" },
            "resumePositionnement": { "type": "string" },
            "justificationCible": { "type": "string" },
            "quandUtiliserBas": { "type": "string" },
            "quandUtiliserPremium": { "type": "string" },
            "alertes": { "type": "array", "items": { "type": "string" } },
            "conseils": { "type": "array", "items": { "type": "string" } }
        },
        "required": [
            "tauxHoraire", "tjm", "positionMarche", "resumePositionnement",
            "justificationCible", "quandUtiliserBas", "quandUtiliserPremium",
            "alertes", "conseils"
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::market_data::MARKET_DATA_FR;

    #[test]
    fn test_system_prompt_embeds_market_data() {
        let prompt = pricing_system_prompt(&MARKET_DATA_FR);
        assert!(prompt.starts_with("Tu es un conseiller expert en pricing"));
        assert!(prompt.contains(JSON_ONLY_SYSTEM));
        assert!(prompt.contains("Lead dev / architecte : 700-1000€/j | 87-125€/h"));
        assert!(prompt.contains("FACTEURS DURÉE / ENGAGEMENT"));
    }

    #[test]
    fn test_schema_never_asks_for_projection() {
        let schema = pricing_schema();
        assert!(schema["properties"].get("projectionMensuelle").is_none());
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 9);
        assert!(!required.iter().any(|f| f == "projectionMensuelle"));
    }

    #[test]
    fn test_schema_requires_every_tier() {
        let schema = pricing_schema();
        assert_eq!(
            schema["properties"]["tjm"]["required"],
            json!(["bas", "cible", "premium"])
        );
    }
}
