use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::fields::lenient_text;

/// Key of the server-computed projection in a pricing answer.
pub const MONTHLY_PROJECTION_KEY: &str = "projectionMensuelle";

/// Body of `POST /api/calculate`. Field names follow the web client.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRequest {
    #[serde(rename = "competence", default, deserialize_with = "lenient_text")]
    pub skill: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub experience: Option<String>,
    #[serde(rename = "localisation", default, deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub arrangement: Option<String>,
    #[serde(rename = "specialisation", default, deserialize_with = "lenient_text")]
    pub specialization: Option<String>,
    #[serde(rename = "typeProjet", default, deserialize_with = "lenient_text")]
    pub project_type: Option<String>,
    #[serde(rename = "complexite", default, deserialize_with = "lenient_text")]
    pub complexity: Option<String>,
    #[serde(rename = "typeClient", default, deserialize_with = "lenient_text")]
    pub client_type: Option<String>,
    #[serde(rename = "duree", default, deserialize_with = "lenient_text")]
    pub duration: Option<String>,
    #[serde(rename = "descriptionProjet", default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(rename = "qualitePortfolio", default, deserialize_with = "lenient_text")]
    pub portfolio_quality: Option<String>,
    #[serde(rename = "niveauDemande", default, deserialize_with = "lenient_text")]
    pub demand_level: Option<String>,
    #[serde(rename = "valeurUnique", default, deserialize_with = "lenient_text")]
    pub unique_value: Option<String>,
}

/// Low / target / premium tiers read from a rate object of the answer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RateTiers {
    pub low: Option<f64>,
    pub target: Option<f64>,
    pub premium: Option<f64>,
}

impl RateTiers {
    /// Reads `{bas, cible, premium}`. Anything that is not a number, or a
    /// string holding one, leaves its tier empty.
    pub fn from_value(value: Option<&Value>) -> Self {
        let tier = |name: &str| value.and_then(|v| v.get(name)).and_then(as_rate);
        Self {
            low: tier("bas"),
            target: tier("cible"),
            premium: tier("premium"),
        }
    }
}

fn as_rate(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Structured pricing advice as produced by the model.
///
/// The answer object is relayed with every key it carries, partial or not.
/// Only `tjm` is read server-side, and `projectionMensuelle` is always
/// replaced by the computed projection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PricingResult {
    fields: Map<String, Value>,
}

impl PricingResult {
    pub fn daily_rate(&self) -> RateTiers {
        RateTiers::from_value(self.fields.get("tjm"))
    }

    pub fn market_position(&self) -> Option<&str> {
        self.fields.get("positionMarche").and_then(Value::as_str)
    }

    pub fn set_monthly_projection(&mut self, projection: String) {
        self.fields
            .insert(MONTHLY_PROJECTION_KEY.to_string(), Value::String(projection));
    }
}
