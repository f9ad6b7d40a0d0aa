use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::fields::{display_number, lenient_text};

/// Target hourly rate as sent by the web client: a number or free text.
/// A bare `true` is accepted and kept as is.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TargetRate {
    Amount(Number),
    Text(String),
    Flag(bool),
}

impl TargetRate {
    /// A rate of zero or a blank string is treated as missing.
    pub fn is_set(&self) -> bool {
        match self {
            TargetRate::Amount(n) => n.as_f64().is_some_and(|v| v != 0.0),
            TargetRate::Text(s) => !s.trim().is_empty(),
            TargetRate::Flag(b) => *b,
        }
    }
}

impl fmt::Display for TargetRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetRate::Amount(n) => f.write_str(&display_number(n)),
            TargetRate::Text(s) => f.write_str(s.trim()),
            TargetRate::Flag(b) => write!(f, "{b}"),
        }
    }
}

/// Body of `POST /api/negotiate`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NegotiationRequest {
    #[serde(rename = "competence", default, deserialize_with = "lenient_text")]
    pub skill: Option<String>,
    #[serde(rename = "typeClient", default, deserialize_with = "lenient_text")]
    pub client_type: Option<String>,
    #[serde(rename = "tauxCible")]
    pub target_rate: Option<TargetRate>,
    #[serde(rename = "duree", default, deserialize_with = "lenient_text")]
    pub duration: Option<String>,
    #[serde(rename = "descriptionProjet", default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
}

/// Negotiation coaching material (`scriptEmail`, `scriptCall`,
/// `reponseTropCher`, `reponseRemise`, `pointsForts`, `erreursCourantes`),
/// relayed to the client as produced. Any JSON object is accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NegotiationResult {
    fields: Map<String, Value>,
}

impl NegotiationResult {
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: serde_json::Value) -> NegotiationRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_target_rate_accepts_number_and_text() {
        let numeric = request(json!({"tauxCible": 65}));
        assert_eq!(numeric.target_rate.as_ref().unwrap().to_string(), "65");

        let text = request(json!({"tauxCible": " 70 "}));
        assert_eq!(text.target_rate.as_ref().unwrap().to_string(), "70");
    }

    #[test]
    fn test_target_rate_decimal_is_kept() {
        let r = request(json!({"tauxCible": 62.5}));
        assert_eq!(r.target_rate.unwrap().to_string(), "62.5");
    }

    #[test]
    fn test_whole_float_rate_drops_trailing_zero() {
        let r = request(json!({"tauxCible": 65.0}));
        assert_eq!(r.target_rate.unwrap().to_string(), "65");
    }

    #[test]
    fn test_target_rate_flag() {
        let r = request(json!({"tauxCible": true}));
        let rate = r.target_rate.unwrap();
        assert!(rate.is_set());
        assert_eq!(rate.to_string(), "true");
        assert!(!TargetRate::Flag(false).is_set());
    }

    #[test]
    fn test_target_rate_missing_or_null() {
        assert!(request(json!({})).target_rate.is_none());
        assert!(request(json!({"tauxCible": null})).target_rate.is_none());
    }

    #[test]
    fn test_target_rate_is_set() {
        assert!(TargetRate::Amount(Number::from(80)).is_set());
        assert!(!TargetRate::Amount(Number::from(0)).is_set());
        assert!(!TargetRate::Text("   ".to_string()).is_set());
        assert!(TargetRate::Text("80€".to_string()).is_set());
    }

    #[test]
    fn test_negotiation_result_keeps_every_key() {
        let value = json!({
            "scriptEmail": "Bonjour,",
            "scriptCall": "Merci pour votre temps.",
            "reponseTropCher": "Je comprends.",
            "reponseRemise": "Je peux ajuster le périmètre.",
            "pointsForts": ["Expérience", "Délais"],
            "erreursCourantes": ["Baisser trop vite"],
            "conseilBonus": "Relancer sous 48h"
        });
        let result: NegotiationResult = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(result.field_count(), 7);
        assert_eq!(serde_json::to_value(&result).unwrap(), value);
    }

    #[test]
    fn test_negotiation_result_must_be_an_object() {
        assert!(serde_json::from_value::<NegotiationResult>(json!(["Bonjour"])).is_err());
    }
}
