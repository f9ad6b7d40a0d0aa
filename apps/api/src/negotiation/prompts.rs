// Prompt constants and output schema for the negotiation coach.

use serde_json::{json, Value};

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

const NEGOTIATION_SYSTEM_ROLE: &str = "Tu es un coach en négociation commerciale pour freelances français.\n\
    Tu génères des scripts de négociation concrets, directement utilisables en email ou en call.";

const TONE_INSTRUCTION: &str =
    "Adapte le ton au type de client (startup = direct, grand groupe = formel).";

/// Negotiation user prompt template.
/// Replace: {skill}, {target_rate}, {client_type}, {duration}, {description}
pub const NEGOTIATION_PROMPT_TEMPLATE: &str = r#"
Génère des scripts de négociation pour :
- Freelance spécialisé en : {skill}
- Taux cible à défendre : {target_rate}€/h
- Type de client : {client_type}
- Durée mission : {duration}
- Contexte mission : {description}

Génère :
1. Un email de proposition tarifaire professionnel
2. Un pitch de 3-4 phrases pour un appel téléphonique
3. Une réponse à "c'est trop cher" qui tient la position
4. Une réponse à "vous pouvez faire une remise ?" qui propose un compromis intelligent
5. 3-4 points forts à mentionner pour justifier le taux
6. Les 3 erreurs de négociation les plus fréquentes à éviter
"#;

pub fn negotiation_system_prompt() -> String {
    format!("{NEGOTIATION_SYSTEM_ROLE}\n{JSON_ONLY_SYSTEM}\n{TONE_INSTRUCTION}")
}

pub fn negotiation_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "scriptEmail": { "type": "string" },
            "scriptCall": { "type": "string" },
            "reponseTropCher": { "type": "string" },
            "reponseRemise": { "type": "string" },
            "pointsForts": { "type": "array", "items": { "type": "string" } },
            "erreursCourantes": { "type": "array", "items": { "type": "string" } }
        },
        "required": [
            "scriptEmail", "scriptCall", "reponseTropCher", "reponseRemise",
            "pointsForts", "erreursCourantes"
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt() {
        let prompt = negotiation_system_prompt();
        assert!(prompt.starts_with("Tu es un coach en négociation"));
        assert!(prompt.ends_with(TONE_INSTRUCTION));
    }

    #[test]
    fn test_schema_requires_all_fields() {
        let schema = negotiation_schema();
        let properties = schema["properties"].as_object().unwrap();
        let required = schema["required"].as_array().unwrap();
        assert_eq!(properties.len(), required.len());
        for field in required {
            assert!(properties.contains_key(field.as_str().unwrap()));
        }
    }
}
