// Shared prompt fragments.
// Each feature module keeps its own prompts.rs alongside its handlers;
// this file only holds cross-cutting instructions.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "Tu réponds UNIQUEMENT en JSON valide avec la structure demandée.";

/// Fragment pinning currency and billing units for the French market.
pub const EURO_UNITS_INSTRUCTION: &str =
    "Sois précis avec les chiffres, utilise TOUJOURS l'euro (€) et les jours/heures FR.";
