//! Reference freelance rates for the French market.
//!
//! Kept as data rather than prompt prose: the pricing system prompt renders the
//! current snapshot with `MarketSnapshot::render`. Bump `version` whenever the
//! figures change.

use std::fmt::Write;

/// Day-rate (TJM) and hour-rate ranges for one role, in euros.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleRate {
    pub role: &'static str,
    pub daily: (u32, u32),
    pub hourly: (u32, u32),
}

#[derive(Debug, Clone, Copy)]
pub struct RateCategory {
    pub name: &'static str,
    pub roles: &'static [RoleRate],
}

/// A single correction applied on top of a reference rate.
#[derive(Debug, Clone, Copy)]
pub struct Adjustment {
    pub condition: &'static str,
    pub effect: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct AdjustmentGroup {
    pub name: &'static str,
    pub adjustments: &'static [Adjustment],
}

#[derive(Debug, Clone, Copy)]
pub struct MarketSnapshot {
    pub version: &'static str,
    pub sources: &'static str,
    pub categories: &'static [RateCategory],
    pub adjustments: &'static [AdjustmentGroup],
}

const fn role(role: &'static str, daily: (u32, u32), hourly: (u32, u32)) -> RoleRate {
    RoleRate {
        role,
        daily,
        hourly,
    }
}

const fn adj(condition: &'static str, effect: &'static str) -> Adjustment {
    Adjustment { condition, effect }
}

pub const MARKET_DATA_FR: MarketSnapshot = MarketSnapshot {
    version: "2024.1",
    sources: "Malt, Comet, Crème de la Crème 2024",
    categories: &[
        RateCategory {
            name: "TECH & DEV",
            roles: &[
                role("Développeur web junior (<2 ans)", (280, 380), (35, 47)),
                role("Développeur web mid (2-5 ans)", (380, 550), (47, 69)),
                role("Développeur web senior (5+ ans)", (550, 750), (69, 94)),
                role("Développeur fullstack senior", (600, 850), (75, 106)),
                role("Lead dev / architecte", (700, 1000), (87, 125)),
                role("Dev mobile (iOS/Android)", (500, 800), (62, 100)),
                role("Dev data / ML engineer", (600, 900), (75, 112)),
                role("DevOps / Cloud", (600, 850), (75, 106)),
            ],
        },
        RateCategory {
            name: "DESIGN",
            roles: &[
                role("Designer UI/UX junior", (300, 450), (37, 56)),
                role("Designer UI/UX mid", (450, 650), (56, 81)),
                role("Designer UI/UX senior", (650, 900), (81, 112)),
                role("Directeur artistique", (600, 900), (75, 112)),
                role("Motion designer", (400, 700), (50, 87)),
            ],
        },
        RateCategory {
            name: "MARKETING & CONTENU",
            roles: &[
                role("Rédacteur / Copywriter junior", (200, 350), (25, 44)),
                role("Rédacteur / Copywriter senior", (350, 600), (44, 75)),
                role("SEO specialist", (350, 600), (44, 75)),
                role("Social media manager", (300, 500), (37, 62)),
                role("Growth hacker", (450, 750), (56, 94)),
                role("Consultant marketing digital", (500, 800), (62, 100)),
            ],
        },
        RateCategory {
            name: "CONSULTING & MANAGEMENT",
            roles: &[
                role("Chef de projet digital", (450, 700), (56, 87)),
                role("Product Manager", (600, 900), (75, 112)),
                role("Consultant RH", (500, 900), (62, 112)),
                role("Consultant financier / CFO", (700, 1200), (87, 150)),
                role("Consultant stratégie", (800, 1500), (100, 187)),
                role("Formateur", (800, 2000), (100, 250)),
            ],
        },
    ],
    adjustments: &[
        AdjustmentGroup {
            name: "FACTEURS DE CORRECTION PAR VILLE",
            adjustments: &[
                adj("Paris", "+10 à +20% vs moyenne FR"),
                adj("Lyon, Bordeaux, Nantes", "référence (0%)"),
                adj("Villes moyennes / remote", "-5 à -10%"),
                adj("Full remote (client Paris)", "taux Paris applicable"),
            ],
        },
        AdjustmentGroup {
            name: "FACTEURS QUALITÉ",
            adjustments: &[
                adj("Portfolio faible", "-15 à -20%"),
                adj("Portfolio solide", "référence"),
                adj("Portfolio fort", "+10 à +15%"),
                adj("Portfolio primé / références top", "+20 à +30%"),
            ],
        },
        AdjustmentGroup {
            name: "FACTEURS TYPE CLIENT",
            adjustments: &[
                adj("Startup early-stage", "-10 à -15% (compenser par equity/visibilité)"),
                adj("PME", "référence"),
                adj("ETI / Grand groupe", "+10 à +20%"),
                adj("Agence (vous êtes sous-traitant)", "-5 à -10%"),
            ],
        },
        AdjustmentGroup {
            name: "FACTEURS DURÉE / ENGAGEMENT",
            adjustments: &[
                adj("Mission <1 semaine", "+10 à +15% (urgence)"),
                adj("Mission 1-4 semaines", "référence"),
                adj("Retainer 3+ mois", "-5 à -10% (stabilité = légère remise)"),
                adj("Retainer 6+ mois", "-10 à -15%"),
            ],
        },
    ],
};

impl MarketSnapshot {
    /// Renders the snapshot as the plain-text reference block embedded in prompts.
    pub fn render(&self) -> String {
        let mut out = format!(
            "Données de référence marché freelance France \
             (TJM = Taux Journalier Moyen, base 8h ; sources : {}, version {}) :\n",
            self.sources, self.version
        );

        // Writing into a String cannot fail.
        for category in self.categories {
            let _ = writeln!(out, "\n{} :", category.name);
            for r in category.roles {
                let _ = writeln!(
                    out,
                    "- {} : {}-{}€/j | {}-{}€/h",
                    r.role, r.daily.0, r.daily.1, r.hourly.0, r.hourly.1
                );
            }
        }

        for group in self.adjustments {
            let _ = writeln!(out, "\n{} :", group.name);
            for a in group.adjustments {
                let _ = writeln!(out, "- {} : {}", a.condition, a.effect);
            }
        }

        out
    }
}
