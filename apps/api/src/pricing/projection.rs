//! Monthly revenue projection, computed here and never asked from the model.

use tracing::warn;

use crate::pricing::models::RateTiers;

/// Billed days assumed per month for the projection.
pub const BILLED_DAYS_PER_MONTH: u32 = 15;

const THOUSANDS_SEPARATOR: char = ' ';
const DECIMAL_SEPARATOR: char = ',';
const MAX_FRACTION_DIGITS: usize = 3;

/// Builds the projection sentence from the daily-rate tiers.
///
/// A missing tier counts as zero, so a partial model answer still yields a
/// projection instead of an error.
pub fn monthly_projection(daily_rate: &RateTiers) -> String {
    let low = tier_or_zero("bas", daily_rate.low);
    let target = tier_or_zero("cible", daily_rate.target);
    let premium = tier_or_zero("premium", daily_rate.premium);
    let days = f64::from(BILLED_DAYS_PER_MONTH);

    format!(
        "Sur {BILLED_DAYS_PER_MONTH} jours facturés/mois : {}€ (compétitif) · {}€ (cible) · {}€ (premium)",
        format_fr(low * days),
        format_fr(target * days),
        format_fr(premium * days),
    )
}

fn tier_or_zero(name: &str, tier: Option<f64>) -> f64 {
    match tier {
        Some(value) => value,
        None => {
            warn!("Model answer has no tjm.{name}; projecting it as 0");
            0.0
        }
    }
}

/// Formats a number the French way: space-grouped thousands, comma decimals,
/// at most three fraction digits with trailing zeros dropped.
pub fn format_fr(value: f64) -> String {
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }

    let len = int_part.len();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(digit);
    }

    if !frac_part.is_empty() {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(frac_part);
    }
    out
}
