//! Amount parsing and display helpers
//!
//! Accumulation happens at full precision everywhere in the engine;
//! rounding to two decimal places is strictly a display-boundary concern.

use bigdecimal::rounding::RoundingMode;
use bigdecimal::BigDecimal;

/// Parse a free-form amount string into a decimal
///
/// Grouping commas and whitespace are stripped first. Anything that still
/// fails to parse degrades to zero - malformed numeric input is never an
/// error in this system.
pub fn parse_amount(raw: &str) -> BigDecimal {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    cleaned.parse().unwrap_or_else(|_| BigDecimal::from(0))
}

/// Round an amount to two decimal places (half-up) for presentation
pub fn round_display(amount: &BigDecimal) -> BigDecimal {
    amount.with_scale_round(2, RoundingMode::HalfUp)
}

/// Format a magnitude with a currency symbol prefix, e.g. `₹1250.00`
///
/// Statement amounts can be signed internally; the rendered figure is
/// always the magnitude, with the sign cue living in the line label.
pub fn format_amount(amount: &BigDecimal, symbol: &str) -> String {
    format!("{}{}", symbol, round_display(&amount.abs()))
}
