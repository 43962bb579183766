use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the premium tier table.
///
/// `low..=high` is the liability range the row covers and
/// `band_low..=band_high` the premium band quoted for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumTierRow {
    pub low: Decimal,
    pub high: Decimal,
    pub band_low: Decimal,
    pub band_high: Decimal,
}

/// Premium formula above the table's ceiling.
///
/// Each started `unit_size` of liability past the ceiling adds one full
/// `per_unit_rate` to `base_premium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverflowRule {
    pub base_premium: Decimal,
    pub per_unit_rate: Decimal,
    pub unit_size: Decimal,
}

/// Which point of a tier's premium band to quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PremiumChoice {
    Low,
    #[default]
    Mid,
    High,
}

/// How a quote was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteMode {
    /// Taken from a tier row.
    Tiered,
    /// Computed with the [`OverflowRule`].
    Overflow,
}

/// Result of a premium lookup.
///
/// `min` and `max` are the band edges exactly as stored in the table; only
/// `chosen` is rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumQuote {
    pub min: Decimal,
    pub max: Decimal,
    pub chosen: Decimal,
    pub mode: QuoteMode,
}
