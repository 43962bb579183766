use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a schedule's settlement fee constants are applied.
///
/// Some schedules list the full settlement fee charged on the transaction
/// and expect the seller to carry half of it; others list the seller's share
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementSplit {
    /// The constant is the seller's share and is used as-is.
    #[default]
    Full,
    /// The constant is the whole fee; the seller pays half.
    Halved,
}

/// Which deed recording fee applies to a jurisdiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordingTier {
    /// The designated primary jurisdiction.
    Primary,
    /// Every other jurisdiction.
    Other,
}

/// A named, immutable set of title and closing fee constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Display name, e.g. `"Standard"`.
    pub name: String,

    /// Settlement/closing fee for a loan-backed purchase.
    pub settlement_fee_loan: Decimal,

    /// Settlement/closing fee for a cash purchase.
    pub settlement_fee_cash: Decimal,

    /// Whether the settlement constants are halved before use.
    #[serde(default)]
    pub settlement_split: SettlementSplit,

    pub title_processing_fee: Decimal,
    pub closing_processing_fee: Decimal,

    /// Closing protection letter.
    pub cpl_fee: Decimal,

    /// Title insurance enforcement fund fee.
    pub tieff_fee: Decimal,

    pub deed_recording_primary: Decimal,
    pub deed_recording_other: Decimal,
    pub e_filing_fee: Decimal,

    /// Transfer fee and its surcharge, charged as one line.
    pub transfer_fee: Decimal,
}

/// A schedule that replaces the standard one for a set of jurisdictions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOverride {
    pub jurisdictions: Vec<String>,
    pub schedule: FeeSchedule,
}
