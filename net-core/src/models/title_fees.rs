use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the buyer is paying for the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Financed purchase.
    #[default]
    Loan,
    Cash,
}

/// Independent inclusion toggles for the optional title fee lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeToggles {
    pub settlement_fee: bool,
    pub cpl: bool,
    pub tieff: bool,
    pub deed_recording: bool,
    pub transfer_fee: bool,
}

impl Default for FeeToggles {
    fn default() -> Self {
        Self {
            settlement_fee: true,
            cpl: true,
            tieff: true,
            deed_recording: true,
            transfer_fee: true,
        }
    }
}

/// Everything the title fee aggregator needs besides the schedule itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleFeeSettings {
    pub transaction_type: TransactionType,
    /// Jurisdiction key as entered; matched case-insensitively.
    pub jurisdiction: String,
    pub e_filing: bool,
    /// Owner's policy premium, already resolved from the tier table or
    /// entered manually.
    pub premium: Decimal,
    pub toggles: FeeToggles,
}

/// A labelled amount on the net sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub amount: Decimal,
}

impl LineItem {
    pub fn new(
        label: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Itemized title fees in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleFees {
    /// Included lines, each rounded to cents.
    pub items: Vec<LineItem>,
    /// Sum of the unrounded lines, rounded to cents.
    pub total: Decimal,
}
