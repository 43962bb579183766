use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One of the two prior-year property tax installments.
///
/// `amount` only counts toward what has been paid when `paid` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Installment {
    pub paid: bool,
    pub amount: Decimal,
}

/// Last calendar day the seller is responsible for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProrationCutoff {
    /// The day before closing; the buyer owns closing day.
    #[default]
    DayBeforeClosing,
    /// Closing day itself is charged to the seller.
    ClosingDate,
}

/// Denominator used for the daily tax rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCount {
    /// 365, or 366 in a leap year.
    #[default]
    Calendar,
    /// Always 365.
    Force365,
}

/// Inputs for the arrears tax proration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaxSettings {
    /// Prior year's annual tax bill.
    pub prior_year_tax: Decimal,
    pub installments: [Installment; 2],
    pub cutoff: ProrationCutoff,
    pub day_count: DayCount,
}

/// Result of the arrears tax proration.
///
/// Amounts keep full precision; round them at the presentation boundary.
/// `total_debit` is always `unpaid_prior_year + accrued_this_year` and never
/// negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Calendar year of the closing date.
    pub year: i32,
    pub cutoff: NaiveDate,
    pub days_in_year: u32,
    pub daily_rate: Decimal,
    pub days_accrued: u32,
    pub accrued_this_year: Decimal,
    pub paid_total: Decimal,
    pub unpaid_prior_year: Decimal,
    pub total_debit: Decimal,
}
