use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::premium_tier::{PremiumChoice, PremiumQuote};
use super::tax::{TaxBreakdown, TaxSettings};
use super::title_fees::{FeeToggles, LineItem, TitleFees, TransactionType};
use crate::calculations::common::round_cents;

/// How a commission line is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommissionBasis {
    /// Percent of the sale price, in percent units (`6` is 6%).
    Percent(Decimal),
    /// Fixed dollar amount.
    Flat(Decimal),
}

/// A brokerage commission line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commission {
    pub label: String,
    pub basis: CommissionBasis,
}

impl Commission {
    /// Unrounded commission owed on `sale_price`.
    pub fn amount(
        &self,
        sale_price: Decimal,
    ) -> Decimal {
        match self.basis {
            CommissionBasis::Percent(rate) => sale_price * rate / Decimal::ONE_HUNDRED,
            CommissionBasis::Flat(amount) => amount,
        }
    }
}

/// A free-form seller cost such as a home warranty or repair credit.
pub type AdHocCost = LineItem;

/// Where the owner's policy premium comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PremiumSource {
    /// Looked up in the tier table using the sale price as liability.
    Auto(PremiumChoice),
    /// Entered by hand.
    Manual(Decimal),
}

impl Default for PremiumSource {
    fn default() -> Self {
        Self::Auto(PremiumChoice::default())
    }
}

/// Title fee inputs before the premium has been resolved.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TitleFeeInput {
    pub transaction_type: TransactionType,
    pub jurisdiction: String,
    pub e_filing: bool,
    pub premium: PremiumSource,
    pub toggles: FeeToggles,
}

/// A normalized snapshot of every net sheet input.
///
/// Amounts are expected to be non-negative; see
/// [`normalize_money`](crate::normalize::normalize_money).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetSheetInput {
    pub sale_price: Decimal,
    pub commissions: Vec<Commission>,
    pub mortgage_payoff: Decimal,
    pub seller_concessions: Decimal,
    pub other_costs: Vec<AdHocCost>,
    pub closing_date: NaiveDate,
    pub title: TitleFeeInput,
    pub tax: TaxSettings,
}

/// Section a breakdown line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSection {
    SalePrice,
    Commission,
    Payoff,
    Concession,
    OtherCost,
    TitleFee,
    TitleFeeTotal,
    Tax,
    Net,
}

impl LineSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SalePrice => "sale_price",
            Self::Commission => "commission",
            Self::Payoff => "payoff",
            Self::Concession => "concession",
            Self::OtherCost => "other_cost",
            Self::TitleFee => "title_fee",
            Self::TitleFeeTotal => "title_fee_total",
            Self::Tax => "tax",
            Self::Net => "net",
        }
    }
}

/// One line of the canonical breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownLine {
    pub section: LineSection,
    pub label: String,
    pub amount: Decimal,
}

impl BreakdownLine {
    fn new(
        section: LineSection,
        label: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            section,
            label: label.into(),
            amount,
        }
    }
}

/// Fully itemized seller net sheet.
///
/// Every amount except inside `tax` is rounded to cents. `net` is computed
/// from unrounded figures and rounded once; it is negative when the seller
/// has to bring money to closing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetSheetResult {
    pub sale_price: Decimal,
    pub commissions: Vec<LineItem>,
    pub mortgage_payoff: Decimal,
    pub seller_concessions: Decimal,
    pub other_costs: Vec<LineItem>,
    /// Present when the premium came from the tier table.
    pub premium_quote: Option<PremiumQuote>,
    /// Name of the fee schedule that was applied.
    pub schedule: String,
    pub title_fees: TitleFees,
    pub tax: TaxBreakdown,
    pub net: Decimal,
}

impl NetSheetResult {
    /// `true` when the seller owes money at closing.
    pub fn seller_owes(&self) -> bool {
        self.net < Decimal::ZERO
    }

    /// Every line in canonical presentation order.
    ///
    /// Renderers and exporters must reproduce this order verbatim.
    pub fn lines(&self) -> Vec<BreakdownLine> {
        let mut lines = vec![BreakdownLine::new(
            LineSection::SalePrice,
            "Sale Price",
            self.sale_price,
        )];

        lines.extend(
            self.commissions
                .iter()
                .map(|c| BreakdownLine::new(LineSection::Commission, c.label.as_str(), c.amount)),
        );
        lines.push(BreakdownLine::new(
            LineSection::Payoff,
            "Mortgage Payoff",
            self.mortgage_payoff,
        ));
        lines.push(BreakdownLine::new(
            LineSection::Concession,
            "Seller Concessions",
            self.seller_concessions,
        ));
        lines.extend(
            self.other_costs
                .iter()
                .map(|c| BreakdownLine::new(LineSection::OtherCost, c.label.as_str(), c.amount)),
        );
        lines.extend(
            self.title_fees
                .items
                .iter()
                .map(|i| BreakdownLine::new(LineSection::TitleFee, i.label.as_str(), i.amount)),
        );
        lines.push(BreakdownLine::new(
            LineSection::TitleFeeTotal,
            "Total Title Fees",
            self.title_fees.total,
        ));
        lines.push(BreakdownLine::new(
            LineSection::Tax,
            "Property Tax Proration",
            round_cents(self.tax.total_debit),
        ));
        lines.push(BreakdownLine::new(
            LineSection::Net,
            "Estimated Net Proceeds",
            self.net,
        ));

        lines
    }
}
