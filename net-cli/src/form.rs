//! Input snapshot loader.
//!
//! A closing is described by a TOML file holding the form fields exactly as a
//! user would type them. Money fields are free text (`"$325,000"`,
//! `"1,825.00"`, `""`) and pass through the normalizers, so a sloppy field
//! degrades to zero instead of rejecting the whole file. Only structural
//! problems (malformed TOML, an unknown enum value) are errors.
//!
//! ```toml
//! sale_price = "$325,000"
//! mortgage_payoff = "180,000"
//! closing_date = "06/15/2025"
//!
//! [[commissions]]
//! label = "Listing Broker"
//! basis = "percent"
//! value = "3"
//!
//! [title]
//! jurisdiction = "Hamilton"
//! premium_mode = "auto"
//! premium_choice = "mid"
//!
//! [tax]
//! prior_year_tax = "3,650"
//! first_installment_paid = true
//! first_installment = "1,825"
//! ```

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use net_core::normalize::{normalize_date, normalize_money, normalize_percent};
use net_core::{
    AdHocCost, Commission, CommissionBasis, DayCount, FeeToggles, Installment, NetSheetInput,
    PremiumChoice, PremiumSource, ProrationCutoff, TaxSettings, TitleFeeInput, TransactionType,
};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading an input snapshot.
#[derive(Debug, Error)]
pub enum FormLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid input file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// How a commission line is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommissionKind {
    /// `value` is a percentage of the sale price in percent units.
    #[default]
    Percent,
    /// `value` is a dollar amount.
    Flat,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct CommissionField {
    pub label: String,
    pub basis: CommissionKind,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct CostField {
    pub label: String,
    pub amount: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PremiumMode {
    /// Look the premium up from the sale price.
    #[default]
    Auto,
    /// Use `manual_premium` as entered.
    Manual,
}

/// Title section of the form. Every fee toggle defaults to on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TitleFields {
    pub transaction_type: TransactionType,
    pub jurisdiction: String,
    pub e_filing: bool,
    pub premium_mode: PremiumMode,
    pub premium_choice: PremiumChoice,
    pub manual_premium: String,
    pub settlement_fee: bool,
    pub cpl: bool,
    pub tieff: bool,
    pub deed_recording: bool,
    pub transfer_fee: bool,
}

impl Default for TitleFields {
    fn default() -> Self {
        let toggles = FeeToggles::default();
        Self {
            transaction_type: TransactionType::default(),
            jurisdiction: String::new(),
            e_filing: true,
            premium_mode: PremiumMode::default(),
            premium_choice: PremiumChoice::default(),
            manual_premium: String::new(),
            settlement_fee: toggles.settlement_fee,
            cpl: toggles.cpl,
            tieff: toggles.tieff,
            deed_recording: toggles.deed_recording,
            transfer_fee: toggles.transfer_fee,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct TaxFields {
    pub prior_year_tax: String,
    pub first_installment_paid: bool,
    pub first_installment: String,
    pub second_installment_paid: bool,
    pub second_installment: String,
    pub cutoff: ProrationCutoff,
    pub force_365: bool,
}

/// The complete set of form fields for one closing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct NetSheetForm {
    pub sale_price: String,
    pub commissions: Vec<CommissionField>,
    pub mortgage_payoff: String,
    pub seller_concessions: String,
    pub other_costs: Vec<CostField>,
    pub closing_date: String,
    pub title: TitleFields,
    pub tax: TaxFields,
}

impl NetSheetForm {
    /// Normalizes every field into an engine input snapshot.
    ///
    /// `today` stands in for an empty or invalid closing date.
    pub fn to_input(
        &self,
        today: NaiveDate,
    ) -> NetSheetInput {
        NetSheetInput {
            sale_price: normalize_money(&self.sale_price),
            commissions: self.commissions.iter().map(to_commission).collect(),
            mortgage_payoff: normalize_money(&self.mortgage_payoff),
            seller_concessions: normalize_money(&self.seller_concessions),
            other_costs: self
                .other_costs
                .iter()
                .map(|cost| AdHocCost::new(cost.label.trim(), normalize_money(&cost.amount)))
                .collect(),
            closing_date: normalize_date(&self.closing_date, today),
            title: self.title.to_input(),
            tax: self.tax.to_settings(),
        }
    }
}

fn to_commission(field: &CommissionField) -> Commission {
    let basis = match field.basis {
        CommissionKind::Percent => CommissionBasis::Percent(normalize_percent(&field.value)),
        CommissionKind::Flat => CommissionBasis::Flat(normalize_money(&field.value)),
    };

    Commission {
        label: field.label.trim().to_string(),
        basis,
    }
}

impl TitleFields {
    fn to_input(&self) -> TitleFeeInput {
        let premium = match self.premium_mode {
            PremiumMode::Auto => PremiumSource::Auto(self.premium_choice),
            PremiumMode::Manual => PremiumSource::Manual(normalize_money(&self.manual_premium)),
        };

        TitleFeeInput {
            transaction_type: self.transaction_type,
            jurisdiction: self.jurisdiction.trim().to_string(),
            e_filing: self.e_filing,
            premium,
            toggles: FeeToggles {
                settlement_fee: self.settlement_fee,
                cpl: self.cpl,
                tieff: self.tieff,
                deed_recording: self.deed_recording,
                transfer_fee: self.transfer_fee,
            },
        }
    }
}

impl TaxFields {
    fn to_settings(&self) -> TaxSettings {
        TaxSettings {
            prior_year_tax: normalize_money(&self.prior_year_tax),
            installments: [
                Installment {
                    paid: self.first_installment_paid,
                    amount: normalize_money(&self.first_installment),
                },
                Installment {
                    paid: self.second_installment_paid,
                    amount: normalize_money(&self.second_installment),
                },
            ],
            cutoff: self.cutoff,
            day_count: if self.force_365 {
                DayCount::Force365
            } else {
                DayCount::Calendar
            },
        }
    }
}

/// Parse a form from TOML text.
///
/// # Errors
///
/// [`FormLoadError::Parse`] if the text is not valid TOML or a field has the
/// wrong type.
pub fn load_from_str(input: &str) -> Result<NetSheetForm, FormLoadError> {
    Ok(toml::from_str(input)?)
}

/// Convenience wrapper: read a file from disk and delegate to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<NetSheetForm, FormLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| FormLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&contents)
}
