//! Fee schedule resolution.
//!
//! A [`FeeScheduleBook`] holds the standard schedule, any number of override
//! schedules that apply to a named set of jurisdictions, and the primary
//! jurisdiction whose deed recording fee uses its own tier.
//!
//! Resolution is total: any key that is not in an override set, including
//! an empty or misspelled one, resolves to the standard schedule.
//!
//! # Example
//!
//! ```
//! use net_core::{FeeScheduleBook, RecordingTier};
//!
//! let book = FeeScheduleBook::indiana();
//!
//! assert_eq!(book.resolve(" lake ").name, "Northwest");
//! assert_eq!(book.resolve("Hamilton").name, "Standard");
//! assert_eq!(book.recording_tier("MARION"), RecordingTier::Primary);
//! ```

use std::collections::HashSet;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::models::{FeeSchedule, RecordingTier, ScheduleOverride, SettlementSplit, TransactionType};
use crate::rates::indiana;

/// Errors raised when fee schedule configuration is inconsistent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeeScheduleError {
    /// A fee constant is negative.
    #[error("schedule '{schedule}' has negative {field}: {value}")]
    NegativeFee {
        schedule: String,
        field: &'static str,
        value: Decimal,
    },

    /// Two override schedules claim the same jurisdiction.
    #[error("jurisdiction '{0}' is assigned to more than one schedule")]
    DuplicateJurisdiction(String),

    /// An override schedule applies to no jurisdiction.
    #[error("override schedule '{0}' lists no jurisdictions")]
    EmptyOverride(String),
}

impl FeeSchedule {
    /// Checks that every fee constant is non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`FeeScheduleError::NegativeFee`] naming the first offending
    /// field.
    pub fn validate(&self) -> Result<(), FeeScheduleError> {
        let fields = [
            ("settlement_fee_loan", self.settlement_fee_loan),
            ("settlement_fee_cash", self.settlement_fee_cash),
            ("title_processing_fee", self.title_processing_fee),
            ("closing_processing_fee", self.closing_processing_fee),
            ("cpl_fee", self.cpl_fee),
            ("tieff_fee", self.tieff_fee),
            ("deed_recording_primary", self.deed_recording_primary),
            ("deed_recording_other", self.deed_recording_other),
            ("e_filing_fee", self.e_filing_fee),
            ("transfer_fee", self.transfer_fee),
        ];

        match fields.iter().find(|(_, value)| *value < Decimal::ZERO) {
            Some((field, value)) => Err(FeeScheduleError::NegativeFee {
                schedule: self.name.clone(),
                field: *field,
                value: *value,
            }),
            None => Ok(()),
        }
    }

    /// Seller's settlement fee for `transaction_type`, after applying the
    /// schedule's [`SettlementSplit`].
    pub fn settlement_fee(
        &self,
        transaction_type: TransactionType,
    ) -> Decimal {
        let listed = match transaction_type {
            TransactionType::Loan => self.settlement_fee_loan,
            TransactionType::Cash => self.settlement_fee_cash,
        };

        match self.settlement_split {
            SettlementSplit::Full => listed,
            SettlementSplit::Halved => {
                debug!(schedule = %self.name, %listed, "halving settlement fee");
                listed / Decimal::TWO
            }
        }
    }

    pub fn deed_recording_fee(
        &self,
        tier: RecordingTier,
    ) -> Decimal {
        match tier {
            RecordingTier::Primary => self.deed_recording_primary,
            RecordingTier::Other => self.deed_recording_other,
        }
    }
}

fn same_key(
    a: &str,
    b: &str,
) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// The full set of fee schedules in effect, keyed by jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeScheduleBook {
    standard: FeeSchedule,
    overrides: Vec<ScheduleOverride>,
    primary_jurisdiction: String,
}

impl FeeScheduleBook {
    /// Builds a schedule book after validating every schedule.
    ///
    /// # Errors
    ///
    /// Returns [`FeeScheduleError`] if any schedule has a negative fee, an
    /// override lists no jurisdictions, or a jurisdiction appears in more
    /// than one override.
    pub fn new(
        standard: FeeSchedule,
        overrides: Vec<ScheduleOverride>,
        primary_jurisdiction: impl Into<String>,
    ) -> Result<Self, FeeScheduleError> {
        standard.validate()?;

        let mut seen = HashSet::new();
        for entry in &overrides {
            entry.schedule.validate()?;
            if entry.jurisdictions.is_empty() {
                return Err(FeeScheduleError::EmptyOverride(entry.schedule.name.clone()));
            }
            for jurisdiction in &entry.jurisdictions {
                if !seen.insert(jurisdiction.trim().to_ascii_lowercase()) {
                    return Err(FeeScheduleError::DuplicateJurisdiction(
                        jurisdiction.trim().to_string(),
                    ));
                }
            }
        }

        Ok(Self {
            standard,
            overrides,
            primary_jurisdiction: primary_jurisdiction.into(),
        })
    }

    /// The built-in Indiana schedules.
    pub fn indiana() -> Self {
        Self {
            standard: indiana::standard_schedule(),
            overrides: indiana::schedule_overrides(),
            primary_jurisdiction: indiana::PRIMARY_JURISDICTION.to_string(),
        }
    }

    pub fn standard(&self) -> &FeeSchedule {
        &self.standard
    }

    pub fn overrides(&self) -> &[ScheduleOverride] {
        &self.overrides
    }

    pub fn primary_jurisdiction(&self) -> &str {
        &self.primary_jurisdiction
    }

    /// Selects the schedule for `jurisdiction`.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Anything outside the override sets gets the standard schedule.
    pub fn resolve(
        &self,
        jurisdiction: &str,
    ) -> &FeeSchedule {
        self.overrides
            .iter()
            .find(|entry| entry.jurisdictions.iter().any(|j| same_key(j, jurisdiction)))
            .map(|entry| &entry.schedule)
            .unwrap_or_else(|| {
                debug!(jurisdiction, "no override schedule, using standard");
                &self.standard
            })
    }

    /// Deed recording tier for `jurisdiction`.
    pub fn recording_tier(
        &self,
        jurisdiction: &str,
    ) -> RecordingTier {
        if same_key(&self.primary_jurisdiction, jurisdiction) {
            RecordingTier::Primary
        } else {
            RecordingTier::Other
        }
    }
}

impl Default for FeeScheduleBook {
    fn default() -> Self {
        Self::indiana()
    }
}
