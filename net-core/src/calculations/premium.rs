//! Owner's policy premium lookup.
//!
//! The premium for a liability amount comes from a tier table: an ordered,
//! contiguous set of liability ranges, each quoting a `[band_low, band_high]`
//! premium band. Above the table's ceiling, an [`OverflowRule`] takes over.
//!
//! # Overflow
//!
//! The overflow formula is a step function. Every started unit past the
//! ceiling adds one full increment, even one cent into a new unit:
//!
//! ```text
//! chosen = base_premium + per_unit_rate × ceil((amount − ceiling) / unit_size)
//! ```
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use net_core::{PremiumChoice, PremiumTable, QuoteMode};
//!
//! let table = PremiumTable::indiana();
//!
//! let quote = table.lookup(dec!(50000), PremiumChoice::Mid);
//! assert_eq!(quote.chosen, dec!(214.50));
//! assert_eq!(quote.mode, QuoteMode::Tiered);
//!
//! let quote = table.lookup(dec!(1010001), PremiumChoice::Mid);
//! assert_eq!(quote.chosen, dec!(2772));
//! assert_eq!(quote.mode, QuoteMode::Overflow);
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::{non_negative, round_cents};
use crate::models::{OverflowRule, PremiumChoice, PremiumQuote, PremiumTierRow, QuoteMode};
use crate::normalize::MONEY_CEILING;
use crate::rates::indiana;

/// Gap between one row's `high` and the next row's `low`, and the smallest
/// overflow unit.
const CENT: Decimal = dec!(0.01);

/// Errors raised when a tier table violates its invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PremiumTableError {
    /// The table has no rows.
    #[error("premium table has no rows")]
    Empty,

    /// The first row does not start at zero.
    #[error("premium table must start at 0, first row starts at {0}")]
    DoesNotStartAtZero(Decimal),

    /// A row contains a negative bound or band edge.
    #[error("row {row} contains a negative value")]
    NegativeValue { row: usize },

    /// A row's `low` is above its `high`.
    #[error("row {row} has low {low} above high {high}")]
    InvertedRange {
        row: usize,
        low: Decimal,
        high: Decimal,
    },

    /// A row's `band_low` is above its `band_high`.
    #[error("row {row} has band low {band_low} above band high {band_high}")]
    InvertedBand {
        row: usize,
        band_low: Decimal,
        band_high: Decimal,
    },

    /// A row does not begin one cent after the previous row ends.
    #[error("row {row} starts at {found}, expected {expected}")]
    NotContiguous {
        row: usize,
        expected: Decimal,
        found: Decimal,
    },

    /// The overflow unit size must be at least one cent.
    #[error("overflow unit size must be at least 0.01, got {0}")]
    InvalidUnitSize(Decimal),

    /// The overflow base premium and rate must be non-negative.
    #[error("overflow premium and rate must be non-negative")]
    NegativeOverflow,

    /// The overflow base premium or rate exceeds the money ceiling.
    #[error("overflow premium and rate must not exceed {}", MONEY_CEILING)]
    OverflowTooLarge,
}

impl OverflowRule {
    /// Checks that the unit size is at least one cent and the premium terms
    /// lie between zero and [`MONEY_CEILING`].
    ///
    /// # Errors
    ///
    /// Returns [`PremiumTableError::InvalidUnitSize`],
    /// [`PremiumTableError::NegativeOverflow`] or
    /// [`PremiumTableError::OverflowTooLarge`].
    pub fn validate(&self) -> Result<(), PremiumTableError> {
        if self.unit_size < CENT {
            return Err(PremiumTableError::InvalidUnitSize(self.unit_size));
        }
        if self.base_premium < Decimal::ZERO || self.per_unit_rate < Decimal::ZERO {
            return Err(PremiumTableError::NegativeOverflow);
        }
        if self.base_premium > MONEY_CEILING || self.per_unit_rate > MONEY_CEILING {
            return Err(PremiumTableError::OverflowTooLarge);
        }
        Ok(())
    }
}

/// An immutable premium tier table plus its overflow rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PremiumTable {
    rows: Vec<PremiumTierRow>,
    overflow: OverflowRule,
}

impl PremiumTable {
    /// Builds a table after checking every row invariant.
    ///
    /// # Errors
    ///
    /// Returns [`PremiumTableError`] if the rows are empty, do not start at
    /// zero, are not ascending and contiguous at cent granularity, contain a
    /// negative value or an inverted band, or if the overflow rule is invalid.
    pub fn new(
        rows: Vec<PremiumTierRow>,
        overflow: OverflowRule,
    ) -> Result<Self, PremiumTableError> {
        let table = Self { rows, overflow };
        table.validate()?;
        Ok(table)
    }

    /// The built-in Indiana owner's policy table.
    pub fn indiana() -> Self {
        Self {
            rows: indiana::PREMIUM_TIERS.to_vec(),
            overflow: indiana::OVERFLOW,
        }
    }

    /// Checks the table invariants.
    ///
    /// # Errors
    ///
    /// See [`PremiumTable::new`].
    pub fn validate(&self) -> Result<(), PremiumTableError> {
        let first = self.rows.first().ok_or(PremiumTableError::Empty)?;
        if first.low != Decimal::ZERO {
            return Err(PremiumTableError::DoesNotStartAtZero(first.low));
        }

        for (row, tier) in self.rows.iter().enumerate() {
            if [tier.low, tier.high, tier.band_low, tier.band_high]
                .iter()
                .any(|v| *v < Decimal::ZERO)
            {
                return Err(PremiumTableError::NegativeValue { row });
            }
            if tier.low > tier.high {
                return Err(PremiumTableError::InvertedRange {
                    row,
                    low: tier.low,
                    high: tier.high,
                });
            }
            if tier.band_low > tier.band_high {
                return Err(PremiumTableError::InvertedBand {
                    row,
                    band_low: tier.band_low,
                    band_high: tier.band_high,
                });
            }
        }

        for (row, pair) in self.rows.windows(2).enumerate() {
            let expected = pair[0].high + CENT;
            if pair[1].low != expected {
                return Err(PremiumTableError::NotContiguous {
                    row: row + 1,
                    expected,
                    found: pair[1].low,
                });
            }
        }

        self.overflow.validate()
    }

    pub fn rows(&self) -> &[PremiumTierRow] {
        &self.rows
    }

    pub fn overflow(&self) -> &OverflowRule {
        &self.overflow
    }

    /// Highest liability amount covered by a tier row.
    pub fn ceiling(&self) -> Decimal {
        self.rows.last().map_or(Decimal::ZERO, |row| row.high)
    }

    /// Quotes the premium for `liability`.
    ///
    /// Negative liability is treated as zero. Amounts above
    /// [`ceiling`](Self::ceiling) use the overflow rule and report
    /// `min == max == chosen`.
    pub fn lookup(
        &self,
        liability: Decimal,
        choice: PremiumChoice,
    ) -> PremiumQuote {
        let amount = non_negative(liability);
        let ceiling = self.ceiling();

        if amount > ceiling {
            let chosen = self.overflow_premium(amount, ceiling);
            debug!(%amount, %ceiling, %chosen, "premium in overflow mode");
            return PremiumQuote {
                min: chosen,
                max: chosen,
                chosen,
                mode: QuoteMode::Overflow,
            };
        }

        match self.find_row(amount) {
            Some(row) => PremiumQuote {
                min: row.band_low,
                max: row.band_high,
                chosen: Self::choose(row, choice),
                mode: QuoteMode::Tiered,
            },
            // Empty tables cannot be constructed.
            None => PremiumQuote {
                min: Decimal::ZERO,
                max: Decimal::ZERO,
                chosen: Decimal::ZERO,
                mode: QuoteMode::Tiered,
            },
        }
    }

    /// Finds the row covering `amount`.
    ///
    /// Rows are contiguous at cent granularity, so the first row whose `high`
    /// is at or above the amount is the one containing it. Sub-cent amounts
    /// that fall between two rows belong to the upper row. Amounts below the
    /// table's floor fall back to the first row.
    fn find_row(
        &self,
        amount: Decimal,
    ) -> Option<&PremiumTierRow> {
        match self.rows.first() {
            Some(first) if amount < first.low => Some(first),
            _ => self.rows.iter().find(|row| amount <= row.high),
        }
    }

    fn choose(
        row: &PremiumTierRow,
        choice: PremiumChoice,
    ) -> Decimal {
        match choice {
            PremiumChoice::Low => round_cents(row.band_low),
            PremiumChoice::Mid => round_cents((row.band_low + row.band_high) / Decimal::TWO),
            PremiumChoice::High => round_cents(row.band_high),
        }
    }

    /// Saturates at `Decimal::MAX` when the liability is far beyond any
    /// normalized amount.
    fn overflow_premium(
        &self,
        amount: Decimal,
        ceiling: Decimal,
    ) -> Decimal {
        let rule = &self.overflow;
        (amount - ceiling)
            .checked_div(rule.unit_size)
            .map(|units| units.ceil())
            .and_then(|units| rule.per_unit_rate.checked_mul(units))
            .and_then(|extra| extra.checked_add(rule.base_premium))
            .map_or(Decimal::MAX, round_cents)
    }
}

impl Default for PremiumTable {
    fn default() -> Self {
        Self::indiana()
    }
}
