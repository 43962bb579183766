//! Arrears property tax proration.
//!
//! Property tax is billed the year after it accrues. At closing, the seller
//! owes whatever part of last year's bill is still unpaid, plus this year's
//! tax accrued from January 1 through the proration cutoff.
//!
//! | Step | Value |
//! |------|-------|
//! | 1 | `cutoff` = closing date, or the day before under [`ProrationCutoff::DayBeforeClosing`] |
//! | 2 | `days_in_year` = 365, or 366 in a leap year unless [`DayCount::Force365`] |
//! | 3 | `daily_rate` = prior-year tax ÷ `days_in_year` |
//! | 4 | `days_accrued` = Jan 1 through `cutoff`, both ends inclusive; 0 if the cutoff is last year |
//! | 5 | `accrued_this_year` = `daily_rate` × `days_accrued` |
//! | 6 | `paid_total` = amounts of installments flagged paid |
//! | 7 | `unpaid_prior_year` = max(prior-year tax − `paid_total`, 0) |
//! | 8 | `total_debit` = `unpaid_prior_year` + `accrued_this_year` |
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use net_core::calculations::prorate;
//! use net_core::{DayCount, ProrationCutoff, TaxSettings};
//!
//! let settings = TaxSettings {
//!     prior_year_tax: dec!(3650),
//!     day_count: DayCount::Force365,
//!     cutoff: ProrationCutoff::DayBeforeClosing,
//!     ..Default::default()
//! };
//! let closing = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
//!
//! let tax = prorate(closing, &settings);
//!
//! assert_eq!(tax.days_accrued, 9);
//! assert_eq!(tax.daily_rate, dec!(10));
//! assert_eq!(tax.accrued_this_year, dec!(90));
//! ```

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;

use crate::calculations::common::non_negative;
use crate::models::{DayCount, ProrationCutoff, TaxBreakdown, TaxSettings};

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Denominator for the daily rate in `year`.
pub fn days_in_year(
    year: i32,
    day_count: DayCount,
) -> u32 {
    match day_count {
        DayCount::Force365 => 365,
        DayCount::Calendar if is_leap_year(year) => 366,
        DayCount::Calendar => 365,
    }
}

/// Last day charged to the seller.
fn cutoff_date(
    closing_date: NaiveDate,
    policy: ProrationCutoff,
) -> NaiveDate {
    match policy {
        ProrationCutoff::ClosingDate => closing_date,
        ProrationCutoff::DayBeforeClosing => closing_date
            .checked_sub_days(Days::new(1))
            .unwrap_or(closing_date),
    }
}

/// Inclusive day count from January 1 of `year` through `cutoff`.
///
/// A cutoff in an earlier year accrues nothing. Within the year, the ordinal
/// is exactly the inclusive count (January 1 is day 1).
fn days_accrued(
    year: i32,
    cutoff: NaiveDate,
) -> u32 {
    if cutoff.year() < year {
        0
    } else {
        cutoff.ordinal()
    }
}

/// Computes the seller's property tax debit as of `closing_date`.
///
/// Unpaid installments contribute nothing to `paid_total`, whatever amount
/// they carry. Paying more than the prior-year bill never produces a credit:
/// the unpaid balance clamps at zero.
pub fn prorate(
    closing_date: NaiveDate,
    settings: &TaxSettings,
) -> TaxBreakdown {
    let year = closing_date.year();
    let cutoff = cutoff_date(closing_date, settings.cutoff);
    let days_in_year = days_in_year(year, settings.day_count);
    let prior_year_tax = non_negative(settings.prior_year_tax);

    let daily_rate = prior_year_tax / Decimal::from(days_in_year);
    let days_accrued = days_accrued(year, cutoff);
    let accrued_this_year = daily_rate * Decimal::from(days_accrued);

    let paid_total: Decimal = settings
        .installments
        .iter()
        .filter(|installment| installment.paid)
        .map(|installment| non_negative(installment.amount))
        .sum();
    let unpaid_prior_year = non_negative(prior_year_tax - paid_total);

    TaxBreakdown {
        year,
        cutoff,
        days_in_year,
        daily_rate,
        days_accrued,
        accrued_this_year,
        paid_total,
        unpaid_prior_year,
        total_debit: unpaid_prior_year + accrued_this_year,
    }
}
