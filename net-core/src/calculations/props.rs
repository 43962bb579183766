//! Property-based tests for the net sheet calculations.
//!
//! - Tier band edges are quoted exactly for every amount inside a row
//! - Overflow premiums form a non-decreasing step function
//! - Marking an installment paid never raises the tax debit
//! - The two cutoff policies differ by exactly one day's accrual
//! - Rounding to cents is idempotent
//! - The pipeline is deterministic

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::common::round_cents;
use super::net_sheet::NetSheet;
use super::premium::PremiumTable;
use super::proration::prorate;
use super::schedule::FeeScheduleBook;
use crate::models::{
    Commission, CommissionBasis, DayCount, FeeToggles, Installment, NetSheetInput, PremiumChoice,
    PremiumSource, ProrationCutoff, TaxSettings, TitleFeeInput, TransactionType,
};
use crate::normalize::normalize_money;
use crate::rates::JURISDICTIONS;

/// Money amounts from 0.00 to 10,000,000.00.
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Amounts strictly above the Indiana table ceiling, up to $5,000,000.
fn overflow_amount() -> impl Strategy<Value = Decimal> {
    (1i64..400_000_000i64).prop_map(|cents| dec!(1000000) + Decimal::new(cents, 2))
}

/// Closing dates between 2000-01-01 and roughly 2049.
fn closing_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..18_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

fn day_count() -> impl Strategy<Value = DayCount> {
    prop_oneof![Just(DayCount::Calendar), Just(DayCount::Force365)]
}

fn installment() -> impl Strategy<Value = Installment> {
    (any::<bool>(), amount()).prop_map(|(paid, amount)| Installment { paid, amount })
}

fn tax_settings() -> impl Strategy<Value = TaxSettings> {
    (amount(), installment(), installment(), day_count()).prop_map(
        |(prior_year_tax, first, second, day_count)| TaxSettings {
            prior_year_tax,
            installments: [first, second],
            cutoff: ProrationCutoff::DayBeforeClosing,
            day_count,
        },
    )
}

fn net_sheet_input() -> impl Strategy<Value = NetSheetInput> {
    (
        amount(),
        amount(),
        0usize..JURISDICTIONS.len(),
        closing_date(),
        tax_settings(),
        any::<[bool; 7]>(),
    )
        .prop_map(|(sale_price, payoff, county, closing_date, tax, flags)| {
            NetSheetInput {
                sale_price,
                commissions: vec![Commission {
                    label: "Listing".to_string(),
                    basis: CommissionBasis::Percent(dec!(3)),
                }],
                mortgage_payoff: payoff,
                seller_concessions: dec!(0),
                other_costs: vec![],
                closing_date,
                title: TitleFeeInput {
                    transaction_type: if flags[0] {
                        TransactionType::Loan
                    } else {
                        TransactionType::Cash
                    },
                    jurisdiction: JURISDICTIONS[county].to_string(),
                    e_filing: flags[1],
                    premium: PremiumSource::Auto(PremiumChoice::Mid),
                    toggles: FeeToggles {
                        settlement_fee: flags[2],
                        cpl: flags[3],
                        tieff: flags[4],
                        deed_recording: flags[5],
                        transfer_fee: flags[6],
                    },
                },
                tax,
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // =========================================================================
    // Premium tier table
    // =========================================================================

    /// Any amount inside a row quotes that row's band edges for low/high.
    #[test]
    fn prop_tier_edges_are_quoted_exactly(
        index in 0usize..41,
        fraction in 0u32..=100,
    ) {
        let table = PremiumTable::indiana();
        let row = table.rows()[index];
        let span = row.high - row.low;
        let amount = round_cents(row.low + span * Decimal::from(fraction) / dec!(100));

        prop_assert_eq!(table.lookup(amount, PremiumChoice::Low).chosen, row.band_low);
        prop_assert_eq!(table.lookup(amount, PremiumChoice::High).chosen, row.band_high);
    }

    /// The mid quote always sits inside the band.
    #[test]
    fn prop_mid_quote_within_band(liability in amount()) {
        let quote = PremiumTable::indiana().lookup(liability, PremiumChoice::Mid);

        prop_assert!(quote.min <= quote.chosen && quote.chosen <= quote.max);
    }

    /// Overflow premiums never decrease as the liability grows.
    #[test]
    fn prop_overflow_is_non_decreasing(a in overflow_amount(), b in overflow_amount()) {
        let table = PremiumTable::indiana();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

        let lo_quote = table.lookup(lo, PremiumChoice::Mid).chosen;
        let hi_quote = table.lookup(hi, PremiumChoice::Mid).chosen;

        prop_assert!(lo_quote <= hi_quote);
    }

    /// Every amount within one started unit quotes the same premium, and the
    /// next cent starts a new increment.
    #[test]
    fn prop_overflow_steps_by_whole_units(
        units in 0i64..200,
        cents_into_unit in 1i64..=1_000_000,
    ) {
        let table = PremiumTable::indiana();
        let rule = *table.overflow();
        let unit_start = table.ceiling() + rule.unit_size * Decimal::from(units);

        let inside = table.lookup(unit_start + Decimal::new(cents_into_unit, 2), PremiumChoice::Mid);
        let unit_end = table.lookup(unit_start + rule.unit_size, PremiumChoice::Mid);
        let next = table.lookup(unit_start + rule.unit_size + dec!(0.01), PremiumChoice::Mid);

        prop_assert_eq!(inside.chosen, unit_end.chosen);
        prop_assert_eq!(next.chosen - unit_end.chosen, rule.per_unit_rate);
        prop_assert_eq!(
            unit_end.chosen,
            rule.base_premium + rule.per_unit_rate * Decimal::from(units + 1)
        );
    }

    // =========================================================================
    // Tax proration
    // =========================================================================

    /// Flipping an installment to paid never increases the debit.
    #[test]
    fn prop_paying_never_increases_debit(
        date in closing_date(),
        settings in tax_settings(),
        which in 0usize..2,
    ) {
        let mut unpaid = settings;
        unpaid.installments[which].paid = false;
        let mut paid = settings;
        paid.installments[which].paid = true;

        let before = prorate(date, &unpaid).total_debit;
        let after = prorate(date, &paid).total_debit;

        prop_assert!(after <= before);
    }

    /// Closing-date-inclusive accrues exactly one more day than day-before.
    #[test]
    fn prop_cutoff_policies_differ_by_one_day(
        date in closing_date(),
        settings in tax_settings(),
    ) {
        let mut before = settings;
        before.cutoff = ProrationCutoff::DayBeforeClosing;
        let mut inclusive = settings;
        inclusive.cutoff = ProrationCutoff::ClosingDate;

        let before = prorate(date, &before);
        let inclusive = prorate(date, &inclusive);

        prop_assert_eq!(inclusive.days_accrued, before.days_accrued + 1);
        let difference = inclusive.accrued_this_year - before.accrued_this_year;
        prop_assert!((difference - before.daily_rate).abs() < dec!(0.000001));
    }

    /// The debit is the sum of its parts and never negative.
    #[test]
    fn prop_debit_is_non_negative_sum(
        date in closing_date(),
        settings in tax_settings(),
    ) {
        let tax = prorate(date, &settings);

        prop_assert!(tax.unpaid_prior_year >= Decimal::ZERO);
        prop_assert!(tax.accrued_this_year >= Decimal::ZERO);
        prop_assert_eq!(tax.total_debit, tax.unpaid_prior_year + tax.accrued_this_year);
    }

    // =========================================================================
    // Rounding and normalization
    // =========================================================================

    /// Rounding a value already rounded to cents changes nothing.
    #[test]
    fn prop_round_cents_is_idempotent(mantissa in any::<i64>(), scale in 0u32..10) {
        let value = Decimal::new(mantissa, scale);
        let once = round_cents(value);

        prop_assert_eq!(round_cents(once), once);
    }

    /// Normalization never fails and never yields a negative amount.
    #[test]
    fn prop_normalize_money_is_total(text in ".{0,40}") {
        prop_assert!(normalize_money(&text) >= Decimal::ZERO);
    }

    // =========================================================================
    // Pipeline
    // =========================================================================

    /// The same snapshot always produces the same result.
    #[test]
    fn prop_pipeline_is_deterministic(input in net_sheet_input()) {
        let premiums = PremiumTable::indiana();
        let schedules = FeeScheduleBook::indiana();
        let sheet = NetSheet::new(&premiums, &schedules);

        prop_assert_eq!(sheet.calculate(&input), sheet.calculate(&input));
    }

    /// Title fees total matches the sum of the rounded lines when every
    /// line is already in whole cents.
    #[test]
    fn prop_title_total_matches_lines(input in net_sheet_input()) {
        let premiums = PremiumTable::indiana();
        let schedules = FeeScheduleBook::indiana();

        let result = NetSheet::new(&premiums, &schedules).calculate(&input);
        let sum: Decimal = result.title_fees.items.iter().map(|i| i.amount).sum();

        prop_assert_eq!(result.title_fees.total, sum);
    }
}
