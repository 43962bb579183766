//! Seller net sheet.
//!
//! Combines every stage into one signed figure:
//!
//! ```text
//! net = sale price
//!     − Σ commissions
//!     − mortgage payoff
//!     − seller concessions
//!     − Σ other costs
//!     − title fees total
//!     − tax total debit
//! ```
//!
//! Every term keeps full precision and the result is rounded once. There is
//! no floor: a negative net means the seller brings money to closing.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use net_core::{
//!     Commission, CommissionBasis, FeeScheduleBook, NetSheet, NetSheetInput, PremiumTable,
//!     TaxSettings, TitleFeeInput,
//! };
//!
//! let premiums = PremiumTable::indiana();
//! let schedules = FeeScheduleBook::indiana();
//! let sheet = NetSheet::new(&premiums, &schedules);
//!
//! let input = NetSheetInput {
//!     sale_price: dec!(300000),
//!     commissions: vec![Commission {
//!         label: "Listing Commission".to_string(),
//!         basis: CommissionBasis::Percent(dec!(3)),
//!     }],
//!     mortgage_payoff: dec!(150000),
//!     seller_concessions: dec!(0),
//!     other_costs: vec![],
//!     closing_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
//!     title: TitleFeeInput {
//!         jurisdiction: "Hamilton".to_string(),
//!         ..Default::default()
//!     },
//!     tax: TaxSettings::default(),
//! };
//!
//! let result = sheet.calculate(&input);
//!
//! // Premium: tier 275,000.01–300,000 quotes 917–965, midpoint 941.
//! // Title fees: 941 + 400 + 150 + 75 + 25 + 5 + 25 + 25 = 1646.
//! assert_eq!(result.title_fees.total, dec!(1646.00));
//! assert_eq!(result.net, dec!(139354.00));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::round_cents;
use crate::calculations::premium::PremiumTable;
use crate::calculations::proration::prorate;
use crate::calculations::schedule::FeeScheduleBook;
use crate::calculations::title_fees;
use crate::models::{
    LineItem, NetSheetInput, NetSheetResult, PremiumQuote, PremiumSource, TitleFeeSettings,
};

/// The full net sheet pipeline over a fixed set of rate tables.
///
/// Holds only shared references to immutable configuration, so one instance
/// can serve any number of calculations, from any thread.
#[derive(Debug, Clone, Copy)]
pub struct NetSheet<'a> {
    premiums: &'a PremiumTable,
    schedules: &'a FeeScheduleBook,
}

impl<'a> NetSheet<'a> {
    pub fn new(
        premiums: &'a PremiumTable,
        schedules: &'a FeeScheduleBook,
    ) -> Self {
        Self {
            premiums,
            schedules,
        }
    }

    /// Runs every stage on `input` and returns the itemized result.
    ///
    /// The same input always yields the same result.
    pub fn calculate(
        &self,
        input: &NetSheetInput,
    ) -> NetSheetResult {
        let (premium, premium_quote) = self.resolve_premium(input);

        let settings = TitleFeeSettings {
            transaction_type: input.title.transaction_type,
            jurisdiction: input.title.jurisdiction.clone(),
            e_filing: input.title.e_filing,
            premium,
            toggles: input.title.toggles,
        };
        let schedule = self.schedules.resolve(&settings.jurisdiction);
        let tier = self.schedules.recording_tier(&settings.jurisdiction);
        let fee_items = title_fees::itemize(&settings, schedule, tier);
        let title_fees_total: Decimal = fee_items.iter().map(|item| item.amount).sum();

        let tax = prorate(input.closing_date, &input.tax);

        let commissions: Vec<LineItem> = input
            .commissions
            .iter()
            .map(|c| LineItem::new(c.label.as_str(), c.amount(input.sale_price)))
            .collect();
        let commissions_total: Decimal = commissions.iter().map(|c| c.amount).sum();
        let other_costs_total: Decimal = input.other_costs.iter().map(|c| c.amount).sum();

        let net = input.sale_price
            - commissions_total
            - input.mortgage_payoff
            - input.seller_concessions
            - other_costs_total
            - title_fees_total
            - tax.total_debit;

        debug!(
            schedule = %schedule.name,
            %net,
            title_fees = %title_fees_total,
            tax = %tax.total_debit,
            "net sheet calculated"
        );

        NetSheetResult {
            sale_price: round_cents(input.sale_price),
            commissions: rounded(&commissions),
            mortgage_payoff: round_cents(input.mortgage_payoff),
            seller_concessions: round_cents(input.seller_concessions),
            other_costs: rounded(&input.other_costs),
            premium_quote,
            schedule: schedule.name.clone(),
            title_fees: title_fees::summarize(&fee_items),
            tax,
            net: round_cents(net),
        }
    }

    /// Premium amount for the title fee settings, plus the tier quote when
    /// it came from the table.
    fn resolve_premium(
        &self,
        input: &NetSheetInput,
    ) -> (Decimal, Option<PremiumQuote>) {
        match input.title.premium {
            PremiumSource::Auto(choice) => {
                let quote = self.premiums.lookup(input.sale_price, choice);
                (quote.chosen, Some(quote))
            }
            PremiumSource::Manual(amount) => (amount, None),
        }
    }
}

fn rounded(items: &[LineItem]) -> Vec<LineItem> {
    items
        .iter()
        .map(|item| LineItem::new(item.label.as_str(), round_cents(item.amount)))
        .collect()
}
