use std::fmt;

use net_core::calculations::common::round_cents;
use net_core::{LineSection, NetSheetResult, QuoteMode};
use rust_decimal::Decimal;

use crate::export::tax_detail;

const LABEL_WIDTH: usize = 40;
const AMOUNT_WIDTH: usize = 16;

/// Plain-text rendering of a net sheet for the terminal.
pub struct Report<'a> {
    result: &'a NetSheetResult,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a NetSheetResult) -> Self {
        Self { result }
    }
}

/// Formats an amount with thousands separators and two decimals.
///
/// `-1234.5` becomes `-$1,234.50`.
pub fn money(amount: Decimal) -> String {
    let amount = round_cents(amount);
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{fraction}")
}

impl fmt::Display for Report<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let result = self.result;
        let rule = "-".repeat(LABEL_WIDTH + AMOUNT_WIDTH);

        writeln!(f, "Seller Net Sheet ({} schedule)", result.schedule)?;
        writeln!(f, "{rule}")?;

        for line in result.lines() {
            let label = match line.section {
                LineSection::TitleFee => format!("  {}", line.label),
                LineSection::Net => {
                    writeln!(f, "{rule}")?;
                    line.label
                }
                _ => line.label,
            };
            writeln!(
                f,
                "{label:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$}",
                money(line.amount)
            )?;
        }

        if result.seller_owes() {
            writeln!(
                f,
                "Seller must bring {} to closing.",
                money(-result.net)
            )?;
        }

        if let Some(quote) = &result.premium_quote {
            writeln!(f)?;
            match quote.mode {
                QuoteMode::Tiered => writeln!(
                    f,
                    "Premium band: {} to {}",
                    money(quote.min),
                    money(quote.max)
                )?,
                QuoteMode::Overflow => writeln!(f, "Premium above the rate table ceiling")?,
            }
        }

        writeln!(f)?;
        writeln!(f, "Property tax detail")?;
        for (label, value) in tax_detail(&result.tax) {
            writeln!(f, "  {label:<22}{value:>18}")?;
        }

        Ok(())
    }
}
