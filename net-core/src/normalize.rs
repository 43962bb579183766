//! Free-text input normalization.
//!
//! Form fields arrive as whatever the user typed: `"$325,000"`,
//! `" 1,234.5 "`, `"3%"`, or nothing at all. Every function here is total.
//! Unusable input degrades to a safe default instead of failing, so the
//! calculation pipeline never has to deal with a parse error.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::warn;

/// Upper bound applied to every normalized amount.
///
/// Keeps every downstream product (commission rates, overflow steps, daily
/// rates) far inside the range a [`Decimal`] can represent.
pub const MONEY_CEILING: Decimal = dec!(1000000000000);

/// Date formats accepted for the closing date, tried in order.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Everything that is not a digit, a decimal point or a minus sign.
static NON_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.\-]").expect("static pattern is valid"));

/// Strips currency symbols, thousands separators, percent signs and
/// whitespace, keeping only characters that can form a number.
fn strip_non_numeric(text: &str) -> String {
    NON_NUMERIC.replace_all(text, "").into_owned()
}

/// Parses free text into a non-negative amount.
///
/// Empty, non-numeric or unparseable input yields `0`. Negative values clamp
/// to `0` and values above [`MONEY_CEILING`] clamp to the ceiling. The value
/// is not rounded; rounding happens at output boundaries only.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use net_core::normalize::normalize_money;
///
/// assert_eq!(normalize_money("$325,000.00"), dec!(325000.00));
/// assert_eq!(normalize_money(" 1,234.5 "), dec!(1234.5));
/// assert_eq!(normalize_money("n/a"), dec!(0));
/// assert_eq!(normalize_money(""), dec!(0));
/// ```
pub fn normalize_money(text: &str) -> Decimal {
    let stripped = strip_non_numeric(text);
    if stripped.is_empty() {
        if !text.trim().is_empty() {
            warn!(input = %text, "no numeric content, using 0");
        }
        return Decimal::ZERO;
    }

    match stripped.parse::<Decimal>() {
        Ok(value) if value < Decimal::ZERO => {
            warn!(input = %text, "negative amount clamped to 0");
            Decimal::ZERO
        }
        Ok(value) if value > MONEY_CEILING => {
            warn!(input = %text, ceiling = %MONEY_CEILING, "amount clamped to ceiling");
            MONEY_CEILING
        }
        Ok(value) => value,
        Err(e) => {
            warn!(input = %text, "invalid amount, using 0: {}", e);
            Decimal::ZERO
        }
    }
}

/// Parses a percentage entered in percent units (`"6"` or `"6%"` is six
/// percent). Same degradation rules as [`normalize_money`].
pub fn normalize_percent(text: &str) -> Decimal {
    normalize_money(text)
}

/// Parses a calendar date, falling back to `today` when the text is not a
/// valid `YYYY-MM-DD` or `MM/DD/YYYY` date.
///
/// `today` is supplied by the caller so the result stays a pure function of
/// its arguments.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use net_core::normalize::normalize_date;
///
/// let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
///
/// assert_eq!(
///     normalize_date("06/15/2025", today),
///     NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
/// );
/// assert_eq!(normalize_date("2025-02-30", today), today);
/// ```
pub fn normalize_date(
    text: &str,
    today: NaiveDate,
) -> NaiveDate {
    let trimmed = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .unwrap_or_else(|| {
            warn!(input = %text, fallback = %today, "invalid closing date, using today");
            today
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(
        year: i32,
        month: u32,
        day: u32,
    ) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    // =========================================================================
    // normalize_money tests
    // =========================================================================

    #[test]
    fn normalize_money_strips_currency_symbol_and_separators() {
        assert_eq!(normalize_money("$1,234,567.89"), dec!(1234567.89));
    }

    #[test]
    fn normalize_money_trims_whitespace() {
        assert_eq!(normalize_money("   450.00  "), dec!(450.00));
    }

    #[test]
    fn normalize_money_empty_is_zero() {
        assert_eq!(normalize_money(""), Decimal::ZERO);
        assert_eq!(normalize_money("    "), Decimal::ZERO);
    }

    #[test]
    fn normalize_money_text_is_zero() {
        assert_eq!(normalize_money("abc"), Decimal::ZERO);
    }

    #[test]
    fn normalize_money_malformed_number_is_zero() {
        assert_eq!(normalize_money("1.2.3"), Decimal::ZERO);
        assert_eq!(normalize_money("--5"), Decimal::ZERO);
    }

    #[test]
    fn normalize_money_negative_clamps_to_zero() {
        assert_eq!(normalize_money("-2,500"), Decimal::ZERO);
    }

    #[test]
    fn normalize_money_keeps_full_precision() {
        assert_eq!(normalize_money("10.005"), dec!(10.005));
    }

    #[test]
    fn normalize_money_clamps_to_ceiling() {
        assert_eq!(normalize_money("99999999999999999"), MONEY_CEILING);
    }

    #[test]
    fn normalize_money_too_many_digits_is_zero() {
        assert_eq!(
            normalize_money("999999999999999999999999999999999999"),
            Decimal::ZERO
        );
    }

    // =========================================================================
    // normalize_percent tests
    // =========================================================================

    #[test]
    fn normalize_percent_accepts_percent_sign() {
        assert_eq!(normalize_percent("2.5%"), dec!(2.5));
    }

    // =========================================================================
    // normalize_date tests
    // =========================================================================

    #[test]
    fn normalize_date_parses_iso_format() {
        let today = date(2025, 1, 1);

        assert_eq!(normalize_date("2025-06-15", today), date(2025, 6, 15));
    }

    #[test]
    fn normalize_date_parses_us_format() {
        let today = date(2025, 1, 1);

        assert_eq!(normalize_date(" 12/31/2024 ", today), date(2024, 12, 31));
    }

    #[test]
    fn normalize_date_invalid_day_falls_back_to_today() {
        let today = date(2025, 4, 2);

        assert_eq!(normalize_date("2025-02-29", today), today);
    }

    #[test]
    fn normalize_date_empty_falls_back_to_today() {
        let today = date(2025, 4, 2);

        assert_eq!(normalize_date("", today), today);
    }
}
