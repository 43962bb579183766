//! CSV export of a calculated net sheet.
//!
//! Rows follow [`NetSheetResult::lines`] exactly, then the tax proration
//! detail under the `tax_detail` section:
//!
//! ```csv
//! section,label,amount
//! sale_price,Sale Price,300000.00
//! commission,Listing Broker,9000.00
//! ...
//! net,Estimated Net Proceeds,139354.00
//! tax_detail,Proration Cutoff,2025-06-14
//! ```

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use net_core::calculations::common::round_cents;
use net_core::{NetSheetResult, TaxBreakdown};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

pub const TAX_DETAIL_SECTION: &str = "tax_detail";

/// Errors that can occur while writing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    section: &'a str,
    label: &'a str,
    amount: String,
}

/// Proration detail as `(label, value)` pairs in display order.
///
/// Money is rounded to cents here; the daily rate keeps four places so a
/// reader can reproduce the accrual.
pub fn tax_detail(tax: &TaxBreakdown) -> Vec<(&'static str, String)> {
    vec![
        ("Tax Year", tax.year.to_string()),
        ("Proration Cutoff", tax.cutoff.format("%Y-%m-%d").to_string()),
        ("Days In Year", tax.days_in_year.to_string()),
        ("Daily Rate", format!("{:.4}", tax.daily_rate.round_dp(4))),
        ("Days Accrued", tax.days_accrued.to_string()),
        ("Accrued This Year", cents(tax.accrued_this_year)),
        ("Installments Paid", cents(tax.paid_total)),
        ("Unpaid Prior Year", cents(tax.unpaid_prior_year)),
        ("Total Tax Debit", cents(tax.total_debit)),
    ]
}

fn cents(amount: Decimal) -> String {
    format!("{:.2}", round_cents(amount))
}

/// Writes the breakdown as CSV to any writer.
pub fn write_csv<W: Write>(
    result: &NetSheetResult,
    writer: W,
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for line in result.lines() {
        csv_writer.serialize(ExportRow {
            section: line.section.as_str(),
            label: &line.label,
            amount: cents(line.amount),
        })?;
    }

    for (label, value) in tax_detail(&result.tax) {
        csv_writer.serialize(ExportRow {
            section: TAX_DETAIL_SECTION,
            label,
            amount: value,
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes the breakdown to it.
pub fn export_to_file(
    result: &NetSheetResult,
    path: &Path,
) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv(result, file)
}
