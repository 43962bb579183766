//! End-to-end tests against the on-disk closing fixture.
//!
//! The unit tests inside the crate use inline TOML; these run the full
//! read-from-disk path, the file-based rate loaders, and the binary itself.

use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::NaiveDate;
use net_cli::{app, export, form};
use net_core::{LineSection, PremiumChoice, QuoteMode};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("sample_closing.toml")
}

fn rate_file(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("net-data")
        .join("test-data")
        .join(name)
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

fn sample_result() -> net_core::NetSheetResult {
    let form = form::load_from_file(&fixture_path()).expect("fixture should load");
    app::run(&form, &app::Rates::default(), today())
}

// =============================================================================
// pipeline
// =============================================================================

#[test]
fn test_sample_net_proceeds() {
    let result = sample_result();

    // 325,000 − 17,875 − 182,450.17 − 3,000 − 550 − 1,721.25 − 3,475
    assert_eq!(result.net, dec!(115928.58));
    assert!(!result.seller_owes());
}

#[test]
fn test_sample_premium_is_mid_band() {
    let result = sample_result();
    let quote = result.premium_quote.expect("auto premium has a quote");

    assert_eq!(quote.min, dec!(986));
    assert_eq!(quote.max, dec!(1038));
    assert_eq!(quote.chosen, dec!(1012.00));
    assert_eq!(quote.mode, QuoteMode::Tiered);
}

#[test]
fn test_sample_title_fees() {
    let result = sample_result();

    assert_eq!(result.schedule, "Standard");
    assert_eq!(result.title_fees.items.len(), 9);
    assert_eq!(result.title_fees.total, dec!(1721.25));
}

#[test]
fn test_sample_tax_proration() {
    let tax = sample_result().tax;

    assert_eq!(tax.cutoff, NaiveDate::from_ymd_opt(2025, 6, 14).unwrap());
    assert_eq!(tax.days_in_year, 365);
    assert_eq!(tax.days_accrued, 165);
    assert_eq!(tax.accrued_this_year, dec!(1650));
    assert_eq!(tax.unpaid_prior_year, dec!(1825));
    assert_eq!(tax.total_debit, dec!(3475));
}

#[test]
fn test_sample_unparseable_cost_is_zero_line() {
    let result = sample_result();

    assert_eq!(result.other_costs[1].label, "HOA Transfer");
    assert_eq!(result.other_costs[1].amount, dec!(0));
}

#[test]
fn test_sample_lines_in_canonical_order() {
    let sections: Vec<LineSection> = sample_result().lines().iter().map(|l| l.section).collect();

    let mut expected = vec![
        LineSection::SalePrice,
        LineSection::Commission,
        LineSection::Commission,
        LineSection::Payoff,
        LineSection::Concession,
        LineSection::OtherCost,
        LineSection::OtherCost,
    ];
    expected.extend([LineSection::TitleFee; 9]);
    expected.extend([LineSection::TitleFeeTotal, LineSection::Tax, LineSection::Net]);
    assert_eq!(sections, expected);
}

// =============================================================================
// rate files
// =============================================================================

#[test]
fn test_rate_files_reproduce_built_in_result() {
    let tiers = rate_file("indiana_tiers.csv");
    let card = rate_file("rate_card.toml");
    let rates = app::load_rates(Some(&tiers), Some(&card)).expect("rate files should load");
    let form = form::load_from_file(&fixture_path()).unwrap();

    assert_eq!(app::run(&form, &rates, today()), sample_result());
}

#[test]
fn test_rate_card_switches_schedule_by_jurisdiction() {
    let card = rate_file("rate_card.toml");
    let rates = app::load_rates(None, Some(&card)).unwrap();
    let mut form = form::load_from_file(&fixture_path()).unwrap();
    form.title.jurisdiction = "LaPorte".to_string();
    form.title.premium_choice = PremiumChoice::Low;

    let result = app::run(&form, &rates, today());

    assert_eq!(result.schedule, "Northwest");
    // 986 + 425 + 175 + 95 + 25 + 5 + 25 + 4.25 + 25
    assert_eq!(result.title_fees.total, dec!(1765.25));
}

// =============================================================================
// export
// =============================================================================

#[test]
fn test_export_round_trips_through_a_file() {
    let result = sample_result();
    let path = std::env::temp_dir().join(format!("netsheet-export-{}.csv", std::process::id()));

    export::export_to_file(&result, &path).expect("export should succeed");
    let mut reader = csv::Reader::from_path(&path).expect("export should be readable");
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    std::fs::remove_file(&path).ok();

    assert_eq!(rows.len(), result.lines().len() + 9);
    assert_eq!(&rows[0][1], "Sale Price");
    assert_eq!(&rows[18][0], "net");
    assert_eq!(&rows[18][2], "115928.58");
}

// =============================================================================
// binary
// =============================================================================

#[test]
fn test_binary_prints_report() {
    let output = Command::new(env!("CARGO_BIN_EXE_netsheet"))
        .arg(fixture_path())
        .args(["--today", "2025-03-01"])
        .output()
        .expect("binary should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Seller Net Sheet (Standard schedule)"));
    assert!(stdout.contains("$115,928.58"));
}

#[test]
fn test_binary_rejects_missing_input() {
    let output = Command::new(env!("CARGO_BIN_EXE_netsheet"))
        .arg("no/such/closing.toml")
        .output()
        .expect("binary should run");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load input"));
}

#[test]
fn test_binary_lists_jurisdictions() {
    let output = Command::new(env!("CARGO_BIN_EXE_netsheet"))
        .arg("--list-jurisdictions")
        .output()
        .expect("binary should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 92);
    assert!(stdout.lines().any(|line| line.starts_with("Lake ") && line.ends_with("Northwest")));
}
