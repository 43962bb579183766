use std::path::{Path, PathBuf};

use net_core::calculations::{FeeScheduleError, PremiumTableError};
use net_core::{FeeSchedule, FeeScheduleBook, OverflowRule, ScheduleOverride};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a rate card.
#[derive(Debug, Error)]
pub enum RateCardError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid fee schedules: {0}")]
    InvalidSchedule(#[from] FeeScheduleError),

    #[error("Invalid overflow rule: {0}")]
    InvalidOverflow(#[from] PremiumTableError),
}

/// The rate card file as written on disk.
///
/// ```toml
/// primary_jurisdiction = "Marion"
///
/// [standard]
/// name = "Standard"
/// settlement_fee_loan = "400.00"
/// # ...remaining fee constants
///
/// [[overrides]]
/// jurisdictions = ["Lake", "Porter"]
///
/// [overrides.schedule]
/// name = "Northwest"
/// settlement_split = "halved"
/// # ...
///
/// [overflow]
/// base_premium = "2728"
/// per_unit_rate = "22"
/// unit_size = "10000"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RateCardFile {
    pub primary_jurisdiction: String,
    pub standard: FeeSchedule,
    #[serde(default)]
    pub overrides: Vec<ScheduleOverride>,
    #[serde(default)]
    pub overflow: Option<OverflowRule>,
}

/// Validated fee configuration ready for the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RateCard {
    pub schedules: FeeScheduleBook,
    /// Replaces the premium table's overflow rule when present.
    pub overflow: Option<OverflowRule>,
}

/// Loader for rate cards from TOML files.
pub struct RateCardLoader;

impl RateCardLoader {
    /// Parse and validate a rate card from TOML text.
    pub fn parse(content: &str) -> Result<RateCard, RateCardError> {
        let file: RateCardFile = toml::from_str(content)?;
        Self::build(file)
    }

    /// Read, parse and validate a rate card file.
    pub fn from_file(path: &Path) -> Result<RateCard, RateCardError> {
        let content = std::fs::read_to_string(path).map_err(|source| RateCardError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    fn build(file: RateCardFile) -> Result<RateCard, RateCardError> {
        if let Some(rule) = &file.overflow {
            rule.validate()?;
        }

        let schedules =
            FeeScheduleBook::new(file.standard, file.overrides, file.primary_jurisdiction)?;

        Ok(RateCard {
            schedules,
            overflow: file.overflow,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use net_core::SettlementSplit;

    const STANDARD: &str = r#"
[standard]
name = "Standard"
settlement_fee_loan = "400.00"
settlement_fee_cash = "300.00"
title_processing_fee = "150.00"
closing_processing_fee = "75.00"
cpl_fee = "25.00"
tieff_fee = "5.00"
deed_recording_primary = "35.00"
deed_recording_other = "25.00"
e_filing_fee = "4.25"
transfer_fee = "25.00"
"#;

    fn card(extra: &str) -> String {
        format!("primary_jurisdiction = \"Marion\"\n{STANDARD}{extra}")
    }

    #[test]
    fn test_parse_standard_only() {
        let card = RateCardLoader::parse(&card("")).expect("Failed to parse rate card");

        let standard = card.schedules.standard();
        assert_eq!(standard.name, "Standard");
        assert_eq!(standard.settlement_split, SettlementSplit::Full);
        assert_eq!(standard.e_filing_fee, dec!(4.25));
        assert!(card.schedules.overrides().is_empty());
        assert_eq!(card.overflow, None);
    }

    #[test]
    fn test_parse_override_and_overflow() {
        let extra = r#"
[[overrides]]
jurisdictions = ["Lake", "Porter"]

[overrides.schedule]
name = "Northwest"
settlement_fee_loan = "850.00"
settlement_fee_cash = "650.00"
settlement_split = "halved"
title_processing_fee = "175.00"
closing_processing_fee = "95.00"
cpl_fee = "25.00"
tieff_fee = "5.00"
deed_recording_primary = "35.00"
deed_recording_other = "25.00"
e_filing_fee = "4.25"
transfer_fee = "25.00"

[overflow]
base_premium = "2728"
per_unit_rate = "22"
unit_size = "10000"
"#;

        let card = RateCardLoader::parse(&card(extra)).expect("Failed to parse rate card");

        let porter = card.schedules.resolve("porter");
        assert_eq!(porter.name, "Northwest");
        assert_eq!(porter.settlement_split, SettlementSplit::Halved);
        assert_eq!(
            card.overflow,
            Some(OverflowRule {
                base_premium: dec!(2728),
                per_unit_rate: dec!(22),
                unit_size: dec!(10000),
            })
        );
    }

    #[test]
    fn test_parse_missing_field_is_toml_error() {
        let content = "primary_jurisdiction = \"Marion\"\n[standard]\nname = \"Standard\"";

        let err = RateCardLoader::parse(content).expect_err("Should fail");

        assert!(matches!(err, RateCardError::TomlParse(_)));
    }

    #[test]
    fn test_parse_negative_fee_is_rejected() {
        let content = card("").replace("cpl_fee = \"25.00\"", "cpl_fee = \"-25.00\"");

        let err = RateCardLoader::parse(&content).expect_err("Should fail");

        assert!(matches!(
            err,
            RateCardError::InvalidSchedule(FeeScheduleError::NegativeFee { field: "cpl_fee", .. })
        ));
    }

    #[test]
    fn test_parse_zero_unit_size_is_rejected() {
        let extra = "\n[overflow]\nbase_premium = \"2728\"\nper_unit_rate = \"22\"\nunit_size = \"0\"\n";

        let err = RateCardLoader::parse(&card(extra)).expect_err("Should fail");

        assert!(matches!(
            err,
            RateCardError::InvalidOverflow(PremiumTableError::InvalidUnitSize(_))
        ));
    }

    #[test]
    fn test_parse_sub_cent_unit_size_is_rejected() {
        let extra = "\n[overflow]\nbase_premium = \"2728\"\nper_unit_rate = \"22\"\nunit_size = \"0.00000000000000001\"\n";

        let err = RateCardLoader::parse(&card(extra)).expect_err("Should fail");

        assert!(matches!(
            err,
            RateCardError::InvalidOverflow(PremiumTableError::InvalidUnitSize(_))
        ));
    }

    #[test]
    fn test_from_file_missing_path_is_io_error() {
        let err = RateCardLoader::from_file(Path::new("does/not/exist.toml"))
            .expect_err("Should fail");

        let RateCardError::Io { path, .. } = err else {
            panic!("Expected Io error, got: {:?}", err);
        };
        assert_eq!(path, PathBuf::from("does/not/exist.toml"));
    }
}
