use std::io::Read;

use net_core::calculations::PremiumTableError;
use net_core::{OverflowRule, PremiumTable, PremiumTierRow};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a premium tier table.
#[derive(Debug, Error)]
pub enum PremiumTierLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Invalid tier table: {0}")]
    InvalidTable(#[from] PremiumTableError),
}

impl From<csv::Error> for PremiumTierLoaderError {
    fn from(err: csv::Error) -> Self {
        PremiumTierLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from the premium tiers CSV file.
///
/// - `low`: Smallest liability amount the row covers
/// - `high`: Largest liability amount the row covers
/// - `band_low`: Low end of the quoted premium band
/// - `band_high`: High end of the quoted premium band
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PremiumTierRecord {
    pub low: Decimal,
    pub high: Decimal,
    pub band_low: Decimal,
    pub band_high: Decimal,
}

impl From<&PremiumTierRecord> for PremiumTierRow {
    fn from(record: &PremiumTierRecord) -> Self {
        PremiumTierRow {
            low: record.low,
            high: record.high,
            band_low: record.band_low,
            band_high: record.band_high,
        }
    }
}

/// Loader for premium tier tables from CSV files.
///
/// Rows must appear in ascending order; the loader does not sort them, so a
/// shuffled file is reported as a contiguity error rather than silently
/// reordered.
pub struct PremiumTierLoader;

impl PremiumTierLoader {
    /// Parse tier records from a CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<PremiumTierRecord>, PremiumTierLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: PremiumTierRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Build a validated [`PremiumTable`] from parsed records.
    pub fn build(
        records: &[PremiumTierRecord],
        overflow: OverflowRule,
    ) -> Result<PremiumTable, PremiumTierLoaderError> {
        let rows = records.iter().map(PremiumTierRow::from).collect();

        Ok(PremiumTable::new(rows, overflow)?)
    }

    /// Parse and build in one step.
    pub fn load<R: Read>(
        reader: R,
        overflow: OverflowRule,
    ) -> Result<PremiumTable, PremiumTierLoaderError> {
        let records = Self::parse(reader)?;
        Self::build(&records, overflow)
    }
}
