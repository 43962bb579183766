use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use net_core::PremiumTable;
use net_data::{PremiumTierLoader, RateCardLoader};

/// Validate premium tier and rate card files before handing them to netsheet.
///
/// The tiers CSV file should have the following columns:
/// - low: Smallest liability amount the row covers
/// - high: Largest liability amount the row covers
/// - band_low: Low end of the premium band
/// - band_high: High end of the premium band
#[derive(Parser, Debug)]
#[command(name = "net-data-check")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a premium tiers CSV file
    #[arg(short, long)]
    tiers: Option<PathBuf>,

    /// Path to a rate card TOML file
    #[arg(short, long)]
    rate_card: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.tiers.is_none() && args.rate_card.is_none() {
        anyhow::bail!("Nothing to check: pass --tiers and/or --rate-card");
    }

    let rate_card = match &args.rate_card {
        Some(path) => {
            println!("Checking rate card: {}", path.display());
            let card = RateCardLoader::from_file(path)
                .with_context(|| format!("Invalid rate card: {}", path.display()))?;

            let book = &card.schedules;
            println!("  standard schedule: {}", book.standard().name);
            for entry in book.overrides() {
                println!(
                    "  override schedule: {} ({})",
                    entry.schedule.name,
                    entry.jurisdictions.join(", ")
                );
            }
            println!("  primary jurisdiction: {}", book.primary_jurisdiction());
            Some(card)
        }
        None => None,
    };

    if let Some(path) = &args.tiers {
        println!("Checking premium tiers: {}", path.display());

        let file =
            File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
        let records = PremiumTierLoader::parse(file)
            .with_context(|| format!("Failed to parse CSV: {}", path.display()))?;

        println!("Parsed {} records from CSV", records.len());

        let overflow = rate_card
            .as_ref()
            .and_then(|card| card.overflow)
            .unwrap_or(*PremiumTable::indiana().overflow());
        let table = PremiumTierLoader::build(&records, overflow)
            .with_context(|| format!("Invalid tier table: {}", path.display()))?;

        println!("  ceiling: {}", table.ceiling());
        println!(
            "  overflow: {} + {} per {}",
            overflow.base_premium, overflow.per_unit_rate, overflow.unit_size
        );
    }

    println!("All files are valid.");

    Ok(())
}
