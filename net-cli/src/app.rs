use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use net_core::rates::Jurisdiction;
use net_core::{FeeScheduleBook, NetSheet, NetSheetResult, PremiumTable};
use net_data::{PremiumTierLoader, RateCardLoader};
use tracing::{debug, info, warn};

use crate::form::NetSheetForm;

/// Premium table and fee schedules in effect for a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Rates {
    pub premiums: PremiumTable,
    pub schedules: FeeScheduleBook,
}

impl Default for Rates {
    fn default() -> Self {
        Self {
            premiums: PremiumTable::indiana(),
            schedules: FeeScheduleBook::indiana(),
        }
    }
}

/// Builds the rates from the built-in Indiana data, replacing each part
/// that has a file.
///
/// A rate card's overflow rule applies to whichever tier table ends up in
/// use, loaded or built-in.
pub fn load_rates(
    tiers: Option<&Path>,
    rate_card: Option<&Path>,
) -> Result<Rates> {
    let mut rates = Rates::default();
    let mut overflow = *rates.premiums.overflow();

    if let Some(path) = rate_card {
        let card = RateCardLoader::from_file(path)
            .with_context(|| format!("Failed to load rate card: {}", path.display()))?;
        info!(path = %path.display(), "loaded rate card");
        rates.schedules = card.schedules;
        if let Some(rule) = card.overflow {
            overflow = rule;
        }
    }

    rates.premiums = match tiers {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
            let table = PremiumTierLoader::load(file, overflow)
                .with_context(|| format!("Failed to load premium tiers: {}", path.display()))?;
            info!(path = %path.display(), rows = table.rows().len(), "loaded premium tiers");
            table
        }
        None => PremiumTable::new(rates.premiums.rows().to_vec(), overflow)
            .context("Invalid overflow rule for the built-in premium table")?,
    };

    Ok(rates)
}

/// Each known jurisdiction with the name of the schedule it resolves to.
pub fn jurisdiction_schedules(rates: &Rates) -> Vec<(&'static str, &str)> {
    Jurisdiction::all()
        .map(|jurisdiction| {
            let schedule = rates.schedules.resolve(jurisdiction.name());
            (jurisdiction.name(), schedule.name.as_str())
        })
        .collect()
}

/// Normalizes `form` and runs the full pipeline once.
///
/// An unlisted jurisdiction is still calculated (it gets the standard
/// schedule) but is reported, since it is usually a typo.
pub fn run(
    form: &NetSheetForm,
    rates: &Rates,
    today: NaiveDate,
) -> NetSheetResult {
    let input = form.to_input(today);

    match Jurisdiction::parse(&input.title.jurisdiction) {
        Some(jurisdiction) => debug!(jurisdiction = jurisdiction.name(), "jurisdiction recognized"),
        None => warn!(
            jurisdiction = %input.title.jurisdiction,
            schedule = %rates.schedules.resolve(&input.title.jurisdiction).name,
            "unknown jurisdiction, using its fallback schedule"
        ),
    }

    NetSheet::new(&rates.premiums, &rates.schedules).calculate(&input)
}
