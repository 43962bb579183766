use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::{debug, info};

use net_cli::report::Report;
use net_cli::{app, export, form, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Seller net proceeds estimate for a real estate closing.
///
/// Reads the closing's form fields from a TOML file, runs the estimate with
/// the built-in Indiana rates (or the files given), and prints an itemized
/// net sheet.
#[derive(Debug, Parser)]
#[command(name = "netsheet", version, about)]
struct Cli {
    /// TOML file with the closing's form fields.
    #[arg(required_unless_present = "list_jurisdictions")]
    input: Option<PathBuf>,

    /// Print every known jurisdiction with its fee schedule and exit.
    #[arg(long)]
    list_jurisdictions: bool,

    /// Premium tier CSV (`low,high,band_low,band_high`) replacing the
    /// built-in table.
    #[arg(long)]
    tiers: Option<PathBuf>,

    /// Rate card TOML replacing the built-in fee schedules.
    #[arg(long)]
    rate_card: Option<PathBuf>,

    /// Also write the breakdown to this CSV file.
    #[arg(long)]
    export: Option<PathBuf>,

    /// Date used when the closing date is missing or invalid
    /// (`YYYY-MM-DD`). Defaults to the local date.
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    /// `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Append a plain copy of every log record to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_file.as_deref())?;

    let rates = app::load_rates(cli.tiers.as_deref(), cli.rate_card.as_deref())?;
    debug!(
        ceiling = %rates.premiums.ceiling(),
        overrides = rates.schedules.overrides().len(),
        "rates ready"
    );

    if cli.list_jurisdictions {
        for (jurisdiction, schedule) in app::jurisdiction_schedules(&rates) {
            println!("{jurisdiction:<20}{schedule}");
        }
        return Ok(());
    }

    let input = cli.input.context("An input file is required")?;
    let form = form::load_from_file(&input)
        .with_context(|| format!("Failed to load input: {}", input.display()))?;

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let result = app::run(&form, &rates, today);

    print!("{}", Report::new(&result));

    if let Some(path) = &cli.export {
        export::export_to_file(&result, path)
            .with_context(|| format!("Failed to export: {}", path.display()))?;
        info!(path = %path.display(), "exported breakdown");
    }

    Ok(())
}
