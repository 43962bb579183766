//! File loaders for net sheet configuration.
//!
//! The engine in `net-core` ships with built-in Indiana rates. These loaders
//! replace them from disk: a premium tier table from CSV and a rate card of
//! fee schedules from TOML. Both validate before handing anything back.

mod rate_card;
mod tiers;

pub use rate_card::{RateCard, RateCardError, RateCardFile, RateCardLoader};
pub use tiers::{PremiumTierLoader, PremiumTierLoaderError, PremiumTierRecord};
