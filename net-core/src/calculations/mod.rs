//! Seller net-sheet calculations.
//!
//! Each submodule is one stage of the closing estimate: the premium tier
//! lookup, fee schedule resolution, title fee itemization, arrears tax
//! proration, and the final net sheet that combines them.

pub mod common;
pub mod net_sheet;
pub mod premium;
pub mod proration;
pub mod schedule;
pub mod title_fees;

#[cfg(test)]
mod props;

pub use net_sheet::NetSheet;
pub use premium::{PremiumTable, PremiumTableError};
pub use proration::{days_in_year, is_leap_year, prorate};
pub use schedule::{FeeScheduleBook, FeeScheduleError};
pub use title_fees::aggregate;
