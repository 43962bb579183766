pub mod calculations;
pub mod models;
pub mod normalize;
pub mod rates;

pub use calculations::{FeeScheduleBook, NetSheet, PremiumTable};
pub use models::*;
