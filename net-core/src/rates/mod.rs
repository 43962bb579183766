//! Built-in rate data.

pub mod indiana;
pub mod jurisdictions;

pub use jurisdictions::{JURISDICTIONS, Jurisdiction, is_known};
