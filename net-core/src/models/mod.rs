mod fee_schedule;
mod net_sheet;
mod premium_tier;
mod tax;
mod title_fees;

pub use fee_schedule::{FeeSchedule, RecordingTier, ScheduleOverride, SettlementSplit};
pub use net_sheet::{
    AdHocCost, BreakdownLine, Commission, CommissionBasis, LineSection, NetSheetInput,
    NetSheetResult, PremiumSource, TitleFeeInput,
};
pub use premium_tier::{OverflowRule, PremiumChoice, PremiumQuote, PremiumTierRow, QuoteMode};
pub use tax::{DayCount, Installment, ProrationCutoff, TaxBreakdown, TaxSettings};
pub use title_fees::{FeeToggles, LineItem, TitleFeeSettings, TitleFees, TransactionType};
