//! Title fee itemization.
//!
//! Lines always come out in the same order, and the order is part of the
//! output contract since every renderer and exporter reproduces it:
//!
//! | # | Line                     | Included when                     |
//! |---|--------------------------|-----------------------------------|
//! | 1 | Owner's title premium    | premium > 0                       |
//! | 2 | Settlement/closing fee   | `settlement_fee` toggle           |
//! | 3 | Title processing fee     | always                            |
//! | 4 | Closing processing fee   | always                            |
//! | 5 | CPL fee                  | `cpl` toggle                      |
//! | 6 | TIEFF fee                | `tieff` toggle                    |
//! | 7 | Deed recording fee       | `deed_recording` toggle           |
//! | 7a| E-filing fee             | `deed_recording` and `e_filing`   |
//! | 8 | Transfer fee + surcharge | `transfer_fee` toggle             |

use rust_decimal::Decimal;

use crate::calculations::common::round_cents;
use crate::models::{FeeSchedule, LineItem, RecordingTier, TitleFeeSettings, TitleFees};

pub const PREMIUM_LABEL: &str = "Owner's Title Insurance Premium";
pub const SETTLEMENT_LABEL: &str = "Settlement/Closing Fee";
pub const TITLE_PROCESSING_LABEL: &str = "Title Processing Fee";
pub const CLOSING_PROCESSING_LABEL: &str = "Closing Processing Fee";
pub const CPL_LABEL: &str = "CPL Fee";
pub const TIEFF_LABEL: &str = "TIEFF Fee";
pub const DEED_RECORDING_LABEL: &str = "Deed Recording Fee";
pub const E_FILING_LABEL: &str = "E-Filing Fee";
pub const TRANSFER_LABEL: &str = "Transfer Fee + Surcharge";

/// Included lines at full precision, in presentation order.
pub(crate) fn itemize(
    settings: &TitleFeeSettings,
    schedule: &FeeSchedule,
    tier: RecordingTier,
) -> Vec<LineItem> {
    let toggles = &settings.toggles;
    let mut items = Vec::with_capacity(9);

    if settings.premium > Decimal::ZERO {
        items.push(LineItem::new(PREMIUM_LABEL, settings.premium));
    }
    if toggles.settlement_fee {
        items.push(LineItem::new(
            SETTLEMENT_LABEL,
            schedule.settlement_fee(settings.transaction_type),
        ));
    }
    items.push(LineItem::new(
        TITLE_PROCESSING_LABEL,
        schedule.title_processing_fee,
    ));
    items.push(LineItem::new(
        CLOSING_PROCESSING_LABEL,
        schedule.closing_processing_fee,
    ));
    if toggles.cpl {
        items.push(LineItem::new(CPL_LABEL, schedule.cpl_fee));
    }
    if toggles.tieff {
        items.push(LineItem::new(TIEFF_LABEL, schedule.tieff_fee));
    }
    if toggles.deed_recording {
        items.push(LineItem::new(
            DEED_RECORDING_LABEL,
            schedule.deed_recording_fee(tier),
        ));
        if settings.e_filing {
            items.push(LineItem::new(E_FILING_LABEL, schedule.e_filing_fee));
        }
    }
    if toggles.transfer_fee {
        items.push(LineItem::new(TRANSFER_LABEL, schedule.transfer_fee));
    }

    items
}

/// Rounds each line to cents and totals the unrounded amounts.
pub(crate) fn summarize(items: &[LineItem]) -> TitleFees {
    let total: Decimal = items.iter().map(|item| item.amount).sum();

    TitleFees {
        items: items
            .iter()
            .map(|item| LineItem::new(item.label.as_str(), round_cents(item.amount)))
            .collect(),
        total: round_cents(total),
    }
}

/// Applies `schedule` and the inclusion toggles in `settings`.
///
/// `tier` selects the deed recording fee; see
/// [`FeeScheduleBook::recording_tier`](crate::FeeScheduleBook::recording_tier).
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use net_core::calculations::aggregate;
/// use net_core::rates::indiana;
/// use net_core::{FeeToggles, RecordingTier, TitleFeeSettings, TransactionType};
///
/// let settings = TitleFeeSettings {
///     transaction_type: TransactionType::Cash,
///     jurisdiction: "Hamilton".to_string(),
///     e_filing: false,
///     premium: dec!(0),
///     toggles: FeeToggles {
///         settlement_fee: false,
///         cpl: false,
///         tieff: false,
///         deed_recording: false,
///         transfer_fee: false,
///     },
/// };
///
/// let fees = aggregate(&settings, &indiana::standard_schedule(), RecordingTier::Other);
///
/// // Only the two processing fees are unconditional.
/// assert_eq!(fees.items.len(), 2);
/// assert_eq!(fees.total, dec!(225.00));
/// ```
pub fn aggregate(
    settings: &TitleFeeSettings,
    schedule: &FeeSchedule,
    tier: RecordingTier,
) -> TitleFees {
    summarize(&itemize(settings, schedule, tier))
}
