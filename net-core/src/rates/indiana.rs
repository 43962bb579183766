//! Indiana owner's policy premiums and title fee schedules.
//!
//! The premium table covers liability up to $1,000,000. Above that, each
//! started $10,000 adds $22 to the $2,728 ceiling premium.
//!
//! Three fee schedules are in use. Lake, Porter and LaPorte counties list the
//! full settlement fee and split it between buyer and seller; the standard
//! and northeast schedules list the seller's share directly.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{FeeSchedule, OverflowRule, PremiumTierRow, ScheduleOverride, SettlementSplit};

/// County whose deed recording fee uses the primary tier.
pub const PRIMARY_JURISDICTION: &str = "Marion";

pub const NORTHWEST_COUNTIES: [&str; 3] = ["Lake", "Porter", "LaPorte"];

pub const NORTHEAST_COUNTIES: [&str; 4] = ["Allen", "DeKalb", "Noble", "Whitley"];

pub const OVERFLOW: OverflowRule = OverflowRule {
    base_premium: dec!(2728),
    per_unit_rate: dec!(22),
    unit_size: dec!(10000),
};

const fn tier(
    low: Decimal,
    high: Decimal,
    band_low: Decimal,
    band_high: Decimal,
) -> PremiumTierRow {
    PremiumTierRow {
        low,
        high,
        band_low,
        band_high,
    }
}

pub const PREMIUM_TIERS: [PremiumTierRow; 41] = [
    tier(dec!(0.00), dec!(50000.00), dec!(209), dec!(220)),
    tier(dec!(50000.01), dec!(60000.00), dec!(238), dec!(250)),
    tier(dec!(60000.01), dec!(70000.00), dec!(266), dec!(280)),
    tier(dec!(70000.01), dec!(80000.00), dec!(294), dec!(310)),
    tier(dec!(80000.01), dec!(90000.00), dec!(323), dec!(340)),
    tier(dec!(90000.01), dec!(100000.00), dec!(352), dec!(370)),
    tier(dec!(100000.01), dec!(110000.00), dec!(380), dec!(400)),
    tier(dec!(110000.01), dec!(120000.00), dec!(408), dec!(430)),
    tier(dec!(120000.01), dec!(130000.00), dec!(437), dec!(460)),
    tier(dec!(130000.01), dec!(140000.00), dec!(466), dec!(490)),
    tier(dec!(140000.01), dec!(150000.00), dec!(494), dec!(520)),
    tier(dec!(150000.01), dec!(160000.00), dec!(522), dec!(550)),
    tier(dec!(160000.01), dec!(170000.00), dec!(551), dec!(580)),
    tier(dec!(170000.01), dec!(180000.00), dec!(580), dec!(610)),
    tier(dec!(180000.01), dec!(190000.00), dec!(608), dec!(640)),
    tier(dec!(190000.01), dec!(200000.00), dec!(636), dec!(670)),
    tier(dec!(200000.01), dec!(210000.00), dec!(665), dec!(700)),
    tier(dec!(210000.01), dec!(220000.00), dec!(694), dec!(730)),
    tier(dec!(220000.01), dec!(230000.00), dec!(722), dec!(760)),
    tier(dec!(230000.01), dec!(240000.00), dec!(750), dec!(790)),
    tier(dec!(240000.01), dec!(250000.00), dec!(779), dec!(820)),
    tier(dec!(250000.01), dec!(275000.00), dec!(847), dec!(892)),
    tier(dec!(275000.01), dec!(300000.00), dec!(917), dec!(965)),
    tier(dec!(300000.01), dec!(325000.00), dec!(986), dec!(1038)),
    tier(dec!(325000.01), dec!(350000.00), dec!(1054), dec!(1110)),
    tier(dec!(350000.01), dec!(375000.00), dec!(1123), dec!(1182)),
    tier(dec!(375000.01), dec!(400000.00), dec!(1192), dec!(1255)),
    tier(dec!(400000.01), dec!(425000.00), dec!(1262), dec!(1328)),
    tier(dec!(425000.01), dec!(450000.00), dec!(1330), dec!(1400)),
    tier(dec!(450000.01), dec!(475000.00), dec!(1398), dec!(1472)),
    tier(dec!(475000.01), dec!(500000.00), dec!(1468), dec!(1545)),
    tier(dec!(500000.01), dec!(550000.00), dec!(1580), dec!(1663)),
    tier(dec!(550000.01), dec!(600000.00), dec!(1693), dec!(1782)),
    tier(dec!(600000.01), dec!(650000.00), dec!(1805), dec!(1900)),
    tier(dec!(650000.01), dec!(700000.00), dec!(1917), dec!(2018)),
    tier(dec!(700000.01), dec!(750000.00), dec!(2029), dec!(2136)),
    tier(dec!(750000.01), dec!(800000.00), dec!(2142), dec!(2255)),
    tier(dec!(800000.01), dec!(850000.00), dec!(2254), dec!(2373)),
    tier(dec!(850000.01), dec!(900000.00), dec!(2366), dec!(2491)),
    tier(dec!(900000.01), dec!(950000.00), dec!(2480), dec!(2610)),
    tier(dec!(950000.01), dec!(1000000.00), dec!(2592), dec!(2728)),
];

pub fn standard_schedule() -> FeeSchedule {
    FeeSchedule {
        name: "Standard".to_string(),
        settlement_fee_loan: dec!(400.00),
        settlement_fee_cash: dec!(300.00),
        settlement_split: SettlementSplit::Full,
        title_processing_fee: dec!(150.00),
        closing_processing_fee: dec!(75.00),
        cpl_fee: dec!(25.00),
        tieff_fee: dec!(5.00),
        deed_recording_primary: dec!(35.00),
        deed_recording_other: dec!(25.00),
        e_filing_fee: dec!(4.25),
        transfer_fee: dec!(25.00),
    }
}

pub fn northwest_schedule() -> FeeSchedule {
    FeeSchedule {
        name: "Northwest".to_string(),
        settlement_fee_loan: dec!(850.00),
        settlement_fee_cash: dec!(650.00),
        settlement_split: SettlementSplit::Halved,
        title_processing_fee: dec!(175.00),
        closing_processing_fee: dec!(95.00),
        cpl_fee: dec!(25.00),
        tieff_fee: dec!(5.00),
        deed_recording_primary: dec!(35.00),
        deed_recording_other: dec!(25.00),
        e_filing_fee: dec!(4.25),
        transfer_fee: dec!(25.00),
    }
}

pub fn northeast_schedule() -> FeeSchedule {
    FeeSchedule {
        name: "Northeast".to_string(),
        settlement_fee_loan: dec!(425.00),
        settlement_fee_cash: dec!(325.00),
        settlement_split: SettlementSplit::Full,
        title_processing_fee: dec!(125.00),
        closing_processing_fee: dec!(100.00),
        cpl_fee: dec!(25.00),
        tieff_fee: dec!(5.00),
        deed_recording_primary: dec!(35.00),
        deed_recording_other: dec!(25.00),
        e_filing_fee: dec!(3.50),
        transfer_fee: dec!(25.00),
    }
}

pub fn schedule_overrides() -> Vec<ScheduleOverride> {
    vec![
        ScheduleOverride {
            jurisdictions: NORTHWEST_COUNTIES.iter().map(|c| c.to_string()).collect(),
            schedule: northwest_schedule(),
        },
        ScheduleOverride {
            jurisdictions: NORTHEAST_COUNTIES.iter().map(|c| c.to_string()).collect(),
            schedule: northeast_schedule(),
        },
    ]
}
