//! Pricing lookup tables.
//!
//! Built once at startup and shared read-only. Every lookup is total: a miss
//! resolves to the `default` entry or to a neutral multiplier of 1.

use std::collections::BTreeMap;
use std::num::NonZeroU32;

use chrono::Weekday;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::models::{DiscountTier, TimeSlot};

/// Key of the mandatory fallback entry in program tables
pub const DEFAULT_PROGRAM: &str = "default";

const STANDARD_MIN_SESSIONS: NonZeroU32 = match NonZeroU32::new(4) {
    Some(min) => min,
    None => panic!("minimum sessions must be non-zero"),
};

/// One bracket of the session discount rule.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionDiscountTier {
    /// Lowest `session_count / min_sessions` ratio that qualifies (inclusive)
    pub minimum_multiple: Decimal,
    pub multiplier: Decimal,
    pub tier: DiscountTier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricingTables {
    pub base_price_by_program: BTreeMap<String, Decimal>,
    pub min_sessions_by_program: BTreeMap<String, NonZeroU32>,
    /// Ordered from the largest threshold down
    pub session_discount_tiers: Vec<SessionDiscountTier>,
    pub setting_multiplier: BTreeMap<String, Decimal>,
    /// Keyed by days from Monday (Monday = 0 .. Sunday = 6)
    pub day_multiplier: BTreeMap<u32, Decimal>,
    pub time_slot_multiplier: BTreeMap<TimeSlot, Decimal>,
}

impl PricingTables {
    /// The production price list.
    pub fn standard() -> Self {
        let base_price_by_program = [
            ("math", dec!(500)),
            ("science", dec!(550)),
            ("english", dec!(450)),
            ("programming", dec!(700)),
            (DEFAULT_PROGRAM, dec!(500)),
        ];

        let min_sessions_by_program = ["math", "science", "english", "programming", DEFAULT_PROGRAM];

        Self {
            base_price_by_program: base_price_by_program
                .into_iter()
                .map(|(program, price)| (program.to_string(), price))
                .collect(),
            min_sessions_by_program: min_sessions_by_program
                .into_iter()
                .map(|program| (program.to_string(), STANDARD_MIN_SESSIONS))
                .collect(),
            session_discount_tiers: vec![
                SessionDiscountTier {
                    minimum_multiple: dec!(3),
                    multiplier: dec!(0.95),
                    tier: DiscountTier::TriplePlus,
                },
                SessionDiscountTier {
                    minimum_multiple: dec!(2),
                    multiplier: dec!(0.97),
                    tier: DiscountTier::Double,
                },
                SessionDiscountTier {
                    minimum_multiple: dec!(1),
                    multiplier: Decimal::ONE,
                    tier: DiscountTier::Minimum,
                },
            ],
            setting_multiplier: [("online", dec!(0.9)), ("onsite", Decimal::ONE)]
                .into_iter()
                .map(|(setting, multiplier)| (setting.to_string(), multiplier))
                .collect(),
            // Weekend premium
            day_multiplier: (0..7)
                .map(|day| (day, if day >= 5 { dec!(1.1) } else { Decimal::ONE }))
                .collect(),
            time_slot_multiplier: BTreeMap::from([
                (TimeSlot::Morning, dec!(0.95)),
                (TimeSlot::Afternoon, Decimal::ONE),
                (TimeSlot::Evening, dec!(1.1)),
                (TimeSlot::Default, Decimal::ONE),
            ]),
        }
    }

    /// Catalog base price for a program, falling back to the `default` entry.
    pub fn base_price(&self, program_type: &str) -> Decimal {
        lookup_program(&self.base_price_by_program, program_type).unwrap_or(Decimal::ZERO)
    }

    /// Minimum sessions for a program, falling back to the `default` entry.
    pub fn min_sessions(&self, program_type: &str) -> NonZeroU32 {
        lookup_program(&self.min_sessions_by_program, program_type).unwrap_or(NonZeroU32::MIN)
    }

    pub fn setting_multiplier(&self, setting: &str) -> Decimal {
        self.setting_multiplier
            .get(&setting.to_lowercase())
            .copied()
            .unwrap_or(Decimal::ONE)
    }

    pub fn time_multiplier(&self, slot: TimeSlot) -> Decimal {
        self.time_slot_multiplier
            .get(&slot)
            .or_else(|| self.time_slot_multiplier.get(&TimeSlot::Default))
            .copied()
            .unwrap_or(Decimal::ONE)
    }

    pub fn day_multiplier(&self, day: Weekday) -> Decimal {
        self.day_multiplier
            .get(&day.num_days_from_monday())
            .copied()
            .unwrap_or(Decimal::ONE)
    }
}

impl Default for PricingTables {
    fn default() -> Self {
        Self::standard()
    }
}

fn lookup_program<T: Copy>(table: &BTreeMap<String, T>, program_type: &str) -> Option<T> {
    table
        .get(&program_type.to_lowercase())
        .or_else(|| table.get(DEFAULT_PROGRAM))
        .copied()
}

/// English day name for a weekday
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
