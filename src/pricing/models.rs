//! Domain types for pricing calculations.
//!
//! `PricingRequest` is built per call by the transport layer; `PricingBreakdown`
//! carries full-precision values and is rounded only when it is rendered.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Session discount bracket, keyed by how many multiples of the minimum
/// session count were booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountTier {
    Minimum,
    Double,
    TriplePlus,
}

impl DiscountTier {
    pub fn as_str(self) -> &'static str {
        match self {
            DiscountTier::Minimum => "minimum",
            DiscountTier::Double => "double",
            DiscountTier::TriplePlus => "triple_plus",
        }
    }
}

impl std::fmt::Display for DiscountTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time-of-day bucket derived from a start time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
    Default,
}

impl TimeSlot {
    /// Bucket a clock hour: before noon, noon to 5pm, 5pm onwards.
    ///
    /// Hours outside 0-23 are bucketed by the same thresholds.
    pub fn from_hour(hour: i64) -> Self {
        if hour < 12 {
            TimeSlot::Morning
        } else if hour < 17 {
            TimeSlot::Afternoon
        } else {
            TimeSlot::Evening
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeSlot::Morning => "morning",
            TimeSlot::Afternoon => "afternoon",
            TimeSlot::Evening => "evening",
            TimeSlot::Default => "default",
        }
    }
}

/// Input for a single price calculation.
///
/// Optional fields that fail to parse are not errors; the engine falls back
/// to its documented defaults for them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PricingRequest {
    /// Case-insensitive program label (e.g. "math", "Science")
    pub program_type: String,
    pub session_count: i64,
    /// "online" or "onsite"; anything else prices neutrally
    pub setting: String,
    /// `YYYY-MM-DD`, used only for the day-of-week factor
    pub start_date: Option<String>,
    /// `HH:MM` (24-hour), used only for the time slot
    pub start_time: Option<String>,
    /// Override of the program's minimum sessions, honoured when positive
    pub min_sessions: Option<i64>,
    /// Override of the catalog base price, honoured when positive
    pub base_price: Option<Decimal>,
}

impl PricingRequest {
    pub fn new(program_type: impl Into<String>, session_count: i64, setting: impl Into<String>) -> Self {
        Self {
            program_type: program_type.into(),
            session_count,
            setting: setting.into(),
            ..Self::default()
        }
    }

    pub fn with_start_date(mut self, start_date: impl Into<String>) -> Self {
        self.start_date = Some(start_date.into());
        self
    }

    pub fn with_start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = Some(start_time.into());
        self
    }

    pub fn with_min_sessions(mut self, min_sessions: i64) -> Self {
        self.min_sessions = Some(min_sessions);
        self
    }

    pub fn with_base_price(mut self, base_price: Decimal) -> Self {
        self.base_price = Some(base_price);
        self
    }
}

/// Fully itemized price, at full precision.
///
/// Discount fields are percentages computed as `(1 - multiplier) * 100`;
/// premiums show up as negative values.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingBreakdown {
    pub base_price: Decimal,
    pub session_multiplier: Decimal,
    pub setting_multiplier: Decimal,
    pub time_multiplier: Decimal,
    pub day_multiplier: Decimal,
    /// Product of the four factor multipliers
    pub total_multiplier: Decimal,
    pub session_discount: Decimal,
    pub setting_discount: Decimal,
    pub time_discount: Decimal,
    pub day_discount: Decimal,
    pub total_discount: Decimal,
    pub final_price: Decimal,
    pub price_per_session: Decimal,
    pub session_count: i64,
    pub min_sessions_required: i64,
    pub discount_tier: DiscountTier,
    pub time_slot: TimeSlot,
    pub day_of_week: Weekday,
}
