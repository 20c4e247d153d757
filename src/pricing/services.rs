//! Pricing engine.
//!
//! Maps a `PricingRequest` to an itemized `PricingBreakdown`. The computation
//! is pure: tables are read-only and the only outside input is the injected
//! clock, consulted when a booking has no usable start date.

use std::sync::Arc;

use chrono::Datelike;
use rust_decimal::Decimal;

use super::calculators::{
    day_of_week, discount_percentage, select_tier, time_slot, total_discount_percentage,
};
use super::clock::{Clock, SystemClock};
use super::models::{PricingBreakdown, PricingRequest};
use super::tables::PricingTables;

/// Pricing calculation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Session count ({requested}) is less than minimum required ({required})")]
    BelowMinimumSessions { requested: i64, required: i64 },

    #[error("Price amount exceeds the supported decimal range")]
    AmountOverflow,
}

/// Shareable handle on the tables and clock.
///
/// Cheap to clone; every clone reads the same immutable tables.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    tables: Arc<PricingTables>,
    clock: Arc<dyn Clock>,
}

impl PricingEngine {
    /// Engine backed by the system clock
    pub fn new(tables: PricingTables) -> Self {
        Self::with_clock(tables, SystemClock)
    }

    pub fn with_clock(tables: PricingTables, clock: impl Clock + 'static) -> Self {
        Self {
            tables: Arc::new(tables),
            clock: Arc::new(clock),
        }
    }

    /// Tables consulted by `calculate_price`
    pub fn tables(&self) -> &PricingTables {
        &self.tables
    }

    pub fn calculate_price(&self, request: &PricingRequest) -> Result<PricingBreakdown, PricingError> {
        compute(request, &self.tables, self.clock.as_ref())
    }
}

/// Compute the price breakdown for a booking.
///
/// Fails when the session count is below the resolved minimum; that check
/// runs before any arithmetic. Unknown programs and settings and unparsable
/// dates or times fall back to table defaults. A base price override large
/// enough to push the totals past `Decimal::MAX` fails with `AmountOverflow`.
pub fn compute(
    request: &PricingRequest,
    tables: &PricingTables,
    clock: &dyn Clock,
) -> Result<PricingBreakdown, PricingError> {
    let base_price = request
        .base_price
        .filter(|price| *price > Decimal::ZERO)
        .unwrap_or_else(|| tables.base_price(&request.program_type));

    let min_sessions_required = request
        .min_sessions
        .filter(|min| *min > 0)
        .unwrap_or_else(|| i64::from(tables.min_sessions(&request.program_type).get()));

    if request.session_count < min_sessions_required {
        return Err(PricingError::BelowMinimumSessions {
            requested: request.session_count,
            required: min_sessions_required,
        });
    }

    let (discount_tier, session_multiplier) = select_tier(
        &tables.session_discount_tiers,
        request.session_count,
        min_sessions_required,
    );

    let setting_multiplier = tables.setting_multiplier(&request.setting);

    let slot = time_slot(request.start_time.as_deref());
    let time_multiplier = tables.time_multiplier(slot);

    let weekday = day_of_week(request.start_date.as_deref())
        .unwrap_or_else(|| clock.today().weekday());
    let day_multiplier = tables.day_multiplier(weekday);

    let total_multiplier = session_multiplier
        .checked_mul(setting_multiplier)
        .and_then(|m| m.checked_mul(time_multiplier))
        .and_then(|m| m.checked_mul(day_multiplier))
        .ok_or(PricingError::AmountOverflow)?;

    let session_count = Decimal::from(request.session_count);
    let undiscounted = base_price
        .checked_mul(session_count)
        .ok_or(PricingError::AmountOverflow)?;
    let final_price = undiscounted
        .checked_mul(total_multiplier)
        .ok_or(PricingError::AmountOverflow)?;
    let price_per_session = if session_count.is_zero() {
        Decimal::ZERO
    } else {
        final_price / session_count
    };
    let total_discount =
        total_discount_percentage(undiscounted, final_price).ok_or(PricingError::AmountOverflow)?;

    Ok(PricingBreakdown {
        base_price,
        session_multiplier,
        setting_multiplier,
        time_multiplier,
        day_multiplier,
        total_multiplier,
        session_discount: discount_percentage(session_multiplier),
        setting_discount: discount_percentage(setting_multiplier),
        time_discount: discount_percentage(time_multiplier),
        day_discount: discount_percentage(day_multiplier),
        total_discount,
        final_price,
        price_per_session,
        session_count: request.session_count,
        min_sessions_required,
        discount_tier,
        time_slot: slot,
        day_of_week: weekday,
    })
}
