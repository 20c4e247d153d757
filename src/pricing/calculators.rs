//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no clock, no I/O. The engine in
//! `services` composes these with the lookup tables.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::models::{DiscountTier, TimeSlot};
use super::tables::SessionDiscountTier;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use program_pricing::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(406.125), 2), dec!(406.12));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// How many multiples of the minimum were booked.
///
/// Returns zero for a non-positive minimum, which never qualifies for a tier.
pub fn session_multiple(session_count: i64, min_sessions: i64) -> Decimal {
    if min_sessions <= 0 {
        return Decimal::ZERO;
    }
    Decimal::from(session_count) / Decimal::from(min_sessions)
}

/// Pick the highest qualifying session tier.
///
/// Thresholds are closed on the low end, so booking exactly twice the minimum
/// lands in the double tier. When no tier qualifies the booking is priced at
/// the minimum tier with no discount.
pub fn select_tier(
    tiers: &[SessionDiscountTier],
    session_count: i64,
    min_sessions: i64,
) -> (DiscountTier, Decimal) {
    let multiple = session_multiple(session_count, min_sessions);

    tiers
        .iter()
        .filter(|t| multiple >= t.minimum_multiple)
        .max_by_key(|t| t.minimum_multiple)
        .map(|t| (t.tier, t.multiplier))
        .unwrap_or((DiscountTier::Minimum, Decimal::ONE))
}

/// Bucket a start time (`HH:MM`, 24-hour) into a time slot.
///
/// Only the hour component is read, as any integer: hours past 23 count as
/// evening and negative hours as morning. Absent or non-numeric hours land in
/// `TimeSlot::Default`.
pub fn time_slot(start_time: Option<&str>) -> TimeSlot {
    start_time
        .and_then(parse_hour)
        .map_or(TimeSlot::Default, TimeSlot::from_hour)
}

fn parse_hour(value: &str) -> Option<i64> {
    value.split(':').next()?.trim().parse().ok()
}

/// Weekday of a `YYYY-MM-DD` start date, `None` when absent or unparsable.
pub fn day_of_week(start_date: Option<&str>) -> Option<Weekday> {
    let value = start_date?.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|date| date.weekday())
}

/// Percentage discount represented by a multiplier; premiums are negative.
pub fn discount_percentage(multiplier: Decimal) -> Decimal {
    (Decimal::ONE - multiplier) * HUNDRED
}

/// Aggregate discount of `final_price` against the undiscounted total.
///
/// `None` when an intermediate value leaves the decimal range.
pub fn total_discount_percentage(undiscounted: Decimal, final_price: Decimal) -> Option<Decimal> {
    if undiscounted <= Decimal::ZERO {
        return Some(Decimal::ZERO);
    }
    undiscounted
        .checked_sub(final_price)?
        .checked_div(undiscounted)?
        .checked_mul(HUNDRED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::tables::PricingTables;
    use rust_decimal_macros::dec;

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_bankers_rounding_to_even() {
        assert_eq!(round_money(dec!(2.5), 0), dec!(2));
        assert_eq!(round_money(dec!(3.5), 0), dec!(4));
        assert_eq!(round_money(dec!(406.125), 2), dec!(406.12));
        assert_eq!(round_money(dec!(406.135), 2), dec!(406.14));
    }

    #[test]
    fn test_round_money_normal_rounding() {
        assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
        assert_eq!(round_money(dec!(-10.004), 2), dec!(-10.00));
    }

    // ==================== select_tier tests ====================

    fn tiers() -> Vec<SessionDiscountTier> {
        PricingTables::standard().session_discount_tiers
    }

    #[test]
    fn test_select_tier_minimum() {
        assert_eq!(select_tier(&tiers(), 4, 4), (DiscountTier::Minimum, Decimal::ONE));
        assert_eq!(select_tier(&tiers(), 7, 4), (DiscountTier::Minimum, Decimal::ONE));
    }

    #[test]
    fn test_select_tier_double_inclusive_boundary() {
        assert_eq!(select_tier(&tiers(), 8, 4), (DiscountTier::Double, dec!(0.97)));
        assert_eq!(select_tier(&tiers(), 11, 4), (DiscountTier::Double, dec!(0.97)));
    }

    #[test]
    fn test_select_tier_triple_plus() {
        assert_eq!(select_tier(&tiers(), 12, 4), (DiscountTier::TriplePlus, dec!(0.95)));
        assert_eq!(select_tier(&tiers(), 40, 4), (DiscountTier::TriplePlus, dec!(0.95)));
    }

    #[test]
    fn test_select_tier_fractional_multiples() {
        // 5 / 3 = 1.67, 6 / 3 = 2.0, 8 / 3 = 2.67, 9 / 3 = 3.0
        assert_eq!(select_tier(&tiers(), 5, 3).0, DiscountTier::Minimum);
        assert_eq!(select_tier(&tiers(), 6, 3).0, DiscountTier::Double);
        assert_eq!(select_tier(&tiers(), 8, 3).0, DiscountTier::Double);
        assert_eq!(select_tier(&tiers(), 9, 3).0, DiscountTier::TriplePlus);
    }

    #[test]
    fn test_select_tier_ignores_table_order() {
        let mut reversed = tiers();
        reversed.reverse();
        assert_eq!(select_tier(&reversed, 12, 4).0, DiscountTier::TriplePlus);
        assert_eq!(select_tier(&reversed, 8, 4).0, DiscountTier::Double);
    }

    #[test]
    fn test_select_tier_no_qualifying_tier() {
        assert_eq!(select_tier(&tiers(), 0, 0), (DiscountTier::Minimum, Decimal::ONE));
        assert_eq!(select_tier(&[], 12, 4), (DiscountTier::Minimum, Decimal::ONE));
    }

    // ==================== time_slot tests ====================

    #[test]
    fn test_time_slot_buckets() {
        assert_eq!(time_slot(Some("09:30")), TimeSlot::Morning);
        assert_eq!(time_slot(Some("14:00")), TimeSlot::Afternoon);
        assert_eq!(time_slot(Some("19:15")), TimeSlot::Evening);
        assert_eq!(time_slot(Some("12:00")), TimeSlot::Afternoon);
        assert_eq!(time_slot(Some("17:00")), TimeSlot::Evening);
        assert_eq!(time_slot(Some("9")), TimeSlot::Morning);
    }

    #[test]
    fn test_time_slot_fallbacks() {
        assert_eq!(time_slot(None), TimeSlot::Default);
        assert_eq!(time_slot(Some("")), TimeSlot::Default);
        assert_eq!(time_slot(Some("noon")), TimeSlot::Default);
        assert_eq!(time_slot(Some("9.5:00")), TimeSlot::Default);
    }

    #[test]
    fn test_time_slot_out_of_range_hours() {
        assert_eq!(time_slot(Some("-3:00")), TimeSlot::Morning);
        assert_eq!(time_slot(Some("25:00")), TimeSlot::Evening);
        assert_eq!(time_slot(Some("99")), TimeSlot::Evening);
        assert_eq!(time_slot(Some(" 14 :30")), TimeSlot::Afternoon);
    }

    // ==================== day_of_week tests ====================

    #[test]
    fn test_day_of_week_parses_iso_dates() {
        assert_eq!(day_of_week(Some("2024-01-01")), Some(Weekday::Mon));
        assert_eq!(day_of_week(Some("2024-01-06")), Some(Weekday::Sat));
        assert_eq!(day_of_week(Some("2024-01-07")), Some(Weekday::Sun));
    }

    #[test]
    fn test_day_of_week_unparsable() {
        assert_eq!(day_of_week(None), None);
        assert_eq!(day_of_week(Some("")), None);
        assert_eq!(day_of_week(Some("01/06/2024")), None);
        assert_eq!(day_of_week(Some("2024-02-30")), None);
    }

    // ==================== percentage tests ====================

    #[test]
    fn test_discount_percentage() {
        assert_eq!(discount_percentage(dec!(0.95)), dec!(5));
        assert_eq!(discount_percentage(dec!(0.9)), dec!(10));
        assert_eq!(discount_percentage(Decimal::ONE), Decimal::ZERO);
        assert_eq!(discount_percentage(dec!(1.1)), dec!(-10));
    }

    #[test]
    fn test_total_discount_percentage() {
        assert_eq!(total_discount_percentage(dec!(6000), dec!(5130)), Some(dec!(14.5)));
        assert_eq!(total_discount_percentage(dec!(6000), dec!(6600)), Some(dec!(-10)));
        assert_eq!(
            total_discount_percentage(Decimal::ZERO, Decimal::ZERO),
            Some(Decimal::ZERO)
        );
        assert_eq!(total_discount_percentage(Decimal::ONE, Decimal::MAX), None);
    }
}
