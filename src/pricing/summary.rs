//! Human-readable rendering of a price breakdown.

use rust_decimal::Decimal;

use super::calculators::round_money;
use super::models::{DiscountTier, PricingBreakdown};

const CURRENCY_SYMBOL: &str = "₱";

/// One-line description of the discounts and premiums applied.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use program_pricing::pricing::{describe, FixedClock, PricingEngine, PricingRequest, PricingTables};
///
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let engine = PricingEngine::with_clock(PricingTables::standard(), FixedClock(monday));
/// let breakdown = engine
///     .calculate_price(&PricingRequest::new("math", 8, "online"))
///     .unwrap();
///
/// assert_eq!(
///     describe(&breakdown),
///     "Double sessions (2x minimum): 3% discount + Online discount: 10%"
/// );
/// ```
pub fn describe(breakdown: &PricingBreakdown) -> String {
    let mut parts = Vec::new();

    let session = percent(breakdown.session_discount);
    if session > Decimal::ZERO {
        parts.push(match breakdown.discount_tier {
            DiscountTier::Double => format!("Double sessions (2x minimum): {session}% discount"),
            DiscountTier::TriplePlus => format!("Triple+ sessions (3x minimum): {session}% discount"),
            DiscountTier::Minimum => format!("Bulk discount: {session}%"),
        });
    }

    let setting = percent(breakdown.setting_discount);
    if setting > Decimal::ZERO {
        parts.push(format!("Online discount: {setting}%"));
    }

    let time = percent(breakdown.time_discount);
    if time > Decimal::ZERO {
        parts.push(format!("Time discount: {time}%"));
    } else if time < Decimal::ZERO {
        parts.push(format!("Peak time premium: {}%", time.abs()));
    }

    let day = percent(breakdown.day_discount);
    if day > Decimal::ZERO {
        parts.push(format!("Weekday discount: {day}%"));
    } else if day < Decimal::ZERO {
        parts.push(format!("Weekend premium: {}%", day.abs()));
    }

    if parts.is_empty() {
        return "Standard pricing applied".to_string();
    }
    parts.join(" + ")
}

fn percent(value: Decimal) -> Decimal {
    round_money(value, 2).normalize()
}

/// Format an amount as pesos with thousands separators, e.g. `₱1,234.50`.
pub fn format_price(amount: Decimal) -> String {
    let rounded = round_money(amount, 2);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };

    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{CURRENCY_SYMBOL}{grouped}.{fraction}")
}
