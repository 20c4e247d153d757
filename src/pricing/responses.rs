//! Response DTOs for pricing API endpoints.
//!
//! Amounts and percentages are rounded to two places here, at the edge;
//! everything upstream keeps full precision.

use std::collections::BTreeMap;

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{discount_percentage, round_money};
use super::models::{DiscountTier, PricingBreakdown, TimeSlot};
use super::summary::{describe, format_price};
use super::tables::{weekday_name, PricingTables};

/// Decimal rendered as a JSON number
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Amount(#[serde(with = "rust_decimal::serde::float")] pub Decimal);

/// Response for price calculation
#[derive(Debug, Serialize)]
pub struct PricingResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub base_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub session_discount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub setting_discount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub time_discount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub day_discount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_discount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub final_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub price_per_session: Decimal,
    /// `final_price` for display, e.g. `₱5,130.00`
    pub formatted_total: String,
    pub formatted_per_session: String,
    pub original_sessions: i64,
    pub requested_sessions: i64,
    pub min_sessions_required: i64,
    pub discount_tier: DiscountTier,
    pub time_slot: TimeSlot,
    /// Monday = 0 .. Sunday = 6
    pub day_of_week: u32,
    pub summary: String,
}

impl From<&PricingBreakdown> for PricingResponse {
    fn from(b: &PricingBreakdown) -> Self {
        let final_price = round_money(b.final_price, 2);
        let price_per_session = round_money(b.price_per_session, 2);
        Self {
            base_price: round_money(b.base_price, 2),
            session_discount: round_money(b.session_discount, 2),
            setting_discount: round_money(b.setting_discount, 2),
            time_discount: round_money(b.time_discount, 2),
            day_discount: round_money(b.day_discount, 2),
            total_discount: round_money(b.total_discount, 2),
            final_price,
            price_per_session,
            formatted_total: format_price(final_price),
            formatted_per_session: format_price(price_per_session),
            original_sessions: b.session_count,
            requested_sessions: b.session_count,
            min_sessions_required: b.min_sessions_required,
            discount_tier: b.discount_tier,
            time_slot: b.time_slot,
            day_of_week: b.day_of_week.num_days_from_monday(),
            summary: describe(b),
        }
    }
}

/// Response for the pricing catalog.
///
/// Built from the same tables the engine prices with.
#[derive(Debug, Serialize)]
pub struct ProgramsResponse {
    pub programs: BTreeMap<String, Amount>,
    pub min_sessions: BTreeMap<String, u32>,
    pub session_discount_rules: BTreeMap<String, String>,
    pub settings: Vec<String>,
    pub time_slots: Vec<TimeSlot>,
    pub days: BTreeMap<String, String>,
}

impl From<&PricingTables> for ProgramsResponse {
    fn from(tables: &PricingTables) -> Self {
        let session_discount_rules = tables
            .session_discount_tiers
            .iter()
            .map(|t| {
                let label = match t.tier {
                    DiscountTier::Minimum => "minimum".to_string(),
                    DiscountTier::Double => {
                        format!("double ({}x minimum)", t.minimum_multiple.normalize())
                    }
                    DiscountTier::TriplePlus => {
                        format!("triple or more ({}x+ minimum)", t.minimum_multiple.normalize())
                    }
                };
                let discount = round_money(discount_percentage(t.multiplier), 2).normalize();
                let rule = if discount.is_zero() {
                    "No discount".to_string()
                } else {
                    format!("{discount}% discount")
                };
                (label, rule)
            })
            .collect();

        let days = std::iter::successors(Some(Weekday::Mon), |day| Some(day.succ()))
            .take(7)
            .map(|day| (day.num_days_from_monday().to_string(), weekday_name(day).to_string()))
            .collect();

        Self {
            programs: tables
                .base_price_by_program
                .iter()
                .map(|(program, price)| (program.clone(), Amount(*price)))
                .collect(),
            min_sessions: tables
                .min_sessions_by_program
                .iter()
                .map(|(program, min)| (program.clone(), min.get()))
                .collect(),
            session_discount_rules,
            settings: tables.setting_multiplier.keys().cloned().collect(),
            time_slots: tables.time_slot_multiplier.keys().copied().collect(),
            days,
        }
    }
}

/// Response for the service root
#[derive(Debug, Serialize)]
pub struct ServiceInfoResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

/// Response for health check
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::clock::FixedClock;
    use crate::pricing::models::PricingRequest;
    use crate::pricing::services::PricingEngine;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_pricing_response_rounds_at_output() {
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let engine = PricingEngine::with_clock(PricingTables::standard(), FixedClock(monday));
        let breakdown = engine
            .calculate_price(
                &PricingRequest::new("math", 12, "online")
                    .with_start_date("2024-01-01")
                    .with_start_time("09:30"),
            )
            .unwrap();

        // 500 * 12 * 0.95 * 0.9 * 0.95 = 4873.5, per session 406.125
        assert_eq!(breakdown.price_per_session, dec!(406.125));

        let response = PricingResponse::from(&breakdown);
        assert_eq!(response.final_price, dec!(4873.50));
        assert_eq!(response.price_per_session, dec!(406.12));
        assert_eq!(response.original_sessions, 12);
        assert_eq!(response.requested_sessions, 12);
        assert_eq!(response.day_of_week, 0);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["price_per_session"], 406.12);
        assert_eq!(json["discount_tier"], "triple_plus");
        assert_eq!(json["time_slot"], "morning");
        assert_eq!(json["formatted_total"], "₱4,873.50");
        assert_eq!(json["formatted_per_session"], "₱406.12");
    }

    #[test]
    fn test_programs_response_mirrors_tables() {
        let tables = PricingTables::standard();
        let response = ProgramsResponse::from(&tables);

        assert_eq!(response.programs.len(), tables.base_price_by_program.len());
        assert_eq!(response.programs.get("science"), Some(&Amount(dec!(550))));
        assert_eq!(response.min_sessions.get("default"), Some(&4));
        assert_eq!(response.settings, vec!["online", "onsite"]);
        assert_eq!(
            response.time_slots,
            vec![TimeSlot::Morning, TimeSlot::Afternoon, TimeSlot::Evening, TimeSlot::Default]
        );
        assert_eq!(response.days.get("0").map(String::as_str), Some("Monday"));
        assert_eq!(response.days.get("6").map(String::as_str), Some("Sunday"));
    }

    #[test]
    fn test_session_discount_rules() {
        let response = ProgramsResponse::from(&PricingTables::standard());
        let rules = &response.session_discount_rules;

        assert_eq!(rules.get("minimum").map(String::as_str), Some("No discount"));
        assert_eq!(
            rules.get("double (2x minimum)").map(String::as_str),
            Some("3% discount")
        );
        assert_eq!(
            rules.get("triple or more (3x+ minimum)").map(String::as_str),
            Some("5% discount")
        );
    }

    #[test]
    fn test_error_response_skips_empty_details() {
        let response = PricingErrorResponse {
            error_type: "not_found".to_string(),
            message: "Not found".to_string(),
            details: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("details").is_none());
    }
}
