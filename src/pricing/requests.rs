//! Request DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::models::PricingRequest;

/// Request to calculate a booking price
#[derive(Debug, Deserialize)]
pub struct CalculatePriceRequest {
    pub program_type: String,
    pub session_count: i64,
    #[serde(default = "default_setting")]
    pub setting: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub min_sessions: Option<i64>,
    /// Accepts either a JSON number or a decimal string
    #[serde(default)]
    pub base_price: Option<Decimal>,
}

fn default_setting() -> String {
    "online".to_string()
}

impl From<CalculatePriceRequest> for PricingRequest {
    fn from(req: CalculatePriceRequest) -> Self {
        Self {
            program_type: req.program_type,
            session_count: req.session_count,
            setting: req.setting,
            start_date: req.start_date,
            start_time: req.start_time,
            min_sessions: req.min_sessions,
            base_price: req.base_price,
        }
    }
}
