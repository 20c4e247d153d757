//! HTTP handlers for the pricing API.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, warn};

use crate::error::Result;
use crate::AppState;

use super::models::PricingRequest;
use super::requests::CalculatePriceRequest;
use super::responses::{HealthResponse, PricingResponse, ProgramsResponse, ServiceInfoResponse};

pub const SERVICE_NAME: &str = "Dynamic Pricing API";

/// Pricing API routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health))
        .route("/calculate-price", post(calculate_price))
        .route("/programs", get(programs))
}

async fn service_info() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
    })
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

/// Calculate the price of a program booking
async fn calculate_price(
    State(state): State<AppState>,
    Json(payload): Json<CalculatePriceRequest>,
) -> Result<Json<PricingResponse>> {
    let request = PricingRequest::from(payload);

    let breakdown = state.engine.calculate_price(&request).map_err(|e| {
        warn!(
            program_type = %request.program_type,
            session_count = request.session_count,
            "Rejected pricing request: {}",
            e
        );
        e
    })?;

    debug!(
        program_type = %request.program_type,
        session_count = breakdown.session_count,
        tier = %breakdown.discount_tier,
        final_price = %breakdown.final_price,
        "Calculated price"
    );

    Ok(Json(PricingResponse::from(&breakdown)))
}

/// Program catalog and pricing rules
async fn programs(State(state): State<AppState>) -> Json<ProgramsResponse> {
    Json(ProgramsResponse::from(state.engine.tables()))
}
