//! Dynamic pricing service for tutoring program bookings.
//!
//! The pricing engine lives in [`pricing`]; this crate root wires it into an
//! axum application.

pub mod config;
pub mod error;
pub mod pricing;

use axum::{
    http::{header, Method},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::error::AppError;
use crate::pricing::PricingEngine;

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub engine: PricingEngine,
}

impl AppState {
    pub fn new(engine: PricingEngine) -> Self {
        Self { engine }
    }
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    pricing::router()
        .fallback(|| async { AppError::NotFound })
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
