//! Pricing engine module.
//!
//! Computes booking prices for tutoring programs from fixed lookup tables.
//! The engine is pure; `routes` exposes it over HTTP/JSON.

pub mod calculators;
pub mod clock;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;
pub mod summary;
pub mod tables;

// Re-export commonly used items
pub use calculators::round_money;
pub use clock::{Clock, FixedClock, SystemClock};
pub use models::{DiscountTier, PricingBreakdown, PricingRequest, TimeSlot};
pub use routes::router;
pub use services::{compute, PricingEngine, PricingError};
pub use summary::{describe, format_price};
pub use tables::PricingTables;
