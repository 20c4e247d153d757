//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::responses::PricingErrorResponse;
use crate::pricing::PricingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error(transparent)]
    Pricing(PricingError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::AmountOverflow => AppError::Internal(err.to_string()),
            err => AppError::Pricing(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                PricingErrorResponse {
                    error_type: "not_found".to_string(),
                    message: self.to_string(),
                    details: None,
                },
            ),
            // Caller-supplied data, so a client error
            AppError::Pricing(PricingError::BelowMinimumSessions { requested, required }) => (
                StatusCode::BAD_REQUEST,
                PricingErrorResponse {
                    error_type: "below_minimum_sessions".to_string(),
                    message: self.to_string(),
                    details: Some(serde_json::json!({
                        "requested": requested,
                        "required": required,
                    })),
                },
            ),
            AppError::Internal(_) | AppError::Pricing(PricingError::AmountOverflow) => {
                tracing::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    PricingErrorResponse {
                        error_type: "internal_error".to_string(),
                        message: "Internal error".to_string(),
                        details: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
