//! Error types for the engine configuration and the HTTP service
//!
//! The matching engine itself has no failure modes. Errors only arise when
//! an [`EngineConfig`](crate::core::EngineConfig) is inconsistent or when the
//! service layer rejects a request.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Inconsistent scoring configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightsError {
    #[error("weight for {0} must not be negative")]
    NegativeWeight(&'static str),

    #[error("match weights must sum to 1.0, got {0}")]
    WeightSum(f64),

    #[error("{kind} thresholds must be strictly descending: {values:?}")]
    ThresholdOrder { kind: &'static str, values: Vec<u32> },

    #[error("{name} threshold {value} is outside 0..=100")]
    ThresholdRange { name: &'static str, value: u32 },
}

/// Service layer errors
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Request too large: {0}")]
    TooLarge(String),

    #[error("Worker failed: {0}")]
    Worker(String),
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ServiceError::Validation(errors.to_string())
    }
}

impl ServiceError {
    fn kind(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "validation_failed",
            ServiceError::TooLarge(_) => "request_too_large",
            ServiceError::Worker(_) => "internal_error",
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) | ServiceError::TooLarge(_) => StatusCode::BAD_REQUEST,
            ServiceError::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}
