use serde::{Deserialize, Serialize};

use crate::core::BatchSummary;
use crate::models::domain::TicketWithMatches;

/// Response for the single-ticket ranking endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub result: TicketWithMatches,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the batch endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResponse {
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub results: Vec<TicketWithMatches>,
    pub summary: BatchSummary,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
