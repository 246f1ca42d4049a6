use crate::models::domain::MatchingParticipant;
use serde::{Deserialize, Serialize};

/// Response for the match participants endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchParticipantsResponse {
    pub matches: Vec<MatchingParticipant>,
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
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
