//! Panel Match - participant matching service for project recruitment
//!
//! This library ranks candidate participants against a project's target
//! cities and desired industry/job-title criteria. Each city is queried
//! concurrently, participants are filtered by distance, scored, and the
//! merged results are returned ranked by score.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{haversine_distance, matching_score, MatchError, Matcher};
pub use models::{City, Location, MatchingParticipant, Participant, Project};
