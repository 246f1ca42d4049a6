// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{City, Location, MatchingParticipant, Participant, Project};
pub use requests::{CityPayload, MatchParticipantsRequest};
pub use responses::{ErrorResponse, HealthResponse, MatchParticipantsResponse};
