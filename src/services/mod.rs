// Service exports
pub mod geocoder;
pub mod repository;

pub use geocoder::{GeocoderError, ReverseGeocoder};
pub use repository::{JsonParticipantRepository, ParticipantRepository, RepositoryError};
