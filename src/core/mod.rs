// Core algorithm exports
pub mod distance;
pub mod matcher;
pub mod scoring;

pub use distance::{haversine_distance, EARTH_RADIUS_KM};
pub use matcher::{MatchError, Matcher, DEFAULT_MAX_DISTANCE_KM};
pub use scoring::matching_score;
