use crate::models::Location;

/// Earth's radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two locations in kilometers
///
/// Symmetric, zero for identical coordinates, never negative. Coordinate
/// ranges are not validated.
#[inline]
pub fn haversine_distance(from: &Location, to: &Location) -> f64 {
    let from_lat_rad = from.latitude.to_radians();
    let to_lat_rad = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + from_lat_rad.cos() * to_lat_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
