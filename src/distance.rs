use crate::domain::GeoLocation;

pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;
pub const EARTH_RADIUS_MILES: f64 = 3963.2;
pub const METERS_PER_MILE: f64 = 1609.34;

/// Returns the great-circle distance between two locations on a sphere with the given radius, using the haversine
/// formula. The result is in the unit of `radius`.
pub fn haversine(from: &GeoLocation, to: &GeoLocation, radius: f64) -> f64 {
    let phi1 = from.latitude.to_radians();
    let phi2 = to.latitude.to_radians();
    let delta_phi = (to.latitude - from.latitude).to_radians();
    let delta_lambda = (to.longitude - from.longitude).to_radians();

    let a = ((delta_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2)).clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    radius * c
}

pub fn distance_meters(from: &GeoLocation, to: &GeoLocation) -> f64 {
    haversine(from, to, EARTH_RADIUS_METERS)
}

/// Miles computed directly on a sphere of 3963.2 miles. This differs slightly from converting
/// [`distance_meters`] with [`meters_to_miles`], which is what the report uses.
pub fn distance_miles(from: &GeoLocation, to: &GeoLocation) -> f64 {
    haversine(from, to, EARTH_RADIUS_MILES)
}

pub fn meters_to_miles(meters: f64) -> f64 {
    meters / METERS_PER_MILE
}
