//! Geolocation generator for persisted restaurants.

use rand::Rng;
use seed_core::GeoPoint;

/// Latitude bounds of the continental United States.
pub const LATITUDE_RANGE: (f64, f64) = (24.396308, 49.384358);

/// Longitude bounds of the continental United States.
pub const LONGITUDE_RANGE: (f64, f64) = (-125.0, -66.93457);

/// Generate a random point inside the continental United States bounding box.
pub fn geo_point<R: Rng>(rng: &mut R) -> GeoPoint {
    let latitude = rng.gen_range(LATITUDE_RANGE.0..=LATITUDE_RANGE.1);
    let longitude = rng.gen_range(LONGITUDE_RANGE.0..=LONGITUDE_RANGE.1);
    GeoPoint::new(longitude, latitude)
}
