//! Great-circle geometry.

use super::Coordinate;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two points, in kilometres.
///
/// Symmetric, and zero for identical points.
///
/// # Examples
///
/// ```
/// use trip_server::domain::{Coordinate, distance_km};
///
/// let cdmx = Coordinate::new(19.4326, -99.1332).unwrap();
/// let puebla = Coordinate::new(19.0414, -98.2063).unwrap();
///
/// let d = distance_km(cdmx, puebla);
/// assert!((d - 105.0).abs() < 10.0);
/// ```
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);

    // Clamp guards against h creeping past 1.0 for antipodal points.
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Round a distance to two decimal places (ten-metre resolution).
pub fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}
