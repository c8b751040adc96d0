//! Geographic coordinate type.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when constructing an out-of-range coordinate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinate ({latitude}, {longitude}): {reason}")]
pub struct InvalidCoordinate {
    latitude: f64,
    longitude: f64,
    reason: &'static str,
}

/// A point on the Earth's surface in decimal degrees.
///
/// Any `Coordinate` has a latitude in `[-90, 90]` and a longitude in
/// `[-180, 180]`. On the wire it is a `[lat, lon]` pair, latitude first,
/// which is the order the map front-end expects.
///
/// # Examples
///
/// ```
/// use trip_server::domain::Coordinate;
///
/// let cdmx = Coordinate::new(19.4326, -99.1332).unwrap();
/// assert_eq!(cdmx.latitude, 19.4326);
///
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// assert!(Coordinate::new(0.0, -180.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, validating both axes.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        let invalid = |reason| InvalidCoordinate {
            latitude,
            longitude,
            reason,
        };

        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(invalid("must be finite numbers"));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(invalid("latitude must be within [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(invalid("longitude must be within [-180, 180]"));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a coordinate from a GeoJSON-style `[lon, lat]` position.
    pub fn from_lon_lat(position: [f64; 2]) -> Result<Self, InvalidCoordinate> {
        Self::new(position[1], position[0])
    }

    /// Returns the coordinate as a `[lat, lon]` pair.
    pub fn to_lat_lon(self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

impl TryFrom<[f64; 2]> for Coordinate {
    type Error = InvalidCoordinate;

    fn try_from(pair: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(pair[0], pair[1])
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_lat_lon().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Coordinate::new(90.01, 0.0).is_err());
        assert!(Coordinate::new(-90.01, 0.0).is_err());
        assert!(Coordinate::new(0.0, 180.01).is_err());
        assert!(Coordinate::new(0.0, -180.01).is_err());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn lon_lat_is_reordered() {
        let c = Coordinate::from_lon_lat([-99.1332, 19.4326]).unwrap();
        assert_eq!(c.latitude, 19.4326);
        assert_eq!(c.longitude, -99.1332);
    }

    #[test]
    fn serializes_as_lat_lon_pair() {
        let c = Coordinate::new(19.5, -99.25).unwrap();
        assert_eq!(serde_json::to_string(&c).unwrap(), "[19.5,-99.25]");
    }

    #[test]
    fn error_display() {
        let err = Coordinate::new(100.0, 0.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid coordinate (100, 0): latitude must be within [-90, 90]"
        );
    }
}
