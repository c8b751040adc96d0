//! Routed segments returned by the routing engine.

use super::Coordinate;

/// Error returned when a segment would violate its invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route segment: {reason}")]
pub struct InvalidSegment {
    reason: &'static str,
}

/// A routed path between two points.
///
/// The geometry always has at least two points and the distance and
/// duration are finite and non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSegment {
    geometry: Vec<Coordinate>,
    distance_km: f64,
    duration_s: f64,
}

impl RouteSegment {
    /// Create a segment, validating its invariants.
    pub fn new(
        geometry: Vec<Coordinate>,
        distance_km: f64,
        duration_s: f64,
    ) -> Result<Self, InvalidSegment> {
        if geometry.len() < 2 {
            return Err(InvalidSegment {
                reason: "geometry must have at least two points",
            });
        }
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(InvalidSegment {
                reason: "distance must be a non-negative number",
            });
        }
        if !duration_s.is_finite() || duration_s < 0.0 {
            return Err(InvalidSegment {
                reason: "duration must be a non-negative number",
            });
        }

        Ok(Self {
            geometry,
            distance_km,
            duration_s,
        })
    }

    /// Ordered points of the path, latitude first.
    pub fn geometry(&self) -> &[Coordinate] {
        &self.geometry
    }

    /// Routed distance in kilometres.
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Routed duration in seconds.
    pub fn duration_s(&self) -> f64 {
        self.duration_s
    }

    /// Join two segments end to end.
    ///
    /// Geometries are concatenated as-is (the shared joint point appears
    /// twice); distances and durations are summed.
    pub fn concat(&self, next: &RouteSegment) -> RouteSegment {
        let mut geometry = Vec::with_capacity(self.geometry.len() + next.geometry.len());
        geometry.extend_from_slice(&self.geometry);
        geometry.extend_from_slice(&next.geometry);

        RouteSegment {
            geometry,
            distance_km: self.distance_km + next.distance_km,
            duration_s: self.duration_s + next.duration_s,
        }
    }
}
