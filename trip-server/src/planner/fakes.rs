//! In-memory collaborators for planner tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::airports::AirportError;
use crate::domain::{Airport, Coordinate, RouteSegment, distance_km, round_km};
use crate::routing::{Profile, RoutingError};

use super::provider::{AirportProvider, RouteProvider};

pub fn coord(lat: f64, lon: f64) -> Coordinate {
    Coordinate::new(lat, lon).unwrap()
}

pub fn airport(name: &str, code: &str, at: Coordinate) -> Airport {
    Airport {
        name: name.to_string(),
        carrier_code: code.to_string(),
        coordinate: at,
        distance_km: 0.0,
    }
}

/// Router that answers from rules instead of a routing engine.
///
/// Unless told otherwise, every route is a four-point line whose length is
/// the great-circle distance stretched by 25%, driven at 60 km/h.
#[derive(Default)]
pub struct FakeRouter {
    profile_distances: HashMap<Profile, f64>,
    leg_distances: Vec<(Coordinate, Coordinate, f64)>,
    failing_profiles: HashSet<Profile>,
    failing_destinations: Vec<Coordinate>,
    calls: Mutex<Vec<(Coordinate, Coordinate, Profile)>>,
}

impl FakeRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every route with this profile has this length.
    pub fn with_distance(mut self, profile: Profile, km: f64) -> Self {
        self.profile_distances.insert(profile, km);
        self
    }

    /// The route between exactly these points has this length.
    pub fn with_leg_distance(mut self, from: Coordinate, to: Coordinate, km: f64) -> Self {
        self.leg_distances.push((from, to, km));
        self
    }

    pub fn failing(mut self, profile: Profile) -> Self {
        self.failing_profiles.insert(profile);
        self
    }

    /// Any route ending at `destination` fails.
    pub fn failing_to(mut self, destination: Coordinate) -> Self {
        self.failing_destinations.push(destination);
        self
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_for(&self, profile: Profile) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, _, p)| *p == profile)
            .count()
    }

    /// Calls whose origin is exactly `from`.
    pub fn calls_from(&self, from: Coordinate) -> Vec<(Coordinate, Coordinate, Profile)> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(o, _, _)| *o == from)
            .copied()
            .collect()
    }

    fn answer(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        profile: Profile,
    ) -> Result<RouteSegment, RoutingError> {
        if self.failing_profiles.contains(&profile) || self.failing_destinations.contains(&destination)
        {
            return Err(RoutingError::NoRoute {
                code: "NoRoute".to_string(),
            });
        }

        let km = self
            .leg_distances
            .iter()
            .find(|(o, d, _)| *o == origin && *d == destination)
            .map(|(_, _, km)| *km)
            .or_else(|| self.profile_distances.get(&profile).copied())
            .unwrap_or_else(|| round_km(distance_km(origin, destination) * 1.25));

        let lerp = |t: f64| Coordinate {
            latitude: origin.latitude + (destination.latitude - origin.latitude) * t,
            longitude: origin.longitude + (destination.longitude - origin.longitude) * t,
        };
        let geometry = vec![origin, lerp(1.0 / 3.0), lerp(2.0 / 3.0), destination];

        Ok(RouteSegment::new(geometry, km, km / 60.0 * 3600.0).unwrap())
    }
}

impl RouteProvider for FakeRouter {
    async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        profile: Profile,
    ) -> Result<RouteSegment, RoutingError> {
        self.calls
            .lock()
            .unwrap()
            .push((origin, destination, profile));
        self.answer(origin, destination, profile)
    }
}

/// Airport lookup answering from a fixed table keyed by query point.
#[derive(Default)]
pub struct FakeAirports {
    airports: Vec<(Coordinate, Airport)>,
    calls: Mutex<usize>,
}

impl FakeAirports {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queries at exactly `point` find `airport`; other points find nothing.
    pub fn with_airport(mut self, point: Coordinate, airport: Airport) -> Self {
        self.airports.push((point, airport));
        self
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl AirportProvider for FakeAirports {
    async fn nearest(&self, point: Coordinate, radius_km: f64) -> Result<Airport, AirportError> {
        *self.calls.lock().unwrap() += 1;

        self.airports
            .iter()
            .find(|(p, _)| *p == point)
            .map(|(_, a)| Airport {
                distance_km: distance_km(point, a.coordinate),
                ..a.clone()
            })
            .filter(|a| a.distance_km <= radius_km)
            .ok_or(AirportError::NotFound { radius_km })
    }
}
