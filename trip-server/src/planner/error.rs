//! Planner error types.

use std::fmt;

use crate::airports::AirportError;
use crate::routing::RoutingError;

/// Whether a failed sub-computation sinks its planner or is just skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Necessity {
    /// Failure aborts the planner's whole contribution.
    Mandatory,
    /// Failure only omits the corresponding option.
    Optional,
}

/// A routed leg the planners request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leg {
    /// Origin to destination by car; baseline of the terrestrial plan.
    Driving,
    /// Origin to destination by bike.
    Cycling,
    /// Origin to destination on foot.
    Walking,
    /// Origin to departure airport.
    ToAirport,
    /// Arrival airport to destination.
    FromAirport,
    /// Arrival airport to the Manhattan midpoint.
    FromAirportToMidpoint,
    /// Manhattan midpoint to destination.
    MidpointToDestination,
}

impl Leg {
    pub fn necessity(self) -> Necessity {
        match self {
            Leg::Cycling | Leg::Walking => Necessity::Optional,
            _ => Necessity::Mandatory,
        }
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Leg::Driving => "driving route",
            Leg::Cycling => "cycling route",
            Leg::Walking => "walking route",
            Leg::ToAirport => "ground leg to departure airport",
            Leg::FromAirport => "ground leg from arrival airport",
            Leg::FromAirportToMidpoint => "ground leg from arrival airport to midpoint",
            Leg::MidpointToDestination => "ground leg from midpoint to destination",
        })
    }
}

/// Which end of the trip an airport lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endpoint::Start => "start",
            Endpoint::End => "end",
        })
    }
}

/// Error from trip planning.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// A routed leg could not be obtained
    #[error("{leg} failed: {source}")]
    Routing {
        leg: Leg,
        #[source]
        source: RoutingError,
    },

    /// No usable airport near one of the endpoints
    #[error("no airport near the {endpoint} point: {source}")]
    NoAirport {
        endpoint: Endpoint,
        #[source]
        source: AirportError,
    },

    /// Both endpoints resolve to the same airport
    #[error("start and end share the same nearest airport: {name}")]
    SameAirport { name: String },

    /// Every attempted planner failed
    #[error("no route could be computed for the selected points")]
    NoOptions,
}

impl PlanError {
    pub(crate) fn routing(leg: Leg) -> impl FnOnce(RoutingError) -> PlanError {
        move |source| PlanError::Routing { leg, source }
    }

    /// How severe this failure is for the planner that raised it.
    pub fn necessity(&self) -> Necessity {
        match self {
            PlanError::Routing { leg, .. } => leg.necessity(),
            _ => Necessity::Mandatory,
        }
    }
}
