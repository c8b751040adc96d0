//! Ground options between two points.
//!
//! The driving route is the baseline: it sets the distance used for the
//! car and motorcycle estimates and decides whether cycling and walking
//! are worth routing at all.

use std::collections::BTreeMap;

use futures::future::join;
use tracing::{debug, warn};

use crate::domain::{Coordinate, OptionKey, RouteSegment, RouteType, TravelMode, TravelOption};
use crate::routing::Profile;

use super::config::TripConfig;
use super::cost::CostModel;
use super::error::{Leg, PlanError};
use super::provider::RouteProvider;

/// Result of terrestrial planning.
#[derive(Debug, Clone)]
pub struct TerrestrialPlan {
    /// Always holds car and motorcycle; bike and walk when they could be routed.
    pub options: BTreeMap<OptionKey, TravelOption>,

    /// The driving route, for display.
    pub route: RouteSegment,

    /// Axis-aligned sketch of the final approach, for display only.
    pub manhattan_path: [Coordinate; 3],
}

/// Display path from the route's second-to-last point to the destination.
///
/// Goes along the meridian of that point down to the destination's
/// latitude, then along the parallel to the destination. Every
/// [`RouteSegment`] has at least two points, so the second-to-last one
/// always exists.
pub fn manhattan_path(route: &RouteSegment, destination: Coordinate) -> [Coordinate; 3] {
    let geometry = route.geometry();
    let mp = geometry[geometry.len() - 2];
    let corner = Coordinate {
        latitude: destination.latitude,
        longitude: mp.longitude,
    };
    [mp, corner, destination]
}

/// Plans car, motorcycle, bike and walk options.
pub struct TerrestrialPlanner<'a, R: RouteProvider> {
    router: &'a R,
    config: &'a TripConfig,
}

impl<'a, R: RouteProvider> TerrestrialPlanner<'a, R> {
    pub fn new(router: &'a R, config: &'a TripConfig) -> Self {
        Self { router, config }
    }

    /// Plan ground options from `origin` to `destination`.
    ///
    /// Fails only if the driving route fails.
    pub async fn plan(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<TerrestrialPlan, PlanError> {
        let model = CostModel::new(self.config);

        let route = self
            .router
            .route(origin, destination, Profile::Driving)
            .await
            .map_err(PlanError::routing(Leg::Driving))?;
        let distance = route.distance_km();
        debug!(distance_km = distance, "driving route found");

        let mut options = BTreeMap::new();
        options.insert(
            OptionKey::Car,
            model.option(distance, TravelMode::Car, RouteType::Terrestrial),
        );
        options.insert(
            OptionKey::Motorcycle,
            model.option(distance, TravelMode::Motorcycle, RouteType::Terrestrial),
        );

        let manhattan_path = manhattan_path(&route, destination);

        let bike = async {
            if distance > self.config.max_bike_km {
                return None;
            }
            self.human_powered(origin, destination, Leg::Cycling, Profile::Cycling, TravelMode::Bike)
                .await
        };
        let walk = async {
            if distance > self.config.max_walk_km {
                return None;
            }
            self.human_powered(origin, destination, Leg::Walking, Profile::Walking, TravelMode::Walk)
                .await
        };

        let (bike, walk) = join(bike, walk).await;
        if let Some(option) = bike {
            options.insert(OptionKey::Bike, option);
        }
        if let Some(option) = walk {
            options.insert(OptionKey::Walk, option);
        }

        Ok(TerrestrialPlan {
            options,
            route,
            manhattan_path,
        })
    }

    /// Route an optional bike or walk leg; failures only omit the option.
    async fn human_powered(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        leg: Leg,
        profile: Profile,
        mode: TravelMode,
    ) -> Option<TravelOption> {
        match self.router.route(origin, destination, profile).await {
            Ok(route) => Some(CostModel::new(self.config).option(
                route.distance_km(),
                mode,
                RouteType::Terrestrial,
            )),
            Err(e) => {
                let err = PlanError::routing(leg)(e);
                warn!(necessity = ?err.necessity(), "omitting option: {err}");
                None
            }
        }
    }
}
