use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, LocationId};
use crate::path::{find_shortest_path, Route};
use crate::tour::{find_tour, TourStrategy};

/// Average travel speed used for time estimates, in distance units per hour.
pub const DEFAULT_AVERAGE_SPEED: f64 = 60.0;

/// Largest graph the tour query accepts unless the caller lifts the limit.
///
/// Enumeration is factorial: 12 locations means 11! orderings in the worst case.
pub const DEFAULT_TOUR_LOCATION_LIMIT: usize = 12;

/// Supported query kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    /// Dijkstra shortest path between two locations.
    ShortestPath,
    /// Exhaustive open tour over every location.
    Tour,
}

impl QueryKind {
    /// Human-readable label shown in textual renderings.
    pub fn label(self) -> &'static str {
        match self {
            QueryKind::ShortestPath => "Shortest path",
            QueryKind::Tour => "Optimal tour",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            QueryKind::ShortestPath => "shortest_path",
            QueryKind::Tour => "tour",
        };
        f.write_str(value)
    }
}

/// Tunables shared by both queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryOptions {
    /// Speed used to derive travel time from distance.
    pub average_speed: f64,
    /// Maximum number of locations accepted by the tour query; `None` disables the guard.
    pub tour_location_limit: Option<usize>,
    pub tour_strategy: TourStrategy,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            average_speed: DEFAULT_AVERAGE_SPEED,
            tour_location_limit: Some(DEFAULT_TOUR_LOCATION_LIMIT),
            tour_strategy: TourStrategy::default(),
        }
    }
}

impl QueryOptions {
    /// Reject speeds that cannot produce a meaningful travel time.
    pub fn validate(&self) -> Result<()> {
        if !self.average_speed.is_finite() || self.average_speed <= 0.0 {
            return Err(Error::InvalidAverageSpeed {
                speed: self.average_speed,
            });
        }
        Ok(())
    }

    /// Travel time in hours for a given distance.
    pub fn travel_hours(&self, cost: f64) -> f64 {
        cost / self.average_speed
    }
}

/// High-level query request naming locations as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub kind: QueryKind,
    pub origin: String,
    pub target: Option<String>,
}

impl RouteRequest {
    /// Shortest path between two named locations.
    pub fn shortest_path(origin: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            kind: QueryKind::ShortestPath,
            origin: origin.into(),
            target: Some(target.into()),
        }
    }

    /// Optimal tour starting at a named location.
    pub fn tour(origin: impl Into<String>) -> Self {
        Self {
            kind: QueryKind::Tour,
            origin: origin.into(),
            target: None,
        }
    }
}

/// Answer to a single query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub kind: QueryKind,
    pub origin: LocationId,
    /// Requested destination; tours have none.
    pub target: Option<LocationId>,
    pub route: Route,
    /// Derived estimate, infinite when the route is unreachable.
    pub travel_hours: f64,
    pub average_speed: f64,
}

impl RoutePlan {
    /// Number of roads in the route.
    pub fn hop_count(&self) -> usize {
        self.route.hop_count()
    }

    /// Whether a path was found.
    pub fn is_reachable(&self) -> bool {
        self.route.is_reachable()
    }

    /// Total distance of the route.
    pub fn cost(&self) -> f64 {
        self.route.cost
    }
}

/// Read-only query surface over one graph.
#[derive(Debug, Clone, Copy)]
pub struct RouteQueries<'g> {
    graph: &'g Graph,
    options: QueryOptions,
}

impl<'g> RouteQueries<'g> {
    /// Wrap a fully built graph, validating the options up front.
    pub fn new(graph: &'g Graph, options: QueryOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { graph, options })
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    /// Cheapest path between two named locations.
    pub fn shortest_path(&self, origin: &str, target: &str) -> Result<RoutePlan> {
        let origin_id = self.graph.resolve(origin)?;
        let target_id = self.graph.resolve(target)?;

        debug!(origin, target, "running shortest path query");
        let route = find_shortest_path(self.graph, origin_id, target_id)?;
        Ok(self.plan(QueryKind::ShortestPath, origin_id, Some(target_id), route))
    }

    /// Cheapest open tour over every location, starting at `start`.
    ///
    /// With the default options graphs of more than
    /// [`DEFAULT_TOUR_LOCATION_LIMIT`] (12) locations are refused with
    /// `TourTooLarge`; set `tour_location_limit` to `None` to lift the guard.
    pub fn optimal_tour(&self, start: &str) -> Result<RoutePlan> {
        let start_id = self.graph.resolve(start)?;

        if let Some(limit) = self.options.tour_location_limit {
            if self.graph.len() > limit {
                return Err(Error::TourTooLarge {
                    locations: self.graph.len(),
                    limit,
                });
            }
        }

        debug!(start, locations = self.graph.len(), "running tour query");
        let route = find_tour(self.graph, start_id, self.options.tour_strategy)?;
        Ok(self.plan(QueryKind::Tour, start_id, None, route))
    }

    fn plan(
        &self,
        kind: QueryKind,
        origin: LocationId,
        target: Option<LocationId>,
        route: Route,
    ) -> RoutePlan {
        RoutePlan {
            kind,
            origin,
            target,
            travel_hours: self.options.travel_hours(route.cost),
            average_speed: self.options.average_speed,
            route,
        }
    }
}

/// Compute a plan for the request using the given options.
pub fn plan_route(
    graph: &Graph,
    request: &RouteRequest,
    options: QueryOptions,
) -> Result<RoutePlan> {
    let queries = RouteQueries::new(graph, options)?;
    match (request.kind, request.target.as_deref()) {
        (QueryKind::ShortestPath, Some(target)) => queries.shortest_path(&request.origin, target),
        // A shortest path without a destination is the trivial path to itself.
        (QueryKind::ShortestPath, None) => queries.shortest_path(&request.origin, &request.origin),
        (QueryKind::Tour, _) => queries.optimal_tour(&request.origin),
    }
}
