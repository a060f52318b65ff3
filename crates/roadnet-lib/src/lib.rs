//! Road network library entry points.
//!
//! This crate models a road network as a weighted undirected graph and
//! answers two read-only queries over it: the cheapest path between two
//! locations (Dijkstra) and the cheapest open tour visiting every location
//! once (exhaustive search). Higher-level consumers (CLI, renderers) should
//! only depend on the functions exported here instead of reimplementing
//! behavior.
//!
//! A graph is built once and never mutated by queries, so a shared
//! `&Graph` can serve queries from several threads at the same time.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;
pub mod tour;

pub use error::{Error, Result};
pub use graph::{Edge, Graph, LocationId};
pub use network::{
    load_network, load_network_or_default, LocationRecord, Position, RoadNetwork, RoadRecord,
};
pub use output::{ConnectionRow, ConnectionTable, RouteRenderMode, RouteStep, RouteSummary};
pub use path::{find_shortest_path, Route};
pub use routing::{
    plan_route, QueryKind, QueryOptions, RoutePlan, RouteQueries, RouteRequest,
    DEFAULT_AVERAGE_SPEED, DEFAULT_TOUR_LOCATION_LIMIT,
};
pub use tour::{find_tour, find_tour_with_stats, TourStats, TourStrategy};
