use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::routing::{QueryKind, RoutePlan};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    /// Header, one numbered line per step, then totals.
    PlainText,
    /// Arrow-joined path followed by a single totals line.
    Basic,
}

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub name: String,
    /// Distance of the road leading into this step; zero for the first step.
    pub leg_distance: f64,
    pub cumulative_distance: f64,
}

/// Structured representation of a query answer that consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub kind: QueryKind,
    pub origin: String,
    /// Requested destination, or the final stop of a tour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub reachable: bool,
    pub hops: usize,
    pub unit: String,
    /// Total distance; absent when unreachable.
    pub distance: Option<f64>,
    /// Derived travel time in hours; absent when unreachable.
    pub travel_hours: Option<f64>,
    pub average_speed: f64,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with resolved location names.
    pub fn from_plan(graph: &Graph, plan: &RoutePlan, unit: &str) -> Result<Self> {
        let name_of = |id| {
            graph
                .name(id)
                .map(str::to_string)
                .ok_or(Error::UnknownLocationId { id })
        };

        let mut steps = Vec::with_capacity(plan.route.steps.len());
        let mut cumulative = 0.0;
        let mut previous = None;
        for (index, &id) in plan.route.steps.iter().enumerate() {
            let leg = match previous {
                Some(from) => graph
                    .distance_between(from, id)
                    .ok_or(Error::UnknownLocationId { id })?,
                None => 0.0,
            };
            cumulative += leg;
            steps.push(RouteStep {
                index,
                name: name_of(id)?,
                leg_distance: leg,
                cumulative_distance: cumulative,
            });
            previous = Some(id);
        }

        let target = match plan.target {
            Some(id) => Some(name_of(id)?),
            None => steps.last().map(|step| step.name.clone()),
        };
        let reachable = plan.is_reachable();

        Ok(Self {
            kind: plan.kind,
            origin: name_of(plan.origin)?,
            target,
            reachable,
            hops: plan.hop_count(),
            unit: unit.to_string(),
            distance: reachable.then_some(plan.cost()),
            travel_hours: reachable.then_some(plan.travel_hours),
            average_speed: plan.average_speed,
            steps,
        })
    }

    /// Serialise the summary as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::Basic => self.render_basic(),
        }
    }

    fn header(&self) -> String {
        match (&self.kind, &self.target) {
            (QueryKind::ShortestPath, Some(target)) => {
                format!("{}: {} → {}", self.kind.label(), self.origin, target)
            }
            _ => format!("{} from {}", self.kind.label(), self.origin),
        }
    }

    fn totals(&self) -> String {
        match (self.distance, self.travel_hours) {
            (Some(distance), Some(hours)) => format!(
                "Total distance: {} {unit}, estimated time: {:.2} h (average {} {unit}/h)",
                distance,
                hours,
                self.average_speed,
                unit = self.unit
            ),
            _ => "No route visits the requested locations.".to_string(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{} ({} hops)", self.header(), self.hops);
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "{:>3}: {:<12} {:>8} {}",
                step.index, step.name, step.cumulative_distance, self.unit
            );
        }
        let _ = writeln!(buffer, "{}", self.totals());
        buffer
    }

    fn render_basic(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{}", self.header());
        if self.reachable {
            let joined = self
                .steps
                .iter()
                .map(|step| step.name.as_str())
                .collect::<Vec<_>>()
                .join(" → ");
            let _ = writeln!(buffer, "Path: {joined}");
        }
        let _ = writeln!(buffer, "{}", self.totals());
        buffer
    }
}

/// Adjacency listing of every location and its roads.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConnectionTable {
    pub unit: String,
    pub rows: Vec<ConnectionRow>,
}

/// One location and its neighbours in insertion order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConnectionRow {
    pub location: String,
    pub neighbours: Vec<(String, f64)>,
}

impl ConnectionTable {
    pub fn from_graph(graph: &Graph, unit: &str) -> Self {
        let rows = graph
            .location_ids()
            .filter_map(|id| {
                let location = graph.name(id)?.to_string();
                let neighbours = graph
                    .neighbours(id)
                    .iter()
                    .filter_map(|edge| Some((graph.name(edge.target)?.to_string(), edge.distance)))
                    .collect();
                Some(ConnectionRow {
                    location,
                    neighbours,
                })
            })
            .collect();

        Self {
            unit: unit.to_string(),
            rows,
        }
    }

    /// `Location => Neighbour (d unit), ...`, one line per location.
    pub fn render(&self) -> String {
        let mut buffer = String::new();
        for row in &self.rows {
            let joined = row
                .neighbours
                .iter()
                .map(|(name, distance)| format!("{name} ({distance} {})", self.unit))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(buffer, "{} => {}", row.location, joined);
        }
        buffer
    }
}
