use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Dense identifier assigned to each location in registration order.
pub type LocationId = usize;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Undirected road as seen from one of its endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: LocationId,
    pub distance: f64,
}

/// Weighted undirected road network.
///
/// Locations are stored by index; every neighbour list entry `u -> v` has a
/// mirror entry `v -> u` carrying the same distance. Locations without roads
/// keep an empty neighbour list.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    names: Vec<String>,
    index: HashMap<String, LocationId>,
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location, returning its identifier. Re-adding is a no-op.
    pub fn add_location(&mut self, name: impl Into<String>) -> LocationId {
        let name = name.into();
        if let Some(&id) = self.index.get(&name) {
            return id;
        }

        let id = self.names.len();
        debug!(location = %name, id, "registering location");
        self.index.insert(name.clone(), id);
        self.names.push(name);
        self.adjacency.push(Vec::new());
        id
    }

    /// Connect two locations with a road of the given distance.
    ///
    /// Endpoints that were not registered yet are added. A second road
    /// between the same pair replaces the first in both directions.
    pub fn add_edge(&mut self, from: &str, to: &str, distance: f64) -> Result<()> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(Error::InvalidEdgeWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight: distance,
            });
        }
        if from == to {
            return Err(Error::SelfLoop {
                location: from.to_string(),
            });
        }

        let a = self.add_location(from);
        let b = self.add_location(to);
        if let Some(previous) = self.distance_between(a, b) {
            if previous != distance {
                warn!(from, to, previous, distance, "overwriting road distance");
            }
        }

        self.upsert(a, b, distance);
        self.upsert(b, a, distance);
        debug!(from, to, distance, "registered road");
        Ok(())
    }

    fn upsert(&mut self, from: LocationId, to: LocationId, distance: f64) {
        let edges = &mut self.adjacency[from];
        match edges.iter_mut().find(|edge| edge.target == to) {
            Some(existing) => existing.distance = distance,
            None => edges.push(Edge {
                target: to,
                distance,
            }),
        }
    }

    /// Number of registered locations.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no location has been registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Exact-name lookup.
    pub fn location_id(&self, name: &str) -> Option<LocationId> {
        self.index.get(name).copied()
    }

    /// Resolve a location name to its identifier.
    ///
    /// Names must match exactly; unknown names fail with `UnknownLocation`
    /// and up to three close matches as suggestions.
    pub fn resolve(&self, name: &str) -> Result<LocationId> {
        self.location_id(name).ok_or_else(|| Error::UnknownLocation {
            name: name.to_string(),
            suggestions: self.fuzzy_location_matches(name, 3),
        })
    }

    /// Name of a location identifier.
    pub fn name(&self, id: LocationId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// All registered location names in registration order.
    pub fn locations(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    /// All location identifiers in registration order.
    pub fn location_ids(&self) -> std::ops::Range<LocationId> {
        0..self.names.len()
    }

    /// Return the neighbours for a given location identifier.
    pub fn neighbours(&self, id: LocationId) -> &[Edge] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Neighbour names and distances for a named location, in insertion order.
    pub fn neighbours_of(&self, name: &str) -> Result<Vec<(&str, f64)>> {
        let id = self.resolve(name)?;

        Ok(self
            .neighbours(id)
            .iter()
            .map(|edge| (self.names[edge.target].as_str(), edge.distance))
            .collect())
    }

    /// Distance of the road between two locations, if one exists.
    pub fn distance_between(&self, a: LocationId, b: LocationId) -> Option<f64> {
        self.neighbours(a)
            .iter()
            .find(|edge| edge.target == b)
            .map(|edge| edge.distance)
    }

    /// Every undirected road exactly once, as `(lower id, higher id, distance)`.
    pub fn edges(&self) -> impl Iterator<Item = (LocationId, LocationId, f64)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| {
                edges
                    .iter()
                    .filter(move |edge| edge.target > from)
                    .map(move |edge| (from, edge.target, edge.distance))
            })
    }

    /// Up to `limit` registered names similar to `name`, best match first.
    pub fn fuzzy_location_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let folded = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .names
            .iter()
            .map(|candidate| {
                let score = strsim::jaro_winkler(&folded, &candidate.to_lowercase());
                (score, candidate.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| compare_score(b.0, a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }

    pub(crate) fn ensure_id(&self, id: LocationId) -> Result<()> {
        if id < self.names.len() {
            Ok(())
        } else {
            Err(Error::UnknownLocationId { id })
        }
    }
}

fn compare_score(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
