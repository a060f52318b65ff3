use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::graph::{Graph, LocationId};

/// Cost and ordered locations of a path through the graph.
///
/// An unreachable result carries an infinite cost and no steps; this is a
/// normal outcome rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub cost: f64,
    pub steps: Vec<LocationId>,
}

impl Route {
    /// Result used when no path satisfies the query.
    pub fn unreachable() -> Self {
        Self {
            cost: f64::INFINITY,
            steps: Vec::new(),
        }
    }

    /// Whether the query produced a path.
    pub fn is_reachable(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Number of roads travelled.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Run Dijkstra's algorithm to find the lowest-cost path from `origin` to
/// `target`.
///
/// Frontier entries are discarded lazily: a location may be queued several
/// times and only its first pop is kept.
pub fn find_shortest_path(graph: &Graph, origin: LocationId, target: LocationId) -> Result<Route> {
    graph.ensure_id(origin)?;
    graph.ensure_id(target)?;

    if origin == target {
        return Ok(Route {
            cost: 0.0,
            steps: vec![origin],
        });
    }

    let mut parents: Vec<Option<LocationId>> = vec![None; graph.len()];
    let mut finalized = vec![false; graph.len()];
    let mut queue = BinaryHeap::new();
    let mut settled = 0usize;

    queue.push(QueueEntry::new(origin, 0.0, None));

    while let Some(entry) = queue.pop() {
        if finalized[entry.node] {
            continue;
        }
        finalized[entry.node] = true;
        parents[entry.node] = entry.parent;
        settled += 1;

        if entry.node == target {
            let steps = reconstruct_path(&parents, origin, target);
            debug!(origin, target, cost = entry.cost.0, settled, "shortest path found");
            return Ok(Route {
                cost: entry.cost.0,
                steps,
            });
        }

        for edge in graph.neighbours(entry.node) {
            if finalized[edge.target] {
                continue;
            }
            queue.push(QueueEntry::new(
                edge.target,
                entry.cost.0 + edge.distance,
                Some(entry.node),
            ));
        }
    }

    debug!(origin, target, settled, "target unreachable");
    Ok(Route::unreachable())
}

fn reconstruct_path(
    parents: &[Option<LocationId>],
    origin: LocationId,
    target: LocationId,
) -> Vec<LocationId> {
    let mut path = Vec::new();
    let mut current = Some(target);
    while let Some(node) = current {
        path.push(node);
        if node == origin {
            break;
        }
        current = parents[node];
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: LocationId,
    cost: FloatOrd,
    parent: Option<LocationId>,
}

impl QueueEntry {
    fn new(node: LocationId, cost: f64, parent: Option<LocationId>) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            parent,
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
