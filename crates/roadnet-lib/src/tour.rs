//! Exhaustive search for the cheapest open tour (Hamiltonian path).
//!
//! Every ordering of the non-start locations is considered, in the same
//! lexicographic order a permutation generator over registration order
//! yields, and the first ordering with the lowest cost wins. The running
//! time grows as `(n - 1)!` in the number of locations: a dozen locations is
//! practical, twenty is not. No heuristic is substituted at any size; callers
//! that need a guard use [`crate::QueryOptions::tour_location_limit`].
//!
//! Two shortcuts keep the search exact:
//! - an ordering is dropped at the first missing road;
//! - a partial ordering whose cost already reaches the best complete cost is
//!   dropped, since non-negative distances can only grow it.

use std::cmp::Ordering;

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::graph::{Graph, LocationId};
use crate::path::Route;

/// Execution strategy for tour enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TourStrategy {
    /// Single-threaded depth-first enumeration.
    Sequential,
    /// One rayon task per choice of second location, reduced at the end.
    #[default]
    Parallel,
}

/// Counters describing how much of the permutation space was visited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TourStats {
    pub permutations_completed: u64,
    pub branches_pruned: u64,
}

impl TourStats {
    fn merge(self, other: TourStats) -> TourStats {
        TourStats {
            permutations_completed: self.permutations_completed + other.permutations_completed,
            branches_pruned: self.branches_pruned + other.branches_pruned,
        }
    }
}

/// Find the minimum-cost path from `start` that visits every location once.
pub fn find_tour(graph: &Graph, start: LocationId, strategy: TourStrategy) -> Result<Route> {
    find_tour_with_stats(graph, start, strategy).map(|(route, _)| route)
}

/// Same as [`find_tour`], also returning enumeration counters.
pub fn find_tour_with_stats(
    graph: &Graph,
    start: LocationId,
    strategy: TourStrategy,
) -> Result<(Route, TourStats)> {
    graph.ensure_id(start)?;

    let matrix = DistanceMatrix::from_graph(graph);
    let others: Vec<LocationId> = graph.location_ids().filter(|&id| id != start).collect();

    let (best, stats) = match strategy {
        TourStrategy::Sequential => search_sequential(&matrix, start, &others),
        TourStrategy::Parallel => search_parallel(&matrix, start, &others),
    };

    debug!(
        start,
        locations = graph.len(),
        permutations = stats.permutations_completed,
        pruned = stats.branches_pruned,
        ?strategy,
        "tour search finished"
    );

    let route = match best {
        Some(candidate) => Route {
            cost: candidate.cost,
            steps: candidate.steps,
        },
        None => Route::unreachable(),
    };
    Ok((route, stats))
}

fn search_sequential(
    matrix: &DistanceMatrix,
    start: LocationId,
    others: &[LocationId],
) -> (Option<Candidate>, TourStats) {
    let mut search = Search::new(matrix, start, others);
    search.descend(start, 0.0);
    search.finish()
}

fn search_parallel(
    matrix: &DistanceMatrix,
    start: LocationId,
    others: &[LocationId],
) -> (Option<Candidate>, TourStats) {
    if others.len() < 2 {
        return search_sequential(matrix, start, others);
    }

    let results: Vec<(usize, Option<Candidate>, TourStats)> = (0..others.len())
        .into_par_iter()
        .map(|branch| {
            let mut search = Search::new(matrix, start, others);
            let (best, stats) = match matrix.get(start, others[branch]) {
                Some(distance) => {
                    search.enter(branch);
                    search.descend(others[branch], distance);
                    search.finish()
                }
                None => {
                    let stats = TourStats {
                        branches_pruned: 1,
                        ..TourStats::default()
                    };
                    (None, stats)
                }
            };
            (branch, best, stats)
        })
        .collect();

    // Lower branch index wins ties, matching the sequential enumeration order.
    let stats = results
        .iter()
        .fold(TourStats::default(), |acc, (_, _, stats)| acc.merge(*stats));
    let best = results
        .into_iter()
        .filter_map(|(branch, best, _)| best.map(|candidate| (branch, candidate)))
        .min_by(|(a_branch, a), (b_branch, b)| {
            compare_cost(a.cost, b.cost).then_with(|| a_branch.cmp(b_branch))
        })
        .map(|(_, candidate)| candidate);

    (best, stats)
}

fn compare_cost(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

#[derive(Debug, Clone)]
struct Candidate {
    cost: f64,
    steps: Vec<LocationId>,
}

/// Dense `n x n` distance lookup; `None` where no road exists.
struct DistanceMatrix {
    size: usize,
    cells: Vec<Option<f64>>,
}

impl DistanceMatrix {
    fn from_graph(graph: &Graph) -> Self {
        let size = graph.len();
        let mut cells = vec![None; size * size];
        for from in graph.location_ids() {
            for edge in graph.neighbours(from) {
                cells[from * size + edge.target] = Some(edge.distance);
            }
        }
        Self { size, cells }
    }

    fn get(&self, from: LocationId, to: LocationId) -> Option<f64> {
        self.cells[from * self.size + to]
    }
}

/// Depth-first walk over orderings of `others`, in lexicographic position order.
struct Search<'a> {
    matrix: &'a DistanceMatrix,
    others: &'a [LocationId],
    used: Vec<bool>,
    walk: Vec<LocationId>,
    best: Option<Candidate>,
    stats: TourStats,
}

impl<'a> Search<'a> {
    fn new(matrix: &'a DistanceMatrix, start: LocationId, others: &'a [LocationId]) -> Self {
        let mut walk = Vec::with_capacity(others.len() + 1);
        walk.push(start);
        Self {
            matrix,
            others,
            used: vec![false; others.len()],
            walk,
            best: None,
            stats: TourStats::default(),
        }
    }

    fn enter(&mut self, position: usize) {
        self.used[position] = true;
        self.walk.push(self.others[position]);
    }

    fn leave(&mut self, position: usize) {
        self.used[position] = false;
        self.walk.pop();
    }

    fn best_cost(&self) -> f64 {
        self.best
            .as_ref()
            .map(|candidate| candidate.cost)
            .unwrap_or(f64::INFINITY)
    }

    fn descend(&mut self, current: LocationId, cost: f64) {
        if self.walk.len() == self.others.len() + 1 {
            self.stats.permutations_completed += 1;
            if cost < self.best_cost() {
                self.best = Some(Candidate {
                    cost,
                    steps: self.walk.clone(),
                });
            }
            return;
        }

        for position in 0..self.others.len() {
            if self.used[position] {
                continue;
            }
            let next = self.others[position];
            let Some(distance) = self.matrix.get(current, next) else {
                self.stats.branches_pruned += 1;
                continue;
            };
            let next_cost = cost + distance;
            if next_cost >= self.best_cost() {
                self.stats.branches_pruned += 1;
                continue;
            }

            self.enter(position);
            self.descend(next, next_cost);
            self.leave(position);
        }
    }

    fn finish(self) -> (Option<Candidate>, TourStats) {
        (self.best, self.stats)
    }
}
