#![allow(dead_code)]

use std::path::PathBuf;

use roadnet_lib::{Graph, LocationId};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// A, B, C with roads A-B 5, B-C 3, A-C 20.
pub fn triangle() -> Graph {
    let mut graph = Graph::new();
    for name in ["A", "B", "C"] {
        graph.add_location(name);
    }
    graph.add_edge("A", "B", 5.0).expect("valid road");
    graph.add_edge("B", "C", 3.0).expect("valid road");
    graph.add_edge("A", "C", 20.0).expect("valid road");
    graph
}

/// A, B, C where only A-B is connected.
pub fn disconnected() -> Graph {
    let mut graph = Graph::new();
    for name in ["A", "B", "C"] {
        graph.add_location(name);
    }
    graph.add_edge("A", "B", 1.0).expect("valid road");
    graph
}

/// Deterministic pseudo-random graph with `size` locations named `L0..`.
///
/// Roughly `density` percent of the possible roads are present, with
/// distances between 1 and 50.
pub fn scrambled(size: usize, density: u64, seed: u64) -> Graph {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        state >> 33
    };

    let mut graph = Graph::new();
    for index in 0..size {
        graph.add_location(format!("L{index}"));
    }
    for a in 0..size {
        for b in (a + 1)..size {
            if next() % 100 < density {
                let distance = (next() % 50 + 1) as f64;
                graph
                    .add_edge(&format!("L{a}"), &format!("L{b}"), distance)
                    .expect("valid road");
            }
        }
    }
    graph
}

/// Sum of road distances along `steps`, or `None` if a road is missing.
pub fn walk_cost(graph: &Graph, steps: &[LocationId]) -> Option<f64> {
    steps
        .windows(2)
        .map(|pair| graph.distance_between(pair[0], pair[1]))
        .sum()
}

/// Cheapest Hamiltonian path cost from `start`, by trying every ordering.
pub fn brute_force_tour_cost(graph: &Graph, start: LocationId) -> f64 {
    let others: Vec<LocationId> = graph.location_ids().filter(|&id| id != start).collect();
    let mut best = f64::INFINITY;
    let mut order = others;
    permute(&mut order, 0, &mut |candidate: &[LocationId]| {
        let mut steps = vec![start];
        steps.extend_from_slice(candidate);
        if let Some(cost) = walk_cost(graph, &steps) {
            best = best.min(cost);
        }
    });
    best
}

fn permute(items: &mut [LocationId], k: usize, visit: &mut dyn FnMut(&[LocationId])) {
    if k == items.len() {
        visit(items);
        return;
    }
    for i in k..items.len() {
        items.swap(k, i);
        permute(items, k + 1, visit);
        items.swap(k, i);
    }
}

/// Single-source distances by repeated relaxation, independent of Dijkstra.
pub fn relaxed_distances(graph: &Graph, origin: LocationId) -> Vec<f64> {
    let mut distances = vec![f64::INFINITY; graph.len()];
    distances[origin] = 0.0;
    for _ in 0..graph.len() {
        let mut changed = false;
        for (a, b, distance) in graph.edges() {
            if distances[a] + distance < distances[b] {
                distances[b] = distances[a] + distance;
                changed = true;
            }
            if distances[b] + distance < distances[a] {
                distances[a] = distances[b] + distance;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    distances
}
