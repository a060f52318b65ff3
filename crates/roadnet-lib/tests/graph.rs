mod common;

use roadnet_lib::{Error, Graph, RoadNetwork};

#[test]
fn roads_are_symmetric_after_any_sequence_of_inserts() {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", 2.0).unwrap();
    graph.add_edge("B", "C", 4.5).unwrap();
    graph.add_edge("C", "A", 1.0).unwrap();
    graph.add_edge("B", "A", 9.0).unwrap();

    for (a, b, distance) in graph.edges() {
        assert_eq!(graph.distance_between(a, b), Some(distance));
        assert_eq!(graph.distance_between(b, a), Some(distance));
    }

    let from_a = graph.neighbours_of("A").unwrap();
    assert_eq!(from_a, vec![("B", 9.0), ("C", 1.0)]);
}

#[test]
fn east_java_graph_is_symmetric() {
    let graph = RoadNetwork::east_java().build_graph().expect("builtin network builds");
    assert_eq!(graph.len(), 10);
    assert_eq!(graph.edges().count(), 30, "Surabaya-Tuban is listed twice");

    for id in graph.location_ids() {
        for edge in graph.neighbours(id) {
            assert_eq!(graph.distance_between(edge.target, id), Some(edge.distance));
        }
    }
}

#[test]
fn isolated_locations_have_no_neighbours() {
    let graph = common::disconnected();
    assert!(graph.neighbours_of("C").unwrap().is_empty());
}

#[test]
fn add_edge_registers_missing_endpoints() {
    let mut graph = Graph::new();
    graph.add_edge("Surabaya", "Malang", 90.0).unwrap();

    let names: Vec<_> = graph.locations().collect();
    assert_eq!(names, vec!["Surabaya", "Malang"]);
}

#[test]
fn invalid_weights_are_rejected() {
    let mut graph = Graph::new();
    for weight in [-1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = graph.add_edge("A", "B", weight).unwrap_err();
        assert!(matches!(err, Error::InvalidEdgeWeight { .. }), "{weight}");
    }
    assert!(graph.is_empty(), "rejected roads must not register endpoints");
}

#[test]
fn zero_weight_roads_are_accepted() {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", 0.0).unwrap();
    assert_eq!(graph.distance_between(0, 1), Some(0.0));
}

#[test]
fn self_loops_are_rejected() {
    let mut graph = Graph::new();
    let err = graph.add_edge("A", "A", 3.0).unwrap_err();
    assert!(matches!(err, Error::SelfLoop { ref location } if location == "A"));
}

#[test]
fn neighbours_of_unknown_location_fails() {
    let graph = common::triangle();
    let err = graph.neighbours_of("D").unwrap_err();
    assert!(matches!(err, Error::UnknownLocation { ref name, .. } if name == "D"));
}

#[test]
fn resolve_requires_exact_names() {
    let graph = RoadNetwork::east_java().build_graph().unwrap();
    assert!(graph.resolve("Banyuwangi").is_ok());

    let err = graph.resolve("banyuwangi").unwrap_err();
    assert!(matches!(err, Error::UnknownLocation { ref name, ref suggestions }
        if name == "banyuwangi" && suggestions.iter().any(|s| s == "Banyuwangi")));
    assert!(graph.neighbours_of("BANYUWANGI").is_err());
}

#[test]
fn resolve_distinguishes_names_differing_only_in_case() {
    let mut graph = Graph::new();
    let upper = graph.add_location("Batu");
    let lower = graph.add_location("batu");

    assert_eq!(graph.resolve("Batu").unwrap(), upper);
    assert_eq!(graph.resolve("batu").unwrap(), lower);
    assert!(graph.resolve("BATU").is_err());
}

#[test]
fn unknown_location_includes_suggestions() {
    let graph = RoadNetwork::east_java().build_graph().unwrap();
    let err = graph.resolve("Surabya").unwrap_err();

    let message = err.to_string();
    assert!(message.contains("unknown location: Surabya"));
    assert!(message.contains("Did you mean"));
    assert!(message.contains("Surabaya"));
}

#[test]
fn fuzzy_matches_respect_limit_and_threshold() {
    let graph = RoadNetwork::east_java().build_graph().unwrap();

    assert!(graph.fuzzy_location_matches("Malang", 2).len() <= 2);
    assert_eq!(graph.fuzzy_location_matches("Malang", 3)[0], "Malang");
    assert!(graph.fuzzy_location_matches("Zzzzqqq", 3).is_empty());
}
