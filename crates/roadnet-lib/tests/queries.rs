mod common;

use roadnet_lib::{
    plan_route, Error, QueryKind, QueryOptions, RoadNetwork, RouteQueries, RouteRequest,
    TourStrategy,
};

#[test]
fn shortest_path_reports_travel_time() {
    let graph = common::triangle();
    let queries = RouteQueries::new(&graph, QueryOptions::default()).unwrap();

    let plan = queries.shortest_path("A", "C").unwrap();
    assert_eq!(plan.kind, QueryKind::ShortestPath);
    assert_eq!(plan.cost(), 8.0);
    assert_eq!(plan.route.steps, vec![0, 1, 2]);
    assert_eq!(plan.target, Some(2));
    assert!((plan.travel_hours - 8.0 / 60.0).abs() < 1e-12);
}

#[test]
fn tour_reports_travel_time_with_custom_speed() {
    let graph = common::triangle();
    let options = QueryOptions {
        average_speed: 4.0,
        ..QueryOptions::default()
    };
    let queries = RouteQueries::new(&graph, options).unwrap();

    let plan = queries.optimal_tour("A").unwrap();
    assert_eq!(plan.kind, QueryKind::Tour);
    assert_eq!(plan.cost(), 8.0);
    assert_eq!(plan.travel_hours, 2.0);
    assert_eq!(plan.target, None);
    assert_eq!(plan.hop_count(), 2);
}

#[test]
fn unreachable_results_are_not_errors() {
    let graph = common::disconnected();
    let queries = RouteQueries::new(&graph, QueryOptions::default()).unwrap();

    let path = queries.shortest_path("A", "C").unwrap();
    assert!(!path.is_reachable());
    assert!(path.cost().is_infinite());
    assert!(path.travel_hours.is_infinite());

    let tour = queries.optimal_tour("A").unwrap();
    assert!(!tour.is_reachable());
    assert!(tour.route.steps.is_empty());
}

#[test]
fn unknown_locations_fail_both_queries() {
    let graph = common::triangle();
    let queries = RouteQueries::new(&graph, QueryOptions::default()).unwrap();

    let err = queries.shortest_path("A", "Z").unwrap_err();
    assert!(matches!(err, Error::UnknownLocation { ref name, .. } if name == "Z"));

    let err = queries.shortest_path("Z", "A").unwrap_err();
    assert!(matches!(err, Error::UnknownLocation { ref name, .. } if name == "Z"));

    let err = queries.optimal_tour("Z").unwrap_err();
    assert!(matches!(err, Error::UnknownLocation { ref name, .. } if name == "Z"));
}

#[test]
fn invalid_speed_is_rejected_up_front() {
    let graph = common::triangle();
    let options = QueryOptions {
        average_speed: 0.0,
        ..QueryOptions::default()
    };
    let err = RouteQueries::new(&graph, options).unwrap_err();
    assert!(matches!(err, Error::InvalidAverageSpeed { .. }));
}

#[test]
fn tour_limit_guards_factorial_search() {
    let graph = RoadNetwork::east_java().build_graph().unwrap();
    let options = QueryOptions {
        tour_location_limit: Some(8),
        ..QueryOptions::default()
    };
    let queries = RouteQueries::new(&graph, options).unwrap();

    let err = queries.optimal_tour("Surabaya").unwrap_err();
    assert!(matches!(
        err,
        Error::TourTooLarge {
            locations: 10,
            limit: 8
        }
    ));

    // The limit only concerns tours.
    assert!(queries.shortest_path("Surabaya", "Tuban").is_ok());
}

#[test]
fn default_options_refuse_tours_over_twelve_locations() {
    let mut graph = roadnet_lib::Graph::new();
    for index in 0..12 {
        graph
            .add_edge(&format!("L{index}"), &format!("L{}", index + 1), 1.0)
            .unwrap();
    }
    let queries = RouteQueries::new(&graph, QueryOptions::default()).unwrap();

    let err = queries.optimal_tour("L0").unwrap_err();
    assert!(matches!(
        err,
        Error::TourTooLarge {
            locations: 13,
            limit: 12
        }
    ));
}

#[test]
fn disabled_limit_allows_any_size() {
    let mut graph = roadnet_lib::Graph::new();
    for index in 0..14 {
        graph
            .add_edge(&format!("L{index}"), &format!("L{}", index + 1), 2.0)
            .unwrap();
    }
    let options = QueryOptions {
        tour_location_limit: None,
        tour_strategy: TourStrategy::Parallel,
        ..QueryOptions::default()
    };
    let queries = RouteQueries::new(&graph, options).unwrap();

    let plan = queries.optimal_tour("L0").unwrap();
    assert_eq!(plan.route.steps.len(), 15);
    assert_eq!(plan.cost(), 28.0);
}

#[test]
fn queries_reject_names_that_only_match_ignoring_case() {
    let mut graph = roadnet_lib::Graph::new();
    graph.add_edge("A", "B", 1.0).unwrap();
    let queries = RouteQueries::new(&graph, QueryOptions::default()).unwrap();

    let err = queries.shortest_path("a", "b").unwrap_err();
    assert!(matches!(err, Error::UnknownLocation { ref name, .. } if name == "a"));

    let err = queries.shortest_path("A", "b").unwrap_err();
    assert!(matches!(err, Error::UnknownLocation { ref name, .. } if name == "b"));

    let err = queries.optimal_tour("a").unwrap_err();
    assert!(matches!(err, Error::UnknownLocation { ref name, .. } if name == "a"));
}

#[test]
fn plan_route_dispatches_by_kind() {
    let graph = common::triangle();

    let path = plan_route(
        &graph,
        &RouteRequest::shortest_path("A", "C"),
        QueryOptions::default(),
    )
    .unwrap();
    assert_eq!(path.kind, QueryKind::ShortestPath);

    let tour = plan_route(&graph, &RouteRequest::tour("C"), QueryOptions::default()).unwrap();
    assert_eq!(tour.kind, QueryKind::Tour);
    assert_eq!(tour.route.steps, vec![2, 1, 0]);
    assert_eq!(tour.cost(), 8.0);
}

#[test]
fn graph_can_be_shared_across_threads() {
    let graph = RoadNetwork::east_java().build_graph().unwrap();
    let queries = RouteQueries::new(&graph, QueryOptions::default()).unwrap();
    let pairs = [("Surabaya", "Banyuwangi"), ("Malang", "Madiun"), ("Tuban", "Jember")];

    let costs: Vec<f64> = std::thread::scope(|scope| {
        let handles: Vec<_> = pairs
            .iter()
            .map(|&(from, to)| scope.spawn(move || queries.shortest_path(from, to).unwrap().cost()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(costs[0], 270.0);
    assert_eq!(costs[1], 150.0);
}
