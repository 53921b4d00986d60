// Shared fixtures for `cityroute-lib` integration tests.
#![allow(dead_code)]

use std::path::PathBuf;

use cityroute_lib::{StreetGraph, TrafficRecord};

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/sample_traffic.csv")
}

/// Diamond network: Madison-Kinzie 2, Kinzie-Michigan 3, Madison-Michigan 6,
/// Michigan-Peterson 1.
pub fn diamond_graph() -> StreetGraph {
    let mut graph = StreetGraph::new();
    graph.add_vertex("Madison", Some((41.8819, -87.6278)));
    graph.add_vertex("Kinzie", Some((41.8892, -87.6376)));
    graph.add_vertex("Michigan", Some((41.8902, -87.6243)));
    graph.add_vertex("Peterson", Some((41.9903, -87.6645)));
    graph.add_edge("Madison", "Kinzie", 5.0, 10.0).expect("vertices added");
    graph
        .add_edge("Kinzie", "Michigan", 10.0, 30.0)
        .expect("vertices added");
    graph
        .add_edge("Madison", "Michigan", 10.0, 60.0)
        .expect("vertices added");
    graph
        .add_edge("Michigan", "Peterson", 5.0, 5.0)
        .expect("vertices added");
    graph
}

/// Diamond network plus a Pulaski-Racine pair in its own component.
pub fn two_component_graph() -> StreetGraph {
    let mut graph = diamond_graph();
    graph.add_vertex("Pulaski", Some((41.8746, -87.7259)));
    graph.add_vertex("Racine", Some((41.8748, -87.6570)));
    graph
        .add_edge("Pulaski", "Racine", 10.0, 20.0)
        .expect("vertices added");
    graph
}

/// Record with fixed geometry; only the fields under test vary.
pub fn record(from: &str, to: &str, hour: &str, day: &str, month: &str) -> TrafficRecord {
    TrafficRecord {
        speed: 10.0,
        from_street: from.to_string(),
        to_street: to.to_string(),
        length: 20.0,
        hour: hour.to_string(),
        day: day.to_string(),
        month: month.to_string(),
        start_latitude: 41.88,
        start_longitude: -87.63,
        end_latitude: 41.89,
        end_longitude: -87.64,
    }
}
