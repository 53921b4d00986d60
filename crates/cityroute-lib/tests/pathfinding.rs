mod common;

use cityroute_lib::{path_weight, shortest_path, Error, Path};

use common::{diamond_graph, two_component_graph};

#[test]
fn prefers_lower_total_travel_time() {
    let graph = diamond_graph();
    let path = shortest_path(&graph, "Madison", "Peterson").expect("known streets");

    assert_eq!(path.locations(), ["Madison", "Kinzie", "Michigan", "Peterson"]);
    assert_eq!(path.len(), 4);
    assert!((path.total_weight() - 6.0).abs() < 1e-9);
}

#[test]
fn start_equals_end_is_a_single_location() {
    let graph = diamond_graph();
    let path = shortest_path(&graph, "Madison", "Madison").expect("known streets");

    assert_eq!(path.len(), 1);
    assert_eq!(path.total_weight(), 0.0);
    assert_eq!(path.locations(), ["Madison"]);
}

#[test]
fn unreachable_target_returns_not_found() {
    let graph = two_component_graph();
    let path = shortest_path(&graph, "Madison", "Pulaski").expect("known streets");

    assert!(!path.is_found());
    assert_eq!(path.len(), 0);
    assert_eq!(path.total_weight(), 0.0);
    assert!(path.first().is_none());
    assert!(path.locations().is_empty());
}

#[test]
fn unknown_endpoint_is_an_error() {
    let graph = diamond_graph();
    assert!(matches!(
        shortest_path(&graph, "Madison", "Wabash"),
        Err(Error::UnknownVertex { .. })
    ));
    assert!(matches!(
        shortest_path(&graph, "Wabash", "Madison"),
        Err(Error::UnknownVertex { .. })
    ));
}

#[test]
fn reversal_matches_the_opposite_search() {
    let graph = diamond_graph();
    let forward = shortest_path(&graph, "Madison", "Peterson").expect("known streets");
    let backward = shortest_path(&graph, "Peterson", "Madison").expect("known streets");

    assert!((forward.total_weight() - backward.total_weight()).abs() < 1e-9);
    let reversed = forward.reversed();
    assert!((reversed.total_weight() - forward.total_weight()).abs() < 1e-9);
    assert_eq!(reversed.locations(), backward.locations());
}

#[test]
fn agrees_with_exhaustive_enumeration() {
    let graph = diamond_graph();
    let streets = ["Madison", "Kinzie", "Michigan", "Peterson"];

    for from in streets {
        for to in streets {
            if from == to {
                continue;
            }
            let best = shortest_path(&graph, from, to).expect("known streets");
            let brute = graph
                .all_simple_paths(from, to)
                .expect("known streets")
                .into_iter()
                .map(|route| path_weight(&graph, &route))
                .fold(f64::INFINITY, f64::min);

            assert!(best.is_found());
            assert!(
                (best.total_weight() - brute).abs() < 1e-9,
                "{from} -> {to}: {} vs {brute}",
                best.total_weight()
            );
        }
    }
}

#[test]
fn connectivity_agrees_with_the_search_result() {
    let graph = two_component_graph();
    for target in ["Peterson", "Pulaski", "Racine", "Kinzie"] {
        let found = shortest_path(&graph, "Madison", target)
            .expect("known streets")
            .is_found();
        assert_eq!(found, graph.is_connected("Madison", target), "{target}");
    }
}

#[test]
fn divergent_chains_share_a_prefix() {
    let base = Path::NotFound.prepend("Michigan", 0.0);
    let via_kinzie = base.prepend("Kinzie", 3.0);
    let via_madison = base.prepend("Madison", 6.0);

    assert_eq!(via_kinzie.locations(), ["Kinzie", "Michigan"]);
    assert_eq!(via_madison.locations(), ["Madison", "Michigan"]);
    assert_eq!(via_kinzie.total_weight(), 3.0);
    assert_eq!(via_madison.total_weight(), 6.0);
    assert_eq!(base.len(), 1);
}
