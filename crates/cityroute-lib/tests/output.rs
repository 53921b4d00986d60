mod common;

use cityroute_lib::{plan_route, Error, RoutePlan, RouteRequest, RouteSummary};

use common::diamond_graph;

#[test]
fn summary_resolves_coordinates_and_renders() {
    let graph = diamond_graph();
    let plan =
        plan_route(&graph, &RouteRequest::direct("Madison", "Peterson")).expect("route exists");
    let summary = RouteSummary::from_plan(&graph, &plan).expect("plan has steps");

    assert_eq!(summary.hops, 3);
    assert_eq!(summary.steps.len(), 4);
    assert!(summary.steps.iter().all(|step| step.coordinates.is_some()));

    let rendered = summary.render();
    assert!(rendered.contains("Madison -> Peterson"));
    assert!(rendered.contains("3 hops"));
    assert!(rendered.contains("Kinzie"));
}

#[test]
fn summary_serialises_to_json() {
    let graph = diamond_graph();
    let plan =
        plan_route(&graph, &RouteRequest::direct("Madison", "Peterson")).expect("route exists");
    let summary = RouteSummary::from_plan(&graph, &plan).expect("plan has steps");

    let json = serde_json::to_value(&summary).expect("serialises");
    assert_eq!(json["start"], "Madison");
    assert_eq!(json["end"], "Peterson");
    assert_eq!(json["hops"], 3);
    assert_eq!(json["steps"][1]["name"], "Kinzie");
}

#[test]
fn empty_plan_is_rejected() {
    let graph = diamond_graph();
    let plan = RoutePlan {
        start: "Madison".to_string(),
        end: "Peterson".to_string(),
        via: Vec::new(),
        steps: Vec::new(),
        travel_time: 0.0,
    };

    assert!(matches!(
        RouteSummary::from_plan(&graph, &plan),
        Err(Error::EmptyRoute)
    ));
}
