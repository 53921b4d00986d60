//! Street-network routing over city traffic samples.
//!
//! This crate loads row-oriented traffic records, builds a weighted
//! undirected graph of street locations, and answers direct and
//! waypoint-constrained route queries over it. Higher-level consumers (the
//! CLI, renderers) should only depend on the functions exported here instead
//! of reimplementing behavior.

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod filter;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;

pub use dataset::{build_graph, load_records, TrafficRecord};
pub use error::{Error, Result};
pub use filter::{filter_exact, filter_reachable, filter_records, FilterCriteria};
pub use graph::{Location, StreetGraph};
pub use output::{RouteStep, RouteSummary};
pub use path::{shortest_path, Path};
pub use routing::{
    best_ordering, distance_graph, full_route, path_weight, plan_route, shortest_path_map,
    RoutePlan, RouteRequest, ShortestPathTable,
};
