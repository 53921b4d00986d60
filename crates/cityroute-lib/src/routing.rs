use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::StreetGraph;
use crate::path::{shortest_path, Path};

/// Shortest paths between the point pairs a waypoint request needs.
///
/// Keyed by direction: `get(a, b)` is the path read from `a` to `b`. Only the
/// pairs a single routing call can use are present, never the whole graph.
#[derive(Debug, Default)]
pub struct ShortestPathTable {
    paths: HashMap<String, HashMap<String, Path>>,
}

impl ShortestPathTable {
    fn insert(&mut self, from: &str, to: &str, path: Path) {
        self.paths
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string(), path);
    }

    /// Path from `from` to `to`, when that pair was computed.
    pub fn get(&self, from: &str, to: &str) -> Option<&Path> {
        self.paths.get(from).and_then(|inner| inner.get(to))
    }

    /// Every point appearing in the table, as origin or destination.
    pub fn points(&self) -> HashSet<&str> {
        let mut points: HashSet<&str> = HashSet::new();
        for (from, inner) in &self.paths {
            points.insert(from.as_str());
            for to in inner.keys() {
                points.insert(to.as_str());
            }
        }
        points
    }

    /// Iterate over every stored `(from, to, path)` entry.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &Path)> + '_ {
        self.paths.iter().flat_map(|(from, inner)| {
            inner
                .iter()
                .map(move |(to, path)| (from.as_str(), to.as_str(), path))
        })
    }
}

/// Compute the shortest paths a waypoint routing request relies on.
///
/// Each unordered waypoint pair is searched once and stored in both read
/// directions, the reverse built from the forward chain. The start connects
/// one-way towards every waypoint and every waypoint one-way towards the end;
/// a route traverses the start once at the beginning and the end once at the
/// end, never mid-route.
pub fn shortest_path_map(
    graph: &StreetGraph,
    start: &str,
    end: &str,
    waypoints: &[String],
) -> Result<ShortestPathTable> {
    let mut table = ShortestPathTable::default();
    for (index, point) in waypoints.iter().enumerate() {
        for other in &waypoints[index + 1..] {
            if other == point {
                continue;
            }
            let forward = shortest_path(graph, point, other)?;
            table.insert(other, point, forward.reversed());
            table.insert(point, other, forward);
        }

        let from_start = shortest_path(graph, start, point)?;
        table.insert(start, point, from_start);

        let to_end = shortest_path(graph, point, end)?;
        table.insert(point, end, to_end);
    }
    Ok(table)
}

/// Collapse a shortest-path table into a small graph of travel times.
///
/// Vertices are exactly the points of the table and carry no coordinates;
/// each computed pair becomes an edge weighted by its cumulative travel time.
/// Unreachable pairs contribute no edge, so orderings that would need them
/// never look feasible.
pub fn distance_graph(table: &ShortestPathTable) -> Result<StreetGraph> {
    let mut graph = StreetGraph::new();
    for point in table.points() {
        graph.add_vertex(point, None);
    }
    for (from, to, path) in table.iter() {
        if path.is_found() {
            graph.add_edge(from, to, 1.0, path.total_weight())?;
        }
    }
    Ok(graph)
}

/// Pick the cheapest order in which to visit every waypoint exactly once.
///
/// Candidate orderings are the simple paths from `start` to `end` in the
/// distance graph whose length is exactly start + waypoints + end. Ties on
/// total weight break lexicographically on the visiting sequence, keeping the
/// choice deterministic.
pub fn best_ordering(
    meta: &StreetGraph,
    start: &str,
    end: &str,
    waypoints: &[String],
) -> Result<Vec<String>> {
    let required_len = 2 + waypoints.len();
    let mut best: Option<(f64, Vec<String>)> = None;

    for candidate in meta.all_simple_paths(start, end)? {
        if candidate.len() != required_len {
            continue;
        }
        let weight = path_weight(meta, &candidate);
        let better = match &best {
            None => true,
            Some((best_weight, best_sequence)) => match weight.total_cmp(best_weight) {
                Ordering::Less => true,
                Ordering::Equal => candidate < *best_sequence,
                Ordering::Greater => false,
            },
        };
        if better {
            best = Some((weight, candidate));
        }
    }

    best.map(|(_, sequence)| sequence)
        .ok_or_else(|| Error::NoValidOrdering {
            start: start.to_string(),
            end: end.to_string(),
        })
}

/// Sum of edge weights along consecutive entries of a route.
///
/// Consecutive entries must be adjacent in the graph; a missing edge counts
/// as zero and silently understates the total.
pub fn path_weight(graph: &StreetGraph, route: &[String]) -> f64 {
    route
        .windows(2)
        .map(|pair| graph.weight(&pair[0], &pair[1]))
        .sum()
}

/// Full street-level route from `start` to `end` through every waypoint.
///
/// The best waypoint ordering is searched on the reduced distance graph, then
/// the underlying point-to-point paths are concatenated. Each segment drops
/// its terminal street, which reappears as the head of the next segment, and
/// `end` is appended once. With no waypoints this is the direct shortest
/// path.
pub fn full_route(
    graph: &StreetGraph,
    start: &str,
    end: &str,
    waypoints: &[String],
) -> Result<Vec<String>> {
    if waypoints.is_empty() {
        let direct = shortest_path(graph, start, end)?;
        return if direct.is_found() {
            Ok(direct.locations())
        } else {
            Err(Error::RouteNotFound {
                start: start.to_string(),
                end: end.to_string(),
            })
        };
    }

    let table = shortest_path_map(graph, start, end, waypoints)?;
    let meta = distance_graph(&table)?;
    let ordering = best_ordering(&meta, start, end, waypoints)?;
    debug!(?ordering, "selected waypoint ordering");

    let mut route: Vec<String> = Vec::new();
    for pair in ordering.windows(2) {
        let segment = table
            .get(&pair[0], &pair[1])
            .ok_or_else(|| Error::NoValidOrdering {
                start: start.to_string(),
                end: end.to_string(),
            })?;
        let locations = segment.locations();
        route.extend(locations[..locations.len().saturating_sub(1)].iter().cloned());
    }
    route.push(end.to_string());
    Ok(route)
}

/// High-level description of a requested trip.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub end: String,
    pub via: Vec<String>,
}

impl RouteRequest {
    /// Convenience constructor for a trip with no waypoints.
    pub fn direct(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            via: Vec::new(),
        }
    }

    /// Add a street the route must pass through.
    pub fn via(mut self, waypoint: impl Into<String>) -> Self {
        self.via.push(waypoint.into());
        self
    }
}

/// Planned trip returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub start: String,
    pub end: String,
    pub via: Vec<String>,
    pub steps: Vec<String>,
    pub travel_time: f64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute a route for the request over the given street graph.
pub fn plan_route(graph: &StreetGraph, request: &RouteRequest) -> Result<RoutePlan> {
    debug!(
        start = %request.start,
        end = %request.end,
        via = request.via.len(),
        "planning route"
    );
    let steps = full_route(graph, &request.start, &request.end, &request.via)?;
    let travel_time = path_weight(graph, &steps);

    Ok(RoutePlan {
        start: request.start.clone(),
        end: request.end.clone(),
        via: request.via.clone(),
        steps,
        travel_time,
    })
}
