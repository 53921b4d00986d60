use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};

/// Minimum Jaro-Winkler similarity for a street name to be offered as a
/// "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Maximum number of suggestions attached to an unknown-street error.
const MAX_SUGGESTIONS: usize = 3;

/// A named checkpoint location in the street network.
///
/// Coordinates are optional; graphs derived from precomputed distances carry
/// none. Edge weights are stored on both endpoints so neighbour lookup stays
/// local to the vertex.
#[derive(Debug, Clone)]
pub struct Location {
    name: String,
    coordinates: Option<(f64, f64)>,
    neighbours: HashMap<String, f64>,
}

impl Location {
    /// Street name identifying this location.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude and longitude, when known.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.coordinates
    }
}

/// Undirected street network with travel-time edge weights.
///
/// Built once per request from a fixed record set and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct StreetGraph {
    vertices: HashMap<String, Location>,
}

impl StreetGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of locations in the graph.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether `name` is a known location.
    pub fn contains(&self, name: &str) -> bool {
        self.vertices.contains_key(name)
    }

    /// Iterate over every location in the graph, in no particular order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> + '_ {
        self.vertices.values()
    }

    /// Latitude and longitude of a location, when both the location and its
    /// coordinates are known.
    pub fn coordinates(&self, name: &str) -> Option<(f64, f64)> {
        self.vertices.get(name).and_then(Location::coordinates)
    }

    /// Insert a location if it is not already present.
    ///
    /// Re-adding an existing street is a no-op; the first sighting fixes its
    /// coordinates and later calls never overwrite them.
    pub fn add_vertex(&mut self, name: &str, coordinates: Option<(f64, f64)>) {
        if !self.vertices.contains_key(name) {
            self.vertices.insert(
                name.to_string(),
                Location {
                    name: name.to_string(),
                    coordinates,
                    neighbours: HashMap::new(),
                },
            );
        }
    }

    /// Connect two known streets with a segment of the given speed and length.
    ///
    /// The weight is the traversal time `length / speed`, stored symmetrically
    /// on both endpoints. A repeated edge between the same pair overwrites the
    /// previous weight; traffic data may redefine a segment and the last
    /// sample wins. Speed is validated upstream and is always positive here.
    pub fn add_edge(&mut self, a: &str, b: &str, speed: f64, length: f64) -> Result<()> {
        if !self.vertices.contains_key(a) {
            return Err(self.unknown_vertex(a));
        }
        if !self.vertices.contains_key(b) {
            return Err(self.unknown_vertex(b));
        }

        let weight = length / speed;
        if let Some(vertex) = self.vertices.get_mut(a) {
            vertex.neighbours.insert(b.to_string(), weight);
        }
        if let Some(vertex) = self.vertices.get_mut(b) {
            vertex.neighbours.insert(a.to_string(), weight);
        }
        Ok(())
    }

    /// Names of every street adjacent to `name`.
    pub fn neighbours(&self, name: &str) -> Result<HashSet<&str>> {
        let vertex = self
            .vertices
            .get(name)
            .ok_or_else(|| self.unknown_vertex(name))?;
        Ok(vertex.neighbours.keys().map(String::as_str).collect())
    }

    /// Stored weight between two streets, or `0.0` when no edge exists.
    ///
    /// The sentinel is indistinguishable from a genuinely free segment, so
    /// callers that care must consult [`StreetGraph::is_adjacent`] first.
    pub fn weight(&self, a: &str, b: &str) -> f64 {
        self.vertices
            .get(a)
            .and_then(|vertex| vertex.neighbours.get(b))
            .copied()
            .unwrap_or(0.0)
    }

    /// Whether an edge exists between two streets.
    pub fn is_adjacent(&self, a: &str, b: &str) -> bool {
        self.vertices
            .get(a)
            .map(|vertex| vertex.neighbours.contains_key(b))
            .unwrap_or(false)
    }

    /// Weight-ignoring reachability test between two streets.
    ///
    /// Returns `false` when either name is absent from the graph.
    pub fn is_connected(&self, a: &str, b: &str) -> bool {
        if !self.vertices.contains_key(a) || !self.vertices.contains_key(b) {
            return false;
        }

        let mut visited: HashSet<&str> = HashSet::new();
        let mut stack = vec![a];
        visited.insert(a);
        while let Some(current) = stack.pop() {
            if current == b {
                return true;
            }
            if let Some(vertex) = self.vertices.get(current) {
                for neighbour in vertex.neighbours.keys() {
                    if visited.insert(neighbour) {
                        stack.push(neighbour);
                    }
                }
            }
        }
        false
    }

    /// Every street reachable from at least one of the seed locations.
    ///
    /// Seeds that are not in the graph contribute nothing. An empty seed set
    /// is rejected; callers deciding that "no selection" means "no constraint"
    /// must special-case it before reaching this layer.
    pub fn connected_components(&self, seeds: &HashSet<String>) -> Result<HashSet<String>> {
        if seeds.is_empty() {
            return Err(Error::EmptySeedSet);
        }

        let mut reachable: HashSet<String> = HashSet::new();
        let mut stack: Vec<&str> = Vec::new();
        for seed in seeds {
            if self.vertices.contains_key(seed) && reachable.insert(seed.clone()) {
                stack.push(seed);
            }
        }
        while let Some(current) = stack.pop() {
            if let Some(vertex) = self.vertices.get(current) {
                for neighbour in vertex.neighbours.keys() {
                    if reachable.insert(neighbour.clone()) {
                        stack.push(neighbour);
                    }
                }
            }
        }
        Ok(reachable)
    }

    /// Enumerate every simple path between two streets.
    ///
    /// Exponential in the worst case; callers only invoke this on graphs
    /// already reduced to a handful of vertices, or explicitly accept the
    /// cost.
    pub fn all_simple_paths(&self, from: &str, to: &str) -> Result<Vec<Vec<String>>> {
        if !self.vertices.contains_key(from) {
            return Err(self.unknown_vertex(from));
        }
        if !self.vertices.contains_key(to) {
            return Err(self.unknown_vertex(to));
        }

        let mut found = Vec::new();
        let mut trail = Vec::new();
        let mut visited = HashSet::new();
        self.collect_simple_paths(from, to, &mut visited, &mut trail, &mut found);
        Ok(found)
    }

    fn collect_simple_paths(
        &self,
        current: &str,
        target: &str,
        visited: &mut HashSet<String>,
        trail: &mut Vec<String>,
        found: &mut Vec<Vec<String>>,
    ) {
        visited.insert(current.to_string());
        trail.push(current.to_string());

        if current == target {
            found.push(trail.clone());
        } else if let Some(vertex) = self.vertices.get(current) {
            for neighbour in vertex.neighbours.keys() {
                if !visited.contains(neighbour) {
                    self.collect_simple_paths(neighbour, target, visited, trail, found);
                }
            }
        }

        trail.pop();
        visited.remove(current);
    }

    /// Street names most similar to `name`, best match first.
    pub fn similar_names(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .vertices
            .keys()
            .map(|candidate| {
                (
                    strsim::jaro_winkler(&needle, &candidate.to_lowercase()),
                    candidate.as_str(),
                )
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }

    pub(crate) fn unknown_vertex(&self, name: &str) -> Error {
        Error::UnknownVertex {
            name: name.to_string(),
            suggestions: self.similar_names(name, MAX_SUGGESTIONS),
        }
    }

    pub(crate) fn ensure_known(&self, name: &str) -> Result<()> {
        if self.contains(name) {
            Ok(())
        } else {
            Err(self.unknown_vertex(name))
        }
    }
}
