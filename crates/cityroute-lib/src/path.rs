use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::sync::Arc;

use crate::error::Result;
use crate::graph::StreetGraph;

/// Single link in a route chain.
///
/// Nodes are immutable once created and share their predecessors, so many
/// divergent partial routes can coexist without copying common prefixes.
#[derive(Debug)]
pub struct PathNode {
    item: String,
    step_weight: f64,
    total_weight: f64,
    len: usize,
    parent: Option<Arc<PathNode>>,
}

impl PathNode {
    fn extend(node: &Arc<PathNode>, item: &str, step_weight: f64) -> Arc<PathNode> {
        Arc::new(PathNode {
            item: item.to_string(),
            step_weight,
            total_weight: node.total_weight + step_weight,
            len: node.len + 1,
            parent: Some(Arc::clone(node)),
        })
    }

    fn seed(item: &str) -> Arc<PathNode> {
        Arc::new(PathNode {
            item: item.to_string(),
            step_weight: 0.0,
            total_weight: 0.0,
            len: 1,
            parent: None,
        })
    }
}

/// Outcome of a shortest-path search.
///
/// `NotFound` is a terminal state of its own, not a route of zero locations:
/// it means the search exhausted the frontier without reaching the target.
/// Iterating a `Found` chain yields locations from the search origin to its
/// terminus.
#[derive(Debug, Clone, Default)]
pub enum Path {
    Found(Arc<PathNode>),
    #[default]
    NotFound,
}

impl Path {
    /// Whether the search produced a route.
    pub fn is_found(&self) -> bool {
        matches!(self, Path::Found(_))
    }

    /// Number of locations on the route, zero for `NotFound`.
    pub fn len(&self) -> usize {
        match self {
            Path::Found(node) => node.len,
            Path::NotFound => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cumulative travel time along the route, zero for `NotFound`.
    pub fn total_weight(&self) -> f64 {
        match self {
            Path::Found(node) => node.total_weight,
            Path::NotFound => 0.0,
        }
    }

    /// First location of the route, the one closest to the iteration origin.
    pub fn first(&self) -> Option<&str> {
        match self {
            Path::Found(node) => Some(node.item.as_str()),
            Path::NotFound => None,
        }
    }

    /// New route with `item` chained in front of this one.
    pub fn prepend(&self, item: &str, step_weight: f64) -> Path {
        match self {
            Path::Found(node) => Path::Found(PathNode::extend(node, item, step_weight)),
            Path::NotFound => Path::Found(Arc::new(PathNode {
                item: item.to_string(),
                step_weight,
                total_weight: step_weight,
                len: 1,
                parent: None,
            })),
        }
    }

    /// Copy of this route read in the opposite direction, weight preserved.
    pub fn reversed(&self) -> Path {
        let mut reversed = Path::NotFound;
        let mut current = match self {
            Path::Found(node) => Some(node.as_ref()),
            Path::NotFound => None,
        };
        while let Some(node) = current {
            reversed = reversed.prepend(&node.item, node.step_weight);
            current = node.parent.as_deref();
        }
        reversed
    }

    /// Iterate over the location names along the route.
    pub fn iter(&self) -> PathIter<'_> {
        PathIter {
            current: match self {
                Path::Found(node) => Some(node.as_ref()),
                Path::NotFound => None,
            },
        }
    }

    /// Location names along the route as an owned sequence.
    pub fn locations(&self) -> Vec<String> {
        self.iter().map(str::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a str;
    type IntoIter = PathIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the location names of a [`Path`].
pub struct PathIter<'a> {
    current: Option<&'a PathNode>,
}

impl<'a> Iterator for PathIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.parent.as_deref();
        Some(node.item.as_str())
    }
}

/// Lowest-travel-time route between two streets.
///
/// The search runs Dijkstra backwards from `end`: partial chains grow by
/// prepending each newly reached street, so the chain popped at `start` is
/// already in forward read order. Symmetric edge weights make the backward
/// search equivalent to a forward one. An unreachable target yields
/// `Path::NotFound`, which is a normal result rather than an error.
pub fn shortest_path(graph: &StreetGraph, start: &str, end: &str) -> Result<Path> {
    graph.ensure_known(start)?;
    graph.ensure_known(end)?;

    let mut settled: HashSet<String> = HashSet::new();
    let mut frontier = BinaryHeap::new();
    frontier.push(FrontierEntry::new(PathNode::seed(end)));

    while let Some(entry) = frontier.pop() {
        let item = entry.path.item.clone();
        if !settled.insert(item.clone()) {
            continue;
        }
        if item == start {
            return Ok(Path::Found(entry.path));
        }

        for neighbour in graph.neighbours(&item)? {
            if settled.contains(neighbour) {
                continue;
            }
            let step_weight = graph.weight(neighbour, &item);
            frontier.push(FrontierEntry::new(PathNode::extend(
                &entry.path,
                neighbour,
                step_weight,
            )));
        }
    }

    Ok(Path::NotFound)
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Debug)]
struct FrontierEntry {
    cost: FloatOrd,
    path: Arc<PathNode>,
}

impl FrontierEntry {
    fn new(path: Arc<PathNode>) -> Self {
        Self {
            cost: FloatOrd(path.total_weight),
            path,
        }
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.path.item == other.path.item
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.path.item.cmp(&self.path.item))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
