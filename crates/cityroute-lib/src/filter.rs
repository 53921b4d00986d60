use std::collections::HashSet;

use tracing::debug;

use crate::dataset::{build_graph, TrafficRecord};
use crate::error::Result;

/// Exact-match constraints over the categorical record fields.
///
/// `None` or an empty string leaves a field unconstrained.
#[derive(Debug, Default, Clone)]
pub struct FilterCriteria {
    pub hour: Option<String>,
    pub day: Option<String>,
    pub month: Option<String>,
}

impl FilterCriteria {
    fn matches(&self, record: &TrafficRecord) -> bool {
        field_matches(&self.hour, &record.hour)
            && field_matches(&self.day, &record.day)
            && field_matches(&self.month, &record.month)
    }
}

fn field_matches(criterion: &Option<String>, value: &str) -> bool {
    match criterion.as_deref() {
        None | Some("") => true,
        Some(expected) => expected == value,
    }
}

/// Keep only the records matching every constrained field.
pub fn filter_exact(records: &[TrafficRecord], criteria: &FilterCriteria) -> Vec<TrafficRecord> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}

/// Keep only the records whose endpoints can reach a selected place.
///
/// A graph is built from the given records and the reachable set of the
/// selected places computed over it; a record survives when either of its
/// streets is in that set. An empty selection means no constraint at all,
/// not "nothing is reachable", so the records pass through unchanged.
pub fn filter_reachable(
    records: &[TrafficRecord],
    selected_places: &HashSet<String>,
) -> Result<Vec<TrafficRecord>> {
    let seeds: HashSet<String> = selected_places
        .iter()
        .filter(|place| !place.is_empty())
        .cloned()
        .collect();
    if seeds.is_empty() {
        return Ok(records.to_vec());
    }

    let graph = build_graph(records)?;
    let reachable = graph.connected_components(&seeds)?;
    Ok(records
        .iter()
        .filter(|record| {
            reachable.contains(&record.from_street) || reachable.contains(&record.to_street)
        })
        .cloned()
        .collect())
}

/// Apply the exact-match criteria, then the reachability constraint.
pub fn filter_records(
    records: &[TrafficRecord],
    criteria: &FilterCriteria,
    selected_places: &HashSet<String>,
) -> Result<Vec<TrafficRecord>> {
    let narrowed = filter_exact(records, criteria);
    debug!(
        total = records.len(),
        matched = narrowed.len(),
        "applied exact-match filters"
    );
    filter_reachable(&narrowed, selected_places)
}
