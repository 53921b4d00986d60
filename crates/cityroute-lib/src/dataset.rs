use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::graph::StreetGraph;

/// One traffic sample row from the upstream CSV extract.
///
/// The categorical fields stay as strings; they are only ever compared for
/// exact equality by the filtering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficRecord {
    pub speed: f64,
    pub from_street: String,
    pub to_street: String,
    pub length: f64,
    pub hour: String,
    pub day: String,
    pub month: String,
    pub start_latitude: f64,
    pub start_longitude: f64,
    pub end_latitude: f64,
    pub end_longitude: f64,
}

/// Load traffic records from a CSV file.
///
/// Rows with a non-positive speed are dropped here; segment weights divide by
/// speed and the graph layer relies on never seeing such rows.
pub fn load_records(path: &Path) -> Result<Vec<TrafficRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    let mut dropped = 0usize;
    for row in reader.deserialize() {
        let record: TrafficRecord = row?;
        if record.speed <= 0.0 {
            dropped += 1;
            continue;
        }
        records.push(record);
    }
    debug!(
        count = records.len(),
        dropped,
        path = %path.display(),
        "loaded traffic records"
    );
    Ok(records)
}

/// Build the street graph for a record set.
///
/// Streets are added lazily as rows are scanned; the first sighting of a
/// street fixes its coordinates and later rows never overwrite them. A
/// repeated segment between the same pair of streets overwrites the edge
/// weight, so the last sample wins.
pub fn build_graph(records: &[TrafficRecord]) -> Result<StreetGraph> {
    let mut graph = StreetGraph::new();
    for record in records {
        graph.add_vertex(
            &record.from_street,
            Some((record.start_latitude, record.start_longitude)),
        );
        graph.add_vertex(
            &record.to_street,
            Some((record.end_latitude, record.end_longitude)),
        );
        graph.add_edge(
            &record.from_street,
            &record.to_street,
            record.speed,
            record.length,
        )?;
    }
    debug!(vertices = graph.len(), "built street graph");
    Ok(graph)
}
