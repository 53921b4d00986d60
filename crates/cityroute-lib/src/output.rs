use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::StreetGraph;
use crate::routing::RoutePlan;

/// Single stop along a rendered route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<(f64, f64)>,
}

/// Structured representation of a planned route that downstream renderers can
/// serialise or print.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub start: String,
    pub end: String,
    pub via: Vec<String>,
    pub hops: usize,
    pub travel_time: f64,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with resolved coordinates.
    pub fn from_plan(graph: &StreetGraph, plan: &RoutePlan) -> Result<Self> {
        if plan.steps.is_empty() {
            return Err(Error::EmptyRoute);
        }

        let steps = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, name)| RouteStep {
                index,
                name: name.clone(),
                coordinates: graph.coordinates(name),
            })
            .collect();

        Ok(Self {
            start: plan.start.clone(),
            end: plan.end.clone(),
            via: plan.via.clone(),
            hops: plan.hop_count(),
            travel_time: plan.travel_time,
            steps,
        })
    }

    /// Plain-text rendering for terminal consumers.
    pub fn render(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, {:.2} travel time)",
            self.start, self.end, self.hops, self.travel_time
        );
        if !self.via.is_empty() {
            let _ = writeln!(buffer, "via {}", self.via.join(", "));
        }
        for step in &self.steps {
            match step.coordinates {
                Some((latitude, longitude)) => {
                    let _ = writeln!(
                        buffer,
                        "{:>3}: {} ({:.4}, {:.4})",
                        step.index, step.name, latitude, longitude
                    );
                }
                None => {
                    let _ = writeln!(buffer, "{:>3}: {}", step.index, step.name);
                }
            }
        }
        buffer
    }
}
