//! Stop adjacency graph.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::RouteId;
use crate::index::StopIndex;

/// Directed adjacency between stops: for every stop `s`, every route `r`
/// serving `s`, and every other stop `s2` on `r`, an edge
/// `s -> (s2, r)`.
///
/// Every pair of stops on a shared route is directly connected,
/// regardless of physical order or intermediate stops - an edge models
/// "reachable with one ride on route r", not a turn-by-turn stop
/// sequence. Built once per loaded index and reused across queries.
#[derive(Debug, Clone)]
pub struct RouteGraph {
    edges: HashMap<String, Vec<(String, RouteId)>>,
}

impl RouteGraph {
    /// Build the adjacency from the stop index.
    pub fn build(index: &StopIndex) -> Self {
        let mut edges: HashMap<String, Vec<(String, RouteId)>> = HashMap::new();
        let mut edge_count = 0usize;

        for stop in index.stop_names() {
            let out = edges.entry(stop.clone()).or_default();
            for route in index.routes_serving(stop) {
                for other in index.stops_on(route) {
                    if other != stop {
                        out.push((other.clone(), route.clone()));
                    }
                }
            }
            edge_count += out.len();
        }

        debug!(stops = edges.len(), edges = edge_count, "built route graph");

        Self { edges }
    }

    /// Outgoing edges of a stop: (reachable stop, route ridden) pairs.
    pub fn neighbors(&self, stop: &str) -> &[(String, RouteId)] {
        self.edges.get(stop).map(Vec::as_slice).unwrap_or(&[])
    }
}
