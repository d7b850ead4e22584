//! Breadth-first route search.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use crate::catalog::RouteCatalog;
use crate::domain::RouteId;
use crate::index::StopIndex;

use super::graph::RouteGraph;

/// One hop of a path: the stop reached and the route ridden to reach it.
type Hop = (String, RouteId);

/// Search state: a stop together with the route used to arrive there.
///
/// The route field matters: reaching the same stop via two different
/// routes is two distinct states, and keeping the arrival route lets the
/// path name which route served each hop. The origin has no arrival
/// route, hence the `Option`.
type State = (String, Option<RouteId>);

/// Result of a route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A path was found; the route long names of its hops, in order.
    /// Consecutive duplicates are not collapsed.
    Found(Vec<String>),
    /// Start and end name the same stop; no travel needed.
    SameStop,
    /// The named stop is not served by any catalogued route.
    UnknownStop(String),
    /// The stops are known but not connected.
    NoPath,
}

impl SearchOutcome {
    /// The route names of the found path, or an empty slice for every
    /// other outcome.
    pub fn route_names(&self) -> &[String] {
        match self {
            SearchOutcome::Found(names) => names,
            _ => &[],
        }
    }
}

/// Route pathfinder over a loaded catalog and stop index.
///
/// Builds the adjacency graph once at construction; individual queries
/// only walk it.
pub struct Planner<'a> {
    catalog: &'a RouteCatalog,
    index: &'a StopIndex,
    graph: RouteGraph,
}

impl<'a> Planner<'a> {
    /// Create a planner, building the stop adjacency graph.
    pub fn new(catalog: &'a RouteCatalog, index: &'a StopIndex) -> Self {
        Self {
            catalog,
            index,
            graph: RouteGraph::build(index),
        }
    }

    /// Find a sequence of route segments connecting `start` to `end`.
    ///
    /// FIFO breadth-first search, so the first path found has the fewest
    /// route segments. Unknown stops and identical endpoints are soft
    /// outcomes, not errors.
    pub fn plan(&self, start: &str, end: &str) -> SearchOutcome {
        if !self.index.contains_stop(start) {
            return SearchOutcome::UnknownStop(start.to_string());
        }
        if !self.index.contains_stop(end) {
            return SearchOutcome::UnknownStop(end.to_string());
        }
        if start == end {
            return SearchOutcome::SameStop;
        }

        match self.search(start, end) {
            Some(hops) => {
                let names = hops
                    .iter()
                    .map(|(_, route)| self.catalog.display_name(route).to_string())
                    .collect();
                SearchOutcome::Found(names)
            }
            None => SearchOutcome::NoPath,
        }
    }

    /// BFS from `start` until `end` is dequeued; returns the hop list of
    /// the first path found, or `None` when the queue drains.
    fn search(&self, start: &str, end: &str) -> Option<Vec<Hop>> {
        let mut queue: VecDeque<(State, Vec<Hop>)> = VecDeque::new();
        let mut visited: HashSet<State> = HashSet::new();

        let origin: State = (start.to_string(), None);
        visited.insert(origin.clone());
        queue.push_back((origin, Vec::new()));

        let mut explored = 0usize;

        while let Some(((stop, _arrived_by), path)) = queue.pop_front() {
            explored += 1;

            if stop == end {
                debug!(explored, hops = path.len(), "route search finished");
                return Some(path);
            }

            trace!(stop = %stop, frontier = queue.len(), "exploring stop");

            for (next, route) in self.graph.neighbors(&stop) {
                let state: State = (next.clone(), Some(route.clone()));
                if visited.contains(&state) {
                    continue;
                }
                visited.insert(state.clone());

                let mut next_path = path.clone();
                next_path.push((next.clone(), route.clone()));
                queue.push_back((state, next_path));
            }
        }

        debug!(explored, "route search exhausted the graph");
        None
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Random small networks: up to four routes over a pool of eight
    /// stop names.
    fn network() -> impl Strategy<Value = Vec<(RouteId, Vec<String>)>> {
        proptest::collection::vec(proptest::collection::vec(0..8u8, 0..6), 0..4).prop_map(
            |routes| {
                routes
                    .into_iter()
                    .enumerate()
                    .map(|(i, stops)| {
                        (
                            RouteId::from(format!("R{i}")),
                            stops.into_iter().map(|s| format!("S{s}")).collect(),
                        )
                    })
                    .collect()
            },
        )
    }

    fn catalog_for(routes: &[(RouteId, Vec<String>)]) -> RouteCatalog {
        RouteCatalog::from_summaries(
            routes
                .iter()
                .map(|(id, _)| crate::source::RouteSummary {
                    id: id.clone(),
                    long_name: format!("{id} Line"),
                })
                .collect(),
        )
    }

    proptest! {
        /// Searching from a stop to itself never yields route names.
        #[test]
        fn same_endpoints_yield_nothing(routes in network(), stop in 0..8u8) {
            let catalog = catalog_for(&routes);
            let index = StopIndex::from_route_stops(routes);
            let planner = Planner::new(&catalog, &index);

            let name = format!("S{stop}");
            prop_assert!(planner.plan(&name, &name).route_names().is_empty());
        }

        /// Reachability is symmetric: shared-route adjacency works both
        /// ways, so a path from a to b implies a path from b to a.
        #[test]
        fn reachability_is_symmetric(routes in network(), a in 0..8u8, b in 0..8u8) {
            let catalog = catalog_for(&routes);
            let index = StopIndex::from_route_stops(routes);
            let planner = Planner::new(&catalog, &index);

            let a = format!("S{a}");
            let b = format!("S{b}");
            let forward = matches!(planner.plan(&a, &b), SearchOutcome::Found(_));
            let backward = matches!(planner.plan(&b, &a), SearchOutcome::Found(_));
            prop_assert_eq!(forward, backward);
        }

        /// Every name in a found path is the long name of a catalogued
        /// route.
        #[test]
        fn found_paths_only_name_known_routes(routes in network(), a in 0..8u8, b in 0..8u8) {
            let catalog = catalog_for(&routes);
            let known: Vec<String> =
                catalog.long_names().iter().map(|s| s.to_string()).collect();
            let index = StopIndex::from_route_stops(routes);
            let planner = Planner::new(&catalog, &index);

            if let SearchOutcome::Found(names) = planner.plan(&format!("S{a}"), &format!("S{b}")) {
                prop_assert!(!names.is_empty());
                for name in names {
                    prop_assert!(known.contains(&name));
                }
            }
        }
    }
}
