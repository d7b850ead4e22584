//! Stop statistics: stop counts per route and transfer stops.

use crate::catalog::RouteCatalog;
use crate::index::StopIndex;

/// Routes with the most and the fewest stops.
///
/// Each entry is (route long name, stop count), in catalog order.
/// Membership is decided by equality against the global maximum and
/// minimum independently, so when every route has the same count each
/// route appears in both buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopStatistics {
    pub most: Vec<(String, usize)>,
    pub fewest: Vec<(String, usize)>,
}

/// Partition the catalogued routes by stop count into the most-stops and
/// fewest-stops buckets.
pub fn stop_statistics(catalog: &RouteCatalog, index: &StopIndex) -> StopStatistics {
    let counts: Vec<(&str, usize)> = catalog
        .route_ids()
        .iter()
        .map(|route| (catalog.display_name(route), index.stops_on(route).len()))
        .collect();

    let max = counts.iter().map(|&(_, n)| n).max();
    let min = counts.iter().map(|&(_, n)| n).min();

    let (Some(max), Some(min)) = (max, min) else {
        return StopStatistics {
            most: Vec::new(),
            fewest: Vec::new(),
        };
    };

    let mut most = Vec::new();
    let mut fewest = Vec::new();

    for (name, n) in counts {
        if n == max {
            most.push((name.to_string(), n));
        }
        if n == min {
            fewest.push((name.to_string(), n));
        }
    }

    StopStatistics { most, fewest }
}

/// Stops served by two or more routes, with the serving routes' long
/// names.
///
/// Stops appear in first-seen order; each stop's route names keep the
/// order routes were first encountered while building the index.
pub fn transfer_stops(catalog: &RouteCatalog, index: &StopIndex) -> Vec<(String, Vec<String>)> {
    index
        .stop_names()
        .iter()
        .filter_map(|stop| {
            let routes = index.routes_serving(stop);
            if routes.len() < 2 {
                return None;
            }
            let names = routes
                .iter()
                .map(|route| catalog.display_name(route).to_string())
                .collect();
            Some((stop.clone(), names))
        })
        .collect()
}
