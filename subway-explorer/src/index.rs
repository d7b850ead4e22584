//! Stop index: per-route stop lists and the derived stop-to-routes map.
//!
//! The two maps are inverse indexes of one (route, stop) edge relation.
//! `route_stops` keeps the API's physical stop order, duplicates
//! included; `stop_routes` is deduplicated, with routes in the order they
//! were first encountered while building.

use std::collections::HashMap;

use tracing::debug;

use crate::catalog::RouteCatalog;
use crate::domain::RouteId;
use crate::mbta::MbtaError;
use crate::source::TransitSource;

/// Stop lists for every catalogued route, plus the derived
/// stop-name-to-routes map.
#[derive(Debug, Clone)]
pub struct StopIndex {
    route_stops: HashMap<RouteId, Vec<String>>,
    /// Stop names in first-seen order.
    stop_order: Vec<String>,
    stop_routes: HashMap<String, Vec<RouteId>>,
}

impl StopIndex {
    /// Fetch the stop list of every route in the catalog, in catalog
    /// order, one request at a time.
    ///
    /// Any fetch failure aborts the build and propagates.
    pub async fn fetch<S: TransitSource>(
        catalog: &RouteCatalog,
        source: &S,
    ) -> Result<Self, MbtaError> {
        let mut fetched = Vec::with_capacity(catalog.len());

        for route in catalog.route_ids() {
            let stops = source.stops_on_route(route).await?;
            fetched.push((route.clone(), stops));
        }

        Ok(Self::from_route_stops(fetched))
    }

    /// Build the index from already-fetched (route, stops) lists.
    ///
    /// The derived stop-to-routes map is built here: for every stop on
    /// every route, the route is added to that stop's list unless already
    /// present.
    pub fn from_route_stops(fetched: Vec<(RouteId, Vec<String>)>) -> Self {
        let mut route_stops = HashMap::with_capacity(fetched.len());
        let mut stop_order = Vec::new();
        let mut stop_routes: HashMap<String, Vec<RouteId>> = HashMap::new();

        for (route, stops) in fetched {
            for stop in &stops {
                let routes = stop_routes.entry(stop.clone()).or_insert_with(|| {
                    stop_order.push(stop.clone());
                    Vec::new()
                });
                if !routes.contains(&route) {
                    routes.push(route.clone());
                }
            }
            route_stops.insert(route, stops);
        }

        debug!(
            routes = route_stops.len(),
            stops = stop_order.len(),
            "built stop index"
        );

        Self {
            route_stops,
            stop_order,
            stop_routes,
        }
    }

    /// The ordered stop list of a route, as returned by the source.
    pub fn stops_on(&self, route: &RouteId) -> &[String] {
        self.route_stops.get(route).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The routes serving a stop, in first-encountered order.
    pub fn routes_serving(&self, stop: &str) -> &[RouteId] {
        self.stop_routes.get(stop).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the stop name is known to the index.
    pub fn contains_stop(&self, stop: &str) -> bool {
        self.stop_routes.contains_key(stop)
    }

    /// Stop names in first-seen order.
    pub fn stop_names(&self) -> &[String] {
        &self.stop_order
    }
}
