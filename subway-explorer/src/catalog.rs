//! Route catalog: the subway routes and their display names.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::RouteId;
use crate::mbta::MbtaError;
use crate::source::{RouteSummary, TransitSource};

/// The set of subway routes, populated once per run and immutable
/// afterward.
///
/// Iteration order everywhere in the explorer is the catalog's population
/// order, which is the API response order.
#[derive(Debug, Clone)]
pub struct RouteCatalog {
    order: Vec<RouteId>,
    names: HashMap<RouteId, String>,
}

impl RouteCatalog {
    /// Populate the catalog from the data source.
    ///
    /// A fetch failure propagates; nothing is retried.
    pub async fn fetch<S: TransitSource>(source: &S) -> Result<Self, MbtaError> {
        let routes = source.subway_routes().await?;
        debug!(routes = routes.len(), "catalogued subway routes");
        Ok(Self::from_summaries(routes))
    }

    /// Build a catalog from already-fetched route summaries.
    pub fn from_summaries(routes: Vec<RouteSummary>) -> Self {
        let mut order = Vec::with_capacity(routes.len());
        let mut names = HashMap::with_capacity(routes.len());

        for route in routes {
            order.push(route.id.clone());
            names.insert(route.id, route.long_name);
        }

        Self { order, names }
    }

    /// Route ids in population order.
    pub fn route_ids(&self) -> &[RouteId] {
        &self.order
    }

    /// Route long names in population order.
    pub fn long_names(&self) -> Vec<&str> {
        self.order
            .iter()
            .map(|id| self.display_name(id))
            .collect()
    }

    /// The display name of a route, falling back to the raw id for a
    /// route the catalog has never seen.
    pub fn display_name<'a>(&'a self, id: &'a RouteId) -> &'a str {
        self.names.get(id).map(String::as_str).unwrap_or(id.as_str())
    }

    /// Number of catalogued routes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
