//! The transit data source seam.
//!
//! Everything the explorer needs from the outside world is two fetches:
//! the subway route list and the ordered stop list of one route. The
//! trait lets the catalog and index be built from the live API or from
//! canned fixtures in tests.

use crate::domain::RouteId;
use crate::mbta::MbtaError;

/// One route as returned by the route listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSummary {
    /// API-assigned identifier.
    pub id: RouteId,
    /// Display name (e.g. "Red Line").
    pub long_name: String,
}

/// Provider of subway route and stop data.
///
/// Implemented by the live HTTP client and by the file-backed mock.
#[allow(async_fn_in_trait)]
pub trait TransitSource {
    /// Fetch the subway routes (light and heavy rail), in API response order.
    async fn subway_routes(&self) -> Result<Vec<RouteSummary>, MbtaError>;

    /// Fetch the ordered stop names of one route.
    async fn stops_on_route(&self, route: &RouteId) -> Result<Vec<String>, MbtaError>;
}
