//! Mock MBTA client for testing without API access.
//!
//! Loads canned API responses from JSON files and serves them as if they
//! were live. Fixture layout: `routes.json` for the route listing and
//! `stops-{route id}.json` for each route's stop listing, all in the
//! shape the real API returns.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::RouteId;
use crate::source::{RouteSummary, TransitSource};

use super::error::MbtaError;
use super::types::{ResourcePage, RouteAttributes, StopAttributes};

/// File name of the route listing fixture.
const ROUTES_FILE: &str = "routes.json";

/// Mock client that serves data from fixture files.
#[derive(Debug, Clone)]
pub struct MockMbtaClient {
    routes: Vec<RouteSummary>,
    stops: HashMap<RouteId, Vec<String>>,
}

impl MockMbtaClient {
    /// Create a mock client by loading fixtures from a directory.
    ///
    /// `routes.json` must exist; a `stops-{id}.json` file must exist for
    /// every route listed in it.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, MbtaError> {
        let data_dir = data_dir.as_ref();

        let routes_page: ResourcePage<RouteAttributes> =
            load_json(&data_dir.join(ROUTES_FILE))?;

        let routes: Vec<RouteSummary> = routes_page
            .data
            .into_iter()
            .map(|r| RouteSummary {
                id: RouteId::from(r.id),
                long_name: r.attributes.long_name,
            })
            .collect();

        let mut stops = HashMap::new();
        for route in &routes {
            let path = data_dir.join(format!("stops-{}.json", route.id));
            let page: ResourcePage<StopAttributes> = load_json(&path)?;
            let names = page.data.into_iter().map(|s| s.attributes.name).collect();
            stops.insert(route.id.clone(), names);
        }

        Ok(Self { routes, stops })
    }
}

impl TransitSource for MockMbtaClient {
    async fn subway_routes(&self) -> Result<Vec<RouteSummary>, MbtaError> {
        Ok(self.routes.clone())
    }

    async fn stops_on_route(&self, route: &RouteId) -> Result<Vec<String>, MbtaError> {
        self.stops
            .get(route)
            .cloned()
            .ok_or_else(|| MbtaError::Mock {
                message: format!(
                    "no fixture for route {}. Available: {:?}",
                    route,
                    self.stops.keys().map(|r| r.as_str()).collect::<Vec<_>>()
                ),
            })
    }
}

/// Read and deserialize one fixture file.
fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, MbtaError> {
    let json = std::fs::read_to_string(path).map_err(|e| MbtaError::Mock {
        message: format!("failed to read {:?}: {}", path, e),
    })?;

    serde_json::from_str(&json).map_err(|e| MbtaError::Mock {
        message: format!("failed to parse {:?}: {}", path, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_fixtures(dir: &Path) {
        fs::write(
            dir.join("routes.json"),
            r#"{"data": [
                {"id": "Red", "attributes": {"long_name": "Red Line"}},
                {"id": "Blue", "attributes": {"long_name": "Blue Line"}}
            ]}"#,
        )
        .unwrap();
        fs::write(
            dir.join("stops-Red.json"),
            r#"{"data": [
                {"id": "place-alfcl", "attributes": {"name": "Alewife"}},
                {"id": "place-davis", "attributes": {"name": "Davis"}}
            ]}"#,
        )
        .unwrap();
        fs::write(
            dir.join("stops-Blue.json"),
            r#"{"data": [
                {"id": "place-wondl", "attributes": {"name": "Wonderland"}}
            ]}"#,
        )
        .unwrap();
    }

    #[tokio::test]
    async fn serves_loaded_fixtures() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());

        let mock = MockMbtaClient::new(dir.path()).unwrap();

        let routes = mock.subway_routes().await.unwrap();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].long_name, "Red Line");

        let stops = mock.stops_on_route(&RouteId::from("Red")).await.unwrap();
        assert_eq!(stops, vec!["Alewife", "Davis"]);
    }

    #[tokio::test]
    async fn unknown_route_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());

        let mock = MockMbtaClient::new(dir.path()).unwrap();
        let result = mock.stops_on_route(&RouteId::from("Orange")).await;
        assert!(matches!(result, Err(MbtaError::Mock { .. })));
    }

    #[test]
    fn missing_routes_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = MockMbtaClient::new(dir.path());
        assert!(matches!(result, Err(MbtaError::Mock { .. })));
    }

    #[test]
    fn missing_stops_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("routes.json"),
            r#"{"data": [{"id": "Red", "attributes": {"long_name": "Red Line"}}]}"#,
        )
        .unwrap();

        let result = MockMbtaClient::new(dir.path());
        assert!(matches!(result, Err(MbtaError::Mock { .. })));
    }
}
