//! Wire types for the MBTA v3 API.
//!
//! The API is JSON:API shaped: a top-level object with a `data` array
//! whose elements carry an `id` and an `attributes` object. Only the
//! fields the explorer reads are modelled; anything else is ignored, and
//! a response missing one of the modelled fields fails deserialization.

use serde::Deserialize;

/// A page of resources: the top-level `{"data": [...]}` wrapper.
#[derive(Debug, Deserialize)]
pub struct ResourcePage<A> {
    pub data: Vec<Resource<A>>,
}

/// One element of the `data` array.
#[derive(Debug, Deserialize)]
pub struct Resource<A> {
    pub id: String,
    pub attributes: A,
}

/// Route attributes - we only need the display name.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteAttributes {
    pub long_name: String,
}

/// Stop attributes - we only need the display name.
#[derive(Debug, Clone, Deserialize)]
pub struct StopAttributes {
    pub name: String,
}
