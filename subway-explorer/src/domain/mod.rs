//! Domain types for the subway explorer.
//!
//! Routes are identified by an API-assigned id; stops are identified by
//! their display name and are passed around as plain strings.

mod route;

pub use route::RouteId;
