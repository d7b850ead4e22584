//! MBTA v3 API access.
//!
//! The live client speaks the JSON:API subset the explorer consumes; the
//! mock serves the same shapes from fixture files for offline runs and
//! tests.

mod client;
mod error;
mod mock;
mod types;

pub use client::{MbtaClient, MbtaConfig};
pub use error::MbtaError;
pub use mock::MockMbtaClient;
pub use types::{Resource, ResourcePage, RouteAttributes, StopAttributes};
