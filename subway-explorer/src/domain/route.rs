//! Route identifier type.

use std::fmt;

/// An API-assigned subway route identifier (e.g. `"Red"`, `"Green-B"`).
///
/// The format is owned by the API; this type treats the id as opaque and
/// exists so that route ids and stop names cannot be mixed up in the
/// index maps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteId(String);

impl RouteId {
    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RouteId {
    fn from(id: String) -> Self {
        RouteId(id)
    }
}

impl From<&str> for RouteId {
    fn from(id: &str) -> Self {
        RouteId(id.to_string())
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_roundtrip() {
        let id = RouteId::from("Green-B");
        assert_eq!(id.as_str(), "Green-B");
    }

    #[test]
    fn display() {
        let id = RouteId::from("Red");
        assert_eq!(format!("{}", id), "Red");
    }

    #[test]
    fn equality_and_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(RouteId::from("Orange"));
        assert!(set.contains(&RouteId::from("Orange")));
        assert!(!set.contains(&RouteId::from("Blue")));
    }
}
