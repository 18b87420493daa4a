//! Direct connections between stations.

use super::Station;

/// A directed connection with its travel time in minutes.
///
/// The reverse direction is a separate edge and may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Station the connection departs from.
    pub origin: Station,

    /// Station the connection arrives at.
    pub destination: Station,

    /// Travel time in minutes.
    pub cost: u64,
}

impl Edge {
    /// Create a new edge.
    pub fn new(origin: Station, destination: Station, cost: u64) -> Self {
        Self {
            origin,
            destination,
            cost,
        }
    }

    /// Parse both endpoints from raw text.
    ///
    /// Returns `None` if either endpoint is blank.
    pub fn from_names(origin: &str, destination: &str, cost: u64) -> Option<Self> {
        let origin = Station::parse(origin).ok()?;
        let destination = Station::parse(destination).ok()?;
        Some(Self::new(origin, destination, cost))
    }
}
