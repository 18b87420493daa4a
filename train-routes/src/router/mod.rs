//! All-pairs route finder.
//!
//! The router ingests every direct connection once, then precomputes the
//! fastest route between every ordered pair of stations with the
//! Floyd–Warshall recurrence. Building costs O(V³) time and O(V²) memory;
//! every query afterwards is a table lookup.
//!
//! A built router is immutable, so it can be shared between threads without
//! locking.

mod graph;
mod path;
mod table;

use tracing::debug;

use crate::domain::{Edge, Station, StationId};

use graph::{Graph, StationIndex};
use table::RouteTable;

/// The fastest route between an ordered pair of stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// Total travel time in minutes.
    pub time: u64,

    /// Number of edges travelled; `1` for a direct connection.
    pub length: usize,

    /// Pivot station of the last relaxation that improved this route.
    /// `None` for a direct connection.
    pub via: Option<Station>,
}

impl RouteEntry {
    /// Intermediate stops between origin and destination.
    pub fn stops(&self) -> usize {
        self.length.saturating_sub(1)
    }
}

/// Precomputed fastest routes between all known stations.
#[derive(Debug, Clone, Default)]
pub struct Router {
    stations: StationIndex,
    table: RouteTable,
}

impl Router {
    /// Build the router from a stream of edges.
    ///
    /// Items that are `None` are skipped, so the output of
    /// [`EdgeReader`](crate::loader::EdgeReader) can be passed straight in.
    /// Stations are registered in the order they first appear. If an ordered
    /// pair is listed more than once, the first cost is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use train_routes::domain::Edge;
    /// use train_routes::router::Router;
    ///
    /// let router = Router::build(vec![
    ///     Edge::from_names("A", "B", 2).unwrap(),
    ///     Edge::from_names("B", "C", 3).unwrap(),
    /// ]);
    ///
    /// let route = router.get_route("A", "C").unwrap();
    /// assert_eq!(route.time, 5);
    /// assert_eq!(route.stops(), 1);
    /// assert!(router.get_route("C", "A").is_none());
    /// ```
    pub fn build<I, T>(edges: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Option<Edge>>,
    {
        let graph = Graph::from_edges(edges);
        let mut table = RouteTable::seed(&graph);
        table.relax_all();

        debug!(
            stations = graph.stations.len(),
            reachable_pairs = table.reachable(),
            "Route table built"
        );

        Self {
            stations: graph.stations,
            table,
        }
    }

    /// Check if `point` names a known station.
    ///
    /// The match is exact: no trimming or case folding is applied.
    pub fn is_valid_point(&self, point: &str) -> bool {
        self.stations.get(point).is_some()
    }

    /// Look up the fastest route from `from` to `to`.
    ///
    /// Returns `None` if either station is unknown or if no route exists.
    /// A station only has a route to itself when a cycle leads back to it.
    pub fn get_route(&self, from: &str, to: &str) -> Option<RouteEntry> {
        let (from, to) = self.ids(from, to)?;
        let cell = self.table.get(from, to)?;

        Some(RouteEntry {
            time: cell.time,
            length: cell.length,
            via: cell.via.map(|id| self.stations.station(id).clone()),
        })
    }

    /// Reconstruct every station on the fastest route, both ends included.
    ///
    /// The returned sequence has `length + 1` stations.
    pub fn path(&self, from: &str, to: &str) -> Option<Vec<Station>> {
        let (from, to) = self.ids(from, to)?;
        let ids = path::expand(&self.table, from, to)?;

        Some(
            ids.into_iter()
                .map(|id| self.stations.station(id).clone())
                .collect(),
        )
    }

    /// Known stations in first-appearance order.
    pub fn stations(&self) -> &[Station] {
        self.stations.as_slice()
    }

    /// Number of known stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if no station is known.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    fn ids(&self, from: &str, to: &str) -> Option<(StationId, StationId)> {
        Some((self.stations.get(from)?, self.stations.get(to)?))
    }
}
