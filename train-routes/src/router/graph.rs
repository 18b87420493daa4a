//! Station registry and direct-edge ingestion.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::debug;

use crate::domain::{Edge, Station, StationId};

/// Insertion-ordered set of stations with a dense index per station.
#[derive(Debug, Clone, Default)]
pub struct StationIndex {
    stations: Vec<Station>,
    ids: HashMap<Station, StationId>,
}

impl StationIndex {
    /// Register a station, returning its index.
    ///
    /// A station seen before keeps the index it was first given.
    pub fn insert(&mut self, station: Station) -> StationId {
        if let Some(&id) = self.ids.get(&station) {
            return id;
        }

        let id = StationId(self.stations.len());
        self.ids.insert(station.clone(), id);
        self.stations.push(station);
        id
    }

    /// Look up a station index by exact name.
    pub fn get(&self, name: &str) -> Option<StationId> {
        self.ids.get(name).copied()
    }

    /// Returns the station at `id`.
    pub fn station(&self, id: StationId) -> &Station {
        &self.stations[id.0]
    }

    /// All stations in first-appearance order.
    pub fn as_slice(&self) -> &[Station] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

/// Stations plus the retained direct cost of every connected ordered pair.
#[derive(Debug, Default)]
pub(crate) struct Graph {
    pub stations: StationIndex,
    pub direct: HashMap<(StationId, StationId), u64>,
}

impl Graph {
    /// Ingest a stream of edges.
    ///
    /// `None` items are skipped. When an ordered pair appears more than once,
    /// the first cost seen is kept.
    pub fn from_edges<I, T>(edges: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Option<Edge>>,
    {
        let mut graph = Graph::default();
        let mut skipped = 0usize;
        let mut duplicates = 0usize;

        for item in edges {
            let Some(edge) = item.into() else {
                skipped += 1;
                continue;
            };
            if !graph.add(edge) {
                duplicates += 1;
            }
        }

        debug!(
            stations = graph.stations.len(),
            edges = graph.direct.len(),
            skipped,
            duplicates,
            "Ingested direct edges"
        );

        graph
    }

    /// Returns false if the pair already had a cost.
    fn add(&mut self, edge: Edge) -> bool {
        let origin = self.stations.insert(edge.origin);
        let destination = self.stations.insert(edge.destination);

        match self.direct.entry((origin, destination)) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(edge.cost);
                true
            }
        }
    }
}
