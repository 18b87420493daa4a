//! Dense all-pairs route table and the Floyd–Warshall relaxation.

use crate::domain::StationId;

use super::graph::Graph;

/// A reachable cell of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cell {
    /// Minimum total travel time.
    pub time: u64,

    /// Number of edges on the route.
    pub length: usize,

    /// Pivot of the relaxation that last improved this cell.
    /// `None` for a direct edge.
    pub via: Option<StationId>,
}

/// Square table indexed by `(from, to)` station ids, stored row-major.
#[derive(Debug, Clone, Default)]
pub(crate) struct RouteTable {
    size: usize,
    cells: Vec<Option<Cell>>,
}

impl RouteTable {
    /// Allocate the full table and seed it with the direct edges.
    pub fn seed(graph: &Graph) -> Self {
        let size = graph.stations.len();
        let mut cells = vec![None; size * size];

        for (&(from, to), &cost) in &graph.direct {
            cells[from.0 * size + to.0] = Some(Cell {
                time: cost,
                length: 1,
                via: None,
            });
        }

        Self { size, cells }
    }

    pub fn get(&self, from: StationId, to: StationId) -> Option<&Cell> {
        debug_assert!(from.0 < self.size && to.0 < self.size);
        self.cells[from.0 * self.size + to.0].as_ref()
    }

    /// Run the relaxation to completion.
    ///
    /// The pivot is the outermost loop and every loop covers every station,
    /// so after pivot `k` each cell holds the best route whose intermediate
    /// stations are drawn from `0..=k`. A candidate replaces a cell only when
    /// it is strictly faster, so ties keep the earlier route.
    pub fn relax_all(&mut self) {
        let n = self.size;

        for k in 0..n {
            for i in 0..n {
                // Cell (i, k) cannot improve while k is the pivot.
                let Some(first) = self.cells[i * n + k] else {
                    continue;
                };

                for j in 0..n {
                    let Some(second) = self.cells[k * n + j] else {
                        continue;
                    };

                    let time = first.time.saturating_add(second.time);
                    let slot = &mut self.cells[i * n + j];
                    let improves = match slot {
                        None => true,
                        Some(current) => time < current.time,
                    };

                    if improves {
                        *slot = Some(Cell {
                            time,
                            length: first.length + second.length,
                            via: Some(StationId(k)),
                        });
                    }
                }
            }
        }
    }

    /// Number of reachable ordered pairs.
    pub fn reachable(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
