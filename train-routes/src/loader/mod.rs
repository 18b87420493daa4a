//! Edge loading from delimited text.
//!
//! Reading happens in two stages. A [`RecordSource`] yields raw rows of text
//! fields, and an [`EdgeReader`] validates each row into an [`Edge`]. Rows
//! that fail validation become `None` rather than errors, so one bad line
//! never stops a load. Only failing to open the source is fatal.

mod config;
mod error;
mod source;

use tracing::debug;

use crate::domain::{Edge, Station};
use crate::router::Router;

pub use config::LoaderConfig;
pub use error::{InvalidRecord, LoaderError};
pub use source::{CsvRecords, CsvSource, MemorySource, RawRecord, RecordSource};

/// Validates the records of a source into edges.
#[derive(Debug, Clone)]
pub struct EdgeReader<S> {
    source: S,
}

impl<S: RecordSource> EdgeReader<S> {
    /// Create a reader over `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Open the source and return a lazy stream of validated edges.
    ///
    /// Each item is `Some(edge)` for a valid record and `None` for one that
    /// was skipped.
    pub fn edges(&self) -> Result<Edges<S::Records>, LoaderError> {
        Ok(Edges {
            records: self.source.open()?,
            record: 0,
        })
    }

    /// Read every edge and build a router from them.
    pub fn build_router(&self) -> Result<Router, LoaderError> {
        Ok(Router::build(self.edges()?))
    }
}

/// Lazy stream of edges from one pass over a source.
pub struct Edges<R> {
    records: R,
    record: usize,
}

impl<R> Iterator for Edges<R>
where
    R: Iterator<Item = Result<RawRecord, LoaderError>>,
{
    type Item = Option<Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.records.next()?;
        self.record += 1;

        let edge = match result {
            Ok(record) => match parse_edge(&record) {
                Ok(edge) => Some(edge),
                Err(reason) => {
                    debug!(record = self.record, %reason, "Skipping malformed record");
                    None
                }
            },
            Err(e) => {
                debug!(record = self.record, error = %e, "Skipping unreadable record");
                None
            }
        };

        Some(edge)
    }
}

/// Validate one raw record.
///
/// The first three fields are origin, destination and travel time; any
/// further fields are ignored. Station names are trimmed, and the travel
/// time must be a non-negative integer.
pub fn parse_edge(record: &RawRecord) -> Result<Edge, InvalidRecord> {
    let (Some(origin), Some(destination), Some(cost)) =
        (record.get(0), record.get(1), record.get(2))
    else {
        return Err(InvalidRecord::TooFewFields(record.len()));
    };

    let cost: u64 = cost
        .trim()
        .parse()
        .map_err(|_| InvalidRecord::InvalidCost(cost.to_string()))?;

    let origin = Station::parse(origin).map_err(|_| InvalidRecord::BlankOrigin)?;
    let destination =
        Station::parse(destination).map_err(|_| InvalidRecord::BlankDestination)?;

    Ok(Edge::new(origin, destination, cost))
}
