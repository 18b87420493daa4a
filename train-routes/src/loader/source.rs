//! Raw record sources.
//!
//! A source yields untyped rows of text fields. Opening a source is the only
//! step allowed to fail outright; individual rows that cannot be read are
//! reported inline so the caller can skip them.

use std::fs::File;
use std::path::{Path, PathBuf};

use super::config::LoaderConfig;
use super::error::LoaderError;

/// A single row of text fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: Vec<String>,
}

impl RawRecord {
    /// Field at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Number of fields in the row.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for RawRecord {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Trait for anything that can be read as a sequence of raw records.
///
/// Each call to [`open`](RecordSource::open) starts a fresh single pass.
pub trait RecordSource {
    /// Iterator over the records of one pass.
    type Records: Iterator<Item = Result<RawRecord, LoaderError>>;

    /// Open the source for reading.
    fn open(&self) -> Result<Self::Records, LoaderError>;
}

/// A delimited text file on disk.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    config: LoaderConfig,
}

impl CsvSource {
    /// Create a source for `path` with the default layout.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_config(path, LoaderConfig::default())
    }

    /// Create a source for `path` with a custom layout.
    pub fn with_config(path: impl AsRef<Path>, config: LoaderConfig) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            config,
        }
    }
}

impl RecordSource for CsvSource {
    type Records = CsvRecords;

    fn open(&self) -> Result<CsvRecords, LoaderError> {
        let file = File::open(&self.path).map_err(|source| LoaderError::SourceUnavailable {
            path: self.path.clone(),
            source,
        })?;

        Ok(CsvRecords {
            inner: self.config.reader_builder().from_reader(file).into_records(),
            record: 0,
        })
    }
}

/// Records of an open [`CsvSource`].
pub struct CsvRecords {
    inner: csv::StringRecordsIntoIter<File>,
    record: usize,
}

impl Iterator for CsvRecords {
    type Item = Result<RawRecord, LoaderError>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.inner.next()?;
        self.record += 1;

        Some(
            result
                .map(|row| row.iter().collect())
                .map_err(|e| LoaderError::Record {
                    record: self.record,
                    message: e.to_string(),
                }),
        )
    }
}

/// Rows held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    rows: Vec<RawRecord>,
}

impl MemorySource {
    /// Create a source from rows of fields.
    ///
    /// ```
    /// use train_routes::loader::{MemorySource, RecordSource};
    ///
    /// let source = MemorySource::new([["A", "B", "2"], ["B", "C", "3"]]);
    /// assert_eq!(source.open().unwrap().count(), 2);
    /// ```
    pub fn new<I, R, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows.into_iter().map(|r| r.into_iter().collect()).collect(),
        }
    }
}

impl RecordSource for MemorySource {
    type Records = std::vec::IntoIter<Result<RawRecord, LoaderError>>;

    fn open(&self) -> Result<Self::Records, LoaderError> {
        let rows: Vec<_> = self.rows.iter().cloned().map(Ok).collect();
        Ok(rows.into_iter())
    }
}
