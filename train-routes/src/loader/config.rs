//! CSV parsing configuration.

use csv::{ReaderBuilder, Trim};

/// How a delimited edge file is laid out.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Field delimiter byte.
    pub delimiter: u8,

    /// Whether the first row is a header and should be skipped.
    pub has_headers: bool,
}

impl LoaderConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(delimiter: u8, has_headers: bool) -> Self {
        Self {
            delimiter,
            has_headers,
        }
    }

    /// A CSV reader builder for this layout.
    ///
    /// Records may have any number of fields; arity is checked per record.
    pub fn reader_builder(&self) -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .flexible(true)
            .trim(Trim::Fields);
        builder
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = LoaderConfig::default();

        assert_eq!(config.delimiter, b',');
        assert!(!config.has_headers);
    }

    #[test]
    fn custom_config() {
        let config = LoaderConfig::new(b';', true);

        assert_eq!(config.delimiter, b';');
        assert!(config.has_headers);
    }

    #[test]
    fn builder_reads_ragged_rows() {
        let data = "A, B ,3\nC,D\n";
        let mut reader = LoaderConfig::default()
            .reader_builder()
            .from_reader(data.as_bytes());

        let rows: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect();

        assert_eq!(rows, vec![vec!["A", "B", "3"], vec!["C", "D"]]);
    }
}
