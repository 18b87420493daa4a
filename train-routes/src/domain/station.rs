//! Station identifier type.

use std::borrow::Borrow;
use std::fmt;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station: {reason}")]
pub struct InvalidStation {
    reason: &'static str,
}

/// An opaque station identifier.
///
/// Stations carry no attributes beyond their name. The name is trimmed of
/// surrounding whitespace on parse and is otherwise compared exactly, so
/// `"Paddington"` and `"paddington"` are different stations.
///
/// # Examples
///
/// ```
/// use train_routes::domain::Station;
///
/// let pad = Station::parse("  Paddington ").unwrap();
/// assert_eq!(pad.as_str(), "Paddington");
///
/// // Blank names are rejected
/// assert!(Station::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Station(String);

impl Station {
    /// Parse a station from raw text, trimming surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self, InvalidStation> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(InvalidStation {
                reason: "must not be empty",
            });
        }

        Ok(Station(trimmed.to_string()))
    }

    /// Returns the station name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Station {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Station {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.0)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Dense index of a station inside a built router.
///
/// Indices are handed out in first-appearance order while edges are ingested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub usize);
