//! Train route finder.
//!
//! Loads directed station-to-station connections from a delimited file,
//! precomputes the fastest route between every pair of stations, and answers
//! "how long from here to there, and how many stops?" from the command line
//! or over HTTP.

pub mod domain;
pub mod loader;
pub mod router;
pub mod ui;
pub mod web;
