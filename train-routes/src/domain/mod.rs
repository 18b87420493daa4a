//! Domain types for the route finder.
//!
//! Stations and edges are validated at construction time, so the router can
//! trust every value it receives.

mod edge;
mod station;

pub use edge::Edge;
pub use station::{InvalidStation, Station, StationId};
