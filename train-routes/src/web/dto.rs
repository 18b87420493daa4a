//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Station;
use crate::router::RouteEntry;

/// Request for the route between two stations.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Boarding station
    pub from: String,

    /// Alighting station
    pub to: String,
}

/// The fastest route between two stations.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Boarding station
    pub from: String,

    /// Alighting station
    pub to: String,

    /// Total travel time in minutes
    pub time: u64,

    /// Number of connections travelled
    pub length: usize,

    /// Intermediate stops
    pub stops: usize,

    /// Pivot station recorded for this route
    pub via: Option<String>,

    /// Every station on the route, both ends included
    pub path: Vec<String>,
}

/// Response listing known stations.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    /// Station names in first-appearance order
    pub stations: Vec<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl RouteResult {
    /// Create from a route entry and its reconstructed path.
    pub fn from_route(from: &str, to: &str, route: &RouteEntry, path: &[Station]) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            time: route.time,
            length: route.length,
            stops: route.stops(),
            via: route.via.as_ref().map(|s| s.to_string()),
            path: path.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(s: &str) -> Station {
        Station::parse(s).unwrap()
    }

    #[test]
    fn route_result_json() {
        let route = RouteEntry {
            time: 5,
            length: 2,
            via: Some(station("C")),
        };
        let path = [station("A"), station("C"), station("D")];

        let result = RouteResult::from_route("A", "D", &route, &path);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "from": "A",
                "to": "D",
                "time": 5,
                "length": 2,
                "stops": 1,
                "via": "C",
                "path": ["A", "C", "D"],
            })
        );
    }

    #[test]
    fn direct_route_has_null_via() {
        let route = RouteEntry {
            time: 2,
            length: 1,
            via: None,
        };
        let result = RouteResult::from_route("A", "B", &route, &[station("A"), station("B")]);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["via"], serde_json::Value::Null);
        assert_eq!(json["stops"], 0);
    }

    #[test]
    fn route_request_deserializes() {
        let req: RouteRequest = serde_json::from_str(r#"{"from":"A","to":"B"}"#).unwrap();
        assert_eq!(req.from, "A");
        assert_eq!(req.to, "B");
    }
}
