//! The result of a successful route query.

use std::collections::BTreeSet;

use super::Station;

/// A minimum-distance route between two stations.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Stations from start to end, inclusive.
    pub stations: Vec<Station>,

    /// Sum of edge weights along the route.
    pub total_distance: f64,

    /// Names of the lines the route travels on. Sorted, unique.
    pub lines: BTreeSet<String>,
}

impl PathResult {
    /// The first station on the route.
    pub fn origin(&self) -> Option<&Station> {
        self.stations.first()
    }

    /// The last station on the route.
    pub fn destination(&self) -> Option<&Station> {
        self.stations.last()
    }

    /// Number of hops between stations.
    pub fn hop_count(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }

    /// Station ids along the route, as strings.
    pub fn station_ids(&self) -> Vec<&str> {
        self.stations.iter().map(|s| s.id.as_str()).collect()
    }
}
