//! Lines: ordered sequences of stations along physical track.

use super::{LineId, StationId};

/// A line through the network.
///
/// `stations` is in track order. Consecutive entries are adjacent stations;
/// the same station may appear more than once (loop lines).
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub id: LineId,
    pub name: String,
    /// Display color. Not used for routing.
    pub color: String,
    pub stations: Vec<StationId>,
}

impl Line {
    pub fn new(
        id: impl Into<LineId>,
        name: impl Into<String>,
        color: impl Into<String>,
        stations: Vec<StationId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            stations,
        }
    }

    /// Pairs of consecutive stations, in track order.
    pub fn segments(&self) -> impl Iterator<Item = (&StationId, &StationId)> {
        self.stations.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Returns true if `a` and `b` are next to each other somewhere on this
    /// line, in either direction.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        self.segments().any(|(from, to)| {
            let (from, to) = (from.as_str(), to.as_str());
            (from == a && to == b) || (from == b && to == a)
        })
    }

    /// Returns true if the line calls at `station`.
    pub fn serves(&self, station: &str) -> bool {
        self.stations.iter().any(|s| s.as_str() == station)
    }
}
