//! The transit network aggregate.

use std::collections::HashMap;

use super::{DomainError, Line, Station, StationId};

/// Stations and the lines running between them.
///
/// Station ids are unique; this is checked in [`TransitNetwork::new`], so
/// lookups by id are always unambiguous. The network is immutable once built.
#[derive(Debug, Clone, Default)]
pub struct TransitNetwork {
    stations: Vec<Station>,
    lines: Vec<Line>,
    /// Station id -> index into `stations`.
    index: HashMap<StationId, usize>,
}

impl TransitNetwork {
    /// Build a network, rejecting duplicate station ids.
    ///
    /// Lines may reference ids that are not in `stations`; such references
    /// are ignored when routing.
    ///
    /// ```
    /// use subway_planner::domain::{Position, Station, TransitNetwork};
    ///
    /// let a = Station::new("A", "Alpha", Position::default());
    /// let dup = Station::new("A", "Again", Position::default());
    /// assert!(TransitNetwork::new(vec![a, dup], vec![]).is_err());
    /// ```
    pub fn new(stations: Vec<Station>, lines: Vec<Line>) -> Result<Self, DomainError> {
        let mut index = HashMap::with_capacity(stations.len());
        for (i, station) in stations.iter().enumerate() {
            if index.insert(station.id.clone(), i).is_some() {
                return Err(DomainError::DuplicateStation(station.id.clone()));
            }
        }

        Ok(Self {
            stations,
            lines,
            index,
        })
    }

    /// Look up a station by id.
    pub fn station(&self, id: &str) -> Option<&Station> {
        self.index.get(id).map(|&i| &self.stations[i])
    }

    /// Returns true if the network has a station with this id.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All stations, in the order they were supplied.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// All lines, in the order they were supplied.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Lines calling at a station.
    pub fn lines_serving<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Line> + 'a {
        self.lines.iter().filter(move |line| line.serves(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Position;

    fn station(id: &str) -> Station {
        Station::new(id, format!("Station {id}"), Position::default())
    }

    #[test]
    fn lookup_by_id() {
        let net = TransitNetwork::new(vec![station("A"), station("B")], vec![]).unwrap();

        assert_eq!(net.station("A").map(|s| s.name.as_str()), Some("Station A"));
        assert!(net.contains("B"));
        assert!(net.station("Z").is_none());
        assert_eq!(net.stations().len(), 2);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = TransitNetwork::new(vec![station("A"), station("B"), station("A")], vec![])
            .unwrap_err();
        assert_eq!(err, DomainError::DuplicateStation(StationId::new("A")));
    }

    #[test]
    fn lines_may_reference_unknown_stations() {
        let line = Line::new(
            "L1",
            "Red",
            "#f00",
            vec![StationId::new("A"), StationId::new("GHOST")],
        );
        let net = TransitNetwork::new(vec![station("A")], vec![line]).unwrap();
        assert_eq!(net.lines().len(), 1);
        assert!(!net.contains("GHOST"));
    }

    #[test]
    fn lines_serving_station() {
        let red = Line::new("R", "Red", "#f00", vec![StationId::new("A"), StationId::new("B")]);
        let blue = Line::new("U", "Blue", "#00f", vec![StationId::new("B"), StationId::new("C")]);
        let net = TransitNetwork::new(
            vec![station("A"), station("B"), station("C")],
            vec![red, blue],
        )
        .unwrap();

        let names: Vec<_> = net.lines_serving("B").map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Red", "Blue"]);
        assert_eq!(net.lines_serving("A").count(), 1);
    }
}
