//! Data transfer objects for the JSON network format.
//!
//! These mirror the wire shape exactly and are converted into domain types
//! before any routing happens.

use serde::{Deserialize, Serialize};

use crate::domain::{Line, PathResult, Position, Station, StationId, TransitNetwork};

use super::error::LoadError;

/// A 3-D position.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct PositionDto {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A station record.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StationDto {
    pub id: String,
    pub name: String,
    pub position: PositionDto,
}

/// A line record.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LineDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: String,
    pub stations: Vec<String>,
}

/// Top-level network document.
///
/// Both collections are optional here so that a document missing one of
/// them can be reported as a format error rather than a parse error.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NetworkDto {
    pub stations: Option<Vec<StationDto>>,
    pub lines: Option<Vec<LineDto>>,
}

impl NetworkDto {
    /// Validate the document and convert it into a network.
    pub fn into_network(self) -> Result<TransitNetwork, LoadError> {
        let stations = self
            .stations
            .ok_or(LoadError::InvalidFormat("missing stations"))?;
        let lines = self.lines.ok_or(LoadError::InvalidFormat("missing lines"))?;

        if stations.is_empty() {
            return Err(LoadError::InvalidFormat("no stations"));
        }
        if lines.is_empty() {
            return Err(LoadError::InvalidFormat("no lines"));
        }

        let stations = stations.into_iter().map(Station::from).collect();
        let lines = lines.into_iter().map(Line::from).collect();
        Ok(TransitNetwork::new(stations, lines)?)
    }
}

impl From<PositionDto> for Position {
    fn from(p: PositionDto) -> Self {
        Position::new(p.x, p.y, p.z)
    }
}

impl From<Position> for PositionDto {
    fn from(p: Position) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

impl From<StationDto> for Station {
    fn from(s: StationDto) -> Self {
        Station::new(s.id, s.name, s.position.into())
    }
}

impl From<&Station> for StationDto {
    fn from(s: &Station) -> Self {
        Self {
            id: s.id.to_string(),
            name: s.name.clone(),
            position: s.position.into(),
        }
    }
}

impl From<LineDto> for Line {
    fn from(l: LineDto) -> Self {
        let stations = l.stations.into_iter().map(StationId::from).collect();
        Line::new(l.id, l.name, l.color, stations)
    }
}

/// A computed route, in the shape the front end expects.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathResultDto {
    pub stations: Vec<StationDto>,
    pub total_distance: f64,
    pub lines: Vec<String>,
}

impl From<&PathResult> for PathResultDto {
    fn from(path: &PathResult) -> Self {
        Self {
            stations: path.stations.iter().map(StationDto::from).collect(),
            total_distance: path.total_distance,
            lines: path.lines.iter().cloned().collect(),
        }
    }
}
