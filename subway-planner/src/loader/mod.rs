//! Loading networks from the JSON data format.
//!
//! The format is a single document with `stations` (id, name, 3-D position)
//! and `lines` (id, name, color, ordered station ids). Documents are
//! validated here; the planner assumes it receives a well-formed network.

mod dto;
mod error;
mod file;

pub use dto::{LineDto, NetworkDto, PathResultDto, PositionDto, StationDto};
pub use error::LoadError;
pub use file::{load_network, parse_network, route_to_json};
