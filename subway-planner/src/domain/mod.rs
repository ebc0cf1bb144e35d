//! Domain types for the subway route planner.
//!
//! Stations, lines and the network that holds them, plus the route result.
//! Invariants are checked at construction time, so the planner can trust
//! that station ids in a `TransitNetwork` are unique.

mod error;
mod ids;
mod line;
mod network;
mod path;
mod station;

pub use error::DomainError;
pub use ids::{LineId, StationId};
pub use line::Line;
pub use network::TransitNetwork;
pub use path::PathResult;
pub use station::{Position, Station};
