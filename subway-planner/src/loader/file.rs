//! Reading network descriptions from JSON text and files.

use std::path::Path;

use tracing::debug;

use crate::domain::{PathResult, TransitNetwork};

use super::dto::{NetworkDto, PathResultDto};
use super::error::LoadError;

/// Parse a network description from JSON text.
pub fn parse_network(json: &str) -> Result<TransitNetwork, LoadError> {
    let dto: NetworkDto = serde_json::from_str(json)?;
    dto.into_network()
}

/// Load a network description from a JSON file.
pub fn load_network(path: impl AsRef<Path>) -> Result<TransitNetwork, LoadError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let network = parse_network(&json)?;
    debug!(
        path = %path.display(),
        stations = network.stations().len(),
        lines = network.lines().len(),
        "Loaded network"
    );
    Ok(network)
}

/// Render a route as pretty-printed JSON.
pub fn route_to_json(path: &PathResult) -> Result<String, LoadError> {
    Ok(serde_json::to_string_pretty(&PathResultDto::from(path))?)
}
