//! Turning a search tree into a route.

use std::collections::BTreeSet;

use tracing::trace;

use super::solver::SearchTree;
use crate::domain::{PathResult, TransitNetwork};

/// Rebuild the route from `start` to `end` out of a finished search.
///
/// Returns `None` when the predecessor chain from `end` does not lead back
/// to `start`, i.e. `end` was never reached. The total distance is the one
/// the solver computed for `end`.
pub fn reconstruct(
    tree: &SearchTree,
    network: &TransitNetwork,
    start: &str,
    end: &str,
) -> Option<PathResult> {
    let mut ids: Vec<&str> = vec![end];
    let mut current = end;
    while let Some(previous) = tree.predecessor(current) {
        ids.push(previous.as_str());
        current = previous.as_str();
    }
    ids.reverse();

    if ids.first() != Some(&start) {
        trace!(start, end, "Predecessor chain does not reach start");
        return None;
    }

    let total_distance = tree.distance(end)?;

    let stations = ids
        .iter()
        .filter_map(|id| network.station(id).cloned())
        .collect();

    Some(PathResult {
        stations,
        total_distance,
        lines: lines_used(network, &ids),
    })
}

/// Names of every line on which some consecutive pair of `ids` are
/// neighboring stops.
fn lines_used(network: &TransitNetwork, ids: &[&str]) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for pair in ids.windows(2) {
        for line in network.lines() {
            if line.connects(pair[0], pair[1]) {
                names.insert(line.name.clone());
            }
        }
    }
    names
}
