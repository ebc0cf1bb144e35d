//! Configuration for the route planner.

use std::time::Duration;

/// How the solver picks the next station to settle.
///
/// Both strategies produce the same optimal distances; they differ only in
/// cost. A linear scan is O(V^2) and is fine for a few hundred stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Scan every unvisited station for the minimum distance.
    LinearScan,

    /// Keep candidates in a binary heap, skipping stale entries.
    #[default]
    BinaryHeap,
}

/// Configuration parameters for route search.
#[derive(Debug, Clone, Default)]
pub struct PlannerConfig {
    /// Node selection strategy.
    pub selection: Selection,

    /// Maximum wall-clock time a single search may take.
    /// `None` means no limit.
    pub deadline: Option<Duration>,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(selection: Selection, deadline: Option<Duration>) -> Self {
        Self {
            selection,
            deadline,
        }
    }

    /// Use the given selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Abort searches that run longer than `deadline`.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}
