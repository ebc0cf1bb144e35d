//! Weighted adjacency graph derived from a transit network.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{StationId, TransitNetwork};

/// Undirected graph over stations, weighted by straight-line distance.
///
/// Every station in the network has an entry, including stations that no
/// line touches. Edges are stored in both directions with the same weight.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<StationId, HashMap<StationId, f64>>,
}

impl Graph {
    /// Build the graph for a network.
    ///
    /// Each pair of consecutive stations on a line becomes an edge. Pairs
    /// that name an unknown station are skipped. When several lines join the
    /// same pair, the line processed last sets the weight.
    ///
    /// ```
    /// use subway_planner::domain::{Line, Position, Station, StationId, TransitNetwork};
    /// use subway_planner::planner::Graph;
    ///
    /// let network = TransitNetwork::new(
    ///     vec![
    ///         Station::new("A", "Alpha", Position::new(0.0, 0.0, 0.0)),
    ///         Station::new("B", "Beta", Position::new(3.0, 4.0, 0.0)),
    ///     ],
    ///     vec![Line::new("L1", "L1", "#f00", vec![StationId::new("A"), StationId::new("B")])],
    /// )
    /// .unwrap();
    ///
    /// let graph = Graph::build(&network);
    /// assert_eq!(graph.weight("A", "B"), Some(5.0));
    /// assert_eq!(graph.weight("B", "A"), Some(5.0));
    /// ```
    pub fn build(network: &TransitNetwork) -> Self {
        let mut adjacency: HashMap<StationId, HashMap<StationId, f64>> = network
            .stations()
            .iter()
            .map(|station| (station.id.clone(), HashMap::new()))
            .collect();

        let mut skipped = 0usize;
        for line in network.lines() {
            for (from_id, to_id) in line.segments() {
                let (Some(from), Some(to)) =
                    (network.station(from_id.as_str()), network.station(to_id.as_str()))
                else {
                    skipped += 1;
                    continue;
                };

                let distance = from.distance_to(to);
                if let Some(neighbors) = adjacency.get_mut(from_id) {
                    neighbors.insert(to_id.clone(), distance);
                }
                if let Some(neighbors) = adjacency.get_mut(to_id) {
                    neighbors.insert(from_id.clone(), distance);
                }
            }
        }

        let graph = Self { adjacency };
        debug!(
            stations = graph.len(),
            edges = graph.edge_count(),
            skipped,
            "Built route graph"
        );
        graph
    }

    /// Returns true if the graph has a node for this station.
    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// The graph's own id for a station.
    pub fn node(&self, id: &str) -> Option<&StationId> {
        self.adjacency.get_key_value(id).map(|(key, _)| key)
    }

    /// Neighbors of a station with their edge weights.
    ///
    /// Returns `None` for unknown stations.
    pub fn neighbors(&self, id: &str) -> Option<&HashMap<StationId, f64>> {
        self.adjacency.get(id)
    }

    /// Weight of the edge between two stations, if they are adjacent.
    pub fn weight(&self, from: &str, to: &str) -> Option<f64> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// All station ids in the graph, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &StationId> {
        self.adjacency.keys()
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns true if there are no stations.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of undirected edges. Self-loops count once.
    pub fn edge_count(&self) -> usize {
        let (loops, directed) = self
            .adjacency
            .iter()
            .flat_map(|(from, neighbors)| neighbors.keys().map(move |to| from == to))
            .fold((0, 0), |(loops, directed), is_loop| {
                if is_loop {
                    (loops + 1, directed)
                } else {
                    (loops, directed + 1)
                }
            });
        loops + directed / 2
    }
}
