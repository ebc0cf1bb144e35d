//! Route search entry points.
//!
//! [`compute_shortest_path`] builds a fresh graph for every call.
//! [`RoutePlanner`] builds it once and answers any number of queries.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{PathResult, StationId, TransitNetwork};

use super::config::PlannerConfig;
use super::graph::Graph;
use super::reconstruct::reconstruct;
use super::solver::solve;

/// Why a route could not be produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    /// Start or end is not a station in the network
    #[error("unknown station: {0}")]
    UnknownStation(StationId),

    /// Both stations exist but no chain of line segments joins them
    #[error("no route from {from} to {to}")]
    Unreachable { from: StationId, to: StationId },

    /// Search exceeded the configured deadline
    #[error("search timed out")]
    Timeout,
}

impl RouteError {
    /// Returns true for the outcomes that mean "no such route", as opposed
    /// to a search that gave up.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RouteError::UnknownStation(_) | RouteError::Unreachable { .. }
        )
    }
}

/// Find the minimum-distance route between two stations.
///
/// Returns `None` if either id is unknown or the stations are not connected.
///
/// ```
/// use subway_planner::domain::{Line, Position, Station, StationId, TransitNetwork};
/// use subway_planner::planner::compute_shortest_path;
///
/// let network = TransitNetwork::new(
///     vec![
///         Station::new("A", "Alpha", Position::new(0.0, 0.0, 0.0)),
///         Station::new("B", "Beta", Position::new(3.0, 4.0, 0.0)),
///         Station::new("C", "Gamma", Position::new(3.0, 4.0, 3.0)),
///     ],
///     vec![Line::new(
///         "l1",
///         "L1",
///         "#e00",
///         vec![StationId::new("A"), StationId::new("B"), StationId::new("C")],
///     )],
/// )
/// .unwrap();
///
/// let path = compute_shortest_path(&network, "A", "C").unwrap();
/// assert_eq!(path.station_ids(), vec!["A", "B", "C"]);
/// assert_eq!(path.total_distance, 8.0);
/// assert!(path.lines.contains("L1"));
///
/// assert!(compute_shortest_path(&network, "A", "Z").is_none());
/// ```
pub fn compute_shortest_path(
    network: &TransitNetwork,
    start: &str,
    end: &str,
) -> Option<PathResult> {
    let graph = Graph::build(network);
    route_on(&graph, network, start, end, &PlannerConfig::default()).ok()
}

fn route_on(
    graph: &Graph,
    network: &TransitNetwork,
    start: &str,
    end: &str,
    config: &PlannerConfig,
) -> Result<PathResult, RouteError> {
    let tree = solve(graph, start, end, config)?;
    reconstruct(&tree, network, start, end).ok_or_else(|| RouteError::Unreachable {
        from: StationId::new(start),
        to: StationId::new(end),
    })
}

/// Route planner over a fixed network.
///
/// The graph is built once in [`RoutePlanner::new`]. Queries only read it,
/// so a planner can be shared between threads.
#[derive(Debug, Clone)]
pub struct RoutePlanner {
    network: Arc<TransitNetwork>,
    graph: Graph,
    config: PlannerConfig,
}

impl RoutePlanner {
    /// Create a new planner, building the graph for `network`.
    pub fn new(network: Arc<TransitNetwork>, config: PlannerConfig) -> Self {
        let graph = Graph::build(&network);
        debug!(
            stations = graph.len(),
            lines = network.lines().len(),
            selection = ?config.selection,
            "Route planner ready"
        );
        Self {
            network,
            graph,
            config,
        }
    }

    /// Find the minimum-distance route from `start` to `end`.
    pub fn route(&self, start: &str, end: &str) -> Result<PathResult, RouteError> {
        route_on(&self.graph, &self.network, start, end, &self.config)
    }

    /// The network this planner routes over.
    pub fn network(&self) -> &TransitNetwork {
        &self.network
    }

    /// The prebuilt graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Line, Position, Station};
    use std::time::Duration;

    fn network() -> Arc<TransitNetwork> {
        let stations = vec![
            Station::new("A", "Alpha", Position::new(0.0, 0.0, 0.0)),
            Station::new("B", "Beta", Position::new(3.0, 4.0, 0.0)),
            Station::new("C", "Gamma", Position::new(3.0, 4.0, 3.0)),
            Station::new("D", "Delta", Position::new(9.0, 9.0, 9.0)),
        ];
        let lines = vec![Line::new(
            "l1",
            "L1",
            "#e00",
            vec![StationId::new("A"), StationId::new("B"), StationId::new("C")],
        )];
        Arc::new(TransitNetwork::new(stations, lines).unwrap())
    }

    #[test]
    fn error_display() {
        let err = RouteError::UnknownStation(StationId::new("Z"));
        assert_eq!(err.to_string(), "unknown station: Z");

        let err = RouteError::Unreachable {
            from: StationId::new("A"),
            to: StationId::new("D"),
        };
        assert_eq!(err.to_string(), "no route from A to D");

        assert_eq!(RouteError::Timeout.to_string(), "search timed out");
    }

    #[test]
    fn not_found_classification() {
        assert!(RouteError::UnknownStation(StationId::new("Z")).is_not_found());
        assert!(
            RouteError::Unreachable {
                from: StationId::new("A"),
                to: StationId::new("B"),
            }
            .is_not_found()
        );
        assert!(!RouteError::Timeout.is_not_found());
    }

    #[test]
    fn planner_routes() {
        let planner = RoutePlanner::new(network(), PlannerConfig::default());
        let path = planner.route("A", "C").unwrap();

        assert_eq!(path.station_ids(), vec!["A", "B", "C"]);
        assert_eq!(path.total_distance, 8.0);
    }

    #[test]
    fn planner_reports_reason() {
        let planner = RoutePlanner::new(network(), PlannerConfig::default());

        assert_eq!(
            planner.route("A", "Z"),
            Err(RouteError::UnknownStation(StationId::new("Z")))
        );
        assert_eq!(
            planner.route("A", "D"),
            Err(RouteError::Unreachable {
                from: StationId::new("A"),
                to: StationId::new("D"),
            })
        );
    }

    #[test]
    fn planner_honours_deadline() {
        let config = PlannerConfig::default().with_deadline(Duration::ZERO);
        let planner = RoutePlanner::new(network(), config);
        assert_eq!(planner.route("A", "C"), Err(RouteError::Timeout));
    }

    #[test]
    fn planner_matches_one_shot() {
        let net = network();
        let planner = RoutePlanner::new(net.clone(), PlannerConfig::default());

        for (from, to) in [("A", "C"), ("C", "A"), ("B", "B"), ("A", "D"), ("A", "Z")] {
            assert_eq!(
                planner.route(from, to).ok(),
                compute_shortest_path(&net, from, to)
            );
        }
    }

    #[test]
    fn planner_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RoutePlanner>();
    }
}
