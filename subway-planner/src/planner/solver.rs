//! Single-source shortest path search (Dijkstra).
//!
//! The search settles stations in order of non-decreasing distance from the
//! start and stops as soon as the destination is selected, since its distance
//! is final at that point. Everything the search learned is returned as a
//! [`SearchTree`] for path reconstruction.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::Instant;

use tracing::{debug, trace};

use super::config::{PlannerConfig, Selection};
use super::graph::Graph;
use super::search::RouteError;
use crate::domain::StationId;

/// Distances and predecessor links produced by a search.
#[derive(Debug, Clone)]
pub struct SearchTree {
    /// Best known distance from the start. Unreached stations are infinite.
    distances: HashMap<StationId, f64>,

    /// Previous station on the best known path. The start has no entry.
    predecessors: HashMap<StationId, StationId>,

    /// Number of stations settled before the search stopped.
    settled: usize,
}

impl SearchTree {
    fn new(graph: &Graph, start: &StationId) -> Self {
        let mut distances: HashMap<StationId, f64> = graph
            .nodes()
            .map(|id| (id.clone(), f64::INFINITY))
            .collect();
        distances.insert(start.clone(), 0.0);

        Self {
            distances,
            predecessors: HashMap::new(),
            settled: 0,
        }
    }

    /// Distance from the start, or `None` if the station was not reached.
    pub fn distance(&self, id: &str) -> Option<f64> {
        self.distances.get(id).copied().filter(|d| d.is_finite())
    }

    /// Previous station on the path to `id`.
    pub fn predecessor(&self, id: &str) -> Option<&StationId> {
        self.predecessors.get(id)
    }

    /// Number of stations settled during the search.
    pub fn settled(&self) -> usize {
        self.settled
    }

    fn tentative(&self, id: &StationId) -> f64 {
        self.distances.get(id).copied().unwrap_or(f64::INFINITY)
    }

    /// Relax every unvisited neighbor of `current`, returning the ones whose
    /// distance improved.
    fn relax(
        &mut self,
        graph: &Graph,
        current: &StationId,
        visited: &HashSet<StationId>,
    ) -> Vec<(StationId, f64)> {
        let Some(neighbors) = graph.neighbors(current.as_str()) else {
            return Vec::new();
        };
        let base = self.tentative(current);

        let mut improved = Vec::new();
        for (neighbor, weight) in neighbors {
            if visited.contains(neighbor) {
                continue;
            }
            let candidate = base + weight;
            if candidate < self.tentative(neighbor) {
                self.distances.insert(neighbor.clone(), candidate);
                self.predecessors.insert(neighbor.clone(), current.clone());
                improved.push((neighbor.clone(), candidate));
            }
        }
        improved
    }
}

/// Run Dijkstra's algorithm from `start`, stopping once `end` is settled.
///
/// Fails with [`RouteError::UnknownStation`] if either station is not in the
/// graph, and with [`RouteError::Timeout`] if the configured deadline passes.
/// An unreachable `end` is not an error here: it simply has no distance in
/// the returned tree.
pub fn solve(
    graph: &Graph,
    start: &str,
    end: &str,
    config: &PlannerConfig,
) -> Result<SearchTree, RouteError> {
    let start_id = graph
        .node(start)
        .ok_or_else(|| RouteError::UnknownStation(StationId::new(start)))?
        .clone();
    let end_id = graph
        .node(end)
        .ok_or_else(|| RouteError::UnknownStation(StationId::new(end)))?
        .clone();

    let deadline = config.deadline.map(|limit| Instant::now() + limit);
    let mut tree = SearchTree::new(graph, &start_id);

    match config.selection {
        Selection::LinearScan => run_linear_scan(graph, &end_id, deadline, &mut tree)?,
        Selection::BinaryHeap => run_binary_heap(graph, &start_id, &end_id, deadline, &mut tree)?,
    }

    debug!(
        start = %start_id,
        end = %end_id,
        settled = tree.settled,
        distance = ?tree.distance(end),
        "Shortest path search complete"
    );

    Ok(tree)
}

fn check_deadline(deadline: Option<Instant>) -> Result<(), RouteError> {
    if deadline.is_some_and(|d| Instant::now() >= d) {
        return Err(RouteError::Timeout);
    }
    Ok(())
}

fn run_linear_scan(
    graph: &Graph,
    end: &StationId,
    deadline: Option<Instant>,
    tree: &mut SearchTree,
) -> Result<(), RouteError> {
    let mut visited: HashSet<StationId> = HashSet::with_capacity(graph.len());

    loop {
        check_deadline(deadline)?;

        let next = graph
            .nodes()
            .filter(|id| !visited.contains(*id))
            .map(|id| (id, tree.tentative(id)))
            .filter(|(_, distance)| distance.is_finite())
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id.clone());

        // Nothing reachable is left unvisited
        let Some(current) = next else {
            break;
        };

        if current == *end {
            break;
        }

        trace!(station = %current, distance = tree.tentative(&current), "Settling station");
        visited.insert(current.clone());
        tree.settled += 1;
        tree.relax(graph, &current, &visited);
    }

    Ok(())
}

/// Heap candidate, ordered by distance.
#[derive(Debug, Clone)]
struct Candidate {
    distance: f64,
    station: StationId,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.station.cmp(&other.station))
    }
}

fn run_binary_heap(
    graph: &Graph,
    start: &StationId,
    end: &StationId,
    deadline: Option<Instant>,
    tree: &mut SearchTree,
) -> Result<(), RouteError> {
    let mut visited: HashSet<StationId> = HashSet::with_capacity(graph.len());
    let mut heap = BinaryHeap::new();
    heap.push(Reverse(Candidate {
        distance: 0.0,
        station: start.clone(),
    }));

    while let Some(Reverse(Candidate { distance, station })) = heap.pop() {
        check_deadline(deadline)?;

        // Stale entry: already settled, or superseded by a shorter distance
        if visited.contains(&station) || distance > tree.tentative(&station) {
            continue;
        }

        if station == *end {
            break;
        }

        trace!(station = %station, distance, "Settling station");
        visited.insert(station.clone());
        tree.settled += 1;

        for (neighbor, distance) in tree.relax(graph, &station, &visited) {
            heap.push(Reverse(Candidate {
                distance,
                station: neighbor,
            }));
        }
    }

    Ok(())
}
