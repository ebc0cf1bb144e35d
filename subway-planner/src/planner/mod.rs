//! Shortest-path route planning over a transit network.
//!
//! The pipeline has three stages:
//!
//! 1. [`Graph::build`] turns stations and lines into a weighted, undirected
//!    adjacency map (edge weight = straight-line distance).
//! 2. [`solve`] runs Dijkstra's algorithm from the start station.
//! 3. [`reconstruct`] walks the predecessor links back from the end station
//!    and works out which lines the route rides.
//!
//! [`compute_shortest_path`] runs the whole pipeline for one query;
//! [`RoutePlanner`] keeps the graph around for repeated queries.

mod config;
mod graph;
mod reconstruct;
mod search;
mod solver;


pub use config::{PlannerConfig, Selection};
pub use graph::Graph;
pub use reconstruct::reconstruct;
pub use search::{RouteError, RoutePlanner, compute_shortest_path};
pub use solver::{SearchTree, solve};
