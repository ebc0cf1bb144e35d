//! Subway route planner.
//!
//! Answers: "what is the shortest way from this station to that one, and
//! which lines do I ride?" over a network of stations placed in 3-D space.

pub mod cache;
pub mod domain;
pub mod loader;
pub mod planner;
