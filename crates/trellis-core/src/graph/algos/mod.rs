//! Shortest-path algorithm implementations
//!
//! Four interchangeable algorithms writing to the graph's shared
//! distance/predecessor tables:
//! - `floyd_warshall`: all pairs, tolerates negative weights
//! - `dijkstra`: single source, non-negative weights only
//! - `bellman_ford`: single source, detects negative cycles
//! - `astar`: single source to the designated target, heuristic-guided
//!
//! All four share the effective edge-cost rule in `weights` and the
//! infinity sentinel; each single-source run computes fresh rows and merges
//! them into the per-source tables only on completion.

pub mod astar;
pub mod bellman_ford;
pub mod dijkstra;
pub mod floyd_warshall;
