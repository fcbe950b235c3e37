//! A* pathfinding over waypoint graphs
//!
//! Routes an agent between two nodes of a [`Graph`](crate::graph::Graph).
//! Each search owns all of its working state, so independent searches may
//! run in parallel on a shared graph.

mod astar;
mod config;
mod heuristic;
mod path;

pub use astar::{PathError, find_path, find_path_with, find_path_with_heuristic};
pub use config::SearchConfig;
pub use heuristic::{Euclidean, Heuristic, HeuristicKind, Manhattan, Zero};
pub use path::{Path, SearchStats};
