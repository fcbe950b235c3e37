//! Waypoint graph routing
//!
//! This crate provides:
//! - A directed, weighted waypoint graph with stable node ids
//! - Deterministic A* search with pluggable heuristics
//! - RON/JSON level data for waypoint networks

pub mod graph;
pub mod pathfinding;

// Re-exports for convenience
pub use glam;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::graph::{Graph, GraphError, NodeId};
    pub use crate::pathfinding::{
        Heuristic, HeuristicKind, Path, PathError, SearchConfig, find_path, find_path_with,
        find_path_with_heuristic,
    };
    pub use glam::Vec3;
}
