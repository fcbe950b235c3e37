//! Search results

use glam::Vec3;

use crate::graph::{Graph, NodeId};

/// Counters collected during a single search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes moved from the frontier to the closed set
    pub expanded: usize,
    /// Frontier insertions, including re-insertions after a cost improvement
    pub pushed: usize,
    /// The iteration cap ran out before the goal was reached
    pub budget_exhausted: bool,
}

/// Result of pathfinding
#[derive(Debug, Clone, Default)]
pub struct Path {
    /// Nodes from start to goal inclusive, empty if no path was found
    nodes: Vec<NodeId>,
    /// Sum of edge weights along the path
    cost: f32,
    stats: SearchStats,
}

impl Path {
    pub(crate) fn new(nodes: Vec<NodeId>, cost: f32, stats: SearchStats) -> Self {
        Self { nodes, cost, stats }
    }

    pub(crate) fn not_found(stats: SearchStats) -> Self {
        Self {
            stats,
            ..Self::default()
        }
    }

    /// Ordered nodes from start to goal
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Consume the path, returning its nodes
    #[must_use]
    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }

    /// Total edge weight
    #[must_use]
    pub fn cost(&self) -> f32 {
        self.cost
    }

    /// Search counters
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Check if path was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes on the path
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// First node
    #[must_use]
    pub fn start(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// Last node
    #[must_use]
    pub fn goal(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Waypoints in world coordinates
    #[must_use]
    pub fn waypoints(&self, graph: &Graph) -> Vec<Vec3> {
        self.nodes.iter().filter_map(|&id| graph.position(id)).collect()
    }

    /// Geometric length of the path, independent of edge weights
    #[must_use]
    pub fn length(&self, graph: &Graph) -> f32 {
        calculate_path_length(&self.waypoints(graph))
    }
}

/// Calculate total path length
fn calculate_path_length(waypoints: &[Vec3]) -> f32 {
    waypoints
        .windows(2)
        .map(|pair| pair[0].distance(pair[1]))
        .sum()
}
