//! Waypoint identity and storage

use std::collections::BTreeMap;
use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Stable handle to a waypoint inside a [`Graph`](super::Graph).
///
/// Ids are arena indices. They are never reused while the graph lives,
/// so a removed node's id simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Create an id from a raw index
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Raw arena index
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Raw id value
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A waypoint: a position plus its outgoing edges
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Position used for heuristic distance
    pub position: Vec3,
    /// Outgoing edges, target -> weight, ordered by target id
    pub(crate) edges: BTreeMap<NodeId, f32>,
}

impl Node {
    /// Create an unconnected node at `position`
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            edges: BTreeMap::new(),
        }
    }

    /// Outgoing edges as a target -> weight mapping
    #[must_use]
    pub fn edges(&self) -> &BTreeMap<NodeId, f32> {
        &self.edges
    }

    /// Number of outgoing edges
    #[must_use]
    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}
