//! Level data serialization
//!
//! Waypoint graphs can be saved and loaded in RON or JSON. Loading goes
//! through the same validation as building a graph by hand.

use std::fs;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::{Graph, GraphError, NodeId};

/// Level data format written by this crate
pub const FORMAT_VERSION: u32 = 1;

/// Removed-node holes tolerated in level data on top of the live node count
const MAX_ID_SLACK: usize = 65_536;

/// A serializable outgoing edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeData {
    /// Target node id
    pub to: NodeId,
    /// Traversal cost
    pub weight: f32,
}

/// A serializable waypoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    /// Node id, preserved on load
    pub id: NodeId,
    /// World position
    pub position: Vec3,
    /// Outgoing edges
    #[serde(default)]
    pub edges: Vec<EdgeData>,
}

/// A serializable waypoint graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    /// Format version, must equal [`FORMAT_VERSION`] on load
    pub version: u32,
    /// All waypoints
    pub nodes: Vec<NodeData>,
}

impl Default for GraphData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            nodes: Vec::new(),
        }
    }
}

impl From<&Graph> for GraphData {
    fn from(graph: &Graph) -> Self {
        let nodes = graph
            .iter()
            .map(|(id, node)| NodeData {
                id,
                position: node.position,
                edges: node
                    .edges()
                    .iter()
                    .map(|(&to, &weight)| EdgeData { to, weight })
                    .collect(),
            })
            .collect();

        Self {
            version: FORMAT_VERSION,
            nodes,
        }
    }
}

impl TryFrom<GraphData> for Graph {
    type Error = GraphError;

    fn try_from(data: GraphData) -> Result<Self, Self::Error> {
        if data.version != FORMAT_VERSION {
            return Err(GraphError::UnsupportedVersion(data.version));
        }

        // Ids index the arena, so bound them before allocating
        let limit = data.nodes.len() + MAX_ID_SLACK;
        if let Some(node) = data.nodes.iter().find(|node| node.id.index() >= limit) {
            return Err(GraphError::NodeIdOutOfRange { id: node.id, limit });
        }

        let mut graph = Graph::with_capacity(data.nodes.len());

        // Nodes first so edges may point forward
        for node in &data.nodes {
            graph.insert_node_at(node.id, node.position)?;
        }
        for node in &data.nodes {
            for edge in &node.edges {
                graph.add_edge(node.id, edge.to, edge.weight)?;
            }
        }

        log::debug!(
            "Loaded graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

impl Graph {
    /// Serialize the graph to a RON string
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_ron_string(&self) -> Result<String, GraphError> {
        ron::ser::to_string_pretty(&GraphData::from(self), ron::ser::PrettyConfig::default())
            .map_err(|e| GraphError::SerializeError(e.to_string()))
    }

    /// Parse a graph from a RON string
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid level data or describes
    /// an invalid graph
    pub fn from_ron_str(content: &str) -> Result<Self, GraphError> {
        let data: GraphData =
            ron::from_str(content).map_err(|e| GraphError::DeserializeError(e.to_string()))?;
        Self::try_from(data)
    }

    /// Save the graph to a RON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save_ron(&self, path: impl AsRef<Path>) -> Result<(), GraphError> {
        let ron_string = self.to_ron_string()?;
        fs::write(path, ron_string).map_err(|e| GraphError::IoError(e.to_string()))?;
        Ok(())
    }

    /// Load a graph from a RON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, deserialization fails,
    /// or the data describes an invalid graph
    pub fn load_ron(path: impl AsRef<Path>) -> Result<Self, GraphError> {
        let content = fs::read_to_string(path).map_err(|e| GraphError::IoError(e.to_string()))?;
        Self::from_ron_str(&content)
    }

    /// Save the graph to a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), GraphError> {
        let json_string = serde_json::to_string_pretty(&GraphData::from(self))
            .map_err(|e| GraphError::SerializeError(e.to_string()))?;
        fs::write(path, json_string).map_err(|e| GraphError::IoError(e.to_string()))?;
        Ok(())
    }

    /// Load a graph from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, deserialization fails,
    /// or the data describes an invalid graph
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, GraphError> {
        let content = fs::read_to_string(path).map_err(|e| GraphError::IoError(e.to_string()))?;
        let data: GraphData = serde_json::from_str(&content)
            .map_err(|e| GraphError::DeserializeError(e.to_string()))?;
        Self::try_from(data)
    }
}
