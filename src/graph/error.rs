//! Graph construction errors

use super::NodeId;

/// Errors that can occur while building or loading a graph
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Node id does not resolve to a live node
    UnknownNode(NodeId),
    /// Edge weight is negative, NaN or infinite
    InvalidWeight {
        /// Edge source
        from: NodeId,
        /// Edge target
        to: NodeId,
        /// Rejected weight
        weight: f32,
    },
    /// Level data lists the same node id twice
    DuplicateNode(NodeId),
    /// Level data uses an id far beyond its node count
    NodeIdOutOfRange {
        /// Offending id
        id: NodeId,
        /// First id that is rejected
        limit: usize,
    },
    /// Level data has a format version this crate cannot read
    UnsupportedVersion(u32),
    /// IO error
    IoError(String),
    /// Serialization error
    SerializeError(String),
    /// Deserialization error
    DeserializeError(String),
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownNode(id) => write!(f, "Unknown node: {id}"),
            Self::InvalidWeight { from, to, weight } => {
                write!(f, "Invalid edge weight {weight} on {from} -> {to}")
            }
            Self::DuplicateNode(id) => write!(f, "Duplicate node: {id}"),
            Self::NodeIdOutOfRange { id, limit } => {
                write!(f, "Node id {id} out of range (limit {limit})")
            }
            Self::UnsupportedVersion(v) => write!(f, "Unsupported graph format version: {v}"),
            Self::IoError(e) => write!(f, "IO error: {e}"),
            Self::SerializeError(e) => write!(f, "Serialization error: {e}"),
            Self::DeserializeError(e) => write!(f, "Deserialization error: {e}"),
        }
    }
}

impl std::error::Error for GraphError {}
