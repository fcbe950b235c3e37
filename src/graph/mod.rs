//! Waypoint graph model
//!
//! Provides the routing network searched by [`crate::pathfinding`]:
//! - Arena-backed nodes with stable ids
//! - Directed, non-negative weighted edges
//! - RON/JSON level data

mod error;
mod network;
mod node;
mod serial;

pub use error::GraphError;
pub use network::Graph;
pub use node::{Node, NodeId};
pub use serial::{EdgeData, FORMAT_VERSION, GraphData, NodeData};
