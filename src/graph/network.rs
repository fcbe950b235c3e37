//! Directed weighted waypoint graph
//!
//! Nodes live in an arena addressed by [`NodeId`]. Each node owns its
//! outgoing edges. The graph is directed; two-way travel needs two edges.

use std::collections::BTreeMap;

use glam::Vec3;

use super::{GraphError, Node, NodeId};

/// A network of waypoints connected by directed, non-negative edges
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    /// Arena slots, `None` once a node has been removed
    slots: Vec<Option<Node>>,
    /// Number of live nodes
    live: usize,
}

impl Graph {
    /// Create an empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `capacity` nodes
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            live: 0,
        }
    }

    /// Add an unconnected node and return its id
    pub fn add_node(&mut self, position: Vec3) -> NodeId {
        let id = NodeId(self.slots.len() as u32);
        self.slots.push(Some(Node::new(position)));
        self.live += 1;
        id
    }

    /// Place a node at a specific id, growing the arena as needed.
    ///
    /// Used when loading level data so ids survive a round-trip.
    pub(crate) fn insert_node_at(
        &mut self,
        id: NodeId,
        position: Vec3,
    ) -> Result<(), GraphError> {
        let index = id.index();
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, || None);
        }
        if self.slots[index].is_some() {
            return Err(GraphError::DuplicateNode(id));
        }
        self.slots[index] = Some(Node::new(position));
        self.live += 1;
        Ok(())
    }

    /// Remove a node together with every edge pointing at it.
    ///
    /// Ids of the remaining nodes stay valid.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if `id` is not a live node
    pub fn remove_node(&mut self, id: NodeId) -> Result<Node, GraphError> {
        let node = self
            .slots
            .get_mut(id.index())
            .and_then(Option::take)
            .ok_or(GraphError::UnknownNode(id))?;
        self.live -= 1;

        for other in self.slots.iter_mut().flatten() {
            other.edges.remove(&id);
        }

        Ok(node)
    }

    /// Add or replace the directed edge `from -> to`.
    ///
    /// Returns the previous weight if the edge already existed.
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is unknown or the weight is
    /// negative, NaN or infinite
    pub fn add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        weight: f32,
    ) -> Result<Option<f32>, GraphError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight { from, to, weight });
        }
        if !self.contains(to) {
            return Err(GraphError::UnknownNode(to));
        }
        let node = self.node_mut(from).ok_or(GraphError::UnknownNode(from))?;
        Ok(node.edges.insert(to, weight))
    }

    /// Add `a -> b` and `b -> a` with the same weight
    ///
    /// # Errors
    ///
    /// Same conditions as [`Graph::add_edge`]; on error neither edge is added
    pub fn add_bidirectional_edge(
        &mut self,
        a: NodeId,
        b: NodeId,
        weight: f32,
    ) -> Result<(), GraphError> {
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)?;
        Ok(())
    }

    /// Add `from -> to` weighted by the distance between the two positions
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if either endpoint is unknown
    pub fn connect(&mut self, from: NodeId, to: NodeId) -> Result<f32, GraphError> {
        let weight = self.distance(from, to)?;
        self.add_edge(from, to, weight)?;
        Ok(weight)
    }

    /// Connect two nodes both ways, weighted by distance
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if either endpoint is unknown
    pub fn connect_bidirectional(&mut self, a: NodeId, b: NodeId) -> Result<f32, GraphError> {
        let weight = self.distance(a, b)?;
        self.add_bidirectional_edge(a, b, weight)?;
        Ok(weight)
    }

    /// Link every pair of nodes within `radius` of each other, both ways,
    /// weighted by distance. Existing edges between such pairs are
    /// overwritten.
    ///
    /// Returns the number of newly created directed edges. A negative or
    /// non-finite radius links nothing, and nodes with non-finite positions
    /// are never linked.
    pub fn link_within(&mut self, radius: f32) -> usize {
        if !radius.is_finite() || radius < 0.0 {
            return 0;
        }

        let points: Vec<(NodeId, Vec3)> =
            self.iter().map(|(id, node)| (id, node.position)).collect();
        let mut created = 0;

        for (i, &(a, pa)) in points.iter().enumerate() {
            for &(b, pb) in &points[i + 1..] {
                let distance = pa.distance(pb);
                if !distance.is_finite() || distance > radius {
                    continue;
                }
                for (from, to) in [(a, b), (b, a)] {
                    if let Some(node) = self.node_mut(from)
                        && node.edges.insert(to, distance).is_none()
                    {
                        created += 1;
                    }
                }
            }
        }

        log::debug!("Linked {created} edges within radius {radius}");
        created
    }

    /// Remove the directed edge `from -> to`, returning its weight
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) -> Option<f32> {
        self.node_mut(from)?.edges.remove(&to)
    }

    /// Check if `id` is a live node
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Get a node by id
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Position of a node
    #[must_use]
    pub fn position(&self, id: NodeId) -> Option<Vec3> {
        self.node(id).map(|node| node.position)
    }

    /// Move a node. Edge weights are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if `id` is not a live node
    pub fn set_position(&mut self, id: NodeId, position: Vec3) -> Result<(), GraphError> {
        let node = self.node_mut(id).ok_or(GraphError::UnknownNode(id))?;
        node.position = position;
        Ok(())
    }

    /// Outgoing edges of a node as a target -> weight mapping
    #[must_use]
    pub fn edges(&self, id: NodeId) -> Option<&BTreeMap<NodeId, f32>> {
        self.node(id).map(Node::edges)
    }

    /// Weight of the edge `from -> to`
    #[must_use]
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<f32> {
        self.node(from)?.edges.get(&to).copied()
    }

    /// Outgoing `(neighbor, weight)` pairs in ascending neighbor order.
    ///
    /// Empty for unknown nodes.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = (NodeId, f32)> + '_ {
        self.node(id)
            .into_iter()
            .flat_map(|node| node.edges.iter().map(|(&to, &weight)| (to, weight)))
    }

    /// Number of live nodes
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.live
    }

    /// Number of directed edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.slots.iter().flatten().map(Node::degree).sum()
    }

    /// Check if the graph has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Ids of all live nodes, ascending
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.iter().map(|(id, _)| id)
    }

    /// Iterate over all live nodes, ascending by id
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                slot.as_ref().map(|node| (NodeId(index as u32), node))
            })
    }

    /// Remove every node. Previously issued ids stop resolving and are not
    /// handed out again.
    pub fn clear(&mut self) {
        self.slots.fill_with(|| None);
        self.live = 0;
    }

    /// Total weight of a node sequence.
    ///
    /// Returns `None` if any consecutive pair is not joined by an edge.
    /// An empty or single-node sequence costs nothing.
    #[must_use]
    pub fn path_cost(&self, nodes: &[NodeId]) -> Option<f32> {
        nodes
            .windows(2)
            .map(|hop| self.edge_weight(hop[0], hop[1]))
            .sum()
    }

    /// Straight-line distance between two nodes
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if either node is unknown
    pub fn distance(&self, a: NodeId, b: NodeId) -> Result<f32, GraphError> {
        let pa = self.position(a).ok_or(GraphError::UnknownNode(a))?;
        let pb = self.position(b).ok_or(GraphError::UnknownNode(b))?;
        Ok(pa.distance(pb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(count: usize) -> (Graph, Vec<NodeId>) {
        let mut graph = Graph::new();
        let ids = (0..count)
            .map(|i| graph.add_node(Vec3::new(i as f32, 0.0, 0.0)))
            .collect();
        (graph, ids)
    }

    #[test]
    fn test_add_nodes_and_edges() {
        let (mut graph, ids) = line(3);

        assert_eq!(graph.add_edge(ids[0], ids[1], 2.0), Ok(None));
        assert_eq!(graph.add_edge(ids[0], ids[1], 3.0), Ok(Some(2.0)));
        graph.add_edge(ids[1], ids[2], 1.0).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge_weight(ids[0], ids[1]), Some(3.0));
        // Directed: no reverse edge
        assert_eq!(graph.edge_weight(ids[1], ids[0]), None);
    }

    #[test]
    fn test_rejects_invalid_weights() {
        let (mut graph, ids) = line(2);

        for weight in [-1.0, f32::NAN, f32::INFINITY] {
            let err = graph.add_edge(ids[0], ids[1], weight).unwrap_err();
            assert!(matches!(err, GraphError::InvalidWeight { .. }));
        }
        assert_eq!(graph.edge_count(), 0);

        // Zero is a legal cost
        assert!(graph.add_edge(ids[0], ids[1], 0.0).is_ok());
    }

    #[test]
    fn test_rejects_unknown_endpoints() {
        let (mut graph, ids) = line(1);
        let ghost = NodeId::new(42);

        assert_eq!(
            graph.add_edge(ids[0], ghost, 1.0),
            Err(GraphError::UnknownNode(ghost))
        );
        assert_eq!(
            graph.add_edge(ghost, ids[0], 1.0),
            Err(GraphError::UnknownNode(ghost))
        );
        assert_eq!(
            graph.add_bidirectional_edge(ghost, ids[0], 1.0),
            Err(GraphError::UnknownNode(ghost))
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_neighbors_sorted_by_id() {
        let (mut graph, ids) = line(4);
        graph.add_edge(ids[0], ids[3], 1.0).unwrap();
        graph.add_edge(ids[0], ids[1], 2.0).unwrap();
        graph.add_edge(ids[0], ids[2], 3.0).unwrap();

        let order: Vec<NodeId> = graph.neighbors(ids[0]).map(|(id, _)| id).collect();
        assert_eq!(order, vec![ids[1], ids[2], ids[3]]);
    }

    #[test]
    fn test_remove_node_keeps_ids() {
        let (mut graph, ids) = line(3);
        graph.add_bidirectional_edge(ids[0], ids[1], 1.0).unwrap();
        graph.add_bidirectional_edge(ids[1], ids[2], 1.0).unwrap();

        graph.remove_node(ids[1]).unwrap();

        assert!(!graph.contains(ids[1]));
        assert!(graph.contains(ids[2]));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.remove_node(ids[1]), Err(GraphError::UnknownNode(ids[1])));

        // Fresh nodes never reuse a removed id
        let fresh = graph.add_node(Vec3::ZERO);
        assert_ne!(fresh, ids[1]);
    }

    #[test]
    fn test_connect_uses_distance() {
        let mut graph = Graph::new();
        let a = graph.add_node(Vec3::ZERO);
        let b = graph.add_node(Vec3::new(3.0, 4.0, 0.0));

        let weight = graph.connect_bidirectional(a, b).unwrap();
        assert!((weight - 5.0).abs() < 1e-6);
        assert_eq!(graph.edge_weight(b, a), Some(weight));
    }

    #[test]
    fn test_link_within_radius() {
        let (mut graph, ids) = line(4);

        // Unit spacing: only adjacent pairs are in range
        let created = graph.link_within(1.5);
        assert_eq!(created, 6);
        assert!(graph.edge_weight(ids[0], ids[1]).is_some());
        assert!(graph.edge_weight(ids[0], ids[2]).is_none());

        // Re-linking does not create duplicates
        assert_eq!(graph.link_within(1.5), 0);
    }

    #[test]
    fn test_link_within_ignores_non_finite() {
        let mut graph = Graph::new();
        let a = graph.add_node(Vec3::ZERO);
        let b = graph.add_node(Vec3::new(0.5, 0.0, 0.0));
        let broken = graph.add_node(Vec3::new(f32::NAN, 0.0, 0.0));
        let far = graph.add_node(Vec3::new(1000.0, 0.0, 0.0));

        for radius in [f32::NAN, f32::INFINITY, -1.0] {
            assert_eq!(graph.link_within(radius), 0);
        }
        assert_eq!(graph.edge_count(), 0);

        assert_eq!(graph.link_within(1.0), 2);
        assert_eq!(graph.edge_weight(a, b), Some(0.5));
        assert!(graph.edges(broken).unwrap().is_empty());
        assert_eq!(graph.edge_weight(a, broken), None);
        assert_eq!(graph.edge_weight(a, far), None);
        assert!(graph.iter().all(|(_, node)| {
            node.edges().values().all(|w| w.is_finite() && *w >= 0.0)
        }));
    }

    #[test]
    fn test_path_cost() {
        let (mut graph, ids) = line(3);
        graph.add_edge(ids[0], ids[1], 1.5).unwrap();
        graph.add_edge(ids[1], ids[2], 2.5).unwrap();

        assert_eq!(graph.path_cost(&ids), Some(4.0));
        assert_eq!(graph.path_cost(&[ids[0]]), Some(0.0));
        assert_eq!(graph.path_cost(&[ids[2], ids[1]]), None);
    }

    #[test]
    fn test_set_position_and_clear() {
        let (mut graph, ids) = line(2);
        graph.add_edge(ids[0], ids[1], 1.0).unwrap();

        graph.set_position(ids[1], Vec3::new(0.0, 5.0, 0.0)).unwrap();
        assert_eq!(graph.position(ids[1]), Some(Vec3::new(0.0, 5.0, 0.0)));
        // Moving a node leaves weights alone
        assert_eq!(graph.edge_weight(ids[0], ids[1]), Some(1.0));

        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.node_ids().count(), 0);
        assert_eq!(
            graph.set_position(ids[0], Vec3::ZERO),
            Err(GraphError::UnknownNode(ids[0]))
        );

        // Cleared ids are not handed out again
        let fresh = graph.add_node(Vec3::ZERO);
        assert!(!ids.contains(&fresh));
        assert!(!graph.contains(ids[0]));
    }

    #[test]
    fn test_graph_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Graph>();
    }
}
