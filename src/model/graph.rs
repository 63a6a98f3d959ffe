// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};

use super::edge::Edge;
use super::ids::{EdgeId, NodeId};
use super::node::Node;

#[derive(Debug, Clone, PartialEq)]
struct Slot<T> {
    seq: u64,
    item: T,
}

/// Node/edge arena keyed by id.
///
/// Items keep the order in which they were first inserted (replacing an item keeps its slot),
/// and an incidence index maps every referenced node id to the edges touching it, so removing
/// a node together with its edges does not scan the edge set.
///
/// Edges may reference node ids that are not (or no longer) present; the incidence index
/// tracks them anyway so a later cascade still finds them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Graph {
    nodes: BTreeMap<NodeId, Slot<Node>>,
    node_order: BTreeMap<u64, NodeId>,
    edges: BTreeMap<EdgeId, Slot<Edge>>,
    edge_order: BTreeMap<u64, EdgeId>,
    incidence: BTreeMap<NodeId, BTreeSet<EdgeId>>,
    next_seq: u64,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(
        nodes: impl IntoIterator<Item = Node>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Self {
        let mut graph = Self::new();
        for node in nodes {
            graph.insert_node(node);
        }
        for edge in edges {
            graph.insert_edge(edge);
        }
        graph
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.node_order
            .values()
            .filter_map(|node_id| self.nodes.get(node_id).map(|slot| &slot.item))
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edge_order
            .values()
            .filter_map(|edge_id| self.edges.get(edge_id).map(|slot| &slot.item))
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> + '_ {
        self.node_order.values()
    }

    pub fn contains_node(&self, node_id: &NodeId) -> bool {
        self.nodes.contains_key(node_id)
    }

    pub fn contains_edge(&self, edge_id: &EdgeId) -> bool {
        self.edges.contains_key(edge_id)
    }

    pub fn node(&self, node_id: &NodeId) -> Option<&Node> {
        self.nodes.get(node_id).map(|slot| &slot.item)
    }

    pub fn node_mut(&mut self, node_id: &NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(node_id).map(|slot| &mut slot.item)
    }

    pub fn edge(&self, edge_id: &EdgeId) -> Option<&Edge> {
        self.edges.get(edge_id).map(|slot| &slot.item)
    }

    /// Endpoints are not editable through `Edge`, so handing out `&mut` keeps the index valid.
    pub fn edge_mut(&mut self, edge_id: &EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(edge_id).map(|slot| &mut slot.item)
    }

    pub fn edges_mut(&mut self) -> impl Iterator<Item = &mut Edge> + '_ {
        self.edges.values_mut().map(|slot| &mut slot.item)
    }

    /// Inserts a node, or replaces the node with the same id in place.
    pub fn insert_node(&mut self, node: Node) -> Option<Node> {
        if let Some(slot) = self.nodes.get_mut(node.id()) {
            return Some(std::mem::replace(&mut slot.item, node));
        }

        let seq = self.bump_seq();
        self.node_order.insert(seq, node.id().clone());
        self.nodes.insert(node.id().clone(), Slot { seq, item: node });
        None
    }

    /// Inserts an edge, or replaces the edge with the same id in place.
    pub fn insert_edge(&mut self, edge: Edge) -> Option<Edge> {
        let edge_id = edge.id().clone();
        self.index_edge(&edge);

        if let Some(slot) = self.edges.get_mut(&edge_id) {
            let previous = std::mem::replace(&mut slot.item, edge);
            self.unindex_stale_endpoints(&previous);
            return Some(previous);
        }

        let seq = self.bump_seq();
        self.edge_order.insert(seq, edge_id.clone());
        self.edges.insert(edge_id, Slot { seq, item: edge });
        None
    }

    /// Removes a node without touching its edges.
    pub fn remove_node(&mut self, node_id: &NodeId) -> Option<Node> {
        let slot = self.nodes.remove(node_id)?;
        self.node_order.remove(&slot.seq);
        Some(slot.item)
    }

    pub fn remove_edge(&mut self, edge_id: &EdgeId) -> Option<Edge> {
        let slot = self.edges.remove(edge_id)?;
        self.edge_order.remove(&slot.seq);
        self.unindex_endpoint(slot.item.source(), edge_id);
        self.unindex_endpoint(slot.item.target(), edge_id);
        Some(slot.item)
    }

    /// Ids of every edge whose source or target is `node_id`, in id order.
    pub fn incident_edge_ids(&self, node_id: &NodeId) -> Vec<EdgeId> {
        self.incidence
            .get(node_id)
            .map(|edge_ids| edge_ids.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Removes a node and every edge touching it.
    ///
    /// Incident edges are removed even when the node itself is already gone.
    pub fn remove_node_cascade(&mut self, node_id: &NodeId) -> (Option<Node>, Vec<Edge>) {
        let removed_edges = self
            .incident_edge_ids(node_id)
            .into_iter()
            .filter_map(|edge_id| self.remove_edge(&edge_id))
            .collect::<Vec<_>>();
        (self.remove_node(node_id), removed_edges)
    }

    /// Returns the first endpoint of `edge` that is not a node of this graph.
    pub fn missing_endpoint<'a>(&self, edge: &'a Edge) -> Option<&'a NodeId> {
        [edge.source(), edge.target()]
            .into_iter()
            .find(|node_id| !self.contains_node(node_id))
    }

    pub fn replace_nodes(&mut self, nodes: impl IntoIterator<Item = Node>) {
        self.nodes.clear();
        self.node_order.clear();
        for node in nodes {
            self.insert_node(node);
        }
    }

    pub fn replace_edges(&mut self, edges: impl IntoIterator<Item = Edge>) {
        self.edges.clear();
        self.edge_order.clear();
        self.incidence.clear();
        for edge in edges {
            self.insert_edge(edge);
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn to_node_vec(&self) -> Vec<Node> {
        self.nodes().cloned().collect()
    }

    pub fn to_edge_vec(&self) -> Vec<Edge> {
        self.edges().cloned().collect()
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.saturating_add(1);
        seq
    }

    fn index_edge(&mut self, edge: &Edge) {
        for endpoint in [edge.source(), edge.target()] {
            self.incidence
                .entry(endpoint.clone())
                .or_default()
                .insert(edge.id().clone());
        }
    }

    fn unindex_stale_endpoints(&mut self, previous: &Edge) {
        let Some(current) = self.edge(previous.id()).cloned() else {
            return;
        };
        for endpoint in [previous.source(), previous.target()] {
            if !current.touches(endpoint) {
                self.unindex_endpoint(endpoint, previous.id());
            }
        }
    }

    fn unindex_endpoint(&mut self, node_id: &NodeId, edge_id: &EdgeId) {
        if let Some(edge_ids) = self.incidence.get_mut(node_id) {
            edge_ids.remove(edge_id);
            if edge_ids.is_empty() {
                self.incidence.remove(node_id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Graph;
    use crate::model::{Edge, EdgeId, Node, NodeId, NodeType, Position, SystemNodeData};

    fn node(id: &str) -> Node {
        Node::new(
            NodeId::new(id).expect("node id"),
            Position::default(),
            SystemNodeData::new(id.to_uppercase(), NodeType::Microservice),
        )
    }

    fn edge(id: &str, source: &str, target: &str) -> Edge {
        Edge::new(
            EdgeId::new(id).expect("edge id"),
            NodeId::new(source).expect("source id"),
            NodeId::new(target).expect("target id"),
        )
    }

    fn ids<'a>(nodes: impl Iterator<Item = &'a Node>) -> Vec<&'a str> {
        nodes.map(|n| n.id().as_str()).collect()
    }

    #[test]
    fn iteration_keeps_insertion_order_not_id_order() {
        let graph = Graph::from_parts([node("zeta"), node("alpha"), node("mid")], []);
        assert_eq!(ids(graph.nodes()), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn replacing_a_node_keeps_its_slot() {
        let mut graph = Graph::from_parts([node("a"), node("b")], []);
        let mut moved = node("a");
        moved.set_position(Position::new(5.0, 5.0));

        let previous = graph.insert_node(moved);

        assert!(previous.is_some());
        assert_eq!(ids(graph.nodes()), vec!["a", "b"]);
        assert_eq!(graph.node(&NodeId::new("a").unwrap()).unwrap().position().x, 5.0);
    }

    #[test]
    fn cascade_removes_incident_edges_via_index() {
        let mut graph = Graph::from_parts(
            [node("a"), node("b"), node("c")],
            [edge("ab", "a", "b"), edge("bc", "b", "c"), edge("ac", "a", "c")],
        );

        let (removed, removed_edges) = graph.remove_node_cascade(&NodeId::new("b").unwrap());

        assert!(removed.is_some());
        let mut removed_ids = removed_edges.iter().map(|e| e.id().as_str()).collect::<Vec<_>>();
        removed_ids.sort_unstable();
        assert_eq!(removed_ids, vec!["ab", "bc"]);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.incident_edge_ids(&NodeId::new("b").unwrap()).is_empty());
        assert_eq!(graph.incident_edge_ids(&NodeId::new("a").unwrap()).len(), 1);
    }

    #[test]
    fn replacing_an_edge_reindexes_its_endpoints() {
        let mut graph = Graph::from_parts([node("a"), node("b"), node("c")], [edge("e", "a", "b")]);

        graph.insert_edge(edge("e", "a", "c"));

        assert!(graph.incident_edge_ids(&NodeId::new("b").unwrap()).is_empty());
        assert_eq!(graph.incident_edge_ids(&NodeId::new("c").unwrap()).len(), 1);
        assert_eq!(graph.incident_edge_ids(&NodeId::new("a").unwrap()).len(), 1);
    }

    #[test]
    fn self_loops_are_indexed_once_and_cascade_cleanly() {
        let mut graph = Graph::from_parts([node("a")], [edge("loop", "a", "a")]);
        assert_eq!(graph.incident_edge_ids(&NodeId::new("a").unwrap()).len(), 1);

        let (_, removed_edges) = graph.remove_node_cascade(&NodeId::new("a").unwrap());
        assert_eq!(removed_edges.len(), 1);
        assert!(graph.is_empty());
    }

    #[test]
    fn missing_endpoint_reports_dangling_side() {
        let graph = Graph::from_parts([node("a")], []);
        let dangling = edge("e", "a", "ghost");
        assert_eq!(graph.missing_endpoint(&dangling).map(|id| id.as_str()), Some("ghost"));
        assert_eq!(graph.missing_endpoint(&edge("e", "a", "a")), None);
    }
}
