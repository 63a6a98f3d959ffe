// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Change descriptors for the canvas graph and the pure functions that apply them.
//!
//! Every function here takes the current graph by reference and returns the next one; the
//! input is never mutated. Descriptors that name an unknown node or edge are skipped without
//! error, and the returned delta reports what actually changed.

use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{
    DrawingSettings, Edge, EdgeId, EdgeStyle, EdgeType, Graph, MarkerEnd, Node, NodeId, Position,
};

/// A single change to one node, as emitted by the canvas interaction layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeChange {
    Add {
        item: Node,
    },
    Position {
        id: NodeId,
        #[serde(default)]
        position: Option<Position>,
        #[serde(default)]
        dragging: Option<bool>,
    },
    Dimensions {
        id: NodeId,
        dimensions: Dimensions,
    },
    Select {
        id: NodeId,
        selected: bool,
    },
    Remove {
        id: NodeId,
    },
    Reset {
        item: Node,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

/// A single change to one edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EdgeChange {
    Add { item: Edge },
    Select { id: EdgeId, selected: bool },
    Remove { id: EdgeId },
    Reset { item: Edge },
}

impl NodeChange {
    /// The node this change alters in a way an evaluator can see.
    ///
    /// Selection, measured dimensions and drag flags without a new position are view state.
    pub fn design_item(&self) -> Option<ChangedItem> {
        let id = match self {
            Self::Add { item } | Self::Reset { item } => item.id(),
            Self::Position { id, position: Some(_), .. } | Self::Remove { id } => id,
            Self::Position { position: None, .. }
            | Self::Dimensions { .. }
            | Self::Select { .. } => return None,
        };
        Some(ChangedItem::Node(id.clone()))
    }
}

impl EdgeChange {
    /// The edge this change alters in a way an evaluator can see; selection is view state.
    pub fn design_item(&self) -> Option<ChangedItem> {
        let id = match self {
            Self::Add { item } | Self::Reset { item } => item.id(),
            Self::Remove { id } => id,
            Self::Select { .. } => return None,
        };
        Some(ChangedItem::Edge(id.clone()))
    }
}

/// A proposed connection drawn by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Connection {
    pub source: NodeId,
    pub target: NodeId,
}

impl Connection {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }
}

/// Styling captured from the store at the moment a connection is made.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeDefaults<'a> {
    pub edge_type: EdgeType,
    pub drawing: &'a DrawingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChangedItem {
    Node(NodeId),
    Edge(EdgeId),
}

/// Minimal delta describing which items changed as the result of applying a batch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Delta {
    pub added: Vec<ChangedItem>,
    pub removed: Vec<ChangedItem>,
    pub updated: Vec<ChangedItem>,
}

impl Delta {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updated.is_empty()
    }

    pub fn contains(&self, item: &ChangedItem) -> bool {
        [&self.added, &self.removed, &self.updated].iter().any(|items| items.contains(item))
    }

    pub fn removed_node_ids(&self) -> impl Iterator<Item = &NodeId> + '_ {
        self.removed.iter().filter_map(|item| match item {
            ChangedItem::Node(node_id) => Some(node_id),
            ChangedItem::Edge(_) => None,
        })
    }
}

#[derive(Debug, Default)]
struct DeltaBuilder {
    added: BTreeSet<ChangedItem>,
    removed: BTreeSet<ChangedItem>,
    updated: BTreeSet<ChangedItem>,
}

impl DeltaBuilder {
    fn record_added(&mut self, item: ChangedItem) {
        self.removed.remove(&item);
        self.updated.remove(&item);
        self.added.insert(item);
    }

    fn record_removed(&mut self, item: ChangedItem) {
        // Added and removed within one batch: nothing observable happened.
        if self.added.remove(&item) {
            return;
        }
        self.updated.remove(&item);
        self.removed.insert(item);
    }

    fn record_updated(&mut self, item: ChangedItem) {
        if self.added.contains(&item) || self.removed.contains(&item) {
            return;
        }
        self.updated.insert(item);
    }

    fn finish(self) -> Delta {
        Delta {
            added: self.added.into_iter().collect(),
            removed: self.removed.into_iter().collect(),
            updated: self.updated.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApplyResult {
    pub graph: Graph,
    pub applied: usize,
    pub skipped: usize,
    pub delta: Delta,
}

impl ApplyResult {
    pub fn changed(&self) -> bool {
        !self.delta.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Target,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectError {
    #[error("cannot connect: {side:?} node {node_id} is not on the canvas")]
    DanglingEndpoint { side: Endpoint, node_id: NodeId },
}

pub fn apply_node_changes(graph: &Graph, changes: &[NodeChange]) -> ApplyResult {
    let mut next = graph.clone();
    let mut delta = DeltaBuilder::default();
    let mut applied = 0usize;

    for change in changes {
        if apply_node_change(&mut next, change, &mut delta) {
            applied += 1;
        } else {
            log::debug!("node change skipped, unknown node: {change:?}");
        }
    }

    ApplyResult { graph: next, applied, skipped: changes.len() - applied, delta: delta.finish() }
}

pub fn apply_edge_changes(graph: &Graph, changes: &[EdgeChange]) -> ApplyResult {
    let mut next = graph.clone();
    let mut delta = DeltaBuilder::default();
    let mut applied = 0usize;

    for change in changes {
        if apply_edge_change(&mut next, change, &mut delta) {
            applied += 1;
        } else {
            log::debug!("edge change skipped, unknown edge: {change:?}");
        }
    }

    ApplyResult { graph: next, applied, skipped: changes.len() - applied, delta: delta.finish() }
}

/// Builds an edge for `connection` styled with `defaults`, under a fresh unique id.
///
/// No deduplication happens here: connecting the same pair twice yields two edges, and
/// `source == target` yields a self-loop.
pub fn build_edge(connection: &Connection, defaults: &EdgeDefaults<'_>) -> Edge {
    let mut edge = Edge::new(
        EdgeId::generate_with_prefix("e"),
        connection.source.clone(),
        connection.target.clone(),
    );
    edge.set_edge_type(defaults.edge_type);
    edge.set_animated(true);
    edge.set_style(Some(EdgeStyle {
        stroke: defaults.drawing.stroke_color.clone(),
        stroke_width: defaults.drawing.stroke_width,
        opacity: Some(defaults.drawing.opacity),
    }));
    edge.set_marker_end(Some(MarkerEnd::arrow_closed(defaults.drawing.stroke_color.clone())));
    edge
}

/// Appends a new edge for `connection`.
///
/// Both endpoints must be nodes of `graph`; a dangling endpoint is rejected.
pub fn connect(
    graph: &Graph,
    connection: &Connection,
    defaults: &EdgeDefaults<'_>,
) -> Result<(Graph, EdgeId), ConnectError> {
    if !graph.contains_node(&connection.source) {
        return Err(ConnectError::DanglingEndpoint {
            side: Endpoint::Source,
            node_id: connection.source.clone(),
        });
    }
    if !graph.contains_node(&connection.target) {
        return Err(ConnectError::DanglingEndpoint {
            side: Endpoint::Target,
            node_id: connection.target.clone(),
        });
    }

    let edge = build_edge(connection, defaults);
    let edge_id = edge.id().clone();
    let mut next = graph.clone();
    next.insert_edge(edge);
    Ok((next, edge_id))
}

// Per-descriptor application helpers.
include!("ops_impl.rs");

#[cfg(test)]
mod tests;
