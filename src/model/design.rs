// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::edge::Edge;
use super::graph::Graph;
use super::node::{Node, NodeType};

/// Serialized `{nodes, edges}` form of a canvas.
///
/// This is what the evaluator receives and what saved diagrams and submissions store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DesignSnapshot {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl DesignSnapshot {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_kind(&self, kind: NodeType) -> bool {
        self.nodes.iter().any(|node| node.kind() == kind)
    }

    pub fn into_graph(self) -> Graph {
        Graph::from_parts(self.nodes, self.edges)
    }
}

impl From<&Graph> for DesignSnapshot {
    fn from(graph: &Graph) -> Self {
        Self { nodes: graph.to_node_vec(), edges: graph.to_edge_vec() }
    }
}
