// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Node/edge change helpers used by `apply_node_changes` and `apply_edge_changes`.
/// Each returns `false` when the descriptor names an item that does not exist.
fn apply_node_change(graph: &mut Graph, change: &NodeChange, delta: &mut DeltaBuilder) -> bool {
    match change {
        NodeChange::Add { item } | NodeChange::Reset { item } => {
            let node_id = item.id().clone();
            if graph.insert_node(item.clone()).is_some() {
                delta.record_updated(ChangedItem::Node(node_id));
            } else {
                delta.record_added(ChangedItem::Node(node_id));
            }
            true
        }
        NodeChange::Position { id, position, dragging } => {
            let Some(node) = graph.node_mut(id) else {
                return false;
            };
            if let Some(position) = position {
                node.set_position(*position);
            }
            if let Some(dragging) = dragging {
                node.set_dragging(*dragging);
            }
            delta.record_updated(ChangedItem::Node(id.clone()));
            true
        }
        NodeChange::Dimensions { id, dimensions } => {
            let Some(node) = graph.node_mut(id) else {
                return false;
            };
            node.set_dimensions(dimensions.width, dimensions.height);
            delta.record_updated(ChangedItem::Node(id.clone()));
            true
        }
        NodeChange::Select { id, selected } => {
            let Some(node) = graph.node_mut(id) else {
                return false;
            };
            node.set_selected(*selected);
            delta.record_updated(ChangedItem::Node(id.clone()));
            true
        }
        NodeChange::Remove { id } => {
            // Edges are left alone here; `delete_node` is the cascading path.
            if graph.remove_node(id).is_none() {
                return false;
            }
            delta.record_removed(ChangedItem::Node(id.clone()));
            true
        }
    }
}

fn apply_edge_change(graph: &mut Graph, change: &EdgeChange, delta: &mut DeltaBuilder) -> bool {
    match change {
        EdgeChange::Add { item } | EdgeChange::Reset { item } => {
            if let Some(missing) = graph.missing_endpoint(item) {
                log::warn!(
                    "edge {} references node {missing} which is not on the canvas",
                    item.id()
                );
            }
            let edge_id = item.id().clone();
            if graph.insert_edge(item.clone()).is_some() {
                delta.record_updated(ChangedItem::Edge(edge_id));
            } else {
                delta.record_added(ChangedItem::Edge(edge_id));
            }
            true
        }
        EdgeChange::Select { id, selected } => {
            let Some(edge) = graph.edge_mut(id) else {
                return false;
            };
            edge.set_selected(*selected);
            delta.record_updated(ChangedItem::Edge(id.clone()));
            true
        }
        EdgeChange::Remove { id } => {
            if graph.remove_edge(id).is_none() {
                return false;
            }
            delta.record_removed(ChangedItem::Edge(id.clone()));
            true
        }
    }
}
