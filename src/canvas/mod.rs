// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The canvas store: the single owner of the graph being edited and the state around it.
//!
//! All mutations go through `&mut self`; there is exactly one writer. Only the theme and the
//! drawing settings are persisted (through a [`PreferenceSink`]); the graph, the selection, the
//! current problem and the verdict flags live for the session only.

use std::collections::BTreeSet;

use crate::evaluator::{AnalysisResult, EvaluationRequest, RequestKind};
use crate::model::{
    DesignSnapshot, DrawingSettings, DrawingSettingsPatch, Edge, EdgeId, EdgeType, Graph, Node,
    NodeId, NodeType, Position, Preferences, Problem, ProblemId, SystemNodeData, Theme,
};
use crate::ops::{
    apply_edge_changes, apply_node_changes, connect, ChangedItem, ConnectError, Connection, Delta,
    EdgeChange, EdgeDefaults, NodeChange,
};
use crate::store::PreferenceSink;

#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    #[error("no problem is loaded")]
    NoProblemLoaded,
    #[error(transparent)]
    Connect(#[from] ConnectError),
}

/// An evaluation that has been handed out but whose verdict has not come back yet.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingEvaluation {
    pub request: EvaluationRequest,
    pub graph_rev: u64,
    pub problem_id: ProblemId,
}

impl PendingEvaluation {
    pub fn kind(&self) -> RequestKind {
        self.request.kind
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerdictOutcome {
    /// The graph or the problem changed after the request was taken.
    pub stale: bool,
    /// Whether the verdict flags were written. Hints never touch them.
    pub applied: bool,
}

#[derive(Debug)]
pub struct CanvasStore<S> {
    graph: Graph,
    selected_nodes: BTreeSet<NodeId>,
    current_problem: Option<Problem>,
    is_passed: bool,
    is_submitted: bool,
    theme: Theme,
    edge_type: EdgeType,
    drawing_settings: DrawingSettings,
    graph_rev: u64,
    sink: S,
}

impl<S: PreferenceSink> CanvasStore<S> {
    /// Creates a store with an empty canvas and the preferences found in `sink`.
    ///
    /// Missing preferences mean defaults. Unreadable ones are logged and also mean defaults.
    pub fn open(sink: S) -> Self {
        let preferences = match sink.load() {
            Ok(Some(preferences)) => preferences,
            Ok(None) => Preferences::default(),
            Err(err) => {
                log::warn!("ignoring unreadable preferences: {err}");
                Preferences::default()
            }
        };

        Self {
            graph: Graph::new(),
            selected_nodes: BTreeSet::new(),
            current_problem: None,
            is_passed: false,
            is_submitted: false,
            theme: preferences.theme,
            edge_type: EdgeType::SmoothStep,
            drawing_settings: preferences.drawing_settings,
            graph_rev: 0,
            sink,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.graph.nodes()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.graph.edges()
    }

    pub fn selected_nodes(&self) -> &BTreeSet<NodeId> {
        &self.selected_nodes
    }

    pub fn current_problem(&self) -> Option<&Problem> {
        self.current_problem.as_ref()
    }

    pub fn is_passed(&self) -> bool {
        self.is_passed
    }

    pub fn is_submitted(&self) -> bool {
        self.is_submitted
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn edge_type(&self) -> EdgeType {
        self.edge_type
    }

    pub fn drawing_settings(&self) -> &DrawingSettings {
        &self.drawing_settings
    }

    /// Bumped by every structural, position or label change to nodes or edges.
    ///
    /// Selection, measured dimensions and theme repaints leave it alone.
    pub fn graph_rev(&self) -> u64 {
        self.graph_rev
    }

    pub fn preferences(&self) -> Preferences {
        Preferences { theme: self.theme, drawing_settings: self.drawing_settings.clone() }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn on_nodes_change(&mut self, changes: &[NodeChange]) -> Delta {
        let result = apply_node_changes(&self.graph, changes);
        self.graph = result.graph;
        if result.delta.is_empty() {
            return result.delta;
        }
        if alters_design(changes.iter().filter_map(NodeChange::design_item), &result.delta) {
            self.bump_rev();
        }
        self.sync_selection();
        result.delta
    }

    pub fn on_edges_change(&mut self, changes: &[EdgeChange]) -> Delta {
        let result = apply_edge_changes(&self.graph, changes);
        self.graph = result.graph;
        if alters_design(changes.iter().filter_map(EdgeChange::design_item), &result.delta) {
            self.bump_rev();
        }
        result.delta
    }

    /// Adds an edge for `connection` styled with the current edge type and drawing settings.
    pub fn on_connect(&mut self, connection: &Connection) -> Result<EdgeId, CanvasError> {
        let defaults = EdgeDefaults { edge_type: self.edge_type, drawing: &self.drawing_settings };
        let (graph, edge_id) = connect(&self.graph, connection, &defaults)?;
        self.graph = graph;
        self.bump_rev();
        log::debug!("connected {} -> {} as {edge_id}", connection.source, connection.target);
        Ok(edge_id)
    }

    /// Replaces every node. Edges are left as they are.
    pub fn set_nodes(&mut self, nodes: Vec<Node>) {
        self.graph.replace_nodes(nodes);
        self.bump_rev();
        self.sync_selection();
    }

    /// Replaces every edge. Edges whose endpoints are not on the canvas are kept and logged.
    pub fn set_edges(&mut self, edges: Vec<Edge>) {
        for edge in &edges {
            if let Some(missing) = self.graph.missing_endpoint(edge) {
                log::warn!(
                    "edge {} references node {missing} which is not on the canvas",
                    edge.id()
                );
            }
        }
        self.graph.replace_edges(edges);
        self.bump_rev();
    }

    /// Appends `node`, or replaces the node with the same id.
    pub fn add_node(&mut self, node: Node) {
        self.graph.insert_node(node);
        self.bump_rev();
        self.sync_selection();
    }

    /// Drops a palette component at `position` under a fresh id.
    pub fn create_node(&mut self, kind: NodeType, position: Position) -> NodeId {
        let node = Node::create(position, SystemNodeData::from_palette(kind));
        let node_id = node.id().clone();
        self.add_node(node);
        node_id
    }

    /// Removes the node, every edge touching it, and its selection entry.
    ///
    /// Returns `false` when nothing was removed.
    pub fn delete_node(&mut self, node_id: &NodeId) -> bool {
        let (node, edges) = self.graph.remove_node_cascade(node_id);
        let selected = self.selected_nodes.remove(node_id);
        let changed = node.is_some() || !edges.is_empty() || selected;
        if changed {
            self.bump_rev();
        }
        changed
    }

    /// Cascading delete for every selected node; the selection ends up empty.
    pub fn delete_selected_nodes(&mut self) -> usize {
        let selected = std::mem::take(&mut self.selected_nodes);
        let mut removed = 0usize;
        for node_id in &selected {
            let (node, _) = self.graph.remove_node_cascade(node_id);
            if node.is_some() {
                removed += 1;
            }
        }
        if !selected.is_empty() {
            self.bump_rev();
        }
        removed
    }

    /// Loads `problem` and wipes the canvas: nodes, edges, selection and both verdict flags.
    pub fn set_problem(&mut self, problem: Problem) {
        log::info!("loading problem {} ({})", problem.id, problem.title);
        self.current_problem = Some(problem);
        self.graph.clear();
        self.selected_nodes.clear();
        self.is_passed = false;
        self.is_submitted = false;
        self.bump_rev();
    }

    pub fn set_passed(&mut self, passed: bool) {
        self.is_passed = passed;
    }

    pub fn set_submitted(&mut self, submitted: bool) {
        self.is_submitted = submitted;
    }

    /// Path style for edges connected from now on.
    pub fn set_edge_type(&mut self, edge_type: EdgeType) {
        self.edge_type = edge_type;
    }

    /// Flips the theme and repaints every existing edge with the new theme's stroke color.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        let color = self.theme.stroke_color();
        for edge in self.graph.edges_mut() {
            edge.recolor(color);
        }
        self.drawing_settings.stroke_color = color.to_owned();
        self.drawing_settings.fill_color = self.theme.fill_color().to_owned();
        self.persist_preferences();
    }

    /// Merges `patch` into the drawing settings. Existing edges keep their style.
    pub fn update_drawing_settings(&mut self, patch: DrawingSettingsPatch) {
        self.drawing_settings.merge(patch);
        self.persist_preferences();
    }

    /// Empties nodes, edges and selection. Problem and verdict flags stay.
    pub fn clear_canvas(&mut self) {
        self.graph.clear();
        self.selected_nodes.clear();
        self.bump_rev();
    }

    pub fn snapshot(&self) -> DesignSnapshot {
        DesignSnapshot::from(&self.graph)
    }

    /// Replaces nodes and edges with a saved design.
    pub fn load_design(&mut self, design: DesignSnapshot) {
        self.set_nodes(design.nodes);
        self.set_edges(design.edges);
    }

    /// Captures the current design for evaluation against the loaded problem.
    pub fn begin_evaluation(&self, kind: RequestKind) -> Result<PendingEvaluation, CanvasError> {
        let problem = self.current_problem.as_ref().ok_or(CanvasError::NoProblemLoaded)?;
        Ok(PendingEvaluation {
            request: EvaluationRequest { design: self.snapshot(), problem: problem.clone(), kind },
            graph_rev: self.graph_rev,
            problem_id: problem.id.clone(),
        })
    }

    /// Applies a verdict that came back for `pending`.
    ///
    /// The verdict is applied even when the canvas moved on in the meantime; the outcome says
    /// whether that happened.
    pub fn complete_evaluation(
        &mut self,
        pending: &PendingEvaluation,
        result: &AnalysisResult,
    ) -> VerdictOutcome {
        let same_problem =
            self.current_problem.as_ref().is_some_and(|problem| problem.id == pending.problem_id);
        let stale = !same_problem || self.graph_rev != pending.graph_rev;
        if stale {
            log::warn!(
                "verdict for problem {} arrived after the canvas changed (rev {} -> {})",
                pending.problem_id,
                pending.graph_rev,
                self.graph_rev
            );
        }

        if pending.kind() == RequestKind::Hint {
            return VerdictOutcome { stale, applied: false };
        }

        self.is_passed = result.passed();
        self.is_submitted = true;
        VerdictOutcome { stale, applied: true }
    }

    fn bump_rev(&mut self) {
        self.graph_rev = self.graph_rev.wrapping_add(1);
    }

    /// The selection mirrors the `selected` flag of the nodes that exist.
    fn sync_selection(&mut self) {
        self.selected_nodes = self
            .graph
            .nodes()
            .filter(|node| node.selected())
            .map(|node| node.id().clone())
            .collect();
    }

    fn persist_preferences(&self) {
        if let Err(err) = self.sink.save(&self.preferences()) {
            log::warn!("failed to persist preferences: {err}");
        }
    }
}

fn alters_design(mut items: impl Iterator<Item = ChangedItem>, delta: &Delta) -> bool {
    items.any(|item| delta.contains(&item))
}
