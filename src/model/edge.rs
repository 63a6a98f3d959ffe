// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ids::{EdgeId, NodeId};

/// Path style used to draw a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum EdgeType {
    #[default]
    #[serde(rename = "default")]
    Bezier,
    #[serde(rename = "straight")]
    Straight,
    #[serde(rename = "step")]
    Step,
    #[serde(rename = "smoothstep")]
    SmoothStep,
    #[serde(rename = "simplebezier")]
    SimpleBezier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    #[default]
    ArrowClosed,
    Arrow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MarkerEnd {
    #[serde(rename = "type", default)]
    pub kind: MarkerKind,
    pub color: String,
}

impl MarkerEnd {
    pub fn arrow_closed(color: impl Into<String>) -> Self {
        Self { kind: MarkerKind::ArrowClosed, color: color.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    pub stroke: String,
    pub stroke_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

/// A directed, styled connection between two nodes.
///
/// `source`/`target` are expected to name nodes in the same graph, but an edge value on its
/// own does not know about the graph; see `Graph` for where that is checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    id: EdgeId,
    source: NodeId,
    target: NodeId,
    #[serde(rename = "type", default)]
    edge_type: EdgeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    style: Option<EdgeStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    marker_end: Option<MarkerEnd>,
    #[serde(default)]
    animated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    selected: bool,
}

impl Edge {
    pub fn new(id: EdgeId, source: NodeId, target: NodeId) -> Self {
        Self {
            id,
            source,
            target,
            edge_type: EdgeType::default(),
            style: None,
            marker_end: None,
            animated: false,
            label: None,
            selected: false,
        }
    }

    pub fn id(&self) -> &EdgeId {
        &self.id
    }

    pub fn source(&self) -> &NodeId {
        &self.source
    }

    pub fn target(&self) -> &NodeId {
        &self.target
    }

    pub fn touches(&self, node_id: &NodeId) -> bool {
        &self.source == node_id || &self.target == node_id
    }

    pub fn edge_type(&self) -> EdgeType {
        self.edge_type
    }

    pub fn set_edge_type(&mut self, edge_type: EdgeType) {
        self.edge_type = edge_type;
    }

    pub fn style(&self) -> Option<&EdgeStyle> {
        self.style.as_ref()
    }

    pub fn set_style(&mut self, style: Option<EdgeStyle>) {
        self.style = style;
    }

    pub fn marker_end(&self) -> Option<&MarkerEnd> {
        self.marker_end.as_ref()
    }

    pub fn set_marker_end(&mut self, marker_end: Option<MarkerEnd>) {
        self.marker_end = marker_end;
    }

    pub fn animated(&self) -> bool {
        self.animated
    }

    pub fn set_animated(&mut self, animated: bool) {
        self.animated = animated;
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label<T: Into<String>>(&mut self, label: Option<T>) {
        self.label = label.map(Into::into);
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn stroke_color(&self) -> Option<&str> {
        self.style.as_ref().map(|style| style.stroke.as_str())
    }

    /// Repaints stroke and arrow head, keeping every other cosmetic field.
    ///
    /// Edges without a style get one with the given color and a 2px stroke; edges without a
    /// marker get a closed arrow.
    pub fn recolor(&mut self, color: &str) {
        match &mut self.style {
            Some(style) => style.stroke = color.to_owned(),
            None => {
                self.style =
                    Some(EdgeStyle { stroke: color.to_owned(), stroke_width: 2.0, opacity: None })
            }
        }
        match &mut self.marker_end {
            Some(marker) => marker.color = color.to_owned(),
            None => self.marker_end = Some(MarkerEnd::arrow_closed(color)),
        }
    }
}
