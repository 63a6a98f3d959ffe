// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Canvas data model.
//!
//! Nodes (architecture components) and edges (connections) live in a [`Graph`]; problems,
//! theme and drawing settings make up the rest of what the canvas store holds.

pub mod design;
pub mod edge;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod graph;
pub mod ids;
pub mod node;
pub mod problem;
pub mod theme;

pub use design::DesignSnapshot;
pub use edge::{Edge, EdgeStyle, EdgeType, MarkerEnd, MarkerKind};
pub use graph::Graph;
pub use ids::{DiagramId, EdgeId, Id, IdError, NodeId, ProblemId, SubmissionId, UserId};
pub use node::{Node, NodeCategory, NodeType, ParseNodeTypeError, Position, SystemNodeData};
pub use problem::{Difficulty, Problem};
pub use theme::{DrawingSettings, DrawingSettingsPatch, Preferences, Theme};
