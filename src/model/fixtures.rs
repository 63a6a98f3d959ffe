// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::edge::Edge;
use super::graph::Graph;
use super::ids::{EdgeId, NodeId, ProblemId};
use super::node::{Node, NodeType, Position, SystemNodeData};
use super::problem::{Difficulty, Problem};

pub(crate) fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

pub(crate) fn eid(value: &str) -> EdgeId {
    EdgeId::new(value).expect("edge id")
}

pub(crate) fn node(id: &str, kind: NodeType) -> Node {
    Node::new(nid(id), Position::default(), SystemNodeData::from_palette(kind))
}

pub(crate) fn edge(id: &str, source: &str, target: &str) -> Edge {
    Edge::new(eid(id), nid(source), nid(target))
}

/// `A -> B -> C`.
pub(crate) fn chain_abc() -> Graph {
    Graph::from_parts(
        [
            node("A", NodeType::Client),
            node("B", NodeType::WebServer),
            node("C", NodeType::SqlDb),
        ],
        [edge("ab", "A", "B"), edge("bc", "B", "C")],
    )
}

/// A seven component web stack with six connections.
pub(crate) fn web_stack() -> Graph {
    Graph::from_parts(
        [
            node("client", NodeType::Client),
            node("cdn", NodeType::Cdn),
            node("lb", NodeType::Lb),
            node("api", NodeType::WebServer),
            node("cache", NodeType::Redis),
            node("db", NodeType::SqlDb),
            node("queue", NodeType::Kafka),
        ],
        [
            edge("client-cdn", "client", "cdn"),
            edge("cdn-lb", "cdn", "lb"),
            edge("lb-api", "lb", "api"),
            edge("api-cache", "api", "cache"),
            edge("api-db", "api", "db"),
            edge("api-queue", "api", "queue"),
        ],
    )
}

pub(crate) fn url_shortener() -> Problem {
    let mut problem = Problem::new(
        ProblemId::new("url-shortener").expect("problem id"),
        "URL Shortener",
        Difficulty::Medium,
    );
    problem.description = "Design a service that turns long URLs into short aliases.".to_owned();
    problem.requirements = vec!["Redirect in under 50ms".to_owned()];
    problem.constraints =
        vec!["100M new URLs per day".to_owned(), "10:1 read/write ratio".to_owned()];
    problem
}
