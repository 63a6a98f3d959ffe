// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{DesignSnapshot, NodeType};

use super::{
    AnalysisResult, EvaluationRequest, Evaluator, EvaluatorError, Rating, RequestKind, Status,
};

const EXCELLENT_MIN_NODES: usize = 7;
const EXCELLENT_MIN_EDGES: usize = 6;
const IMPROVING_MIN_NODES: usize = 4;

/// Component families a reviewer expects to see, checked in this order.
const FAMILIES: &[(&[NodeType], &str)] = &[
    (
        &[NodeType::Lb],
        "Put a load balancer in front of the application tier to remove the single point of failure.",
    ),
    (&[NodeType::Redis], "Add a cache (Redis/Memcached) in front of the hot read paths."),
    (
        &[NodeType::Kafka, NodeType::PubSub],
        "Add a message queue (Kafka/RabbitMQ) so writes can be processed asynchronously.",
    ),
    (&[NodeType::Cdn, NodeType::Dns], "Serve global users through a CDN and DNS routing."),
    (&[NodeType::ApiGateway], "Route client traffic through an API gateway."),
    (&[NodeType::SqlDb], "Keep relational data in a SQL database."),
];

/// Scores a design from node and edge counts only.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEvaluator;

impl HeuristicEvaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn score(node_count: usize, edge_count: usize) -> (Status, Rating, u32) {
        if node_count >= EXCELLENT_MIN_NODES && edge_count >= EXCELLENT_MIN_EDGES {
            (Status::Pass, Rating::Excellent, 90)
        } else if node_count >= IMPROVING_MIN_NODES {
            (Status::Fail, Rating::Improving, 65)
        } else {
            (Status::Fail, Rating::Incomplete, 30)
        }
    }

    /// One suggestion per missing component family.
    pub fn suggestions(design: &DesignSnapshot) -> Vec<String> {
        FAMILIES
            .iter()
            .filter(|(kinds, _)| !kinds.iter().any(|kind| design.contains_kind(*kind)))
            .map(|(_, text)| (*text).to_owned())
            .collect()
    }
}

fn feedback_for(rating: Rating) -> &'static str {
    match rating {
        Rating::Excellent => {
            "Solid architecture. The core components are present and connected into a coherent data flow."
        }
        Rating::Improving => {
            "Good start! You have the basic components, but the data flow between them is still thin."
        }
        Rating::Incomplete => {
            "Your design seems incomplete. Consider adding a Load Balancer and Database."
        }
    }
}

impl Evaluator for HeuristicEvaluator {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn evaluate(&self, request: &EvaluationRequest) -> Result<AnalysisResult, EvaluatorError> {
        let design = &request.design;
        let (status, rating, score) = Self::score(design.node_count(), design.edge_count());
        let suggestions = Self::suggestions(design);

        let feedback = match (request.kind, suggestions.first()) {
            (RequestKind::Hint, Some(first)) => first.clone(),
            _ => feedback_for(rating).to_owned(),
        };

        Ok(AnalysisResult { status, rating: Some(rating), feedback, score, suggestions })
    }
}
