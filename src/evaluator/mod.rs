// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Design evaluation: request/verdict types, the [`Evaluator`] seam, and its two implementations.
//!
//! [`HeuristicEvaluator`] scores a design from its size alone and is what the server runs by
//! default. [`LlmEvaluator`] renders a prompt and delegates to any [`CompletionClient`].

use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::model::{DesignSnapshot, Problem};

mod heuristic;
mod prompt;

pub use heuristic::HeuristicEvaluator;
pub use prompt::{parse_reply, strip_code_fences, system_prompt, user_prompt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    Hint,
    #[default]
    Evaluate,
}

/// What the canvas sends for evaluation: the current design and the problem it answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EvaluationRequest {
    pub design: DesignSnapshot,
    pub problem: Problem,
    #[serde(rename = "type", default)]
    pub kind: RequestKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Status {
    Pass,
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Rating {
    Excellent,
    Improving,
    Incomplete,
}

/// An evaluator's verdict. `score` is clamped to `0..=100`.
///
/// Models reply with whatever number they like; any JSON number is accepted for `score` and
/// rounded into range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisResult {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    pub feedback: String,
    #[serde(default, deserialize_with = "deserialize_score")]
    #[schemars(range(min = 0, max = 100))]
    pub score: u32,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl AnalysisResult {
    pub fn passed(&self) -> bool {
        self.status == Status::Pass
    }
}

fn deserialize_score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(clamp_score(f64::deserialize(deserializer)?))
}

fn clamp_score(raw: f64) -> u32 {
    if raw.is_nan() {
        return 0;
    }
    // In range after the clamp, so the cast is exact.
    raw.round().clamp(0.0, 100.0) as u32
}

#[derive(Debug, thiserror::Error)]
pub enum EvaluatorError {
    #[error("completion request failed: {0}")]
    Completion(String),
    #[error("model reply is not a valid analysis: {source}")]
    InvalidReply {
        #[source]
        source: serde_json::Error,
    },
    #[error("evaluation task did not complete: {0}")]
    Join(String),
}

pub trait Evaluator: Send + Sync {
    fn name(&self) -> &'static str;

    fn evaluate(&self, request: &EvaluationRequest) -> Result<AnalysisResult, EvaluatorError>;
}

/// Transport to a hosted language model: one system prompt, one user prompt, one text reply.
pub trait CompletionClient: Send + Sync {
    fn complete(&self, system: &str, user: &str) -> Result<String, EvaluatorError>;
}

pub struct LlmEvaluator<C> {
    client: C,
}

impl<C: CompletionClient> LlmEvaluator<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }
}

impl<C: CompletionClient> Evaluator for LlmEvaluator<C> {
    fn name(&self) -> &'static str {
        "llm"
    }

    fn evaluate(&self, request: &EvaluationRequest) -> Result<AnalysisResult, EvaluatorError> {
        let system = system_prompt();
        let user = user_prompt(&request.problem, &request.design);
        let reply = self.client.complete(&system, &user).inspect_err(|err| {
            log::error!("evaluation for problem {} failed: {err}", request.problem.id);
        })?;
        parse_reply(request.kind, &reply)
    }
}

/// Runs `evaluator` on the blocking pool so a slow model call never stalls the executor.
pub async fn evaluate_async(
    evaluator: Arc<dyn Evaluator>,
    request: EvaluationRequest,
) -> Result<AnalysisResult, EvaluatorError> {
    log::debug!(
        "evaluating {} nodes / {} edges with {}",
        request.design.node_count(),
        request.design.edge_count(),
        evaluator.name()
    );
    tokio::task::spawn_blocking(move || evaluator.evaluate(&request))
        .await
        .map_err(|err| EvaluatorError::Join(err.to_string()))?
}

#[cfg(test)]
mod tests;
