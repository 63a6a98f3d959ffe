// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::{Arc, Mutex};

use rstest::rstest;

use crate::model::fixtures::{chain_abc, edge, node, url_shortener, web_stack};
use crate::model::{DesignSnapshot, NodeType};

use super::{
    evaluate_async, parse_reply, strip_code_fences, user_prompt, CompletionClient,
    EvaluationRequest, Evaluator, EvaluatorError, HeuristicEvaluator, LlmEvaluator, Rating,
    RequestKind, Status,
};

fn design_of(node_count: usize, edge_count: usize) -> DesignSnapshot {
    let nodes = (0..node_count)
        .map(|i| node(&format!("n{i}"), NodeType::Microservice))
        .collect::<Vec<_>>();
    let edges = (0..edge_count)
        .map(|i| edge(&format!("e{i}"), "n0", "n0"))
        .collect::<Vec<_>>();
    DesignSnapshot { nodes, edges }
}

fn request(design: DesignSnapshot, kind: RequestKind) -> EvaluationRequest {
    EvaluationRequest { design, problem: url_shortener(), kind }
}

#[rstest]
#[case(8, 7, Status::Pass, Rating::Excellent, 90)]
#[case(7, 6, Status::Pass, Rating::Excellent, 90)]
#[case(7, 5, Status::Fail, Rating::Improving, 65)]
#[case(5, 2, Status::Fail, Rating::Improving, 65)]
#[case(4, 0, Status::Fail, Rating::Improving, 65)]
#[case(3, 9, Status::Fail, Rating::Incomplete, 30)]
#[case(2, 0, Status::Fail, Rating::Incomplete, 30)]
#[case(0, 0, Status::Fail, Rating::Incomplete, 30)]
fn heuristic_buckets(
    #[case] nodes: usize,
    #[case] edges: usize,
    #[case] status: Status,
    #[case] rating: Rating,
    #[case] score: u32,
) {
    let result = HeuristicEvaluator::new()
        .evaluate(&request(design_of(nodes, edges), RequestKind::Evaluate))
        .expect("heuristic never fails");

    assert_eq!(result.status, status);
    assert_eq!(result.rating, Some(rating));
    assert_eq!(result.score, score);
}

#[test]
fn heuristic_suggestions_name_missing_families_only() {
    let design = DesignSnapshot::from(&web_stack());

    let suggestions = HeuristicEvaluator::suggestions(&design);

    assert_eq!(suggestions.len(), 1);
    assert!(suggestions[0].contains("API gateway"));
}

#[test]
fn heuristic_is_deterministic() {
    let evaluator = HeuristicEvaluator::new();
    let req = request(design_of(5, 2), RequestKind::Evaluate);
    assert_eq!(evaluator.evaluate(&req).unwrap(), evaluator.evaluate(&req).unwrap());
}

#[test]
fn heuristic_hint_leads_with_first_missing_family() {
    let result = HeuristicEvaluator::new()
        .evaluate(&request(design_of(2, 0), RequestKind::Hint))
        .unwrap();
    assert!(result.feedback.contains("load balancer"));
}

#[test]
fn request_kind_defaults_to_evaluate() {
    let json = serde_json::json!({
        "design": {"nodes": [], "edges": []},
        "problem": {"id": "p1", "title": "Chat", "difficulty": "Hard"}
    });
    let parsed: EvaluationRequest = serde_json::from_value(json).expect("request");
    assert_eq!(parsed.kind, RequestKind::Evaluate);

    let hint: RequestKind = serde_json::from_str("\"hint\"").unwrap();
    assert_eq!(hint, RequestKind::Hint);
}

#[test]
fn user_prompt_lists_nodes_and_edges() {
    let mut design = DesignSnapshot::from(&chain_abc());
    design.edges[0].set_label(Some("HTTP"));

    let prompt = user_prompt(&url_shortener(), &design);

    assert!(prompt.contains("Title: URL Shortener"));
    assert!(prompt.contains("- 100M new URLs per day"));
    assert!(prompt.contains("- Web Client (Type: CLIENT, ID: A)"));
    assert!(prompt.contains("- A -> B (HTTP)"));
    assert!(prompt.contains("- B -> C\n"));
    assert!(prompt.contains("OUTPUT FORMAT (JSON ONLY)"));
}

#[test]
fn fences_are_stripped() {
    assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```\n"), "{\"a\":1}");
    assert_eq!(strip_code_fences("  plain  "), "plain");
}

#[test]
fn evaluate_reply_must_be_json() {
    let err = parse_reply(RequestKind::Evaluate, "looks fine to me").expect_err("not json");
    assert!(matches!(err, EvaluatorError::InvalidReply { .. }));
}

#[test]
fn hint_reply_falls_back_to_raw_text() {
    let result = parse_reply(RequestKind::Hint, "  Try adding a cache.  ").expect("hint");
    assert_eq!(result.feedback, "Try adding a cache.");
    assert!(result.suggestions.is_empty());
}

#[test]
fn fenced_verdict_parses_and_clamps_score() {
    let reply = "```json\n{\"status\":\"Pass\",\"feedback\":\"ok\",\"score\":140}\n```";
    let result = parse_reply(RequestKind::Evaluate, reply).expect("verdict");
    assert!(result.passed());
    assert_eq!(result.score, 100);
    assert_eq!(result.rating, None);
}

#[rstest]
#[case("87.5", 88)]
#[case("69.4", 69)]
#[case("-5", 0)]
#[case("-0.5", 0)]
#[case("1e3", 100)]
fn fractional_and_negative_scores_round_into_range(#[case] score: &str, #[case] expected: u32) {
    let reply =
        format!(r#"{{"status":"Pass","feedback":"ok","score":{score},"suggestions":[]}}"#);
    let result = parse_reply(RequestKind::Evaluate, &reply).expect("verdict");
    assert_eq!(result.score, expected);
}

#[test]
fn non_numeric_score_is_an_invalid_verdict() {
    let reply = r#"{"status":"Pass","feedback":"ok","score":"high"}"#;
    let err = parse_reply(RequestKind::Evaluate, reply).expect_err("string score");
    assert!(matches!(err, EvaluatorError::InvalidReply { .. }));
}

struct RecordingClient {
    reply: String,
    prompts: Mutex<Vec<(String, String)>>,
}

impl CompletionClient for RecordingClient {
    fn complete(&self, system: &str, user: &str) -> Result<String, EvaluatorError> {
        self.prompts
            .lock()
            .expect("prompts lock")
            .push((system.to_owned(), user.to_owned()));
        Ok(self.reply.clone())
    }
}

struct FailingClient;

impl CompletionClient for FailingClient {
    fn complete(&self, _system: &str, _user: &str) -> Result<String, EvaluatorError> {
        Err(EvaluatorError::Completion("upstream unavailable".to_owned()))
    }
}

#[test]
fn llm_evaluator_sends_both_prompts() {
    let client = RecordingClient {
        reply: r#"{"status":"Fail","feedback":"no cache","score":40,"suggestions":["add redis"]}"#
            .to_owned(),
        prompts: Mutex::new(Vec::new()),
    };
    let evaluator = LlmEvaluator::new(client);

    let result = evaluator
        .evaluate(&request(design_of(1, 0), RequestKind::Evaluate))
        .expect("verdict");

    assert_eq!(result.status, Status::Fail);
    assert_eq!(result.suggestions, vec!["add redis".to_owned()]);
    let prompts = evaluator.client.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].0.contains("Hidden Test Cases"));
    assert!(prompts[0].1.contains("(Type: MICROSERVICE, ID: n0)"));
}

#[test]
fn llm_evaluator_propagates_client_errors() {
    let err = LlmEvaluator::new(FailingClient)
        .evaluate(&request(design_of(1, 0), RequestKind::Evaluate))
        .expect_err("client failure");
    assert!(matches!(err, EvaluatorError::Completion(_)));
}

#[tokio::test]
async fn evaluate_async_runs_off_the_executor() {
    let evaluator: Arc<dyn Evaluator> = Arc::new(HeuristicEvaluator::new());
    let result = evaluate_async(evaluator, request(design_of(8, 7), RequestKind::Evaluate))
        .await
        .expect("verdict");
    assert!(result.passed());
}
