// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt::Write as _;

use crate::model::{DesignSnapshot, Problem};

use super::{AnalysisResult, EvaluatorError, RequestKind, Status};

const SYSTEM_PROMPT: &str = "\
You are a Senior System Architect and Interviewer at a top-tier tech company.
Your task is to evaluate a candidate's system design diagram (provided as JSON metadata).

Evaluation Criteria:
1. Scalability: Can the system handle the specified RPS/DAU?
2. Availability: Are there single points of failure (SPOF)?
3. Performance: Is latency optimized (caching, CDN, etc.)?
4. Correctness: Do the components and data flows make sense for the problem?

Hidden Test Cases to check:
- If high read volume: Is there a Cache (Redis/Memcached)?
- If high write volume: Is there a Message Queue (Kafka/RabbitMQ) for async processing?
- If global users: Is there a CDN and DNS?
- If microservices: Is there an API Gateway?
- If relational data: Is a SQL DB used?

You MUST be strict. If a critical component for the specific constraints is missing, the status must be 'Fail'.";

const OUTPUT_FORMAT: &str = r#"OUTPUT FORMAT (JSON ONLY):
{
  "status": "Pass" | "Fail",
  "feedback": "Detailed critique explaining why it passed or failed...",
  "score": 0-100,
  "suggestions": ["specific improvement 1", "specific improvement 2"]
}
"#;

pub fn system_prompt() -> String {
    SYSTEM_PROMPT.to_owned()
}

pub fn user_prompt(problem: &Problem, design: &DesignSnapshot) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "PROBLEM TO SOLVE:");
    let _ = writeln!(out, "Title: {}", problem.title);
    let _ = writeln!(out, "Description: {}", problem.description);
    let _ = writeln!(out, "Requirements:");
    for requirement in &problem.requirements {
        let _ = writeln!(out, "- {requirement}");
    }
    let _ = writeln!(out, "Constraints:");
    for constraint in &problem.constraints {
        let _ = writeln!(out, "- {constraint}");
    }

    let _ = writeln!(out, "\nCANDIDATE'S DESIGN METADATA:\nNodes:");
    for node in &design.nodes {
        let _ = writeln!(
            out,
            "- {} (Type: {}, ID: {})",
            node.data().label(),
            node.kind(),
            node.id()
        );
    }
    let _ = writeln!(out, "\nEdges (Data Flow):");
    for edge in &design.edges {
        match edge.label() {
            Some(label) => {
                let _ = writeln!(out, "- {} -> {} ({label})", edge.source(), edge.target());
            }
            None => {
                let _ = writeln!(out, "- {} -> {}", edge.source(), edge.target());
            }
        }
    }

    let _ = writeln!(out, "\nTASK:");
    let _ = writeln!(out, "Analyze the design against the requirements and constraints.");
    let _ = writeln!(
        out,
        "Provide a status of 'Pass' ONLY if the design is robust, scalable, and has no major flaws.\n"
    );
    out.push_str(OUTPUT_FORMAT);
    out
}

/// Removes markdown code fences (```` ```json ```` and ```` ``` ````) and surrounding whitespace.
pub fn strip_code_fences(reply: &str) -> String {
    reply.replace("```json", "").replace("```", "").trim().to_owned()
}

/// Parses a model reply.
///
/// Evaluations require a JSON verdict. Hints accept anything: a reply that is not a verdict
/// becomes the hint text verbatim.
pub fn parse_reply(kind: RequestKind, reply: &str) -> Result<AnalysisResult, EvaluatorError> {
    let cleaned = strip_code_fences(reply);
    match serde_json::from_str::<AnalysisResult>(&cleaned) {
        Ok(result) => Ok(result),
        Err(source) if kind == RequestKind::Hint => {
            log::debug!("hint reply is not JSON ({source}), using raw text");
            Ok(AnalysisResult {
                status: Status::Fail,
                rating: None,
                feedback: cleaned,
                score: 0,
                suggestions: Vec::new(),
            })
        }
        Err(source) => {
            log::error!("model reply could not be parsed: {source}");
            Err(EvaluatorError::InvalidReply { source })
        }
    }
}
