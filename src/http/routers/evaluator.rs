// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{post, Router};
use axum::Json;
use serde::Deserialize;

use crate::evaluator::{evaluate_async, AnalysisResult, EvaluationRequest, RequestKind};
use crate::http::{ApiError, AppState};
use crate::model::{DesignSnapshot, Problem};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().route("/api/ai-evaluator", post(evaluate)).with_state(state)
}

/// Both parts are optional on the wire so a missing one is a 400 with a readable message.
#[derive(Debug, Deserialize)]
struct EvaluateBody {
    #[serde(default)]
    design: Option<DesignSnapshot>,
    #[serde(default)]
    problem: Option<Problem>,
    #[serde(rename = "type", default)]
    kind: RequestKind,
}

async fn evaluate(
    State(state): State<Arc<AppState>>,
    body: Result<Json<EvaluateBody>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(body) = body?;
    let (Some(design), Some(problem)) = (body.design, body.problem) else {
        return Err(ApiError::BadRequest("Missing design or problem data".to_owned()));
    };

    let request = EvaluationRequest { design, problem, kind: body.kind };
    match evaluate_async(state.evaluator.clone(), request).await {
        Ok(result) => Ok(Json(result)),
        Err(err) => {
            log::error!("evaluation failed: {err}");
            Err(ApiError::Internal("Failed to evaluate design".to_owned()))
        }
    }
}
