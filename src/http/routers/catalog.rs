// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Router for static, unauthenticated endpoints: health, component palette, schemas.
use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, Router};
use axum::Json;
use chrono::Utc;
use schemars::schema_for;
use serde::Serialize;
use serde_json::{json, Value};

use crate::evaluator::{AnalysisResult, EvaluationRequest};
use crate::http::AppState;
use crate::model::NodeType;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/components", get(components))
        .route("/api/schema/evaluation-request", get(evaluation_request_schema))
        .route("/api/schema/analysis-result", get(analysis_result_schema))
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct ComponentEntry {
    #[serde(rename = "type")]
    kind: NodeType,
    label: &'static str,
    category: &'static str,
}

async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    let records = match state.records.lock().await.path() {
        Some(_) => "file",
        None => "memory",
    };
    Json(json!({
        "success": true,
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "services": {
            "evaluator": state.evaluator.name(),
            "records": records,
        },
    }))
}

async fn components() -> Json<Vec<ComponentEntry>> {
    log::debug!("Fetching component catalog");
    Json(
        NodeType::ALL
            .iter()
            .map(|kind| ComponentEntry {
                kind: *kind,
                label: kind.default_label(),
                category: kind.category().label(),
            })
            .collect(),
    )
}

async fn evaluation_request_schema() -> Json<schemars::Schema> {
    log::debug!("Fetching evaluation request schema");
    Json(schema_for!(EvaluationRequest))
}

async fn analysis_result_schema() -> Json<schemars::Schema> {
    log::debug!("Fetching analysis result schema");
    Json(schema_for!(AnalysisResult))
}
