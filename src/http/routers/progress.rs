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
use axum::routing::{get, Router};
use axum::Json;
use serde::Deserialize;

use crate::http::{ApiError, AppState, AuthUser, Envelope};
use crate::model::ProblemId;
use crate::store::ProgressSummary;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/user/progress", get(get_progress).post(mark_solved))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MarkSolvedBody {
    #[serde(default)]
    question_id: Option<String>,
}

async fn get_progress(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Json<Envelope<ProgressSummary>> {
    let records = state.records.lock().await;
    Json(Envelope::data(records.progress(&user.user_id)))
}

async fn mark_solved(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    body: Result<Json<MarkSolvedBody>, JsonRejection>,
) -> Result<Json<Envelope<ProgressSummary>>, ApiError> {
    let Json(body) = body?;
    let question_id = body
        .question_id
        .and_then(|raw| ProblemId::new(raw).ok())
        .ok_or_else(|| ApiError::BadRequest("Question ID is required".to_owned()))?;

    let mut records = state.records.lock().await;
    if records.mark_solved(&user.user_id, &question_id)? {
        log::info!("{} solved {question_id}", user.user_id);
    }
    Ok(Json(Envelope::with_message(
        records.progress(&user.user_id),
        "Progress updated successfully",
    )))
}
