// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Router for submitted solutions, scoped to the caller.
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, Router};
use axum::Json;

use crate::http::{ApiError, AppState, AuthUser, Envelope};
use crate::model::SubmissionId;
use crate::store::{NewSubmission, SubmissionPatch, SubmissionRecord};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/submissions", get(list_submissions).post(create_submission))
        .route(
            "/api/submissions/{id}",
            get(get_submission).put(update_submission).delete(delete_submission),
        )
        .with_state(state)
}

fn submission_id(raw: String) -> Result<SubmissionId, ApiError> {
    SubmissionId::new(raw).map_err(|_| ApiError::NotFound("Submission not found".to_owned()))
}

async fn list_submissions(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Json<Envelope<Vec<SubmissionRecord>>> {
    log::debug!("Listing submissions for {}", user.user_id);
    let records = state.records.lock().await;
    Json(Envelope::data(records.list_submissions(&user.user_id)))
}

async fn get_submission(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Envelope<SubmissionRecord>>, ApiError> {
    let id = submission_id(id)?;
    let records = state.records.lock().await;
    Ok(Json(Envelope::data(records.submission(&user.user_id, &id)?)))
}

async fn create_submission(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    body: Result<Json<NewSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<SubmissionRecord>>), ApiError> {
    let Json(new) = body?;
    let mut records = state.records.lock().await;
    let record = records.create_submission(&user.user_id, new)?;
    log::info!("created submission {} for {}", record.id, user.user_id);
    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_message(record, "Submission created successfully")),
    ))
}

async fn update_submission(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
    body: Result<Json<SubmissionPatch>, JsonRejection>,
) -> Result<Json<Envelope<SubmissionRecord>>, ApiError> {
    let id = submission_id(id)?;
    let Json(patch) = body?;
    let mut records = state.records.lock().await;
    let record = records.update_submission(&user.user_id, &id, patch)?;
    Ok(Json(Envelope::with_message(record, "Submission updated successfully")))
}

async fn delete_submission(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Envelope<()>>, ApiError> {
    let id = submission_id(id)?;
    let mut records = state.records.lock().await;
    if !records.delete_submission(&user.user_id, &id)? {
        log::debug!("delete of unknown submission {id} for {}", user.user_id);
    }
    Ok(Json(Envelope::message("Submission deleted successfully")))
}
