// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Router for saved diagrams, scoped to the caller.
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, Router};
use axum::Json;

use crate::http::{ApiError, AppState, AuthUser, Envelope};
use crate::model::DiagramId;
use crate::store::{DiagramPatch, DiagramRecord, NewDiagram};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/diagrams", get(list_diagrams).post(create_diagram))
        .route(
            "/api/diagrams/{id}",
            get(get_diagram).put(update_diagram).delete(delete_diagram),
        )
        .with_state(state)
}

fn diagram_id(raw: String) -> Result<DiagramId, ApiError> {
    DiagramId::new(raw).map_err(|_| ApiError::NotFound("Diagram not found".to_owned()))
}

async fn list_diagrams(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Json<Envelope<Vec<DiagramRecord>>> {
    log::debug!("Listing diagrams for {}", user.user_id);
    let records = state.records.lock().await;
    Json(Envelope::data(records.list_diagrams(&user.user_id)))
}

async fn get_diagram(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Envelope<DiagramRecord>>, ApiError> {
    let id = diagram_id(id)?;
    let records = state.records.lock().await;
    Ok(Json(Envelope::data(records.diagram(&user.user_id, &id)?)))
}

async fn create_diagram(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    body: Result<Json<NewDiagram>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<DiagramRecord>>), ApiError> {
    let Json(new) = body?;
    let mut records = state.records.lock().await;
    let record = records.create_diagram(&user.user_id, new)?;
    log::info!("created diagram {} for {}", record.id, user.user_id);
    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_message(record, "Diagram created successfully")),
    ))
}

async fn update_diagram(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
    body: Result<Json<DiagramPatch>, JsonRejection>,
) -> Result<Json<Envelope<DiagramRecord>>, ApiError> {
    let id = diagram_id(id)?;
    let Json(patch) = body?;
    let mut records = state.records.lock().await;
    let record = records.update_diagram(&user.user_id, &id, patch)?;
    Ok(Json(Envelope::with_message(record, "Diagram updated successfully")))
}

async fn delete_diagram(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Envelope<()>>, ApiError> {
    let id = diagram_id(id)?;
    let mut records = state.records.lock().await;
    if !records.delete_diagram(&user.user_id, &id)? {
        log::debug!("delete of unknown diagram {id} for {}", user.user_id);
    }
    Ok(Json(Envelope::message("Diagram deleted successfully")))
}
