// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON API: design evaluation, saved diagrams, submissions and progress.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::config::ServerConfig;
use crate::evaluator::Evaluator;
use crate::store::RecordStore;

pub mod auth;
pub mod error;
mod routers;

pub use auth::{AuthUser, USER_ID_HEADER};
pub use error::ApiError;

pub struct AppState {
    pub records: Mutex<RecordStore>,
    pub evaluator: Arc<dyn Evaluator>,
}

impl AppState {
    pub fn new(records: RecordStore, evaluator: Arc<dyn Evaluator>) -> Self {
        Self { records: Mutex::new(records), evaluator }
    }
}

/// `{ success: true, data?, message? }`, the body of every successful record operation.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl<T> Envelope<T> {
    pub fn data(data: T) -> Self {
        Self { success: true, data: Some(data), message: None }
    }

    pub fn with_message(data: T, message: &'static str) -> Self {
        Self { success: true, data: Some(data), message: Some(message) }
    }
}

impl Envelope<()> {
    pub fn message(message: &'static str) -> Self {
        Self { success: true, data: None, message: Some(message) }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routers::catalog::router(state.clone()))
        .merge(routers::evaluator::router(state.clone()))
        .merge(routers::diagrams::router(state.clone()))
        .merge(routers::submissions::router(state.clone()))
        .merge(routers::progress::router(state))
}

/// Binds `config.bind:config.port` and serves until Ctrl-C.
pub async fn serve(config: &ServerConfig, state: Arc<AppState>) -> std::io::Result<()> {
    let addr = SocketAddr::new(config.bind, config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                log::error!("cannot listen for shutdown signal: {err}");
                std::future::pending::<()>().await;
            }
            log::info!("shutting down");
        })
        .await
}
