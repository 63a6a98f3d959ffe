// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::error::ApiError;
use crate::model::UserId;

/// Header carrying the caller's id, set by the session layer in front of this server.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated caller. Rejects with 401 when the header is missing or not a valid id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: UserId,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .unwrap_or_default();

        match UserId::new(raw) {
            Ok(user_id) => Ok(Self { user_id }),
            Err(err) => {
                log::debug!("rejecting request without a usable {USER_ID_HEADER}: {err}");
                Err(ApiError::Unauthorized)
            }
        }
    }
}
