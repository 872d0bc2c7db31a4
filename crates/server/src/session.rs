// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session extraction for mutating endpoints.
//!
//! The depot holds a single session. Handlers that change depot state take
//! an [`ActiveSession`], so a request without a logged-in user is turned
//! away before the API layer runs.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use kmrl_ragi::LOGIN_PATH;
use kmrl_ragi_domain::Session;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::AppState;

/// The logged-in user, cloned out of the depot state.
pub struct ActiveSession(pub Session);

impl FromRequestParts<AppState> for ActiveSession {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let depot = state.depot.lock().await;
        let session: Session = depot
            .session()
            .filter(|session| session.authenticated)
            .cloned()
            .ok_or_else(|| {
                warn!(path = %parts.uri.path(), "Rejected request without a session");
                SessionError::NotLoggedIn
            })?;
        drop(depot);

        debug!(
            username = %session.username,
            role = %session.role,
            "Session found"
        );

        Ok(Self(session))
    }
}

/// Body returned when no session exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionErrorResponse {
    pub error: bool,
    pub message: String,
    pub redirect_to: String,
}

/// Session extraction errors.
#[derive(Debug)]
pub enum SessionError {
    /// No user is logged in.
    NotLoggedIn,
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let message: &str = match self {
            Self::NotLoggedIn => "Not logged in",
        };
        (
            StatusCode::UNAUTHORIZED,
            Json(SessionErrorResponse {
                error: true,
                message: message.to_string(),
                redirect_to: LOGIN_PATH.to_string(),
            }),
        )
            .into_response()
    }
}
