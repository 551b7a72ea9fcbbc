//! Admin gate.
//!
//! Gift management, reservation listings and the summary are restricted to
//! callers presenting the configured admin key in `X-Admin-Key`.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use shared::crypto::secrets_match;

use crate::app::AppState;
use crate::error::ApiError;

/// Header carrying the admin key.
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Rejects requests without a matching `X-Admin-Key` with 401.
///
/// Passes everything through when no admin key is configured.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let security = &state.config.security;
    if !security.admin_gate_enabled() {
        return next.run(req).await;
    }

    let authorized = req
        .headers()
        .get(ADMIN_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|key| secrets_match(key, &security.admin_key));

    match authorized {
        Some(true) => next.run(req).await,
        Some(false) => {
            tracing::warn!(path = %req.uri().path(), "Rejected admin request with wrong key");
            ApiError::Unauthorized("Invalid admin key".into()).into_response()
        }
        None => ApiError::Unauthorized("Admin key required".into()).into_response(),
    }
}
